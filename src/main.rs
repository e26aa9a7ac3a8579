//! Folio Contact - terminal contact form for a personal portfolio
//!
//! A Ratatui-based TUI that validates a contact message and delivers it
//! to the portfolio owner through the EmailJS mail relay.

mod app;
mod config;
mod platform;
mod relay;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::ContactConfig;
use crossterm::{
    event::{
        self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use directories::ProjectDirs;
use ratatui::{backend::CrosstermBackend, Terminal};
use relay::EmailJsClient;
use std::fs::{self, File};
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Poll interval while a message is being sent, keeps the spinner moving
const BUSY_POLL: Duration = Duration::from_millis(80);
const IDLE_POLL: Duration = Duration::from_millis(250);

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let config = ContactConfig::load()?;
    let relay = EmailJsClient::new(&config.emailjs)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config, Arc::new(relay));
    let settings = app.dispatcher.settings();
    tracing::info!(
        service_id = %settings.service_id,
        to_email = %settings.to_email,
        "Contact form starting"
    );
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    // A message already handed to the relay is allowed to finish
    if app.dispatcher.is_in_flight() {
        eprintln!("Waiting for the message in flight to finish...");
        if let Some(status) = app.finish_pending().await {
            tracing::info!(?status, "Submission finished during shutdown");
        }
    }

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Log to a file in the data directory; the terminal belongs to the UI.
/// Falls back to stderr when no data directory is available.
fn init_logging() {
    let writer = log_file()
        .map(|file| BoxMakeWriter::new(Mutex::new(file)))
        .unwrap_or_else(|| BoxMakeWriter::new(io::stderr));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_contact=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer),
        )
        .init();
}

fn log_file() -> Option<File> {
    let dirs = ProjectDirs::from("dev", "folio", "folio-contact")?;
    let dir = dirs.data_dir();
    fs::create_dir_all(dir).ok()?;
    File::options()
        .create(true)
        .append(true)
        .open(dir.join("folio-contact.log"))
        .ok()
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Apply a finished relay call before drawing
        app.poll_submission().await;

        terminal.draw(|frame| ui::draw(frame, app))?;

        let poll_duration = if app.form.is_submitting() {
            BUSY_POLL
        } else {
            IDLE_POLL
        };

        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }

                    app.handle_key(key);
                }
                Event::Paste(text) => app.handle_paste(&text),
                Event::Resize(_width, _height) => {
                    // Layout is recalculated on next draw
                }
                _ => {}
            }
        } else {
            app.on_tick();
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
