//! Application state and core logic

use crate::config::ContactConfig;
use crate::relay::RelayClient;
use crate::state::{ContactForm, Dispatcher, SubmissionStatus, SubmitOutcome};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;

/// Main application struct
pub struct App {
    /// Contact form being edited
    pub form: ContactForm,
    /// Runs relay calls for the form
    pub dispatcher: Dispatcher,
    /// Effective configuration
    pub config: ContactConfig,
    /// Whether the app should quit
    quit: bool,
    /// Copy/save feedback message
    pub copy_message: Option<String>,
    /// Frame counter driving the send spinner
    pub tick: usize,
}

impl App {
    /// Create a new App instance
    pub fn new(config: ContactConfig, relay: Arc<dyn RelayClient>) -> Self {
        let dispatcher = Dispatcher::new(relay, config.relay_settings());
        Self {
            form: ContactForm::new(),
            dispatcher,
            config,
            quit: false,
            copy_message: None,
            tick: 0,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.copy_message = None;
        let on_send_row = self.form.is_send_row_active();

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form.prev_field(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit();
            }
            KeyCode::Char('y') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                self.copy_owner_email();
            }
            KeyCode::Char('o') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.save_config();
            }
            KeyCode::Enter if on_send_row => {
                self.submit();
            }
            KeyCode::Enter => {
                if self.form.active_field().is_some_and(|f| f.is_multiline()) {
                    self.form.insert_newline();
                } else {
                    self.form.next_field();
                }
            }
            // Form field input (only when not on the Send row)
            KeyCode::Char(c)
                if !on_send_row
                    && !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.form.input_char(c);
            }
            KeyCode::Backspace if !on_send_row => self.form.backspace(),
            _ => {}
        }
    }

    /// Handle bracketed paste
    pub fn handle_paste(&mut self, text: &str) {
        self.form.paste(text);
    }

    /// Trigger a submission; a no-op while one is in flight
    pub fn submit(&mut self) -> SubmitOutcome {
        self.dispatcher.submit(&mut self.form)
    }

    /// Apply a finished relay call, if any
    pub async fn poll_submission(&mut self) -> Option<SubmissionStatus> {
        self.dispatcher.poll(&mut self.form).await
    }

    /// Block until an in-flight submission completes
    pub async fn finish_pending(&mut self) -> Option<SubmissionStatus> {
        self.dispatcher.wait(&mut self.form).await
    }

    fn copy_owner_email(&mut self) {
        let email = self.config.owner.email.clone();
        self.copy_message = Some(match self.copy_to_clipboard(&email) {
            Ok(()) => format!("Copied {email}"),
            Err(err) => {
                tracing::warn!(error = %err, "Clipboard unavailable");
                "Clipboard unavailable".to_string()
            }
        });
    }

    fn save_config(&mut self) {
        self.copy_message = Some(match self.config.save() {
            Ok(path) => format!("Config saved to {}", path.display()),
            Err(err) => {
                tracing::warn!(error = %err, "Failed to save config");
                "Failed to save config".to_string()
            }
        });
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::{MockRelayClient, RelayError, RelayResponse, TemplateParams};
    use crate::state::Field;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn app_with(relay: impl RelayClient + 'static) -> App {
        App::new(ContactConfig::default(), Arc::new(relay))
    }

    /// Fill all four fields through the keyboard, leaving focus on the Send row
    fn fill_valid(app: &mut App) {
        type_text(app, "Ada Lovelace");
        app.handle_key(key(KeyCode::Tab));
        type_text(app, "ada@example.com");
        app.handle_key(key(KeyCode::Tab));
        type_text(app, "Project inquiry");
        app.handle_key(key(KeyCode::Tab));
        type_text(app, "I would like to talk about a project.");
        app.handle_key(key(KeyCode::Tab));
    }

    struct CountingRelay {
        calls: Arc<AtomicUsize>,
        release: Arc<Notify>,
    }

    #[async_trait]
    impl RelayClient for CountingRelay {
        async fn send(
            &self,
            _service_id: &str,
            _template_id: &str,
            _params: &TemplateParams,
            _public_key: &str,
        ) -> Result<RelayResponse, RelayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.release.notified().await;
            Ok(RelayResponse {
                status: 200,
                text: "OK".to_string(),
            })
        }
    }

    mod keyboard {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_fills_fields_in_order() {
            let mut app = app_with(MockRelayClient::new());
            fill_valid(&mut app);
            let fields = app.form.fields();
            assert_eq!(fields.name, "Ada Lovelace");
            assert_eq!(fields.email, "ada@example.com");
            assert_eq!(fields.subject, "Project inquiry");
            assert_eq!(fields.message, "I would like to talk about a project.");
            assert!(app.form.is_send_row_active());
        }

        #[test]
        fn test_enter_moves_to_next_single_line_field() {
            let mut app = app_with(MockRelayClient::new());
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(app.form.active_field(), Some(Field::Email));
        }

        #[test]
        fn test_enter_in_message_adds_newline() {
            let mut app = app_with(MockRelayClient::new());
            app.form.active_field_index = Field::Message.index();
            type_text(&mut app, "hi");
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(app.form.fields().message, "hi\n");
        }

        #[test]
        fn test_backspace_edits_active_field() {
            let mut app = app_with(MockRelayClient::new());
            type_text(&mut app, "Bobb");
            app.handle_key(key(KeyCode::Backspace));
            assert_eq!(app.form.fields().name, "Bob");
        }

        #[test]
        fn test_chars_on_send_row_are_ignored() {
            let mut app = app_with(MockRelayClient::new());
            app.handle_key(key(KeyCode::BackTab));
            assert!(app.form.is_send_row_active());
            type_text(&mut app, "xyz");
            assert!(app.form.fields().is_empty());
        }

        #[test]
        fn test_control_chars_are_not_typed() {
            let mut app = app_with(MockRelayClient::new());
            app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
            assert_eq!(app.form.fields().name, "");
        }

        #[test]
        fn test_shifted_chars_are_typed() {
            let mut app = app_with(MockRelayClient::new());
            app.handle_key(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT));
            assert_eq!(app.form.fields().name, "A");
        }

        #[test]
        fn test_paste_goes_to_active_field() {
            let mut app = app_with(MockRelayClient::new());
            app.handle_key(key(KeyCode::Tab));
            app.handle_paste("ada@example.com");
            assert_eq!(app.form.fields().email, "ada@example.com");
        }

        #[test]
        fn test_escape_quits() {
            let mut app = app_with(MockRelayClient::new());
            assert!(!app.should_quit());
            app.handle_key(key(KeyCode::Esc));
            assert!(app.should_quit());
        }

        #[test]
        fn test_on_tick_advances_counter() {
            let mut app = app_with(MockRelayClient::new());
            app.on_tick();
            app.on_tick();
            assert_eq!(app.tick, 2);
        }
    }

    mod submitting {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_submit_empty_form_shows_errors_without_relay_call() {
            let mut relay = MockRelayClient::new();
            relay.expect_send().times(0);
            let mut app = app_with(relay);

            app.handle_key(ctrl('s'));

            assert_eq!(app.form.errors().len(), 4);
            assert!(!app.form.is_submitting());
            assert!(!app.dispatcher.is_in_flight());
        }

        #[tokio::test]
        async fn test_retyping_clears_only_that_error() {
            let mut relay = MockRelayClient::new();
            relay.expect_send().times(0);
            let mut app = app_with(relay);

            app.handle_key(ctrl('s'));
            type_text(&mut app, "B");

            assert!(!app.form.errors().contains(Field::Name));
            assert_eq!(app.form.errors().len(), 3);
        }

        #[tokio::test]
        async fn test_enter_on_send_row_relays_and_resets() {
            let mut relay = MockRelayClient::new();
            relay
                .expect_send()
                .withf(|_, _, params, _| params.to_email == "sin16405@sheridancollege.ca")
                .times(1)
                .returning(|_, _, _, _| {
                    Ok(RelayResponse {
                        status: 200,
                        text: "OK".to_string(),
                    })
                });
            let mut app = app_with(relay);
            fill_valid(&mut app);

            app.handle_key(key(KeyCode::Enter));
            assert!(app.form.is_submitting());

            assert_eq!(app.finish_pending().await, Some(SubmissionStatus::Success));
            assert!(app.form.fields().is_empty());
            assert!(!app.form.is_submitting());
        }

        #[tokio::test]
        async fn test_failed_relay_keeps_typed_message() {
            let mut relay = MockRelayClient::new();
            relay.expect_send().times(1).returning(|_, _, _, _| {
                Err(RelayError::Rejected {
                    status: 412,
                    body: "API calls are disabled for non-browser applications".to_string(),
                })
            });
            let mut app = app_with(relay);
            fill_valid(&mut app);

            app.handle_key(ctrl('s'));
            assert_eq!(app.finish_pending().await, Some(SubmissionStatus::Error));
            assert_eq!(app.form.fields().name, "Ada Lovelace");
            assert_eq!(
                app.form.fields().message,
                "I would like to talk about a project."
            );
        }

        #[tokio::test]
        async fn test_rapid_double_submit_relays_once() {
            let calls = Arc::new(AtomicUsize::new(0));
            let release = Arc::new(Notify::new());
            let mut app = app_with(CountingRelay {
                calls: calls.clone(),
                release: release.clone(),
            });
            fill_valid(&mut app);

            assert!(matches!(app.submit(), SubmitOutcome::Dispatched(_)));
            app.handle_key(ctrl('s'));
            app.handle_key(key(KeyCode::Enter));
            assert!(app.form.is_submitting());

            release.notify_one();
            assert_eq!(app.finish_pending().await, Some(SubmissionStatus::Success));
            assert_eq!(calls.load(Ordering::SeqCst), 1);
        }

        #[test]
        fn test_poll_submission_is_quiet_when_idle() {
            let mut app = app_with(MockRelayClient::new());
            assert_eq!(tokio_test::block_on(app.poll_submission()), None);
            assert_eq!(tokio_test::block_on(app.finish_pending()), None);
            assert_eq!(app.form.status(), SubmissionStatus::Idle);
        }
    }
}
