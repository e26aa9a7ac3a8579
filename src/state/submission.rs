//! Submission dispatcher
//!
//! Runs the relay call for a validated form on a background task so the UI
//! keeps drawing while the message is in flight, then feeds the outcome back
//! into the form.

use super::forms::{ContactForm, SubmissionStatus, SubmitAttempt};
use crate::relay::{RelayClient, RelayError, RelayResponse, TemplateParams};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};
use uuid::Uuid;

/// Fixed identifiers sent with every relay call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelaySettings {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    /// Owner address every message is delivered to
    pub to_email: String,
}

/// What a submit trigger did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Relay call started for this submission id
    Dispatched(Uuid),
    /// Validation failed, errors are on the form
    Invalid,
    /// A submission was already in flight
    Ignored,
}

struct InFlight {
    id: Uuid,
    handle: JoinHandle<Result<RelayResponse, RelayError>>,
}

/// Orchestrates validate → send → status for one form
pub struct Dispatcher {
    relay: Arc<dyn RelayClient>,
    settings: RelaySettings,
    in_flight: Option<InFlight>,
}

impl Dispatcher {
    pub fn new(relay: Arc<dyn RelayClient>, settings: RelaySettings) -> Self {
        Self {
            relay,
            settings,
            in_flight: None,
        }
    }

    pub fn settings(&self) -> &RelaySettings {
        &self.settings
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Handle a submit trigger
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit(&mut self, form: &mut ContactForm) -> SubmitOutcome {
        let fields = match form.try_begin_submit() {
            SubmitAttempt::AlreadySubmitting => {
                debug!("Submit ignored, a message is already being sent");
                return SubmitOutcome::Ignored;
            }
            SubmitAttempt::Invalid => {
                let invalid: Vec<&str> = form.errors().iter().map(|(f, _)| f.key()).collect();
                debug!(fields = ?invalid, "Contact form failed validation");
                return SubmitOutcome::Invalid;
            }
            SubmitAttempt::Ready(fields) => fields,
        };

        let id = Uuid::new_v4();
        let params = TemplateParams::from_fields(&fields, &self.settings.to_email);
        let relay = Arc::clone(&self.relay);
        let settings = self.settings.clone();

        info!(submission_id = %id, "Dispatching contact message");

        let handle = tokio::spawn(async move {
            relay
                .send(
                    &settings.service_id,
                    &settings.template_id,
                    &params,
                    &settings.public_key,
                )
                .await
        });

        self.in_flight = Some(InFlight { id, handle });
        SubmitOutcome::Dispatched(id)
    }

    /// Apply the relay outcome if the in-flight call has finished
    ///
    /// Returns the new status when a submission completed on this call.
    pub async fn poll(&mut self, form: &mut ContactForm) -> Option<SubmissionStatus> {
        let finished = self
            .in_flight
            .as_ref()
            .is_some_and(|in_flight| in_flight.handle.is_finished());
        if !finished {
            return None;
        }
        self.wait(form).await
    }

    /// Wait for the in-flight call, if any, and apply its outcome
    pub async fn wait(&mut self, form: &mut ContactForm) -> Option<SubmissionStatus> {
        let in_flight = self.in_flight.take()?;
        let result = match in_flight.handle.await {
            Ok(result) => result,
            Err(join_err) => Err(RelayError::Aborted(join_err.to_string())),
        };
        Some(Self::complete(form, in_flight.id, result))
    }

    fn complete(
        form: &mut ContactForm,
        id: Uuid,
        result: Result<RelayResponse, RelayError>,
    ) -> SubmissionStatus {
        match result {
            Ok(response) => {
                info!(
                    submission_id = %id,
                    status = response.status,
                    response = %response.text,
                    "Contact message relayed"
                );
                form.finish_submit(true)
            }
            Err(err) => {
                error!(submission_id = %id, error = %err, "Failed to relay contact message");
                form.finish_submit(false)
            }
        }
    }
}
