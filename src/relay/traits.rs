//! Trait abstraction for the mail relay to enable mocking in tests

use super::RelayError;
use crate::state::FormFields;
use async_trait::async_trait;
use serde::Serialize;

/// Template parameters handed to the relay for one message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    pub to_email: String,
}

impl TemplateParams {
    /// Build the parameters for a validated field snapshot
    pub fn from_fields(fields: &FormFields, to_email: &str) -> Self {
        Self {
            from_name: fields.name.clone(),
            from_email: fields.email.clone(),
            subject: fields.subject.clone(),
            message: fields.message.clone(),
            to_email: to_email.to_string(),
        }
    }
}

/// What the relay answered on success
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayResponse {
    pub status: u16,
    pub text: String,
}

/// A service that delivers a templated email on the caller's behalf
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RelayClient: Send + Sync {
    /// Send one message. Exactly one attempt, no retries.
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &TemplateParams,
        public_key: &str,
    ) -> Result<RelayResponse, RelayError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_from_fields_maps_every_key() {
        let fields = FormFields {
            name: "Al".to_string(),
            email: "al@x.com".to_string(),
            subject: "Hi there".to_string(),
            message: "A message long enough".to_string(),
        };
        let params = TemplateParams::from_fields(&fields, "owner@example.com");

        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "from_name": "Al",
                "from_email": "al@x.com",
                "subject": "Hi there",
                "message": "A message long enough",
                "to_email": "owner@example.com",
            })
        );
    }
}
