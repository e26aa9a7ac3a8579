//! EmailJS REST client
//!
//! Sends template parameters to the EmailJS `email/send` endpoint. The
//! EmailJS account must have "Allow EmailJS API for non-browser
//! applications" enabled for requests from this client to be accepted.

use super::{RelayClient, RelayError, RelayResponse, TemplateParams};
use crate::config::EmailJsConfig;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

/// Path of the send endpoint, relative to the API base URL
const SEND_PATH: &str = "/api/v1.0/email/send";

/// Upper bound enforced by the HTTP client on a single send
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// JSON body accepted by the EmailJS send endpoint
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
}

/// Client for the EmailJS mail relay
pub struct EmailJsClient {
    http: reqwest::Client,
    api_url: String,
    access_token: Option<String>,
}

impl EmailJsClient {
    /// Create a new client from the relay configuration
    pub fn new(config: &EmailJsConfig) -> Result<Self, RelayError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self::with_http(http, config))
    }

    fn with_http(http: reqwest::Client, config: &EmailJsConfig) -> Self {
        Self {
            http,
            api_url: config.api_url.clone(),
            access_token: config.access_token.clone().filter(|t| !t.is_empty()),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.api_url.trim_end_matches('/'), SEND_PATH)
    }
}

#[async_trait]
impl RelayClient for EmailJsClient {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &TemplateParams,
        public_key: &str,
    ) -> Result<RelayResponse, RelayError> {
        let body = SendRequest {
            service_id,
            template_id,
            user_id: public_key,
            template_params: params,
            access_token: self.access_token.as_deref(),
        };

        tracing::debug!(endpoint = %self.endpoint(), "Sending message to EmailJS");

        let response = self.http.post(self.endpoint()).json(&body).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            Ok(RelayResponse {
                status: status.as_u16(),
                text,
            })
        } else {
            Err(RelayError::Rejected {
                status: status.as_u16(),
                body: text,
            })
        }
    }
}
