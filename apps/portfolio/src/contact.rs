//! Contact form relay.
//!
//! Forwards a submitted form to the hosted form endpoint. One attempt, no
//! retry; the outcome is reported to the visitor as one of two messages.

use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

pub const SENT_MESSAGE: &str = "Message sent successfully!";
pub const FAILED_MESSAGE: &str = "Oops! There was a problem submitting your form";

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("form endpoint rejected submission (status {0})")]
    Rejected(u16),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone)]
pub struct ContactClient {
    http: Client,
    endpoint: String,
}

impl ContactClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub async fn submit(&self, form: &ContactForm) -> Result<(), ContactError> {
        let response = self
            .http
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .form(form)
            .send()
            .await
            .map_err(|e| {
                warn!("Contact form transport error: {e}");
                ContactError::Http(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Contact form endpoint returned {status}");
            return Err(ContactError::Rejected(status.as_u16()));
        }

        info!("Contact form relayed");
        Ok(())
    }
}
