use async_trait::async_trait;
use futures::future::{self, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::debug;
use thiserror::Error;

use super::form::ContactFormInput;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SinkError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("sink answered with status {0}")]
    Status(u16),
    #[error("no response within {0} ms")]
    Timeout(u32),
}

/// One lead as it goes over the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeadRequest {
    pub endpoint: String,
    pub token: String,
    pub page: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub company: String,
}

impl LeadRequest {
    pub fn new(endpoint: &str, token: &str, page: &str, lead: ContactFormInput) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            token: token.to_string(),
            page: page.to_string(),
            name: lead.name,
            email: lead.email,
            phone: lead.phone,
            message: lead.message,
            company: lead.company,
        }
    }

    pub fn query_pairs(&self) -> [(&'static str, &str); 7] {
        [
            ("token", &self.token),
            ("page", &self.page),
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("message", &self.message),
            ("company", &self.company),
        ]
    }

    /// The sheet web app takes everything in the query string of a plain GET.
    pub fn to_url(&self) -> String {
        let query = self
            .query_pairs()
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        let separator = if self.endpoint.contains('?') { '&' } else { '?' };
        format!("{}{}{}", self.endpoint, separator, query)
    }
}

/// Somewhere leads get recorded.
#[async_trait(?Send)]
pub trait LeadSink {
    async fn send(&self, lead: &LeadRequest) -> Result<(), SinkError>;
}

/// Spreadsheet-backed webhook reached from the browser with `fetch`.
pub struct SheetWebhookSink {
    timeout_ms: u32,
}

impl SheetWebhookSink {
    pub fn new(timeout_ms: u32) -> Self {
        Self { timeout_ms }
    }
}

#[async_trait(?Send)]
impl LeadSink for SheetWebhookSink {
    async fn send(&self, lead: &LeadRequest) -> Result<(), SinkError> {
        let url = lead.to_url();
        let request = Box::pin(Request::get(&url).send());
        let deadline = Box::pin(TimeoutFuture::new(self.timeout_ms));

        match future::select(request, deadline).await {
            Either::Left((result, _)) => {
                let response = result.map_err(|e| SinkError::Transport(e.to_string()))?;
                debug!("Sheet webhook answered {}", response.status());
                if response.ok() {
                    Ok(())
                } else {
                    Err(SinkError::Status(response.status()))
                }
            }
            Either::Right(_) => Err(SinkError::Timeout(self.timeout_ms)),
        }
    }
}
