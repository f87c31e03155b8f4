// The only module in this crate that performs network I/O.

use crate::chat::config::ChatEndpointConfig;
use crate::error::{CoreError, CoreResult};
use serde::Serialize;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

pub trait ChatTransport {
    fn post_message(&self, message: &str) -> CoreResult<TransportResponse>;
    fn reset(&self) -> CoreResult<()>;
}

pub struct HttpChatTransport {
    client: reqwest::blocking::Client,
    chat_url: Url,
    reset_url: Url,
}

impl HttpChatTransport {
    pub fn new(cfg: &ChatEndpointConfig) -> CoreResult<Self> {
        cfg.validate()?;
        let client = reqwest::blocking::Client::builder()
            .timeout(cfg.request_timeout())
            .build()
            .map_err(transport_error)?;
        Ok(Self {
            client,
            chat_url: cfg.chat_url()?,
            reset_url: cfg.reset_url()?,
        })
    }
}

impl ChatTransport for HttpChatTransport {
    fn post_message(&self, message: &str) -> CoreResult<TransportResponse> {
        log::debug!("[chat] -> {} ({} chars)", self.chat_url, message.len());
        let resp = self
            .client
            .post(self.chat_url.clone())
            .json(&ChatRequest { message })
            .send()
            .map_err(transport_error)?;
        let status = resp.status().as_u16();
        let body = resp.text().map_err(transport_error)?;
        log::debug!("[chat] <- status={} ({} bytes)", status, body.len());
        Ok(TransportResponse { status, body })
    }

    fn reset(&self) -> CoreResult<()> {
        let resp = self
            .client
            .post(self.reset_url.clone())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .map_err(transport_error)?;
        log::debug!("[chat] reset status={}", resp.status().as_u16());
        Ok(())
    }
}

fn transport_error(e: reqwest::Error) -> CoreError {
    CoreError::Transport(e.to_string())
}
