use crate::chat::transport::TransportResponse;
use crate::error::CoreResult;
use crate::markup::{sanitize_html, SanitizedMarkup};
use crate::reply::{render_bot_reply, RawReply};
use serde::{Deserialize, Serialize};

/// Which of the two page panels a reply is rendered for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PanelKind {
    Inline,
    Popup,
}

impl PanelKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "inline" => Some(PanelKind::Inline),
            "popup" => Some(PanelKind::Popup),
            _ => None,
        }
    }

    pub fn network_error_warning(self) -> &'static str {
        match self {
            PanelKind::Inline => "⚠️ Network or server error. Open DevTools Console for details.",
            PanelKind::Popup => "⚠️ Network or server error. Please try again.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangePhase {
    /// Popup greeting fetched when the panel first opens.
    Init,
    Message,
}

pub const UNABLE_TO_CONNECT: &str = "⚠️ Unable to connect to server";

pub fn status_warning(status: u16) -> String {
    format!("⚠️ Server returned status {}", status)
}

/// Turn one transport outcome into transcript markup. Failures become
/// warning text, which still goes through the sanitizer.
pub fn interpret_response(
    kind: PanelKind,
    phase: ExchangePhase,
    result: CoreResult<TransportResponse>,
) -> SanitizedMarkup {
    match result {
        Err(e) => {
            log::error!("[chat] fetch error: {}", e);
            sanitize_html(kind.network_error_warning())
        }
        Ok(resp) if !resp.is_ok() => {
            log::warn!(
                "[chat] response not ok: status={} body={}",
                resp.status,
                resp.body
            );
            if kind == PanelKind::Popup && phase == ExchangePhase::Init {
                sanitize_html(UNABLE_TO_CONNECT)
            } else {
                sanitize_html(&status_warning(resp.status))
            }
        }
        Ok(resp) => render_bot_reply(&RawReply::from_body(&resp.body)),
    }
}
