pub mod config;
pub mod exchange;
pub mod panel;
pub mod transport;

pub use exchange::PanelKind;
pub use panel::{ChatMessage, ChatPanel, Sender};
pub use transport::{ChatTransport, HttpChatTransport, TransportResponse};
