pub mod model;
pub mod normalize;

pub use model::{NormalizedText, RawReply};
pub use normalize::{normalize_reply, render_bot_reply};
