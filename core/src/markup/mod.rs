pub mod node;
pub mod parse;
pub mod sanitize;
pub mod serialize;

pub use sanitize::{sanitize_html, SanitizedMarkup};
