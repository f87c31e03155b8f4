pub mod auth;
pub mod chat;
pub mod markup;
pub mod reply;

pub mod error;
