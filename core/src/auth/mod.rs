pub mod bootstrap;
pub mod key;
pub mod readiness;
pub mod ui;

pub use bootstrap::{await_auth_sdk, readiness_event};
pub use key::PublishableKey;
pub use readiness::{poll_until, PollPolicy, Sleeper, ThreadSleeper};
pub use ui::{AuthEvent, AuthUi, ModalContent, Slot, WidgetCommand};
