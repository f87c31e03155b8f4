use chatpanel_core::auth::ui::{Readiness, AUTH_LOAD_ERROR};
use chatpanel_core::auth::{AuthEvent, AuthUi, ModalContent, Slot};

use chatpanel_core::auth::WidgetCommand::*;

#[test]
fn signed_in_on_ready_mounts_navbar_user_button() {
    let mut ui = AuthUi::new();
    let cmds = ui.apply(AuthEvent::Ready { signed_in: true });
    assert_eq!(cmds, vec![ClearSlot(Slot::Navbar), MountUserButton(Slot::Navbar)]);
    assert!(!ui.login_visible());
    assert!(ui.is_signed_in());
}

#[test]
fn signed_out_on_ready_shows_login() {
    let mut ui = AuthUi::new();
    let cmds = ui.apply(AuthEvent::Ready { signed_in: false });
    assert_eq!(cmds, vec![ClearSlot(Slot::Navbar)]);
    assert!(ui.login_visible());
}

#[test]
fn login_click_opens_modal_and_mounts_sign_in_once() {
    let mut ui = AuthUi::new();
    ui.apply(AuthEvent::Ready { signed_in: false });

    let cmds = ui.apply(AuthEvent::LoginClicked);
    assert_eq!(
        cmds,
        vec![LockScroll(true), ClearSlot(Slot::Modal), MountSignIn(Slot::Modal)]
    );
    assert!(ui.modal_open());
    assert_eq!(ui.modal_content(), &ModalContent::SignIn);

    assert_eq!(ui.apply(AuthEvent::ModalClosed), vec![LockScroll(false)]);
    assert_eq!(ui.apply(AuthEvent::LoginClicked), vec![LockScroll(true)]);
}

#[test]
fn login_click_while_signed_in_keeps_modal_closed() {
    let mut ui = AuthUi::new();
    ui.apply(AuthEvent::Ready { signed_in: true });
    let cmds = ui.apply(AuthEvent::LoginClicked);
    assert_eq!(cmds, vec![ClearSlot(Slot::Navbar), MountUserButton(Slot::Navbar)]);
    assert!(!ui.modal_open());
}

#[test]
fn login_click_before_ready_mounts_when_ready_arrives() {
    let mut ui = AuthUi::new();
    assert_eq!(ui.apply(AuthEvent::LoginClicked), vec![LockScroll(true)]);
    assert_eq!(ui.modal_content(), &ModalContent::Empty);

    let cmds = ui.apply(AuthEvent::Ready { signed_in: false });
    assert_eq!(
        cmds,
        vec![ClearSlot(Slot::Navbar), ClearSlot(Slot::Modal), MountSignIn(Slot::Modal)]
    );
}

#[test]
fn signed_in_while_waiting_closes_modal() {
    let mut ui = AuthUi::new();
    ui.apply(AuthEvent::LoginClicked);
    let cmds = ui.apply(AuthEvent::Ready { signed_in: true });
    assert_eq!(
        cmds,
        vec![ClearSlot(Slot::Navbar), MountUserButton(Slot::Navbar), LockScroll(false)]
    );
    assert!(!ui.modal_open());
}

#[test]
fn readiness_failure_shows_error_and_keeps_login() {
    let mut ui = AuthUi::new();
    ui.apply(AuthEvent::ReadinessFailed("SDK did not load in time".to_string()));
    assert_eq!(ui.readiness(), Readiness::Failed);
    assert!(ui.login_visible());

    let cmds = ui.apply(AuthEvent::LoginClicked);
    assert_eq!(
        cmds,
        vec![LockScroll(true), ShowError(Slot::Modal, AUTH_LOAD_ERROR.to_string())]
    );
    assert_eq!(ui.modal_content(), &ModalContent::Error(AUTH_LOAD_ERROR.to_string()));
}

#[test]
fn sign_in_event_swaps_modal_to_user_button() {
    let mut ui = AuthUi::new();
    ui.apply(AuthEvent::Ready { signed_in: false });
    ui.apply(AuthEvent::LoginClicked);

    let cmds = ui.apply(AuthEvent::UserChanged { signed_in: true });
    assert_eq!(
        cmds,
        vec![
            ClearSlot(Slot::Navbar),
            MountUserButton(Slot::Navbar),
            LockScroll(false),
            ClearSlot(Slot::Modal),
            MountUserButton(Slot::Modal),
        ]
    );
    assert!(!ui.modal_open());
    assert_eq!(ui.modal_content(), &ModalContent::UserButton);
}

#[test]
fn sign_out_event_restores_login_and_sign_in() {
    let mut ui = AuthUi::new();
    ui.apply(AuthEvent::Ready { signed_in: true });
    let cmds = ui.apply(AuthEvent::UserChanged { signed_in: false });
    assert_eq!(
        cmds,
        vec![ClearSlot(Slot::Navbar), ClearSlot(Slot::Modal), MountSignIn(Slot::Modal)]
    );
    assert!(ui.login_visible());
    assert!(!ui.is_signed_in());

    // Sign-in is remounted on the next login click.
    let cmds = ui.apply(AuthEvent::LoginClicked);
    assert_eq!(
        cmds,
        vec![LockScroll(true), ClearSlot(Slot::Modal), MountSignIn(Slot::Modal)]
    );
}

#[test]
fn backdrop_click_closes_open_modal_only() {
    let mut ui = AuthUi::new();
    assert!(ui.apply(AuthEvent::BackdropClicked).is_empty());
    ui.apply(AuthEvent::Ready { signed_in: false });
    ui.apply(AuthEvent::LoginClicked);
    assert_eq!(ui.apply(AuthEvent::BackdropClicked), vec![LockScroll(false)]);
}
