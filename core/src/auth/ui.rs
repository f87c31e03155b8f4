//! State of the hosted auth widgets on the page.
//!
//! The auth provider owns sign-in itself; this reducer only decides which
//! hosted component is mounted where, and what the login button and modal
//! show, in response to readiness and auth-state-change events.

use serde::Serialize;

pub const AUTH_LOAD_ERROR: &str = "Error loading authentication. Please refresh the page.";

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Slot {
    /// User button area in the navigation bar.
    Navbar,
    /// Container inside the login modal.
    Modal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalContent {
    Empty,
    SignIn,
    UserButton,
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    Pending,
    Ready,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    /// SDK loaded and user state known.
    Ready { signed_in: bool },
    ReadinessFailed(String),
    /// Auth-state-change listener fired.
    UserChanged { signed_in: bool },
    LoginClicked,
    ModalClosed,
    /// Click landed on the modal backdrop rather than its content.
    BackdropClicked,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub enum WidgetCommand {
    MountSignIn(Slot),
    MountUserButton(Slot),
    ClearSlot(Slot),
    ShowError(Slot, String),
    /// Page scroll is locked while the modal is open.
    LockScroll(bool),
}

#[derive(Debug, Clone)]
pub struct AuthUi {
    readiness: Readiness,
    signed_in: bool,
    login_visible: bool,
    modal_open: bool,
    modal_content: ModalContent,
    sign_in_mounted: bool,
}

impl Default for AuthUi {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthUi {
    pub fn new() -> Self {
        AuthUi {
            readiness: Readiness::Pending,
            signed_in: false,
            login_visible: true,
            modal_open: false,
            modal_content: ModalContent::Empty,
            sign_in_mounted: false,
        }
    }

    pub fn readiness(&self) -> Readiness {
        self.readiness
    }

    pub fn is_signed_in(&self) -> bool {
        self.signed_in
    }

    pub fn login_visible(&self) -> bool {
        self.login_visible
    }

    pub fn modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn modal_content(&self) -> &ModalContent {
        &self.modal_content
    }

    pub fn apply(&mut self, event: AuthEvent) -> Vec<WidgetCommand> {
        let mut cmds = Vec::new();
        match event {
            AuthEvent::Ready { signed_in } => {
                self.readiness = Readiness::Ready;
                self.signed_in = signed_in;
                log::info!(
                    "[auth] ready, user {}",
                    if signed_in { "signed in" } else { "signed out" }
                );
                if signed_in {
                    self.show_navbar_user(&mut cmds);
                    if self.modal_open {
                        self.close_modal(&mut cmds);
                    }
                } else {
                    self.show_login(&mut cmds);
                    if self.modal_open && !self.sign_in_mounted {
                        self.mount_modal_sign_in(&mut cmds);
                    }
                }
            }
            AuthEvent::ReadinessFailed(reason) => {
                log::warn!("[auth] could not initialize auth UI: {}", reason);
                self.readiness = Readiness::Failed;
                self.login_visible = true;
                if self.modal_open && !self.sign_in_mounted {
                    self.show_modal_error(&mut cmds);
                }
            }
            AuthEvent::UserChanged { signed_in: true } => {
                self.signed_in = true;
                self.readiness = Readiness::Ready;
                self.show_navbar_user(&mut cmds);
                if self.modal_open {
                    self.close_modal(&mut cmds);
                }
                cmds.push(WidgetCommand::ClearSlot(Slot::Modal));
                cmds.push(WidgetCommand::MountUserButton(Slot::Modal));
                self.modal_content = ModalContent::UserButton;
                self.sign_in_mounted = false;
            }
            AuthEvent::UserChanged { signed_in: false } => {
                self.signed_in = false;
                self.readiness = Readiness::Ready;
                self.show_login(&mut cmds);
                cmds.push(WidgetCommand::ClearSlot(Slot::Modal));
                cmds.push(WidgetCommand::MountSignIn(Slot::Modal));
                self.modal_content = ModalContent::SignIn;
                // Next login click mounts a fresh sign-in.
                self.sign_in_mounted = false;
            }
            AuthEvent::LoginClicked => {
                if self.readiness == Readiness::Ready && self.signed_in {
                    self.show_navbar_user(&mut cmds);
                    return cmds;
                }
                if !self.modal_open {
                    self.modal_open = true;
                    cmds.push(WidgetCommand::LockScroll(true));
                }
                if !self.sign_in_mounted {
                    match self.readiness {
                        Readiness::Ready => self.mount_modal_sign_in(&mut cmds),
                        Readiness::Failed => self.show_modal_error(&mut cmds),
                        Readiness::Pending => {}
                    }
                }
            }
            AuthEvent::ModalClosed | AuthEvent::BackdropClicked => {
                if self.modal_open {
                    self.close_modal(&mut cmds);
                }
            }
        }
        cmds
    }

    fn show_navbar_user(&mut self, cmds: &mut Vec<WidgetCommand>) {
        self.login_visible = false;
        cmds.push(WidgetCommand::ClearSlot(Slot::Navbar));
        cmds.push(WidgetCommand::MountUserButton(Slot::Navbar));
    }

    fn show_login(&mut self, cmds: &mut Vec<WidgetCommand>) {
        self.login_visible = true;
        cmds.push(WidgetCommand::ClearSlot(Slot::Navbar));
    }

    fn mount_modal_sign_in(&mut self, cmds: &mut Vec<WidgetCommand>) {
        cmds.push(WidgetCommand::ClearSlot(Slot::Modal));
        cmds.push(WidgetCommand::MountSignIn(Slot::Modal));
        self.modal_content = ModalContent::SignIn;
        self.sign_in_mounted = true;
    }

    fn show_modal_error(&mut self, cmds: &mut Vec<WidgetCommand>) {
        cmds.push(WidgetCommand::ShowError(Slot::Modal, AUTH_LOAD_ERROR.to_string()));
        self.modal_content = ModalContent::Error(AUTH_LOAD_ERROR.to_string());
    }

    fn close_modal(&mut self, cmds: &mut Vec<WidgetCommand>) {
        self.modal_open = false;
        cmds.push(WidgetCommand::LockScroll(false));
    }
}
