//! Sign-in, registration and password reset forms

use std::time::Duration;

use egui::{RichText, Ui};
use ms_core::{LoginRequest, Role, SessionStore};
use tokio::runtime::Handle;
use tracing::{error, info};

use crate::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
    Forgot,
}

impl AuthMode {
    fn title_key(&self) -> &'static str {
        match self {
            AuthMode::Login => "login",
            AuthMode::Register => "register",
            AuthMode::Forgot => "resetPassword",
        }
    }

    fn subtitle_key(&self) -> &'static str {
        match self {
            AuthMode::Login => "loginSubtitle",
            AuthMode::Register | AuthMode::Forgot => "registerSubtitle",
        }
    }
}

/// Form contents, kept across frames
#[derive(Debug, Default)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Role,
    pub photo: String,
    pub biography: String,
    reset_sent: bool,
}

impl AuthForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch mode, keeping what was typed
    pub fn set_mode(&mut self, mode: AuthMode) {
        self.mode = mode;
        self.reset_sent = false;
    }

    /// The sign-in this form submits; a password reset never signs in
    pub fn request(&self) -> Option<LoginRequest> {
        let optional = |value: &str| Some(value.trim().to_string()).filter(|v| !v.is_empty());

        match self.mode {
            AuthMode::Forgot => None,
            AuthMode::Login => Some(LoginRequest {
                email: self.email.trim().to_string(),
                role: self.role,
                ..LoginRequest::default()
            }),
            AuthMode::Register => Some(LoginRequest {
                email: self.email.trim().to_string(),
                name: optional(&self.name),
                role: self.role,
                photo: optional(&self.photo),
                biography: optional(&self.biography),
            }),
        }
    }

    /// Back button: leaves the view from login, otherwise returns to login
    pub fn back(&mut self, store: &SessionStore) {
        match self.mode {
            AuthMode::Login => store.leave_auth(),
            AuthMode::Register | AuthMode::Forgot => self.set_mode(AuthMode::Login),
        }
    }

    fn submit(&mut self, store: &SessionStore, runtime: &Handle, delay: Duration) {
        let Some(request) = self.request() else {
            info!("Password reset requested");
            self.reset_sent = true;
            return;
        };

        let _guard = runtime.enter();
        if let Err(e) = store.submit_login(request, delay) {
            error!(error = %e, "Could not start sign-in");
            return;
        }
        self.password.clear();
    }

    pub fn show(&mut self, ui: &mut Ui, store: &SessionStore, runtime: &Handle, delay: Duration) {
        let back_key = match self.mode {
            AuthMode::Login => "backToHome",
            AuthMode::Register | AuthMode::Forgot => "backToLogin",
        };
        if ui.link(store.translate(back_key)).clicked() {
            self.back(store);
            return;
        }

        let pending = store.is_login_pending();

        ui.vertical_centered(|ui| {
            ui.set_max_width(420.0);
            ui.add_space(24.0);

            if let Some(intent) = store.auth_intent() {
                egui::Frame::group(ui.style())
                    .stroke(egui::Stroke::new(1.0, theme::warning_color()))
                    .inner_margin(10.0)
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new(store.translate(intent.message_key()))
                                .color(theme::warning_color())
                                .strong(),
                        );
                    });
                ui.add_space(12.0);
            }

            ui.label(RichText::new(store.translate(self.mode.title_key())).heading().strong());
            ui.label(store.translate(self.mode.subtitle_key()));
            ui.add_space(16.0);

            ui.add_enabled_ui(!pending, |ui| self.fields(ui, store));
            ui.add_space(12.0);

            if pending {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(store.translate("signingIn"));
                    if ui.button(store.translate("cancel")).clicked() {
                        store.cancel_login();
                    }
                });
            } else if ui
                .button(RichText::new(store.translate(self.mode.title_key())).strong())
                .clicked()
            {
                self.submit(store, runtime, delay);
            }

            if self.reset_sent {
                ui.label(RichText::new(store.translate("resetSent")).color(theme::accent_color()));
            }

            ui.add_space(16.0);
            ui.separator();
            match self.mode {
                AuthMode::Login => {
                    ui.horizontal(|ui| {
                        if ui.link(store.translate("register")).clicked() {
                            self.set_mode(AuthMode::Register);
                        }
                        if ui.link(store.translate("forgotPassword")).clicked() {
                            self.set_mode(AuthMode::Forgot);
                        }
                    });
                }
                AuthMode::Register | AuthMode::Forgot => {
                    if ui.link(store.translate("login")).clicked() {
                        self.set_mode(AuthMode::Login);
                    }
                }
            }
        });
    }

    fn fields(&mut self, ui: &mut Ui, store: &SessionStore) {
        if self.mode == AuthMode::Register {
            ui.add(
                egui::TextEdit::singleline(&mut self.photo)
                    .hint_text(store.translate("uploadPhoto")),
            );
            ui.add(
                egui::TextEdit::singleline(&mut self.name).hint_text(store.translate("fullName")),
            );
            egui::ComboBox::from_id_source("auth_role")
                .selected_text(store.translate(self.role.label_key()))
                .show_ui(ui, |ui| {
                    for role in Role::ALL {
                        ui.selectable_value(&mut self.role, role, store.translate(role.label_key()));
                    }
                });
            ui.add(
                egui::TextEdit::multiline(&mut self.biography)
                    .hint_text(store.translate("bioPlaceholder"))
                    .desired_rows(3),
            );
        }

        ui.add(egui::TextEdit::singleline(&mut self.email).hint_text(store.translate("email")));

        if self.mode != AuthMode::Forgot {
            ui.add(
                egui::TextEdit::singleline(&mut self.password)
                    .password(true)
                    .hint_text(store.translate("password")),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ms_core::{AppView, MemoryStorage};
    use std::sync::Arc;

    fn store() -> SessionStore {
        SessionStore::new(
            ms_data::builtin_catalog().unwrap(),
            Arc::new(MemoryStorage::new()),
        )
    }

    #[test]
    fn test_login_request_ignores_registration_fields() {
        let form = AuthForm {
            email: " amina@chu.dz ".to_string(),
            name: "Amina".to_string(),
            biography: "Cardiologist".to_string(),
            ..AuthForm::new()
        };

        let request = form.request().unwrap();
        assert_eq!(request.email, "amina@chu.dz");
        assert_eq!(request.name, None);
        assert_eq!(request.biography, None);
        assert_eq!(request.role, Role::Participant);
    }

    #[test]
    fn test_register_request_keeps_filled_fields() {
        let form = AuthForm {
            mode: AuthMode::Register,
            name: "Amina Benali".to_string(),
            role: Role::Author,
            photo: "  ".to_string(),
            ..AuthForm::new()
        };

        let request = form.request().unwrap();
        assert_eq!(request.name.as_deref(), Some("Amina Benali"));
        assert_eq!(request.role, Role::Author);
        assert_eq!(request.photo, None);
    }

    #[test]
    fn test_forgot_mode_never_signs_in() {
        let mut form = AuthForm::new();
        form.set_mode(AuthMode::Forgot);
        assert!(form.request().is_none());
    }

    #[test]
    fn test_back_from_register_returns_to_login() {
        let store = store();
        store.set_view(AppView::Auth);
        let mut form = AuthForm::new();
        form.set_mode(AuthMode::Register);

        form.back(&store);
        assert_eq!(form.mode, AuthMode::Login);
        assert_eq!(store.current_view(), AppView::Auth);

        form.back(&store);
        assert_eq!(store.current_view(), AppView::Home);
    }
}
