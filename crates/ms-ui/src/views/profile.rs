//! Profile editor for the signed-in user

use std::time::{Duration, Instant};

use egui::{RichText, Ui};
use ms_core::{SessionStore, User, UserProfile};

/// How long the "saved" confirmation stays visible
const SAVED_NOTICE: Duration = Duration::from_secs(3);

#[derive(Debug, Default)]
pub struct ProfileForm {
    /// User the fields were loaded from
    loaded_for: Option<String>,
    pub photo: String,
    pub institution: String,
    pub research_field: String,
    pub biography: String,
    pub linkedin: String,
    saved_at: Option<Instant>,
}

impl ProfileForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reload the fields when a different user is signed in
    pub fn sync(&mut self, user: &User) {
        if self.loaded_for.as_deref() == Some(user.id.as_str()) {
            return;
        }
        let profile = &user.profile;
        self.loaded_for = Some(user.id.clone());
        self.photo = profile.photo.clone().unwrap_or_default();
        self.institution = profile.institution.clone();
        self.research_field = profile.research_field.clone();
        self.biography = profile.biography.clone();
        self.linkedin = profile.linkedin.clone().unwrap_or_default();
        self.saved_at = None;
    }

    pub fn to_profile(&self) -> UserProfile {
        let optional = |value: &str| Some(value.trim().to_string()).filter(|v| !v.is_empty());
        UserProfile {
            photo: optional(&self.photo),
            institution: self.institution.trim().to_string(),
            research_field: self.research_field.trim().to_string(),
            biography: self.biography.trim().to_string(),
            linkedin: optional(&self.linkedin),
        }
    }

    pub fn show(&mut self, ui: &mut Ui, store: &SessionStore) {
        // The view guard keeps anonymous users out; nothing to edit otherwise.
        let Some(user) = store.user() else {
            return;
        };
        self.sync(&user);

        ui.label(RichText::new(store.translate("profile")).heading().strong());
        ui.label(store.translate("profileSub"));
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            ui.label(RichText::new(&user.name).strong().size(18.0));
            ui.label(&user.email);
            ui.label(RichText::new(store.translate(user.role.label_key())).italics());
        });
        ui.add_space(12.0);

        egui::Grid::new("profile_fields")
            .num_columns(2)
            .spacing([16.0, 8.0])
            .show(ui, |ui| {
                ui.label(store.translate("uploadPhoto"));
                ui.text_edit_singleline(&mut self.photo);
                ui.end_row();

                ui.label(store.translate("institution"));
                ui.text_edit_singleline(&mut self.institution);
                ui.end_row();

                ui.label(store.translate("researchField"));
                ui.text_edit_singleline(&mut self.research_field);
                ui.end_row();

                ui.label("LinkedIn");
                ui.text_edit_singleline(&mut self.linkedin);
                ui.end_row();

                ui.label(store.translate("biography"));
                ui.add(egui::TextEdit::multiline(&mut self.biography).desired_rows(4));
                ui.end_row();
            });

        ui.add_space(8.0);
        ui.label(RichText::new(store.translate("profilePermissions")).small());
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if ui.button(store.translate("saveProfile")).clicked() {
                store.update_profile(self.to_profile());
                self.saved_at = Some(Instant::now());
            }

            if let Some(saved_at) = self.saved_at {
                let elapsed = saved_at.elapsed();
                if elapsed < SAVED_NOTICE {
                    ui.label(RichText::new(store.translate("saved")).color(crate::theme::accent_color()));
                    ui.ctx().request_repaint_after(SAVED_NOTICE - elapsed);
                } else {
                    self.saved_at = None;
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ms_core::{LoginRequest, Role};

    fn user(email: &str) -> User {
        LoginRequest {
            email: email.to_string(),
            role: Role::Author,
            ..LoginRequest::default()
        }
        .into_user()
    }

    #[test]
    fn test_sync_loads_once_per_user() {
        let first = user("a@chu.dz");
        let mut form = ProfileForm::new();

        form.sync(&first);
        assert_eq!(form.institution, first.profile.institution);

        form.institution = "CHU Oran".to_string();
        form.sync(&first);
        assert_eq!(form.institution, "CHU Oran");

        form.sync(&user("b@chu.dz"));
        assert_eq!(form.institution, first.profile.institution);
    }

    #[test]
    fn test_blank_optional_fields_become_none() {
        let mut form = ProfileForm::new();
        form.sync(&user("a@chu.dz"));
        form.photo = " ".to_string();
        form.linkedin = "https://linkedin.com/in/amina".to_string();

        let profile = form.to_profile();
        assert_eq!(profile.photo, None);
        assert_eq!(profile.linkedin.as_deref(), Some("https://linkedin.com/in/amina"));
    }
}
