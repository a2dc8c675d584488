//! Simulated sign-in
//!
//! There is no identity backend: a submitted form becomes a [`User`] after a
//! fixed delay. The delay runs as a tokio task owned by the store so it can be
//! cancelled and never outlives it.

use std::time::Duration;

use tokio::task::JoinHandle;
use uuid::Uuid;

use super::{Role, User, UserProfile};

/// Delay between submitting the form and being signed in
pub const DEFAULT_LOGIN_DELAY: Duration = Duration::from_millis(1500);

const DEFAULT_EMAIL: &str = "user@medsymposium.dz";
const DEFAULT_NAME: &str = "Scientific Professional";
const DEFAULT_INSTITUTION: &str = "Healthcare Institution";
const DEFAULT_RESEARCH_FIELD: &str = "Clinical Research";
const DEFAULT_BIOGRAPHY: &str = "Academic profile on MedSymposium.";
const DEFAULT_PHOTO: &str =
    "https://images.unsplash.com/photo-1559839734-2b71f1536783?auto=format&fit=crop&q=80&w=200";

/// What the auth form submits
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    /// Only collected on registration
    pub name: Option<String>,
    pub role: Role,
    pub photo: Option<String>,
    pub biography: Option<String>,
}

impl LoginRequest {
    /// Build the mock user this request signs in as
    pub fn into_user(self) -> User {
        let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        User {
            id: Uuid::new_v4().to_string(),
            email: if self.email.trim().is_empty() {
                DEFAULT_EMAIL.to_string()
            } else {
                self.email
            },
            name: non_empty(self.name).unwrap_or_else(|| DEFAULT_NAME.to_string()),
            role: self.role,
            profile: UserProfile {
                photo: Some(non_empty(self.photo).unwrap_or_else(|| DEFAULT_PHOTO.to_string())),
                institution: DEFAULT_INSTITUTION.to_string(),
                research_field: DEFAULT_RESEARCH_FIELD.to_string(),
                biography: non_empty(self.biography)
                    .unwrap_or_else(|| DEFAULT_BIOGRAPHY.to_string()),
                linkedin: None,
            },
        }
    }
}

/// A sign-in waiting for its delay to elapse
pub(crate) struct PendingLogin {
    /// Distinguishes this attempt from any that replaced it
    pub ticket: u64,
    pub handle: JoinHandle<()>,
}

impl PendingLogin {
    pub fn cancel(self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_blank_fields() {
        let user = LoginRequest {
            email: "  ".to_string(),
            name: Some(String::new()),
            role: Role::Author,
            ..LoginRequest::default()
        }
        .into_user();

        assert_eq!(user.email, DEFAULT_EMAIL);
        assert_eq!(user.name, DEFAULT_NAME);
        assert_eq!(user.role, Role::Author);
        assert_eq!(user.profile.institution, DEFAULT_INSTITUTION);
        assert_eq!(user.profile.photo.as_deref(), Some(DEFAULT_PHOTO));
    }

    #[test]
    fn test_registration_fields_kept() {
        let user = LoginRequest {
            email: "amina@chu.dz".to_string(),
            name: Some("Amina Benali".to_string()),
            role: Role::Organizer,
            photo: Some("me.png".to_string()),
            biography: Some("Cardiologist.".to_string()),
        }
        .into_user();

        assert_eq!(user.email, "amina@chu.dz");
        assert_eq!(user.name, "Amina Benali");
        assert_eq!(user.profile.photo.as_deref(), Some("me.png"));
        assert_eq!(user.profile.biography, "Cardiologist.");
    }
}
