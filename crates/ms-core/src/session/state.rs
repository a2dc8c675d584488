//! Session state and the user records it holds

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::catalog::EventId;
use crate::navigation::AppView;

/// Interface language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
        }
    }

    /// The other language, for the header toggle
    pub fn toggled(&self) -> Language {
        match self {
            Language::En => Language::Fr,
            Language::Fr => Language::En,
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "fr" => Ok(Language::Fr),
            other => Err(format!("Unknown language '{}'", other)),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Colour theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme '{}'", other)),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why the user was sent to the auth view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthIntent {
    /// Submitting scientific work needs an author account
    AuthorRequired,
    /// A members-only view was requested while signed out
    LoginRequired,
}

impl AuthIntent {
    /// Translation key of the hint shown on the auth view
    pub fn message_key(&self) -> &'static str {
        match self {
            AuthIntent::AuthorRequired => "authorRequired",
            AuthIntent::LoginRequired => "loginRequired",
        }
    }
}

/// Account role chosen at registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Role {
    Organizer,
    Author,
    #[default]
    Participant,
    WorkshopAnimator,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::Organizer,
        Role::Author,
        Role::Participant,
        Role::WorkshopAnimator,
    ];

    pub fn label_key(&self) -> &'static str {
        match self {
            Role::Organizer => "role_Organizer",
            Role::Author => "role_Author",
            Role::Participant => "role_Participant",
            Role::WorkshopAnimator => "role_WorkshopAnimator",
        }
    }
}

/// Editable part of a user record
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub photo: Option<String>,
    pub institution: String,
    pub research_field: String,
    pub biography: String,
    pub linkedin: Option<String>,
}

/// A signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub profile: UserProfile,
}

impl User {
    /// First word of the display name, shown in the header
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

/// Cross-view application state
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub current_view: AppView,
    /// `None` while anonymous
    pub user: Option<User>,
    /// Event shown in the details window; always present in the catalog
    pub selected_event: Option<EventId>,
    pub auth_intent: Option<AuthIntent>,
    pub language: Language,
    pub theme: Theme,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Global styling flag derived from the theme
    pub fn dark_mode(&self) -> bool {
        self.theme.is_dark()
    }
}
