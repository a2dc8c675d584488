//! One module per application view

pub mod about;
pub mod auth;
pub mod card;
pub mod directory;
pub mod event_window;
pub mod home;
pub mod profile;

pub use auth::{AuthForm, AuthMode};
pub use profile::ProfileForm;
