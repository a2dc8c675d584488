//! User interface for the MedSymposium directory
//!
//! This crate provides the egui views drawn on top of the session store:
//! the header shell, the home and directory listings, the auth and profile
//! forms, and the event details window.

pub mod shell;
pub mod theme;
pub mod views;

pub use shell::{AppShell, ShellConfig};
pub use theme::apply_theme;
