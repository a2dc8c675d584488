//! View state machine
//!
//! The application shows exactly one top-level view at a time. Every change
//! is an explicit request resolved against [`VIEW_GUARDS`]; there is no
//! history stack.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::session::AuthIntent;

/// Top-level views of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AppView {
    #[default]
    Home,
    Directory,
    About,
    Auth,
    Profile,
}

impl AppView {
    pub const ALL: [AppView; 5] = [
        AppView::Home,
        AppView::Directory,
        AppView::About,
        AppView::Auth,
        AppView::Profile,
    ];

    /// Where the view's back control leads. Every back control goes home.
    pub fn back_target(&self) -> AppView {
        AppView::Home
    }

    /// Whether the site header and footer are drawn around this view
    pub fn shows_chrome(&self) -> bool {
        !matches!(self, AppView::Auth)
    }
}

impl fmt::Display for AppView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AppView::Home => "home",
            AppView::Directory => "directory",
            AppView::About => "about",
            AppView::Auth => "auth",
            AppView::Profile => "profile",
        };
        f.write_str(name)
    }
}

/// A precondition on entering a view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewGuard {
    /// Requires a signed-in user; otherwise go to `redirect` with `intent`
    RequiresUser {
        redirect: AppView,
        intent: AuthIntent,
    },
}

/// Guarded views. Views not listed here can always be entered.
pub const VIEW_GUARDS: [(AppView, ViewGuard); 1] = [(
    AppView::Profile,
    ViewGuard::RequiresUser {
        redirect: AppView::Auth,
        intent: AuthIntent::LoginRequired,
    },
)];

/// Outcome of resolving a view request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewTransition {
    /// The requested view is entered as-is
    Enter(AppView),
    /// The request was redirected, optionally recording why
    Redirect {
        requested: AppView,
        to: AppView,
        intent: Option<AuthIntent>,
    },
}

impl ViewTransition {
    /// The view that ends up active
    pub fn target(&self) -> AppView {
        match self {
            ViewTransition::Enter(view) => *view,
            ViewTransition::Redirect { to, .. } => *to,
        }
    }
}

/// Resolve a request to show `requested`
pub fn resolve(requested: AppView, authenticated: bool) -> ViewTransition {
    let guard = VIEW_GUARDS
        .iter()
        .find(|(view, _)| *view == requested)
        .map(|(_, guard)| *guard);

    match guard {
        Some(ViewGuard::RequiresUser { redirect, intent }) if !authenticated => {
            ViewTransition::Redirect {
                requested,
                to: redirect,
                intent: Some(intent),
            }
        }
        _ => ViewTransition::Enter(requested),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_requires_user() {
        assert_eq!(
            resolve(AppView::Profile, false),
            ViewTransition::Redirect {
                requested: AppView::Profile,
                to: AppView::Auth,
                intent: Some(AuthIntent::LoginRequired),
            }
        );
        assert_eq!(resolve(AppView::Profile, true), ViewTransition::Enter(AppView::Profile));
    }

    #[test]
    fn test_unguarded_views_always_enter() {
        for view in AppView::ALL {
            if view == AppView::Profile {
                continue;
            }
            for authenticated in [false, true] {
                assert_eq!(resolve(view, authenticated).target(), view);
            }
        }
    }

    #[test]
    fn test_auth_view_hides_chrome() {
        assert!(!AppView::Auth.shows_chrome());
        assert!(AppView::Directory.shows_chrome());
        assert_eq!(AppView::Directory.back_target(), AppView::Home);
    }
}
