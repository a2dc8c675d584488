//! Change notifications published by the session store

use std::sync::Arc;

use crate::filter::FilterSpec;
use crate::navigation::AppView;
use crate::session::{AuthIntent, Language, SessionState, StoreSubscriber, Theme};

/// A committed change to the store
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    ViewChanged {
        view: AppView,
        /// Set when the request was redirected
        requested: Option<AppView>,
    },
    LanguageChanged(Language),
    /// `dark_mode` is the global styling flag
    ThemeChanged { theme: Theme, dark_mode: bool },
    UserChanged { signed_in: bool },
    ProfileUpdated,
    AuthIntentChanged(Option<AuthIntent>),
    SelectionChanged(Option<String>),
    FilterChanged(FilterSpec),
    LoginPending(bool),
}

/// Helper struct for creating subscribers from closures
pub struct ClosureSubscriber<F> {
    handler: F,
}

impl<F> StoreSubscriber for ClosureSubscriber<F>
where
    F: Fn(&StoreEvent, &SessionState) + Send + Sync,
{
    fn on_store_event(&self, event: &StoreEvent, state: &SessionState) {
        (self.handler)(event, state);
    }
}

/// Create a subscriber from a closure
///
/// The store only keeps a weak reference; hold on to the returned `Arc` for
/// as long as events should be delivered.
pub fn subscriber_from_fn<F>(f: F) -> Arc<dyn StoreSubscriber>
where
    F: Fn(&StoreEvent, &SessionState) + Send + Sync + 'static,
{
    Arc::new(ClosureSubscriber { handler: f })
}
