//! Core functionality for the MedSymposium directory
//!
//! This crate provides the event catalog, the filter engine that derives the
//! visible event list, and the session store shared by every view.

pub mod catalog;
pub mod error;
pub mod events;
pub mod filter;
pub mod i18n;
pub mod navigation;
pub mod preferences;
pub mod session;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use catalog::{Catalog, Event, EventId, EventType, Session, Speaker};
pub use error::{CoreError, CoreResult};
pub use events::{subscriber_from_fn, StoreEvent};
pub use filter::{FilterAction, FilterSpec, HomePreview, StatusFilter, TypeFilter};
pub use navigation::AppView;
pub use preferences::{MemoryStorage, PreferenceStorage, Preferences};
pub use session::{
    AuthIntent, Language, LoginRequest, Role, SessionState, SessionStore, StoreSubscriber,
    SubscriptionId, Theme, User, UserProfile, DEFAULT_LOGIN_DELAY,
};
