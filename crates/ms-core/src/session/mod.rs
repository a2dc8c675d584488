//! Cross-view session state and the store that owns it

mod auth;
mod state;
mod store;
mod subscriber;

pub use auth::{LoginRequest, DEFAULT_LOGIN_DELAY};
pub use state::{AuthIntent, Language, Role, SessionState, Theme, User, UserProfile};
pub use store::SessionStore;
pub use subscriber::{StoreSubscriber, SubscriptionId};
