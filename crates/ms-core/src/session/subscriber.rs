//! Store subscriber trait

use crate::events::StoreEvent;

use super::SessionState;

/// Trait for components that need to respond to store changes
pub trait StoreSubscriber: Send + Sync {
    /// Called after a mutation has been committed, outside the store lock
    fn on_store_event(&self, event: &StoreEvent, state: &SessionState);
}

/// Handle returned by `SessionStore::subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);
