//! The session store

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;

use ahash::AHashMap;
use parking_lot::{Mutex, RwLock};
use tracing::{debug, info, warn};

use super::auth::PendingLogin;
use super::{
    AuthIntent, Language, LoginRequest, SessionState, StoreSubscriber, SubscriptionId, Theme,
    User, UserProfile,
};
use crate::catalog::{Catalog, Event};
use crate::error::{CoreError, CoreResult};
use crate::events::StoreEvent;
use crate::filter::{FilterAction, FilterEngine, FilterSpec, HomePreview, StatusFilter, TypeFilter};
use crate::i18n;
use crate::navigation::{self, AppView, ViewTransition};
use crate::preferences::{PreferenceStorage, Preferences, LANG_KEY, THEME_KEY};

struct StoreInner {
    state: RwLock<SessionState>,
    filter: RwLock<FilterEngine>,
    storage: Arc<dyn PreferenceStorage>,
    subscribers: RwLock<AHashMap<u64, Weak<dyn StoreSubscriber>>>,
    next_id: AtomicU64,
    pending_login: Mutex<Option<PendingLogin>>,
}

impl Drop for StoreInner {
    fn drop(&mut self) {
        if let Some(pending) = self.pending_login.get_mut().take() {
            debug!("Store dropped with a pending login, cancelling it");
            pending.cancel();
        }
    }
}

/// Handle to the application state shared by every view
///
/// Clones refer to the same store. The store lives until the last handle is
/// dropped, at which point a pending login is cancelled.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<StoreInner>,
}

impl SessionStore {
    /// Create a store over `catalog`, reading preferences from `storage`
    pub fn new(catalog: Catalog, storage: Arc<dyn PreferenceStorage>) -> Self {
        let prefs = Preferences::load(storage.as_ref());
        info!(
            language = %prefs.language,
            theme = %prefs.theme,
            events = catalog.len(),
            "Session store created"
        );

        let state = SessionState {
            language: prefs.language,
            theme: prefs.theme,
            ..SessionState::default()
        };

        Self {
            inner: Arc::new(StoreInner {
                state: RwLock::new(state),
                filter: RwLock::new(FilterEngine::new(catalog)),
                storage,
                subscribers: RwLock::new(AHashMap::new()),
                next_id: AtomicU64::new(1),
                pending_login: Mutex::new(None),
            }),
        }
    }

    // --- Reads ---

    /// Snapshot of the whole session state
    pub fn state(&self) -> SessionState {
        self.inner.state.read().clone()
    }

    pub fn current_view(&self) -> AppView {
        self.inner.state.read().current_view
    }

    pub fn user(&self) -> Option<User> {
        self.inner.state.read().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.state.read().is_authenticated()
    }

    pub fn auth_intent(&self) -> Option<AuthIntent> {
        self.inner.state.read().auth_intent
    }

    pub fn language(&self) -> Language {
        self.inner.state.read().language
    }

    pub fn theme(&self) -> Theme {
        self.inner.state.read().theme
    }

    /// Global styling flag
    pub fn dark_mode(&self) -> bool {
        self.inner.state.read().dark_mode()
    }

    /// Copy for `key` in the active language
    pub fn translate(&self, key: &str) -> String {
        i18n::translate(self.language(), key).to_string()
    }

    /// The event open in the details window
    pub fn selected_event(&self) -> Option<Event> {
        let id = self.inner.state.read().selected_event.clone()?;
        self.inner.filter.read().catalog().get(&id).cloned()
    }

    pub fn catalog(&self) -> Catalog {
        self.inner.filter.read().catalog().clone()
    }

    pub fn filter_spec(&self) -> FilterSpec {
        self.inner.filter.read().spec().clone()
    }

    /// Directory listing for the current filter
    pub fn visible_events(&self) -> Arc<[Event]> {
        self.inner.filter.read().visible()
    }

    /// Home page event section for the current filter
    pub fn home_preview(&self) -> HomePreview {
        self.inner.filter.read().home_preview()
    }

    // --- Navigation ---

    /// Request a view change; returns the view actually entered
    pub fn set_view(&self, target: AppView) -> AppView {
        let mut events = Vec::new();
        let entered = {
            let mut state = self.inner.state.write();
            let transition = navigation::resolve(target, state.is_authenticated());
            let entered = transition.target();

            if let ViewTransition::Redirect { requested, to, intent } = transition {
                warn!(%requested, %to, "View request redirected");
                if intent.is_some() && state.auth_intent != intent {
                    state.auth_intent = intent;
                    events.push(StoreEvent::AuthIntentChanged(intent));
                }
            }

            if state.current_view != entered {
                info!(from = %state.current_view, to = %entered, "View changed");
                state.current_view = entered;
                events.push(StoreEvent::ViewChanged {
                    view: entered,
                    requested: (entered != target).then_some(target),
                });
            }
            entered
        };

        self.publish(events);
        entered
    }

    pub fn set_auth_intent(&self, intent: Option<AuthIntent>) {
        let changed = {
            let mut state = self.inner.state.write();
            let changed = state.auth_intent != intent;
            state.auth_intent = intent;
            changed
        };

        if changed {
            self.publish(vec![StoreEvent::AuthIntentChanged(intent)]);
        }
    }

    /// "Submit work": ask for an author account when signed out, then show
    /// the auth view
    pub fn request_author_access(&self) {
        if !self.is_authenticated() {
            self.set_auth_intent(Some(AuthIntent::AuthorRequired));
        }
        self.set_view(AppView::Auth);
    }

    /// Back control of the auth view
    pub fn leave_auth(&self) {
        self.set_auth_intent(None);
        self.set_view(AppView::Auth.back_target());
    }

    // --- Authentication ---

    /// Sign `user` in. Clears any auth intent; the view is left unchanged.
    pub fn login(&self, user: User) {
        info!(user = %user.email, role = ?user.role, "User signed in");
        let intent_cleared = {
            let mut state = self.inner.state.write();
            state.user = Some(user);
            state.auth_intent.take().is_some()
        };

        let mut events = vec![StoreEvent::UserChanged { signed_in: true }];
        if intent_cleared {
            events.push(StoreEvent::AuthIntentChanged(None));
        }
        self.publish(events);
    }

    /// Sign out and return home from whichever view was active
    pub fn logout(&self) {
        let mut events = Vec::new();
        {
            let mut pending = self.inner.pending_login.lock();
            if let Some(attempt) = pending.take() {
                attempt.cancel();
                info!("Pending login cancelled");
                events.push(StoreEvent::LoginPending(false));
            }

            let mut state = self.inner.state.write();
            if state.user.take().is_some() {
                info!("User signed out");
                events.push(StoreEvent::UserChanged { signed_in: false });
            }
            if state.current_view != AppView::Home {
                state.current_view = AppView::Home;
                events.push(StoreEvent::ViewChanged {
                    view: AppView::Home,
                    requested: None,
                });
            }
        }
        self.publish(events);
    }

    /// Replace the signed-in user's profile; does nothing when anonymous
    pub fn update_profile(&self, profile: UserProfile) {
        let updated = {
            let mut state = self.inner.state.write();
            match state.user.as_mut() {
                Some(user) => {
                    user.profile = profile;
                    true
                }
                None => false,
            }
        };

        if updated {
            self.publish(vec![StoreEvent::ProfileUpdated]);
        } else {
            debug!("Profile update ignored, no user signed in");
        }
    }

    /// Sign in with `request` once `delay` has elapsed, then go home
    ///
    /// A later submit replaces this one. Requires a tokio runtime.
    pub fn submit_login(&self, request: LoginRequest, delay: Duration) -> CoreResult<()> {
        let runtime = tokio::runtime::Handle::try_current().map_err(|_| CoreError::NoRuntime)?;

        let ticket = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        let weak = Arc::downgrade(&self.inner);

        // Held across the spawn so a zero delay cannot complete before the
        // attempt is recorded
        let mut pending = self.inner.pending_login.lock();
        let handle = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(inner) = weak.upgrade() {
                SessionStore { inner }.complete_login(ticket, request.into_user());
            }
        });
        if let Some(previous) = pending.replace(PendingLogin { ticket, handle }) {
            debug!("Replacing pending login");
            previous.cancel();
        }
        drop(pending);

        debug!(?delay, "Login scheduled");
        self.publish(vec![StoreEvent::LoginPending(true)]);
        Ok(())
    }

    /// Cancel a pending login; returns whether one was pending
    pub fn cancel_login(&self) -> bool {
        let pending = self.inner.pending_login.lock().take();
        match pending {
            Some(pending) => {
                pending.cancel();
                info!("Pending login cancelled");
                self.publish(vec![StoreEvent::LoginPending(false)]);
                true
            }
            None => false,
        }
    }

    pub fn is_login_pending(&self) -> bool {
        self.inner.pending_login.lock().is_some()
    }

    fn complete_login(&self, ticket: u64, user: User) {
        // The ticket check and the sign-in share one pending-login lock scope,
        // so a concurrent logout either cancels this attempt or signs it out.
        let intent_cleared = {
            let mut pending = self.inner.pending_login.lock();
            if pending.as_ref().map(|p| p.ticket) != Some(ticket) {
                return;
            }
            pending.take();

            info!(user = %user.email, role = ?user.role, "User signed in");
            let mut state = self.inner.state.write();
            state.user = Some(user);
            state.auth_intent.take().is_some()
        };

        let mut events = vec![
            StoreEvent::LoginPending(false),
            StoreEvent::UserChanged { signed_in: true },
        ];
        if intent_cleared {
            events.push(StoreEvent::AuthIntentChanged(None));
        }
        self.publish(events);
        self.set_view(AppView::Home);
    }

    // --- Preferences ---

    /// Change the language and persist it under `lang`
    pub fn set_language(&self, language: Language) {
        {
            let mut state = self.inner.state.write();
            if state.language == language {
                return;
            }
            state.language = language;
        }

        self.persist(LANG_KEY, language.as_str());
        self.publish(vec![StoreEvent::LanguageChanged(language)]);
    }

    pub fn toggle_language(&self) {
        self.set_language(self.language().toggled());
    }

    /// Change the theme, persist it under `theme` and flip the dark flag
    pub fn set_theme(&self, theme: Theme) {
        {
            let mut state = self.inner.state.write();
            if state.theme == theme {
                return;
            }
            state.theme = theme;
        }

        self.persist(THEME_KEY, theme.as_str());
        self.publish(vec![StoreEvent::ThemeChanged {
            theme,
            dark_mode: theme.is_dark(),
        }]);
    }

    pub fn toggle_theme(&self) {
        self.set_theme(self.theme().toggled());
    }

    fn persist(&self, key: &str, value: &str) {
        if let Err(e) = self.inner.storage.set(key, value) {
            warn!(key, value, error = %e, "Failed to persist preference");
        }
    }

    // --- Selection ---

    /// Open the details window for `id`
    pub fn select_event(&self, id: &str) -> CoreResult<()> {
        if !self.inner.filter.read().catalog().contains(id) {
            return Err(CoreError::UnknownEvent(id.to_string()));
        }

        let changed = {
            let mut state = self.inner.state.write();
            let changed = state.selected_event.as_deref() != Some(id);
            state.selected_event = Some(id.to_string());
            changed
        };

        if changed {
            self.publish(vec![StoreEvent::SelectionChanged(Some(id.to_string()))]);
        }
        Ok(())
    }

    pub fn close_event(&self) {
        let was_open = self.inner.state.write().selected_event.take().is_some();
        if was_open {
            self.publish(vec![StoreEvent::SelectionChanged(None)]);
        }
    }

    // --- Filtering ---

    /// Home page search: sets the query and drops type and specialty
    pub fn set_search(&self, query: impl Into<String>) {
        self.apply_filter(FilterAction::Search(query.into()));
    }

    /// Directory page search: sets the query only
    pub fn set_directory_query(&self, query: impl Into<String>) {
        self.apply_filter(FilterAction::DirectorySearch(query.into()));
    }

    pub fn set_type(&self, event_type: TypeFilter) {
        self.apply_filter(FilterAction::SetType(event_type));
    }

    /// Show one specialty, starting from otherwise neutral filters
    pub fn select_specialty(&self, specialty: impl Into<String>) {
        self.apply_filter(FilterAction::SelectSpecialty(specialty.into()));
    }

    pub fn set_status(&self, status: StatusFilter) {
        self.apply_filter(FilterAction::SetStatus(status));
    }

    /// Reset every filter axis, close the details window and go home
    pub fn clear_all(&self) {
        self.apply_filter(FilterAction::ClearAll);
        self.close_event();
        self.set_view(AppView::Home);
    }

    fn apply_filter(&self, action: FilterAction) {
        let spec = {
            let mut engine = self.inner.filter.write();
            if !engine.apply(action) {
                return;
            }
            engine.spec().clone()
        };

        self.publish(vec![StoreEvent::FilterChanged(spec)]);
    }

    // --- Subscriptions ---

    /// Register for change notifications
    ///
    /// Only a weak reference is kept: dropping the subscriber also ends the
    /// subscription.
    pub fn subscribe(&self, subscriber: Arc<dyn StoreSubscriber>) -> SubscriptionId {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner
            .subscribers
            .write()
            .insert(id, Arc::downgrade(&subscriber));
        SubscriptionId(id)
    }

    /// Remove a subscription; returns whether it was registered
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.subscribers.write().remove(&id.0).is_some()
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        let mut subscribers = self.inner.subscribers.write();
        subscribers.retain(|_, weak| weak.strong_count() > 0);
        subscribers.len()
    }

    /// Deliver events to live subscribers, outside every store lock
    fn publish(&self, events: Vec<StoreEvent>) {
        if events.is_empty() {
            return;
        }

        let live: Vec<Arc<dyn StoreSubscriber>> = {
            let mut subscribers = self.inner.subscribers.write();
            subscribers.retain(|_, weak| weak.strong_count() > 0);
            subscribers.values().filter_map(Weak::upgrade).collect()
        };
        if live.is_empty() {
            return;
        }

        let state = self.state();
        for event in &events {
            for subscriber in &live {
                subscriber.on_store_event(event, &state);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EventType;
    use crate::events::subscriber_from_fn;
    use crate::preferences::MemoryStorage;
    use crate::session::Role;
    use crate::test_support::sample_catalog;

    fn store() -> SessionStore {
        SessionStore::new(sample_catalog(), Arc::new(MemoryStorage::new()))
    }

    fn user(name: &str) -> User {
        LoginRequest {
            email: format!("{}@med.dz", name.to_lowercase()),
            name: Some(name.to_string()),
            role: Role::Participant,
            ..LoginRequest::default()
        }
        .into_user()
    }

    fn recorder(store: &SessionStore) -> (Arc<dyn StoreSubscriber>, Arc<Mutex<Vec<StoreEvent>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let subscriber = subscriber_from_fn(move |event, _| sink.lock().push(event.clone()));
        store.subscribe(subscriber.clone());
        (subscriber, seen)
    }

    #[test]
    fn test_initial_state() {
        let store = store();
        let state = store.state();

        assert_eq!(state.current_view, AppView::Home);
        assert!(state.user.is_none());
        assert!(state.selected_event.is_none());
        assert_eq!(state.language, Language::En);
        assert_eq!(state.theme, Theme::Light);
        assert!(store.filter_spec().is_neutral());
    }

    #[test]
    fn test_login_then_logout() {
        let store = store();
        store.set_auth_intent(Some(AuthIntent::AuthorRequired));
        store.set_view(AppView::Directory);

        let amina = user("Amina");
        store.login(amina.clone());
        assert_eq!(store.user(), Some(amina));
        assert_eq!(store.auth_intent(), None);
        assert_eq!(store.current_view(), AppView::Directory);

        store.set_view(AppView::Profile);
        store.logout();
        assert_eq!(store.user(), None);
        assert_eq!(store.current_view(), AppView::Home);
    }

    #[test]
    fn test_profile_redirects_when_anonymous() {
        let store = store();

        assert_eq!(store.set_view(AppView::Profile), AppView::Auth);
        assert_eq!(store.auth_intent(), Some(AuthIntent::LoginRequired));

        store.login(user("Karim"));
        assert_eq!(store.set_view(AppView::Profile), AppView::Profile);
    }

    #[test]
    fn test_update_profile_requires_user() {
        let store = store();
        let profile = UserProfile {
            institution: "CHU Oran".to_string(),
            ..UserProfile::default()
        };

        store.update_profile(profile.clone());
        assert!(store.user().is_none());

        store.login(user("Sarah"));
        store.update_profile(profile.clone());
        assert_eq!(store.user().map(|u| u.profile), Some(profile));
    }

    #[test]
    fn test_language_survives_restart() {
        let storage: Arc<dyn PreferenceStorage> = Arc::new(MemoryStorage::new());
        let first = SessionStore::new(sample_catalog(), storage.clone());
        first.set_language(Language::Fr);
        first.set_theme(Theme::Dark);
        drop(first);

        let second = SessionStore::new(sample_catalog(), storage.clone());
        assert_eq!(second.language(), Language::Fr);
        assert_eq!(second.theme(), Theme::Dark);
        assert!(second.dark_mode());
        assert_eq!(second.translate("home"), "Accueil");
        assert_eq!(storage.get(LANG_KEY).as_deref(), Some("fr"));
    }

    #[test]
    fn test_select_event_must_exist() {
        let store = store();

        assert!(matches!(store.select_event("42"), Err(CoreError::UnknownEvent(_))));
        assert!(store.selected_event().is_none());

        store.select_event("2").unwrap();
        assert_eq!(store.selected_event().map(|e| e.id), Some("2".to_string()));

        store.close_event();
        assert!(store.selected_event().is_none());
    }

    #[test]
    fn test_clear_all_resets_session_slice() {
        let store = store();
        store.select_specialty("Surgery");
        store.set_type(TypeFilter::Only(EventType::Workshop));
        store.select_event("3").unwrap();
        store.set_view(AppView::Directory);

        store.clear_all();
        let after_once = store.filter_spec();
        store.clear_all();

        assert!(after_once.is_neutral());
        assert_eq!(store.filter_spec(), after_once);
        assert!(store.selected_event().is_none());
        assert_eq!(store.current_view(), AppView::Home);
    }

    #[test]
    fn test_archived_status_listing() {
        let store = store();
        store.set_status(StatusFilter::Archived);

        let ids: Vec<String> = store.visible_events().iter().map(|e| e.id.clone()).collect();
        assert_eq!(ids, vec!["5".to_string(), "6".to_string()]);

        store.set_type(TypeFilter::Only(EventType::Workshop));
        let ids: Vec<String> = store.visible_events().iter().map(|e| e.id.clone()).collect();
        assert_eq!(ids, vec!["6".to_string()]);

        store.select_specialty("Cardiology");
        store.set_status(StatusFilter::Archived);
        let ids: Vec<String> = store.visible_events().iter().map(|e| e.id.clone()).collect();
        assert_eq!(ids, vec!["5".to_string()]);
        assert!(store.visible_events().iter().all(|e| e.is_archived));
    }

    #[test]
    fn test_directory_query_reset_stays_on_directory() {
        let store = store();
        store.set_view(AppView::Directory);
        store.set_status(StatusFilter::Archived);
        store.set_directory_query("zzz");
        assert!(store.visible_events().is_empty());

        store.set_directory_query("");
        assert_eq!(store.current_view(), AppView::Directory);
        assert_eq!(store.filter_spec().status, StatusFilter::Archived);
        assert_eq!(store.visible_events().len(), 2);
    }

    #[test]
    fn test_request_author_access() {
        let store = store();
        store.request_author_access();
        assert_eq!(store.current_view(), AppView::Auth);
        assert_eq!(store.auth_intent(), Some(AuthIntent::AuthorRequired));

        store.leave_auth();
        assert_eq!(store.current_view(), AppView::Home);
        assert_eq!(store.auth_intent(), None);

        store.login(user("Yacine"));
        store.request_author_access();
        assert_eq!(store.auth_intent(), None);
    }

    #[test]
    fn test_subscribers_notified_and_removed() {
        let store = store();
        let (subscriber, seen) = recorder(&store);

        store.toggle_theme();
        store.set_search("oran");
        assert_eq!(
            seen.lock().first(),
            Some(&StoreEvent::ThemeChanged {
                theme: Theme::Dark,
                dark_mode: true,
            })
        );
        assert!(matches!(seen.lock().last(), Some(StoreEvent::FilterChanged(spec)) if spec.query == "oran"));

        assert_eq!(store.subscriber_count(), 1);
        drop(subscriber);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_unsubscribe() {
        let store = store();
        let seen = Arc::new(Mutex::new(0usize));
        let sink = seen.clone();
        let subscriber = subscriber_from_fn(move |_, _| *sink.lock() += 1);
        let id = store.subscribe(subscriber.clone());

        store.set_view(AppView::About);
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set_view(AppView::Home);

        assert_eq!(*seen.lock(), 1);
    }

    #[test]
    fn test_submit_login_without_runtime() {
        let store = store();
        let result = store.submit_login(LoginRequest::default(), Duration::from_millis(10));
        assert!(matches!(result, Err(CoreError::NoRuntime)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_completes_after_delay() {
        let store = store();
        store.set_view(AppView::Auth);
        store.set_auth_intent(Some(AuthIntent::AuthorRequired));

        store
            .submit_login(LoginRequest::default(), Duration::from_millis(1500))
            .unwrap();
        assert!(store.is_login_pending());

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert!(store.user().is_none());

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert!(!store.is_login_pending());
        assert!(store.is_authenticated());
        assert_eq!(store.auth_intent(), None);
        assert_eq!(store.current_view(), AppView::Home);
    }

    #[tokio::test(start_paused = true)]
    async fn test_logout_while_login_pending() {
        let store = store();
        store
            .submit_login(LoginRequest::default(), Duration::from_millis(1500))
            .unwrap();
        let ticket = store
            .inner
            .pending_login
            .lock()
            .as_ref()
            .map(|p| p.ticket)
            .unwrap();

        store.logout();
        assert!(!store.is_login_pending());

        // A completion that already woke up must not sign the user back in
        store.complete_login(ticket, user("Late"));
        assert!(store.user().is_none());

        tokio::time::sleep(Duration::from_millis(2000)).await;
        assert!(!store.is_authenticated());
        assert_eq!(store.current_view(), AppView::Home);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_login_never_completes() {
        let store = store();
        store
            .submit_login(LoginRequest::default(), Duration::from_millis(1500))
            .unwrap();

        assert!(store.cancel_login());
        assert!(!store.cancel_login());

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!(store.user().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_submit_replaces_first() {
        let store = store();
        let first = LoginRequest {
            name: Some("First".to_string()),
            ..LoginRequest::default()
        };
        let second = LoginRequest {
            name: Some("Second".to_string()),
            ..LoginRequest::default()
        };

        store.submit_login(first, Duration::from_millis(100)).unwrap();
        store.submit_login(second, Duration::from_millis(500)).unwrap();

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(store.user().is_none());

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(store.user().map(|u| u.name), Some("Second".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_store_cancels_login() {
        let store = store();
        let (_subscriber, seen) = recorder(&store);

        store
            .submit_login(LoginRequest::default(), Duration::from_millis(1500))
            .unwrap();
        drop(store);

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!(!seen
            .lock()
            .iter()
            .any(|e| matches!(e, StoreEvent::UserChanged { .. })));
    }
}
