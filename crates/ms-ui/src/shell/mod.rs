use std::sync::Arc;
use std::time::Duration;

use egui::{CentralPanel, Context, RichText, ScrollArea, TopBottomPanel};
use ms_core::{AppView, SessionStore, StoreSubscriber, SubscriptionId};
use ms_data::CategoryIndex;
use tokio::runtime::Handle;

use crate::theme;
use crate::views::{self, AuthForm, AuthMode, ProfileForm};

/// Shell configuration
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Delay passed to the simulated sign-in
    pub login_delay: Duration,
    pub show_footer: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            login_delay: ms_core::DEFAULT_LOGIN_DELAY,
            show_footer: true,
        }
    }
}

/// Application shell that lays out the views around the session store
pub struct AppShell {
    store: SessionStore,
    runtime: Handle,
    config: ShellConfig,
    categories: CategoryIndex,
    auth_form: AuthForm,
    profile_form: ProfileForm,
    /// Held so the store's weak reference stays alive
    _subscriber: Arc<dyn StoreSubscriber>,
    subscription: SubscriptionId,
}

impl AppShell {
    pub fn new(ctx: &Context, store: SessionStore, runtime: Handle, config: ShellConfig) -> Self {
        theme::apply_theme(ctx, store.theme());

        let subscriber = theme::store_subscriber(ctx.clone());
        let subscription = store.subscribe(subscriber.clone());
        let categories = CategoryIndex::build(&store.catalog());

        Self {
            store,
            runtime,
            config,
            categories,
            auth_form: AuthForm::new(),
            profile_form: ProfileForm::new(),
            _subscriber: subscriber,
            subscription,
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Render one frame
    pub fn show(&mut self, ctx: &Context) {
        let view = self.store.current_view();

        if view.shows_chrome() {
            self.menu_bar(ctx);
            if self.config.show_footer {
                footer(ctx, &self.store);
            }
        }

        CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .id_source(view.to_string())
                .auto_shrink([false, false])
                .show(ui, |ui| match view {
                    AppView::Home => views::home::show(ui, &self.store, &self.categories),
                    AppView::Directory => views::directory::show(ui, &self.store),
                    AppView::About => views::about::show(ui, &self.store),
                    AppView::Auth => self.auth_form.show(
                        ui,
                        &self.store,
                        &self.runtime,
                        self.config.login_delay,
                    ),
                    AppView::Profile => self.profile_form.show(ui, &self.store),
                });
        });

        views::event_window::show(ctx, &self.store);
    }

    fn menu_bar(&mut self, ctx: &Context) {
        let store = &self.store;
        let auth_form = &mut self.auth_form;

        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                if ui
                    .button(RichText::new("MedSymposium").strong().color(theme::accent_color()))
                    .clicked()
                {
                    store.clear_all();
                }
                ui.separator();

                let current = store.current_view();
                if ui
                    .selectable_label(current == AppView::Home, store.translate("home"))
                    .clicked()
                {
                    store.clear_all();
                }
                if ui
                    .selectable_label(current == AppView::Directory, store.translate("events"))
                    .clicked()
                {
                    store.set_view(AppView::Directory);
                }
                if ui
                    .selectable_label(current == AppView::About, store.translate("about"))
                    .clicked()
                {
                    store.set_view(AppView::About);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    match store.user() {
                        Some(user) => {
                            ui.menu_button(user.first_name(), |ui| {
                                if ui.button(store.translate("profile")).clicked() {
                                    store.set_view(AppView::Profile);
                                    ui.close_menu();
                                }
                                if ui
                                    .button(
                                        RichText::new(store.translate("logout"))
                                            .color(theme::error_color()),
                                    )
                                    .clicked()
                                {
                                    store.logout();
                                    ui.close_menu();
                                }
                            });
                        }
                        None => {
                            if ui.button(store.translate("register")).clicked() {
                                auth_form.set_mode(AuthMode::Register);
                                store.set_view(AppView::Auth);
                            }
                            if ui.button(store.translate("login")).clicked() {
                                auth_form.set_mode(AuthMode::Login);
                                store.set_view(AppView::Auth);
                            }
                        }
                    }

                    ui.menu_button("⚙", |ui| {
                        ui.label(RichText::new(store.translate("preferences")).strong());
                        let language = store.language().toggled();
                        if ui
                            .button(format!(
                                "{}: {}",
                                store.translate("language"),
                                language.as_str().to_uppercase()
                            ))
                            .clicked()
                        {
                            store.toggle_language();
                        }
                        let mut dark = store.dark_mode();
                        if ui.checkbox(&mut dark, store.translate("theme_label")).changed() {
                            store.toggle_theme();
                        }
                    });
                });
            });
        });
    }
}

impl Drop for AppShell {
    fn drop(&mut self) {
        self.store.unsubscribe(self.subscription);
    }
}

fn footer(ctx: &Context, store: &SessionStore) {
    TopBottomPanel::bottom("footer").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new("MedSymposium").small().strong());
            ui.label(
                RichText::new(store.translate("heroTitle"))
                    .small()
                    .color(theme::muted_color(store.theme())),
            );
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use ms_core::MemoryStorage;

    #[test]
    fn test_shell_unsubscribes_on_drop() {
        let ctx = Context::default();
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap();
        let store = SessionStore::new(
            ms_data::builtin_catalog().unwrap(),
            Arc::new(MemoryStorage::new()),
        );

        let shell = AppShell::new(&ctx, store.clone(), runtime.handle().clone(), ShellConfig::default());
        assert_eq!(store.subscriber_count(), 1);

        drop(shell);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_shell_renders_every_view() {
        let ctx = Context::default();
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap();
        let store = SessionStore::new(
            ms_data::builtin_catalog().unwrap(),
            Arc::new(MemoryStorage::new()),
        );
        let mut shell = AppShell::new(&ctx, store.clone(), runtime.handle().clone(), ShellConfig::default());

        store.select_event("1").unwrap();
        for view in AppView::ALL {
            store.set_view(view);
            let _ = ctx.run(egui::RawInput::default(), |ctx| shell.show(ctx));
        }
        assert_eq!(store.selected_event().map(|e| e.id), Some("1".to_string()));
    }
}
