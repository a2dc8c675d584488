//! Full event directory

use egui::{RichText, Ui};
use ms_core::{AppView, SessionStore, StatusFilter};

use super::{card, home};

pub fn show(ui: &mut Ui, store: &SessionStore) {
    let spec = store.filter_spec();

    if ui.link(store.translate("backToHome")).clicked() {
        store.set_view(AppView::Directory.back_target());
        return;
    }
    ui.add_space(8.0);

    ui.label(RichText::new(store.translate("allEvents")).heading().strong());
    ui.label(store.translate("allEventsSub"));
    ui.add_space(12.0);

    ui.horizontal(|ui| {
        let mut query = spec.query.clone();
        let response = ui.add(
            egui::TextEdit::singleline(&mut query)
                .hint_text(store.translate("searchPlaceholder"))
                .desired_width(320.0),
        );
        if response.changed() {
            store.set_directory_query(query);
        }
        if !spec.query.is_empty() && ui.small_button("✕").clicked() {
            store.set_directory_query(String::new());
        }

        ui.separator();

        for (status, key) in [
            (StatusFilter::Upcoming, "upcoming"),
            (StatusFilter::Archived, "archived"),
        ] {
            if ui
                .selectable_label(spec.status == status, store.translate(key))
                .clicked()
            {
                store.set_status(status);
            }
        }
    });
    ui.add_space(4.0);
    home::type_tabs(ui, store, spec.event_type);
    ui.add_space(12.0);

    let visible = store.visible_events();
    if visible.is_empty() {
        card::empty_state(ui, store, reset_query);
    } else {
        card::event_grid(ui, store, &visible);
    }

    ui.add_space(24.0);
    call_to_action(ui, store);
}

/// Reset button of the empty listing: drops the query, keeps status and view
fn reset_query(store: &SessionStore) {
    store.set_directory_query(String::new());
}

fn call_to_action(ui: &mut Ui, store: &SessionStore) {
    egui::Frame::group(ui.style())
        .rounding(12.0)
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.label(RichText::new(store.translate("directoryCtaTitle")).strong().size(18.0));
            ui.label(store.translate("directoryCtaSub"));
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button(store.translate("createYours")).clicked() {
                    store.set_view(AppView::Auth);
                }
                if ui.button(store.translate("submitWork")).clicked() {
                    store.request_author_access();
                }
                if ui.button(store.translate("joinUs")).clicked() {
                    store.set_view(AppView::Auth);
                }
            });
        });
}
