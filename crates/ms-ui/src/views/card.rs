use egui::{RichText, Ui};
use ms_core::{Event, SessionStore};
use tracing::warn;

use crate::theme;

/// Width of one event card in the listing grids
pub const CARD_WIDTH: f32 = 280.0;

/// Summary card with a details button
pub fn event_card(ui: &mut Ui, store: &SessionStore, event: &Event) {
    let muted = theme::muted_color(store.theme());

    egui::Frame::group(ui.style())
        .rounding(10.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(event.event_type.as_str())
                        .small()
                        .color(theme::accent_color()),
                );
                ui.label(RichText::new(&event.category).small().color(muted));
                if event.is_archived {
                    ui.label(RichText::new(store.translate("archived")).small().color(muted));
                }
            });
            ui.label(RichText::new(&event.title).strong().size(16.0));
            ui.label(RichText::new(format!("{} · {}", event.date, event.location)).color(muted));
            ui.label(
                RichText::new(format!(
                    "{} {}",
                    event.attendee_count,
                    store.translate("participants")
                ))
                .small()
                .color(muted),
            );

            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new(&event.price).strong());
                if ui.button(store.translate("viewDetails")).clicked() {
                    if let Err(e) = store.select_event(&event.id) {
                        warn!(error = %e, "Could not open event details");
                    }
                }
            });
        });
}

/// Wrapped grid of cards
pub fn event_grid(ui: &mut Ui, store: &SessionStore, events: &[Event]) {
    ui.horizontal_wrapped(|ui| {
        for event in events {
            event_card(ui, store, event);
        }
    });
}

/// Shown in place of a grid with nothing in it; `reset` runs on the reset button
pub fn empty_state(ui: &mut Ui, store: &SessionStore, reset: impl FnOnce(&SessionStore)) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.label(RichText::new(store.translate("noMatches")).strong().size(18.0));
        ui.label(store.translate("noMatchesSub"));
        ui.add_space(8.0);
        if ui.button(store.translate("reset")).clicked() {
            reset(store);
        }
        ui.add_space(24.0);
    });
}
