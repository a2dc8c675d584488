//! Details window for the selected event

use egui::{Context, RichText, Ui};
use ms_core::{AppView, Event, SessionStore};

use crate::theme;

pub fn show(ctx: &Context, store: &SessionStore) {
    let Some(event) = store.selected_event() else {
        return;
    };

    let mut open = true;
    egui::Window::new(RichText::new(&event.title).strong())
        .id(egui::Id::new("event_details"))
        .open(&mut open)
        .collapsible(false)
        .default_width(560.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(520.0)
                .show(ui, |ui| details(ui, store, &event));
        });

    if !open {
        store.close_event();
    }
}

fn details(ui: &mut Ui, store: &SessionStore, event: &Event) {
    let muted = theme::muted_color(store.theme());

    ui.horizontal(|ui| {
        ui.label(RichText::new(event.event_type.as_str()).color(theme::accent_color()));
        ui.label(
            RichText::new(format!("{}: {}", store.translate("theme"), event.category))
                .color(theme::accent_color()),
        );
    });
    ui.add_space(4.0);
    ui.label(format!("{}: {}", store.translate("date"), event.date));
    ui.label(format!("{}: {}", store.translate("location"), event.location));
    ui.label(format!(
        "{}+ {}",
        event.attendee_count,
        store.translate("participants")
    ));

    section(ui, &store.translate("description"));
    ui.label(&event.description);

    if !event.speakers.is_empty() {
        section(ui, &store.translate("speakers"));
        for speaker in &event.speakers {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&speaker.name).strong());
                ui.label(RichText::new(&speaker.role).color(muted));
            });
        }
    }

    if !event.committee.is_empty() {
        section(ui, &store.translate("committee"));
        ui.label(event.committee.join(", "));
    }

    if !event.sessions.is_empty() {
        section(ui, &store.translate("sessions"));
        egui::Grid::new("event_sessions")
            .num_columns(3)
            .striped(true)
            .show(ui, |ui| {
                for session in &event.sessions {
                    ui.label(RichText::new(&session.time).monospace());
                    ui.label(&session.title);
                    ui.label(RichText::new(&session.room).color(muted));
                    ui.end_row();
                }
            });
    }

    section(ui, &store.translate("contactInfo"));
    ui.hyperlink_to(event.contact_email.as_str(), format!("mailto:{}", event.contact_email));
    ui.label(&event.contact_phone);

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        if event.is_archived {
            ui.add_enabled(false, egui::Button::new(store.translate("archived")));
        } else if ui
            .button(format!("{} · {}", store.translate("register"), event.price))
            .clicked()
        {
            store.close_event();
            store.set_view(AppView::Auth);
        }
        if ui.button(store.translate("close")).clicked() {
            store.close_event();
        }
    });
}

fn section(ui: &mut Ui, title: &str) {
    ui.add_space(10.0);
    ui.label(RichText::new(title).strong().size(16.0));
}
