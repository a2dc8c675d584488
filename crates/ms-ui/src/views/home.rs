//! Landing page: hero search, specialty chips, type tabs and the preview grid

use egui::{RichText, Ui};
use ms_core::{AppView, EventType, SessionStore, TypeFilter};
use ms_data::{CategoryIndex, SPECIALTIES};

use super::card;

pub fn show(ui: &mut Ui, store: &SessionStore, index: &CategoryIndex) {
    let spec = store.filter_spec();

    ui.vertical_centered(|ui| {
        ui.add_space(32.0);
        ui.label(RichText::new(store.translate("heroTitle")).heading().strong());
        ui.label(store.translate("heroSub"));
        ui.add_space(16.0);

        let mut query = spec.query.clone();
        let response = ui.add(
            egui::TextEdit::singleline(&mut query)
                .hint_text(store.translate("searchPlaceholder"))
                .desired_width(420.0),
        );
        if response.changed() {
            store.set_search(query);
        }
        ui.add_space(24.0);
    });

    ui.label(RichText::new(store.translate("specialties")).strong());
    ui.horizontal_wrapped(|ui| {
        for specialty in SPECIALTIES {
            let selected = spec.specialty.as_deref() == Some(specialty);
            let count = index.upcoming_count(specialty);
            let label = if count > 0 {
                format!("{} ({})", specialty, count)
            } else {
                specialty.to_string()
            };
            if ui.selectable_label(selected, label).clicked() {
                store.select_specialty(specialty);
            }
        }
    });
    ui.add_space(16.0);

    type_tabs(ui, store, spec.event_type);
    ui.add_space(8.0);

    let heading = if spec.query.is_empty() && spec.specialty.is_none() {
        store.translate("upcomingEvents")
    } else {
        store.translate("activeSearch")
    };
    ui.horizontal(|ui| {
        ui.label(RichText::new(heading).size(20.0).strong());
        if !spec.query.is_empty() {
            ui.label(RichText::new(format!("\"{}\"", spec.query)).italics());
        }
        if let Some(specialty) = &spec.specialty {
            ui.label(RichText::new(specialty).italics());
        }
    });

    let preview = store.home_preview();
    if preview.events.is_empty() {
        card::empty_state(ui, store, SessionStore::clear_all);
        return;
    }

    card::event_grid(ui, store, &preview.events);

    if preview.show_see_more {
        ui.vertical_centered(|ui| {
            ui.add_space(12.0);
            if ui.button(store.translate("seeMoreEvents")).clicked() {
                store.set_view(AppView::Directory);
            }
        });
    }
}

/// "All" followed by one tab per event type
pub fn type_tabs(ui: &mut Ui, store: &SessionStore, current: TypeFilter) {
    ui.horizontal(|ui| {
        if ui
            .selectable_label(current == TypeFilter::All, store.translate("allTypes"))
            .clicked()
        {
            store.set_type(TypeFilter::All);
        }
        for event_type in EventType::ALL {
            let filter = TypeFilter::Only(event_type);
            if ui
                .selectable_label(current == filter, event_type.as_str())
                .clicked()
            {
                store.set_type(filter);
            }
        }
    });
}
