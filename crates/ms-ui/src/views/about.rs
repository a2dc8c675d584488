use egui::{RichText, Ui};
use ms_core::{AppView, SessionStore};

pub fn show(ui: &mut Ui, store: &SessionStore) {
    if ui.link(store.translate("backToHome")).clicked() {
        store.set_view(AppView::About.back_target());
        return;
    }
    ui.add_space(16.0);
    ui.label(RichText::new(store.translate("aboutTitle")).heading().strong());
    ui.add_space(8.0);
    ui.label(store.translate("aboutBody"));
}
