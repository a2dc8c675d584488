use std::collections::BTreeMap;
use std::sync::Arc;

use egui::{Color32, Context, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};
use ms_core::{subscriber_from_fn, StoreEvent, StoreSubscriber, Theme};

/// Colours that differ between the light and dark looks
struct Palette {
    panel_bg: Color32,
    extreme_bg: Color32,
    widget_bg: Color32,
    hover: Color32,
    active: Color32,
    border: Color32,
    text: Color32,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        if theme.is_dark() {
            Self {
                panel_bg: Color32::from_rgb(0, 30, 60),
                extreme_bg: Color32::from_rgb(0, 20, 40),
                widget_bg: Color32::from_rgb(10, 45, 80),
                hover: Color32::from_rgb(20, 60, 100),
                active: Color32::from_rgb(30, 75, 120),
                border: Color32::from_rgb(40, 70, 105),
                text: Color32::from_rgb(226, 232, 240),
            }
        } else {
            Self {
                panel_bg: Color32::from_rgb(248, 250, 252),
                extreme_bg: Color32::WHITE,
                widget_bg: Color32::from_rgb(241, 245, 249),
                hover: Color32::from_rgb(226, 232, 240),
                active: Color32::from_rgb(203, 213, 225),
                border: Color32::from_rgb(203, 213, 225),
                text: Color32::from_rgb(0, 30, 60),
            }
        }
    }
}

/// Apply the application look for `theme`
pub fn apply_theme(ctx: &Context, theme: Theme) {
    let palette = Palette::for_theme(theme);
    let accent = accent_color();

    let mut style = Style::default();
    let mut visuals = if theme.is_dark() {
        Visuals::dark()
    } else {
        Visuals::light()
    };

    visuals.window_fill = palette.panel_bg;
    visuals.panel_fill = palette.panel_bg;
    visuals.extreme_bg_color = palette.extreme_bg;
    visuals.faint_bg_color = palette.widget_bg;

    for widget in [
        &mut visuals.widgets.noninteractive,
        &mut visuals.widgets.inactive,
    ] {
        widget.bg_fill = palette.widget_bg;
        widget.weak_bg_fill = palette.widget_bg;
        widget.bg_stroke = Stroke::new(1.0, palette.border);
        widget.fg_stroke = Stroke::new(1.0, palette.text);
        widget.rounding = Rounding::same(6.0);
    }

    visuals.widgets.hovered.bg_fill = palette.hover;
    visuals.widgets.hovered.weak_bg_fill = palette.hover;
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, accent);
    visuals.widgets.hovered.rounding = Rounding::same(6.0);

    visuals.widgets.active.bg_fill = palette.active;
    visuals.widgets.active.weak_bg_fill = palette.active;
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, accent);
    visuals.widgets.active.rounding = Rounding::same(6.0);

    visuals.selection.bg_fill = accent.linear_multiply(0.4);
    visuals.selection.stroke = Stroke::new(1.0, accent);
    visuals.hyperlink_color = accent;

    visuals.window_shadow.extrusion = 12.0;
    visuals.popup_shadow.extrusion = 4.0;

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 5.0);
    style.spacing.menu_margin = egui::Margin::same(8.0);

    let mut font_sizes = BTreeMap::new();
    font_sizes.insert(TextStyle::Small, FontId::new(11.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Body, FontId::new(14.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Button, FontId::new(14.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Heading, FontId::new(24.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Monospace, FontId::new(12.0, FontFamily::Monospace));
    style.text_styles = font_sizes;

    style.visuals = visuals;
    ctx.set_style(style);
}

/// Keeps the egui context in step with the store
///
/// Store changes can be committed off the UI thread (the login timer), so
/// every event requests a repaint. Theme changes are applied immediately.
pub fn store_subscriber(ctx: Context) -> Arc<dyn StoreSubscriber> {
    subscriber_from_fn(move |event, _state| {
        if let StoreEvent::ThemeChanged { theme, .. } = event {
            apply_theme(&ctx, *theme);
        }
        ctx.request_repaint();
    })
}

pub fn accent_color() -> Color32 {
    Color32::from_rgb(14, 165, 233)
}

pub fn error_color() -> Color32 {
    Color32::from_rgb(230, 80, 80)
}

pub fn warning_color() -> Color32 {
    Color32::from_rgb(245, 158, 11)
}

/// Secondary text such as card metadata
pub fn muted_color(theme: Theme) -> Color32 {
    if theme.is_dark() {
        Color32::from_rgb(148, 163, 184)
    } else {
        Color32::from_rgb(100, 116, 139)
    }
}
