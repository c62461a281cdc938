use egui::{Color32, Context, FontFamily, FontId, Id, Rounding, Stroke, Style, TextStyle, Visuals};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use tracing::debug;

/// Theme configuration
pub struct Theme {
    pub name: String,
    pub dark_mode: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "Tour de Data Light".to_string(),
            dark_mode: false,
        }
    }
}

/// Presentation constants shared by every mounted control
#[derive(Debug, Clone)]
pub struct ControlStyle {
    pub container_fill: Color32,
    pub container_rounding: Rounding,
    pub container_margin: egui::Margin,
    pub button_fill: Color32,
    pub active_fill: Color32,
    pub text_color: Color32,
    pub active_text_color: Color32,
    pub value_size: f32,
    pub gap: f32,
}

/// Built once for the whole process
pub static CONTROL_STYLE: Lazy<ControlStyle> = Lazy::new(|| ControlStyle {
    container_fill: Color32::from_rgb(243, 244, 246),
    container_rounding: Rounding::same(6.0),
    container_margin: egui::Margin::symmetric(8.0, 4.0),
    button_fill: Color32::from_rgb(229, 231, 235),
    active_fill: Color32::WHITE,
    text_color: Color32::from_rgb(55, 65, 81),
    active_text_color: Color32::from_rgb(31, 41, 55),
    value_size: 20.0,
    gap: 6.0,
});

fn control_styles_id() -> Id {
    Id::new("td-control-styles")
}

/// Install the control styles on `ctx`, once.
///
/// Later calls on the same context are no-ops. Returns `true` when this call
/// installed the styles.
pub fn install_control_styles(ctx: &Context) -> bool {
    let id = control_styles_id();
    if ctx.data(|d| d.get_temp::<bool>(id)).unwrap_or(false) {
        return false;
    }

    let control = &*CONTROL_STYLE;
    let mut style = (*ctx.style()).clone();
    style.visuals.selection.bg_fill = control.active_fill;
    style.visuals.selection.stroke = Stroke::new(1.0, control.active_text_color);
    style.visuals.widgets.inactive.weak_bg_fill = control.button_fill;
    style.visuals.widgets.inactive.bg_fill = control.button_fill;
    style.spacing.button_padding = egui::vec2(10.0, 5.0);
    ctx.set_style(style);

    ctx.data_mut(|d| d.insert_temp(id, true));
    debug!("Installed control styles");
    true
}

/// Apply the application theme (light dashboard palette)
pub fn apply_theme(ctx: &Context, theme: &Theme) {
    let mut style = Style::default();
    let mut visuals = if theme.dark_mode { Visuals::dark() } else { Visuals::light() };

    let panel_bg = Color32::from_rgb(250, 250, 251);
    let widget_bg = Color32::from_rgb(229, 231, 235);
    let hover_color = Color32::from_rgb(209, 213, 219);
    let accent_color = accent_color();
    let text_color = Color32::from_rgb(55, 65, 81);

    if !theme.dark_mode {
        visuals.window_fill = panel_bg;
        visuals.panel_fill = panel_bg;
        visuals.faint_bg_color = widget_bg;

        visuals.widgets.inactive.bg_fill = widget_bg;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, text_color);
        visuals.widgets.hovered.bg_fill = hover_color;
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, text_color);
    }

    for widgets in [
        &mut visuals.widgets.noninteractive,
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
    ] {
        widgets.rounding = Rounding::same(4.0);
    }

    visuals.hyperlink_color = accent_color;

    style.spacing.item_spacing = egui::vec2(8.0, 4.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);

    let mut font_sizes = BTreeMap::new();
    font_sizes.insert(TextStyle::Small, FontId::new(11.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Body, FontId::new(14.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Button, FontId::new(14.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Heading, FontId::new(22.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Monospace, FontId::new(12.0, FontFamily::Monospace));
    style.text_styles = font_sizes;

    style.visuals = visuals;
    ctx.set_style(style);
}

/// Get the accent color for the theme
pub fn accent_color() -> Color32 {
    Color32::from_rgb(59, 130, 246)
}
