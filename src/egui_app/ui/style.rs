use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,
    pub panel_outline: Color32,
    pub placeholder: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent_blue: Color32,
    pub accent_purple: Color32,
    pub drop_highlight: Color32,
    pub danger: Color32,
    pub warning: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(12, 13, 16),
        bg_secondary: Color32::from_rgb(24, 26, 31),
        bg_tertiary: Color32::from_rgb(38, 41, 48),
        panel_outline: Color32::from_rgb(52, 56, 64),
        placeholder: Color32::from_rgb(44, 47, 54),
        text_primary: Color32::from_rgb(214, 218, 224),
        text_muted: Color32::from_rgb(140, 146, 155),
        accent_blue: Color32::from_rgb(96, 165, 250),
        accent_purple: Color32::from_rgb(168, 85, 247),
        drop_highlight: Color32::from_rgb(30, 58, 96),
        danger: Color32::from_rgb(220, 68, 68),
        warning: Color32::from_rgb(200, 128, 96),
    }
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_primary;
    visuals.panel_fill = palette.bg_primary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.extreme_bg_color = palette.bg_primary;
    visuals.faint_bg_color = palette.bg_secondary;
    visuals.error_fg_color = palette.danger;
    visuals.warn_fg_color = palette.warning;
    visuals.selection.bg_fill = palette.accent_purple;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent_blue);
    visuals.widgets.noninteractive.bg_fill = palette.bg_secondary;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    soften(&mut visuals.widgets.inactive, palette);
    soften(&mut visuals.widgets.hovered, palette);
    soften(&mut visuals.widgets.active, palette);
    soften(&mut visuals.widgets.open, palette);
    visuals.window_corner_radius = CornerRadius::same(8);
    visuals.popup_shadow = Shadow::NONE;
}

fn soften(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::same(6);
    vis.bg_fill = palette.bg_tertiary;
    vis.weak_bg_fill = palette.bg_tertiary;
    vis.bg_stroke = Stroke::new(1.0, palette.panel_outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

pub fn card_fill() -> Color32 {
    palette().bg_secondary
}

pub fn card_border() -> Stroke {
    Stroke::new(1.0, palette().panel_outline)
}

/// Severity of the footer status message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Busy,
    Info,
    Warning,
    Error,
}

pub fn status_badge(tone: StatusTone) -> (&'static str, Color32) {
    match tone {
        StatusTone::Idle => ("Idle", Color32::from_rgb(42, 42, 42)),
        StatusTone::Busy => ("Training", Color32::from_rgb(31, 139, 255)),
        StatusTone::Info => ("Info", Color32::from_rgb(64, 140, 112)),
        StatusTone::Warning => ("Warning", Color32::from_rgb(192, 138, 43)),
        StatusTone::Error => ("Error", Color32::from_rgb(192, 57, 43)),
    }
}

/// Blend `color` over the primary background at `alpha`.
pub fn soften_color(color: Color32, alpha: f32) -> Color32 {
    let base = palette().bg_primary;
    let mix = |fg: u8, bg: u8| (f32::from(fg) * alpha + f32::from(bg) * (1.0 - alpha)).round() as u8;
    Color32::from_rgb(
        mix(color.r(), base.r()),
        mix(color.g(), base.g()),
        mix(color.b(), base.b()),
    )
}
