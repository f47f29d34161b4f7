use egui::{Color32, FontId, Rounding, Stroke, Visuals};

use crate::status::StatusTone;

// ── Palette ──────────────────────────────────────────────────────────────────

/// Colors for one appearance mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub bg_page: Color32,
    pub bg_card: Color32,
    pub bg_header_row: Color32,
    pub bg_track: Color32,
    pub border: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_dim: Color32,
    pub accent: Color32,
    pub grid_line: Color32,
    pub map_water: Color32,
}

pub const LIGHT: Palette = Palette {
    bg_page: Color32::from_rgb(0xf9, 0xfa, 0xfb),
    bg_card: Color32::WHITE,
    bg_header_row: Color32::from_rgb(0xf9, 0xfa, 0xfb),
    bg_track: Color32::from_rgb(0xe5, 0xe7, 0xeb),
    border: Color32::from_rgb(0xe5, 0xe7, 0xeb),
    text_primary: Color32::from_rgb(0x11, 0x18, 0x27),
    text_secondary: Color32::from_rgb(0x4b, 0x55, 0x63),
    text_dim: Color32::from_rgb(0x6b, 0x72, 0x80),
    accent: Color32::from_rgb(0x25, 0x63, 0xeb),
    grid_line: Color32::from_rgb(0xe5, 0xe7, 0xeb),
    map_water: Color32::from_rgb(0xe8, 0xf1, 0xf8),
};

pub const DARK: Palette = Palette {
    bg_page: Color32::from_rgb(0x11, 0x18, 0x27),
    bg_card: Color32::from_rgb(0x1f, 0x29, 0x37),
    bg_header_row: Color32::from_rgb(0x11, 0x18, 0x27),
    bg_track: Color32::from_rgb(0x4b, 0x55, 0x63),
    border: Color32::from_rgb(0x37, 0x41, 0x51),
    text_primary: Color32::WHITE,
    text_secondary: Color32::from_rgb(0xd1, 0xd5, 0xdb),
    text_dim: Color32::from_rgb(0x9c, 0xa3, 0xaf),
    accent: Color32::from_rgb(0x60, 0xa5, 0xfa),
    grid_line: Color32::from_rgb(0x37, 0x41, 0x51),
    map_water: Color32::from_rgb(0x1a, 0x2a, 0x3a),
};

/// Palette matching the context's current visuals.
pub fn palette(ctx: &egui::Context) -> &'static Palette {
    if ctx.style().visuals.dark_mode {
        &DARK
    } else {
        &LIGHT
    }
}

/// Foreground and background of a status badge.
pub fn tone_colors(tone: StatusTone, dark: bool) -> (Color32, Color32) {
    let (fg_light, bg_light, fg_dark, bg_dark) = match tone {
        StatusTone::Positive => ((0x16, 0x65, 0x34), (0xdc, 0xfc, 0xe7), (0x86, 0xef, 0xac), (0x14, 0x53, 0x2d)),
        StatusTone::Informational => ((0x1e, 0x40, 0xaf), (0xdb, 0xea, 0xfe), (0x93, 0xc5, 0xfd), (0x1e, 0x3a, 0x8a)),
        StatusTone::Neutral => ((0x1f, 0x29, 0x37), (0xf3, 0xf4, 0xf6), (0xd1, 0xd5, 0xdb), (0x37, 0x41, 0x51)),
        StatusTone::Caution => ((0x85, 0x4d, 0x0e), (0xfe, 0xf9, 0xc3), (0xfd, 0xe0, 0x47), (0x71, 0x3f, 0x12)),
        StatusTone::Critical => ((0x99, 0x1b, 0x1b), (0xfe, 0xe2, 0xe2), (0xfc, 0xa5, 0xa5), (0x7f, 0x1d, 0x1d)),
    };
    let rgb = |(r, g, b): (u8, u8, u8)| Color32::from_rgb(r, g, b);
    if dark {
        (rgb(fg_dark), rgb(bg_dark))
    } else {
        (rgb(fg_light), rgb(bg_light))
    }
}

/// Solid fill for a completion bar.
pub fn tone_fill(tone: StatusTone, dark: bool) -> Color32 {
    match tone {
        StatusTone::Positive => Color32::from_rgb(0x22, 0xc5, 0x5e),
        StatusTone::Informational => Color32::from_rgb(0x3b, 0x82, 0xf6),
        _ if dark => Color32::from_rgb(0x6b, 0x72, 0x80),
        _ => Color32::from_rgb(0xd1, 0xd5, 0xdb),
    }
}

// ── Sizes ────────────────────────────────────────────────────────────────────

pub const CARD_ROUNDING: f32 = 8.0;
pub const CARD_PADDING: f32 = 20.0;
pub const BADGE_ROUNDING: f32 = 9.0;
pub const SECTION_GAP: f32 = 16.0;

// ── Fonts ────────────────────────────────────────────────────────────────────

pub fn font_title() -> FontId {
    FontId::proportional(24.0)
}

pub fn font_heading() -> FontId {
    FontId::proportional(17.0)
}

pub fn font_body() -> FontId {
    FontId::proportional(13.0)
}

pub fn font_small() -> FontId {
    FontId::proportional(11.0)
}

// ── Apply custom visuals ─────────────────────────────────────────────────────

pub fn apply_theme(ctx: &egui::Context, dark: bool) {
    let p = if dark { &DARK } else { &LIGHT };
    let mut visuals = if dark { Visuals::dark() } else { Visuals::light() };

    visuals.override_text_color = Some(p.text_primary);
    visuals.panel_fill = p.bg_page;
    visuals.window_fill = p.bg_card;
    visuals.extreme_bg_color = p.bg_card;
    visuals.faint_bg_color = p.bg_header_row;

    visuals.widgets.noninteractive.bg_fill = p.bg_card;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, p.border);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, p.text_secondary);
    visuals.widgets.noninteractive.rounding = Rounding::same(6.0);

    visuals.widgets.inactive.bg_fill = p.bg_card;
    visuals.widgets.inactive.weak_bg_fill = p.bg_card;
    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, p.border);
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, p.text_primary);
    visuals.widgets.inactive.rounding = Rounding::same(6.0);

    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, p.accent);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, p.text_primary);
    visuals.widgets.hovered.rounding = Rounding::same(6.0);

    visuals.widgets.active.bg_stroke = Stroke::new(1.0, p.accent);
    visuals.widgets.active.rounding = Rounding::same(6.0);
    visuals.widgets.open.bg_stroke = Stroke::new(1.0, p.accent);
    visuals.widgets.open.rounding = Rounding::same(6.0);

    visuals.selection.stroke = Stroke::new(1.0, p.accent);
    visuals.window_rounding = Rounding::same(CARD_ROUNDING);
    visuals.window_stroke = Stroke::new(1.0, p.border);
    visuals.striped = false;

    ctx.set_theme(if dark { egui::Theme::Dark } else { egui::Theme::Light });
    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 5.0);
    ctx.set_style(style);
}
