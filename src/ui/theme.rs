use egui::{Color32, FontId, Rounding, Stroke, Visuals};
use serde::{Deserialize, Serialize};

// ── Mode ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            ThemeMode::Light => LIGHT,
            ThemeMode::Dark => DARK,
        }
    }
}

// ── Palette ──────────────────────────────────────────────────────────────────

/// Shell colours for one mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub desktop_top: Color32,
    pub desktop_bottom: Color32,
    pub glass: Color32,
    pub glass_stroke: Color32,
    pub window_bg: Color32,
    pub window_header: Color32,
    pub card_bg: Color32,
    pub border_subtle: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_dim: Color32,
    pub accent: Color32,
    pub axis_line: Color32,
    pub hover: Color32,
}

pub const LIGHT: Palette = Palette {
    desktop_top: Color32::from_rgb(191, 219, 254),
    desktop_bottom: Color32::from_rgb(233, 213, 255),
    glass: Color32::from_rgba_premultiplied(230, 230, 230, 200),
    glass_stroke: Color32::from_rgba_premultiplied(200, 200, 200, 120),
    window_bg: Color32::from_rgb(255, 255, 255),
    window_header: Color32::from_rgb(243, 244, 246),
    card_bg: Color32::from_rgb(249, 250, 251),
    border_subtle: Color32::from_rgb(229, 231, 235),
    text_primary: Color32::from_rgb(17, 24, 39),
    text_secondary: Color32::from_rgb(75, 85, 99),
    text_dim: Color32::from_rgb(156, 163, 175),
    accent: Color32::from_rgb(59, 130, 246),
    axis_line: Color32::from_rgb(209, 213, 219),
    hover: Color32::from_rgba_premultiplied(0, 0, 0, 14),
};

pub const DARK: Palette = Palette {
    desktop_top: Color32::from_rgb(17, 24, 39),
    desktop_bottom: Color32::from_rgb(49, 46, 129),
    glass: Color32::from_rgba_premultiplied(28, 30, 38, 210),
    glass_stroke: Color32::from_rgba_premultiplied(55, 65, 81, 120),
    window_bg: Color32::from_rgb(17, 24, 39),
    window_header: Color32::from_rgb(31, 41, 55),
    card_bg: Color32::from_rgb(31, 41, 55),
    border_subtle: Color32::from_rgb(55, 65, 81),
    text_primary: Color32::from_rgb(243, 244, 246),
    text_secondary: Color32::from_rgb(156, 163, 175),
    text_dim: Color32::from_rgb(107, 114, 128),
    accent: Color32::from_rgb(96, 165, 250),
    axis_line: Color32::from_rgb(75, 85, 99),
    hover: Color32::from_rgba_premultiplied(255, 255, 255, 14),
};

pub const TEXT_ON_CARD: Color32 = Color32::from_rgb(255, 255, 255);

pub const TRAFFIC_CLOSE: Color32 = Color32::from_rgb(255, 95, 87);
pub const TRAFFIC_MINIMIZE: Color32 = Color32::from_rgb(254, 188, 46);
pub const TRAFFIC_MAXIMIZE: Color32 = Color32::from_rgb(40, 200, 64);

/// Fun-fact bubbles without an explicit colour draw from this list.
pub const FUN_FACT_COLORS: &[Color32] = &[
    Color32::from_rgb(59, 130, 246),  // blue
    Color32::from_rgb(168, 85, 247),  // purple
    Color32::from_rgb(236, 72, 153),  // pink
    Color32::from_rgb(34, 197, 94),   // green
    Color32::from_rgb(234, 179, 8),   // yellow
    Color32::from_rgb(249, 115, 22),  // orange
];

/// Stable palette pick for `key`.
pub fn palette_pick(key: &str) -> Color32 {
    let hash = key
        .bytes()
        .fold(0u32, |h, b| h.wrapping_mul(31).wrapping_add(u32::from(b)));
    FUN_FACT_COLORS[hash as usize % FUN_FACT_COLORS.len()]
}

// ── Sizes ────────────────────────────────────────────────────────────────────

pub const MENU_BAR_HEIGHT: f32 = 28.0;
pub const DOCK_RESERVED: f32 = 96.0;
pub const DOCK_ICON_SIZE: f32 = 48.0;
pub const WINDOW_HEADER_HEIGHT: f32 = 40.0;
pub const WINDOW_ROUNDING: f32 = 12.0;
pub const CARD_ROUNDING: f32 = 8.0;

// ── Fonts ────────────────────────────────────────────────────────────────────

pub fn font_menu() -> FontId {
    FontId::proportional(12.5)
}

pub fn font_title() -> FontId {
    FontId::proportional(14.0)
}

pub fn font_card_title() -> FontId {
    FontId::proportional(13.0)
}

pub fn font_small() -> FontId {
    FontId::proportional(11.0)
}

pub fn font_year() -> FontId {
    FontId::proportional(12.0)
}

// ── Colours from content ─────────────────────────────────────────────────────

/// Parse `#RRGGBB` or `#RRGGBBAA`; the leading `#` is optional.
pub fn parse_hex_color(s: &str) -> Result<Color32, String> {
    let hex = s.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return Err(format!("Invalid hex color '{}'", s));
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| format!("Invalid hex color '{}': {}", s, e));
    match hex.len() {
        6 => Ok(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?)),
        8 => Ok(Color32::from_rgba_unmultiplied(
            channel(0)?,
            channel(2)?,
            channel(4)?,
            channel(6)?,
        )),
        _ => Err(format!("Invalid hex color '{}': expected 6 or 8 hex digits", s)),
    }
}

// ── Apply custom visuals ─────────────────────────────────────────────────────

pub fn apply_theme(ctx: &egui::Context, mode: ThemeMode) {
    let p = mode.palette();
    let mut visuals = if mode.is_dark() {
        Visuals::dark()
    } else {
        Visuals::light()
    };

    visuals.override_text_color = Some(p.text_primary);
    visuals.panel_fill = p.window_bg;
    visuals.window_fill = p.window_bg;
    visuals.faint_bg_color = p.card_bg;

    visuals.widgets.noninteractive.bg_fill = p.window_bg;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, p.border_subtle);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, p.text_secondary);
    visuals.widgets.noninteractive.rounding = Rounding::same(6.0);

    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, p.border_subtle);
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, p.text_primary);
    visuals.widgets.inactive.rounding = Rounding::same(6.0);

    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, p.accent);
    visuals.widgets.hovered.rounding = Rounding::same(6.0);

    visuals.widgets.active.bg_stroke = Stroke::new(1.0, p.accent);
    visuals.widgets.active.rounding = Rounding::same(6.0);

    visuals.selection.stroke = Stroke::new(1.0, p.accent);
    visuals.hyperlink_color = p.accent;

    visuals.window_rounding = Rounding::same(WINDOW_ROUNDING);
    visuals.window_stroke = Stroke::new(1.0, p.border_subtle);
    visuals.striped = false;

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    ctx.set_style(style);
}
