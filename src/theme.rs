//! Dark violet theme matching the landing page palette

use egui::Color32;

/// Near-black background with violet accents
pub mod colors {
    use super::Color32;

    // === Backgrounds ===
    pub const BG_PRIMARY: Color32 = Color32::from_rgb(5, 5, 8); // #050508 - page background
    pub const BG_ELEVATED: Color32 = Color32::from_rgb(16, 16, 26); // #10101A - cards
    pub const BG_HOVER: Color32 = Color32::from_rgb(26, 26, 40); // hover states

    // === Accent (violet) ===
    pub const ACCENT: Color32 = Color32::from_rgb(139, 92, 246); // dots, buttons, links
    pub const ACCENT_SOFT: Color32 = Color32::from_rgba_premultiplied(44, 29, 78, 255); // borders

    // === Text ===
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(255, 255, 255);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(156, 163, 175); // gray-400
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(90, 90, 110);

    // === Status ===
    pub const ERROR: Color32 = Color32::from_rgb(248, 113, 113);
}

/// Create the page's egui Visuals
pub fn landing_visuals() -> egui::Visuals {
    use colors::*;

    let mut visuals = egui::Visuals::dark();

    visuals.panel_fill = BG_PRIMARY;
    visuals.window_fill = BG_PRIMARY;
    visuals.extreme_bg_color = BG_ELEVATED;
    visuals.faint_bg_color = BG_ELEVATED;

    visuals.override_text_color = Some(TEXT_PRIMARY);

    visuals.widgets.noninteractive.bg_fill = BG_PRIMARY;
    visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, TEXT_SECONDARY);
    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, ACCENT_SOFT);

    visuals.widgets.inactive.bg_fill = BG_ELEVATED;
    visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, TEXT_SECONDARY);
    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, ACCENT_SOFT);
    visuals.widgets.inactive.weak_bg_fill = BG_ELEVATED;

    visuals.widgets.hovered.bg_fill = BG_HOVER;
    visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, ACCENT);
    visuals.widgets.hovered.weak_bg_fill = BG_HOVER;

    visuals.widgets.active.bg_fill = BG_HOVER;
    visuals.widgets.active.fg_stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.active.bg_stroke = egui::Stroke::new(1.0, ACCENT);
    visuals.widgets.active.weak_bg_fill = BG_HOVER;

    // Selection - violet on dark
    visuals.selection.bg_fill = Color32::from_rgb(76, 49, 140);
    visuals.selection.stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);

    visuals.hyperlink_color = ACCENT;

    // Flat design - no shadows
    visuals.window_shadow = egui::Shadow::NONE;
    visuals.popup_shadow = egui::Shadow::NONE;

    visuals
}
