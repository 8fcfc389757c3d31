//! Centralized theme constants for Hello GUI
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Framebuffer
// =============================================================================
/// Color the framebuffer is cleared to before the UI is painted (dark blue)
pub const CLEAR_COLOR: [f32; 4] = [0.1, 0.1, 0.2, 1.0];

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_WINDOW: Color32 = Color32::from_rgba_premultiplied(0x0f, 0x0f, 0x0f, 0xf0);
pub const BG_TITLE: Color32 = Color32::from_rgb(0x0a, 0x0a, 0x0a);
pub const BG_TITLE_ACTIVE: Color32 = Color32::from_rgb(0x29, 0x4a, 0x7a);

// =============================================================================
// COLORS - Buttons
// =============================================================================
pub const BTN_DEFAULT: Color32 = Color32::from_rgb(0x24, 0x3d, 0x5c);
pub const BTN_HOVER: Color32 = Color32::from_rgb(0x42, 0x96, 0xfa);
pub const BTN_ACTIVE: Color32 = Color32::from_rgb(0x0f, 0x87, 0xfa);

// =============================================================================
// COLORS - Text & Borders
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xe4, 0xe4, 0xe7);
pub const BORDER_DEFAULT: Color32 = Color32::from_rgb(0x3f, 0x3f, 0x46);

// =============================================================================
// CORNER RADIUS & STROKE WIDTHS
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 3.0;
pub const STROKE_DEFAULT: f32 = 1.0;

/// Dark visuals with the blue button palette
pub fn apply_visuals(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();

    visuals.window_fill = BG_WINDOW;
    visuals.window_stroke = egui::Stroke::new(STROKE_DEFAULT, BORDER_DEFAULT);
    visuals.window_corner_radius = RADIUS_DEFAULT.into();
    visuals.faint_bg_color = BG_TITLE;
    visuals.selection.bg_fill = BG_TITLE_ACTIVE;

    let widgets = &mut visuals.widgets;
    widgets.inactive.weak_bg_fill = BTN_DEFAULT;
    widgets.inactive.bg_fill = BTN_DEFAULT;
    widgets.inactive.fg_stroke = egui::Stroke::new(STROKE_DEFAULT, TEXT_SECONDARY);
    widgets.hovered.weak_bg_fill = BTN_HOVER;
    widgets.hovered.bg_fill = BTN_HOVER;
    widgets.hovered.fg_stroke = egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY);
    widgets.active.weak_bg_fill = BTN_ACTIVE;
    widgets.active.bg_fill = BTN_ACTIVE;
    widgets.active.fg_stroke = egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY);

    for w in [
        &mut widgets.noninteractive,
        &mut widgets.inactive,
        &mut widgets.hovered,
        &mut widgets.active,
        &mut widgets.open,
    ] {
        w.corner_radius = RADIUS_DEFAULT.into();
    }

    ctx.set_visuals(visuals);
}
