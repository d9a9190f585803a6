// src/app/theme.rs
use eframe::egui::{self as eg, Color32, Rounding, Stroke};

pub const TEXT: Color32 = Color32::from_rgb(210, 210, 210);
pub const PANEL_BG: Color32 = Color32::from_rgb(39, 44, 54);
pub const GRID_LINE: Color32 = Color32::from_rgb(44, 49, 60);
pub const HEADER_BG: Color32 = Color32::from_rgb(27, 29, 35);
pub const FRAME_BORDER: Color32 = Color32::from_rgb(52, 59, 72);
pub const SELECTION: Color32 = Color32::from_rgb(85, 170, 255);

pub const FIELD_BG: Color32 = Color32::BLACK;
pub const FIELD_BORDER: Color32 = Color32::from_rgb(27, 29, 35);
pub const FIELD_BORDER_HOVER: Color32 = Color32::from_rgb(64, 71, 88);
pub const FIELD_BORDER_FOCUS: Color32 = Color32::from_rgb(91, 101, 124);

pub const BUTTON_BG: Color32 = Color32::from_rgb(52, 59, 72);
pub const BUTTON_BG_HOVER: Color32 = Color32::from_rgb(57, 65, 80);
pub const BUTTON_BG_PRESSED: Color32 = Color32::from_rgb(35, 40, 49);
pub const BUTTON_BORDER_PRESSED: Color32 = Color32::from_rgb(43, 50, 61);

pub const CORNER_RADIUS: f32 = 5.0;

/// Dark palette used by every widget on the page. Call once at startup.
pub fn apply_dark_theme(ctx: &eg::Context) {
    ctx.set_visuals(dark_visuals());
}

pub fn dark_visuals() -> eg::Visuals {
    let mut v = eg::Visuals::dark();
    let radius = Rounding::same(CORNER_RADIUS);

    v.override_text_color = Some(TEXT);
    v.panel_fill = PANEL_BG;
    v.window_fill = PANEL_BG;
    v.extreme_bg_color = FIELD_BG;
    v.faint_bg_color = GRID_LINE;
    v.selection.bg_fill = SELECTION;
    v.selection.stroke = Stroke::new(2.0, FIELD_BORDER_FOCUS);

    v.widgets.noninteractive.bg_fill = PANEL_BG;
    v.widgets.noninteractive.bg_stroke = Stroke::new(1.0, GRID_LINE);
    v.widgets.noninteractive.fg_stroke = Stroke::new(1.0, TEXT);

    // text fields draw their frame from these strokes, buttons from the fills
    v.widgets.inactive.weak_bg_fill = BUTTON_BG;
    v.widgets.inactive.bg_fill = BUTTON_BG;
    v.widgets.inactive.bg_stroke = Stroke::new(2.0, FIELD_BORDER);
    v.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT);
    v.widgets.inactive.rounding = radius;

    v.widgets.hovered.weak_bg_fill = BUTTON_BG_HOVER;
    v.widgets.hovered.bg_fill = BUTTON_BG_HOVER;
    v.widgets.hovered.bg_stroke = Stroke::new(2.0, FIELD_BORDER_HOVER);
    v.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT);
    v.widgets.hovered.rounding = radius;

    v.widgets.active.weak_bg_fill = BUTTON_BG_PRESSED;
    v.widgets.active.bg_fill = BUTTON_BG_PRESSED;
    v.widgets.active.bg_stroke = Stroke::new(2.0, BUTTON_BORDER_PRESSED);
    v.widgets.active.fg_stroke = Stroke::new(1.0, TEXT);
    v.widgets.active.rounding = radius;

    v
}

/// Container look for the search bar.
pub fn search_frame() -> eg::Frame {
    eg::Frame::none()
        .fill(PANEL_BG)
        .stroke(Stroke::new(1.0, FRAME_BORDER))
        .rounding(CORNER_RADIUS)
        .inner_margin(eg::Margin::same(10.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_is_applied() {
        let v = dark_visuals();
        assert!(v.dark_mode);
        assert_eq!(v.override_text_color, Some(TEXT));
        assert_eq!(v.panel_fill, PANEL_BG);
        assert_eq!(v.selection.bg_fill, SELECTION);
        assert_eq!(v.extreme_bg_color, Color32::BLACK);
        assert_eq!(v.widgets.hovered.weak_bg_fill, BUTTON_BG_HOVER);
        assert_eq!(v.widgets.active.weak_bg_fill, BUTTON_BG_PRESSED);
    }
}
