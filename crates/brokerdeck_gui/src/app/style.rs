//! Theme constants and one-time style application for the egui app.

use super::ConsoleApp;
use eframe::egui::{self, Color32, CornerRadius, FontFamily, FontId, Margin, Stroke, TextStyle, Visuals};

pub(super) const COLOR_BG_PRIMARY: Color32 = Color32::from_rgb(0x11, 0x14, 0x19);
pub(super) const COLOR_BG_SECONDARY: Color32 = Color32::from_rgb(0x1a, 0x1f, 0x26);
pub(super) const COLOR_BG_TERTIARY: Color32 = Color32::from_rgb(0x23, 0x29, 0x31);
pub(super) const COLOR_TEXT_PRIMARY: Color32 = Color32::from_rgb(0xcd, 0xd4, 0xdc);
pub(super) const COLOR_TEXT_SECONDARY: Color32 = Color32::from_rgb(0x8d, 0x97, 0xa1);
pub(super) const COLOR_TEXT_MUTED: Color32 = Color32::from_rgb(0x6b, 0x74, 0x7e);
pub(super) const COLOR_ACCENT: Color32 = Color32::from_rgb(0x2f, 0xa8, 0x8f);
pub(super) const COLOR_BORDER: Color32 = Color32::from_rgb(0x2e, 0x35, 0x3d);
pub(super) const COLOR_MATCHED: Color32 = Color32::from_rgb(0x4c, 0xb8, 0x5c);
pub(super) const COLOR_NOT_MATCHED: Color32 = Color32::from_rgb(0xd8, 0xa0, 0x3d);
pub(super) const COLOR_ERROR: Color32 = Color32::from_rgb(0xd4, 0x5d, 0x5d);

impl ConsoleApp {
    pub(super) fn ensure_style(&mut self, ctx: &egui::Context) {
        if self.style_applied {
            return;
        }

        let mut style = (*ctx.style()).clone();
        style.visuals = Visuals::dark();
        style.visuals.override_text_color = Some(COLOR_TEXT_PRIMARY);
        style.visuals.window_fill = COLOR_BG_PRIMARY;
        style.visuals.panel_fill = COLOR_BG_SECONDARY;
        style.visuals.extreme_bg_color = COLOR_BG_PRIMARY;
        style.visuals.faint_bg_color = COLOR_BG_TERTIARY;
        style.visuals.window_stroke = Stroke::new(1.0, COLOR_BORDER);
        style.visuals.hyperlink_color = COLOR_ACCENT;
        style.visuals.selection.bg_fill = COLOR_ACCENT;
        style.visuals.text_edit_bg_color = Some(COLOR_BG_TERTIARY);
        style.visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, COLOR_BORDER);
        style.visuals.widgets.noninteractive.corner_radius = CornerRadius::same(6);
        style.visuals.widgets.inactive.bg_fill = COLOR_BG_TERTIARY;
        style.visuals.widgets.inactive.corner_radius = CornerRadius::same(6);
        style.visuals.widgets.hovered.corner_radius = CornerRadius::same(6);
        style.visuals.widgets.active.bg_fill = COLOR_ACCENT;
        style.visuals.widgets.active.corner_radius = CornerRadius::same(6);

        style.spacing.window_margin = Margin::same(12);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.item_spacing = egui::vec2(10.0, 8.0);

        style
            .text_styles
            .insert(TextStyle::Heading, FontId::new(22.0, FontFamily::Proportional));
        style
            .text_styles
            .insert(TextStyle::Body, FontId::new(15.0, FontFamily::Proportional));
        style
            .text_styles
            .insert(TextStyle::Monospace, FontId::new(14.0, FontFamily::Monospace));
        style
            .text_styles
            .insert(TextStyle::Small, FontId::new(12.0, FontFamily::Proportional));

        ctx.set_style(style);
        self.style_applied = true;
    }
}
