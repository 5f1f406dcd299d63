//! Filter verification modal with a static backdrop.

use super::super::style::{
    COLOR_ERROR, COLOR_MATCHED, COLOR_NOT_MATCHED, COLOR_TEXT_MUTED, COLOR_TEXT_PRIMARY,
    COLOR_TEXT_SECONDARY,
};
use super::super::ConsoleApp;
use brokerdeck_core::models::verification::VERIFICATION_ERROR_STATUS;
use eframe::egui::{self, RichText};

impl ConsoleApp {
    /// Renders the filter debugger modal over a click-swallowing backdrop.
    ///
    /// The backdrop is static: clicking outside the window never dismisses
    /// the dialog. Esc and the Cancel button are the only dismissal paths.
    pub(crate) fn render_debugger_modal(&mut self, ctx: &egui::Context) {
        let Some(dialog) = self.debugger.as_mut() else {
            return;
        };
        if dialog.is_closed() {
            return;
        }

        let screen = ctx.screen_rect();
        egui::Area::new(egui::Id::new("debugger_backdrop"))
            .order(egui::Order::Middle)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                // Claim clicks so surfaces underneath stay inert while the
                // modal is up; the click itself is intentionally ignored.
                let _ = ui.allocate_rect(screen, egui::Sense::click());
                ui.painter()
                    .rect_filled(screen, 0, egui::Color32::from_black_alpha(150));
            });

        let mut verify_clicked = false;
        let mut confirm_clicked = false;
        let mut cancel_clicked = ctx.input(|input| input.key_pressed(egui::Key::Escape));

        egui::Window::new("Verify filters")
            .id(egui::Id::new("filter_debugger_modal"))
            .order(egui::Order::Foreground)
            .collapsible(false)
            .resizable(false)
            .default_width(620.0)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(
                    RichText::new(dialog.topic_name())
                        .monospace()
                        .color(COLOR_TEXT_SECONDARY),
                );
                ui.add_space(6.0);

                ui.label(RichText::new("Filters").small().color(COLOR_TEXT_MUTED));
                ui.add(
                    egui::TextEdit::multiline(&mut dialog.filters_text)
                        .code_editor()
                        .desired_rows(8)
                        .desired_width(f32::INFINITY),
                );

                ui.add_space(6.0);
                ui.label(
                    RichText::new("Sample message")
                        .small()
                        .color(COLOR_TEXT_MUTED),
                );
                ui.add(
                    egui::TextEdit::multiline(&mut dialog.message)
                        .code_editor()
                        .desired_rows(5)
                        .desired_width(f32::INFINITY),
                );

                ui.add_space(8.0);
                render_status_line(ui, dialog.in_flight(), dialog.status(), dialog.error_message());

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Verify").clicked() {
                        verify_clicked = true;
                    }
                    if ui.button("Update filters").clicked() {
                        confirm_clicked = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancel_clicked = true;
                    }
                });
            });

        if verify_clicked {
            dialog.verify(&self.backend.cmd_tx);
        }
        if confirm_clicked {
            // A parse failure keeps the dialog open and shows the error.
            let _ = dialog.confirm();
        } else if cancel_clicked {
            dialog.dismiss();
        }
    }
}

fn render_status_line(ui: &mut egui::Ui, in_flight: bool, status: &str, error: Option<&str>) {
    if in_flight {
        ui.horizontal(|ui| {
            ui.add(egui::Spinner::new());
            ui.label(RichText::new("Verifying...").color(COLOR_TEXT_SECONDARY));
        });
        return;
    }
    if status.is_empty() {
        ui.label(
            RichText::new("Verify runs the filters against the sample message.")
                .small()
                .color(COLOR_TEXT_MUTED),
        );
        return;
    }

    let color = match status {
        "MATCHED" => COLOR_MATCHED,
        "NOT_MATCHED" => COLOR_NOT_MATCHED,
        VERIFICATION_ERROR_STATUS => COLOR_ERROR,
        _ => COLOR_TEXT_PRIMARY,
    };
    ui.horizontal(|ui| {
        ui.label(RichText::new(status).strong().color(color));
        if let Some(error) = error {
            ui.label(RichText::new(error).color(COLOR_TEXT_SECONDARY));
        }
    });
}
