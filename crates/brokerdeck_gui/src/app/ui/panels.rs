//! Top bar, subscription filters panel, and bottom status bar.

use super::super::style::{
    COLOR_ACCENT, COLOR_TEXT_MUTED, COLOR_TEXT_PRIMARY, COLOR_TEXT_SECONDARY,
};
use super::super::ConsoleApp;
use brokerdeck_core::models::filter::format_filter_list;
use eframe::egui::{self, RichText};

impl ConsoleApp {
    /// Renders the top bar with the product name and management endpoint.
    pub(crate) fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(RichText::new("Brokerdeck").color(COLOR_ACCENT));
                    ui.add_space(12.0);
                    ui.label(
                        RichText::new(&self.management_url)
                            .monospace()
                            .color(COLOR_TEXT_SECONDARY),
                    );
                });
            });
    }

    /// Renders the central panel showing the topic's working filter list.
    pub(crate) fn render_subscription_panel(&mut self, ctx: &egui::Context) {
        let mut open_debugger = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(RichText::new(&self.topic_name).color(COLOR_TEXT_PRIMARY));
            ui.label(
                RichText::new("Subscription filters")
                    .small()
                    .color(COLOR_TEXT_MUTED),
            );
            ui.add_space(6.0);

            if self.subscription_filters.is_empty() {
                ui.label(
                    RichText::new("No filters configured; every message is delivered.")
                        .color(COLOR_TEXT_SECONDARY),
                );
            } else {
                egui::ScrollArea::vertical()
                    .max_height(ui.available_height() - 60.0)
                    .auto_shrink([false, true])
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new(format_filter_list(&self.subscription_filters))
                                .monospace()
                                .color(COLOR_TEXT_PRIMARY),
                        );
                    });
            }

            ui.add_space(10.0);
            let button = egui::Button::new("Debug filters...");
            if ui.add_enabled(!self.debugger_open(), button).clicked() {
                open_debugger = true;
            }
        });

        if open_debugger {
            self.open_debugger();
        }
    }

    /// Renders the bottom status bar with transient feedback and counts.
    pub(crate) fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if let Some(status) = &self.status {
                        ui.label(RichText::new(&status.text).color(COLOR_ACCENT));
                        ui.separator();
                    }
                    ui.label(
                        RichText::new(format!(
                            "{} filter(s) on {}",
                            self.subscription_filters.len(),
                            self.topic_name
                        ))
                        .small()
                        .color(COLOR_TEXT_MUTED),
                    );
                });
            });
    }
}
