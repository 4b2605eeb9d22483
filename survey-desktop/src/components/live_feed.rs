use crate::components::{category_icon, fmt_time_hhmm, truncate};
use crate::state::AppState;
use egui::Ui;

/// The five most recent responses, refreshed by the background poller.
pub struct LiveFeedPanel;

impl LiveFeedPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn ui(&mut self, ui: &mut Ui, state: &AppState) {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("🔴 Feed en Vivo").size(15.0).strong());
            let new_count = state.feed.new_count();
            if new_count > 0 {
                egui::Frame::NONE
                    .fill(egui::Color32::from_rgb(0x22, 0xc5, 0x5e))
                    .corner_radius(10.0)
                    .inner_margin(egui::Margin::symmetric(8, 2))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(format!("+{new_count} nuevas"))
                                .size(11.0)
                                .color(egui::Color32::WHITE)
                                .strong(),
                        );
                    });
            }
        });
        ui.add_space(6.0);

        if state.feed.visible().is_empty() {
            ui.label(
                egui::RichText::new("Esperando nuevas respuestas...")
                    .color(ui.style().visuals.weak_text_color()),
            );
            return;
        }

        for (i, row) in state.feed.visible().iter().enumerate() {
            let fill = if i == 0 {
                ui.style().visuals.widgets.hovered.bg_fill
            } else {
                ui.style().visuals.widgets.inactive.bg_fill
            };
            egui::Frame::NONE
                .fill(fill)
                .corner_radius(6.0)
                .inner_margin(egui::Margin::same(8))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(&row.participant_name).size(12.0).strong(),
                        );
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                ui.label(
                                    egui::RichText::new(fmt_time_hhmm(&row.created_at))
                                        .size(11.0)
                                        .color(ui.style().visuals.weak_text_color()),
                                );
                            },
                        );
                    });
                    ui.label(egui::RichText::new(truncate(&row.description, 90)).size(12.0));
                    if let Some((name, slug)) = row.category() {
                        ui.label(
                            egui::RichText::new(format!("{} {}", category_icon(slug), name))
                                .size(11.0)
                                .color(ui.style().visuals.weak_text_color()),
                        );
                    }
                });
            ui.add_space(4.0);
        }
    }
}

impl Default for LiveFeedPanel {
    fn default() -> Self {
        Self::new()
    }
}
