use crate::components::category_icon;
use crate::insights;
use crate::state::AppState;
use egui::Ui;

/// Ranked per-category counts with progress bars.
pub struct CategoryStatsPanel;

impl CategoryStatsPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn ui(&mut self, ui: &mut Ui, state: &AppState) {
        ui.label(egui::RichText::new("📊 Necesidades por categoría").size(15.0).strong());
        ui.add_space(6.0);

        if state.loading_stats && state.stats.is_empty() {
            ui.horizontal(|ui| {
                ui.add(egui::Spinner::new());
                ui.label("Cargando estadísticas...");
            });
            return;
        }

        if let Some(error) = &state.stats_error {
            ui.label(
                egui::RichText::new("No se pudieron cargar las estadísticas")
                    .color(egui::Color32::RED),
            );
            ui.label(
                egui::RichText::new(error)
                    .size(11.0)
                    .color(ui.style().visuals.weak_text_color()),
            );
            return;
        }

        if state.stats.is_empty() {
            ui.label(
                egui::RichText::new("Aún no hay datos disponibles")
                    .color(ui.style().visuals.weak_text_color()),
            );
            return;
        }

        let total = insights::total_responses(&state.stats);
        let max = insights::max_count(&state.stats);

        ui.label(
            egui::RichText::new(format!("{total} respuestas en total"))
                .size(12.0)
                .color(ui.style().visuals.weak_text_color()),
        );
        ui.add_space(6.0);

        for (rank, stat) in state.stats.iter().enumerate() {
            ui.horizontal(|ui| {
                ui.label(category_icon(&stat.slug));
                ui.label(&stat.name);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let badge_color = match rank {
                        0 => egui::Color32::from_rgb(0xf5, 0x9e, 0x0b),
                        1 => egui::Color32::from_rgb(0x94, 0xa3, 0xb8),
                        _ => ui.style().visuals.widgets.inactive.bg_fill,
                    };
                    egui::Frame::NONE
                        .fill(badge_color)
                        .corner_radius(10.0)
                        .inner_margin(egui::Margin::symmetric(8, 2))
                        .show(ui, |ui| {
                            ui.label(
                                egui::RichText::new(stat.count.to_string()).size(12.0).strong(),
                            );
                        });
                    ui.label(
                        egui::RichText::new(format!(
                            "{:.0}%",
                            insights::percent_of_total(stat.count, total)
                        ))
                        .size(11.0)
                        .color(ui.style().visuals.weak_text_color()),
                    );
                });
            });
            ui.add(
                egui::ProgressBar::new(stat.count as f32 / max as f32).desired_height(6.0),
            );
            ui.add_space(4.0);
        }
    }
}

impl Default for CategoryStatsPanel {
    fn default() -> Self {
        Self::new()
    }
}
