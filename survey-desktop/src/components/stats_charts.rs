use crate::components::category_icon;
use crate::insights;
use crate::state::AppState;
use egui::Ui;

/// Painted bar chart plus the percentage distribution list.
pub struct StatsCharts;

impl StatsCharts {
    pub fn new() -> Self {
        Self
    }

    pub fn ui(&mut self, ui: &mut Ui, state: &AppState) {
        let charted = insights::charted(&state.stats);
        if charted.is_empty() {
            ui.label(
                egui::RichText::new("Aún no hay datos para graficar")
                    .color(ui.style().visuals.weak_text_color()),
            );
            return;
        }

        let total = insights::total_responses(&state.stats);
        let max = insights::max_count(&state.stats);

        ui.label(egui::RichText::new("Respuestas por categoría").size(14.0).strong());
        ui.add_space(6.0);

        let bar_area_width = (ui.available_width() - 180.0).max(80.0);
        for stat in &charted {
            ui.horizontal(|ui| {
                ui.add_sized(
                    egui::vec2(140.0, 18.0),
                    egui::Label::new(format!("{} {}", category_icon(&stat.slug), stat.name)),
                );

                let fraction = stat.count as f32 / max as f32;
                let (rect, _) = ui.allocate_exact_size(
                    egui::vec2(bar_area_width * fraction, 14.0),
                    egui::Sense::hover(),
                );
                ui.painter().rect_filled(
                    rect,
                    3.0,
                    egui::Color32::from_rgb(0x3b, 0x82, 0xf6),
                );

                ui.label(egui::RichText::new(stat.count.to_string()).size(12.0).strong());
            });
            ui.add_space(3.0);
        }

        ui.add_space(12.0);
        ui.separator();
        ui.add_space(6.0);

        ui.label(egui::RichText::new("Distribución").size(14.0).strong());
        ui.add_space(4.0);
        for stat in &charted {
            ui.horizontal(|ui| {
                ui.label(&stat.name);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "{:.1}%",
                            insights::percent_of_total(stat.count, total)
                        ))
                        .strong(),
                    );
                });
            });
        }
    }
}

impl Default for StatsCharts {
    fn default() -> Self {
        Self::new()
    }
}
