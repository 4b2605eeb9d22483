use crate::components::{category_icon, fmt_date_short, truncate};
use crate::insights::{self, GRID_PAGE_SIZE};
use crate::state::{AppState, ResponseFilter};
use egui::Ui;
use survey_models::QuestionKind;

/// Card grid of responses with the all/needs/proposals filter tabs.
pub struct ResponsesGrid;

impl ResponsesGrid {
    pub fn new() -> Self {
        Self
    }

    pub fn ui(&mut self, ui: &mut Ui, state: &mut AppState) {
        let needs = insights::count_by_kind(&state.responses, QuestionKind::Need);
        let proposals = insights::count_by_kind(&state.responses, QuestionKind::Proposal);

        ui.horizontal(|ui| {
            ui.selectable_value(
                &mut state.ui.filter,
                ResponseFilter::All,
                format!("Todas ({})", state.responses.len()),
            );
            ui.selectable_value(
                &mut state.ui.filter,
                ResponseFilter::Needs,
                format!("Necesidades ({needs})"),
            );
            ui.selectable_value(
                &mut state.ui.filter,
                ResponseFilter::Proposals,
                format!("Propuestas ({proposals})"),
            );
        });
        ui.add_space(8.0);

        if state.loading_responses && state.responses.is_empty() {
            ui.horizontal(|ui| {
                ui.add(egui::Spinner::new());
                ui.label("Cargando respuestas...");
            });
            return;
        }

        if let Some(error) = &state.responses_error {
            ui.label(
                egui::RichText::new("No se pudieron cargar las respuestas")
                    .color(egui::Color32::RED),
            );
            ui.label(
                egui::RichText::new(error.as_str())
                    .size(11.0)
                    .color(ui.style().visuals.weak_text_color()),
            );
            return;
        }

        let filtered = insights::by_kind(&state.responses, state.ui.filter.kind());
        if filtered.is_empty() {
            ui.label(
                egui::RichText::new("Aún no hay respuestas en esta vista")
                    .color(ui.style().visuals.weak_text_color()),
            );
            return;
        }

        let total = filtered.len();
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(10.0, 10.0);
            for row in filtered.into_iter().take(GRID_PAGE_SIZE) {
                ui.allocate_ui(egui::vec2(260.0, 150.0), |ui| {
                    egui::Frame::NONE
                        .fill(ui.style().visuals.widgets.inactive.bg_fill)
                        .corner_radius(8.0)
                        .inner_margin(egui::Margin::same(10))
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.label(
                                    egui::RichText::new(&row.participant_name)
                                        .size(13.0)
                                        .strong(),
                                );
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        ui.label(
                                            egui::RichText::new(fmt_date_short(&row.created_at))
                                                .size(11.0)
                                                .color(ui.style().visuals.weak_text_color()),
                                        );
                                    },
                                );
                            });
                            ui.add_space(4.0);
                            ui.label(
                                egui::RichText::new(format!(
                                    "\u{201c}{}\u{201d}",
                                    truncate(&row.description, 120)
                                ))
                                .size(12.0),
                            );
                            ui.add_space(4.0);
                            ui.horizontal(|ui| {
                                let kind_label = match row.question_kind() {
                                    QuestionKind::Need => "Necesidad",
                                    QuestionKind::Proposal => "Propuesta",
                                    QuestionKind::Other => "Otra",
                                };
                                ui.label(
                                    egui::RichText::new(kind_label)
                                        .size(11.0)
                                        .color(ui.style().visuals.weak_text_color()),
                                );
                                if let Some((name, slug)) = row.category() {
                                    ui.label(
                                        egui::RichText::new(format!(
                                            "{} {}",
                                            category_icon(slug),
                                            name
                                        ))
                                        .size(11.0)
                                        .color(ui.style().visuals.weak_text_color()),
                                    );
                                }
                            });
                            ui.label(
                                egui::RichText::new(&row.participant_email)
                                    .size(10.0)
                                    .color(ui.style().visuals.weak_text_color()),
                            );
                        });
                });
            }
        });

        if total > GRID_PAGE_SIZE {
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ui.add_enabled(
                    false,
                    egui::Button::new(format!(
                        "Ver más respuestas ({} restantes)",
                        total - GRID_PAGE_SIZE
                    )),
                );
            });
        }
    }
}

impl Default for ResponsesGrid {
    fn default() -> Self {
        Self::new()
    }
}
