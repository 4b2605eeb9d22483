use crate::state::AppState;
use egui::Context;

/// Bottom strip: API endpoint, load state and the first load error.
pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    pub fn ui(&mut self, ctx: &Context, state: &AppState) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(state.config.api.base_url.as_str())
                        .size(11.0)
                        .color(ui.style().visuals.weak_text_color()),
                );

                if state.any_loading() {
                    ui.add(egui::Spinner::new());
                    ui.label(egui::RichText::new("Cargando...").size(11.0));
                }

                if state.submitting {
                    ui.label(egui::RichText::new("Enviando respuesta...").size(11.0));
                }

                for (label, error) in state.load_errors() {
                    ui.label(
                        egui::RichText::new(format!("{label}: {error}"))
                            .size(11.0)
                            .color(egui::Color32::RED),
                    );
                }
            });
        });
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}
