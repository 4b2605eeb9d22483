use crate::components::prompt_for;
use crate::state::{AppState, COUNTRIES};
use egui::Ui;
use survey_models::{QUESTION_NEED_ID, QUESTION_PROPOSAL_ID};

/// The survey column: participant data plus the two questions.
///
/// Rendering never talks to the network; a click on the submit button is
/// reported back and the caller kicks off the submission.
pub struct SurveyForm;

impl SurveyForm {
    pub fn new() -> Self {
        Self
    }

    /// Returns true when the user asked to submit this frame.
    pub fn ui(&mut self, ui: &mut Ui, state: &mut AppState) -> bool {
        let mut submit_requested = false;

        ui.heading("Comparte tu opinión");
        ui.add_space(8.0);

        self.card(ui, |ui| {
            ui.label(egui::RichText::new("Datos de la persona").size(15.0).strong());
            ui.add_space(6.0);

            let form = &mut state.ui.form;

            ui.label("Nombre *");
            ui.text_edit_singleline(&mut form.name);
            ui.add_space(4.0);

            ui.label("Correo electrónico *");
            ui.text_edit_singleline(&mut form.email);
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label("Edad");
                    ui.add(
                        egui::TextEdit::singleline(&mut form.age_input)
                            .hint_text("0-120")
                            .desired_width(60.0),
                    );
                });
                ui.vertical(|ui| {
                    ui.label("País");
                    egui::ComboBox::from_id_salt("form_country")
                        .selected_text(
                            crate::state::country_name_for(&form.country_code)
                                .unwrap_or("Colombia"),
                        )
                        .show_ui(ui, |ui| {
                            for country in COUNTRIES {
                                ui.selectable_value(
                                    &mut form.country_code,
                                    country.code.to_string(),
                                    country.name,
                                );
                            }
                        });
                });
            });
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label("Ciudad");
                    ui.add(
                        egui::TextEdit::singleline(&mut form.city).desired_width(140.0),
                    );
                });
                ui.vertical(|ui| {
                    ui.label("Barrio");
                    ui.add(
                        egui::TextEdit::singleline(&mut form.neighborhood)
                            .desired_width(140.0),
                    );
                });
            });
            ui.add_space(4.0);

            ui.label("Teléfono");
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(form.dial()).monospace());
                let mut digits = form.phone_digits.clone();
                let response = ui.add(
                    egui::TextEdit::singleline(&mut digits)
                        .hint_text("3001234567")
                        .desired_width(160.0),
                );
                if response.changed() {
                    form.set_phone_digits(&digits);
                }
            });
            if let Some(full) = form.phone_to_send() {
                ui.label(
                    egui::RichText::new(format!("Se enviará como: {full}"))
                        .size(11.0)
                        .color(ui.style().visuals.weak_text_color()),
                );
            }
        });

        ui.add_space(8.0);

        self.card(ui, |ui| {
            let prompt = prompt_for(&state.questions, QUESTION_NEED_ID, "Pregunta 1");
            ui.label(egui::RichText::new(prompt).size(14.0).strong());
            ui.add_space(6.0);

            ui.label("Categoría *");
            if let Some(error) = &state.categories_error {
                ui.label(
                    egui::RichText::new(format!("No se pudieron cargar las categorías: {error}"))
                        .size(11.0)
                        .color(egui::Color32::RED),
                );
            }
            let form = &mut state.ui.form;
            let selected_name = state
                .categories
                .iter()
                .find(|c| c.slug == form.q1_category)
                .map(|c| c.name.as_str())
                .unwrap_or("Selecciona una categoría");
            egui::ComboBox::from_id_salt("form_q1_category")
                .selected_text(selected_name)
                .show_ui(ui, |ui| {
                    for category in &state.categories {
                        ui.selectable_value(
                            &mut form.q1_category,
                            category.slug.clone(),
                            &category.name,
                        );
                    }
                });
            ui.add_space(4.0);

            ui.label("Descripción *");
            ui.add(
                egui::TextEdit::multiline(&mut form.q1_description)
                    .hint_text("Cuéntanos qué hace falta en tu comunidad")
                    .desired_rows(3)
                    .desired_width(f32::INFINITY),
            );
        });

        ui.add_space(8.0);

        self.card(ui, |ui| {
            let prompt = prompt_for(&state.questions, QUESTION_PROPOSAL_ID, "Pregunta 2");
            ui.label(egui::RichText::new(prompt).size(14.0).strong());
            ui.label(
                egui::RichText::new("Opcional")
                    .size(11.0)
                    .color(ui.style().visuals.weak_text_color()),
            );
            ui.add_space(6.0);

            ui.add(
                egui::TextEdit::multiline(&mut state.ui.form.q2_description)
                    .hint_text("Propón una acción concreta")
                    .desired_rows(3)
                    .desired_width(f32::INFINITY),
            );
        });

        ui.add_space(10.0);

        let can_submit = state.ui.form.can_submit() && !state.submitting;
        let label = if state.submitting {
            "Enviando..."
        } else {
            "Enviar respuesta"
        };
        ui.horizontal(|ui| {
            if ui
                .add_enabled(can_submit, egui::Button::new(label))
                .clicked()
            {
                submit_requested = true;
            }
            if state.submitting {
                ui.add(egui::Spinner::new());
            }
        });

        submit_requested
    }

    fn card(&self, ui: &mut Ui, add_contents: impl FnOnce(&mut Ui)) {
        egui::Frame::NONE
            .fill(ui.style().visuals.widgets.inactive.bg_fill)
            .corner_radius(8.0)
            .inner_margin(egui::Margin::same(12))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                add_contents(ui);
            });
    }
}

impl Default for SurveyForm {
    fn default() -> Self {
        Self::new()
    }
}
