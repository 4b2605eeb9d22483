use crate::components::{category_icon, fmt_date, truncate};
use crate::state::AppState;
use egui::Ui;
use egui_extras::{Column, TableBuilder};

/// Dense tabular listing of every response.
pub struct ResponsesTable;

impl ResponsesTable {
    pub fn new() -> Self {
        Self
    }

    pub fn ui(&mut self, ui: &mut Ui, state: &AppState) {
        if state.responses.is_empty() {
            ui.label(
                egui::RichText::new("Aún no hay respuestas registradas")
                    .color(ui.style().visuals.weak_text_color()),
            );
            return;
        }

        TableBuilder::new(ui)
            .striped(true)
            .column(Column::initial(110.0))
            .column(Column::initial(160.0))
            .column(Column::initial(120.0))
            .column(Column::remainder())
            .column(Column::initial(140.0))
            .header(20.0, |mut header| {
                header.col(|ui| {
                    ui.strong("Fecha");
                });
                header.col(|ui| {
                    ui.strong("Pregunta");
                });
                header.col(|ui| {
                    ui.strong("Categoría");
                });
                header.col(|ui| {
                    ui.strong("Descripción");
                });
                header.col(|ui| {
                    ui.strong("Persona");
                });
            })
            .body(|mut body| {
                for row in &state.responses {
                    body.row(22.0, |mut table_row| {
                        table_row.col(|ui| {
                            ui.label(fmt_date(&row.created_at));
                        });
                        table_row.col(|ui| {
                            ui.label(truncate(&row.question, 40));
                        });
                        table_row.col(|ui| {
                            match row.category() {
                                Some((name, slug)) => {
                                    ui.label(format!("{} {}", category_icon(slug), name));
                                }
                                None => {
                                    ui.label(
                                        egui::RichText::new("—")
                                            .color(ui.style().visuals.weak_text_color()),
                                    );
                                }
                            };
                        });
                        table_row.col(|ui| {
                            ui.label(truncate(&row.description, 80));
                        });
                        table_row.col(|ui| {
                            ui.label(&row.participant_name);
                        });
                    });
                }
            });
    }
}

impl Default for ResponsesTable {
    fn default() -> Self {
        Self::new()
    }
}
