use crate::api_client::ApiClient;
use crate::components::{
    CategoryStatsPanel, LiveFeedPanel, ResponsesGrid, ResponsesTable, StatsCharts, StatusBar,
    SurveyForm,
};
use crate::config::AppConfig;
use crate::services::{ApiService, FeedPoller, ResultPump};
use crate::state::{AppState, DashboardTab, ToastKind};
use std::sync::Arc;
use std::time::Instant;
use survey_models::QuestionKind;

pub struct SurveyApp {
    state: AppState,
    api: Arc<ApiService>,
    pump: ResultPump,
    poller: FeedPoller,

    form: SurveyForm,
    stats_panel: CategoryStatsPanel,
    feed_panel: LiveFeedPanel,
    grid: ResponsesGrid,
    table: ResponsesTable,
    charts: StatsCharts,
    status_bar: StatusBar,
}

impl SurveyApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = AppConfig::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load configuration, using defaults: {}", e);
            AppConfig::default()
        });

        let client = ApiClient::new(config.api.base_url.clone());
        let api = Arc::new(ApiService::new(client.clone()));
        let mut state = AppState::new(config);

        api.refresh_all(&mut state);

        let poller = FeedPoller::new();
        poller.start(client, Arc::clone(&state.feed_snapshot));

        Self {
            state,
            pump: ResultPump::new(Arc::clone(&api)),
            api,
            poller,
            form: SurveyForm::new(),
            stats_panel: CategoryStatsPanel::new(),
            feed_panel: LiveFeedPanel::new(),
            grid: ResponsesGrid::new(),
            table: ResponsesTable::new(),
            charts: StatsCharts::new(),
            status_bar: StatusBar::new(),
        }
    }

    fn dashboard_tabs(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.state.ui.tab, DashboardTab::Responses, "Respuestas");
            ui.selectable_value(&mut self.state.ui.tab, DashboardTab::Charts, "Estadísticas");
            ui.selectable_value(&mut self.state.ui.tab, DashboardTab::Insights, "Análisis");
        });
        ui.separator();

        match self.state.ui.tab {
            DashboardTab::Responses => {
                self.grid.ui(ui, &mut self.state);
                ui.add_space(16.0);
                ui.collapsing("Tabla completa", |ui| {
                    self.table.ui(ui, &self.state);
                });
            }
            DashboardTab::Charts => {
                self.charts.ui(ui, &self.state);
            }
            DashboardTab::Insights => {
                self.insights_tab(ui);
            }
        }
    }

    fn insights_tab(&mut self, ui: &mut egui::Ui) {
        use crate::insights;

        let responses = &self.state.responses;
        let needs = insights::count_by_kind(responses, QuestionKind::Need);
        let proposals = insights::count_by_kind(responses, QuestionKind::Proposal);
        let participants = insights::unique_participants(responses);
        let avg = insights::avg_responses_per_participant(responses);

        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(10.0, 10.0);
            Self::metric_card(ui, "Respuestas", &responses.len().to_string());
            Self::metric_card(ui, "Necesidades", &needs.to_string());
            Self::metric_card(ui, "Propuestas", &proposals.to_string());
            Self::metric_card(ui, "Personas", &participants.to_string());
            Self::metric_card(ui, "Respuestas por persona", &format!("{avg:.1}"));
        });

        ui.add_space(12.0);
        if let Some(top) = insights::top_category(&self.state.stats) {
            ui.label(format!(
                "La categoría más mencionada es {} con {} respuestas.",
                top.name, top.count
            ));
        }
    }

    fn metric_card(ui: &mut egui::Ui, label: &str, value: &str) {
        ui.allocate_ui(egui::vec2(150.0, 64.0), |ui| {
            egui::Frame::NONE
                .fill(ui.style().visuals.widgets.inactive.bg_fill)
                .corner_radius(8.0)
                .inner_margin(egui::Margin::same(10))
                .show(ui, |ui| {
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(value).size(20.0).strong());
                        ui.label(
                            egui::RichText::new(label)
                                .size(11.0)
                                .color(ui.style().visuals.weak_text_color()),
                        );
                    });
                });
        });
    }

    fn show_toast(&self, ctx: &egui::Context) {
        let Some(toast) = &self.state.toast else {
            return;
        };

        egui::Area::new(egui::Id::new("toast"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -40.0))
            .show(ctx, |ui| {
                let fill = match toast.kind {
                    ToastKind::Success => egui::Color32::from_rgb(0x16, 0x65, 0x34),
                    ToastKind::Error => egui::Color32::from_rgb(0x7f, 0x1d, 0x1d),
                };
                egui::Frame::NONE
                    .fill(fill)
                    .corner_radius(8.0)
                    .inner_margin(egui::Margin::same(12))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(&toast.title)
                                .color(egui::Color32::WHITE)
                                .strong(),
                        );
                        ui.label(
                            egui::RichText::new(&toast.message)
                                .color(egui::Color32::WHITE)
                                .size(12.0),
                        );
                    });
            });
    }
}

impl eframe::App for SurveyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.pump.drain(&mut self.state, now);

        self.status_bar.ui(ctx, &self.state);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    ui.heading(
                        egui::RichText::new("Mini Encuestas de la Comunidad").size(22.0),
                    );
                    ui.label(
                        egui::RichText::new(
                            "Cuéntanos qué necesita tu comunidad y mira lo que opinan los demás",
                        )
                        .color(ui.style().visuals.weak_text_color()),
                    );
                });
                ui.add_space(12.0);

                let mut submit_requested = false;
                ui.columns(2, |columns| {
                    submit_requested = self.form.ui(&mut columns[0], &mut self.state);

                    self.stats_panel.ui(&mut columns[1], &self.state);
                    columns[1].add_space(16.0);
                    self.feed_panel.ui(&mut columns[1], &self.state);
                });

                if submit_requested {
                    self.api.submit_survey(&mut self.state);
                }

                ui.add_space(16.0);
                ui.separator();
                ui.add_space(8.0);

                self.dashboard_tabs(ui);
                ui.add_space(24.0);
            });
        });

        self.show_toast(ctx);

        // Slot results and feed snapshots land between frames.
        ctx.request_repaint_after(std::time::Duration::from_millis(250));
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.poller.stop();
    }
}
