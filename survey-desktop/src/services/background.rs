use crate::services::ApiService;
use crate::state::{AppState, Toast};
use std::sync::Arc;
use std::time::Instant;

/// Drains result slots into application state, once per frame.
///
/// Every mutation of `AppState` driven by a background task goes through
/// here, on the UI thread; the spawned tasks themselves only write slots.
pub struct ResultPump {
    api: Arc<ApiService>,
}

impl ResultPump {
    pub fn new(api: Arc<ApiService>) -> Self {
        Self { api }
    }

    pub fn drain(&self, state: &mut AppState, now: Instant) {
        self.drain_categories(state);
        self.drain_questions(state);
        self.drain_stats(state);
        self.drain_responses(state);
        self.drain_submit(state, now);
        self.drain_feed_snapshot(state, now);

        state.feed.tick(now);
        if let Some(toast) = &state.toast {
            if now >= toast.expires_at {
                state.toast = None;
            }
        }
    }

    fn drain_categories(&self, state: &mut AppState) {
        let result = state.categories_result.lock().unwrap().take();
        if let Some(result) = result {
            state.loading_categories = false;
            match result {
                Ok(categories) => state.categories = categories,
                Err(e) => {
                    tracing::error!("Failed to load categories: {}", e);
                    state.categories_error = Some(e);
                }
            }
        }
    }

    fn drain_questions(&self, state: &mut AppState) {
        let result = state.questions_result.lock().unwrap().take();
        if let Some(result) = result {
            state.loading_questions = false;
            match result {
                Ok(questions) => state.questions = questions,
                Err(e) => {
                    tracing::error!("Failed to load questions: {}", e);
                    state.questions_error = Some(e);
                }
            }
        }
    }

    fn drain_stats(&self, state: &mut AppState) {
        let result = state.stats_result.lock().unwrap().take();
        if let Some(result) = result {
            state.loading_stats = false;
            match result {
                Ok(stats) => state.stats = stats,
                Err(e) => {
                    tracing::error!("Failed to load category stats: {}", e);
                    state.stats_error = Some(e);
                }
            }
        }
    }

    fn drain_responses(&self, state: &mut AppState) {
        let result = state.responses_result.lock().unwrap().take();
        if let Some(result) = result {
            state.loading_responses = false;
            match result {
                Ok(responses) => {
                    // The page-load snapshot doubles as the feed baseline.
                    if !state.feed.is_seeded() {
                        state.feed.seed(&responses);
                    }
                    state.responses = responses;
                }
                Err(e) => {
                    tracing::error!("Failed to load responses: {}", e);
                    state.responses_error = Some(e);
                }
            }
        }
    }

    fn drain_submit(&self, state: &mut AppState, now: Instant) {
        let result = state.submit_result.lock().unwrap().take();
        if let Some(result) = result {
            state.submitting = false;
            match result {
                Ok(()) => {
                    state.ui.form.clear_after_submit();
                    state.toast = Some(Toast::success(
                        "¡Gracias!",
                        "Tu respuesta fue registrada exitosamente.",
                        now,
                    ));
                    self.api.refresh_aggregates(state);
                }
                Err(e) => {
                    tracing::error!("Survey submission failed: {}", e);
                    let message = if e.is_empty() {
                        "Error enviando formulario".to_string()
                    } else {
                        e
                    };
                    state.toast = Some(Toast::error("Error", &message, now));
                }
            }
        }
    }

    fn drain_feed_snapshot(&self, state: &mut AppState, now: Instant) {
        let snapshot = state.feed_snapshot.lock().unwrap().take();
        if let Some(snapshot) = snapshot {
            state.feed.observe(&snapshot, now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_client::ApiClient;
    use crate::config::AppConfig;
    use survey_models::{Category, ResponseRow};

    fn pump() -> ResultPump {
        let client = ApiClient::new("http://localhost:0".to_string());
        ResultPump::new(Arc::new(ApiService::new(client)))
    }

    fn state() -> AppState {
        AppState::new(AppConfig::default())
    }

    fn row(id: i64) -> ResponseRow {
        ResponseRow {
            id,
            description: format!("respuesta {id}"),
            created_at: "2024-05-01T10:00:00Z".to_string(),
            question: "q".to_string(),
            question_id: Some(1),
            participant_name: "Ana".to_string(),
            participant_email: "ana@test.com".to_string(),
            category_name: None,
            category_slug: None,
        }
    }

    #[tokio::test]
    async fn successful_load_clears_loading_flag_and_stores_data() {
        let pump = pump();
        let mut state = state();
        state.loading_categories = true;
        *state.categories_result.lock().unwrap() = Some(Ok(vec![Category {
            id: 1,
            name: "Salud".to_string(),
            slug: "salud".to_string(),
        }]));

        pump.drain(&mut state, Instant::now());

        assert!(!state.loading_categories);
        assert_eq!(state.categories.len(), 1);
        assert!(state.categories_error.is_none());
    }

    #[tokio::test]
    async fn failed_load_records_error_for_its_collection_only() {
        let pump = pump();
        let mut state = state();
        state.loading_stats = true;
        *state.stats_result.lock().unwrap() = Some(Err("HTTP 500: boom".to_string()));

        pump.drain(&mut state, Instant::now());

        assert!(!state.loading_stats);
        assert_eq!(state.stats_error.as_deref(), Some("HTTP 500: boom"));
        assert!(state.categories_error.is_none());
        assert!(state.responses_error.is_none());
    }

    #[tokio::test]
    async fn simultaneous_failures_each_keep_their_own_error() {
        let pump = pump();
        let mut state = state();
        state.loading_categories = true;
        state.loading_stats = true;
        *state.categories_result.lock().unwrap() = Some(Err("HTTP 500: cat".to_string()));
        *state.stats_result.lock().unwrap() = Some(Err("HTTP 502: stats".to_string()));

        pump.drain(&mut state, Instant::now());

        assert_eq!(state.categories_error.as_deref(), Some("HTTP 500: cat"));
        assert_eq!(state.stats_error.as_deref(), Some("HTTP 502: stats"));

        let errors = state.load_errors();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0], ("categorías", "HTTP 500: cat"));
        assert_eq!(errors[1], ("estadísticas", "HTTP 502: stats"));
    }

    #[tokio::test]
    async fn first_responses_load_seeds_the_feed() {
        let pump = pump();
        let mut state = state();
        *state.responses_result.lock().unwrap() = Some(Ok(vec![row(3), row(2), row(1)]));

        pump.drain(&mut state, Instant::now());

        assert!(state.feed.is_seeded());
        assert_eq!(state.feed.visible().len(), 3);
        assert_eq!(state.feed.new_count(), 0, "seeding raises no indicator");
    }

    #[tokio::test]
    async fn successful_submit_clears_form_and_toasts() {
        let pump = pump();
        let mut state = state();
        state.submitting = true;
        state.ui.form.q1_description = "algo".to_string();
        state.ui.form.q1_category = "salud".to_string();
        *state.submit_result.lock().unwrap() = Some(Ok(()));

        pump.drain(&mut state, Instant::now());

        assert!(!state.submitting);
        assert!(state.ui.form.q1_description.is_empty());
        assert!(state.ui.form.q1_category.is_empty());
        let toast = state.toast.expect("success toast");
        assert_eq!(toast.title, "¡Gracias!");
        // Post-submit refresh of the aggregate views kicked off.
        assert!(state.loading_stats);
        assert!(state.loading_responses);
    }

    #[tokio::test]
    async fn failed_submit_keeps_form_and_toasts_error() {
        let pump = pump();
        let mut state = state();
        state.submitting = true;
        state.ui.form.q1_description = "algo".to_string();
        *state.submit_result.lock().unwrap() = Some(Err("HTTP 500: db down".to_string()));

        pump.drain(&mut state, Instant::now());

        assert!(!state.submitting);
        assert_eq!(state.ui.form.q1_description, "algo");
        let toast = state.toast.expect("error toast");
        assert_eq!(toast.title, "Error");
        assert_eq!(toast.message, "HTTP 500: db down");
        assert!(!state.loading_stats, "no refresh on failure");
    }

    #[tokio::test]
    async fn polled_snapshot_reaches_the_feed() {
        let pump = pump();
        let mut state = state();
        let now = Instant::now();
        state.feed.seed(&[row(1)]);

        *state.feed_snapshot.lock().unwrap() = Some(vec![row(2), row(1)]);
        pump.drain(&mut state, now);

        assert_eq!(state.feed.new_count(), 1);
        assert_eq!(state.feed.visible()[0].id, 2);
    }

    #[tokio::test]
    async fn toast_expires_after_linger() {
        let pump = pump();
        let mut state = state();
        let now = Instant::now();
        state.toast = Some(Toast::success("¡Gracias!", "ok", now));

        pump.drain(&mut state, now);
        assert!(state.toast.is_some());

        pump.drain(&mut state, now + std::time::Duration::from_secs(5));
        assert!(state.toast.is_none());
    }
}
