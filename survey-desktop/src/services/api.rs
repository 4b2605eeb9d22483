use crate::api_client::{ApiClient, ApiError};
use crate::state::{new_slot, AppState};
use std::sync::Arc;
use survey_models::NeedInput;

/// Spawns API work onto the tokio runtime and wires outcomes into the
/// state's result slots. The UI thread never awaits anything.
pub struct ApiService {
    client: ApiClient,
}

impl ApiService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn refresh_categories(&self, state: &mut AppState) {
        state.loading_categories = true;
        state.categories_error = None;
        state.categories_result = new_slot();

        let client = self.client.clone();
        let result_clone = Arc::clone(&state.categories_result);

        tokio::spawn(async move {
            let result = client.list_categories().await;
            let mut categories_result = result_clone.lock().unwrap();
            *categories_result = Some(result.map_err(|e| e.to_string()));
        });
    }

    pub fn refresh_questions(&self, state: &mut AppState) {
        state.loading_questions = true;
        state.questions_error = None;
        state.questions_result = new_slot();

        let client = self.client.clone();
        let result_clone = Arc::clone(&state.questions_result);

        tokio::spawn(async move {
            let result = client.list_questions().await;
            let mut questions_result = result_clone.lock().unwrap();
            *questions_result = Some(result.map_err(|e| e.to_string()));
        });
    }

    pub fn refresh_stats(&self, state: &mut AppState) {
        state.loading_stats = true;
        state.stats_error = None;
        state.stats_result = new_slot();

        let client = self.client.clone();
        let result_clone = Arc::clone(&state.stats_result);

        tokio::spawn(async move {
            let result = client.category_stats().await;
            let mut stats_result = result_clone.lock().unwrap();
            *stats_result = Some(result.map_err(|e| e.to_string()));
        });
    }

    pub fn refresh_responses(&self, state: &mut AppState) {
        state.loading_responses = true;
        state.responses_error = None;
        state.responses_result = new_slot();

        let client = self.client.clone();
        let result_clone = Arc::clone(&state.responses_result);

        tokio::spawn(async move {
            let result = client.list_responses().await;
            let mut responses_result = result_clone.lock().unwrap();
            *responses_result = Some(result.map_err(|e| e.to_string()));
        });
    }

    /// Initial page load: four independent fetches, each reporting its own
    /// success or failure. One failed collection never blocks the others.
    pub fn refresh_all(&self, state: &mut AppState) {
        self.refresh_categories(state);
        self.refresh_questions(state);
        self.refresh_stats(state);
        self.refresh_responses(state);
    }

    /// Post-submission refresh covers only the two aggregate views.
    pub fn refresh_aggregates(&self, state: &mut AppState) {
        self.refresh_stats(state);
        self.refresh_responses(state);
    }

    /// Runs the submission sequence in one spawned task: register the
    /// participant, create the question-1 need, then the question-2
    /// proposal when its text is non-blank. Any failure short-circuits.
    pub fn submit_survey(&self, state: &mut AppState) {
        if state.submitting || !state.ui.form.can_submit() {
            return;
        }

        state.submitting = true;
        state.submit_result = new_slot();

        let form = &state.ui.form;
        let participant = form.participant_input();
        let need = NeedInput::need(
            participant.email.clone(),
            form.q1_category.clone(),
            form.q1_description.clone(),
        );
        let proposal = if form.q2_description.trim().is_empty() {
            None
        } else {
            Some(NeedInput::proposal(
                participant.email.clone(),
                form.q2_description.clone(),
            ))
        };

        let client = self.client.clone();
        let result_clone = Arc::clone(&state.submit_result);

        tokio::spawn(async move {
            let result = submit_sequence(&client, &participant, &need, proposal.as_ref()).await;
            let mut submit_result = result_clone.lock().unwrap();
            *submit_result = Some(result.map_err(|e| e.to_string()));
        });
    }
}

/// The strictly sequential wire protocol of a submission. The participant
/// must exist before any need referencing its email is created; a failure
/// mid-way leaves earlier steps in place (no rollback).
async fn submit_sequence(
    client: &ApiClient,
    participant: &survey_models::ParticipantInput,
    need: &NeedInput,
    proposal: Option<&NeedInput>,
) -> Result<(), ApiError> {
    client.register_participant(participant).await?;
    client.create_need(need).await?;
    if let Some(proposal) = proposal {
        client.create_need(proposal).await?;
    }
    Ok(())
}
