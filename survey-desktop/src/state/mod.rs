use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use survey_models::{Category, CategoryStat, Question, ResponseRow};

pub mod ui_state;

pub use ui_state::*;

/// Where a spawned task deposits its outcome for the UI thread to drain.
pub type Slot<T> = Arc<Mutex<Option<Result<T, String>>>>;

pub fn new_slot<T>() -> Slot<T> {
    Arc::new(Mutex::new(None))
}

/// Raw response snapshots from the feed poller. Poll errors are swallowed
/// upstream, so this carries data only.
pub type FeedSnapshotSlot = Arc<Mutex<Option<Vec<ResponseRow>>>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
    pub expires_at: Instant,
}

const TOAST_LINGER: Duration = Duration::from_secs(4);

impl Toast {
    pub fn success(title: &str, message: &str, now: Instant) -> Self {
        Self {
            kind: ToastKind::Success,
            title: title.to_string(),
            message: message.to_string(),
            expires_at: now + TOAST_LINGER,
        }
    }

    pub fn error(title: &str, message: &str, now: Instant) -> Self {
        Self {
            kind: ToastKind::Error,
            title: title.to_string(),
            message: message.to_string(),
            expires_at: now + TOAST_LINGER,
        }
    }
}

/// Centralized application state. Collections are plain data the views
/// render from; every network outcome arrives through a result slot.
pub struct AppState {
    pub config: crate::config::AppConfig,
    pub ui: UiState,

    // Data
    pub categories: Vec<Category>,
    pub questions: Vec<Question>,
    pub stats: Vec<CategoryStat>,
    pub responses: Vec<ResponseRow>,

    // Live feed reconciliation
    pub feed: crate::feed::LiveFeedState,

    // Per-collection load state; each of the four initial fetches reports
    // success or failure on its own.
    pub loading_categories: bool,
    pub loading_questions: bool,
    pub loading_stats: bool,
    pub loading_responses: bool,
    pub categories_error: Option<String>,
    pub questions_error: Option<String>,
    pub stats_error: Option<String>,
    pub responses_error: Option<String>,

    pub submitting: bool,
    pub toast: Option<Toast>,

    // Result slots
    pub categories_result: Slot<Vec<Category>>,
    pub questions_result: Slot<Vec<Question>>,
    pub stats_result: Slot<Vec<CategoryStat>>,
    pub responses_result: Slot<Vec<ResponseRow>>,
    pub submit_result: Slot<()>,
    pub feed_snapshot: FeedSnapshotSlot,
}

impl AppState {
    pub fn new(config: crate::config::AppConfig) -> Self {
        Self {
            config,
            ui: UiState::default(),
            categories: Vec::new(),
            questions: Vec::new(),
            stats: Vec::new(),
            responses: Vec::new(),
            feed: crate::feed::LiveFeedState::default(),
            loading_categories: false,
            loading_questions: false,
            loading_stats: false,
            loading_responses: false,
            categories_error: None,
            questions_error: None,
            stats_error: None,
            responses_error: None,
            submitting: false,
            toast: None,
            categories_result: new_slot(),
            questions_result: new_slot(),
            stats_result: new_slot(),
            responses_result: new_slot(),
            submit_result: new_slot(),
            feed_snapshot: Arc::new(Mutex::new(None)),
        }
    }

    pub fn any_loading(&self) -> bool {
        self.loading_categories
            || self.loading_questions
            || self.loading_stats
            || self.loading_responses
    }

    /// Label and message for every collection whose load failed, in fixed
    /// order. Each failed fetch keeps its own error; none shadows another.
    pub fn load_errors(&self) -> Vec<(&'static str, &str)> {
        [
            ("categorías", self.categories_error.as_deref()),
            ("preguntas", self.questions_error.as_deref()),
            ("estadísticas", self.stats_error.as_deref()),
            ("respuestas", self.responses_error.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, error)| error.map(|e| (label, e)))
        .collect()
    }
}
