use std::time::{Duration, Instant};
use survey_models::ResponseRow;

/// How many entries the feed shows at once.
pub const FEED_VISIBLE: usize = 5;
/// How often the poller re-reads the response collection.
pub const POLL_INTERVAL: Duration = Duration::from_secs(5);
/// How long the "new responses" indicator stays up after a change.
pub const INDICATOR_LINGER: Duration = Duration::from_secs(3);

/// Reconciliation state for the near-real-time feed.
///
/// New arrivals are detected with a monotonic last-seen id cursor rather
/// than a raw count, so the indicator means "new since the previous poll"
/// and upstream deletions can never push it negative.
#[derive(Debug, Default)]
pub struct LiveFeedState {
    visible: Vec<ResponseRow>,
    new_count: usize,
    indicator_deadline: Option<Instant>,
    last_seen_id: Option<i64>,
    seeded: bool,
}

impl LiveFeedState {
    pub fn visible(&self) -> &[ResponseRow] {
        &self.visible
    }

    pub fn new_count(&self) -> usize {
        self.new_count
    }

    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    /// First observation, from the initial page load. Sets the displayed
    /// slice and the cursor without raising the indicator.
    pub fn seed(&mut self, snapshot: &[ResponseRow]) {
        self.visible = snapshot.iter().take(FEED_VISIBLE).cloned().collect();
        self.last_seen_id = snapshot.iter().map(|r| r.id).max();
        self.seeded = true;
    }

    /// Reconciles one polled snapshot. The collection is newest-first, so a
    /// positive delta replaces the displayed slice with the head of the
    /// snapshot and arms the indicator.
    pub fn observe(&mut self, snapshot: &[ResponseRow], now: Instant) {
        if !self.seeded {
            self.seed(snapshot);
            return;
        }

        let cursor = self.last_seen_id.unwrap_or(i64::MIN);
        let fresh = snapshot.iter().filter(|r| r.id > cursor).count();
        if fresh == 0 {
            return;
        }

        self.visible = snapshot.iter().take(FEED_VISIBLE).cloned().collect();
        self.new_count = fresh;
        self.indicator_deadline = Some(now + INDICATOR_LINGER);
        if let Some(max_id) = snapshot.iter().map(|r| r.id).max() {
            self.last_seen_id = Some(max_id);
        }
    }

    /// Clears the indicator once its deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        if let Some(deadline) = self.indicator_deadline {
            if now >= deadline {
                self.new_count = 0;
                self.indicator_deadline = None;
            }
        }
    }
}
