use crate::api_client::ApiClient;
use crate::feed::POLL_INTERVAL;
use crate::state::FeedSnapshotSlot;
use std::sync::Arc;
use tokio::sync::Notify;
use tokio::time::{interval_at, Instant as TokioInstant};

/// Background poller feeding the live feed.
///
/// Every five seconds it re-reads the response collection and deposits the
/// snapshot for the UI thread to reconcile. Poll failures are logged and
/// skipped; the next tick tries again.
pub struct FeedPoller {
    shutdown: Arc<Notify>,
}

impl FeedPoller {
    pub fn new() -> Self {
        Self {
            shutdown: Arc::new(Notify::new()),
        }
    }

    pub fn start(&self, client: ApiClient, slot: FeedSnapshotSlot) {
        let shutdown = Arc::clone(&self.shutdown);

        tokio::spawn(async move {
            // The page load already fetched a baseline; first poll waits a
            // full interval instead of firing immediately.
            let mut ticker = interval_at(TokioInstant::now() + POLL_INTERVAL, POLL_INTERVAL);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        match client.list_responses().await {
                            Ok(snapshot) => {
                                let mut pending = slot.lock().unwrap();
                                *pending = Some(snapshot);
                            }
                            Err(e) => {
                                tracing::warn!("Feed poll failed: {}", e);
                            }
                        }
                    }
                    _ = shutdown.notified() => {
                        tracing::debug!("Feed poller stopping");
                        break;
                    }
                }
            }
        });
    }

    pub fn stop(&self) {
        self.shutdown.notify_one();
    }
}

impl Default for FeedPoller {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for FeedPoller {
    fn drop(&mut self) {
        self.stop();
    }
}
