//! Live collection subscriptions
//!
//! Admin list screens subscribe to a collection and receive the full
//! current snapshot of their window on every committed mutation, not a
//! diff. A deletion above a page cursor therefore shifts window
//! membership on the next delivery without any reconciliation step.
//!
//! A [`Subscription`] is a scoped handle: dropping it releases the
//! underlying receiver. Release is tied to handle scope, never to
//! implicit cleanup, so a screen that unmounts must drop its handle.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::broadcast;

use super::Document;

/// Full ordered snapshot of a collection at one commit point
pub type Snapshot = Arc<Vec<(String, Document)>>;

const CHANNEL_CAPACITY: usize = 64;

/// Per-collection broadcast registry, owned by the store
#[derive(Default)]
pub(crate) struct WatchRegistry {
    senders: Mutex<HashMap<String, broadcast::Sender<Snapshot>>>,
}

impl WatchRegistry {
    /// Broadcast a committed snapshot to all live subscribers.
    /// Called inside the store's write path so delivery order matches
    /// commit order for the collection.
    pub(crate) fn notify(&self, collection: &str, snapshot: Snapshot) {
        let senders = self.senders.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(tx) = senders.get(collection) {
            // No receivers is fine; the send result only reports that.
            let _ = tx.send(snapshot);
        }
    }

    pub(crate) fn subscribe(&self, collection: &str, window: Option<usize>) -> Subscription {
        let mut senders = self.senders.lock().unwrap_or_else(|e| e.into_inner());
        let tx = senders
            .entry(collection.to_string())
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0);
        Subscription { rx: tx.subscribe(), window }
    }
}

/// Scoped handle on a live collection stream
pub struct Subscription {
    rx: broadcast::Receiver<Snapshot>,
    window: Option<usize>,
}

impl Subscription {
    /// Wait for the next committed snapshot, truncated to the
    /// subscribed window. Returns `None` once the store is gone.
    ///
    /// A slow consumer that lags behind skips the missed snapshots and
    /// resumes with the freshest one; every delivery is a complete
    /// snapshot, so nothing needs replaying.
    pub async fn recv(&mut self) -> Option<Vec<(String, Document)>> {
        loop {
            match self.rx.recv().await {
                Ok(snapshot) => {
                    let mut items: Vec<(String, Document)> = snapshot.as_ref().clone();
                    if let Some(window) = self.window {
                        items.truncate(window);
                    }
                    return Some(items);
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    log::debug!("subscription lagged, skipped {skipped} snapshot(s)");
                    continue;
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}
