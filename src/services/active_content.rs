//! Active-content selection with typed change notifications.
//!
//! Tracks which content unit is active in an editing session. The valid
//! id set is handed over at construction time — there is no ambient
//! registry to consult — and changes are published to subscribers as
//! typed events over a broadcast channel.

use std::collections::HashSet;

use tokio::sync::broadcast;

use crate::domain::errors::{ClientError, ClientResult};

/// Buffered events per subscriber before the oldest are dropped.
const EVENT_CHANNEL_CAPACITY: usize = 16;

/// Published when the active content id changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveContentEvent {
    /// The newly active content id.
    pub content_id: String,
}

/// Tracks the active content id of one editing session.
#[derive(Debug)]
pub struct ActiveContentTracker {
    valid_ids: HashSet<String>,
    active: Option<String>,
    events: broadcast::Sender<ActiveContentEvent>,
}

impl ActiveContentTracker {
    /// Create a tracker over the given set of valid content ids, with no
    /// active selection.
    pub fn new(valid_ids: impl IntoIterator<Item = String>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            valid_ids: valid_ids.into_iter().collect(),
            active: None,
            events,
        }
    }

    /// The currently active content id, if any.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Make `content_id` active and notify subscribers.
    ///
    /// Fails with a validation error — and publishes nothing — if the id
    /// is not one of the ids this tracker was constructed with.
    pub fn set_active(&mut self, content_id: &str) -> ClientResult<()> {
        if !self.valid_ids.contains(content_id) {
            return Err(ClientError::Validation(format!(
                "invalid active content id: {content_id}"
            )));
        }
        self.active = Some(content_id.to_string());
        // A send error only means there are no subscribers right now.
        let _ = self.events.send(ActiveContentEvent {
            content_id: content_id.to_string(),
        });
        Ok(())
    }

    /// Register for change events.
    pub fn subscribe(&self) -> broadcast::Receiver<ActiveContentEvent> {
        self.events.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> ActiveContentTracker {
        ActiveContentTracker::new(["content_a".to_string(), "content_b".to_string()])
    }

    #[test]
    fn test_no_selection_initially() {
        assert!(tracker().active().is_none());
    }

    #[test]
    fn test_set_active_records_valid_id() {
        let mut tracker = tracker();
        tracker.set_active("content_a").unwrap();
        assert_eq!(tracker.active(), Some("content_a"));
    }

    #[test]
    fn test_set_active_rejects_unknown_id() {
        let mut tracker = tracker();
        let error = tracker.set_active("content_zzz").unwrap_err();
        assert!(matches!(error, ClientError::Validation(_)));
        assert!(tracker.active().is_none(), "a rejected id must not stick");
    }

    #[tokio::test]
    async fn test_subscribers_observe_changes() {
        let mut tracker = tracker();
        let mut first = tracker.subscribe();
        let mut second = tracker.subscribe();

        tracker.set_active("content_b").unwrap();

        let event = first.recv().await.unwrap();
        assert_eq!(event.content_id, "content_b");
        let event = second.recv().await.unwrap();
        assert_eq!(event.content_id, "content_b");
    }

    #[tokio::test]
    async fn test_rejected_change_publishes_nothing() {
        let mut tracker = tracker();
        let mut events = tracker.subscribe();

        tracker.set_active("content_zzz").unwrap_err();
        tracker.set_active("content_a").unwrap();

        // The only event observed is the valid change.
        let event = events.recv().await.unwrap();
        assert_eq!(event.content_id, "content_a");
        assert!(events.try_recv().is_err());
    }
}
