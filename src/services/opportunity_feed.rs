//! Accumulating consumer of paginated opportunity results.

use crate::domain::errors::ClientResult;
use crate::domain::models::{Opportunity, OpportunityKind, PageCursor};
use crate::infrastructure::api::OpportunityClient;

/// Outcome of a [`OpportunityFeed::load_more`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A page was fetched and appended.
    Loaded {
        /// Number of items the page contributed. Zero is valid: an empty
        /// page does not end pagination by itself.
        appended: usize,
    },
    /// A previous load is still in flight; no request was made.
    AlreadyLoading,
    /// The backend has signaled end-of-results; no request was made.
    Exhausted,
}

/// Accumulates opportunity pages for one kind and language filter.
///
/// The fetcher itself is stateless and enforces nothing; this feed is the
/// call-site discipline layered on top: at most one load in flight, no
/// loads once the backend has signaled end-of-results, and the cursor
/// threaded strictly from each page into the next request. As a result the
/// accumulated list preserves server order and never consumes a cursor
/// twice.
#[derive(Debug)]
pub struct OpportunityFeed {
    client: OpportunityClient,
    kind: OpportunityKind,
    language_code: Option<String>,
    items: Vec<Opportunity>,
    cursor: Option<PageCursor>,
    more_available: bool,
    in_flight: bool,
}

impl OpportunityFeed {
    /// Create an empty feed for `kind`, optionally scoped to a language.
    pub fn new(
        client: OpportunityClient,
        kind: OpportunityKind,
        language_code: Option<String>,
    ) -> Self {
        Self {
            client,
            kind,
            language_code,
            items: Vec::new(),
            cursor: None,
            more_available: true,
            in_flight: false,
        }
    }

    /// Fetch the next page and append its items, if the feed is idle and
    /// the backend has more to give.
    ///
    /// The first call fetches the first page; later calls thread the
    /// cursor from the page before. On failure the in-flight flag is
    /// cleared before the error propagates, so the feed stays usable.
    pub async fn load_more(&mut self) -> ClientResult<LoadOutcome> {
        if self.in_flight {
            return Ok(LoadOutcome::AlreadyLoading);
        }
        if !self.more_available {
            return Ok(LoadOutcome::Exhausted);
        }

        self.in_flight = true;
        let result = match &self.cursor {
            None => {
                self.client
                    .fetch_first_page(self.kind, self.language_code.as_deref())
                    .await
            }
            Some(cursor) => {
                self.client
                    .fetch_next_page(self.kind, self.language_code.as_deref(), cursor)
                    .await
            }
        };
        self.in_flight = false;

        let page = result?;
        let appended = page.items.len();
        self.more_available = page.has_more();
        self.items.extend(page.items);
        self.cursor = page.cursor;
        Ok(LoadOutcome::Loaded { appended })
    }

    /// Switch the language filter, discarding everything accumulated so
    /// far and restarting pagination from the first page.
    pub fn set_language(&mut self, language_code: Option<String>) {
        self.language_code = language_code;
        self.items.clear();
        self.cursor = None;
        self.more_available = true;
    }

    /// Everything accumulated so far, in server order.
    pub fn items(&self) -> &[Opportunity] {
        &self.items
    }

    /// Whether the backend has more pages to give.
    pub fn has_more(&self) -> bool {
        self.more_available
    }

    /// The kind this feed accumulates.
    pub fn kind(&self) -> OpportunityKind {
        self.kind
    }

    /// The active language filter.
    pub fn language_code(&self) -> Option<&str> {
        self.language_code.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::api::ApiClient;
    use std::time::Duration;

    fn test_feed(kind: OpportunityKind) -> OpportunityFeed {
        let api = ApiClient::new("http://localhost:9", Duration::from_secs(1)).unwrap();
        OpportunityFeed::new(OpportunityClient::new(api), kind, Some("es".to_string()))
    }

    #[test]
    fn test_new_feed_is_empty_and_expects_more() {
        let feed = test_feed(OpportunityKind::Translation);
        assert!(feed.items().is_empty());
        assert!(feed.has_more());
        assert_eq!(feed.language_code(), Some("es"));
    }

    #[test]
    fn test_set_language_resets_accumulation() {
        let mut feed = test_feed(OpportunityKind::Voiceover);
        feed.more_available = false;
        feed.cursor = Some(PageCursor::new("c3"));
        feed.items.push(Opportunity::Voiceover(
            crate::domain::models::VoiceoverOpportunity {
                topic: "Science".to_string(),
                story: "Light".to_string(),
                chapter: "Reflection".to_string(),
            },
        ));

        feed.set_language(Some("hi".to_string()));

        assert!(feed.items().is_empty());
        assert!(feed.has_more());
        assert!(feed.cursor.is_none());
        assert_eq!(feed.language_code(), Some("hi"));
    }

    #[tokio::test]
    async fn test_exhausted_feed_refuses_to_load() {
        let mut feed = test_feed(OpportunityKind::Skill);
        feed.more_available = false;
        // The base URL points nowhere; reaching the network would error,
        // so an Ok(Exhausted) proves no request was attempted.
        let outcome = feed.load_more().await.unwrap();
        assert_eq!(outcome, LoadOutcome::Exhausted);
    }

    #[tokio::test]
    async fn test_in_flight_feed_refuses_to_load() {
        let mut feed = test_feed(OpportunityKind::Skill);
        feed.in_flight = true;
        let outcome = feed.load_more().await.unwrap();
        assert_eq!(outcome, LoadOutcome::AlreadyLoading);
    }

    #[tokio::test]
    async fn test_failed_load_clears_in_flight_flag() {
        let mut feed = test_feed(OpportunityKind::Translation);
        // No server is listening on the feed's base URL.
        let result = feed.load_more().await;
        assert!(result.is_err());
        assert!(!feed.in_flight, "a failed load must leave the feed usable");
        assert!(feed.has_more());
    }
}
