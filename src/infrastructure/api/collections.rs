//! Read-through collection cache over the collection data endpoint.

use std::collections::HashMap;
use std::sync::Mutex;

use serde::Deserialize;

use crate::domain::errors::{ClientError, ClientResult};
use crate::domain::models::{Collection, CollectionDetails};

use super::http::ApiClient;
use super::urls::interpolate_url;

/// URL template for the read-only collection data endpoint.
const COLLECTION_DATA_URL_TEMPLATE: &str = "/collection_handler/data/<collection_id>";

/// Response of the collection data handler. The payload also carries
/// `meta_name` and `meta_description`; only the fields the client consumes
/// are decoded.
#[derive(Debug, Deserialize)]
struct CollectionDataResponse {
    can_edit: bool,
    collection: Collection,
}

/// Client for read-only collection data, with an in-memory read-through
/// cache keyed by collection id.
///
/// Values are copied on every hand-off in both directions: the cache never
/// aliases a value a caller holds, so callers may mutate their copies
/// freely. Details are recorded on every successful fetch, independently
/// of the main cache. Locks are released before any await point; two
/// concurrent loads for the same uncached id each fetch on their own, and
/// the last response to land stays cached.
#[derive(Debug)]
pub struct CollectionClient {
    api: ApiClient,
    cache: Mutex<HashMap<String, Collection>>,
    details: Mutex<HashMap<String, CollectionDetails>>,
}

impl CollectionClient {
    /// Wrap the shared API transport with empty caches.
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            cache: Mutex::new(HashMap::new()),
            details: Mutex::new(HashMap::new()),
        }
    }

    /// Fetch a collection from the backend, bypassing the cache.
    ///
    /// Records the collection's details as a side effect. The main cache
    /// is left untouched — only [`load_collection`](Self::load_collection)
    /// populates it.
    pub async fn fetch_collection(&self, collection_id: &str) -> ClientResult<Collection> {
        let path = interpolate_url(
            COLLECTION_DATA_URL_TEMPLATE,
            &[("collection_id", collection_id)],
        )?;
        let response: CollectionDataResponse = self.api.get_json(&path, &[]).await?;
        let collection = response.collection;

        let details = CollectionDetails {
            can_edit: response.can_edit,
            title: collection.title.clone(),
        };
        self.details
            .lock()
            .expect("details mutex poisoned")
            .insert(collection_id.to_string(), details);

        tracing::debug!(collection_id, "fetched collection");
        Ok(collection)
    }

    /// Load a collection, serving from the cache when possible.
    ///
    /// A cache hit returns a copy without touching the network. A miss
    /// fetches, stores the result under `collection_id`, and returns a
    /// copy.
    pub async fn load_collection(&self, collection_id: &str) -> ClientResult<Collection> {
        if let Some(cached) = self.cached_copy(collection_id) {
            tracing::debug!(collection_id, "collection served from cache");
            return Ok(cached);
        }
        let collection = self.fetch_collection(collection_id).await?;
        self.cache
            .lock()
            .expect("cache mutex poisoned")
            .insert(collection_id.to_string(), collection.clone());
        Ok(collection)
    }

    /// Whether `collection_id` is present in the cache. No side effects.
    pub fn is_cached(&self, collection_id: &str) -> bool {
        self.cache
            .lock()
            .expect("cache mutex poisoned")
            .contains_key(collection_id)
    }

    /// Replace the cache entry for `collection_id` with a copy of
    /// `collection`, without a round trip. Used to push locally edited
    /// state back into the cache.
    pub fn cache_collection(&self, collection_id: &str, collection: &Collection) {
        self.cache
            .lock()
            .expect("cache mutex poisoned")
            .insert(collection_id.to_string(), collection.clone());
    }

    /// Drop every cached collection, forcing the next load of each id back
    /// to the backend. Recorded details are unaffected.
    pub fn clear_cache(&self) {
        self.cache.lock().expect("cache mutex poisoned").clear();
    }

    /// Details recorded by the most recent successful fetch of
    /// `collection_id`.
    ///
    /// Fails with [`ClientError::NotFetched`] if no fetch or load for the
    /// id ever succeeded; asking before fetching is a programming error,
    /// not a runtime condition.
    pub fn collection_details(&self, collection_id: &str) -> ClientResult<CollectionDetails> {
        self.details
            .lock()
            .expect("details mutex poisoned")
            .get(collection_id)
            .cloned()
            .ok_or_else(|| ClientError::NotFetched {
                entity: "collection",
                id: collection_id.to_string(),
            })
    }

    fn cached_copy(&self, collection_id: &str) -> Option<Collection> {
        self.cache
            .lock()
            .expect("cache mutex poisoned")
            .get(collection_id)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn test_client() -> CollectionClient {
        let api = ApiClient::new("http://localhost:9", Duration::from_secs(1)).unwrap();
        CollectionClient::new(api)
    }

    fn sample_collection(id: &str, title: &str) -> Collection {
        Collection {
            id: id.to_string(),
            title: title.to_string(),
            objective: None,
            category: None,
            version: None,
            language_code: None,
            nodes: Vec::new(),
        }
    }

    #[test]
    fn test_cache_collection_makes_id_cached() {
        let client = test_client();
        assert!(!client.is_cached("col_1"));
        client.cache_collection("col_1", &sample_collection("col_1", "First"));
        assert!(client.is_cached("col_1"));
    }

    #[test]
    fn test_cached_value_is_a_copy_not_an_alias() {
        let client = test_client();
        let mut local = sample_collection("col_1", "Original");
        client.cache_collection("col_1", &local);

        // Mutating the caller's value must not reach the cache.
        local.title = "Mutated".to_string();
        let cached = client.cached_copy("col_1").unwrap();
        assert_eq!(cached.title, "Original");
    }

    #[test]
    fn test_clear_cache_forgets_everything() {
        let client = test_client();
        client.cache_collection("col_1", &sample_collection("col_1", "First"));
        client.cache_collection("col_2", &sample_collection("col_2", "Second"));
        client.clear_cache();
        assert!(!client.is_cached("col_1"));
        assert!(!client.is_cached("col_2"));
    }

    #[test]
    fn test_details_before_any_fetch_fail_loudly() {
        let client = test_client();
        let error = client.collection_details("col_1").unwrap_err();
        assert!(matches!(error, ClientError::NotFetched { .. }));
    }

    #[test]
    fn test_response_deserialization() {
        let json = r#"{
            "meta_name": "Fractions",
            "can_edit": true,
            "meta_description": "A course on fractions",
            "collection": { "id": "col_1", "title": "Fractions from scratch" }
        }"#;
        let response: CollectionDataResponse = serde_json::from_str(json).unwrap();
        assert!(response.can_edit);
        assert_eq!(response.collection.id, "col_1");
    }
}
