//! Collection models.
//!
//! A collection is a curated sequence of explorations. The client treats
//! it as a read-only entity fetched by id; see
//! `infrastructure::api::CollectionClient` for the caching rules.

use serde::{Deserialize, Serialize};

/// One node of a collection: a reference to an exploration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionNode {
    /// Id of the referenced exploration.
    pub exploration_id: String,
}

/// A curated sequence of explorations, keyed by a backend-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    /// Unique collection id.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Learning objective, when set.
    #[serde(default)]
    pub objective: Option<String>,
    /// Category label, when set.
    #[serde(default)]
    pub category: Option<String>,
    /// Backend version counter.
    #[serde(default)]
    pub version: Option<u32>,
    /// Language of the collection content.
    #[serde(default)]
    pub language_code: Option<String>,
    /// Ordered exploration references.
    #[serde(default)]
    pub nodes: Vec<CollectionNode>,
}

/// Metadata recorded as a side effect of every collection fetch,
/// independently of whether the full collection is cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionDetails {
    /// Whether the current user may edit the collection.
    pub can_edit: bool,
    /// The collection's title at the time of the last fetch.
    pub title: String,
}
