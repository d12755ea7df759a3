//! Paginated fetching of contribution opportunities.
//!
//! Wraps the opportunity summary endpoint, returning one cursor-paginated
//! slice per call. The client is stateless: no cursor is remembered
//! between calls, and no ordering is enforced between in-flight requests.
//! Consumers that need single-flight behavior layer it on top (see
//! `services::OpportunityFeed`).

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::domain::errors::{ClientError, ClientResult};
use crate::domain::models::{
    Opportunity, OpportunityKind, Page, PageCursor, SkillOpportunity, TranslationOpportunity,
    VoiceoverOpportunity,
};

use super::http::ApiClient;
use super::urls::interpolate_url;

/// URL template for the opportunity summary endpoint.
const OPPORTUNITY_SUMMARY_URL_TEMPLATE: &str = "/opportunitiessummaryhandler/<opportunityType>";

/// One page of the summary handler's response, before kind dispatch.
#[derive(Debug, Deserialize)]
struct OpportunityPageResponse<T> {
    opportunities: Vec<T>,
    more: bool,
    #[serde(default)]
    next_cursor: Option<String>,
}

/// Client for the opportunity summary endpoint.
#[derive(Debug, Clone)]
pub struct OpportunityClient {
    api: ApiClient,
}

impl OpportunityClient {
    /// Wrap the shared API transport.
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Fetch the first page of opportunities of `kind`.
    ///
    /// `language_code` scopes translation and voiceover listings; the
    /// skill listing ignores it.
    pub async fn fetch_first_page(
        &self,
        kind: OpportunityKind,
        language_code: Option<&str>,
    ) -> ClientResult<Page<Opportunity>> {
        self.fetch_page(kind, language_code, None).await
    }

    /// Fetch the page after `cursor`.
    ///
    /// The cursor must come from a previous page of the same kind and
    /// filter. Callers check [`Page::has_more`] before calling; there is
    /// no cursorless variant of this method to misuse.
    pub async fn fetch_next_page(
        &self,
        kind: OpportunityKind,
        language_code: Option<&str>,
        cursor: &PageCursor,
    ) -> ClientResult<Page<Opportunity>> {
        self.fetch_page(kind, language_code, Some(cursor)).await
    }

    async fn fetch_page(
        &self,
        kind: OpportunityKind,
        language_code: Option<&str>,
        cursor: Option<&PageCursor>,
    ) -> ClientResult<Page<Opportunity>> {
        match kind {
            OpportunityKind::Translation => {
                self.fetch_typed(kind, language_code, cursor, Opportunity::Translation)
                    .await
            }
            OpportunityKind::Voiceover => {
                self.fetch_typed(kind, language_code, cursor, Opportunity::Voiceover)
                    .await
            }
            OpportunityKind::Skill => {
                self.fetch_typed(kind, language_code, cursor, Opportunity::Skill)
                    .await
            }
        }
    }

    async fn fetch_typed<T: DeserializeOwned>(
        &self,
        kind: OpportunityKind,
        language_code: Option<&str>,
        cursor: Option<&PageCursor>,
        wrap: fn(T) -> Opportunity,
    ) -> ClientResult<Page<Opportunity>> {
        let path = interpolate_url(
            OPPORTUNITY_SUMMARY_URL_TEMPLATE,
            &[("opportunityType", kind.as_str())],
        )?;
        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(code) = language_code {
            query.push(("language_code", code));
        }
        if let Some(cursor) = cursor {
            query.push(("cursor", cursor.as_str()));
        }

        let response: OpportunityPageResponse<T> = self.api.get_json(&path, &query).await?;

        // An empty page is valid; only the server flag ends pagination.
        // A page claiming more results without a cursor cannot be
        // continued and is rejected outright.
        let cursor = match (response.more, response.next_cursor) {
            (true, Some(next)) => Some(PageCursor::new(next)),
            (true, None) => {
                return Err(ClientError::MalformedResponse(
                    "page claims more results but carries no cursor".to_string(),
                ))
            }
            (false, _) => None,
        };

        tracing::debug!(
            kind = %kind,
            items = response.opportunities.len(),
            has_more = cursor.is_some(),
            "fetched opportunity page"
        );

        Ok(Page {
            items: response.opportunities.into_iter().map(wrap).collect(),
            cursor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_response_deserialization() {
        let json = r#"{
            "opportunities": [
                { "topic": "Maths", "story": "Place Values", "chapter": "Counting" }
            ],
            "more": true,
            "next_cursor": "c1"
        }"#;
        let response: OpportunityPageResponse<TranslationOpportunity> =
            serde_json::from_str(json).unwrap();
        assert_eq!(response.opportunities.len(), 1);
        assert!(response.more);
        assert_eq!(response.next_cursor.as_deref(), Some("c1"));
    }

    #[test]
    fn test_page_response_without_cursor_field() {
        let json = r#"{ "opportunities": [], "more": false }"#;
        let response: OpportunityPageResponse<SkillOpportunity> =
            serde_json::from_str(json).unwrap();
        assert!(response.opportunities.is_empty());
        assert!(!response.more);
        assert!(response.next_cursor.is_none());
    }

    #[test]
    fn test_voiceover_page_response_deserialization() {
        let json = r#"{
            "opportunities": [
                { "topic": "Science", "story": "Light", "chapter": "Reflection" }
            ],
            "more": false,
            "next_cursor": null
        }"#;
        let response: OpportunityPageResponse<VoiceoverOpportunity> =
            serde_json::from_str(json).unwrap();
        assert_eq!(response.opportunities[0].chapter, "Reflection");
    }
}
