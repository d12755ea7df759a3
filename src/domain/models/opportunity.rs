//! Contribution opportunity models and pagination types.
//!
//! These structs map to the opportunity summary handler's JSON payloads.
//! An opportunity is one unit of contribution work (translate, voiceover,
//! or answer a skill question) surfaced to volunteers.

use serde::{Deserialize, Serialize};

/// The kind of contribution work an opportunity offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpportunityKind {
    /// Translating exploration content into another language.
    Translation,
    /// Recording voiceovers for exploration content.
    Voiceover,
    /// Suggesting questions for a skill.
    Skill,
}

impl OpportunityKind {
    /// Path segment used by the opportunity summary endpoint.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Translation => "translation",
            Self::Voiceover => "voiceover",
            Self::Skill => "skill",
        }
    }

    /// Whether this kind is filtered by a language code.
    ///
    /// The skill listing is language-independent; the other two are
    /// scoped to the active language.
    pub fn is_language_filtered(self) -> bool {
        !matches!(self, Self::Skill)
    }
}

impl std::fmt::Display for OpportunityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque pagination token issued by the backend.
///
/// The client never inspects the contents; it only threads the token from
/// one page into the request for the next.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageCursor(String);

impl PageCursor {
    /// Wrap a raw token received from the backend.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw token, for echoing back in a request.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One slice of a paginated result set.
///
/// The cursor doubles as the end-of-results signal: a present cursor means
/// the backend has more to give, an absent one means the set is exhausted.
/// An empty `items` with a cursor present is a valid page — only the
/// backend's own flag ends pagination, never an item count.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Items in server order. Pages are never merged server-side; callers
    /// concatenate.
    pub items: Vec<T>,
    /// Token for the next page, or `None` at end-of-results.
    pub cursor: Option<PageCursor>,
}

impl<T> Page<T> {
    /// Whether another page can be requested.
    pub fn has_more(&self) -> bool {
        self.cursor.is_some()
    }
}

/// A translation opportunity as returned by the summary handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationOpportunity {
    /// Name of the topic the exploration belongs to.
    pub topic: String,
    /// Title of the enclosing story.
    pub story: String,
    /// Title of the story chapter needing translation.
    pub chapter: String,
}

/// A voiceover opportunity as returned by the summary handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceoverOpportunity {
    /// Name of the topic the exploration belongs to.
    pub topic: String,
    /// Title of the enclosing story.
    pub story: String,
    /// Title of the story chapter needing a voice artist.
    pub chapter: String,
}

/// A skill opportunity as returned by the summary handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillOpportunity {
    /// Name of the topic the skill belongs to.
    pub topic_name: String,
    /// Description of the skill needing questions.
    pub skill_description: String,
    /// Number of questions the skill already has.
    pub question_count: u32,
}

/// One unit of contribution work, tagged by kind.
///
/// Serializes untagged so JSON output mirrors the wire shape of each
/// variant. Deserialization happens per kind at the fetch site, where the
/// kind is already known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Opportunity {
    /// A translation opportunity.
    Translation(TranslationOpportunity),
    /// A voiceover opportunity.
    Voiceover(VoiceoverOpportunity),
    /// A skill opportunity.
    Skill(SkillOpportunity),
}

impl Opportunity {
    /// The kind of work this opportunity offers.
    pub fn kind(&self) -> OpportunityKind {
        match self {
            Self::Translation(_) => OpportunityKind::Translation,
            Self::Voiceover(_) => OpportunityKind::Voiceover,
            Self::Skill(_) => OpportunityKind::Skill,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_path_segments() {
        assert_eq!(OpportunityKind::Translation.as_str(), "translation");
        assert_eq!(OpportunityKind::Voiceover.as_str(), "voiceover");
        assert_eq!(OpportunityKind::Skill.as_str(), "skill");
    }

    #[test]
    fn test_skill_kind_is_not_language_filtered() {
        assert!(OpportunityKind::Translation.is_language_filtered());
        assert!(OpportunityKind::Voiceover.is_language_filtered());
        assert!(!OpportunityKind::Skill.is_language_filtered());
    }

    #[test]
    fn test_page_has_more_follows_cursor() {
        let with_cursor = Page {
            items: Vec::<SkillOpportunity>::new(),
            cursor: Some(PageCursor::new("c1")),
        };
        assert!(with_cursor.has_more());

        let exhausted = Page {
            items: vec![SkillOpportunity {
                topic_name: "Fractions".to_string(),
                skill_description: "Adding fractions".to_string(),
                question_count: 12,
            }],
            cursor: None,
        };
        assert!(!exhausted.has_more());
    }

    #[test]
    fn test_translation_opportunity_deserialization() {
        let json = r#"{
            "topic": "Mathematics",
            "story": "Place Values",
            "chapter": "Counting in groups"
        }"#;
        let opportunity: TranslationOpportunity = serde_json::from_str(json).unwrap();
        assert_eq!(opportunity.topic, "Mathematics");
        assert_eq!(opportunity.story, "Place Values");
        assert_eq!(opportunity.chapter, "Counting in groups");
    }

    #[test]
    fn test_skill_opportunity_deserialization() {
        let json = r#"{
            "topic_name": "Fractions",
            "skill_description": "Comparing fractions",
            "question_count": 30
        }"#;
        let opportunity: SkillOpportunity = serde_json::from_str(json).unwrap();
        assert_eq!(opportunity.topic_name, "Fractions");
        assert_eq!(opportunity.question_count, 30);
    }

    #[test]
    fn test_opportunity_serializes_untagged() {
        let opportunity = Opportunity::Voiceover(VoiceoverOpportunity {
            topic: "Science".to_string(),
            story: "Light".to_string(),
            chapter: "Reflection".to_string(),
        });
        let json = serde_json::to_value(&opportunity).unwrap();
        assert_eq!(json["topic"], "Science");
        assert!(json.get("Voiceover").is_none());
    }
}
