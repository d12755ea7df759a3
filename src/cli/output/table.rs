//! Table output formatting for CLI commands
//!
//! Formats opportunity lists and role query results using comfy-table.

use std::collections::BTreeMap;

use comfy_table::{presets, Attribute, Cell, ContentArrangement, Table};

use crate::domain::models::Opportunity;

/// Questions a skill aims for before it stops soliciting suggestions.
const TARGET_QUESTION_COUNT: u32 = 50;

fn base_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_BORDERS_ONLY)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Format a list of opportunities as a table.
///
/// Mirrors the dashboard list rendering: translation and voiceover rows
/// lead with the chapter and show `topic - story` underneath the heading
/// column; skill rows lead with the topic and show suggestion progress.
pub fn format_opportunities(opportunities: &[Opportunity]) -> String {
    let mut table = base_table();
    table.set_header(vec![
        Cell::new("Heading").add_attribute(Attribute::Bold),
        Cell::new("Details").add_attribute(Attribute::Bold),
        Cell::new("Action").add_attribute(Attribute::Bold),
    ]);

    for opportunity in opportunities {
        let (heading, details, action) = match opportunity {
            Opportunity::Translation(o) => (
                o.chapter.clone(),
                format!("{} - {}", o.topic, o.story),
                "Translate".to_string(),
            ),
            Opportunity::Voiceover(o) => (
                o.chapter.clone(),
                format!("{} - {}", o.topic, o.story),
                "Request to Voiceover".to_string(),
            ),
            Opportunity::Skill(o) => (
                o.topic_name.clone(),
                format!(
                    "{} ({}/{} questions)",
                    o.skill_description, o.question_count, TARGET_QUESTION_COUNT
                ),
                "Suggest Question".to_string(),
            ),
        };
        table.add_row(vec![
            Cell::new(heading),
            Cell::new(details),
            Cell::new(action),
        ]);
    }

    table.to_string()
}

/// Format a username-to-role map as a table, sorted by username.
pub fn format_roles(roles: &BTreeMap<String, String>) -> String {
    let mut table = base_table();
    table.set_header(vec![
        Cell::new("Username").add_attribute(Attribute::Bold),
        Cell::new("Role").add_attribute(Attribute::Bold),
    ]);
    for (username, role) in roles {
        table.add_row(vec![Cell::new(username), Cell::new(role)]);
    }
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{SkillOpportunity, TranslationOpportunity};

    #[test]
    fn test_format_opportunities_includes_fields() {
        let opportunities = vec![
            Opportunity::Translation(TranslationOpportunity {
                topic: "Maths".to_string(),
                story: "Place Values".to_string(),
                chapter: "Counting".to_string(),
            }),
            Opportunity::Skill(SkillOpportunity {
                topic_name: "Fractions".to_string(),
                skill_description: "Comparing fractions".to_string(),
                question_count: 12,
            }),
        ];
        let rendered = format_opportunities(&opportunities);
        assert!(rendered.contains("Counting"));
        assert!(rendered.contains("Maths - Place Values"));
        assert!(rendered.contains("12/50 questions"));
        assert!(rendered.contains("Suggest Question"));
    }

    #[test]
    fn test_format_roles_sorted_by_username() {
        let mut roles = BTreeMap::new();
        roles.insert("zoe".to_string(), "moderator".to_string());
        roles.insert("alice".to_string(), "admin".to_string());
        let rendered = format_roles(&roles);
        let alice = rendered.find("alice").unwrap();
        let zoe = rendered.find("zoe").unwrap();
        assert!(alice < zoe);
    }
}
