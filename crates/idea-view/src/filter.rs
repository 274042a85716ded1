//! Idea Filtering
//!
//! Substring search over the already-fetched idea list.

use crate::models::Idea;

/// Trim and lowercase raw filter input
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Ideas whose text contains `raw_query`, case-insensitively.
///
/// An empty or whitespace-only query keeps every idea. Order is preserved.
pub fn filter_ideas<'a>(ideas: &'a [Idea], raw_query: &str) -> Vec<&'a Idea> {
    let query = normalize_query(raw_query);
    if query.is_empty() {
        return ideas.iter().collect();
    }
    ideas
        .iter()
        .filter(|idea| {
            idea.idea_text
                .as_deref()
                .is_some_and(|text| text.to_lowercase().contains(&query))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IdeaId;

    fn make_idea(id: i64, text: Option<&str>) -> Idea {
        Idea {
            id: Some(IdeaId::Int(id)),
            idea_text: text.map(str::to_string),
            created_at: None,
        }
    }

    fn ids(ideas: &[&Idea]) -> Vec<String> {
        ideas.iter().map(|idea| idea.id.as_ref().unwrap().to_string()).collect()
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        let ideas = vec![make_idea(1, Some("a")), make_idea(2, None)];
        assert_eq!(filter_ideas(&ideas, "").len(), 2);
        assert_eq!(filter_ideas(&ideas, "   \t").len(), 2);
    }

    #[test]
    fn test_case_insensitive_substring() {
        let ideas = vec![
            make_idea(1, Some("Solar KETTLE")),
            make_idea(2, Some("wind farm")),
            make_idea(3, Some("kettlebell app")),
        ];
        assert_eq!(ids(&filter_ideas(&ideas, "  Kettle ")), vec!["1", "3"]);
        assert_eq!(ids(&filter_ideas(&ideas, "FARM")), vec!["2"]);
        assert!(filter_ideas(&ideas, "boat").is_empty());
    }

    #[test]
    fn test_missing_text_never_matches() {
        let ideas = vec![make_idea(1, None), make_idea(2, Some(""))];
        assert!(filter_ideas(&ideas, "x").is_empty());
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  HeLLo "), "hello");
        assert_eq!(normalize_query("\n"), "");
    }
}
