//! Dashboard View Tests
//!
//! Decoded reply → resolved effect → filtered rows, the path the dashboard
//! page takes for each accepted fetch.

use chrono::{DateTime, Utc};

use crate::{
    resolve_fetch, visible_rows, DateRenderer, FetchEffect, FetchOutcome, Idea, IdeaId,
    IdeasResponse,
};

struct IsoRenderer;

impl DateRenderer for IsoRenderer {
    fn format_datetime(&self, at: DateTime<Utc>) -> String {
        at.format("%Y-%m-%d %H:%M").to_string()
    }

    fn format_time(&self, at: DateTime<Utc>) -> String {
        at.format("%H:%M:%S").to_string()
    }
}

fn robot_reply() -> &'static str {
    r#"{
        "ideas": [
            {"id": 1, "idea_text": "Build a robot", "created_at": "2024-01-01T00:00:00Z"},
            {"id": 2, "idea_text": "Robot dance app", "created_at": "2024-02-01T00:00:00Z"}
        ],
        "total": 2
    }"#
}

fn accepted_ideas(body: &str) -> Vec<Idea> {
    let reply: IdeasResponse = serde_json::from_str(body).unwrap();
    match resolve_fetch(true, FetchOutcome::Loaded(reply), "09:00:00".into()) {
        FetchEffect::Loaded { ideas, .. } => ideas,
        other => panic!("unexpected effect {:?}", other),
    }
}

#[test]
fn test_robot_query_keeps_both_in_order() {
    let all = accepted_ideas(robot_reply());
    let rows = visible_rows(&all, "robot", &IsoRenderer);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, "1");
    assert_eq!(rows[0].text, "Build a robot");
    assert_eq!(rows[0].created, "2024-01-01 00:00");
    assert_eq!(rows[1].id, "2");
    assert_eq!(rows[1].created, "2024-02-01 00:00");
}

#[test]
fn test_query_change_recomputes_from_all() {
    let all = accepted_ideas(robot_reply());

    assert_eq!(visible_rows(&all, "DANCE", &IsoRenderer).len(), 1);
    assert_eq!(visible_rows(&all, "   ", &IsoRenderer).len(), 2);
    assert!(visible_rows(&all, "boat", &IsoRenderer).is_empty());
    assert_eq!(all.len(), 2);
}

#[test]
fn test_markup_in_reply_stays_text() {
    let all = accepted_ideas(r#"{"ideas": [{"id": "x", "idea_text": "<script>alert(1)</script>"}]}"#);
    let rows = visible_rows(&all, "script", &IsoRenderer);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].text, "<script>alert(1)</script>");
    assert_eq!(all[0].id, Some(IdeaId::Str("x".to_string())));
}
