//! Wire Models
//!
//! Data structures matching the admin API payloads.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Idea identifier; the backend may send either a number or a string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdeaId {
    Int(i64),
    Str(String),
}

impl fmt::Display for IdeaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdeaId::Int(id) => write!(f, "{}", id),
            IdeaId::Str(id) => f.write_str(id),
        }
    }
}

/// Idea record as listed by the admin endpoint.
///
/// Read-only on the client. Every field may be missing or null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Idea {
    pub id: Option<IdeaId>,
    pub idea_text: Option<String>,
    pub created_at: Option<String>,
}

/// Body of `GET /api/admin/ideas`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct IdeasResponse {
    pub ideas: Option<Vec<Idea>>,
    pub total: Option<u64>,
}

/// Body of `POST /api/admin/login`
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Reply to a login attempt.
///
/// Built field by field from loose JSON (see `parse_login_body`) so an
/// odd-typed field never hides the others.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginResponse {
    pub success: bool,
    pub message: Option<String>,
    /// The backend reports rejections under `error` rather than `message`
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idea_tolerates_missing_and_null_fields() {
        let ideas: Vec<Idea> = serde_json::from_str(
            r#"[{"id": 7, "idea_text": null}, {"id": "a-1", "created_at": "2024-01-01", "extra": true}]"#,
        )
        .unwrap();

        assert_eq!(ideas[0].id, Some(IdeaId::Int(7)));
        assert_eq!(ideas[0].idea_text, None);
        assert_eq!(ideas[0].created_at, None);
        assert_eq!(ideas[1].id, Some(IdeaId::Str("a-1".to_string())));
    }

    #[test]
    fn test_idea_id_display() {
        assert_eq!(IdeaId::Int(42).to_string(), "42");
        assert_eq!(IdeaId::Str("x9".to_string()).to_string(), "x9");
    }

    #[test]
    fn test_ideas_response_without_fields() {
        let body: IdeasResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(body.ideas, None);
        assert_eq!(body.total, None);
    }

    #[test]
    fn test_login_request_shape() {
        let json = serde_json::to_value(LoginRequest { username: "admin", password: "pw" }).unwrap();
        assert_eq!(json, serde_json::json!({"username": "admin", "password": "pw"}));
    }
}
