//! Login Outcome
//!
//! Classifies the reply to a login attempt.

use serde_json::Value;

use crate::models::LoginResponse;

/// Banner text when the server rejects without saying why
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. (wrong creds or server said no)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Credentials accepted, go to the dashboard
    Success,
    /// Server answered but said no; carries the banner text
    Rejected(String),
}

/// JavaScript truthiness of a JSON value
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text of a message field; strings verbatim, scalars stringified
fn message_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// Parse a login reply body.
///
/// Anything that is not a JSON object reads as `{}`; each field is read on
/// its own so one unexpected type does not discard the rest.
pub fn parse_login_body(body: &str) -> LoginResponse {
    let Ok(Value::Object(fields)) = serde_json::from_str::<Value>(body) else {
        return LoginResponse::default();
    };
    LoginResponse {
        success: fields.get("success").is_some_and(is_truthy),
        message: message_text(fields.get("message")),
        error: message_text(fields.get("error")),
    }
}

pub fn classify_login(status_ok: bool, response: &LoginResponse) -> LoginOutcome {
    if status_ok && response.success {
        return LoginOutcome::Success;
    }
    let message = [&response.message, &response.error]
        .into_iter()
        .flatten()
        .find(|text| !text.is_empty())
        .map(String::as_str)
        .unwrap_or(LOGIN_FAILED_MESSAGE);
    LoginOutcome::Rejected(message.to_string())
}
