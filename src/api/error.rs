//! Game service error types.

use derive_more::{Display, Error};
use tracing::{instrument, warn};

/// Which service call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Operation {
    /// Starting a new game.
    #[display("new game")]
    NewGame,
    /// Submitting a guess.
    #[display("guess")]
    Guess,
}

impl Operation {
    /// Message shown when the server gave us nothing better.
    pub fn fallback_message(self) -> &'static str {
        match self {
            Self::NewGame => "Failed to start new game.",
            Self::Guess => "Guess failed.",
        }
    }
}

/// Category of a failed service call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ApiErrorKind {
    /// The server answered with a non-success status.
    #[display("HTTP {_0}")]
    Status(u16),
    /// The request never completed.
    #[display("transport")]
    Transport,
    /// A success response could not be decoded.
    #[display("decode")]
    Decode,
}

/// Game service error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("API error ({}): {} at {}:{}", kind, message, file, line)]
pub struct ApiError {
    /// Failure category.
    pub kind: ApiErrorKind,
    /// Error message. For `Status` errors this is what the server said.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ApiError {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        let message = message.into();
        warn!(%kind, error_message = %message, "API error created");
        Self {
            kind,
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Builds the error for a non-success response.
    ///
    /// Prefers a string `message` or `error` field from a JSON object body,
    /// then the body verbatim, then `Request failed: <status>`.
    #[track_caller]
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::new(ApiErrorKind::Status(status), failure_message(status, body))
    }

    /// Text to show the player for a failure of `operation`.
    pub fn user_message(&self, operation: Operation) -> String {
        match self.kind {
            ApiErrorKind::Status(_) if !self.message.is_empty() => self.message.clone(),
            ApiErrorKind::Status(_) => operation.fallback_message().to_string(),
            ApiErrorKind::Transport | ApiErrorKind::Decode => {
                format!("{} ({})", operation.fallback_message(), self.message)
            }
        }
    }
}

fn failure_message(status: u16, body: &str) -> String {
    if body.trim().is_empty() {
        return format!("Request failed: {}", status);
    }

    if let Ok(serde_json::Value::Object(fields)) = serde_json::from_str(body) {
        let structured = ["message", "error"]
            .iter()
            .filter_map(|key| fields.get(*key).and_then(|v| v.as_str()))
            .find(|text| !text.is_empty());
        if let Some(text) = structured {
            return text.to_string();
        }
    }

    body.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_body_is_kept_verbatim() {
        let err = ApiError::from_status(404, "Game not found\n");
        assert_eq!(err.kind, ApiErrorKind::Status(404));
        assert_eq!(err.message, "Game not found\n");
    }

    #[test]
    fn test_structured_message_wins() {
        let err = ApiError::from_status(400, r#"{"message":"round limit reached","code":7}"#);
        assert_eq!(err.message, "round limit reached");

        let err = ApiError::from_status(400, r#"{"error":"bad difficulty"}"#);
        assert_eq!(err.message, "bad difficulty");
    }

    #[test]
    fn test_json_without_message_is_verbatim() {
        let body = r#"{"code":7}"#;
        assert_eq!(ApiError::from_status(500, body).message, body);
    }

    #[test]
    fn test_empty_body_falls_back_to_status() {
        assert_eq!(ApiError::from_status(503, "  ").message, "Request failed: 503");
    }

    #[test]
    fn test_user_message_names_operation_for_transport_errors() {
        let err = ApiError::new(ApiErrorKind::Transport, "connection refused");
        assert_eq!(
            err.user_message(Operation::NewGame),
            "Failed to start new game. (connection refused)"
        );
        let err = ApiError::from_status(409, "Game already finished");
        assert_eq!(err.user_message(Operation::Guess), "Game already finished");
    }
}
