use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidQuery,
    InvalidEndpoint,
    NetworkFailure,
    UnparsableResponse,
}

/// Terminal failure of a single search. Display text is the message shown to
/// the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Invalid search query.")]
    InvalidQuery,
    #[error("Invalid URL.")]
    InvalidEndpoint { reason: String },
    #[error("Error fetching data: {cause}")]
    NetworkFailure { cause: String },
    #[error("Could not parse response.")]
    UnparsableResponse { reason: String },
}

impl SearchError {
    pub fn network(cause: impl Into<String>) -> Self {
        Self::NetworkFailure {
            cause: cause.into(),
        }
    }

    pub fn unparsable(reason: impl Into<String>) -> Self {
        Self::UnparsableResponse {
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidQuery => ErrorKind::InvalidQuery,
            Self::InvalidEndpoint { .. } => ErrorKind::InvalidEndpoint,
            Self::NetworkFailure { .. } => ErrorKind::NetworkFailure,
            Self::UnparsableResponse { .. } => ErrorKind::UnparsableResponse,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages_match_kinds() {
        assert_eq!(SearchError::InvalidQuery.to_string(), "Invalid search query.");
        assert_eq!(
            SearchError::network("connection refused").to_string(),
            "Error fetching data: connection refused"
        );
        assert_eq!(
            SearchError::unparsable("missing data").to_string(),
            "Could not parse response."
        );
        assert_eq!(
            SearchError::InvalidEndpoint {
                reason: "relative URL without a base".into()
            }
            .kind(),
            ErrorKind::InvalidEndpoint
        );
    }

    #[test]
    fn kind_serializes_snake_case() {
        let json = serde_json::to_value(SearchError::InvalidQuery.kind()).expect("serialize");
        assert_eq!(json, "invalid_query");
    }
}
