use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq)]
pub enum SharedError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Invalid time format: {0}")]
    InvalidTimeFormat(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid spreadsheet URL: {0}")]
    InvalidUrl(String),

    #[error("Not authenticated with the spreadsheet provider")]
    Unauthenticated,

    #[error("Fetch failed: {0}")]
    FetchFailed(String),

    #[error("No record is being edited")]
    NotEditing,

    #[error("Row not found: {0}")]
    RowNotFound(String),
}

impl SharedError {
    /// Message shown to the operator in an inline error line or toast.
    pub fn user_message(&self) -> String {
        match self {
            SharedError::Unauthenticated => "Please log in to Google.".to_string(),
            SharedError::InvalidUrl(_) => "Please provide a valid Google Sheets URL.".to_string(),
            SharedError::FetchFailed(_) => {
                "Failed to import judges. Check the URL and try again.".to_string()
            }
            SharedError::Validation(msg) => format!("Please fill in all required fields ({})", msg),
            other => other.to_string(),
        }
    }
}

impl From<ValidationErrors> for SharedError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<&str> = errors.field_errors().keys().copied().collect();
        fields.sort_unstable();
        Self::Validation(fields.join(", "))
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(error: serde_json::Error) -> Self {
        Self::FetchFailed(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_import_errors_have_operator_messages() {
        assert_eq!(SharedError::Unauthenticated.user_message(), "Please log in to Google.");
        assert_eq!(
            SharedError::InvalidUrl("nope".to_string()).user_message(),
            "Please provide a valid Google Sheets URL."
        );
        assert_eq!(
            SharedError::FetchFailed("500".to_string()).user_message(),
            "Failed to import judges. Check the URL and try again."
        );
    }

    #[test]
    fn test_json_error_maps_to_fetch_failed() {
        let err: SharedError = serde_json::from_str::<serde_json::Value>("{ bad")
            .unwrap_err()
            .into();
        assert!(matches!(err, SharedError::FetchFailed(_)));
    }

    #[test]
    fn test_time_error_display() {
        let err = SharedError::InvalidTimeFormat("25:00".to_string());
        assert_eq!(err.to_string(), "Invalid time format: 25:00");
    }
}
