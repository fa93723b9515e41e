use crate::error::{Result, SharedError};
use crate::models::record::Record;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

/// Availability of a judge for the current round
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum JudgeStatus {
    #[default]
    Assigned,
    Unassigned,
    Unavailable,
}

impl JudgeStatus {
    pub const ALL: [JudgeStatus; 3] = [
        JudgeStatus::Assigned,
        JudgeStatus::Unassigned,
        JudgeStatus::Unavailable,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JudgeStatus::Assigned => "Assigned",
            JudgeStatus::Unassigned => "Unassigned",
            JudgeStatus::Unavailable => "Unavailable",
        }
    }
}

impl fmt::Display for JudgeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JudgeStatus {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| SharedError::Validation(format!("unknown judge status '{}'", s)))
    }
}

/// A member of the judging panel
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, PartialEq)]
pub struct JudgeRecord {
    #[validate(length(min = 1, message = "ID number is required"))]
    #[serde(rename = "idNo")]
    pub id_no: String,

    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expertise: Option<String>,

    #[serde(default)]
    pub status: JudgeStatus,
}

impl Record for JudgeRecord {
    const KIND: &'static str = "Judge";

    fn set_field(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "idNo" => self.id_no = value.to_string(),
            "name" => self.name = value.to_string(),
            "email" => self.email = value.to_string(),
            "expertise" => {
                self.expertise = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                }
            }
            "status" => self.status = value.parse()?,
            _ => return Err(SharedError::UnknownField(name.to_string())),
        }
        Ok(())
    }

    /// Imports are deduplicated by email.
    fn dedup_key(&self) -> Option<&str> {
        Some(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("Assigned", JudgeStatus::Assigned)]
    #[test_case("Unassigned", JudgeStatus::Unassigned)]
    #[test_case("Unavailable", JudgeStatus::Unavailable)]
    fn test_status_parses_display_text(text: &str, expected: JudgeStatus) {
        assert_eq!(text.parse::<JudgeStatus>().unwrap(), expected);
        assert_eq!(expected.to_string(), text);
    }

    #[test]
    fn test_status_parse_is_case_sensitive() {
        assert!("assigned".parse::<JudgeStatus>().is_err());
    }

    #[test]
    fn test_empty_expertise_clears_field() {
        let mut judge = JudgeRecord::default();
        judge.set_field("expertise", "Fintech").unwrap();
        assert_eq!(judge.expertise.as_deref(), Some("Fintech"));
        judge.set_field("expertise", "").unwrap();
        assert_eq!(judge.expertise, None);
    }

    #[test]
    fn test_dedup_key_is_email() {
        let judge = JudgeRecord {
            email: "a@x.com".to_string(),
            ..Default::default()
        };
        assert_eq!(judge.dedup_key(), Some("a@x.com"));
    }

    #[test]
    fn test_expertise_is_optional_for_validation() {
        let judge = JudgeRecord {
            id_no: "J-01".to_string(),
            name: "Priya".to_string(),
            email: "priya@panel.org".to_string(),
            expertise: None,
            status: JudgeStatus::Unassigned,
        };
        assert!(judge.validate().is_ok());
    }

    #[test]
    fn test_deserializes_without_status() {
        let judge: JudgeRecord =
            serde_json::from_str(r#"{"idNo":"7","name":"Kim","email":"kim@x.com"}"#).unwrap();
        assert_eq!(judge.status, JudgeStatus::Assigned);
        assert_eq!(judge.expertise, None);
    }
}
