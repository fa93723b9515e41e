use crate::error::{Result, SharedError};
use crate::models::record::Record;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

/// Where a startup is in the pitch process
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum StartupStatus {
    #[default]
    #[serde(rename = "In Session")]
    InSession,
    #[serde(rename = "Session Completed")]
    SessionCompleted,
    #[serde(rename = "Disqualified")]
    Disqualified,
}

impl StartupStatus {
    pub const ALL: [StartupStatus; 3] = [
        StartupStatus::InSession,
        StartupStatus::SessionCompleted,
        StartupStatus::Disqualified,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StartupStatus::InSession => "In Session",
            StartupStatus::SessionCompleted => "Session Completed",
            StartupStatus::Disqualified => "Disqualified",
        }
    }
}

impl fmt::Display for StartupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StartupStatus {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| SharedError::Validation(format!("unknown startup status '{}'", s)))
    }
}

/// A team competing in the challenge
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, PartialEq)]
pub struct StartupRecord {
    #[validate(length(min = 1, message = "Company is required"))]
    pub company: String,

    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,

    #[validate(length(min = 1, message = "Team leader is required"))]
    #[serde(rename = "teamLeader")]
    pub team_leader: String,

    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    /// 24-hour "HH:MM" slot
    #[validate(length(min = 1, message = "Pitch slot is required"))]
    #[serde(rename = "pitchSlot")]
    pub pitch_slot: String,

    #[serde(default)]
    pub status: StartupStatus,
}

impl Record for StartupRecord {
    const KIND: &'static str = "Startup";

    fn set_field(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "company" => self.company = value.to_string(),
            "category" => self.category = value.to_string(),
            "teamLeader" => self.team_leader = value.to_string(),
            "email" => self.email = value.to_string(),
            "pitchSlot" => self.pitch_slot = value.to_string(),
            "status" => self.status = value.parse()?,
            _ => return Err(SharedError::UnknownField(name.to_string())),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> StartupRecord {
        StartupRecord {
            company: "Acme Robotics".to_string(),
            category: "Hardware".to_string(),
            team_leader: "Sam Lee".to_string(),
            email: "sam@acme.io".to_string(),
            pitch_slot: "14:30".to_string(),
            status: StartupStatus::InSession,
        }
    }

    #[test]
    fn test_default_status_is_in_session() {
        assert_eq!(StartupRecord::default().status, StartupStatus::InSession);
    }

    #[test]
    fn test_set_field_uses_form_names() {
        let mut record = StartupRecord::default();
        record.set_field("teamLeader", "Ana").unwrap();
        record.set_field("pitchSlot", "09:15").unwrap();
        record.set_field("status", "Disqualified").unwrap();

        assert_eq!(record.team_leader, "Ana");
        assert_eq!(record.pitch_slot, "09:15");
        assert_eq!(record.status, StartupStatus::Disqualified);
    }

    #[test]
    fn test_set_field_rejects_unknown_names() {
        let mut record = StartupRecord::default();
        let err = record.set_field("founder", "x").unwrap_err();
        assert_eq!(err, SharedError::UnknownField("founder".to_string()));
    }

    #[test]
    fn test_set_field_rejects_unknown_status() {
        let mut record = sample();
        assert!(record.set_field("status", "Pending").is_err());
        assert_eq!(record.status, StartupStatus::InSession);
    }

    #[test]
    fn test_validation_requires_every_text_field() {
        assert!(sample().validate().is_ok());

        let mut record = sample();
        record.company.clear();
        record.pitch_slot.clear();
        let errors = record.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("company"));
        assert!(errors.field_errors().contains_key("pitch_slot"));
    }

    #[test]
    fn test_serializes_with_form_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["teamLeader"], "Sam Lee");
        assert_eq!(json["pitchSlot"], "14:30");
        assert_eq!(json["status"], "In Session");
    }
}
