use crate::error::{Result, SharedError};
use crate::models::record::Record;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A pitch slot: which team presents to which judge, where and when
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct ScheduleEntry {
    #[validate(length(min = 1, message = "Team name is required"))]
    #[serde(rename = "teamName")]
    pub team_name: String,

    #[validate(length(min = 1, message = "Judge is required"))]
    pub judge: String,

    #[validate(length(min = 1, message = "Room is required"))]
    pub room: String,

    /// 24-hour "HH:MM"
    #[validate(length(min = 1, message = "Time is required"))]
    pub time: String,

    #[serde(rename = "selectedDate")]
    pub selected_date: NaiveDate,
}

impl ScheduleEntry {
    pub fn on(selected_date: NaiveDate) -> Self {
        Self {
            team_name: String::new(),
            judge: String::new(),
            room: String::new(),
            time: String::new(),
            selected_date,
        }
    }
}

impl Default for ScheduleEntry {
    /// Drafts start on today's local date.
    fn default() -> Self {
        Self::on(Local::now().date_naive())
    }
}

impl Record for ScheduleEntry {
    const KIND: &'static str = "Schedule";

    fn set_field(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "teamName" => self.team_name = value.to_string(),
            "judge" => self.judge = value.to_string(),
            "room" => self.room = value.to_string(),
            "time" => self.time = value.to_string(),
            "selectedDate" => {
                self.selected_date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
                    .map_err(|_| SharedError::InvalidDate(value.to_string()))?
            }
            _ => return Err(SharedError::UnknownField(name.to_string())),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_selected_date_parses_input_value() {
        let mut entry = ScheduleEntry::on(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        entry.set_field("selectedDate", "2024-03-09").unwrap();
        assert_eq!(entry.selected_date, NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
    }

    #[test]
    fn test_bad_date_leaves_entry_unchanged() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut entry = ScheduleEntry::on(day);
        let err = entry.set_field("selectedDate", "09/03/2024").unwrap_err();
        assert_eq!(err, SharedError::InvalidDate("09/03/2024".to_string()));
        assert_eq!(entry.selected_date, day);
    }

    #[test]
    fn test_default_draft_is_today() {
        let before = Local::now().date_naive();
        let drafted = ScheduleEntry::default().selected_date;
        let after = Local::now().date_naive();
        assert!(drafted == before || drafted == after);
    }

    #[test]
    fn test_serializes_date_as_iso() {
        let mut entry = ScheduleEntry::on(NaiveDate::from_ymd_opt(2024, 5, 2).unwrap());
        entry.set_field("teamName", "Blue Fern").unwrap();
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["teamName"], "Blue Fern");
        assert_eq!(json["selectedDate"], "2024-05-02");
    }
}
