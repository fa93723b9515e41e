use crate::models::judge::{JudgeRecord, JudgeStatus};
use crate::models::schedule::ScheduleEntry;
use crate::models::startup::StartupRecord;
use crate::store::RowStore;
use crate::time::parse_time;
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Figures shown on the dashboard summary cards
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardSummary {
    pub total_startups: usize,
    pub total_judges: usize,
    pub active_judges: usize,
    /// Schedule entries starting within the next 24 hours
    pub upcoming_pitches: usize,
}

impl DashboardSummary {
    pub fn compute(
        startups: &RowStore<StartupRecord>,
        judges: &RowStore<JudgeRecord>,
        schedule: &RowStore<ScheduleEntry>,
        now: NaiveDateTime,
    ) -> Self {
        let horizon = now + Duration::hours(24);
        let upcoming_pitches = schedule
            .iter()
            .filter_map(|row| {
                parse_time(&row.record.time)
                    .ok()
                    .map(|time| row.record.selected_date.and_time(time))
            })
            .filter(|starts| *starts >= now && *starts < horizon)
            .count();

        Self {
            total_startups: startups.len(),
            total_judges: judges.len(),
            active_judges: judges
                .iter()
                .filter(|row| row.record.status == JudgeStatus::Assigned)
                .count(),
            upcoming_pitches,
        }
    }

    pub fn judges_description(&self) -> String {
        let not_assigned = self.total_judges.saturating_sub(self.active_judges);
        if not_assigned == 0 {
            "All assigned".to_string()
        } else {
            format!("{} not assigned", not_assigned)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn at(day: u32, time: &str) -> ScheduleEntry {
        ScheduleEntry {
            team_name: "Team".to_string(),
            judge: "Judge".to_string(),
            room: "R1".to_string(),
            time: time.to_string(),
            selected_date: NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
        }
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 10)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_upcoming_pitches_window() {
        let schedule: RowStore<_> = vec![
            at(10, "11:59"), // already started
            at(10, "12:00"),
            at(11, "11:59"),
            at(11, "12:00"), // exactly 24h out
            at(11, "bad"),
        ]
        .into_iter()
        .collect();

        let summary = DashboardSummary::compute(&RowStore::new(), &RowStore::new(), &schedule, now());
        assert_eq!(summary.upcoming_pitches, 2);
    }

    #[test]
    fn test_active_judges_counts_assigned_only() {
        let judges: RowStore<_> = [JudgeStatus::Assigned, JudgeStatus::Unavailable, JudgeStatus::Assigned]
            .into_iter()
            .map(|status| JudgeRecord { status, ..Default::default() })
            .collect();

        let summary = DashboardSummary::compute(&RowStore::new(), &judges, &RowStore::new(), now());
        assert_eq!(summary.active_judges, 2);
        assert_eq!(summary.total_judges, 3);
        assert_eq!(summary.judges_description(), "1 not assigned");
    }

    #[test]
    fn test_empty_dashboard() {
        let summary = DashboardSummary::compute(&RowStore::new(), &RowStore::new(), &RowStore::new(), now());
        assert_eq!(summary, DashboardSummary::default());
        assert_eq!(summary.judges_description(), "All assigned");
    }

    #[test]
    fn test_inconsistent_counts_do_not_underflow() {
        let summary: DashboardSummary = serde_json::from_str(
            r#"{"total_startups":0,"total_judges":1,"active_judges":3,"upcoming_pitches":0}"#,
        )
        .unwrap();
        assert_eq!(summary.judges_description(), "All assigned");
    }
}
