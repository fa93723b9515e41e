pub mod models {
    pub mod record;
    pub mod startup;
    pub mod judge;
    pub mod schedule;
}

pub mod crud;
pub mod error;
pub mod import;
pub mod store;
pub mod summary;
pub mod time;

// Re-export commonly used items
pub use error::{SharedError, Result};

// Re-export models
pub use models::{
    record::Record,
    startup::{StartupRecord, StartupStatus},
    judge::{JudgeRecord, JudgeStatus},
    schedule::ScheduleEntry,
};

pub use crud::{CrudState, EditMode, EditTarget, ModalState};
pub use store::{Row, RowId, RowStore};
pub use summary::DashboardSummary;
pub use time::{format_date, format_time};
