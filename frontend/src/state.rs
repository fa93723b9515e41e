//! Yew reducers for the dashboard: one [`TableState`] per record domain,
//! combined with the active tab in [`DashboardState`].

use crate::components::tab_bar::DashboardTab;
use chrono::{Local, NaiveDate};
use log::{debug, warn};
use shared::{CrudState, EditMode, JudgeRecord, Record, RowId, ScheduleEntry, StartupRecord};
use std::rc::Rc;
use yew::prelude::*;

/// One-shot message raised by the reducer for the page to show as a toast.
/// `seq` changes on every notice so repeated text still triggers an effect.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub seq: u32,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TableState<T: Record> {
    pub crud: CrudState<T>,
    /// Error shown inside the open modal
    pub error: Option<String>,
    pub notice: Option<Notice>,
}

impl<T: Record> Default for TableState<T> {
    fn default() -> Self {
        Self {
            crud: CrudState::default(),
            error: None,
            notice: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TableAction<T> {
    OpenCreate,
    /// Open the create form with a pre-filled draft
    OpenCreateWith(T),
    OpenEdit(RowId),
    UpdateField { name: String, value: String },
    Submit,
    Cancel,
    Delete(RowId),
    /// Replace a row in place, e.g. an inline status change
    Replace(RowId, T),
    /// Merge a batch, skipping records whose dedup key already exists
    Merge(Vec<T>),
    SetEditMode(EditMode),
}

impl<T: Record> TableState<T> {
    fn next_notice(&self, message: String) -> Option<Notice> {
        let seq = self.notice.as_ref().map(|n| n.seq.wrapping_add(1)).unwrap_or(0);
        Some(Notice { seq, message })
    }

    pub fn apply(&mut self, action: TableAction<T>) {
        let result = match action {
            TableAction::OpenCreate => {
                self.crud.open_for_create();
                self.error = None;
                Ok(())
            }
            TableAction::OpenCreateWith(draft) => {
                self.crud.open_for_create_with(draft);
                self.error = None;
                Ok(())
            }
            TableAction::OpenEdit(id) => {
                self.error = None;
                self.crud.open_for_edit(id)
            }
            TableAction::UpdateField { name, value } => self.crud.update_field(&name, &value),
            TableAction::Submit => self.crud.submit().map(|_| {
                self.error = None;
            }),
            TableAction::Cancel => {
                self.crud.cancel();
                self.error = None;
                Ok(())
            }
            TableAction::Delete(id) => {
                if self.crud.rows.remove(id).is_none() {
                    debug!("{} {} already gone", T::KIND, id);
                }
                Ok(())
            }
            TableAction::Replace(id, record) => {
                if !self.crud.rows.update(id, record) {
                    warn!("{} {} not found for in-place update", T::KIND, id);
                }
                Ok(())
            }
            TableAction::Merge(records) => {
                let offered = records.len();
                let appended = self.crud.rows.extend_unique(records);
                debug!("Merged {} of {} {} records", appended, offered, T::KIND);
                self.notice = self.next_notice(format!(
                    "Imported {} {} record(s), skipped {} duplicate(s)",
                    appended,
                    T::KIND.to_lowercase(),
                    offered - appended
                ));
                Ok(())
            }
            TableAction::SetEditMode(mode) => {
                self.crud.mode = mode;
                Ok(())
            }
        };

        if let Err(e) = result {
            warn!("{} action failed: {}", T::KIND, e);
            self.error = Some(e.user_message());
        }
    }
}

impl<T: Record + 'static> Reducible for TableState<T> {
    type Action = TableAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

/// Everything the dashboard page edits: the selected tab, the date picked on
/// the schedule calendar and the three tables.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    pub active_tab: DashboardTab,
    pub schedule_date: NaiveDate,
    pub startups: TableState<StartupRecord>,
    pub judges: TableState<JudgeRecord>,
    pub schedule: TableState<ScheduleEntry>,
}

impl DashboardState {
    pub fn on(schedule_date: NaiveDate) -> Self {
        Self {
            active_tab: DashboardTab::Startups,
            schedule_date,
            startups: TableState::default(),
            judges: TableState::default(),
            schedule: TableState::default(),
        }
    }

    pub fn edit_mode(&self) -> EditMode {
        self.startups.crud.mode
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::on(Local::now().date_naive())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DashboardAction {
    SelectTab(DashboardTab),
    /// Open the create form of the active tab
    OpenCreate,
    /// Date picked on the schedule calendar. An open schedule form follows it.
    ViewDate(NaiveDate),
    SetEditMode(EditMode),
    Startups(TableAction<StartupRecord>),
    Judges(TableAction<JudgeRecord>),
    Schedule(TableAction<ScheduleEntry>),
}

impl Reducible for DashboardState {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            DashboardAction::SelectTab(tab) => {
                debug!("Switching to {} tab", tab.label());
                next.active_tab = tab;
            }
            DashboardAction::OpenCreate => match next.active_tab {
                DashboardTab::Startups => next.startups.apply(TableAction::OpenCreate),
                DashboardTab::Judges => next.judges.apply(TableAction::OpenCreate),
                DashboardTab::Schedule => {
                    let draft = ScheduleEntry::on(next.schedule_date);
                    next.schedule.apply(TableAction::OpenCreateWith(draft));
                }
                DashboardTab::Settings => {}
            },
            DashboardAction::ViewDate(date) => {
                next.schedule_date = date;
                if next.schedule.crud.modal.is_open() {
                    next.schedule.crud.draft.selected_date = date;
                }
            }
            DashboardAction::SetEditMode(mode) => {
                debug!("Edit mode set to {:?}", mode);
                next.startups.apply(TableAction::SetEditMode(mode));
                next.judges.apply(TableAction::SetEditMode(mode));
                next.schedule.apply(TableAction::SetEditMode(mode));
            }
            DashboardAction::Startups(action) => next.startups.apply(action),
            DashboardAction::Judges(action) => next.judges.apply(action),
            DashboardAction::Schedule(action) => next.schedule.apply(action),
        }
        Rc::new(next)
    }
}
