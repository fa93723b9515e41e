//! Ordered in-memory collections of records.
//!
//! A [`RowStore`] keeps insertion order and hands out a stable [`RowId`] for
//! every row so callers can address a record without relying on its current
//! position.

use crate::models::record::Record;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use uuid::Uuid;

/// Opaque identity of a stored row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowId(Uuid);

impl RowId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RowId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row<T> {
    pub id: RowId,
    pub record: T,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowStore<T> {
    rows: Vec<Row<T>>,
}

impl<T> Default for RowStore<T> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<T: Record> RowStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Row<T>> {
        self.rows.iter()
    }

    /// Records in display order, without their ids.
    pub fn records(&self) -> Vec<T> {
        self.rows.iter().map(|row| row.record.clone()).collect()
    }

    pub fn get(&self, id: RowId) -> Option<&T> {
        self.rows.iter().find(|row| row.id == id).map(|row| &row.record)
    }

    pub fn get_at(&self, index: usize) -> Option<&Row<T>> {
        self.rows.get(index)
    }

    pub fn position(&self, id: RowId) -> Option<usize> {
        self.rows.iter().position(|row| row.id == id)
    }

    /// Appends `record` to the end of the sequence.
    pub fn add(&mut self, record: T) -> RowId {
        let id = RowId::new();
        debug!("{} row {} added at position {}", T::KIND, id, self.rows.len());
        self.rows.push(Row { id, record });
        id
    }

    /// Removes the element at `index`. Out-of-range indices are a no-op.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.rows.len() {
            debug!("{} remove_at({}) ignored, store has {} rows", T::KIND, index, self.rows.len());
            return None;
        }
        Some(self.rows.remove(index).record)
    }

    pub fn remove(&mut self, id: RowId) -> Option<T> {
        let index = self.position(id)?;
        self.remove_at(index)
    }

    /// Replaces the record stored under `id` without moving it.
    pub fn update(&mut self, id: RowId, record: T) -> bool {
        self.update_with(id, |current| *current = record)
    }

    pub fn update_with(&mut self, id: RowId, f: impl FnOnce(&mut T)) -> bool {
        match self.rows.iter_mut().find(|row| row.id == id) {
            Some(row) => {
                f(&mut row.record);
                true
            }
            None => false,
        }
    }

    /// Appends the records whose dedup key is not already present in the
    /// store. Returns how many were appended.
    pub fn extend_unique(&mut self, records: impl IntoIterator<Item = T>) -> usize {
        let existing: HashSet<String> = self
            .rows
            .iter()
            .filter_map(|row| row.record.dedup_key().map(str::to_string))
            .collect();

        let mut appended = 0;
        for record in records {
            if let Some(key) = record.dedup_key() {
                if existing.contains(key) {
                    debug!("{} with key '{}' already present, skipping", T::KIND, key);
                    continue;
                }
            }
            self.add(record);
            appended += 1;
        }
        appended
    }
}

impl RowStore<crate::models::judge::JudgeRecord> {
    /// Replaces the status of the judge at `index` in place.
    pub fn update_status_at(&mut self, index: usize, status: crate::models::judge::JudgeStatus) -> bool {
        match self.rows.get_mut(index) {
            Some(row) => {
                row.record.status = status;
                true
            }
            None => false,
        }
    }
}

impl<T: Record> FromIterator<T> for RowStore<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut store = Self::new();
        for record in iter {
            store.add(record);
        }
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::judge::{JudgeRecord, JudgeStatus};
    use crate::models::startup::StartupRecord;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn startup(company: &str) -> StartupRecord {
        StartupRecord {
            company: company.to_string(),
            ..Default::default()
        }
    }

    fn judge(email: &str) -> JudgeRecord {
        JudgeRecord {
            email: email.to_string(),
            ..Default::default()
        }
    }

    fn companies(store: &RowStore<StartupRecord>) -> Vec<String> {
        store.iter().map(|row| row.record.company.clone()).collect()
    }

    #[test]
    fn test_add_appends_in_insertion_order() {
        let mut store = RowStore::new();
        store.add(startup("a"));
        store.add(startup("b"));
        store.add(startup("c"));
        assert_eq!(companies(&store), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_remove_at_out_of_range_is_noop() {
        let mut store: RowStore<_> = vec![startup("a")].into_iter().collect();
        assert_eq!(store.remove_at(5), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_at_keeps_relative_order() {
        let mut store: RowStore<_> = ["a", "b", "c"].into_iter().map(startup).collect();
        let removed = store.remove_at(1).unwrap();
        assert_eq!(removed.company, "b");
        assert_eq!(companies(&store), vec!["a", "c"]);
    }

    #[test]
    fn test_update_keeps_position() {
        let mut store = RowStore::new();
        store.add(startup("a"));
        let id = store.add(startup("b"));
        store.add(startup("c"));

        assert!(store.update(id, startup("B")));
        assert_eq!(companies(&store), vec!["a", "B", "c"]);
        assert_eq!(store.position(id), Some(1));
    }

    #[test]
    fn test_update_unknown_id_reports_false() {
        let mut store: RowStore<StartupRecord> = RowStore::new();
        assert!(!store.update(RowId::new(), startup("x")));
    }

    #[test]
    fn test_clone_is_an_independent_snapshot() {
        let mut store: RowStore<_> = vec![startup("a")].into_iter().collect();
        let snapshot = store.clone();
        store.add(startup("b"));
        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_update_status_at_changes_only_status() {
        let mut store: RowStore<_> = vec![judge("a@x.com"), judge("b@x.com")].into_iter().collect();
        let first_id = store.get_at(0).unwrap().id;

        assert!(store.update_status_at(0, JudgeStatus::Unavailable));
        let row = store.get_at(0).unwrap();
        assert_eq!(row.id, first_id);
        assert_eq!(row.record.status, JudgeStatus::Unavailable);
        assert_eq!(row.record.email, "a@x.com");
        assert!(!store.update_status_at(9, JudgeStatus::Unassigned));
    }

    #[test]
    fn test_extend_unique_skips_existing_emails() {
        let mut store: RowStore<_> = vec![judge("a@x.com")].into_iter().collect();
        let appended = store.extend_unique(vec![judge("a@x.com"), judge("b@x.com")]);

        assert_eq!(appended, 1);
        let emails: Vec<_> = store.iter().map(|row| row.record.email.as_str()).collect();
        assert_eq!(emails, vec!["a@x.com", "b@x.com"]);
    }

    #[test]
    fn test_extend_unique_without_keys_appends_everything() {
        let mut store: RowStore<_> = vec![startup("a")].into_iter().collect();
        assert_eq!(store.extend_unique(vec![startup("a"), startup("a")]), 2);
        assert_eq!(store.len(), 3);
    }

    proptest! {
        #[test]
        fn prop_add_then_remove_last_restores_sequence(
            names in proptest::collection::vec("[a-z]{1,8}", 0..12),
            extra in "[a-z]{1,8}",
        ) {
            let mut store: RowStore<_> = names.iter().map(|n| startup(n)).collect();
            let before = store.clone();
            store.add(startup(&extra));
            let last = store.len() - 1;
            store.remove_at(last);
            prop_assert_eq!(store, before);
        }
    }
}
