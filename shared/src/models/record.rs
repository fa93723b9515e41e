use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;
use validator::Validate;

/// A row shape that can live in a [`crate::store::RowStore`] and be edited
/// through a draft form.
pub trait Record: Clone + Debug + Default + PartialEq + Validate + Serialize + DeserializeOwned {
    /// Human readable name of the record kind, e.g. "Startup".
    const KIND: &'static str;

    /// Merges a single form input into the record. `name` is the form
    /// field name (`teamLeader`, `pitchSlot`, ...).
    fn set_field(&mut self, name: &str, value: &str) -> Result<()>;

    /// Key used to drop duplicates when merging a batch. Records without a
    /// key are always appended.
    fn dedup_key(&self) -> Option<&str> {
        None
    }
}
