//! Draft form and modal state for one record domain.
//!
//! [`CrudState`] owns a domain's [`RowStore`] together with the modal that
//! creates and edits its rows. The modal is either hidden or editing a draft;
//! submitting commits the draft, cancelling discards it.

use crate::error::{Result, SharedError};
use crate::models::record::Record;
use crate::store::{RowId, RowStore};
use log::{debug, info};
use validator::Validate;

/// How opening an existing row for editing interacts with the store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditMode {
    /// The row stays in place while the modal is open. Submitting replaces
    /// it at the same position; cancelling leaves it untouched.
    #[default]
    InPlace,
    /// The row is taken out of the store when the modal opens. Submitting
    /// appends it at the end; cancelling drops it.
    Checkout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    Create,
    Existing(RowId),
    /// A row taken out of the store in [`EditMode::Checkout`]; submitting
    /// appends it again.
    CheckedOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Hidden,
    Editing(EditTarget),
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Editing(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CrudState<T> {
    pub rows: RowStore<T>,
    pub modal: ModalState,
    /// Pending field values; reset to `T::default()` after submit or cancel.
    pub draft: T,
    pub mode: EditMode,
}

impl<T: Record> Default for CrudState<T> {
    fn default() -> Self {
        Self::with_mode(EditMode::default())
    }
}

impl<T: Record> CrudState<T> {
    pub fn with_mode(mode: EditMode) -> Self {
        Self {
            rows: RowStore::new(),
            modal: ModalState::Hidden,
            draft: T::default(),
            mode,
        }
    }

    pub fn with_rows(mut self, rows: RowStore<T>) -> Self {
        self.rows = rows;
        self
    }

    /// Title for the modal header: "Add Judge" or "Edit Judge".
    pub fn modal_title(&self) -> String {
        match &self.modal {
            ModalState::Editing(EditTarget::Existing(_) | EditTarget::CheckedOut) => {
                format!("Edit {}", T::KIND)
            }
            _ => format!("Add {}", T::KIND),
        }
    }

    pub fn open_for_create(&mut self) {
        self.open_for_create_with(T::default());
    }

    /// Opens the create form with some fields already filled in, e.g. the
    /// date picked on the schedule calendar.
    pub fn open_for_create_with(&mut self, draft: T) {
        debug!("Opening {} form for create", T::KIND);
        self.draft = draft;
        self.modal = ModalState::Editing(EditTarget::Create);
    }

    pub fn open_for_edit(&mut self, id: RowId) -> Result<()> {
        let record = self
            .rows
            .get(id)
            .cloned()
            .ok_or_else(|| SharedError::RowNotFound(id.to_string()))?;

        let target = match self.mode {
            EditMode::InPlace => EditTarget::Existing(id),
            EditMode::Checkout => {
                self.rows.remove(id);
                EditTarget::CheckedOut
            }
        };

        debug!("Opening {} form for edit of {} ({:?})", T::KIND, id, self.mode);
        self.draft = record;
        self.modal = ModalState::Editing(target);
        Ok(())
    }

    pub fn open_for_edit_at(&mut self, index: usize) -> Result<()> {
        let id = self
            .rows
            .get_at(index)
            .map(|row| row.id)
            .ok_or_else(|| SharedError::RowNotFound(format!("index {}", index)))?;
        self.open_for_edit(id)
    }

    pub fn update_field(&mut self, name: &str, value: &str) -> Result<()> {
        match self.modal {
            ModalState::Editing(_) => self.draft.set_field(name, value),
            ModalState::Hidden => Err(SharedError::NotEditing),
        }
    }

    /// Commits the draft. On a validation failure the modal stays open with
    /// the draft intact.
    pub fn submit(&mut self) -> Result<RowId> {
        let target = match self.modal {
            ModalState::Editing(target) => target,
            ModalState::Hidden => return Err(SharedError::NotEditing),
        };
        self.draft.validate()?;
        if let EditTarget::Existing(id) = target {
            if self.rows.position(id).is_none() {
                return Err(SharedError::RowNotFound(id.to_string()));
            }
        }

        let draft = std::mem::take(&mut self.draft);
        let id = match target {
            EditTarget::Create | EditTarget::CheckedOut => self.rows.add(draft),
            EditTarget::Existing(id) => {
                self.rows.update(id, draft);
                id
            }
        };

        info!("{} {} saved", T::KIND, id);
        self.reset();
        Ok(id)
    }

    pub fn cancel(&mut self) {
        if self.modal.is_open() {
            debug!("{} form cancelled", T::KIND);
        }
        self.reset();
    }

    fn reset(&mut self) {
        self.modal = ModalState::Hidden;
        self.draft = T::default();
    }
}
