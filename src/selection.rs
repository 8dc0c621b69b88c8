//! Current-selection tracking.
//!
//! The selection is a pointer by id, resolved against the live collection on
//! every read, so it can never serve stale record data and never points at a
//! record that no longer exists.

use crate::types::UserRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionController {
    current: Option<i64>,
}

impl SelectionController {
    pub fn current_id(&self) -> Option<i64> {
        self.current
    }

    /// Point the selection at `id`, if a record with that id exists.
    /// Otherwise the selection is left unchanged.
    pub fn select(&mut self, records: &[UserRecord], id: i64) {
        if records.iter().any(|r| r.id == id) {
            self.current = Some(id);
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Record `id` was removed from the collection; a selection pointing at
    /// it is cleared.
    pub fn on_removed(&mut self, id: i64) {
        if self.current == Some(id) {
            self.current = None;
        }
    }

    /// Resolve the selection against the current snapshot.
    pub fn current_record<'a>(&self, records: &'a [UserRecord]) -> Option<&'a UserRecord> {
        let id = self.current?;
        records.iter().find(|r| r.id == id)
    }
}
