//! Directory session.
//!
//! Ties the record store, the selection pointer, and the remote gateway
//! together and enforces the ordering rules: remote-gated operations call
//! the gateway first and touch local state only on success, and every failed
//! remote call leaves a visible notice behind instead of vanishing.

use jiff::Zoned;

use crate::error::{Result, WardbookError};
use crate::form::{self, ProfileDraft, SubmitKind, SubmitPlan};
use crate::notice::Notice;
use crate::remote::UserGateway;
use crate::selection::SelectionController;
use crate::store::RecordStore;
use crate::types::{RemoteCandidate, UserRecord};

/// What a submit ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(i64),
    Updated(i64),
    Attached(i64),
}

impl SubmitOutcome {
    pub fn id(&self) -> i64 {
        match self {
            SubmitOutcome::Created(id)
            | SubmitOutcome::Updated(id)
            | SubmitOutcome::Attached(id) => *id,
        }
    }
}

/// A working session over the local directory
pub struct Directory<G> {
    store: RecordStore,
    selection: SelectionController,
    gateway: G,
    notices: Vec<Notice>,
}

impl<G: UserGateway> Directory<G> {
    pub fn new(store: RecordStore, gateway: G) -> Self {
        Self {
            store,
            selection: SelectionController::default(),
            gateway,
            notices: Vec::new(),
        }
    }

    pub fn records(&self) -> &[UserRecord] {
        self.store.records()
    }

    pub fn current_id(&self) -> Option<i64> {
        self.selection.current_id()
    }

    pub fn current_record(&self) -> Option<&UserRecord> {
        self.selection.current_record(self.store.records())
    }

    /// Move the selection pointer. Returns false when no record with that
    /// id exists (the pointer is left unchanged).
    pub fn select(&mut self, id: i64) -> bool {
        self.selection.select(self.store.records(), id);
        self.selection.current_id() == Some(id)
    }

    /// Drain the accumulated notices for display.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Resolve and execute a form submission.
    ///
    /// Validation precedes every branch; a failing validation blocks the
    /// submission with no collection mutation and no gateway call. Updates
    /// are gated on the remote call succeeding; creates and attaches are
    /// local-only.
    pub async fn submit(&mut self, draft: ProfileDraft, kind: SubmitKind) -> Result<SubmitOutcome> {
        form::validate(&draft, kind, Zoned::now().date())?;

        match form::resolve(draft, self.store.records()) {
            SubmitPlan::Update(record) => {
                let id = record.id;
                match self.gateway.update(id, &record).await {
                    Ok(()) => {
                        self.store.update(id, record)?;
                        self.selection.select(self.store.records(), id);
                        self.notices.push(Notice::success("User updated"));
                        Ok(SubmitOutcome::Updated(id))
                    }
                    Err(e) => {
                        self.notices
                            .push(Notice::error(format!("Failed to update user: {e}")));
                        Err(e)
                    }
                }
            }
            SubmitPlan::Create(record) => {
                let id = record.id;
                self.store.add(record)?;
                self.selection.select(self.store.records(), id);
                self.notices.push(Notice::success("User added"));
                Ok(SubmitOutcome::Created(id))
            }
            SubmitPlan::Attach(record) => {
                let id = record.id;
                self.store.add(record)?;
                self.selection.select(self.store.records(), id);
                self.notices.push(Notice::success("User attached"));
                Ok(SubmitOutcome::Attached(id))
            }
        }
    }

    /// The bare "add user" flow: register remotely first, and only a
    /// created status admits the record into the local collection.
    pub async fn register(&mut self, draft: ProfileDraft) -> Result<i64> {
        form::validate(&draft, SubmitKind::Basic, Zoned::now().date())?;

        let id = match draft.id {
            Some(id) => id,
            None => form::generate_id(self.store.records()),
        };
        if self.store.contains(id) {
            return Err(WardbookError::DuplicateId(id));
        }

        let record = draft.into_record(id);
        match self.gateway.create(&record).await {
            Ok(()) => {
                self.store.add(record)?;
                self.selection.select(self.store.records(), id);
                self.notices.push(Notice::success("User added"));
                Ok(id)
            }
            Err(e) => {
                self.notices
                    .push(Notice::error(format!("Failed to add user: {e}")));
                Err(e)
            }
        }
    }

    /// Delete a record remotely, then locally. A remote failure leaves the
    /// local collection and the selection untouched.
    pub async fn delete(&mut self, id: i64) -> Result<()> {
        if !self.store.contains(id) {
            return Err(WardbookError::RecordNotFound(id));
        }

        match self.gateway.delete(id).await {
            Ok(()) => {
                self.store.remove(id)?;
                self.selection.on_removed(id);
                self.notices.push(Notice::success("User removed"));
                Ok(())
            }
            Err(e) => {
                self.notices
                    .push(Notice::error(format!("Failed to remove user: {e}")));
                Err(e)
            }
        }
    }

    /// Adopt a remote-listed candidate into the local collection.
    ///
    /// The listing is already authoritative, so no remote call is made.
    pub fn attach_candidate(&mut self, candidate: RemoteCandidate) -> Result<i64> {
        if self.store.contains(candidate.id) {
            return Err(WardbookError::DuplicateId(candidate.id));
        }

        let record: UserRecord = candidate.into();
        let id = record.id;
        self.store.add(record)?;
        self.selection.select(self.store.records(), id);
        self.notices.push(Notice::success("User attached"));
        Ok(id)
    }
}
