//! Shared helpers for integration tests: temp-backed stores, a scripted
//! gateway, and record/draft fixtures.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tempfile::TempDir;

use wardbook::error::{Result, WardbookError};
use wardbook::store::RecordStore;
use wardbook::types::{CandidatePage, RemoteCandidate, UserRecord};
use wardbook::{ProfileDraft, UserGateway};

/// A record store backed by a temp directory; keep the guard alive for the
/// duration of the test.
pub fn temp_store() -> (TempDir, RecordStore) {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let store = RecordStore::open_at(
        dir.path().join("users.json"),
        dir.path().join("total_pages.json"),
    );
    (dir, store)
}

/// Shared counters for observing gateway traffic from outside the directory
#[derive(Clone, Default)]
pub struct GatewayLog {
    pub list_calls: Arc<AtomicUsize>,
    pub create_calls: Arc<AtomicUsize>,
    pub update_calls: Arc<AtomicUsize>,
    pub delete_calls: Arc<AtomicUsize>,
    pub reject: Arc<AtomicBool>,
}

impl GatewayLog {
    pub fn reject_remote(&self, reject: bool) {
        self.reject.store(reject, Ordering::SeqCst);
    }
}

/// Scripted gateway: mutations succeed unless the log says to reject them,
/// and the listing serves two candidates per page over `total_pages` pages.
pub struct MockGateway {
    pub log: GatewayLog,
    pub total_pages: u32,
}

impl MockGateway {
    pub fn new() -> (Self, GatewayLog) {
        Self::with_pages(1)
    }

    pub fn with_pages(total_pages: u32) -> (Self, GatewayLog) {
        let log = GatewayLog::default();
        (
            Self {
                log: log.clone(),
                total_pages,
            },
            log,
        )
    }

    fn gate(&self) -> Result<()> {
        if self.log.reject.load(Ordering::SeqCst) {
            return Err(WardbookError::RemoteRejected(
                "scripted rejection".to_string(),
            ));
        }
        Ok(())
    }
}

impl UserGateway for MockGateway {
    async fn list(&self, page: u32, _per_page: u32) -> Result<CandidatePage> {
        self.log.list_calls.fetch_add(1, Ordering::SeqCst);
        self.gate()?;
        Ok(CandidatePage {
            data: vec![candidate(page as i64 * 10), candidate(page as i64 * 10 + 1)],
            total_pages: self.total_pages,
        })
    }

    async fn create(&self, _record: &UserRecord) -> Result<()> {
        self.log.create_calls.fetch_add(1, Ordering::SeqCst);
        self.gate()
    }

    async fn update(&self, _id: i64, _record: &UserRecord) -> Result<()> {
        self.log.update_calls.fetch_add(1, Ordering::SeqCst);
        self.gate()
    }

    async fn delete(&self, _id: i64) -> Result<()> {
        self.log.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.gate()
    }
}

pub fn candidate(id: i64) -> RemoteCandidate {
    RemoteCandidate {
        id,
        email: format!("user{id}@reqres.in"),
        first_name: "Remote".to_string(),
        last_name: format!("User{id}"),
        avatar: format!("https://reqres.in/img/faces/{id}-image.jpg"),
    }
}

pub fn record(id: i64, last_name: &str) -> UserRecord {
    UserRecord {
        id,
        email: format!("{}@reqres.in", last_name.to_lowercase()),
        first_name: "Test".to_string(),
        last_name: last_name.to_string(),
        avatar: format!("https://reqres.in/img/faces/{id}-image.jpg"),
        gender: None,
        role: None,
        dob: None,
        university: None,
        workplace: None,
        job_description: None,
    }
}

/// A bare "add user" submission: identity fields only, no profile extension
pub fn basic_draft() -> ProfileDraft {
    ProfileDraft {
        id: None,
        email: "a@x.com".to_string(),
        first_name: "A".to_string(),
        last_name: "B".to_string(),
        avatar: "u".to_string(),
        ..Default::default()
    }
}
