//! Incremental remote-lookup pager.
//!
//! Feeds the attach-an-existing-user flow: pages of remote candidates are
//! fetched on demand (the host fires `fetch_next` as its list scrolls near
//! the bottom) and accumulated append-only. A `fetching` guard suppresses
//! overlapping requests, and every fetch carries the pager generation at its
//! start so a page that completes after a `reset()` is discarded instead of
//! leaking into the new lookup session.

use parking_lot::Mutex;

use crate::error::Result;
use crate::remote::UserGateway;
use crate::types::{RemoteCandidate, UserRecord};

/// Outcome of a `fetch_next` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A page was fetched and appended
    Fetched { added: usize },
    /// A fetch was already in flight, or every page is already loaded
    Skipped,
    /// The pager was reset while the fetch was in flight; the page was dropped
    Stale,
}

/// A remote candidate annotated with its local-directory status
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedCandidate {
    pub candidate: RemoteCandidate,
    /// Already present in the local directory; listed but not selectable
    pub attached: bool,
}

#[derive(Debug)]
struct PagerState {
    /// Next page to fetch (1-based)
    page: u32,
    total_pages: u32,
    fetching: bool,
    generation: u64,
    candidates: Vec<RemoteCandidate>,
}

impl PagerState {
    fn fresh(generation: u64) -> Self {
        Self {
            page: 1,
            total_pages: 1,
            fetching: false,
            generation,
            candidates: Vec::new(),
        }
    }
}

/// Pager over the remote user listing
///
/// The state sits behind a mutex that is never held across an await, so
/// overlapping `fetch_next` calls from a fast-scrolling host are safe: the
/// second call observes the `fetching` flag and becomes a no-op.
pub struct LookupPager<G> {
    gateway: G,
    per_page: u32,
    state: Mutex<PagerState>,
}

impl<G: UserGateway> LookupPager<G> {
    pub fn new(gateway: G, per_page: u32) -> Self {
        Self {
            gateway,
            per_page,
            state: Mutex::new(PagerState::fresh(0)),
        }
    }

    /// Start a new lookup session: drop accumulated candidates, rewind the
    /// cursor, and supersede any in-flight fetch.
    pub fn reset(&self) {
        let mut state = self.state.lock();
        let generation = state.generation + 1;
        *state = PagerState::fresh(generation);
    }

    /// True once every remote page has been fetched.
    pub fn is_exhausted(&self) -> bool {
        let state = self.state.lock();
        state.page > state.total_pages
    }

    /// Last total page count reported by the remote listing.
    pub fn total_pages(&self) -> u32 {
        self.state.lock().total_pages
    }

    /// Snapshot of the accumulated candidates, in fetch order.
    pub fn candidates(&self) -> Vec<RemoteCandidate> {
        self.state.lock().candidates.clone()
    }

    /// Candidates flagged with whether they already exist in the local
    /// directory. Attached candidates stay in the list so the page count
    /// stays consistent with the remote source of truth.
    pub fn annotate(&self, records: &[UserRecord]) -> Vec<AnnotatedCandidate> {
        self.state
            .lock()
            .candidates
            .iter()
            .map(|candidate| AnnotatedCandidate {
                attached: records.iter().any(|r| r.id == candidate.id),
                candidate: candidate.clone(),
            })
            .collect()
    }

    /// Fetch the next page, if one is due.
    ///
    /// No-op while a fetch is in flight or once every page is loaded. On
    /// gateway failure the pager returns to idle so a later call can retry
    /// the same page.
    pub async fn fetch_next(&self) -> Result<FetchOutcome> {
        let (generation, page) = {
            let mut state = self.state.lock();
            if state.fetching || state.page > state.total_pages {
                return Ok(FetchOutcome::Skipped);
            }
            state.fetching = true;
            (state.generation, state.page)
        };

        let result = self.gateway.list(page, self.per_page).await;

        let mut state = self.state.lock();
        if state.generation != generation {
            // A reset superseded this fetch; whatever it brought back
            // belongs to a closed session.
            return Ok(FetchOutcome::Stale);
        }
        state.fetching = false;

        let body = result?;
        let added = body.data.len();
        state.candidates.extend(body.data);
        state.total_pages = body.total_pages;
        state.page += 1;
        Ok(FetchOutcome::Fetched { added })
    }
}
