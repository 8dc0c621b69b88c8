//! Remote user-service gateway.
//!
//! This module defines the interface to the fixed demo user service the
//! directory reconciles against, plus the reqwest-backed implementation.
//! Gateway operations are side-effect-free with respect to the local store;
//! callers decide whether and how to reflect results locally.

pub mod http;

use crate::error::Result;
use crate::types::{CandidatePage, UserRecord};

pub use http::HttpUserGateway;

/// Common interface for the remote user service
pub trait UserGateway: Send + Sync {
    /// Fetch one page of the remote user listing
    fn list(
        &self,
        page: u32,
        per_page: u32,
    ) -> impl std::future::Future<Output = Result<CandidatePage>> + Send;

    /// Register a new user remotely; Ok only when the service reports "created"
    fn create(&self, record: &UserRecord) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Update user `id` remotely; Ok only when the service reports "ok"
    fn update(
        &self,
        id: i64,
        record: &UserRecord,
    ) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Delete user `id` remotely; Ok only when the service reports "no content"
    fn delete(&self, id: i64) -> impl std::future::Future<Output = Result<()>> + Send;
}
