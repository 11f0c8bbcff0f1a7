//! # Repository Module
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  build_report(&source, params)                                         │
//! │       │                                                                 │
//! │       │  source.load_users().await                                      │
//! │       ▼                                                                 │
//! │  UserSource                                                             │
//! │  ├── UserRepository  → users.csv on disk                               │
//! │  └── InMemoryUsers   → fixed Vec<User>                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The orchestrator only sees the trait, so it can be driven from tests
//! without touching the file system.

pub mod user;

use async_trait::async_trait;
use pricing_core::User;

use crate::error::StoreResult;

/// Anything that can yield the list of users to price.
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Returns every user record, in source order.
    async fn load_users(&self) -> StoreResult<Vec<User>>;
}
