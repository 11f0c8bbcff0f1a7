//! # User Repository
//!
//! Reads customer records from the user file.
//!
//! ## File Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  users.csv (no header, one record per line)                            │
//! │                                                                         │
//! │  1;Ana Torres;gold          → User { "1", "Ana Torres", "gold" }       │
//! │  2;Luis Perez               → User { "2", "Luis Perez", "" }           │
//! │  3                          → User { "3", "", "" }                     │
//! │  4;Eva;silver;extra         → User { "4", "Eva", "silver" }            │
//! │  (empty line)               → skipped                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Parsing never fails: short rows are padded with empty strings.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use pricing_core::User;
use tracing::{debug, warn};

use super::UserSource;
use crate::error::{StoreError, StoreResult};

const FIELD_DELIMITER: char = ';';

/// Repository backed by a flat user file.
///
/// ## Usage
/// ```rust,ignore
/// let repo = UserRepository::new("users.csv");
/// let users = repo.load_users().await?;
/// ```
#[derive(Debug, Clone)]
pub struct UserRepository {
    path: PathBuf,
}

impl UserRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        UserRepository { path: path.into() }
    }
}

#[async_trait]
impl UserSource for UserRepository {
    /// Loads every user in the file.
    ///
    /// A missing file yields an empty list. Any other read failure is
    /// returned as [`StoreError::Io`].
    async fn load_users(&self) -> StoreResult<Vec<User>> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                warn!(path = %self.path.display(), "User file not found, no users loaded");
                return Ok(Vec::new());
            }
            Err(err) => return Err(StoreError::io(&self.path, err)),
        };

        let users = parse_users(&contents);
        debug!(path = %self.path.display(), count = users.len(), "Loaded users");

        Ok(users)
    }
}

/// Parses the whole file contents, skipping empty lines.
///
/// A line holding only whitespace is not empty; it becomes a user whose id
/// is that whitespace.
pub fn parse_users(contents: &str) -> Vec<User> {
    contents
        .lines()
        .filter(|line| !line.is_empty())
        .map(parse_user_line)
        .collect()
}

/// Parses one `id;name;tier` row.
///
/// Missing trailing fields become empty strings; anything after the third
/// field is ignored.
pub fn parse_user_line(line: &str) -> User {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let mut fields = line.split(FIELD_DELIMITER);
    let mut next = || fields.next().unwrap_or_default().to_string();

    let id = next();
    let name = next();
    let tier = next();

    User { id, name, tier }
}

// =============================================================================
// In-Memory Source
// =============================================================================

/// Fixed list of users, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUsers {
    users: Vec<User>,
}

impl InMemoryUsers {
    pub fn new(users: Vec<User>) -> Self {
        InMemoryUsers { users }
    }
}

#[async_trait]
impl UserSource for InMemoryUsers {
    async fn load_users(&self) -> StoreResult<Vec<User>> {
        Ok(self.users.clone())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
