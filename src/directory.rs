//! User directory — the injectable store behind the onboarding flow.
//!
//! The trait exists so tests can run against an isolated instance instead of
//! process-wide state. The in-memory implementation is the only backend;
//! records live for the life of the process and are discarded at exit.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::DirectoryError;
use crate::onboarding::model::{NewUser, User};

/// Store of user records keyed by email.
///
/// All mutations go through the implementation's own exclusion mechanism:
/// concurrent calls against different emails must not interfere, and
/// concurrent calls against the same email are serialized so that exactly
/// one of two racing inserts succeeds and updates never interleave.
#[async_trait]
pub trait Directory: Send + Sync {
    /// Look up a user by exact, case-sensitive email.
    async fn find_by_email(&self, email: &str) -> Option<User>;

    /// Insert a new record, assigning the next id.
    async fn insert(&self, candidate: NewUser) -> Result<User, DirectoryError>;

    /// Overwrite the user's role.
    async fn update_role(&self, email: &str, role: String) -> Result<User, DirectoryError>;

    /// Overwrite the user's survey answers and score together.
    async fn update_survey(
        &self,
        email: &str,
        answers: Vec<String>,
        score: i64,
    ) -> Result<User, DirectoryError>;
}

/// In-memory directory guarded by a single `RwLock`.
///
/// Ids come from a dedicated counter rather than the map's size, so they
/// stay unique and monotonic even if record removal is ever added.
pub struct MemoryDirectory {
    users: RwLock<HashMap<String, User>>,
    next_id: AtomicU64,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }
}

impl Default for MemoryDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Directory for MemoryDirectory {
    async fn find_by_email(&self, email: &str) -> Option<User> {
        self.users.read().await.get(email).cloned()
    }

    async fn insert(&self, candidate: NewUser) -> Result<User, DirectoryError> {
        let mut users = self.users.write().await;
        if users.contains_key(&candidate.email) {
            return Err(DirectoryError::DuplicateEmail);
        }
        // Allocated under the write lock, after the uniqueness check, so a
        // lost race never consumes an id.
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let user = User {
            id,
            full_name: candidate.full_name,
            email: candidate.email.clone(),
            password_digest: candidate.password_digest,
            role: None,
            survey_answers: None,
            score: None,
            avatar_url: candidate.avatar_url,
        };
        users.insert(candidate.email, user.clone());
        Ok(user)
    }

    async fn update_role(&self, email: &str, role: String) -> Result<User, DirectoryError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(email).ok_or(DirectoryError::NotFound)?;
        user.role = Some(role);
        Ok(user.clone())
    }

    async fn update_survey(
        &self,
        email: &str,
        answers: Vec<String>,
        score: i64,
    ) -> Result<User, DirectoryError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(email).ok_or(DirectoryError::NotFound)?;
        user.survey_answers = Some(answers);
        user.score = Some(score);
        Ok(user.clone())
    }
}
