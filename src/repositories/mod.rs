use std::fmt::Debug;

use async_trait::async_trait;

use crate::models::User;

pub mod memory;

pub use memory::MemoryUserRepository;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("user {0} already exists")]
    Duplicate(String),
    #[error("user {0} not found")]
    NotFound(String),
    #[error("user repository lock poisoned")]
    Poisoned,
}

/// Data access for accounts, keyed by `user_id`
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Store a new account
    ///
    /// Fails with [`RepositoryError::Duplicate`] when the user id is taken
    async fn insert(&self, user: User) -> Result<(), RepositoryError>;

    /// Find an account by user id
    async fn find(&self, user_id: &str) -> Result<Option<User>, RepositoryError>;

    /// All accounts ordered by user id
    async fn all(&self) -> Result<Vec<User>, RepositoryError>;

    /// Replace the account currently stored under `user_id`
    ///
    /// `user.user_id` may differ from `user_id`, in which case the account is
    /// moved to the new key. Fails with [`RepositoryError::NotFound`] when
    /// `user_id` does not exist and [`RepositoryError::Duplicate`] when the new
    /// key belongs to another account.
    async fn update(&self, user_id: &str, user: User) -> Result<(), RepositoryError>;

    /// Swap the password hash of `user_id` from `current` to `new`
    ///
    /// Only the hash changes. Returns `false`, leaving the store as it was,
    /// when the account is gone or its hash no longer equals `current`.
    async fn replace_password(
        &self,
        user_id: &str,
        current: &str,
        new: String,
    ) -> Result<bool, RepositoryError>;

    /// Number of stored accounts
    async fn count(&self) -> Result<usize, RepositoryError>;
}
