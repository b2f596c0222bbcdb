use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::{RepositoryError, UserRepository};
use crate::models::User;

/// In-process account storage
///
/// Every mutation happens under a single write guard, so a rename can never
/// leave the account visible under both keys or under neither.
#[derive(Debug, Default)]
pub struct MemoryUserRepository {
    users: RwLock<BTreeMap<String, User>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    #[::tracing::instrument(skip(self, user), fields(user_id = %user.user_id))]
    async fn insert(&self, user: User) -> Result<(), RepositoryError> {
        let mut users = self.users.write().map_err(|_| RepositoryError::Poisoned)?;

        if users.contains_key(&user.user_id) {
            ::tracing::debug!("User id already taken");
            return Err(RepositoryError::Duplicate(user.user_id));
        }

        users.insert(user.user_id.clone(), user);

        Ok(())
    }

    async fn find(&self, user_id: &str) -> Result<Option<User>, RepositoryError> {
        let users = self.users.read().map_err(|_| RepositoryError::Poisoned)?;

        Ok(users.get(user_id).cloned())
    }

    async fn all(&self) -> Result<Vec<User>, RepositoryError> {
        let users = self.users.read().map_err(|_| RepositoryError::Poisoned)?;

        Ok(users.values().cloned().collect())
    }

    #[::tracing::instrument(skip(self, user), fields(new_user_id = %user.user_id))]
    async fn update(&self, user_id: &str, user: User) -> Result<(), RepositoryError> {
        let mut users = self.users.write().map_err(|_| RepositoryError::Poisoned)?;

        if !users.contains_key(user_id) {
            return Err(RepositoryError::NotFound(user_id.to_string()));
        }

        if user.user_id != user_id {
            if users.contains_key(&user.user_id) {
                return Err(RepositoryError::Duplicate(user.user_id));
            }

            users.remove(user_id);
            ::tracing::debug!("User id changed");
        }

        users.insert(user.user_id.clone(), user);

        Ok(())
    }

    #[::tracing::instrument(skip(self, current, new))]
    async fn replace_password(
        &self,
        user_id: &str,
        current: &str,
        new: String,
    ) -> Result<bool, RepositoryError> {
        let mut users = self.users.write().map_err(|_| RepositoryError::Poisoned)?;

        match users.get_mut(user_id) {
            Some(user) if user.password == current => {
                user.password = new;
                Ok(true)
            }
            _ => {
                ::tracing::debug!("Password changed concurrently, keeping stored hash");
                Ok(false)
            }
        }
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        let users = self.users.read().map_err(|_| RepositoryError::Poisoned)?;

        Ok(users.len())
    }
}
