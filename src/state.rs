use std::sync::Arc;

use actix_web::web::{Data, ServiceConfig};

use crate::config::AuthConfig;
use crate::metrics::AppMetrics;
use crate::repositories::{MemoryUserRepository, UserRepository};
use crate::security::PasswordHasher;
use crate::session::SessionStore;

/// Shared application data, registered once per worker
#[derive(Clone)]
pub struct AppState {
    pub users: Data<dyn UserRepository>,
    pub sessions: Data<SessionStore>,
    pub hasher: Data<PasswordHasher>,
    pub auth: Data<AuthConfig>,
    pub metrics: Data<AppMetrics>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserRepository>, hasher: PasswordHasher, auth: AuthConfig) -> Self {
        Self {
            users: Data::from(users),
            sessions: Data::new(SessionStore::new(auth.session_lifetime())),
            hasher: Data::new(hasher),
            auth: Data::new(auth),
            metrics: Data::new(AppMetrics::new()),
        }
    }

    /// In-memory repository with the configured password hasher
    pub fn from_config(auth: &AuthConfig) -> Result<Self, argon2::password_hash::Error> {
        let hasher = PasswordHasher::from_config(&auth.argon2)?;

        Ok(Self::new(
            Arc::new(MemoryUserRepository::new()),
            hasher,
            auth.clone(),
        ))
    }

    pub fn register(&self, app: &mut ServiceConfig) {
        app.app_data(self.users.clone());
        app.app_data(self.sessions.clone());
        app.app_data(self.hasher.clone());
        app.app_data(self.auth.clone());
        app.app_data(self.metrics.clone());
    }
}
