use std::time::{Duration, Instant};

use actix_web::web::Data;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use rand::Rng;
use rand::distributions::Alphanumeric;
use serde::Serialize;
use tokio::task::JoinHandle;

const TOKEN_LENGTH: usize = 32;

/// A logged-in browser, identified by the opaque token stored in its cookie
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip)]
    expires_at: Instant,
}

impl Session {
    fn new(user_id: &str, lifetime: Duration) -> Self {
        Self {
            token: generate_token(),
            user_id: user_id.to_string(),
            created_at: Utc::now(),
            expires_at: Instant::now() + lifetime,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

fn generate_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

/// Server side session storage: token → session
#[derive(Debug)]
pub struct SessionStore {
    sessions: DashMap<String, Session>,
    lifetime: Duration,
}

impl SessionStore {
    /// Create a store with the default shard count (CPU count * 4)
    pub fn new(lifetime: Duration) -> Self {
        Self::with_shard_count(lifetime, num_cpus::get() * 4)
    }

    /// Shard count is rounded up to a power of two, as DashMap requires
    pub fn with_shard_count(lifetime: Duration, shard_count: usize) -> Self {
        Self {
            sessions: DashMap::with_shard_amount(shard_count.max(2).next_power_of_two()),
            lifetime,
        }
    }

    /// Open a new session for `user_id`
    #[::tracing::instrument(skip(self))]
    pub fn create(&self, user_id: &str) -> Session {
        loop {
            let session = Session::new(user_id, self.lifetime);

            if self.sessions.contains_key(&session.token) {
                continue;
            }

            self.sessions.insert(session.token.clone(), session.clone());
            ::tracing::debug!("Session created");

            return session;
        }
    }

    /// Look up a live session. Expired sessions are dropped on the way.
    pub fn get(&self, token: &str) -> Option<Session> {
        if let Some(session) = self.sessions.get(token) {
            if !session.is_expired() {
                return Some(session.clone());
            }
        }

        if self
            .sessions
            .remove_if(token, |_, session| session.is_expired())
            .is_some()
        {
            ::tracing::debug!("Expired session removed");
        }

        None
    }

    /// Destroy a session. Returns whether it existed.
    #[::tracing::instrument(skip(self, token))]
    pub fn invalidate(&self, token: &str) -> bool {
        let removed = self.sessions.remove(token).is_some();

        if removed {
            ::tracing::debug!("Session invalidated");
        }

        removed
    }

    /// Point every session of `old` at `new` after an account rename
    #[::tracing::instrument(skip(self))]
    pub fn rename_user(&self, old: &str, new: &str) -> usize {
        let mut moved = 0;

        for mut session in self.sessions.iter_mut() {
            if session.user_id == old {
                session.user_id = new.to_string();
                moved += 1;
            }
        }

        moved
    }

    /// Drop expired sessions, returning how many were removed
    pub fn purge_expired(&self) -> usize {
        let mut purged = 0;

        self.sessions.retain(|_, session| {
            let keep = !session.is_expired();
            if !keep {
                purged += 1;
            }
            keep
        });

        purged
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Periodically purge expired sessions on the current runtime
    pub fn spawn_sweeper(store: Data<SessionStore>, every: Duration) -> JoinHandle<()> {
        actix::spawn(async move {
            let mut interval = actix::clock::interval(every);

            loop {
                interval.tick().await;

                let purged = store.purge_expired();
                if purged > 0 {
                    ::tracing::info!(purged, remaining = store.len(), "Expired sessions purged");
                }
            }
        })
    }
}
