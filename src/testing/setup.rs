use std::sync::Arc;
use std::time::Duration;

use actix_web::dev::ServiceResponse;
use actix_web::http::header::SET_COOKIE;

use crate::config::{Argon2Config, AuthConfig};
use crate::models::User;
use crate::repositories::MemoryUserRepository;
use crate::security::PasswordHasher;
use crate::state::AppState;

/// Argon2 parameters small enough to keep tests fast
pub fn argon2_config() -> Argon2Config {
    Argon2Config {
        memory_cost: 1024,
        time_cost: 1,
        parallelism: 1,
        hash_length: 32,
    }
}

pub fn auth_config() -> AuthConfig {
    AuthConfig {
        argon2: argon2_config(),
        ..AuthConfig::default()
    }
}

/// # Panics
/// Panics if the test Argon2 parameters are rejected
pub fn password_hasher() -> PasswordHasher {
    PasswordHasher::from_config(&argon2_config()).expect("Invalid test Argon2 parameters")
}

/// Fresh state: empty repository, no sessions, fast hasher
pub fn state() -> AppState {
    state_with(auth_config())
}

pub fn state_with(auth: AuthConfig) -> AppState {
    AppState::new(Arc::new(MemoryUserRepository::new()), password_hasher(), auth)
}

/// State whose sessions expire after `lifetime`
pub fn state_with_session_lifetime(lifetime: Duration) -> AppState {
    let mut state = state();
    state.sessions = actix_web::web::Data::new(crate::session::SessionStore::new(lifetime));
    state
}

/// Insert an account directly, bypassing the HTTP layer
pub async fn create_user(state: &AppState, user_id: &str, password: &str) -> User {
    let hash = state
        .hasher
        .hash(password)
        .expect("Failed to hash password");
    let user = User::new(user_id, hash, "코맥", format!("{}@naver.com", user_id));

    state
        .users
        .insert(user.clone())
        .await
        .expect("Failed to insert user");

    user
}

/// Open a session for `user_id` and return a matching `Cookie` header value
pub fn login(state: &AppState, user_id: &str) -> String {
    let session = state.sessions.create(user_id);

    format!("{}={}", state.auth.session_cookie, session.token)
}

/// The raw `Set-Cookie` value of a response, as a client would echo it back
pub fn set_cookie<B>(response: &ServiceResponse<B>) -> Option<String> {
    response
        .headers()
        .get(SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}
