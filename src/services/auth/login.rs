use crate::error::Error;
use crate::metrics::AppMetrics;
use crate::repositories::UserRepository;
use crate::requests::auth::LoginRequest;
use crate::security::PasswordHasher;
use crate::session::{Session, SessionStore};

const INVALID_CREDENTIALS: &str = "User id or password is incorrect";

/// Create a new session
///
/// Unknown user ids and wrong passwords fail the same way. Hashes made with
/// outdated Argon2 parameters are upgraded on success.
#[::tracing::instrument(skip(users, sessions, hasher, metrics, request), fields(user_id = %request.user_id.trim()))]
pub async fn login(
    users: &dyn UserRepository,
    sessions: &SessionStore,
    hasher: &PasswordHasher,
    metrics: &AppMetrics,
    request: LoginRequest,
) -> Result<Session, Error> {
    request.validate().into_result()?;

    let user_id = request.user_id.trim();

    let user = match users.find(user_id).await? {
        Some(user) => user,
        None => {
            ::tracing::info!("Login failed: unknown user id");
            metrics.record_login(false);
            return Err(Error::unauthorized(INVALID_CREDENTIALS));
        }
    };

    if !hasher.verify(&request.password, &user.password)? {
        ::tracing::info!("Login failed: wrong password");
        metrics.record_login(false);
        return Err(Error::unauthorized(INVALID_CREDENTIALS));
    }

    if hasher.needs_rehash(&user.password)? {
        let password = hasher.hash(&request.password)?;

        if users
            .replace_password(user_id, &user.password, password)
            .await?
        {
            ::tracing::info!("Password hash parameters upgraded");
        }
    }

    let session = sessions.create(&user.user_id);

    metrics.record_login(true);
    metrics.set_sessions_active(sessions.len());

    ::tracing::info!("User logged in");

    Ok(session)
}
