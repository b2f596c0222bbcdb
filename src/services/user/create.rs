use crate::error::Error;
use crate::metrics::AppMetrics;
use crate::models::User;
use crate::repositories::{RepositoryError, UserRepository};
use crate::requests::user::UserStoreRequest;
use crate::security::PasswordHasher;

/// Outcome of a well-formed sign-up
#[derive(Debug, PartialEq, Eq)]
pub enum SignUp {
    Created(User),
    /// The user id already belongs to an account, which is left untouched
    Taken,
}

/// Fail if a field is blank or malformed. A taken user id is not an error.
#[::tracing::instrument(skip(users, hasher, metrics, request), fields(user_id = %request.user_id.trim()))]
pub async fn create(
    users: &dyn UserRepository,
    hasher: &PasswordHasher,
    metrics: &AppMetrics,
    request: UserStoreRequest,
) -> Result<SignUp, Error> {
    let request = request.normalized();
    let validation = request.validate();

    if !validation.is_empty() {
        ::tracing::info!("Sign-up rejected");
    }
    validation.into_result()?;

    if users.find(&request.user_id).await?.is_some() {
        ::tracing::info!("Sign-up skipped: user id already exists");
        return Ok(SignUp::Taken);
    }

    ::tracing::debug!("Hashing password with Argon2id");
    let password = hasher.hash(&request.password)?;
    let user = User::new(request.user_id, password, request.name, request.email);

    match users.insert(user.clone()).await {
        Ok(()) => {}
        Err(RepositoryError::Duplicate(_)) => {
            ::tracing::info!("Sign-up skipped: user id taken concurrently");
            return Ok(SignUp::Taken);
        }
        Err(e) => return Err(e.into()),
    }

    metrics.record_sign_up();
    metrics.set_users_total(users.count().await?);

    ::tracing::info!("User created successfully");

    Ok(SignUp::Created(user))
}
