use crate::error::Error;
use crate::metrics::AppMetrics;
use crate::middlewares::Auth;
use crate::models::User;
use crate::repositories::UserRepository;
use crate::requests::user::UserUpdateRequest;
use crate::responses::user::User as UserResponse;
use crate::security::PasswordHasher;
use crate::session::SessionStore;

fn authorize(auth: &Auth, user_id: &str) -> Result<(), Error> {
    if auth.is(user_id) {
        return Ok(());
    }

    ::tracing::warn!(current = %auth.user_id(), target = %user_id, "Attempt to modify another account");

    Err(Error::forbidden("You can only modify your own account"))
}

/// Current values for the edit form
#[::tracing::instrument(skip(users, auth), fields(current = %auth.user_id()))]
pub async fn form(
    users: &dyn UserRepository,
    auth: &Auth,
    user_id: &str,
) -> Result<UserResponse, Error> {
    authorize(auth, user_id)?;

    users
        .find(user_id)
        .await?
        .map(UserResponse::from)
        .ok_or_else(|| Error::not_found(format!("User {} not found", user_id)))
}

/// Replace every field of `user_id`, including the id itself
///
/// Fail if
/// - the session belongs to another account
/// - the account does not exist
/// - a field is invalid
/// - the new user id belongs to another account
#[::tracing::instrument(
    skip(users, sessions, hasher, metrics, auth, request),
    fields(current = %auth.user_id(), new_user_id = %request.user_id.trim())
)]
pub async fn update(
    users: &dyn UserRepository,
    sessions: &SessionStore,
    hasher: &PasswordHasher,
    metrics: &AppMetrics,
    auth: &Auth,
    user_id: &str,
    request: UserUpdateRequest,
) -> Result<User, Error> {
    authorize(auth, user_id)?;

    if users.find(user_id).await?.is_none() {
        return Err(Error::not_found(format!("User {} not found", user_id)));
    }

    let request = request.normalized();
    let mut validation = request.validate();

    if !validation.has("userId")
        && request.user_id != user_id
        && users.find(&request.user_id).await?.is_some()
    {
        validation.add("userId", "User id already exists.");
    }

    validation.into_result()?;

    let password = hasher.hash(&request.password)?;
    let user = User::new(request.user_id, password, request.name, request.email);

    users.update(user_id, user.clone()).await?;
    metrics.record_update();

    if !user.is(user_id) {
        let moved = sessions.rename_user(user_id, &user.user_id);
        ::tracing::info!(sessions = moved, "User id changed");
    }

    ::tracing::info!("User updated successfully");

    Ok(user)
}
