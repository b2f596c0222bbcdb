use crate::error::Error;
use crate::repositories::UserRepository;
use crate::responses::user::User;

#[::tracing::instrument(skip(users))]
pub async fn profile(users: &dyn UserRepository, user_id: &str) -> Result<User, Error> {
    users
        .find(user_id)
        .await?
        .map(User::from)
        .ok_or_else(|| Error::not_found(format!("User {} not found", user_id)))
}
