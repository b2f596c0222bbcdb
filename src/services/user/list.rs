use crate::error::Error;
use crate::repositories::UserRepository;
use crate::responses::user::User;

pub async fn list(users: &dyn UserRepository) -> Result<Vec<User>, Error> {
    let users = users.all().await?;

    ::tracing::debug!(count = users.len(), "Listing users");

    Ok(users.into_iter().map(User::from).collect())
}
