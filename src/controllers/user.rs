use actix_web::HttpResponse;
use actix_web::web::{Data, Form, Query};

use crate::error::Error;
use crate::metrics::AppMetrics;
use crate::middlewares::Auth;
use crate::repositories::UserRepository;
use crate::requests::user::{UserIdQuery, UserStoreRequest, UserUpdateRequest};
use crate::security::PasswordHasher;
use crate::services::user::create::SignUp;
use crate::session::SessionStore;
use crate::views::Html;
use crate::{responses, services, views};

/// Create a new account
///
/// A taken user id redirects back to the sign-up form and leaves the existing
/// account as it was.
///
/// Fail if a field is blank or malformed
#[utoipa::path(
    post,
    path = "/users/create",
    tag = "User",
    request_body(content = UserStoreRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Account created, redirects to /. Taken user id redirects to /users/form"),
        (status = 400, description = "Validation failed", body = crate::error::ErrorResponse),
    ),
)]
#[post("/users/create")]
pub async fn create(
    users: Data<dyn UserRepository>,
    hasher: Data<PasswordHasher>,
    metrics: Data<AppMetrics>,
    Form(request): Form<UserStoreRequest>,
) -> Result<HttpResponse, Error> {
    let outcome =
        services::user::create::create(users.get_ref(), &hasher, &metrics, request).await?;

    let location = match outcome {
        SignUp::Created(_) => "/",
        SignUp::Taken => "/users/form",
    };

    Ok(responses::found(location))
}

/// List every account
#[utoipa::path(
    get,
    path = "/users",
    tag = "User",
    security(("session" = [])),
    responses(
        (status = 200, description = "Member list page", content_type = "text/html", body = String),
        (status = 401, description = "Login required", body = crate::error::ErrorResponse),
    ),
)]
#[get("/users")]
pub async fn list(users: Data<dyn UserRepository>, auth: Auth) -> Result<Html, Error> {
    let users = services::user::list::list(users.get_ref()).await?;

    Ok(views::user::list(&users, auth.user_id()))
}

/// Show an account
///
/// Fail if user not found
#[utoipa::path(
    get,
    path = "/users/profile",
    tag = "User",
    security(("session" = [])),
    params(UserIdQuery),
    responses(
        (status = 200, description = "Profile page", content_type = "text/html", body = String),
        (status = 400, description = "Missing userId", body = crate::error::ErrorResponse),
        (status = 401, description = "Login required", body = crate::error::ErrorResponse),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse),
    ),
)]
#[get("/users/profile")]
pub async fn profile(
    users: Data<dyn UserRepository>,
    auth: Auth,
    query: Query<UserIdQuery>,
) -> Result<Html, Error> {
    let user = services::user::profile::profile(users.get_ref(), query.require()?).await?;

    Ok(views::user::profile(&user, auth.user_id()))
}

/// Edit form for the logged-in account
///
/// Fail if
/// - the account belongs to someone else
/// - user not found
#[utoipa::path(
    get,
    path = "/users/updateForm",
    tag = "User",
    security(("session" = [])),
    params(UserIdQuery),
    responses(
        (status = 200, description = "Pre-filled edit form", content_type = "text/html", body = String),
        (status = 401, description = "Login required", body = crate::error::ErrorResponse),
        (status = 403, description = "Not your account", body = crate::error::ErrorResponse),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse),
    ),
)]
#[get("/users/updateForm")]
pub async fn update_form(
    users: Data<dyn UserRepository>,
    auth: Auth,
    query: Query<UserIdQuery>,
) -> Result<Html, Error> {
    let user = services::user::update::form(users.get_ref(), &auth, query.require()?).await?;

    Ok(views::user::update_form(&user, auth.user_id()))
}

/// Update every field of the logged-in account
///
/// `POST` is accepted too, for browser forms.
///
/// Fail if
/// - the account belongs to someone else
/// - user not found
/// - a field is blank or malformed
/// - the new user id already exists
#[utoipa::path(
    put,
    path = "/users/update",
    tag = "User",
    security(("session" = [])),
    params(UserIdQuery),
    request_body(content = UserUpdateRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Account updated, redirects to /users"),
        (status = 400, description = "Validation failed", body = crate::error::ErrorResponse),
        (status = 401, description = "Login required", body = crate::error::ErrorResponse),
        (status = 403, description = "Not your account", body = crate::error::ErrorResponse),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse),
    ),
)]
#[route("/users/update", method = "PUT", method = "POST")]
pub async fn update(
    users: Data<dyn UserRepository>,
    sessions: Data<SessionStore>,
    hasher: Data<PasswordHasher>,
    metrics: Data<AppMetrics>,
    auth: Auth,
    query: Query<UserIdQuery>,
    Form(request): Form<UserUpdateRequest>,
) -> Result<HttpResponse, Error> {
    services::user::update::update(
        users.get_ref(),
        &sessions,
        &hasher,
        &metrics,
        &auth,
        query.require()?,
        request,
    )
    .await?;

    Ok(responses::found("/users"))
}

/// Sign-up form
#[utoipa::path(
    get,
    path = "/users/form",
    tag = "User",
    responses((status = 200, description = "Sign-up form", content_type = "text/html", body = String)),
)]
#[get("/users/form")]
pub async fn sign_up_form(auth: Option<Auth>) -> Html {
    views::user::sign_up_form(auth.as_ref().map(Auth::user_id))
}
