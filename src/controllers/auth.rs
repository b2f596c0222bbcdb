use actix_web::http::header::LOCATION;
use actix_web::web::{Data, Form};
use actix_web::{HttpRequest, HttpResponse};

use crate::config::AuthConfig;
use crate::error::Error;
use crate::metrics::AppMetrics;
use crate::middlewares::Auth;
use crate::middlewares::auth::{removal_cookie, session_cookie, session_token};
use crate::repositories::UserRepository;
use crate::requests::auth::LoginRequest;
use crate::security::PasswordHasher;
use crate::session::SessionStore;
use crate::views::Html;
use crate::{services, views};

/// Create a new session
///
/// Fail if:
/// - user id or password is blank
/// - user id not found or password is incorrect
#[utoipa::path(
    post,
    path = "/users/login",
    tag = "Auth",
    request_body(content = LoginRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Logged in, session cookie set, redirects to /",
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Validation failed", body = crate::error::ErrorResponse),
        (status = 401, description = "Invalid credentials", body = crate::error::ErrorResponse),
    ),
)]
#[post("/users/login")]
pub async fn login(
    users: Data<dyn UserRepository>,
    sessions: Data<SessionStore>,
    hasher: Data<PasswordHasher>,
    metrics: Data<AppMetrics>,
    config: Data<AuthConfig>,
    Form(request): Form<LoginRequest>,
) -> Result<HttpResponse, Error> {
    let session =
        services::auth::login::login(users.get_ref(), &sessions, &hasher, &metrics, request)
            .await?;

    Ok(HttpResponse::Found()
        .insert_header((LOCATION, "/"))
        .cookie(session_cookie(&config, &session))
        .finish())
}

/// Destroy current session
#[utoipa::path(
    get,
    path = "/users/logout",
    tag = "Auth",
    responses((status = 302, description = "Session cleared, redirects to /")),
)]
#[get("/users/logout")]
pub async fn logout(
    req: HttpRequest,
    sessions: Data<SessionStore>,
    metrics: Data<AppMetrics>,
    config: Data<AuthConfig>,
) -> HttpResponse {
    let token = session_token(req.headers(), &config.session_cookie);

    services::auth::logout::logout(&sessions, &metrics, token.as_deref());

    HttpResponse::Found()
        .insert_header((LOCATION, "/"))
        .cookie(removal_cookie(&config))
        .finish()
}

/// Login form
#[utoipa::path(
    get,
    path = "/users/loginForm",
    tag = "Auth",
    responses((status = 200, description = "Login form", content_type = "text/html", body = String)),
)]
#[get("/users/loginForm")]
pub async fn login_form(auth: Option<Auth>) -> Html {
    views::user::login_form(auth.as_ref().map(Auth::user_id))
}
