use std::future::{Ready, ready};

use actix_web::cookie::time::Duration as CookieDuration;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::dev::Payload;
use actix_web::http::header::{COOKIE, HeaderMap};
use actix_web::web::Data;
use actix_web::{FromRequest, HttpRequest};

use crate::config::AuthConfig;
use crate::error::Error;
use crate::session::{Session, SessionStore};

/// The session behind the request's cookie
///
/// Rejects with `401 Unauthorized` when the cookie is missing, unknown or
/// expired. Use `Option<Auth>` for pages that also serve anonymous visitors.
#[derive(Clone, Debug)]
pub struct Auth {
    pub session: Session,
}

impl Auth {
    pub fn user_id(&self) -> &str {
        &self.session.user_id
    }

    pub fn token(&self) -> &str {
        &self.session.token
    }

    /// Whether this session belongs to `user_id`
    pub fn is(&self, user_id: &str) -> bool {
        self.session.user_id == user_id
    }

    fn resolve(req: &HttpRequest) -> Result<Self, Error> {
        let sessions = req.app_data::<Data<SessionStore>>().ok_or_else(|| {
            ::tracing::error!("Session store is not registered");
            Error::internal("Session store is unavailable")
        })?;

        let config = req.app_data::<Data<AuthConfig>>().ok_or_else(|| {
            ::tracing::error!("Auth configuration is not registered");
            Error::internal("Auth configuration is unavailable")
        })?;

        let token = session_token(req.headers(), &config.session_cookie).ok_or_else(|| {
            ::tracing::debug!(path = %req.path(), "Missing session cookie");
            Error::unauthorized("Login required")
        })?;

        let session = sessions.get(&token).ok_or_else(|| {
            ::tracing::debug!(path = %req.path(), "Unknown or expired session");
            Error::unauthorized("Session expired, please login again")
        })?;

        Ok(Self { session })
    }
}

impl FromRequest for Auth {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Self::resolve(req))
    }
}

/// Find the value of cookie `name` in the `Cookie` headers
///
/// Segments without `=` and attributes such as `Path=/` are skipped, so a
/// `Set-Cookie` value echoed back verbatim still resolves.
pub fn session_token(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, value)| key.trim() == name && !value.trim().is_empty())
        .map(|(_, value)| value.trim().trim_matches('"').to_string())
}

/// Cookie handed out on login
pub fn session_cookie(config: &AuthConfig, session: &Session) -> Cookie<'static> {
    Cookie::build(config.session_cookie.clone(), session.token.clone())
        .path("/")
        .http_only(true)
        .secure(config.secure_cookie)
        .same_site(SameSite::Lax)
        .max_age(CookieDuration::seconds(config.session_lifetime as i64))
        .finish()
}

/// Cookie clearing the session on logout
pub fn removal_cookie(config: &AuthConfig) -> Cookie<'static> {
    let mut cookie = Cookie::build(config.session_cookie.clone(), "")
        .path("/")
        .http_only(true)
        .secure(config.secure_cookie)
        .same_site(SameSite::Lax)
        .finish();
    cookie.make_removal();
    cookie
}
