use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::{controllers, error, requests, responses};

/// Registers the session cookie as the `session` security scheme
pub struct SessionCookie;

impl Modify for SessionCookie {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);

        components.add_security_scheme(
            "session",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Opaque token issued by POST /users/login",
            ))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Lighter Account", description = "User accounts with cookie sessions"),
    tags(
        (name = "Home"),
        (name = "User"),
        (name = "Auth"),
        (name = "Health"),
    ),
    modifiers(&SessionCookie),
    paths(
        controllers::home::index,

        controllers::user::sign_up_form,
        controllers::user::create,
        controllers::user::list,
        controllers::user::profile,
        controllers::user::update_form,
        controllers::user::update,

        controllers::auth::login_form,
        controllers::auth::login,
        controllers::auth::logout,

        controllers::health::health,
        controllers::health::ready,
        controllers::metrics::metrics,
    ),
    components(schemas(
        requests::auth::LoginRequest,
        requests::user::UserStoreRequest,
        requests::user::UserUpdateRequest,

        responses::user::User,
        error::ErrorResponse,

        controllers::health::LivenessResponse,
        controllers::health::ReadinessResponse,
    )),
)]
pub struct Definition;
