use actix_web::web::{self, ServiceConfig};
use utoipa::OpenApi;
use utoipa_swagger_ui::{SwaggerUi, Url};

use crate::api::Definition;
use crate::controllers;

pub fn route(app: &mut ServiceConfig) {
    app.service(controllers::home::index);
    // User
    app.service(controllers::user::sign_up_form);
    app.service(controllers::user::create);
    app.service(controllers::user::list);
    app.service(controllers::user::profile);
    app.service(controllers::user::update_form);
    app.service(controllers::user::update);
    // Auth
    app.service(controllers::auth::login_form);
    app.service(controllers::auth::login);
    app.service(controllers::auth::logout);

    // Health check endpoints
    app.service(controllers::health::health);
    app.service(controllers::health::ready);

    // Metrics endpoint
    app.service(controllers::metrics::metrics);

    // must at the end!
    app.service(web::redirect("/docs", "/docs/"));
    app.service(SwaggerUi::new("/docs/{_:.*}").urls(vec![(
        Url::new("Account", "/api.json"),
        Definition::openapi(),
    )]));
}
