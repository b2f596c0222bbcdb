pub mod setup;

/// Build an in-process app with fresh state.
///
/// Evaluates to `(service, state)`; the state gives direct access to the
/// repository and session store behind the service.
#[macro_export]
macro_rules! service {
    () => {
        $crate::service!($crate::testing::setup::state())
    };
    ($state:expr) => {{
        let state: $crate::state::AppState = $state;
        let app = ::actix_web::App::new()
            .wrap($crate::security::SecurityHeadersMiddleware::default_config())
            .configure(|app| {
                state.register(app);
                $crate::router::route(app);
            });

        let service = ::actix_web::test::init_service(app).await;

        (service, state)
    }};
}
