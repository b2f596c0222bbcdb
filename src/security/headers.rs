//! Security response headers
//!
//! Every page this service renders is HTML built from user supplied data, so
//! each response carries a restrictive Content-Security-Policy alongside the
//! usual framing and sniffing protections.
//!
//! ```rust,no_run
//! use actix_web::{App, HttpServer};
//! use lighter_account::config::SecurityHeadersConfig;
//! use lighter_account::security::SecurityHeadersMiddleware;
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     let config = SecurityHeadersConfig::default();
//!
//!     HttpServer::new(move || App::new().wrap(SecurityHeadersMiddleware::new(config.clone())))
//!         .bind(("127.0.0.1", 8080))?
//!         .run()
//!         .await
//! }
//! ```

use std::future::{Ready, ready};
use std::rc::Rc;

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::header::{HeaderName, HeaderValue};
use futures_util::future::LocalBoxFuture;

use crate::config::SecurityHeadersConfig;

type HeaderList = Rc<Vec<(HeaderName, HeaderValue)>>;

/// Adds the configured security headers to every response
pub struct SecurityHeadersMiddleware {
    config: SecurityHeadersConfig,
}

impl SecurityHeadersMiddleware {
    pub fn new(config: SecurityHeadersConfig) -> Self {
        Self { config }
    }

    pub fn default_config() -> Self {
        Self::new(SecurityHeadersConfig::default())
    }

    /// Resolve the configuration into concrete headers once per worker.
    /// Empty or unrepresentable values are skipped.
    fn headers(&self) -> Vec<(HeaderName, HeaderValue)> {
        let config = &self.config;
        let hsts = (config.hsts_max_age > 0)
            .then(|| format!("max-age={}; includeSubDomains", config.hsts_max_age))
            .unwrap_or_default();

        [
            ("content-security-policy", config.csp.as_str()),
            ("strict-transport-security", hsts.as_str()),
            ("x-frame-options", config.x_frame_options.as_str()),
            ("x-content-type-options", config.x_content_type_options.as_str()),
            ("referrer-policy", config.referrer_policy.as_str()),
            ("x-permitted-cross-domain-policies", "none"),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .filter_map(|(name, value)| match HeaderValue::from_str(value) {
            Ok(value) => Some((HeaderName::from_static(name), value)),
            Err(e) => {
                ::tracing::warn!(header = name, error = %e, "Skipping invalid security header");
                None
            }
        })
        .collect()
    }
}

impl<S, B> Transform<S, ServiceRequest> for SecurityHeadersMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SecurityHeadersMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        let headers = if self.config.enabled {
            self.headers()
        } else {
            Vec::new()
        };

        ready(Ok(SecurityHeadersMiddlewareService {
            service,
            headers: Rc::new(headers),
        }))
    }
}

pub struct SecurityHeadersMiddlewareService<S> {
    service: S,
    headers: HeaderList,
}

impl<S, B> Service<ServiceRequest> for SecurityHeadersMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let headers = Rc::clone(&self.headers);
        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = fut.await?;

            for (name, value) in headers.iter() {
                res.headers_mut().insert(name.clone(), value.clone());
            }

            Ok(res)
        })
    }
}
