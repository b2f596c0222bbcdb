#[macro_use]
extern crate actix_web;

pub mod api;
pub mod config;
pub mod controllers;
pub mod error;
pub mod metrics;
pub mod middlewares;
pub mod models;
pub mod repositories;
pub mod requests;
pub mod responses;
pub mod router;
pub mod security;
pub mod services;
pub mod session;
pub mod state;
pub mod views;

// Testing utilities (always available for integration tests)
pub mod testing;

pub use error::{Error, Validation};
pub use metrics::AppMetrics;
pub use middlewares::Auth;
pub use repositories::{MemoryUserRepository, UserRepository};
pub use security::SecurityHeadersMiddleware;
pub use session::{Session, SessionStore};
pub use state::AppState;
