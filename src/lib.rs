//! Test service: CRUD REST API for course test records backed by PostgreSQL.

pub mod config;
pub mod dal;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod logging;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use dal::{PgTestRepository, TestRepository};
pub use error::{AppError, ConfigError};
pub use model::{NewTest, Test, TestUpdate};
pub use routes::{app, ApiDoc};
pub use service::TestService;
pub use state::AppState;
pub use store::{connect, ensure_database_exists, ensure_test_table};
