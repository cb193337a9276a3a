//! TestService: CRUD over the repository, plus request validation.

mod crud;
mod validation;
pub use crud::TestService;
pub use validation::{BodyFormat, RequestValidator};
