//! Request extractors that turn raw input into typed values or an `AppError`.

pub mod object_body;
pub mod test_id;

pub use object_body::ObjectBody;
pub use test_id::TestId;
