//! Data access for the `test` table: one round trip per operation, no transactions.

mod test_repo;
pub use test_repo::{PgTestRepository, TestRepository, TEST_TABLE};
