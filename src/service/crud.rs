//! CRUD for test records on top of a `TestRepository`.

use crate::dal::TestRepository;
use crate::error::AppError;
use crate::model::{CreateTest, Test, TestPatch};
use chrono::Utc;

pub struct TestService;

impl TestService {
    pub async fn list(repo: &dyn TestRepository) -> Result<Vec<Test>, AppError> {
        repo.get_all_tests().await
    }

    /// `None` when no row has this id.
    pub async fn read(repo: &dyn TestRepository, id: i32) -> Result<Option<Test>, AppError> {
        repo.get_test_by_id(id).await
    }

    /// Insert with `date` set to now. Returns the stored row.
    pub async fn create(repo: &dyn TestRepository, input: CreateTest) -> Result<Test, AppError> {
        let new = input.into_new(Utc::now());
        repo.insert_test(&new).await
    }

    /// Read, merge the patch over the stored row, write with `updatedat` set to now.
    /// Not atomic: a concurrent update between the read and the write is overwritten.
    pub async fn update(repo: &dyn TestRepository, id: i32, patch: TestPatch) -> Result<(), AppError> {
        let existing = repo
            .get_test_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;
        let update = patch.merge(&existing, Utc::now());
        let affected = repo.update_test(id, &update).await?;
        if affected == 0 {
            return Err(AppError::NotFound(id.to_string()));
        }
        Ok(())
    }

    /// Number of rows removed (0 or 1).
    pub async fn delete(repo: &dyn TestRepository, id: i32) -> Result<u64, AppError> {
        repo.delete_test(id).await
    }
}
