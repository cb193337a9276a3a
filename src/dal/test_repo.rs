//! `TestRepository` and its PostgreSQL implementation.

use crate::error::AppError;
use crate::model::{NewTest, Test, TestUpdate};
use async_trait::async_trait;
use sqlx::PgPool;

pub const TEST_TABLE: &str = "test";

const COLUMNS: &str = "id, name, courseid, date, updatedat";

fn select_all_sql() -> String {
    format!("SELECT {} FROM {} ORDER BY id", COLUMNS, TEST_TABLE)
}

fn select_by_id_sql() -> String {
    format!("SELECT {} FROM {} WHERE id = $1", COLUMNS, TEST_TABLE)
}

/// Binds: name, date, courseid.
fn insert_sql() -> String {
    format!(
        "INSERT INTO {} (name, date, courseid) VALUES ($1, $2, $3) RETURNING {}",
        TEST_TABLE, COLUMNS
    )
}

/// Binds: name, courseid, updatedat, id.
fn update_sql() -> String {
    format!(
        "UPDATE {} SET name = $1, courseid = $2, updatedat = $3 WHERE id = $4",
        TEST_TABLE
    )
}

fn delete_sql() -> String {
    format!("DELETE FROM {} WHERE id = $1", TEST_TABLE)
}

/// Record-level operations on the `test` table.
///
/// Missing rows are not errors: reads return `None`, writes return the number
/// of rows affected.
#[async_trait]
pub trait TestRepository: Send + Sync {
    async fn get_all_tests(&self) -> Result<Vec<Test>, AppError>;

    async fn get_test_by_id(&self, id: i32) -> Result<Option<Test>, AppError>;

    /// Insert and return the stored row, including its generated id.
    async fn insert_test(&self, test: &NewTest) -> Result<Test, AppError>;

    async fn update_test(&self, id: i32, test: &TestUpdate) -> Result<u64, AppError>;

    async fn delete_test(&self, id: i32) -> Result<u64, AppError>;

    /// Cheap connectivity check for readiness.
    async fn ping(&self) -> Result<(), AppError>;
}

#[derive(Clone)]
pub struct PgTestRepository {
    pool: PgPool,
}

impl PgTestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TestRepository for PgTestRepository {
    async fn get_all_tests(&self) -> Result<Vec<Test>, AppError> {
        let sql = select_all_sql();
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Test>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn get_test_by_id(&self, id: i32) -> Result<Option<Test>, AppError> {
        let sql = select_by_id_sql();
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Test>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert_test(&self, test: &NewTest) -> Result<Test, AppError> {
        let sql = insert_sql();
        tracing::debug!(sql = %sql, params = ?test, "query");
        let row = sqlx::query_as::<_, Test>(&sql)
            .bind(&test.name)
            .bind(test.date)
            .bind(test.courseid)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update_test(&self, id: i32, test: &TestUpdate) -> Result<u64, AppError> {
        let sql = update_sql();
        tracing::debug!(sql = %sql, id, params = ?test, "query");
        let result = sqlx::query(&sql)
            .bind(&test.name)
            .bind(test.courseid)
            .bind(test.updatedat)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete_test(&self, id: i32) -> Result<u64, AppError> {
        let sql = delete_sql();
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
