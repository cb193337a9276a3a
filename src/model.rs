//! Test record and the typed payloads written to the `test` table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of the `test` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Test {
    /// Generated by storage.
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Kim")]
    pub name: String,
    #[schema(example = 123)]
    pub courseid: i32,
    /// Set when the record is created.
    pub date: Option<DateTime<Utc>>,
    /// Set on every update.
    pub updatedat: Option<DateTime<Utc>>,
}

/// Columns written on insert.
#[derive(Clone, Debug, PartialEq)]
pub struct NewTest {
    pub name: String,
    pub courseid: i32,
    pub date: DateTime<Utc>,
}

/// Columns written on update. Always a full set: the patch is merged before the write.
#[derive(Clone, Debug, PartialEq)]
pub struct TestUpdate {
    pub name: String,
    pub courseid: i32,
    pub updatedat: DateTime<Utc>,
}

/// Validated body of POST /test.
#[derive(Clone, Debug, PartialEq, Deserialize, ToSchema)]
pub struct CreateTest {
    #[schema(example = "Kim")]
    pub name: String,
    #[schema(example = 123)]
    pub courseid: i32,
}

/// Validated body of PUT /test/:id. `None` keeps the stored value.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, ToSchema)]
pub struct TestPatch {
    pub name: Option<String>,
    pub courseid: Option<i32>,
}

impl CreateTest {
    pub fn into_new(self, now: DateTime<Utc>) -> NewTest {
        NewTest {
            name: self.name,
            courseid: self.courseid,
            date: now,
        }
    }
}

impl TestPatch {
    /// Merge onto the stored row.
    pub fn merge(self, existing: &Test, now: DateTime<Utc>) -> TestUpdate {
        TestUpdate {
            name: self.name.unwrap_or_else(|| existing.name.clone()),
            courseid: self.courseid.unwrap_or(existing.courseid),
            updatedat: now,
        }
    }
}
