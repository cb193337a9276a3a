//! Response bodies for the test routes.

use crate::model::Test;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// GET /test body: `{"test": [...]}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TestList {
    pub test: Vec<Test>,
}

/// DELETE /test/:id body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteResult {
    #[schema(example = "success")]
    pub status: String,
    #[serde(rename = "how many deleted")]
    #[schema(example = 1)]
    pub deleted_count: u64,
}

impl DeleteResult {
    pub fn success(deleted_count: u64) -> Self {
        Self {
            status: "success".to_string(),
            deleted_count,
        }
    }
}
