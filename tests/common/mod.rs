//! Test support: in-memory repositories and a request helper for the full router.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use test_service::config::ServerConfig;
use test_service::{app, AppError, AppState, NewTest, Test, TestRepository, TestUpdate};
use tower::ServiceExt;

/// Stores rows in a vector; ids are assigned sequentially from 1.
#[derive(Default)]
pub struct MemoryRepository {
    rows: Mutex<Vec<Test>>,
    next_id: Mutex<i32>,
    writes: Mutex<usize>,
}

impl MemoryRepository {
    pub fn rows(&self) -> Vec<Test> {
        self.rows.lock().unwrap().clone()
    }

    /// Number of insert/update/delete calls that reached the repository.
    pub fn writes(&self) -> usize {
        *self.writes.lock().unwrap()
    }

    pub fn seed(&self, name: &str, courseid: i32) -> Test {
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        let row = Test {
            id: *next,
            name: name.to_string(),
            courseid,
            date: None,
            updatedat: None,
        };
        self.rows.lock().unwrap().push(row.clone());
        row
    }
}

#[async_trait]
impl TestRepository for MemoryRepository {
    async fn get_all_tests(&self) -> Result<Vec<Test>, AppError> {
        Ok(self.rows())
    }

    async fn get_test_by_id(&self, id: i32) -> Result<Option<Test>, AppError> {
        Ok(self.rows.lock().unwrap().iter().find(|t| t.id == id).cloned())
    }

    async fn insert_test(&self, test: &NewTest) -> Result<Test, AppError> {
        *self.writes.lock().unwrap() += 1;
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        let row = Test {
            id: *next,
            name: test.name.clone(),
            courseid: test.courseid,
            date: Some(test.date),
            updatedat: None,
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn update_test(&self, id: i32, test: &TestUpdate) -> Result<u64, AppError> {
        *self.writes.lock().unwrap() += 1;
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|t| t.id == id) {
            Some(row) => {
                row.name = test.name.clone();
                row.courseid = test.courseid;
                row.updatedat = Some(test.updatedat);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_test(&self, id: i32) -> Result<u64, AppError> {
        *self.writes.lock().unwrap() += 1;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|t| t.id != id);
        Ok((before - rows.len()) as u64)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Every call fails as if the database were unreachable.
pub struct FailingRepository;

#[async_trait]
impl TestRepository for FailingRepository {
    async fn get_all_tests(&self) -> Result<Vec<Test>, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn get_test_by_id(&self, _id: i32) -> Result<Option<Test>, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn insert_test(&self, _test: &NewTest) -> Result<Test, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn update_test(&self, _id: i32, _test: &TestUpdate) -> Result<u64, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn delete_test(&self, _id: i32) -> Result<u64, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }
}

pub fn router(repo: Arc<dyn TestRepository>) -> Router {
    router_with_config(repo, ServerConfig::default())
}

/// Full router with `config`; `static_dir` always points at the crate's `static/`.
pub fn router_with_config(repo: Arc<dyn TestRepository>, config: ServerConfig) -> Router {
    let config = ServerConfig {
        static_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/static").to_string(),
        ..config
    };
    app(AppState::new(repo), &config)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

pub async fn send(router: &Router, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
    let content_type = body.map(|_| "application/json");
    send_with(router, method, uri, content_type, body).await
}

pub async fn send_form(router: &Router, method: Method, uri: &str, body: &str) -> TestResponse {
    send_with(router, method, uri, Some("application/x-www-form-urlencoded"), Some(body)).await
}

pub async fn send_with(
    router: &Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: Option<&str>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    let request = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let location = response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();
    TestResponse { status, location, body }
}
