//! HTTP handlers for the test resource.

pub use test::*;
