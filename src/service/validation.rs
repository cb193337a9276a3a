//! Request validation: decoded object bodies to typed create/patch payloads.

use crate::error::AppError;
use crate::model::{CreateTest, TestPatch};
use serde_json::{Map, Value};

/// Wire format the body arrived in. Form values are always strings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BodyFormat {
    #[default]
    Json,
    Form,
}

pub struct RequestValidator;

impl RequestValidator {
    /// POST body. `name` and `courseid` must be present and non-null.
    pub fn validate_create(body: &Map<String, Value>, format: BodyFormat) -> Result<CreateTest, AppError> {
        let name = required(body, "name").and_then(as_name)?;
        let courseid = required(body, "courseid").and_then(|v| as_courseid(v, format))?;
        Ok(CreateTest { name, courseid })
    }

    /// PUT body. Absent and null fields are both left as `None`.
    pub fn validate_patch(body: &Map<String, Value>, format: BodyFormat) -> Result<TestPatch, AppError> {
        let name = present(body, "name").map(as_name).transpose()?;
        let courseid = present(body, "courseid")
            .map(|v| as_courseid(v, format))
            .transpose()?;
        Ok(TestPatch { name, courseid })
    }
}

fn present<'a>(body: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    body.get(field).filter(|v| !v.is_null())
}

fn required<'a>(body: &'a Map<String, Value>, field: &str) -> Result<&'a Value, AppError> {
    present(body, field).ok_or_else(|| AppError::Validation(format!("{} is required", field)))
}

fn as_name(v: &Value) -> Result<String, AppError> {
    v.as_str()
        .map(str::to_string)
        .ok_or_else(|| AppError::Validation("name must be a string".into()))
}

fn as_courseid(v: &Value, format: BodyFormat) -> Result<i32, AppError> {
    let parsed = match (v, format) {
        (Value::String(s), BodyFormat::Form) => s.trim().parse().ok(),
        _ => v.as_i64().and_then(|n| i32::try_from(n).ok()),
    };
    parsed.ok_or_else(|| AppError::Validation("courseid must be a 32-bit integer".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn test_create_accepts_complete_body() {
        let body = obj(json!({"name": "Kim", "courseid": 123, "extra": true}));
        let t = RequestValidator::validate_create(&body, BodyFormat::Json).unwrap();
        assert_eq!(t.name, "Kim");
        assert_eq!(t.courseid, 123);
    }

    #[test]
    fn test_create_requires_both_fields() {
        let err = RequestValidator::validate_create(&obj(json!({"courseid": 1})), BodyFormat::Json).unwrap_err();
        assert_eq!(err.to_string(), "name is required");
        let body = obj(json!({"name": "Kim", "courseid": null}));
        let err = RequestValidator::validate_create(&body, BodyFormat::Json).unwrap_err();
        assert_eq!(err.to_string(), "courseid is required");
    }

    #[test]
    fn test_create_rejects_wrong_types() {
        let bad = [
            json!({"name": 5, "courseid": 1}),
            json!({"name": "a", "courseid": "1"}),
            json!({"name": "a", "courseid": 1.5}),
            json!({"name": "a", "courseid": 4_000_000_000i64}),
        ];
        for body in bad {
            assert!(RequestValidator::validate_create(&obj(body.clone()), BodyFormat::Json).is_err(), "{body}");
        }
    }

    #[test]
    fn test_form_courseid_is_parsed_from_string() {
        let body = obj(json!({"name": "Kim", "courseid": " 123 "}));
        let t = RequestValidator::validate_create(&body, BodyFormat::Form).unwrap();
        assert_eq!(t.courseid, 123);

        let body = obj(json!({"name": "Kim", "courseid": "abc"}));
        assert!(RequestValidator::validate_create(&body, BodyFormat::Form).is_err());
    }

    #[test]
    fn test_patch_treats_null_as_absent() {
        let p = RequestValidator::validate_patch(&obj(json!({"name": null, "courseid": 9})), BodyFormat::Json).unwrap();
        assert_eq!(p, TestPatch { name: None, courseid: Some(9) });
        let p = RequestValidator::validate_patch(&Map::new(), BodyFormat::Json).unwrap();
        assert_eq!(p, TestPatch::default());
    }

    #[test]
    fn test_patch_still_checks_types() {
        let err = RequestValidator::validate_patch(&obj(json!({"name": ["x"]})), BodyFormat::Json).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
