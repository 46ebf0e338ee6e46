//! Request body validation for new questions.

use crate::deserializers::lenient_i64;
use crate::error::AppError;
use crate::model::NewQuestion;
use serde_json::{Map, Value};

pub struct RequestValidator;

impl RequestValidator {
    /// All four fields are required and none may be empty. `category` and
    /// `difficulty` must be positive integers (JSON numbers or numeric strings).
    pub fn new_question(body: &Value) -> Result<NewQuestion, AppError> {
        let fields = body
            .as_object()
            .ok_or_else(|| AppError::Validation("body must be a JSON object".into()))?;
        Ok(NewQuestion {
            question: required_text(fields, "question")?,
            answer: required_text(fields, "answer")?,
            category: required_positive_int(fields, "category")?,
            difficulty: required_positive_int(fields, "difficulty")?,
        })
    }

    /// Search term must be present and non-empty. Whitespace is kept; it is part of the substring.
    pub fn search_term(term: Option<&str>) -> Result<String, AppError> {
        match term {
            Some(t) if !t.is_empty() => Ok(t.to_string()),
            _ => Err(AppError::Validation("searchTerm is required".into())),
        }
    }
}

fn required<'a>(fields: &'a Map<String, Value>, name: &str) -> Result<&'a Value, AppError> {
    match fields.get(name) {
        None | Some(Value::Null) => Err(AppError::Validation(format!("{} is required", name))),
        Some(v) => Ok(v),
    }
}

fn required_text(fields: &Map<String, Value>, name: &str) -> Result<String, AppError> {
    let s = required(fields, name)?
        .as_str()
        .ok_or_else(|| AppError::Validation(format!("{} must be a string", name)))?;
    if s.trim().is_empty() {
        return Err(AppError::Validation(format!("{} must not be empty", name)));
    }
    Ok(s.to_string())
}

fn required_positive_int(fields: &Map<String, Value>, name: &str) -> Result<i64, AppError> {
    let v = required(fields, name)?;
    if v.as_str().is_some_and(|s| s.trim().is_empty()) {
        return Err(AppError::Validation(format!("{} must not be empty", name)));
    }
    match lenient_i64(v) {
        Some(n) if n > 0 => Ok(n),
        _ => Err(AppError::Validation(format!("{} must be a positive integer", name))),
    }
}
