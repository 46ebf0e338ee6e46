//! HTTP handlers for categories, questions and quizzes.

pub mod categories;
pub mod questions;
pub mod quizzes;
pub use categories::*;
pub use questions::*;
pub use quizzes::*;

use crate::error::AppError;

/// Ids are integer path segments; anything else names no resource.
fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::NotFound(format!("no resource at id '{}'", id_str)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_integer_ids_are_not_found() {
        assert_eq!(parse_id("12").unwrap(), 12);
        assert!(matches!(parse_id("abc"), Err(AppError::NotFound(_))));
        assert!(matches!(parse_id("1.5"), Err(AppError::NotFound(_))));
    }
}
