//! Domain rows and request bodies.

use crate::deserializers::{deserialize_lenient_i64, deserialize_lenient_i64_list};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

impl From<(i64, String, String, i64, i64)> for Question {
    fn from((id, question, answer, category, difficulty): (i64, String, String, i64, i64)) -> Self {
        Question {
            id,
            question,
            answer,
            category,
            difficulty,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Categories keyed by id, as the client expects them (`{"1": "Science"}`).
pub type CategoryMap = BTreeMap<i64, String>;

pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

/// A question that passed validation and is ready to insert.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "deserialize_lenient_i64")]
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
    #[serde(default, deserialize_with = "deserialize_lenient_i64_list")]
    pub previous_questions: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_serializes_kind_as_type() {
        let c = Category {
            id: 1,
            kind: "Science".into(),
        };
        assert_eq!(
            serde_json::to_value(&c).unwrap(),
            serde_json::json!({"id": 1, "type": "Science"})
        );
    }

    #[test]
    fn category_map_keys_become_json_strings() {
        let map = category_map(vec![
            Category { id: 2, kind: "Art".into() },
            Category { id: 1, kind: "Science".into() },
        ]);
        assert_eq!(
            serde_json::to_value(&map).unwrap(),
            serde_json::json!({"1": "Science", "2": "Art"})
        );
    }

    #[test]
    fn quiz_request_accepts_form_style_ids() {
        let req: QuizRequest = serde_json::from_value(serde_json::json!({
            "quiz_category": {"type": "Science", "id": "1"},
            "previous_questions": [4, "9"]
        }))
        .unwrap();
        assert_eq!(req.quiz_category.unwrap().id, 1);
        assert_eq!(req.previous_questions, vec![4, 9]);
    }

    #[test]
    fn quiz_request_defaults_previous_questions() {
        let req: QuizRequest =
            serde_json::from_value(serde_json::json!({"quiz_category": {"id": 0}})).unwrap();
        assert!(req.previous_questions.is_empty());
    }
}
