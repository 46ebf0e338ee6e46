//! Success envelopes. Every body carries `success: true`.

use crate::model::{CategoryMap, Question};
use serde::Serialize;

pub const ALL_CATEGORIES: &str = "All";

/// `{questions, total_questions, current_category}`, plus `categories` on the full list.
#[derive(Serialize, Debug)]
pub struct QuestionPage {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<CategoryMap>,
    pub current_category: String,
}

impl QuestionPage {
    pub fn new(page: &[Question], total_questions: usize, current_category: impl Into<String>) -> Self {
        QuestionPage {
            success: true,
            questions: page.to_vec(),
            total_questions,
            categories: None,
            current_category: current_category.into(),
        }
    }

    pub fn with_categories(mut self, categories: CategoryMap) -> Self {
        self.categories = Some(categories);
        self
    }
}

#[derive(Serialize, Debug)]
pub struct CategoryList {
    pub success: bool,
    pub categories: CategoryMap,
}

#[derive(Serialize, Debug)]
pub struct Deleted {
    pub success: bool,
    pub deleted: i64,
}

#[derive(Serialize, Debug)]
pub struct Created {
    pub success: bool,
    pub created: i64,
}

#[derive(Serialize, Debug)]
pub struct QuizQuestion {
    pub success: bool,
    pub question: Question,
}

pub fn category_list(categories: CategoryMap) -> CategoryList {
    CategoryList {
        success: true,
        categories,
    }
}

pub fn deleted(id: i64) -> Deleted {
    Deleted { success: true, deleted: id }
}

pub fn created(id: i64) -> Created {
    Created { success: true, created: id }
}

pub fn quiz_question(question: Question) -> QuizQuestion {
    QuizQuestion {
        success: true,
        question,
    }
}
