//! In-process store evaluating the same filters as the SQL builder; backs the HTTP tests.

use super::TriviaStore;
use crate::error::AppError;
use crate::model::{Category, NewQuestion, Question};
use crate::selector::QuestionFilter;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default, Debug)]
struct Tables {
    categories: BTreeMap<i64, String>,
    questions: BTreeMap<i64, Question>,
    last_question_id: i64,
}

impl Tables {
    fn insert(&mut self, new: &NewQuestion) -> Question {
        self.last_question_id += 1;
        let q = Question {
            id: self.last_question_id,
            question: new.question.clone(),
            answer: new.answer.clone(),
            category: new.category,
            difficulty: new.difficulty,
        };
        self.questions.insert(q.id, q.clone());
        q
    }
}

#[derive(Default, Debug)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(self, id: i64, kind: &str) -> Self {
        if let Ok(mut t) = self.tables.write() {
            t.categories.insert(id, kind.to_string());
        }
        self
    }

    /// Synchronous insert for fixtures.
    pub fn seed_question(&self, new: NewQuestion) -> Result<Question, AppError> {
        Ok(self.write()?.insert(&new))
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, AppError> {
        self.tables
            .read()
            .map_err(|_| AppError::Internal("memory store lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, AppError> {
        self.tables
            .write()
            .map_err(|_| AppError::Internal("memory store lock poisoned".into()))
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn categories(&self) -> Result<Vec<Category>, AppError> {
        Ok(self
            .read()?
            .categories
            .iter()
            .map(|(id, kind)| Category {
                id: *id,
                kind: kind.clone(),
            })
            .collect())
    }

    async fn category(&self, id: i64) -> Result<Option<Category>, AppError> {
        Ok(self.read()?.categories.get(&id).map(|kind| Category {
            id,
            kind: kind.clone(),
        }))
    }

    async fn questions(&self, filter: &QuestionFilter) -> Result<Vec<Question>, AppError> {
        Ok(self
            .read()?
            .questions
            .values()
            .filter(|q| filter.matches(q))
            .cloned()
            .collect())
    }

    async fn question(&self, id: i64) -> Result<Option<Question>, AppError> {
        Ok(self.read()?.questions.get(&id).cloned())
    }

    async fn insert_question(&self, new: &NewQuestion) -> Result<Question, AppError> {
        Ok(self.write()?.insert(new))
    }

    async fn delete_question(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.write()?.questions.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.read().map(|_| ())
    }
}
