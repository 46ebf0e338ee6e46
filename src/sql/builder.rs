//! Parameterized SELECTs for the trivia tables.

use super::params::BindValue;
use crate::selector::QuestionFilter;

pub const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
}

impl QueryBuf {
    fn new(sql: impl Into<String>) -> Self {
        QueryBuf {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: BindValue) -> usize {
        self.params.push(v);
        self.params.len()
    }
}

/// Escape LIKE wildcards so the term matches literally (backslash is the default escape).
fn like_pattern(term: &str) -> String {
    let mut out = String::with_capacity(term.len() + 2);
    out.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('%');
    out
}

/// SELECT questions matching `filter`, ordered by id.
pub fn select_questions(filter: &QuestionFilter) -> QueryBuf {
    let mut q = QueryBuf::new(format!("SELECT {} FROM questions", QUESTION_COLUMNS));
    let mut clauses: Vec<String> = Vec::new();
    match filter {
        QuestionFilter::All => {}
        QuestionFilter::Search(term) => {
            let n = q.push_param(BindValue::Text(like_pattern(term)));
            clauses.push(format!("question ILIKE ${}", n));
        }
        QuestionFilter::Category(id) => {
            let n = q.push_param(BindValue::Int(*id));
            clauses.push(format!("category = ${}", n));
        }
        QuestionFilter::Quiz { category, exclude } => {
            if let Some(id) = category {
                let n = q.push_param(BindValue::Int(*id));
                clauses.push(format!("category = ${}", n));
            }
            if !exclude.is_empty() {
                let n = q.push_param(BindValue::IntList(exclude.clone()));
                clauses.push(format!("id <> ALL(${})", n));
            }
        }
    }
    if !clauses.is_empty() {
        q.sql.push_str(" WHERE ");
        q.sql.push_str(&clauses.join(" AND "));
    }
    q.sql.push_str(" ORDER BY id");
    q
}

pub fn select_question_by_id() -> QueryBuf {
    QueryBuf::new(format!("SELECT {} FROM questions WHERE id = $1", QUESTION_COLUMNS))
}

pub fn insert_question() -> QueryBuf {
    QueryBuf::new(format!(
        "INSERT INTO questions (question, answer, category, difficulty) VALUES ($1, $2, $3, $4) RETURNING {}",
        QUESTION_COLUMNS
    ))
}

pub fn delete_question() -> QueryBuf {
    QueryBuf::new("DELETE FROM questions WHERE id = $1 RETURNING id")
}

pub fn select_categories() -> QueryBuf {
    QueryBuf::new(r#"SELECT id, "type" FROM categories ORDER BY id"#)
}

pub fn select_category_by_id() -> QueryBuf {
    QueryBuf::new(r#"SELECT id, "type" FROM categories WHERE id = $1"#)
}
