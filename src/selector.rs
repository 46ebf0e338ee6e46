//! Fixed per-endpoint question predicates and quiz draw.

use crate::model::Question;
use rand::seq::SliceRandom;
use rand::Rng;

/// Category id that stands for "any category" in quiz requests.
pub const ANY_CATEGORY: i64 = 0;

/// Which questions an endpoint wants. Stores return matches ordered by id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuestionFilter {
    All,
    /// Case-insensitive substring of the question text.
    Search(String),
    Category(i64),
    /// `category: None` matches every category.
    Quiz {
        category: Option<i64>,
        exclude: Vec<i64>,
    },
}

impl QuestionFilter {
    pub fn quiz(category_id: i64, previous_questions: Vec<i64>) -> Self {
        QuestionFilter::Quiz {
            category: (category_id != ANY_CATEGORY).then_some(category_id),
            exclude: previous_questions,
        }
    }

    pub fn matches(&self, q: &Question) -> bool {
        match self {
            QuestionFilter::All => true,
            QuestionFilter::Search(term) => q.question.to_lowercase().contains(&term.to_lowercase()),
            QuestionFilter::Category(id) => q.category == *id,
            QuestionFilter::Quiz { category, exclude } => {
                category.map_or(true, |c| q.category == c) && !exclude.contains(&q.id)
            }
        }
    }
}

/// Uniform draw; `None` once every candidate has been used up.
pub fn pick_random<'a, R: Rng + ?Sized>(candidates: &'a [Question], rng: &mut R) -> Option<&'a Question> {
    candidates.choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn q(id: i64, text: &str, category: i64) -> Question {
        Question {
            id,
            question: text.into(),
            answer: "a".into(),
            category,
            difficulty: 1,
        }
    }

    #[test]
    fn search_ignores_case() {
        let f = QuestionFilter::Search("american".into());
        assert!(f.matches(&q(1, "Which American president?", 4)));
        assert!(!f.matches(&q(2, "Which river?", 3)));
        assert!(QuestionFilter::Search("RIVER".into()).matches(&q(2, "Which river?", 3)));
    }

    #[test]
    fn sentinel_category_means_any() {
        assert_eq!(
            QuestionFilter::quiz(0, vec![]),
            QuestionFilter::Quiz { category: None, exclude: vec![] }
        );
        let f = QuestionFilter::quiz(0, vec![2]);
        assert!(f.matches(&q(1, "x", 5)));
        assert!(!f.matches(&q(2, "x", 5)));
    }

    #[test]
    fn quiz_filter_combines_category_and_exclusion() {
        let f = QuestionFilter::quiz(3, vec![1]);
        assert!(!f.matches(&q(1, "x", 3)));
        assert!(f.matches(&q(2, "x", 3)));
        assert!(!f.matches(&q(3, "x", 4)));
    }

    #[test]
    fn draw_stays_within_candidates() {
        let mut rng = StdRng::seed_from_u64(7);
        let pool = vec![q(1, "x", 1), q(2, "y", 1), q(3, "z", 1)];
        for _ in 0..50 {
            let picked = pick_random(&pool, &mut rng).unwrap();
            assert!(pool.contains(picked));
        }
        assert!(pick_random(&[], &mut rng).is_none());
    }
}
