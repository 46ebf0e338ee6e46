//! Trivia API: questions, categories and quizzes over PostgreSQL.

pub mod config;
pub mod deserializers;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod migration;
pub mod model;
pub mod pagination;
pub mod response;
pub mod routes;
pub mod selector;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use migration::{ensure_schema, seed_categories};
pub use model::{Category, NewQuestion, Question};
pub use pagination::{paginate, QUESTIONS_PER_PAGE};
pub use routes::{app, common_routes, trivia_routes};
pub use selector::QuestionFilter;
pub use service::TriviaService;
pub use state::AppState;
pub use store::{MemoryStore, PgStore, TriviaStore};
