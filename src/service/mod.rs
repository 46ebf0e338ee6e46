//! TriviaService: per-endpoint query selection and response shaping.

mod trivia;
mod validation;
pub use trivia::TriviaService;
pub use validation::RequestValidator;
