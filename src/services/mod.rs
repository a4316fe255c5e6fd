pub mod prompt_builder;
pub mod question_service;
pub mod response_normalizer;

pub use question_service::QuestionService;
pub use response_normalizer::normalize;
