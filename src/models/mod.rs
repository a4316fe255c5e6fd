pub mod question;

pub use question::{EvaluationRequest, EvaluationResult, GenerationRequest, HealthStatus, Question};
