pub mod groq_client;
pub mod ollama_client;
pub mod provider;

pub use groq_client::GroqClient;
pub use ollama_client::OllamaClient;
pub use provider::{select_provider, CompletionProvider};
