//! # Math AI Service
//!
//! 通过 LLM 生成数学题目并判定学生答案的微服务
//!
//! ## 架构设计
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - 只暴露"发送 prompt，拿回文本"这一个能力
//! - `GroqClient` - 云端后端（配置了 `GROQ_API_KEY` 时使用）
//! - `OllamaClient` - 本地后端
//!
//! ### ② 业务能力层（Services）
//! - `prompt_builder` - 出题 / 判题模板
//! - `response_normalizer` - 去除代码块标记并解析 JSON
//! - `QuestionService` - 编排 prompt → LLM → JSON
//!
//! ### ③ 接口层（API）
//! - `api/` - axum 路由，内部错误统一映射为 500
//!
//! ## 模块结构

pub mod api;
pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use app::App;
pub use clients::{select_provider, CompletionProvider, GroqClient, OllamaClient};
pub use config::Config;
pub use error::{AppError, AppResult, ParseError, ProviderError};
pub use models::{EvaluationRequest, EvaluationResult, GenerationRequest, Question};
pub use services::QuestionService;
