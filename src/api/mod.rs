//! HTTP 接口模块
//!
//! 通过 axum 对外暴露出题、判题和健康检查接口

mod error;
mod routes;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::services::QuestionService;

pub use error::ApiError;

/// 构建路由
///
/// ```text
/// POST /generate
/// POST /evaluate
/// GET  /health
/// ```
pub fn router(service: Arc<QuestionService>) -> Router {
    Router::new()
        .route("/generate", post(routes::generate))
        .route("/evaluate", post(routes::evaluate))
        .route("/health", get(routes::health))
        .with_state(service)
}
