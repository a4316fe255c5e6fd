//! 出题 / 判题服务
//!
//! 两个操作都是同一条流水线：构建 prompt → 调用 LLM → 清洗并解析 JSON。
//! 任何一步失败都直接向上返回，不重试、不给默认值。

use std::sync::Arc;

use serde_json::Value as JsonValue;
use tracing::{debug, error, info};

use crate::clients::CompletionProvider;
use crate::error::{AppError, AppResult};
use crate::services::prompt_builder::{build_evaluation_prompt, build_generation_prompt};
use crate::services::response_normalizer::normalize;
use crate::utils::logging::truncate_text;

/// 出题 / 判题服务
///
/// 无可变状态，可在多个请求间共享
pub struct QuestionService {
    provider: Arc<dyn CompletionProvider>,
}

impl QuestionService {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    /// 当前使用的 LLM 后端名称
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// 生成题目
    ///
    /// `count == 1` 时返回单个题目对象，`count > 1` 时返回题目数组。
    /// 不校验返回数组的长度是否等于 `count`。
    pub async fn generate_question(
        &self,
        topic: &str,
        difficulty: &str,
        question_type: &str,
        count: u32,
    ) -> AppResult<JsonValue> {
        info!(
            "生成 {} 道题目: topic={}, difficulty={}, type={}",
            count, topic, difficulty, question_type
        );

        let prompt = build_generation_prompt(topic, difficulty, question_type, count);

        self.run(&prompt)
            .await
            .map_err(|e| log_failure("生成题目", e))
    }

    /// 判定学生答案
    pub async fn evaluate_answer(
        &self,
        user_answer: &str,
        expected_answer: &str,
        question_type: &str,
        tolerance: f64,
    ) -> AppResult<JsonValue> {
        info!(
            "判题: 学生答案={}, 标准答案={}",
            truncate_text(user_answer, 50),
            truncate_text(expected_answer, 50)
        );

        let prompt = build_evaluation_prompt(question_type, expected_answer, user_answer, tolerance);

        self.run(&prompt)
            .await
            .map_err(|e| log_failure("判题", e))
    }

    async fn run(&self, prompt: &str) -> AppResult<JsonValue> {
        debug!(
            "发送 prompt 到 {}，长度: {} 字符",
            self.provider.name(),
            prompt.len()
        );

        let raw_output = self.provider.complete(prompt).await?;
        info!("LLM 原始输出: {}", raw_output);

        Ok(normalize(&raw_output)?)
    }
}

/// 记录失败原因后原样返回
///
/// 解析失败已由 `normalize` 连同原始输出一起记录，这里只留 debug
fn log_failure(operation: &str, err: AppError) -> AppError {
    match &err {
        AppError::Parse(_) => debug!("{}失败: {}", operation, err),
        _ => error!("{}失败: {}", operation, err),
    }
    err
}
