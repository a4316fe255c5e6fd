use serde::{Deserialize, Serialize};

fn default_difficulty() -> String {
    "medium".to_string()
}

fn default_question_type() -> String {
    "open".to_string()
}

fn default_count() -> u32 {
    1
}

/// 出题请求
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerationRequest {
    /// 知识点
    pub topic: String,
    /// 难度，自由文本，如 easy / medium / hard
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
    /// 题型，如 open / multiple_choice
    #[serde(default = "default_question_type")]
    pub question_type: String,
    /// 题目数量，至少为 1
    #[serde(default = "default_count")]
    pub count: u32,
}

/// LLM 生成的题目
///
/// 仅描述期望的结构，服务本身不强制校验
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Question {
    pub content: String,
    pub expected_answer: String,
    pub explanation: String,
    #[serde(rename = "type")]
    pub question_type: String,
    /// 选择题为 4 个选项，其他题型为空
    #[serde(default)]
    pub options: Vec<String>,
}

/// 判题请求
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EvaluationRequest {
    /// 兼容旧客户端，不参与判题
    #[serde(default)]
    pub question_id: Option<String>,
    pub user_answer: String,
    pub expected_answer: String,
    pub question_type: String,
    /// 数值题的容差，缺省或 null 时为 0
    #[serde(default)]
    pub tolerance: Option<f64>,
}

impl EvaluationRequest {
    pub fn tolerance(&self) -> f64 {
        self.tolerance.unwrap_or(0.0)
    }
}

/// 判题结果
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EvaluationResult {
    /// 0 ~ 100
    pub score: u8,
    pub feedback: String,
    pub is_correct: bool,
}

/// 健康检查响应
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self { status: "healthy" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_generation_request_defaults() {
        let req: GenerationRequest = serde_json::from_value(json!({ "topic": "fractions" })).unwrap();
        assert_eq!(req.difficulty, "medium");
        assert_eq!(req.question_type, "open");
        assert_eq!(req.count, 1);
    }

    #[test]
    fn test_evaluation_request_null_tolerance() {
        let req: EvaluationRequest = serde_json::from_value(json!({
            "user_answer": "4",
            "expected_answer": "4",
            "question_type": "numeric",
            "tolerance": null
        }))
        .unwrap();
        assert_eq!(req.tolerance(), 0.0);
        assert!(req.question_id.is_none());
    }

    #[test]
    fn test_question_type_field_renamed() {
        let question: Question = serde_json::from_value(json!({
            "content": "What is 2 + 2?",
            "expected_answer": "4",
            "explanation": "2 + 2 = 4",
            "type": "multiple_choice",
            "options": ["3", "4", "5", "6"]
        }))
        .unwrap();
        assert_eq!(question.question_type, "multiple_choice");
        assert_eq!(question.options.len(), 4);
    }
}
