use thiserror::Error;

/// LLM 后端错误
///
/// 覆盖初始化失败、后端不可达、鉴权失败以及返回数据格式异常
#[derive(Debug, Error)]
pub enum ProviderError {
    /// 客户端初始化失败
    #[error("LLM 客户端初始化失败: {0}")]
    Init(String),

    /// 无法连接到后端
    #[error("无法连接 LLM 服务: {0}")]
    Unreachable(String),

    /// 后端返回非成功状态码
    #[error("LLM 服务返回错误状态 {status}: {body}")]
    Status { status: u16, body: String },

    /// API 调用失败（包括鉴权失败）
    #[error("LLM API 调用失败: {0}")]
    Api(String),

    /// 返回内容为空
    #[error("LLM 返回内容为空 (模型: {model})")]
    EmptyContent { model: String },

    /// 返回数据无法解析
    #[error("LLM 返回数据格式错误: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            ProviderError::Unreachable(err.to_string())
        } else if err.is_decode() {
            ProviderError::Malformed(err.to_string())
        } else {
            ProviderError::Api(err.to_string())
        }
    }
}

impl From<async_openai::error::OpenAIError> for ProviderError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        ProviderError::Api(err.to_string())
    }
}

/// 清洗后的文本不是合法 JSON
#[derive(Debug, Error)]
#[error("无法解析 LLM 输出为 JSON: {message}")]
pub struct ParseError {
    /// serde_json 给出的错误信息
    pub message: String,
    /// 去除代码块标记后的文本
    pub text: String,
}

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_keeps_inner_message() {
        let err: AppError = ProviderError::Unreachable("connection refused".to_string()).into();
        assert_eq!(err.to_string(), "无法连接 LLM 服务: connection refused");

        let err: AppError = ParseError {
            message: "expected value at line 1 column 1".to_string(),
            text: "not json".to_string(),
        }
        .into();
        assert!(err.to_string().contains("expected value"));
    }
}
