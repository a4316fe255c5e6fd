//! Groq 云端客户端
//!
//! Groq 提供兼容 OpenAI 的接口，直接复用 `async-openai` 调用

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use futures::future::BoxFuture;
use futures::FutureExt;
use reqwest::header::HeaderValue;
use tracing::{debug, warn};

use crate::clients::CompletionProvider;
use crate::error::ProviderError;

/// 固定使用的云端模型
pub const GROQ_MODEL: &str = "llama-3.3-70b-versatile";

/// Groq 客户端
pub struct GroqClient {
    client: Client<OpenAIConfig>,
    model_name: String,
}

impl GroqClient {
    /// 创建新的 Groq 客户端
    ///
    /// 密钥无法作为请求头、或 API 地址无法解析时返回 `ProviderError::Init`
    pub fn new(api_key: &str, api_base_url: &str) -> Result<Self, ProviderError> {
        HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|e| ProviderError::Init(format!("API 密钥格式无效: {}", e)))?;

        let url = reqwest::Url::parse(api_base_url)
            .map_err(|e| ProviderError::Init(format!("API 地址无效 '{}': {}", api_base_url, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ProviderError::Init(format!(
                "API 地址协议不受支持: {}",
                url.scheme()
            )));
        }

        let openai_config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(api_base_url.trim_end_matches('/'));

        Ok(Self {
            client: Client::with_config(openai_config),
            model_name: GROQ_MODEL.to_string(),
        })
    }

    async fn send_to_llm(&self, prompt: &str) -> Result<String, ProviderError> {
        debug!("调用 Groq API，模型: {}", self.model_name);

        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .messages(vec![ChatCompletionRequestMessage::User(user_msg)])
            .temperature(0.0)
            .build()?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            warn!("Groq API 调用失败: {}", e);
            ProviderError::from(e)
        })?;

        debug!("Groq API 调用成功");

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| ProviderError::EmptyContent {
                model: self.model_name.clone(),
            })?;

        Ok(content.trim().to_string())
    }
}

impl CompletionProvider for GroqClient {
    fn name(&self) -> &'static str {
        "groq"
    }

    fn model(&self) -> &str {
        &self.model_name
    }

    fn complete<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, Result<String, ProviderError>> {
        self.send_to_llm(prompt).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_non_http_scheme() {
        let result = GroqClient::new("gsk_test", "ftp://api.groq.com/openai/v1");
        assert!(matches!(result, Err(ProviderError::Init(_))));
    }

    #[test]
    fn test_new_uses_fixed_model() {
        let client = GroqClient::new("gsk_test", "https://api.groq.com/openai/v1").unwrap();
        assert_eq!(client.model(), GROQ_MODEL);
    }
}
