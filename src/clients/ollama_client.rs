//! 本地 Ollama 客户端
//!
//! 调用 `/api/generate` 非流式接口，返回 `response` 字段中的纯文本
use futures::future::BoxFuture;
use futures::FutureExt;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::clients::CompletionProvider;
use crate::error::ProviderError;

/// 固定使用的本地模型
pub const OLLAMA_MODEL: &str = "llama3";

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Ollama 客户端
pub struct OllamaClient {
    http: reqwest::Client,
    base_url: String,
    model_name: String,
}

impl OllamaClient {
    /// 创建新的 Ollama 客户端
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model_name: OLLAMA_MODEL.to_string(),
        }
    }

    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let url = format!("{}/api/generate", self.base_url);
        debug!("调用 Ollama API: {}，模型: {}", url, self.model_name);

        let body = GenerateRequest {
            model: &self.model_name,
            prompt,
            stream: false,
        };

        let resp = self.http.post(&url).json(&body).send().await.map_err(|e| {
            warn!("Ollama 请求失败: {}", e);
            ProviderError::from(e)
        })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_else(|e| format!("<读取响应体失败: {}>", e));
            warn!("Ollama 返回错误状态 {}: {}", status, body);
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let data: GenerateResponse = resp
            .json()
            .await
            .map_err(|e| ProviderError::Malformed(e.to_string()))?;

        debug!("Ollama API 调用成功");

        Ok(data.response.trim().to_string())
    }
}

impl CompletionProvider for OllamaClient {
    fn name(&self) -> &'static str {
        "ollama"
    }

    fn model(&self) -> &str {
        &self.model_name
    }

    fn complete<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, Result<String, ProviderError>> {
        self.generate(prompt).boxed()
    }
}
