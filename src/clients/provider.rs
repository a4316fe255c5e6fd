//! LLM 后端抽象
//!
//! 云端（Groq）和本地（Ollama）两种后端对外只暴露一个能力：
//! 发送 prompt，拿回纯文本补全结果。

use std::sync::Arc;

use futures::future::BoxFuture;
use tracing::{error, info};

use crate::clients::{GroqClient, OllamaClient};
use crate::config::Config;
use crate::error::ProviderError;

/// 文本补全能力
///
/// 各实现自行处理后端的响应结构，返回去除首尾空白的纯文本
pub trait CompletionProvider: Send + Sync {
    /// 后端名称，仅用于日志
    fn name(&self) -> &'static str;

    /// 使用的模型名称
    fn model(&self) -> &str;

    /// 发送 prompt，返回补全文本
    fn complete<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, Result<String, ProviderError>>;
}

/// 根据配置选择 LLM 后端
///
/// - 配置了 `GROQ_API_KEY`：使用 Groq，初始化失败时回退到 Ollama
/// - 未配置：直接使用本地 Ollama
///
/// 只在启动时调用一次，结果在整个进程生命周期内不变
pub fn select_provider(config: &Config) -> Arc<dyn CompletionProvider> {
    let provider: Arc<dyn CompletionProvider> = match config.groq_api_key.as_deref() {
        Some(api_key) => match GroqClient::new(api_key, &config.groq_api_base_url) {
            Ok(client) => Arc::new(client),
            Err(e) => {
                error!("Groq 初始化失败: {}，回退到 Ollama", e);
                Arc::new(OllamaClient::new(&config.ollama_base_url))
            }
        },
        None => Arc::new(OllamaClient::new(&config.ollama_base_url)),
    };

    info!(
        "LLM 后端已初始化: {} (模型: {})",
        provider.name(),
        provider.model()
    );

    provider
}
