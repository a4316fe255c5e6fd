/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 监听地址
    pub server_host: String,
    /// 监听端口
    pub server_port: u16,
    /// 日志级别（RUST_LOG 优先）
    pub log_level: String,
    // --- LLM 配置 ---
    /// Groq API 密钥，存在时使用云端模型
    pub groq_api_key: Option<String>,
    pub groq_api_base_url: String,
    /// 本地 Ollama 服务地址
    pub ollama_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 8000,
            log_level: "info".to_string(),
            groq_api_key: None,
            groq_api_base_url: "https://api.groq.com/openai/v1".to_string(),
            ollama_base_url: "http://localhost:11434".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            server_host: std::env::var("SERVER_HOST").unwrap_or(default.server_host),
            server_port: std::env::var("SERVER_PORT").ok().and_then(|v| v.parse().ok()).unwrap_or(default.server_port),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(default.log_level),
            // 空字符串视为未配置
            groq_api_key: std::env::var("GROQ_API_KEY").ok().filter(|v| !v.trim().is_empty()),
            groq_api_base_url: std::env::var("GROQ_API_BASE_URL").unwrap_or(default.groq_api_base_url),
            ollama_base_url: std::env::var("OLLAMA_BASE_URL").unwrap_or(default.ollama_base_url),
        }
    }

    /// 服务绑定地址，形如 `0.0.0.0:8000`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
        assert!(config.groq_api_key.is_none());
        assert_eq!(config.ollama_base_url, "http://localhost:11434");
    }
}
