use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::api;
use crate::clients::select_provider;
use crate::config::Config;
use crate::services::QuestionService;
use crate::utils::logging::log_startup;

/// 应用主结构
pub struct App {
    config: Config,
    service: Arc<QuestionService>,
}

impl App {
    /// 初始化应用
    ///
    /// LLM 后端在这里选定，之后不再变化
    pub fn initialize(config: Config) -> Self {
        let provider = select_provider(&config);
        let service = Arc::new(QuestionService::new(provider));

        Self { config, service }
    }

    /// 启动 HTTP 服务，直到收到 Ctrl-C
    pub async fn run(self) -> Result<()> {
        let bind_addr = self.config.bind_addr();
        log_startup(&bind_addr, self.service.provider_name());

        let listener = TcpListener::bind(&bind_addr)
            .await
            .with_context(|| format!("无法监听地址: {}", bind_addr))?;

        axum::serve(listener, api::router(self.service))
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP 服务异常退出")?;

        info!("服务已停止");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("无法监听 Ctrl-C 信号: {}", e);
        std::future::pending::<()>().await;
    }
    info!("收到退出信号，正在关闭服务...");
}
