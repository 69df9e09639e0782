//! ScenePrompt - 韩剧脚本卡片与场景图片提示词工具
//!
//! - Domain: script/, prompt/
//! - Application: commands, queries, ports
//! - Infrastructure: http, memory

use std::sync::Arc;

use sceneprompt::config::{load_config, print_config};
use sceneprompt::infrastructure::http::{AppState, HttpServer, ServerConfig};
use sceneprompt::infrastructure::memory::InMemoryRemovalWordStore;

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for ctrl-c");
        return;
    }
    tracing::info!("Received shutdown signal");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},sceneprompt={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("ScenePrompt - 脚本卡片 / 场景提示词");
    print_config(&config);

    let removal_words = Arc::new(InMemoryRemovalWordStore::new());
    let state = AppState::new(removal_words, config.parser.card_config());

    let server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_max_body_bytes(config.server.max_body_bytes);
    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server.run_with_shutdown(shutdown_signal()).await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
