//! Postboard - 帖子 CRUD 服务

use std::sync::Arc;

use postboard::config::{load_config, print_config, LogConfig};
use postboard::infrastructure::http::{AppState, HttpServer, ServerConfig};
use postboard::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqlitePostRepository,
};
use tracing_subscriber::EnvFilter;

fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},postboard={},tower_http=debug", log.level, log.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Postboard - post CRUD service");
    print_config(&config);

    // 确保数据目录存在
    if !config.database.is_in_memory() {
        if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    // 初始化数据库
    let db_config = DatabaseConfig {
        database_url: config.database.database_url(),
        max_connections: config.database.effective_max_connections(),
    };
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;

    let post_repo = Arc::new(SqlitePostRepository::new(pool.clone()));

    let server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_max_body_bytes(config.server.max_body_bytes);
    let server = HttpServer::new(server_config, AppState::new(post_repo));

    tracing::info!("Starting HTTP server...");

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    pool.close().await;
    tracing::info!("Server shutdown complete");

    Ok(())
}
