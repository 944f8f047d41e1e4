use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use admin_index::{
    AppState,
    cache::{CacheStore, MemoryCacheStore, RedisCacheStore},
    config::{Config, SysConfig},
    router::create_router,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 加载配置
    let config = Config::from_env().expect("Failed to load configuration");
    let sys_config = SysConfig::from_env();
    tracing::debug!("System parameters: {:?}", sys_config);

    // 设置缓存后端
    let store: Arc<dyn CacheStore> = match &config.redis_url {
        Some(url) => {
            let redis_client =
                redis::Client::open(url.as_str()).expect("Failed to create Redis client");
            tracing::info!("Using Redis cache store");
            Arc::new(RedisCacheStore::new(Arc::new(redis_client)))
        }
        None => {
            tracing::warn!("REDIS_URL not set, falling back to in-memory cache store");
            Arc::new(MemoryCacheStore::new())
        }
    };

    // 设置应用状态
    let state = AppState::new(config.clone(), sys_config, store);
    let router = create_router(state);

    // 根据编译模式决定是否添加CORS
    #[cfg(debug_assertions)]
    let router = {
        tracing::debug!("Adding CORS layer for development mode");
        router.layer(tower_http::cors::CorsLayer::permissive())
    };

    // 启动服务器
    let addr = SocketAddr::new(
        config.server_host.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid server_host, falling back to dual-stack default");
            IpAddr::V6(std::net::Ipv6Addr::UNSPECIFIED)
        }),
        config.server_port,
    );
    tracing::info!("Server listening on {}", addr);
    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        router,
    )
    .await
    .expect("Failed to start server");
}
