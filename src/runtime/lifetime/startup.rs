use std::sync::Arc;

use tracing::warn;

use crate::cache::MokaCacheWrapper;
use crate::storage::Storage;

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<MokaCacheWrapper>,
}

/// 准备服务器启动的上下文
/// 包括存储后端和进程内缓存
pub async fn prepare_server_startup() -> StartupContext {
    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    let cache = Arc::new(MokaCacheWrapper::new());
    warn!("In-memory cache initialized");

    StartupContext { storage, cache }
}
