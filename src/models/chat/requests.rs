use serde::Deserialize;

// 聊天助手请求
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub query: String,
}
