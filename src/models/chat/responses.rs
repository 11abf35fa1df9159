use serde::Serialize;

// 聊天助手回复，纯文本
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub text: String,
}
