use serde::Serialize;

// 登录响应
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub expires_in: i64,
    pub username: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 令牌校验响应
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub username: String,
    pub expires_at: i64,
}

// 刷新令牌响应
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub access_token: String,
    pub expires_in: i64,
}
