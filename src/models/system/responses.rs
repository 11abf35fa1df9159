use serde::Serialize;

// 健康检查响应，附带一次数据库探测
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    pub student_count: u64,
    pub uptime_seconds: i64,
    pub version: String,
}
