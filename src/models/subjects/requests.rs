use serde::Deserialize;

fn default_credit_hour() -> f64 {
    4.0
}

// 科目创建请求
#[derive(Debug, Deserialize)]
pub struct CreateSubjectRequest {
    pub name: String,
    pub code: String,
    pub stream: Option<String>,
    #[serde(default = "default_credit_hour")]
    pub credit_hour: f64,
}
