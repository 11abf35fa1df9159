use serde::{Deserialize, Serialize};

// 科目实体
//
// credit_hour 用于 GPA 的学分加权，默认 4.0。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub stream: Option<String>,
    pub credit_hour: f64,
}
