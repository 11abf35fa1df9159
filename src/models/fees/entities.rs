use serde::{Deserialize, Serialize};

// 收费套餐实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeePackage {
    pub id: i64,
    pub name: String,
    pub grade: String,
    pub total_amount: f64,
    pub breakdown: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
