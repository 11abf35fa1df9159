use serde::{Deserialize, Serialize};

// 缴费记录实体，业务上只增不改
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: i64,
    pub student_id: i64,
    pub installment_id: Option<i64>,
    pub amount: f64,
    pub method: Option<String>,
    pub received_by: Option<String>,
    pub remarks: Option<String>,
    pub paid_at: chrono::DateTime<chrono::Utc>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
