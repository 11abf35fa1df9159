use super::entities::PaymentMode;
use serde::Deserialize;

// 分配创建请求
//
// discount 省略时按 0 处理；installments 随分配一并在事务内创建。
#[derive(Debug, Deserialize)]
pub struct CreateAssignmentRequest {
    pub student_id: i64,
    pub package_id: i64,
    #[serde(default)]
    pub discount: f64,
    pub payment_mode: PaymentMode,
    #[serde(default)]
    pub installments: Vec<NewInstallment>,
}

// 随分配创建的分期计划项
#[derive(Debug, Clone, Deserialize)]
pub struct NewInstallment {
    pub title: String,
    pub amount: f64,
    pub due_date: Option<chrono::DateTime<chrono::Utc>>,
}

// 存储层的分配创建参数（金额已快照）
#[derive(Debug, Clone)]
pub struct NewAssignment {
    pub student_id: i64,
    pub package_id: i64,
    pub total_fee: f64,
    pub discount: f64,
    pub final_amount: f64,
    pub payment_mode: PaymentMode,
}
