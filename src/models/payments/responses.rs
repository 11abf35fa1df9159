use super::entities::Payment;
use crate::models::assignments::entities::Installment;
use crate::models::students::entities::Student;
use serde::Serialize;

// 带学生与分期信息的缴费条目
#[derive(Debug, Serialize)]
pub struct PaymentDetail {
    #[serde(flatten)]
    pub payment: Payment,
    pub student: Option<Student>,
    pub installment: Option<Installment>,
}

// 缴费列表响应
#[derive(Debug, Serialize)]
pub struct PaymentListResponse {
    pub items: Vec<PaymentDetail>,
}

// 缴费响应
#[derive(Debug, Serialize)]
pub struct PaymentResponse {
    pub payment: Payment,
}
