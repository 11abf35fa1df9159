use serde::Deserialize;

// 缴费创建请求
#[derive(Debug, Deserialize)]
pub struct CreatePaymentRequest {
    pub student_id: i64,
    pub installment_id: Option<i64>,
    pub amount: f64,
    pub method: Option<String>,
    pub received_by: Option<String>,
    pub remarks: Option<String>,
    pub payment_date: Option<chrono::DateTime<chrono::Utc>>,
}

// 缴费查询参数
#[derive(Debug, Deserialize)]
pub struct PaymentListParams {
    pub student_id: Option<i64>,
}
