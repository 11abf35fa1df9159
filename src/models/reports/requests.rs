use serde::Deserialize;

// 账单查询参数
#[derive(Debug, Deserialize)]
pub struct BillParams {
    pub student_id: Option<i64>,
}
