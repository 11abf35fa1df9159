use crate::models::students::entities::Student;
use crate::utils::finance::FeeSummary;
use serde::Serialize;

// 账单中的套餐行（金额取分配时的快照）
#[derive(Debug, Serialize)]
pub struct BillPackageLine {
    pub id: i64,
    pub name: String,
    pub breakdown: Option<String>,
    pub total_fee: f64,
    pub discount: f64,
    pub net_amount: f64,
}

// 学生账单响应
#[derive(Debug, Serialize)]
pub struct BillResponse {
    pub student: Student,
    pub packages: Vec<BillPackageLine>,
    pub summary: FeeSummary,
}

// 仪表盘汇总
#[derive(Debug, Clone, Serialize, serde::Deserialize)]
pub struct DashboardSummary {
    pub total_revenue: f64,
    pub total_collected: f64,
    pub total_outstanding: f64,
    pub today_collection: f64,
}
