use serde::Deserialize;

// 套餐创建请求
#[derive(Debug, Deserialize)]
pub struct CreateFeePackageRequest {
    pub name: String,
    pub grade: String,
    pub total_amount: f64,
    pub breakdown: Option<String>,
}

// 套餐更新请求
#[derive(Debug, Deserialize)]
pub struct UpdateFeePackageRequest {
    pub name: Option<String>,
    pub grade: Option<String>,
    pub total_amount: Option<f64>,
    pub breakdown: Option<String>,
}
