use super::entities::FeePackage;
use serde::Serialize;

// 套餐响应
#[derive(Debug, Serialize)]
pub struct FeePackageResponse {
    pub package: FeePackage,
}

// 套餐列表响应
#[derive(Debug, Serialize)]
pub struct FeePackageListResponse {
    pub items: Vec<FeePackage>,
}
