use super::entities::{FeeAssignment, Installment};
use crate::models::fees::entities::FeePackage;
use crate::models::students::entities::Student;
use serde::Serialize;

// 带学生与套餐信息的分配条目
#[derive(Debug, Serialize)]
pub struct AssignmentDetail {
    #[serde(flatten)]
    pub assignment: FeeAssignment,
    pub student: Option<Student>,
    pub package: Option<FeePackage>,
}

// 分配列表响应
#[derive(Debug, Serialize)]
pub struct AssignmentListResponse {
    pub items: Vec<AssignmentDetail>,
}

// 分配响应
#[derive(Debug, Serialize)]
pub struct AssignmentResponse {
    pub assignment: FeeAssignment,
    pub installments: Vec<Installment>,
}

// 分期列表响应
#[derive(Debug, Serialize)]
pub struct InstallmentListResponse {
    pub items: Vec<Installment>,
}
