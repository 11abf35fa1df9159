use super::entities::Student;
use crate::models::common::pagination::PaginationInfo;
use serde::Serialize;

// 学生响应
#[derive(Debug, Serialize)]
pub struct StudentResponse {
    pub student: Student,
}

// 学生列表响应
#[derive(Debug, Serialize)]
pub struct StudentListResponse {
    pub items: Vec<Student>,
    pub pagination: PaginationInfo,
}

// 批量升级结果
#[derive(Debug, Serialize)]
pub struct PromoteStudentsResponse {
    pub count: u64,
}
