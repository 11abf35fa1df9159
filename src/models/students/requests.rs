use super::entities::StudentStatus;
use crate::models::common::pagination::PaginationQuery;
use serde::Deserialize;

// 学生查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct StudentListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub grade: Option<String>,
    pub status: Option<StudentStatus>,
    pub search: Option<String>,
}

// 学生创建请求
#[derive(Debug, Deserialize)]
pub struct CreateStudentRequest {
    pub full_name: String,
    pub grade: String,
    pub stream: String,
    pub section: Option<String>,
    pub roll_no: String,
    pub academic_year: String,
    pub parent_name: Option<String>,
    pub parent_contact: Option<String>,
    pub address: Option<String>,
    pub dob: Option<chrono::DateTime<chrono::Utc>>,
    pub admission_date: Option<chrono::DateTime<chrono::Utc>>,
    pub status: Option<StudentStatus>,
}

// 学生更新请求
#[derive(Debug, Deserialize)]
pub struct UpdateStudentRequest {
    pub full_name: Option<String>,
    pub grade: Option<String>,
    pub stream: Option<String>,
    pub section: Option<String>,
    pub roll_no: Option<String>,
    pub academic_year: Option<String>,
    pub parent_name: Option<String>,
    pub parent_contact: Option<String>,
    pub address: Option<String>,
    pub dob: Option<chrono::DateTime<chrono::Utc>>,
    pub status: Option<StudentStatus>,
}

// 批量升级请求
#[derive(Debug, Deserialize)]
pub struct PromoteStudentsRequest {
    pub student_ids: Vec<i64>,
    pub new_grade: String,
    pub new_academic_year: String,
}

// 学生列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct StudentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub grade: Option<String>,
    pub status: Option<StudentStatus>,
    pub search: Option<String>,
}
