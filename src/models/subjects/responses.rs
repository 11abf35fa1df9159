use super::entities::Subject;
use serde::Serialize;

// 科目响应
#[derive(Debug, Serialize)]
pub struct SubjectResponse {
    pub subject: Subject,
}

// 科目列表响应
#[derive(Debug, Serialize)]
pub struct SubjectListResponse {
    pub items: Vec<Subject>,
}
