use super::entities::StudentMark;
use crate::models::students::entities::Student;
use serde::Serialize;

// 带学生信息的成绩条目
#[derive(Debug, Serialize)]
pub struct MarkDetail {
    #[serde(flatten)]
    pub mark: StudentMark,
    pub student: Option<Student>,
}

// 成绩列表响应
#[derive(Debug, Serialize)]
pub struct MarkListResponse {
    pub items: Vec<MarkDetail>,
}

// 批量保存结果
#[derive(Debug, Serialize)]
pub struct SaveMarksResponse {
    pub saved: usize,
}
