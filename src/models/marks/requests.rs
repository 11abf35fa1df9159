use serde::Deserialize;

// 成绩查询参数
#[derive(Debug, Deserialize)]
pub struct MarkListParams {
    pub exam_id: i64,
    pub subject_id: i64,
}

// 批量录入/修改成绩请求
#[derive(Debug, Deserialize)]
pub struct SaveMarksRequest {
    pub exam_id: i64,
    pub subject_id: i64,
    pub marks: Vec<MarkEntry>,
}

// 单个学生的成绩录入项
#[derive(Debug, Clone, Deserialize)]
pub struct MarkEntry {
    pub student_id: i64,
    pub obtained: f64,
    pub remarks: Option<String>,
}
