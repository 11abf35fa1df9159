use serde::Deserialize;

// 考试创建请求，科目关联在同一事务内建立
#[derive(Debug, Deserialize)]
pub struct CreateExamRequest {
    pub name: String,
    pub start_date: chrono::DateTime<chrono::Utc>,
    pub end_date: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub subjects: Vec<ExamSubjectLink>,
}

// 考试中的科目配置
#[derive(Debug, Clone, Deserialize)]
pub struct ExamSubjectLink {
    pub subject_id: i64,
    pub full_marks: f64,
    pub pass_marks: f64,
}

// 考试更新请求
#[derive(Debug, Deserialize)]
pub struct UpdateExamRequest {
    pub name: Option<String>,
    pub start_date: Option<chrono::DateTime<chrono::Utc>>,
    pub end_date: Option<chrono::DateTime<chrono::Utc>>,
}

// 成绩单查询参数
#[derive(Debug, Deserialize)]
pub struct ExamResultsParams {
    pub exam_id: i64,
}
