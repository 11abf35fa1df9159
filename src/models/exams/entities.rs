use serde::{Deserialize, Serialize};

// 考试实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exam {
    pub id: i64,
    pub name: String,
    pub start_date: chrono::DateTime<chrono::Utc>,
    pub end_date: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 考试科目关联：某场考试中某科目的满分与及格线
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamSubject {
    pub id: i64,
    pub exam_id: i64,
    pub subject_id: i64,
    pub full_marks: f64,
    pub pass_marks: f64,
}
