use serde::{Deserialize, Serialize};

// 成绩记录实体，每个 (学生, 考试科目) 唯一
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentMark {
    pub id: i64,
    pub student_id: i64,
    pub exam_subject_id: i64,
    pub obtained_marks: f64,
    pub remarks: Option<String>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
