use super::entities::{Exam, ExamSubject};
use crate::models::students::entities::Student;
use crate::models::subjects::entities::Subject;
use serde::Serialize;

// 带科目信息的考试科目条目
#[derive(Debug, Serialize)]
pub struct ExamSubjectDetail {
    #[serde(flatten)]
    pub exam_subject: ExamSubject,
    pub subject: Option<Subject>,
}

// 带科目列表的考试条目
#[derive(Debug, Serialize)]
pub struct ExamDetail {
    #[serde(flatten)]
    pub exam: Exam,
    pub subjects: Vec<ExamSubjectDetail>,
}

// 考试列表响应
#[derive(Debug, Serialize)]
pub struct ExamListResponse {
    pub items: Vec<ExamDetail>,
}

// 考试响应
#[derive(Debug, Serialize)]
pub struct ExamResponse {
    pub exam: Exam,
}

// 单科成绩行：分数 + 评定结果
#[derive(Debug, Serialize)]
pub struct SubjectResult {
    pub subject_id: i64,
    pub subject_name: String,
    pub subject_code: String,
    pub credit_hour: f64,
    pub full_marks: f64,
    pub pass_marks: f64,
    pub obtained_marks: f64,
    pub remarks: Option<String>,
    pub grade: String,
    pub grade_point: f64,
}

// 单个学生的成绩单
#[derive(Debug, Serialize)]
pub struct StudentResult {
    pub student: Student,
    pub subjects: Vec<SubjectResult>,
    pub gpa: String,
}

// 成绩单响应
#[derive(Debug, Serialize)]
pub struct ExamResultsResponse {
    pub exam: Exam,
    pub results: Vec<StudentResult>,
}
