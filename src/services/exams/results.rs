use std::collections::BTreeMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ExamService;
use crate::models::{
    ApiResponse, ErrorCode,
    exams::{
        requests::ExamResultsParams,
        responses::{ExamResultsResponse, ExamSubjectDetail, StudentResult, SubjectResult},
    },
    students::entities::Student,
};
use crate::utils::grading::{calculate_grade, calculate_overall_gpa};

pub async fn exam_results(
    service: &ExamService,
    request: &HttpRequest,
    query: ExamResultsParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let exam = match storage.get_exam_with_subjects(query.exam_id).await {
        Ok(Some(exam)) => exam,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ExamNotFound,
                "Exam not found",
            )));
        }
        Err(e) => {
            error!("Failed to get exam: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching exam",
                )),
            );
        }
    };

    let link_map: BTreeMap<i64, &ExamSubjectDetail> = exam
        .subjects
        .iter()
        .map(|link| (link.exam_subject.id, link))
        .collect();
    let exam_subject_ids: Vec<i64> = link_map.keys().copied().collect();

    let marks = match storage.list_marks_for_exam(&exam_subject_ids).await {
        Ok(marks) => marks,
        Err(e) => {
            error!("Failed to list marks: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching marks",
                )),
            );
        }
    };

    // 按学生归组，BTreeMap 保证输出顺序稳定
    let mut grouped: BTreeMap<i64, (Option<Student>, Vec<SubjectResult>)> = BTreeMap::new();
    for (mark, student) in marks {
        let link = match link_map.get(&mark.exam_subject_id) {
            Some(link) => link,
            None => continue,
        };

        let graded = calculate_grade(mark.obtained_marks, link.exam_subject.full_marks);
        let (name, code, credit_hour) = match &link.subject {
            Some(subject) => (
                subject.name.clone(),
                subject.code.clone(),
                subject.credit_hour,
            ),
            None => (String::new(), String::new(), 0.0),
        };

        let entry = grouped.entry(mark.student_id).or_insert((student, Vec::new()));
        entry.1.push(SubjectResult {
            subject_id: link.exam_subject.subject_id,
            subject_name: name,
            subject_code: code,
            credit_hour,
            full_marks: link.exam_subject.full_marks,
            pass_marks: link.exam_subject.pass_marks,
            obtained_marks: mark.obtained_marks,
            remarks: mark.remarks,
            grade: graded.grade.to_string(),
            grade_point: graded.gpa,
        });
    }

    let results: Vec<StudentResult> = grouped
        .into_values()
        .filter_map(|(student, subjects)| {
            // 学生被删除但成绩残留时跳过该行
            let student = student?;
            let weights: Vec<(f64, f64)> = subjects
                .iter()
                .map(|s| (s.credit_hour, s.grade_point))
                .collect();
            Some(StudentResult {
                student,
                gpa: calculate_overall_gpa(&weights),
                subjects,
            })
        })
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        ExamResultsResponse {
            exam: exam.exam,
            results,
        },
        "Exam results generated successfully",
    )))
}
