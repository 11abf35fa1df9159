use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ExamService;
use crate::models::{ApiResponse, ErrorCode, exams::requests::CreateExamRequest};
use crate::utils::validate::{validate_marks_scheme, validate_name};

pub async fn create_exam(
    service: &ExamService,
    request: &HttpRequest,
    exam_data: CreateExamRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_name(&exam_data.name) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    for link in &exam_data.subjects {
        if let Err(msg) = validate_marks_scheme(link.full_marks, link.pass_marks) {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ValidationFailed,
                format!("Invalid marks scheme for subject {}: {msg}", link.subject_id),
            )));
        }
    }

    let storage = service.get_storage(request);

    let result = storage
        .create_exam_with_subjects(
            &exam_data.name,
            exam_data.start_date.timestamp(),
            exam_data.end_date.map(|d| d.timestamp()),
            exam_data.subjects,
        )
        .await;

    match result {
        Ok(exam) => {
            info!(
                "Exam {} created with {} subjects",
                exam.exam.name,
                exam.subjects.len()
            );
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(exam, "Exam created successfully")))
        }
        Err(e) => {
            let msg = e.to_string();
            error!("Exam creation failed: {}", msg);
            // 不存在的科目会触发外键约束
            if msg.contains("FOREIGN KEY constraint failed") {
                Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::ValidationFailed,
                    "One or more subjects do not exist",
                )))
            } else {
                Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Exam creation failed: {msg}"),
                    )),
                )
            }
        }
    }
}
