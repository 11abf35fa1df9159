use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::MarkService;
use crate::models::{
    ApiResponse, ErrorCode,
    marks::{requests::SaveMarksRequest, responses::SaveMarksResponse},
};

pub async fn save_marks(
    service: &MarkService,
    request: &HttpRequest,
    marks_data: SaveMarksRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let exam_subject = match storage
        .get_exam_subject(marks_data.exam_id, marks_data.subject_id)
        .await
    {
        Ok(Some(exam_subject)) => exam_subject,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubjectNotInExam,
                "Subject is not part of this exam",
            )));
        }
        Err(e) => {
            error!("Failed to get exam subject: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching exam subject",
                )),
            );
        }
    };

    // 整批先校验再写入，避免半批成功
    for entry in &marks_data.marks {
        if !entry.obtained.is_finite() || entry.obtained < 0.0 {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ValidationFailed,
                format!(
                    "Invalid marks for student {}: must be a non-negative number",
                    entry.student_id
                ),
            )));
        }
        if entry.obtained > exam_subject.full_marks {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ValidationFailed,
                format!(
                    "Marks for student {} exceed full marks ({})",
                    entry.student_id, exam_subject.full_marks
                ),
            )));
        }
    }

    let mut saved = 0usize;
    for entry in marks_data.marks {
        // 唯一索引 + upsert：同一 (学生, 考试科目) 重复提交时覆盖
        match storage
            .upsert_mark(
                entry.student_id,
                exam_subject.id,
                entry.obtained,
                entry.remarks,
            )
            .await
        {
            Ok(()) => saved += 1,
            Err(e) => {
                let msg = e.to_string();
                error!("Failed to save mark for student {}: {}", entry.student_id, msg);
                if msg.contains("FOREIGN KEY constraint failed") {
                    return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                        ErrorCode::StudentNotFound,
                        format!("Student {} not found", entry.student_id),
                    )));
                }
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to save marks: {msg}"),
                    )),
                );
            }
        }
    }

    info!(
        "Saved {} marks for exam {} subject {}",
        saved, marks_data.exam_id, marks_data.subject_id
    );
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        SaveMarksResponse { saved },
        "Marks saved successfully",
    )))
}
