use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::MarkService;
use crate::models::{
    ApiResponse, ErrorCode,
    marks::{
        requests::MarkListParams,
        responses::{MarkDetail, MarkListResponse},
    },
};

pub async fn list_marks(
    service: &MarkService,
    request: &HttpRequest,
    query: MarkListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let exam_subject = match storage
        .get_exam_subject(query.exam_id, query.subject_id)
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

    match storage.list_marks_for_exam_subject(exam_subject.id).await {
        Ok(rows) => {
            let items = rows
                .into_iter()
                .map(|(mark, student)| MarkDetail { mark, student })
                .collect();
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                MarkListResponse { items },
                "Mark list retrieved successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve mark list: {e}"),
            )),
        ),
    }
}
