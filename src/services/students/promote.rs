use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::StudentService;
use crate::models::{
    ApiResponse, ErrorCode,
    students::{requests::PromoteStudentsRequest, responses::PromoteStudentsResponse},
};
use crate::utils::validate::validate_name;

pub async fn promote_students(
    service: &StudentService,
    request: &HttpRequest,
    promote_data: PromoteStudentsRequest,
) -> ActixResult<HttpResponse> {
    if promote_data.student_ids.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "student_ids must not be empty",
        )));
    }

    if let Err(msg) = validate_name(&promote_data.new_grade) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            format!("Invalid grade: {msg}"),
        )));
    }

    if let Err(msg) = validate_name(&promote_data.new_academic_year) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            format!("Invalid academic year: {msg}"),
        )));
    }

    let storage = service.get_storage(request);

    match storage
        .promote_students(
            &promote_data.student_ids,
            &promote_data.new_grade,
            &promote_data.new_academic_year,
        )
        .await
    {
        Ok(count) => {
            info!(
                "Promoted {} students to grade {} ({})",
                count, promote_data.new_grade, promote_data.new_academic_year
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                PromoteStudentsResponse { count },
                "Students promoted successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Student promotion failed: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;

    // 校验在访问存储前完成，缺字段的请求必须拿到 400
    #[tokio::test]
    async fn test_promote_rejects_blank_fields() {
        let service = StudentService::new_lazy();
        let request = TestRequest::default().to_http_request();

        let resp = promote_students(
            &service,
            &request,
            PromoteStudentsRequest {
                student_ids: vec![1],
                new_grade: "12".to_string(),
                new_academic_year: "  ".to_string(),
            },
        )
        .await
        .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = promote_students(
            &service,
            &request,
            PromoteStudentsRequest {
                student_ids: vec![],
                new_grade: "12".to_string(),
                new_academic_year: "2083".to_string(),
            },
        )
        .await
        .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
