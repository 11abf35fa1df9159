use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::PaymentService;
use crate::models::{
    ApiResponse, ErrorCode,
    payments::{requests::PaymentListParams, responses::PaymentListResponse},
};

pub async fn list_payments(
    service: &PaymentService,
    request: &HttpRequest,
    query: PaymentListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_payments_with_relations(query.student_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            PaymentListResponse { items },
            "Payment list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve payment list: {e}"),
            )),
        ),
    }
}
