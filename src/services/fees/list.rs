use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeePackageService;
use crate::models::{ApiResponse, ErrorCode, fees::responses::FeePackageListResponse};

pub async fn list_packages(
    service: &FeePackageService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_fee_packages().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            FeePackageListResponse { items },
            "Fee package list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve fee package list: {e}"),
            )),
        ),
    }
}
