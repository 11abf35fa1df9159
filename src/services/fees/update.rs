use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::FeePackageService;
use crate::models::{ApiResponse, ErrorCode, fees::requests::UpdateFeePackageRequest};
use crate::utils::validate::{validate_amount, validate_name};

pub async fn update_package(
    service: &FeePackageService,
    request: &HttpRequest,
    package_id: i64,
    update_data: UpdateFeePackageRequest,
) -> ActixResult<HttpResponse> {
    if let Some(ref name) = update_data.name
        && let Err(msg) = validate_name(name)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    if let Some(total_amount) = update_data.total_amount
        && let Err(msg) = validate_amount(total_amount)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    let storage = service.get_storage(request);

    // 只改套餐本身，已分配的快照金额不受影响
    match storage.update_fee_package(package_id, update_data).await {
        Ok(Some(package)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            package,
            "Fee package updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::PackageNotFound,
            "Fee package not found",
        ))),
        Err(e) => {
            error!("Fee package update failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Fee package update failed: {e}"),
                )),
            )
        }
    }
}
