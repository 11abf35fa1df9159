use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::FeePackageService;
use crate::models::{ApiResponse, ErrorCode, fees::requests::CreateFeePackageRequest};
use crate::utils::validate::{validate_amount, validate_name};

pub async fn create_package(
    service: &FeePackageService,
    request: &HttpRequest,
    package_data: CreateFeePackageRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_name(&package_data.name) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    if let Err(msg) = validate_amount(package_data.total_amount) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    let storage = service.get_storage(request);

    match storage.create_fee_package(package_data).await {
        Ok(package) => {
            info!("Fee package {} created", package.name);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                package,
                "Fee package created successfully",
            )))
        }
        Err(e) => {
            error!("Fee package creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Fee package creation failed: {e}"),
                )),
            )
        }
    }
}
