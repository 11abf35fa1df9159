use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeePackageService;
use crate::errors::EdubillError;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_package(
    service: &FeePackageService,
    request: &HttpRequest,
    package_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_fee_package(package_id).await {
        Ok(true) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success_empty("Fee package deleted successfully"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::PackageNotFound,
            "Fee package not found",
        ))),
        // 被分配引用的套餐承载着开单快照，存储层会拒绝删除
        Err(EdubillError::Validation(_)) => {
            Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::Conflict,
                "Fee package is referenced by existing assignments and cannot be deleted",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Fee package deletion failed: {e}"),
            )),
        ),
    }
}
