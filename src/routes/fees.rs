use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::fees::requests::{CreateFeePackageRequest, UpdateFeePackageRequest};
use crate::services::FeePackageService;
use crate::utils::SafeIdI64;

// 懒加载的全局 FeePackageService 实例
static FEE_PACKAGE_SERVICE: Lazy<FeePackageService> = Lazy::new(FeePackageService::new_lazy);

pub async fn list_packages(req: HttpRequest) -> ActixResult<HttpResponse> {
    FEE_PACKAGE_SERVICE.list_packages(&req).await
}

pub async fn create_package(
    req: HttpRequest,
    package_data: web::Json<CreateFeePackageRequest>,
) -> ActixResult<HttpResponse> {
    FEE_PACKAGE_SERVICE
        .create_package(&req, package_data.into_inner())
        .await
}

pub async fn update_package(
    req: HttpRequest,
    package_id: SafeIdI64,
    update_data: web::Json<UpdateFeePackageRequest>,
) -> ActixResult<HttpResponse> {
    FEE_PACKAGE_SERVICE
        .update_package(&req, package_id.0, update_data.into_inner())
        .await
}

pub async fn delete_package(req: HttpRequest, package_id: SafeIdI64) -> ActixResult<HttpResponse> {
    FEE_PACKAGE_SERVICE.delete_package(&req, package_id.0).await
}

// 配置路由
pub fn configure_fee_package_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/fee-packages")
            .wrap(middlewares::RequireAdmin)
            .route("", web::get().to(list_packages))
            .route("", web::post().to(create_package))
            .route("/{id}", web::put().to(update_package))
            .route("/{id}", web::delete().to(delete_package)),
    );
}
