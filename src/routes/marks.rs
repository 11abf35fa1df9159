use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::marks::requests::{MarkListParams, SaveMarksRequest};
use crate::services::MarkService;

// 懒加载的全局 MarkService 实例
static MARK_SERVICE: Lazy<MarkService> = Lazy::new(MarkService::new_lazy);

pub async fn list_marks(
    req: HttpRequest,
    query: web::Query<MarkListParams>,
) -> ActixResult<HttpResponse> {
    MARK_SERVICE.list_marks(&req, query.into_inner()).await
}

pub async fn save_marks(
    req: HttpRequest,
    marks_data: web::Json<SaveMarksRequest>,
) -> ActixResult<HttpResponse> {
    MARK_SERVICE.save_marks(&req, marks_data.into_inner()).await
}

// 配置路由
pub fn configure_mark_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/marks")
            .wrap(middlewares::RequireAdmin)
            .route("", web::get().to(list_marks))
            .route("", web::post().to(save_marks)),
    );
}
