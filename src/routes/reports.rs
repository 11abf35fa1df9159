use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::reports::requests::BillParams;
use crate::services::ReportService;

// 懒加载的全局 ReportService 实例
static REPORT_SERVICE: Lazy<ReportService> = Lazy::new(ReportService::new_lazy);

pub async fn student_bill(
    req: HttpRequest,
    query: web::Query<BillParams>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.student_bill(&req, query.into_inner()).await
}

// 配置路由
pub fn configure_report_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/reports")
            .wrap(middlewares::RequireAdmin)
            .route("/bill", web::get().to(student_bill)),
    );
}
