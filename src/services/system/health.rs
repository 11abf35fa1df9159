use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use tracing::error;

use super::SystemService;
use crate::models::{ApiResponse, AppStartTime, system::responses::HealthResponse};

/// 健康检查，顺带做一次数据库探测
pub async fn health_check(
    service: &SystemService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // count_students 同时充当数据库连通性探测
    let (database, student_count) = match storage.count_students().await {
        Ok(count) => ("ok".to_string(), count),
        Err(e) => {
            error!("Health check database probe failed: {}", e);
            ("unavailable".to_string(), 0)
        }
    };

    let uptime_seconds = request
        .app_data::<web::Data<AppStartTime>>()
        .map(|start| (chrono::Utc::now() - start.start_datetime).num_seconds())
        .unwrap_or_default();

    let response = HealthResponse {
        status: if database == "ok" { "ok" } else { "degraded" }.to_string(),
        database,
        student_count,
        uptime_seconds,
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Service is running")))
}
