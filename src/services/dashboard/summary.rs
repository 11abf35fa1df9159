use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::{Duration, Utc};
use tracing::error;

use super::DashboardService;
use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::models::{ApiResponse, ErrorCode, reports::responses::DashboardSummary};

const DASHBOARD_CACHE_KEY: &str = "dashboard:summary";

pub async fn dashboard_summary(
    service: &DashboardService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let cache = service.get_cache(request);

    // 汇总是全表聚合，短 TTL 缓存挡掉重复扫描
    if let CacheResult::Found(summary) = cache.get::<DashboardSummary>(DASHBOARD_CACHE_KEY).await {
        return Ok(HttpResponse::Ok().json(ApiResponse::success(
            summary,
            "Dashboard summary retrieved successfully",
        )));
    }

    let storage = service.get_storage(request);

    let today_start = Utc::now()
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp())
        .unwrap_or_default();
    let today_end = today_start + Duration::days(1).num_seconds();

    let total_revenue = match storage.sum_assignment_final_amounts().await {
        Ok(value) => value,
        Err(e) => return Ok(summary_error(&e.to_string())),
    };
    let total_collected = match storage.sum_payments().await {
        Ok(value) => value,
        Err(e) => return Ok(summary_error(&e.to_string())),
    };
    let today_collection = match storage.sum_payments_between(today_start, today_end).await {
        Ok(value) => value,
        Err(e) => return Ok(summary_error(&e.to_string())),
    };

    let summary = DashboardSummary {
        total_revenue,
        total_collected,
        total_outstanding: total_revenue - total_collected,
        today_collection,
    };

    let config = AppConfig::get();
    cache
        .insert(
            DASHBOARD_CACHE_KEY.to_string(),
            &summary,
            config.cache.default_ttl,
        )
        .await;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        summary,
        "Dashboard summary retrieved successfully",
    )))
}

fn summary_error(e: &str) -> HttpResponse {
    error!("Failed to build dashboard summary: {}", e);
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        ErrorCode::InternalServerError,
        format!("Failed to build dashboard summary: {e}"),
    ))
}
