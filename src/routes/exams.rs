use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::exams::requests::{CreateExamRequest, ExamResultsParams, UpdateExamRequest};
use crate::services::ExamService;
use crate::utils::SafeIdI64;

// 懒加载的全局 ExamService 实例
static EXAM_SERVICE: Lazy<ExamService> = Lazy::new(ExamService::new_lazy);

pub async fn list_exams(req: HttpRequest) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.list_exams(&req).await
}

pub async fn create_exam(
    req: HttpRequest,
    exam_data: web::Json<CreateExamRequest>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.create_exam(&req, exam_data.into_inner()).await
}

pub async fn update_exam(
    req: HttpRequest,
    exam_id: SafeIdI64,
    update_data: web::Json<UpdateExamRequest>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE
        .update_exam(&req, exam_id.0, update_data.into_inner())
        .await
}

pub async fn delete_exam(req: HttpRequest, exam_id: SafeIdI64) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.delete_exam(&req, exam_id.0).await
}

pub async fn exam_results(
    req: HttpRequest,
    query: web::Query<ExamResultsParams>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.exam_results(&req, query.into_inner()).await
}

// 配置路由
pub fn configure_exam_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/exams")
            .wrap(middlewares::RequireAdmin)
            .route("", web::get().to(list_exams))
            .route("", web::post().to(create_exam))
            // 字面量路径要排在 /{id} 前注册
            .route("/results", web::get().to(exam_results))
            .route("/{id}", web::put().to(update_exam))
            .route("/{id}", web::delete().to(delete_exam)),
    );
}
