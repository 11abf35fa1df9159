use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::chat::requests::ChatRequest;
use crate::services::ChatService;

// 懒加载的全局 ChatService 实例
static CHAT_SERVICE: Lazy<ChatService> = Lazy::new(ChatService::new_lazy);

pub async fn chat_query(
    req: HttpRequest,
    chat_data: web::Json<ChatRequest>,
) -> ActixResult<HttpResponse> {
    CHAT_SERVICE.chat_query(&req, chat_data.into_inner()).await
}

// 配置路由
pub fn configure_chat_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/chat")
            .wrap(middlewares::RequireAdmin)
            .route("", web::post().to(chat_query)),
    );
}
