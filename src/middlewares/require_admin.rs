/*!
 * 管理员认证中间件
 *
 * 校验 `Authorization: Bearer <JWT_TOKEN>` 中的 access token。
 * 系统只有一个管理员账户，令牌有效即视为管理员，无需再查库。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * web::scope("/api/v1/students")
 *     .wrap(middlewares::RequireAdmin)
 *     .route("", web::get().to(list_students))
 * ```
 *
 * ## 认证流程
 *
 * 1. 客户端在请求头中包含 `Authorization: Bearer <JWT_TOKEN>`
 * 2. 中间件验证令牌签名、有效期与类型（必须为 access）
 * 3. 令牌有效时将 Claims 存入请求扩展，继续处理请求
 * 4. 令牌无效或缺失时返回 401
 */

use crate::models::{ApiResponse, ErrorCode};
use crate::utils::jwt::{Claims, JwtUtils};
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    http::header::CONTENT_TYPE,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::{debug, info};

const BEARER_PREFIX: &str = "Bearer ";
const AUTHORIZATION_HEADER: &str = "Authorization";

#[derive(Clone)]
pub struct RequireAdmin;

// CORS 预检直接放行
fn preflight_response() -> HttpResponse {
    HttpResponse::build(StatusCode::NO_CONTENT)
        .insert_header((CONTENT_TYPE, "text/plain; charset=utf-8"))
        .finish()
}

fn unauthorized_response(message: &str) -> HttpResponse {
    HttpResponse::build(StatusCode::UNAUTHORIZED)
        .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
        .json(ApiResponse::<()>::error_empty(
            ErrorCode::Unauthorized,
            message,
        ))
}

// 从 Authorization 头取出 Bearer token 并校验为 access token
fn validate_bearer_token(req: &ServiceRequest) -> Result<Claims, String> {
    let token = req
        .headers()
        .get(AUTHORIZATION_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix(BEARER_PREFIX))
        .ok_or_else(|| "Missing or invalid Authorization header".to_string())?;

    JwtUtils::verify_access_token(token).map_err(|err| {
        info!("Access token validation failed: {}", err);
        "Invalid access token".to_string()
    })
}

impl<S, B> Transform<S, ServiceRequest> for RequireAdmin
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireAdminMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireAdminMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireAdminMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireAdminMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(req.into_response(preflight_response().map_into_right_body()));
            }

            match validate_bearer_token(&req) {
                Ok(claims) => {
                    debug!("Admin session verified for: {}", claims.sub);
                    req.extensions_mut().insert(claims);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(err) => {
                    info!("Rejected request to {}: {}", req.path(), err);
                    Ok(req.into_response(
                        unauthorized_response(&format!("Unauthorized: {err}"))
                            .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

impl RequireAdmin {
    /// 从请求扩展中提取已验证的 Claims
    /// 此函数应该在应用了 RequireAdmin 中间件的路由处理程序中使用
    pub fn extract_claims(req: &actix_web::HttpRequest) -> Option<Claims> {
        req.extensions().get::<Claims>().cloned()
    }
}
