use actix_web::{HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    auth::{LoginRequest, LoginResponse},
};
use crate::utils::jwt;
use crate::utils::password::verify_password;

use super::AuthService;

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
) -> ActixResult<HttpResponse> {
    let config = service.get_config();

    // 单管理员：凭据来自配置，密码只存 argon2 哈希
    let username_ok = login_request.username == config.auth.admin_username;
    let password_ok = verify_password(
        &login_request.password,
        &config.auth.admin_password_hash,
    );

    // 两项都算完再判断，避免用户名探测
    if !username_ok || !password_ok {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::AuthFailed,
            "Username or password is incorrect",
        )));
    }

    match jwt::JwtUtils::generate_token_pair(&config.auth.admin_username) {
        Ok(token_pair) => {
            tracing::info!("Admin {} logged in successfully", config.auth.admin_username);

            let response = LoginResponse {
                access_token: token_pair.access_token,
                expires_in: config.auth.jwt.access_token_expiry * 60, // 转换为秒
                username: config.auth.admin_username.clone(),
                created_at: chrono::Utc::now(),
            };

            let refresh_cookie =
                jwt::JwtUtils::create_refresh_token_cookie(&token_pair.refresh_token);

            Ok(HttpResponse::Ok()
                .cookie(refresh_cookie)
                .json(ApiResponse::success(response, "Login successful")))
        }
        Err(e) => {
            tracing::error!("Failed to generate JWT token: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Login failed, unable to generate token",
                )),
            )
        }
    }
}
