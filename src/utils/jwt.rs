use crate::config::AppConfig;
use actix_web::cookie::{Cookie, SameSite};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

const TOKEN_TYPE_ACCESS: &str = "access";
const TOKEN_TYPE_REFRESH: &str = "refresh";
const REFRESH_COOKIE_NAME: &str = "refresh_token";

// 会话令牌载荷，sub 为管理员用户名
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub token_type: String, // "access" 或 "refresh"
    pub exp: usize,
    pub iat: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

pub struct JwtUtils;

impl JwtUtils {
    // 签发指定类型与有效期的令牌
    fn issue(
        username: &str,
        token_type: &str,
        lifetime: chrono::Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now();
        let claims = Claims {
            sub: username.to_string(),
            token_type: token_type.to_string(),
            exp: (now + lifetime).timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        let secret = AppConfig::get().auth.jwt.secret.clone();
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_ref()),
        )
    }

    pub fn generate_access_token(username: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let minutes = AppConfig::get().auth.jwt.access_token_expiry;
        Self::issue(
            username,
            TOKEN_TYPE_ACCESS,
            chrono::Duration::minutes(minutes),
        )
    }

    pub fn generate_refresh_token(username: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let days = AppConfig::get().auth.jwt.refresh_token_expiry;
        Self::issue(username, TOKEN_TYPE_REFRESH, chrono::Duration::days(days))
    }

    /// 登录成功后一次性签发 access + refresh
    pub fn generate_token_pair(username: &str) -> Result<TokenPair, jsonwebtoken::errors::Error> {
        Ok(TokenPair {
            access_token: Self::generate_access_token(username)?,
            refresh_token: Self::generate_refresh_token(username)?,
        })
    }

    // 解码并校验签名与过期时间，再核对令牌类型
    fn verify_typed(
        token: &str,
        expected_type: &str,
    ) -> Result<Claims, jsonwebtoken::errors::Error> {
        let secret = AppConfig::get().auth.jwt.secret.clone();
        let claims = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_ref()),
            &Validation::default(),
        )
        .map(|data| data.claims)?;

        if claims.token_type != expected_type {
            return Err(jsonwebtoken::errors::Error::from(
                jsonwebtoken::errors::ErrorKind::InvalidToken,
            ));
        }
        Ok(claims)
    }

    pub fn verify_access_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        Self::verify_typed(token, TOKEN_TYPE_ACCESS)
    }

    pub fn verify_refresh_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        Self::verify_typed(token, TOKEN_TYPE_REFRESH)
    }

    /// 用有效的 refresh token 换一个新的 access token
    pub fn refresh_access_token(
        refresh_token: &str,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Self::verify_refresh_token(refresh_token)?;
        Self::generate_access_token(&claims.sub)
    }

    fn refresh_cookie(value: String, max_age: actix_web::cookie::time::Duration) -> Cookie<'static> {
        Cookie::build(REFRESH_COOKIE_NAME, value)
            .path("/")
            .max_age(max_age)
            .same_site(SameSite::Strict)
            .http_only(true)
            .secure(AppConfig::get().is_production())
            .finish()
    }

    pub fn create_refresh_token_cookie(refresh_token: &str) -> Cookie<'static> {
        let days = AppConfig::get().auth.jwt.refresh_token_expiry;
        Self::refresh_cookie(
            refresh_token.to_string(),
            actix_web::cookie::time::Duration::days(days),
        )
    }

    /// 注销时下发的立即过期 Cookie
    pub fn create_empty_refresh_token_cookie() -> Cookie<'static> {
        Self::refresh_cookie(String::new(), actix_web::cookie::time::Duration::seconds(0))
    }

    pub fn extract_refresh_token_from_cookie(req: &actix_web::HttpRequest) -> Option<String> {
        req.cookie(REFRESH_COOKIE_NAME)
            .map(|cookie| cookie.value().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::Claims;

    #[test]
    fn test_claims_serde_roundtrip() {
        let claims = Claims {
            sub: "admin".to_string(),
            token_type: "access".to_string(),
            exp: 1_900_000_000,
            iat: 1_800_000_000,
        };

        let json = serde_json::to_string(&claims).unwrap();
        let back: Claims = serde_json::from_str(&json).unwrap();
        assert_eq!(back.sub, "admin");
        assert_eq!(back.token_type, "access");
        assert_eq!(back.exp, 1_900_000_000);
    }
}
