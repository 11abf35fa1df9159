/// 定义一个从路径参数安全提取 i64 的提取器
///
/// 解析失败时返回统一的 400 响应，而不是 actix 默认的纯文本错误。
#[macro_export]
macro_rules! define_safe_i64_extractor {
    ($name:ident, $param:expr) => {
        pub struct $name(pub i64);

        impl actix_web::FromRequest for $name {
            type Error = actix_web::Error;
            type Future = std::future::Ready<Result<Self, Self::Error>>;

            fn from_request(
                req: &actix_web::HttpRequest,
                _payload: &mut actix_web::dev::Payload,
            ) -> Self::Future {
                let parsed = req
                    .match_info()
                    .get($param)
                    .and_then(|raw| raw.parse::<i64>().ok());

                std::future::ready(match parsed {
                    Some(id) => Ok($name(id)),
                    None => Err(actix_web::error::ErrorBadRequest(
                        serde_json::to_string(&$crate::models::ApiResponse::<()>::error_empty(
                            $crate::models::ErrorCode::BadRequest,
                            format!("Invalid path parameter: {}", $param),
                        ))
                        .unwrap_or_default(),
                    )),
                })
            }
        }
    };
}

// 通用的 {id} 提取器，各路由的详情/更新/删除共用
define_safe_i64_extractor!(SafeIdI64, "id");
