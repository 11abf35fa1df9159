//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_edubill_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum EdubillError {
            $($variant(String),)*
        }

        impl EdubillError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(EdubillError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(EdubillError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(EdubillError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl EdubillError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        EdubillError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_edubill_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    CacheConnection("E004", "Cache Connection Error"),
    Validation("E005", "Validation Error"),
    NotFound("E006", "Resource Not Found"),
    Serialization("E007", "Serialization Error"),
    DateParse("E008", "Date Parse Error"),
    Authentication("E009", "Authentication Error"),
}

impl EdubillError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for EdubillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for EdubillError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for EdubillError {
    fn from(err: sea_orm::DbErr) -> Self {
        EdubillError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for EdubillError {
    fn from(err: serde_json::Error) -> Self {
        EdubillError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for EdubillError {
    fn from(err: chrono::ParseError) -> Self {
        EdubillError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EdubillError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(EdubillError::database_config("test").code(), "E001");
        assert_eq!(EdubillError::validation("test").code(), "E005");
        assert_eq!(EdubillError::authentication("test").code(), "E009");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            EdubillError::database_operation("test").error_type(),
            "Database Operation Error"
        );
        assert_eq!(
            EdubillError::not_found("test").error_type(),
            "Resource Not Found"
        );
    }

    #[test]
    fn test_format_simple() {
        let err = EdubillError::validation("Amount must not be negative");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Amount must not be negative"));
    }
}
