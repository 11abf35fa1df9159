pub mod common;

pub mod assignments;
pub mod auth;
pub mod chat;
pub mod exams;
pub mod fees;
pub mod marks;
pub mod payments;
pub mod reports;
pub mod students;
pub mod subjects;
pub mod system;

pub use common::pagination::{PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// 程序启动时间，用于健康检查的运行时长统计
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

// 统一的业务错误码，随 ApiResponse.code 返回
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 40000,
    ValidationFailed = 40001,

    Unauthorized = 40100,
    AuthFailed = 40101,

    NotFound = 40400,
    StudentNotFound = 40401,
    PackageNotFound = 40402,
    AssignmentNotFound = 40403,
    InstallmentNotFound = 40404,
    PaymentNotFound = 40405,
    ExamNotFound = 40406,
    SubjectNotInExam = 40407,

    Conflict = 40900,
    SubjectAlreadyExists = 40901,

    InternalServerError = 50000,
}

#[cfg(test)]
mod tests {
    use super::ErrorCode;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::AuthFailed as i32, 40101);
        assert_eq!(ErrorCode::StudentNotFound as i32, 40401);
        assert_eq!(ErrorCode::InternalServerError as i32, 50000);
    }
}
