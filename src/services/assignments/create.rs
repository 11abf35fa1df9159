use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AssignmentService;
use crate::models::{
    ApiResponse, ErrorCode,
    assignments::{
        requests::{CreateAssignmentRequest, NewAssignment},
        responses::AssignmentResponse,
    },
};
use crate::utils::validate::{validate_amount, validate_discount};

pub async fn create_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_data: CreateAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 学生与套餐都必须存在
    match storage.get_student_by_id(assignment_data.student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student not found",
            )));
        }
        Err(e) => {
            error!("Failed to get student: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching student",
                )),
            );
        }
    }

    let package = match storage
        .get_fee_package_by_id(assignment_data.package_id)
        .await
    {
        Ok(Some(package)) => package,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::PackageNotFound,
                "Fee package not found",
            )));
        }
        Err(e) => {
            error!("Failed to get fee package: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching fee package",
                )),
            );
        }
    };

    // 金额在此处快照，套餐后续修改不影响本次分配
    let total_fee = package.total_amount;
    if let Err(msg) = validate_discount(assignment_data.discount, total_fee) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    for installment in &assignment_data.installments {
        if let Err(msg) = validate_amount(installment.amount) {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ValidationFailed,
                format!("Invalid installment amount: {msg}"),
            )));
        }
    }

    let new_assignment = NewAssignment {
        student_id: assignment_data.student_id,
        package_id: assignment_data.package_id,
        total_fee,
        discount: assignment_data.discount,
        final_amount: total_fee - assignment_data.discount,
        payment_mode: assignment_data.payment_mode,
    };

    match storage
        .create_assignment_with_installments(new_assignment, assignment_data.installments)
        .await
    {
        Ok((assignment, installments)) => {
            info!(
                "Assignment created for student {} with package {} ({} installments)",
                assignment.student_id,
                assignment.package_id,
                installments.len()
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                AssignmentResponse {
                    assignment,
                    installments,
                },
                "Assignment created successfully",
            )))
        }
        Err(e) => {
            error!("Assignment creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Assignment creation failed: {e}"),
                )),
            )
        }
    }
}
