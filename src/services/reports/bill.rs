use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ReportService;
use crate::models::{
    ApiResponse, ErrorCode,
    reports::{
        requests::BillParams,
        responses::{BillPackageLine, BillResponse},
    },
};
use crate::utils::finance::fee_summary;

pub async fn student_bill(
    service: &ReportService,
    request: &HttpRequest,
    query: BillParams,
) -> ActixResult<HttpResponse> {
    let student_id = match query.student_id {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                "student_id query parameter is required",
            )));
        }
    };

    let storage = service.get_storage(request);

    let student = match storage.get_student_by_id(student_id).await {
        Ok(Some(student)) => student,
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
    };

    let assignments = match storage.list_assignments_by_student(student_id).await {
        Ok(assignments) => assignments,
        Err(e) => {
            error!("Failed to list assignments: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while fetching assignments",
                )),
            );
        }
    };

    let paid = match storage.sum_payments_by_student(student_id).await {
        Ok(paid) => paid,
        Err(e) => {
            error!("Failed to sum payments: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Internal server error while summing payments",
                )),
            );
        }
    };

    // 账单金额全部来自分配时的快照
    let mut total_fee = 0.0;
    let mut discount = 0.0;
    let packages: Vec<BillPackageLine> = assignments
        .into_iter()
        .map(|(assignment, package)| {
            total_fee += assignment.total_fee;
            discount += assignment.discount;
            let (name, breakdown) = match package {
                Some(package) => (package.name, package.breakdown),
                None => (String::new(), None),
            };
            BillPackageLine {
                id: assignment.id,
                name,
                breakdown,
                total_fee: assignment.total_fee,
                discount: assignment.discount,
                net_amount: assignment.final_amount,
            }
        })
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        BillResponse {
            student,
            packages,
            summary: fee_summary(total_fee, discount, paid),
        },
        "Bill generated successfully",
    )))
}
