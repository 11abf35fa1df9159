use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info, warn};

use super::{PaymentService, reconcile_installment};
use crate::models::{
    ApiResponse, ErrorCode,
    payments::{requests::CreatePaymentRequest, responses::PaymentResponse},
};
use crate::utils::validate::validate_amount;

pub async fn create_payment(
    service: &PaymentService,
    request: &HttpRequest,
    payment_data: CreatePaymentRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_amount(payment_data.amount) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    let storage = service.get_storage(request);

    match storage.get_student_by_id(payment_data.student_id).await {
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

    if let Some(installment_id) = payment_data.installment_id {
        match storage.get_installment_by_id(installment_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::InstallmentNotFound,
                    "Installment not found",
                )));
            }
            Err(e) => {
                error!("Failed to get installment: {}", e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Internal server error while fetching installment",
                    )),
                );
            }
        }
    }

    let installment_id = payment_data.installment_id;

    match storage.create_payment(payment_data).await {
        Ok(payment) => {
            // 缴费入账后按全量记录重算分期状态
            if let Some(installment_id) = installment_id
                && let Err(e) = reconcile_installment(&storage, installment_id).await
            {
                warn!(
                    "Failed to reconcile installment {} after payment {}: {}",
                    installment_id, payment.id, e
                );
            }

            info!(
                "Payment of {} recorded for student {}",
                payment.amount, payment.student_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                PaymentResponse { payment },
                "Payment recorded successfully",
            )))
        }
        Err(e) => {
            error!("Payment recording failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Payment recording failed: {e}"),
                )),
            )
        }
    }
}
