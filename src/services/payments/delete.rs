use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use super::{PaymentService, reconcile_installment};
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_payment(
    service: &PaymentService,
    request: &HttpRequest,
    payment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 先取出记录，删除后还要重算关联分期的状态
    let payment = match storage.get_payment_by_id(payment_id).await {
        Ok(Some(payment)) => payment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::PaymentNotFound,
                "Payment not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get payment: {e}"),
                )),
            );
        }
    };

    match storage.delete_payment(payment_id).await {
        Ok(true) => {
            // 已缴足的分期可能因此回到 partial
            if let Some(installment_id) = payment.installment_id
                && let Err(e) = reconcile_installment(&storage, installment_id).await
            {
                warn!(
                    "Failed to reconcile installment {} after deleting payment {}: {}",
                    installment_id, payment_id, e
                );
            }

            info!("Payment {} deleted", payment_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Payment deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::PaymentNotFound,
            "Payment not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Payment deletion failed: {e}"),
            )),
        ),
    }
}
