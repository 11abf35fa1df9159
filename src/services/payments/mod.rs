pub mod create;
pub mod delete;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::Result;
use crate::models::payments::requests::{CreatePaymentRequest, PaymentListParams};
use crate::storage::Storage;
use crate::utils::finance::installment_status;

pub struct PaymentService {
    storage: Option<Arc<dyn Storage>>,
}

impl PaymentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 列出缴费记录
    pub async fn list_payments(
        &self,
        request: &HttpRequest,
        query: PaymentListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_payments(self, request, query).await
    }

    // 记录缴费
    pub async fn create_payment(
        &self,
        request: &HttpRequest,
        payment_data: CreatePaymentRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_payment(self, request, payment_data).await
    }

    // 删除缴费记录
    pub async fn delete_payment(
        &self,
        request: &HttpRequest,
        payment_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_payment(self, request, payment_id).await
    }
}

/// 按分期的全量缴费记录重算状态并写回
///
/// 创建与删除缴费后都要调用，保证状态始终与缴费总额一致。
pub(crate) async fn reconcile_installment(
    storage: &Arc<dyn Storage>,
    installment_id: i64,
) -> Result<()> {
    let installment = match storage.get_installment_by_id(installment_id).await? {
        Some(installment) => installment,
        None => return Ok(()),
    };

    let paid = storage.sum_payments_by_installment(installment_id).await?;
    let status = installment_status(installment.amount, paid);

    if status != installment.status {
        storage.set_installment_status(installment_id, status).await?;
    }

    Ok(())
}
