pub mod summary;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::cache::MokaCacheWrapper;
use crate::storage::Storage;

pub struct DashboardService {
    storage: Option<Arc<dyn Storage>>,
}

impl DashboardService {
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

    pub(crate) fn get_cache(&self, request: &HttpRequest) -> Arc<MokaCacheWrapper> {
        request
            .app_data::<actix_web::web::Data<Arc<MokaCacheWrapper>>>()
            .expect("Cache not found in app data")
            .get_ref()
            .clone()
    }

    // 仪表盘汇总
    pub async fn dashboard_summary(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        summary::dashboard_summary(self, request).await
    }
}
