pub mod list;
pub mod save;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::marks::requests::{MarkListParams, SaveMarksRequest};
use crate::storage::Storage;

pub struct MarkService {
    storage: Option<Arc<dyn Storage>>,
}

impl MarkService {
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

    // 列出某考试科目下的成绩
    pub async fn list_marks(
        &self,
        request: &HttpRequest,
        query: MarkListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_marks(self, request, query).await
    }

    // 批量录入/修改成绩
    pub async fn save_marks(
        &self,
        request: &HttpRequest,
        marks_data: SaveMarksRequest,
    ) -> ActixResult<HttpResponse> {
        save::save_marks(self, request, marks_data).await
    }
}
