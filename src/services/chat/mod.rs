pub mod intent;
pub mod query;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::chat::requests::ChatRequest;
use crate::storage::Storage;

pub struct ChatService {
    storage: Option<Arc<dyn Storage>>,
}

impl ChatService {
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

    // 关键词问答
    pub async fn chat_query(
        &self,
        request: &HttpRequest,
        chat_data: ChatRequest,
    ) -> ActixResult<HttpResponse> {
        query::chat_query(self, request, chat_data).await
    }
}
