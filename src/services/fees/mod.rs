pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::fees::requests::{CreateFeePackageRequest, UpdateFeePackageRequest};
use crate::storage::Storage;

pub struct FeePackageService {
    storage: Option<Arc<dyn Storage>>,
}

impl FeePackageService {
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

    // 列出收费套餐
    pub async fn list_packages(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_packages(self, request).await
    }

    // 创建收费套餐
    pub async fn create_package(
        &self,
        request: &HttpRequest,
        package_data: CreateFeePackageRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_package(self, request, package_data).await
    }

    // 更新收费套餐
    pub async fn update_package(
        &self,
        request: &HttpRequest,
        package_id: i64,
        update_data: UpdateFeePackageRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_package(self, request, package_id, update_data).await
    }

    // 删除收费套餐
    pub async fn delete_package(
        &self,
        request: &HttpRequest,
        package_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_package(self, request, package_id).await
    }
}
