use super::SeaOrmStorage;
use crate::entity::fee_assignments::{Column as AssignmentColumn, Entity as FeeAssignments};
use crate::entity::fee_packages::{ActiveModel, Column, Entity as FeePackages};
use crate::errors::{EdubillError, Result};
use crate::models::fees::{
    entities::FeePackage,
    requests::{CreateFeePackageRequest, UpdateFeePackageRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建收费套餐
    pub async fn create_fee_package_impl(
        &self,
        req: CreateFeePackageRequest,
    ) -> Result<FeePackage> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            grade: Set(req.grade),
            total_amount: Set(req.total_amount),
            breakdown: Set(req.breakdown),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EdubillError::database_operation(format!("创建收费套餐失败: {e}")))?;

        Ok(result.into_fee_package())
    }

    /// 通过 ID 获取收费套餐
    pub async fn get_fee_package_by_id_impl(&self, id: i64) -> Result<Option<FeePackage>> {
        let result = FeePackages::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EdubillError::database_operation(format!("查询收费套餐失败: {e}")))?;

        Ok(result.map(|m| m.into_fee_package()))
    }

    /// 列出全部收费套餐
    pub async fn list_fee_packages_impl(&self) -> Result<Vec<FeePackage>> {
        let results = FeePackages::find()
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| EdubillError::database_operation(format!("查询收费套餐列表失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_fee_package()).collect())
    }

    /// 更新收费套餐
    ///
    /// 只影响套餐本身，已有分配中的快照金额不会回写。
    pub async fn update_fee_package_impl(
        &self,
        id: i64,
        update: UpdateFeePackageRequest,
    ) -> Result<Option<FeePackage>> {
        let existing = self.get_fee_package_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(grade) = update.grade {
            model.grade = Set(grade);
        }

        if let Some(total_amount) = update.total_amount {
            model.total_amount = Set(total_amount);
        }

        if let Some(breakdown) = update.breakdown {
            model.breakdown = Set(Some(breakdown));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EdubillError::database_operation(format!("更新收费套餐失败: {e}")))?;

        self.get_fee_package_by_id_impl(id).await
    }

    /// 删除收费套餐
    ///
    /// 分配里的金额是开单时的快照，被引用的套餐禁止删除（外键同为 Restrict）。
    pub async fn delete_fee_package_impl(&self, id: i64) -> Result<bool> {
        let references = FeeAssignments::find()
            .filter(AssignmentColumn::PackageId.eq(id))
            .count(&self.db)
            .await
            .map_err(|e| EdubillError::database_operation(format!("查询套餐引用失败: {e}")))?;

        if references > 0 {
            return Err(EdubillError::validation(format!(
                "收费套餐仍被 {references} 条分配引用，禁止删除"
            )));
        }

        let result = FeePackages::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EdubillError::database_operation(format!("删除收费套餐失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::assignments::entities::PaymentMode;
    use crate::models::assignments::requests::NewAssignment;
    use crate::models::students::requests::CreateStudentRequest;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    async fn memory_storage() -> SeaOrmStorage {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1);
        let db = Database::connect(opt).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        SeaOrmStorage { db }
    }

    fn package_request(name: &str) -> CreateFeePackageRequest {
        CreateFeePackageRequest {
            name: name.to_string(),
            grade: "11".to_string(),
            total_amount: 10000.0,
            breakdown: None,
        }
    }

    #[tokio::test]
    async fn test_delete_refused_while_assignments_reference_package() {
        let storage = memory_storage().await;

        let student = storage
            .create_student_impl(CreateStudentRequest {
                full_name: "Ram Sharma".to_string(),
                grade: "11".to_string(),
                stream: "Science".to_string(),
                section: None,
                roll_no: "1".to_string(),
                academic_year: "2082".to_string(),
                parent_name: None,
                parent_contact: None,
                address: None,
                dob: None,
                admission_date: None,
                status: None,
            })
            .await
            .unwrap();

        let package = storage
            .create_fee_package_impl(package_request("Grade 11 Annual"))
            .await
            .unwrap();

        let (assignment, _) = storage
            .create_assignment_with_installments_impl(
                NewAssignment {
                    student_id: student.id,
                    package_id: package.id,
                    total_fee: 10000.0,
                    discount: 1000.0,
                    final_amount: 9000.0,
                    payment_mode: PaymentMode::Full,
                },
                vec![],
            )
            .await
            .unwrap();

        // 删除必须被拒绝，分配里的快照金额不能跟着消失
        assert!(storage.delete_fee_package_impl(package.id).await.is_err());
        assert!(
            storage
                .get_assignment_by_id_impl(assignment.id)
                .await
                .unwrap()
                .is_some()
        );
        assert!(
            storage
                .get_fee_package_by_id_impl(package.id)
                .await
                .unwrap()
                .is_some()
        );
    }

    #[tokio::test]
    async fn test_delete_unreferenced_package_succeeds() {
        let storage = memory_storage().await;
        let package = storage
            .create_fee_package_impl(package_request("Grade 12 Annual"))
            .await
            .unwrap();

        assert!(storage.delete_fee_package_impl(package.id).await.unwrap());
        assert!(
            storage
                .get_fee_package_by_id_impl(package.id)
                .await
                .unwrap()
                .is_none()
        );
    }
}
