use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::fee_assignments::{ActiveModel, Column, Entity as FeeAssignments};
use crate::entity::fee_packages::{Column as PackageColumn, Entity as FeePackages};
use crate::entity::installments::{
    ActiveModel as InstallmentActiveModel, Column as InstallmentColumn, Entity as Installments,
};
use crate::entity::students::Entity as Students;
use crate::errors::{EdubillError, Result};
use crate::models::{
    assignments::{
        entities::{FeeAssignment, Installment, InstallmentStatus},
        requests::{NewAssignment, NewInstallment},
        responses::AssignmentDetail,
    },
    fees::entities::FeePackage,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 在同一事务内创建分配与分期计划
    ///
    /// 金额由服务层从套餐快照而来，分期初始状态一律 partial。
    pub async fn create_assignment_with_installments_impl(
        &self,
        assignment: NewAssignment,
        installments: Vec<NewInstallment>,
    ) -> Result<(FeeAssignment, Vec<Installment>)> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EdubillError::database_operation(format!("开启事务失败: {e}")))?;

        let model = ActiveModel {
            student_id: Set(assignment.student_id),
            package_id: Set(assignment.package_id),
            total_fee: Set(assignment.total_fee),
            discount: Set(assignment.discount),
            final_amount: Set(assignment.final_amount),
            payment_mode: Set(assignment.payment_mode.to_string()),
            assigned_at: Set(now),
            ..Default::default()
        };

        let created = model
            .insert(&txn)
            .await
            .map_err(|e| EdubillError::database_operation(format!("创建收费分配失败: {e}")))?;

        let mut created_installments = Vec::with_capacity(installments.len());
        for item in installments {
            let installment_model = InstallmentActiveModel {
                assignment_id: Set(created.id),
                title: Set(item.title),
                amount: Set(item.amount),
                due_date: Set(item.due_date.map(|d| d.timestamp())),
                status: Set(InstallmentStatus::Partial.to_string()),
                created_at: Set(now),
                ..Default::default()
            };

            let created_item = installment_model
                .insert(&txn)
                .await
                .map_err(|e| EdubillError::database_operation(format!("创建分期失败: {e}")))?;
            created_installments.push(created_item.into_installment());
        }

        txn.commit()
            .await
            .map_err(|e| EdubillError::database_operation(format!("提交事务失败: {e}")))?;

        Ok((created.into_assignment(), created_installments))
    }

    /// 列出全部分配，附带学生与套餐信息
    pub async fn list_assignments_with_relations_impl(&self) -> Result<Vec<AssignmentDetail>> {
        let rows = FeeAssignments::find()
            .find_also_related(Students)
            .order_by_desc(Column::AssignedAt)
            .all(&self.db)
            .await
            .map_err(|e| EdubillError::database_operation(format!("查询分配列表失败: {e}")))?;

        let packages = self
            .load_packages_for(rows.iter().map(|(a, _)| a.package_id))
            .await?;

        Ok(rows
            .into_iter()
            .map(|(assignment, student)| {
                let package = packages.get(&assignment.package_id).cloned();
                AssignmentDetail {
                    assignment: assignment.into_assignment(),
                    student: student.map(|m| m.into_student()),
                    package,
                }
            })
            .collect())
    }

    /// 通过 ID 获取分配
    pub async fn get_assignment_by_id_impl(&self, id: i64) -> Result<Option<FeeAssignment>> {
        let result = FeeAssignments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EdubillError::database_operation(format!("查询分配失败: {e}")))?;

        Ok(result.map(|m| m.into_assignment()))
    }

    /// 删除分配（分期随外键级联删除）
    pub async fn delete_assignment_impl(&self, id: i64) -> Result<bool> {
        let result = FeeAssignments::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EdubillError::database_operation(format!("删除分配失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 列出分配下的分期
    pub async fn list_installments_by_assignment_impl(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<Installment>> {
        let results = Installments::find()
            .filter(InstallmentColumn::AssignmentId.eq(assignment_id))
            .order_by_asc(InstallmentColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| EdubillError::database_operation(format!("查询分期列表失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_installment()).collect())
    }

    /// 列出学生的全部分配及对应套餐
    pub async fn list_assignments_by_student_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<(FeeAssignment, Option<FeePackage>)>> {
        let rows = FeeAssignments::find()
            .filter(Column::StudentId.eq(student_id))
            .find_also_related(FeePackages)
            .order_by_asc(Column::AssignedAt)
            .all(&self.db)
            .await
            .map_err(|e| EdubillError::database_operation(format!("查询学生分配失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|(assignment, package)| {
                (
                    assignment.into_assignment(),
                    package.map(|m| m.into_fee_package()),
                )
            })
            .collect())
    }

    /// 通过 ID 获取分期
    pub async fn get_installment_by_id_impl(&self, id: i64) -> Result<Option<Installment>> {
        let result = Installments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EdubillError::database_operation(format!("查询分期失败: {e}")))?;

        Ok(result.map(|m| m.into_installment()))
    }

    /// 更新分期状态
    pub async fn set_installment_status_impl(
        &self,
        id: i64,
        status: InstallmentStatus,
    ) -> Result<bool> {
        let result = Installments::update_many()
            .col_expr(
                InstallmentColumn::Status,
                sea_orm::sea_query::Expr::value(status.to_string()),
            )
            .filter(InstallmentColumn::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| EdubillError::database_operation(format!("更新分期状态失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 批量加载套餐，避免逐行查询
    async fn load_packages_for(
        &self,
        package_ids: impl Iterator<Item = i64>,
    ) -> Result<HashMap<i64, FeePackage>> {
        let mut ids: Vec<i64> = package_ids.collect();
        ids.sort_unstable();
        ids.dedup();

        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let packages = FeePackages::find()
            .filter(PackageColumn::Id.is_in(ids))
            .all(&self.db)
            .await
            .map_err(|e| EdubillError::database_operation(format!("批量查询套餐失败: {e}")))?;

        Ok(packages
            .into_iter()
            .map(|m| (m.id, m.into_fee_package()))
            .collect())
    }
}
