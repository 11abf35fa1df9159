use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::fee_assignments::{
    Column as AssignmentColumn, Entity as FeeAssignments,
};
use crate::entity::installments::{Column as InstallmentColumn, Entity as Installments};
use crate::entity::payments::{ActiveModel, Column, Entity as Payments};
use crate::entity::students::Entity as Students;
use crate::errors::{EdubillError, Result};
use crate::models::{
    assignments::entities::Installment,
    payments::{entities::Payment, requests::CreatePaymentRequest, responses::PaymentDetail},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建缴费记录
    pub async fn create_payment_impl(&self, req: CreatePaymentRequest) -> Result<Payment> {
        let now = chrono::Utc::now().timestamp();
        let paid_at = req.payment_date.map(|d| d.timestamp()).unwrap_or(now);

        let model = ActiveModel {
            student_id: Set(req.student_id),
            installment_id: Set(req.installment_id),
            amount: Set(req.amount),
            method: Set(req.method),
            received_by: Set(req.received_by),
            remarks: Set(req.remarks),
            paid_at: Set(paid_at),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EdubillError::database_operation(format!("创建缴费记录失败: {e}")))?;

        Ok(result.into_payment())
    }

    /// 列出缴费记录，附带学生与分期信息
    pub async fn list_payments_with_relations_impl(
        &self,
        student_id: Option<i64>,
    ) -> Result<Vec<PaymentDetail>> {
        let mut select = Payments::find();

        if let Some(student_id) = student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        let rows = select
            .find_also_related(Students)
            .order_by_desc(Column::PaidAt)
            .all(&self.db)
            .await
            .map_err(|e| EdubillError::database_operation(format!("查询缴费列表失败: {e}")))?;

        let installments = self
            .load_installments_for(rows.iter().filter_map(|(p, _)| p.installment_id))
            .await?;

        Ok(rows
            .into_iter()
            .map(|(payment, student)| {
                let installment = payment
                    .installment_id
                    .and_then(|id| installments.get(&id).cloned());
                PaymentDetail {
                    payment: payment.into_payment(),
                    student: student.map(|m| m.into_student()),
                    installment,
                }
            })
            .collect())
    }

    /// 通过 ID 获取缴费记录
    pub async fn get_payment_by_id_impl(&self, id: i64) -> Result<Option<Payment>> {
        let result = Payments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EdubillError::database_operation(format!("查询缴费记录失败: {e}")))?;

        Ok(result.map(|m| m.into_payment()))
    }

    /// 删除缴费记录
    pub async fn delete_payment_impl(&self, id: i64) -> Result<bool> {
        let result = Payments::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EdubillError::database_operation(format!("删除缴费记录失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 分期的已收总额
    pub async fn sum_payments_by_installment_impl(&self, installment_id: i64) -> Result<f64> {
        self.sum_amount(Payments::find().filter(Column::InstallmentId.eq(installment_id)))
            .await
    }

    /// 学生的已收总额
    pub async fn sum_payments_by_student_impl(&self, student_id: i64) -> Result<f64> {
        self.sum_amount(Payments::find().filter(Column::StudentId.eq(student_id)))
            .await
    }

    /// 全部应收（分配 final_amount 之和）
    pub async fn sum_assignment_final_amounts_impl(&self) -> Result<f64> {
        let total: Option<Option<f64>> = FeeAssignments::find()
            .select_only()
            .column_as(AssignmentColumn::FinalAmount.sum(), "total")
            .into_tuple()
            .one(&self.db)
            .await
            .map_err(|e| EdubillError::database_operation(format!("统计应收总额失败: {e}")))?;

        Ok(total.flatten().unwrap_or(0.0))
    }

    /// 全部已收
    pub async fn sum_payments_impl(&self) -> Result<f64> {
        self.sum_amount(Payments::find()).await
    }

    /// 指定时间区间内的已收（按 paid_at，左闭右开）
    pub async fn sum_payments_between_impl(&self, from_ts: i64, to_ts: i64) -> Result<f64> {
        self.sum_amount(
            Payments::find()
                .filter(Column::PaidAt.gte(from_ts))
                .filter(Column::PaidAt.lt(to_ts)),
        )
        .await
    }

    async fn sum_amount(&self, select: sea_orm::Select<Payments>) -> Result<f64> {
        let total: Option<Option<f64>> = select
            .select_only()
            .column_as(Column::Amount.sum(), "total")
            .into_tuple()
            .one(&self.db)
            .await
            .map_err(|e| EdubillError::database_operation(format!("统计缴费总额失败: {e}")))?;

        Ok(total.flatten().unwrap_or(0.0))
    }

    /// 批量加载分期，避免逐行查询
    async fn load_installments_for(
        &self,
        installment_ids: impl Iterator<Item = i64>,
    ) -> Result<HashMap<i64, Installment>> {
        let mut ids: Vec<i64> = installment_ids.collect();
        ids.sort_unstable();
        ids.dedup();

        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let installments = Installments::find()
            .filter(InstallmentColumn::Id.is_in(ids))
            .all(&self.db)
            .await
            .map_err(|e| EdubillError::database_operation(format!("批量查询分期失败: {e}")))?;

        Ok(installments
            .into_iter()
            .map(|m| (m.id, m.into_installment()))
            .collect())
    }
}
