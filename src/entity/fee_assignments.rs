//! 收费分配实体
//!
//! 金额字段在分配创建时快照，套餐后续修改不会回写。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "fee_assignments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub package_id: i64,
    pub total_fee: f64,
    pub discount: f64,
    pub final_amount: f64,
    pub payment_mode: String,
    pub assigned_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::fee_packages::Entity",
        from = "Column::PackageId",
        to = "super::fee_packages::Column::Id"
    )]
    FeePackage,
    #[sea_orm(has_many = "super::installments::Entity")]
    Installments,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::fee_packages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FeePackage.def()
    }
}

impl Related<super::installments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Installments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_assignment(self) -> crate::models::assignments::entities::FeeAssignment {
        use chrono::{DateTime, Utc};
        use crate::models::assignments::entities::{FeeAssignment, PaymentMode};

        FeeAssignment {
            id: self.id,
            student_id: self.student_id,
            package_id: self.package_id,
            total_fee: self.total_fee,
            discount: self.discount,
            final_amount: self.final_amount,
            payment_mode: self
                .payment_mode
                .parse::<PaymentMode>()
                .unwrap_or(PaymentMode::Full),
            assigned_at: DateTime::<Utc>::from_timestamp(self.assigned_at, 0).unwrap_or_default(),
        }
    }
}
