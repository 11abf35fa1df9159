//! 分期实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "installments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub assignment_id: i64,
    pub title: String,
    pub amount: f64,
    pub due_date: Option<i64>,
    pub status: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::fee_assignments::Entity",
        from = "Column::AssignmentId",
        to = "super::fee_assignments::Column::Id"
    )]
    FeeAssignment,
    #[sea_orm(has_many = "super::payments::Entity")]
    Payments,
}

impl Related<super::fee_assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FeeAssignment.def()
    }
}

impl Related<super::payments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_installment(self) -> crate::models::assignments::entities::Installment {
        use chrono::{DateTime, Utc};
        use crate::models::assignments::entities::{Installment, InstallmentStatus};

        Installment {
            id: self.id,
            assignment_id: self.assignment_id,
            title: self.title,
            amount: self.amount,
            due_date: self
                .due_date
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            status: self
                .status
                .parse::<InstallmentStatus>()
                .unwrap_or(InstallmentStatus::Partial),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
