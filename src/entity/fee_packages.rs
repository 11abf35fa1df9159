//! 收费套餐实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "fee_packages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub grade: String,
    pub total_amount: f64,
    #[sea_orm(column_type = "Text", nullable)]
    pub breakdown: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::fee_assignments::Entity")]
    FeeAssignments,
}

impl Related<super::fee_assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FeeAssignments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_fee_package(self) -> crate::models::fees::entities::FeePackage {
        use chrono::{DateTime, Utc};
        use crate::models::fees::entities::FeePackage;

        FeePackage {
            id: self.id,
            name: self.name,
            grade: self.grade,
            total_amount: self.total_amount,
            breakdown: self.breakdown,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
