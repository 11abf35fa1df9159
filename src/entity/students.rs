//! 学生实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub full_name: String,
    pub grade: String,
    pub stream: String,
    pub section: Option<String>,
    pub roll_no: String,
    #[sea_orm(unique)]
    pub registration_no: String,
    pub academic_year: String,
    pub parent_name: Option<String>,
    pub parent_contact: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub address: Option<String>,
    pub dob: Option<i64>,
    pub admission_date: i64,
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::fee_assignments::Entity")]
    FeeAssignments,
    #[sea_orm(has_many = "super::payments::Entity")]
    Payments,
    #[sea_orm(has_many = "super::student_marks::Entity")]
    StudentMarks,
}

impl Related<super::fee_assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FeeAssignments.def()
    }
}

impl Related<super::payments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payments.def()
    }
}

impl Related<super::student_marks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentMarks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_student(self) -> crate::models::students::entities::Student {
        use crate::models::students::entities::{Student, StudentStatus};
        use chrono::{DateTime, Utc};

        Student {
            id: self.id,
            full_name: self.full_name,
            grade: self.grade,
            stream: self.stream,
            section: self.section,
            roll_no: self.roll_no,
            registration_no: self.registration_no,
            academic_year: self.academic_year,
            parent_name: self.parent_name,
            parent_contact: self.parent_contact,
            address: self.address,
            dob: self
                .dob
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            admission_date: DateTime::<Utc>::from_timestamp(self.admission_date, 0)
                .unwrap_or_default(),
            status: self
                .status
                .parse::<StudentStatus>()
                .unwrap_or(StudentStatus::Active),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
