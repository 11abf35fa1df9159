//! 成绩实体
//!
//! (student_id, exam_subject_id) 上有唯一索引，保存使用原子 upsert。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student_marks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub exam_subject_id: i64,
    pub obtained_marks: f64,
    #[sea_orm(column_type = "Text", nullable)]
    pub remarks: Option<String>,
    pub updated_at: i64,
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
        belongs_to = "super::exam_subjects::Entity",
        from = "Column::ExamSubjectId",
        to = "super::exam_subjects::Column::Id"
    )]
    ExamSubject,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::exam_subjects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExamSubject.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_mark(self) -> crate::models::marks::entities::StudentMark {
        use chrono::{DateTime, Utc};
        use crate::models::marks::entities::StudentMark;

        StudentMark {
            id: self.id,
            student_id: self.student_id,
            exam_subject_id: self.exam_subject_id,
            obtained_marks: self.obtained_marks,
            remarks: self.remarks,
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
