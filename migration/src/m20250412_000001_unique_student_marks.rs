use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 每个 (学生, 考试科目) 只允许一条成绩记录，保存走原子 upsert
        manager
            .create_index(
                Index::create()
                    .name("uq_student_marks_student_exam_subject")
                    .table(StudentMarks::Table)
                    .col(StudentMarks::StudentId)
                    .col(StudentMarks::ExamSubjectId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("uq_student_marks_student_exam_subject")
                    .table(StudentMarks::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum StudentMarks {
    Table,
    StudentId,
    ExamSubjectId,
}
