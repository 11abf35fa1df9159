use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建学生表
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Students::FullName).string().not_null())
                    .col(ColumnDef::new(Students::Grade).string().not_null())
                    .col(ColumnDef::new(Students::Stream).string().not_null())
                    .col(ColumnDef::new(Students::Section).string().null())
                    .col(ColumnDef::new(Students::RollNo).string().not_null())
                    .col(
                        ColumnDef::new(Students::RegistrationNo)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Students::AcademicYear).string().not_null())
                    .col(ColumnDef::new(Students::ParentName).string().null())
                    .col(ColumnDef::new(Students::ParentContact).string().null())
                    .col(ColumnDef::new(Students::Address).text().null())
                    .col(ColumnDef::new(Students::Dob).big_integer().null())
                    .col(
                        ColumnDef::new(Students::AdmissionDate)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Students::Status).string().not_null())
                    .col(ColumnDef::new(Students::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Students::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建收费套餐表
        manager
            .create_table(
                Table::create()
                    .table(FeePackages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FeePackages::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FeePackages::Name).string().not_null())
                    .col(ColumnDef::new(FeePackages::Grade).string().not_null())
                    .col(ColumnDef::new(FeePackages::TotalAmount).double().not_null())
                    .col(ColumnDef::new(FeePackages::Breakdown).text().null())
                    .col(
                        ColumnDef::new(FeePackages::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FeePackages::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建收费分配表（学生与套餐的绑定，金额在分配时快照）
        manager
            .create_table(
                Table::create()
                    .table(FeeAssignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FeeAssignments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FeeAssignments::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FeeAssignments::PackageId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FeeAssignments::TotalFee)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(FeeAssignments::Discount).double().not_null())
                    .col(
                        ColumnDef::new(FeeAssignments::FinalAmount)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FeeAssignments::PaymentMode)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FeeAssignments::AssignedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FeeAssignments::Table, FeeAssignments::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    // 分配里的金额是开单时的快照，套餐被引用时禁止删除
                    .foreign_key(
                        ForeignKey::create()
                            .from(FeeAssignments::Table, FeeAssignments::PackageId)
                            .to(FeePackages::Table, FeePackages::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建分期表
        manager
            .create_table(
                Table::create()
                    .table(Installments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Installments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Installments::AssignmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Installments::Title).string().not_null())
                    .col(ColumnDef::new(Installments::Amount).double().not_null())
                    .col(ColumnDef::new(Installments::DueDate).big_integer().null())
                    .col(ColumnDef::new(Installments::Status).string().not_null())
                    .col(
                        ColumnDef::new(Installments::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Installments::Table, Installments::AssignmentId)
                            .to(FeeAssignments::Table, FeeAssignments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建缴费表
        manager
            .create_table(
                Table::create()
                    .table(Payments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Payments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Payments::StudentId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Payments::InstallmentId)
                            .big_integer()
                            .null(),
                    )
                    .col(ColumnDef::new(Payments::Amount).double().not_null())
                    .col(ColumnDef::new(Payments::Method).string().null())
                    .col(ColumnDef::new(Payments::ReceivedBy).string().null())
                    .col(ColumnDef::new(Payments::Remarks).text().null())
                    .col(ColumnDef::new(Payments::PaidAt).big_integer().not_null())
                    .col(ColumnDef::new(Payments::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Payments::Table, Payments::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Payments::Table, Payments::InstallmentId)
                            .to(Installments::Table, Installments::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建考试表
        manager
            .create_table(
                Table::create()
                    .table(Exams::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Exams::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Exams::Name).string().not_null())
                    .col(ColumnDef::new(Exams::StartDate).big_integer().not_null())
                    .col(ColumnDef::new(Exams::EndDate).big_integer().null())
                    .col(ColumnDef::new(Exams::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Exams::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建科目表
        manager
            .create_table(
                Table::create()
                    .table(Subjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subjects::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Subjects::Name).string().not_null())
                    .col(
                        ColumnDef::new(Subjects::Code)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Subjects::Stream).string().null())
                    .col(ColumnDef::new(Subjects::CreditHour).double().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建考试科目关联表（每场考试中的科目带各自的满分/及格线）
        manager
            .create_table(
                Table::create()
                    .table(ExamSubjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ExamSubjects::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ExamSubjects::ExamId).big_integer().not_null())
                    .col(
                        ColumnDef::new(ExamSubjects::SubjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ExamSubjects::FullMarks).double().not_null())
                    .col(ColumnDef::new(ExamSubjects::PassMarks).double().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(ExamSubjects::Table, ExamSubjects::ExamId)
                            .to(Exams::Table, Exams::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ExamSubjects::Table, ExamSubjects::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建成绩表
        manager
            .create_table(
                Table::create()
                    .table(StudentMarks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentMarks::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudentMarks::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentMarks::ExamSubjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentMarks::ObtainedMarks)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(StudentMarks::Remarks).text().null())
                    .col(
                        ColumnDef::new(StudentMarks::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentMarks::Table, StudentMarks::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentMarks::Table, StudentMarks::ExamSubjectId)
                            .to(ExamSubjects::Table, ExamSubjects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StudentMarks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ExamSubjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Subjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Exams::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Payments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Installments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FeeAssignments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FeePackages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Students {
    Table,
    Id,
    FullName,
    Grade,
    Stream,
    Section,
    RollNo,
    RegistrationNo,
    AcademicYear,
    ParentName,
    ParentContact,
    Address,
    Dob,
    AdmissionDate,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum FeePackages {
    Table,
    Id,
    Name,
    Grade,
    TotalAmount,
    Breakdown,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum FeeAssignments {
    Table,
    Id,
    StudentId,
    PackageId,
    TotalFee,
    Discount,
    FinalAmount,
    PaymentMode,
    AssignedAt,
}

#[derive(DeriveIden)]
enum Installments {
    Table,
    Id,
    AssignmentId,
    Title,
    Amount,
    DueDate,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Payments {
    Table,
    Id,
    StudentId,
    InstallmentId,
    Amount,
    Method,
    ReceivedBy,
    Remarks,
    PaidAt,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Exams {
    Table,
    Id,
    Name,
    StartDate,
    EndDate,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Subjects {
    Table,
    Id,
    Name,
    Code,
    Stream,
    CreditHour,
}

#[derive(DeriveIden)]
enum ExamSubjects {
    Table,
    Id,
    ExamId,
    SubjectId,
    FullMarks,
    PassMarks,
}

#[derive(DeriveIden)]
enum StudentMarks {
    Table,
    Id,
    StudentId,
    ExamSubjectId,
    ObtainedMarks,
    Remarks,
    UpdatedAt,
}
