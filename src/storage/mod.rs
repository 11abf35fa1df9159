use std::sync::Arc;

use crate::models::{
    assignments::{
        entities::{FeeAssignment, Installment, InstallmentStatus},
        requests::{NewAssignment, NewInstallment},
        responses::AssignmentDetail,
    },
    exams::{
        entities::{Exam, ExamSubject},
        requests::{ExamSubjectLink, UpdateExamRequest},
        responses::ExamDetail,
    },
    fees::{
        entities::FeePackage,
        requests::{CreateFeePackageRequest, UpdateFeePackageRequest},
    },
    marks::entities::StudentMark,
    payments::{entities::Payment, requests::CreatePaymentRequest, responses::PaymentDetail},
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
    subjects::{entities::Subject, requests::CreateSubjectRequest},
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 学生管理方法
    // 创建学生（注册号在存储层生成，唯一冲突时重试）
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    // 通过ID获取学生信息
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 分页列出学生
    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse>;
    // 更新学生信息
    async fn update_student(&self, id: i64, update: UpdateStudentRequest)
    -> Result<Option<Student>>;
    // 删除学生（级联删除分配、分期、缴费与成绩）
    async fn delete_student(&self, id: i64) -> Result<bool>;
    // 批量升级年级与学年，返回实际更新条数
    async fn promote_students(
        &self,
        student_ids: &[i64],
        new_grade: &str,
        new_academic_year: &str,
    ) -> Result<u64>;
    // 统计学生数量
    async fn count_students(&self) -> Result<u64>;

    /// 收费套餐管理方法
    async fn create_fee_package(&self, package: CreateFeePackageRequest) -> Result<FeePackage>;
    async fn get_fee_package_by_id(&self, id: i64) -> Result<Option<FeePackage>>;
    async fn list_fee_packages(&self) -> Result<Vec<FeePackage>>;
    async fn update_fee_package(
        &self,
        id: i64,
        update: UpdateFeePackageRequest,
    ) -> Result<Option<FeePackage>>;
    async fn delete_fee_package(&self, id: i64) -> Result<bool>;

    /// 收费分配管理方法
    // 在同一事务内创建分配与分期计划
    async fn create_assignment_with_installments(
        &self,
        assignment: NewAssignment,
        installments: Vec<NewInstallment>,
    ) -> Result<(FeeAssignment, Vec<Installment>)>;
    // 列出分配，附带学生与套餐信息
    async fn list_assignments_with_relations(&self) -> Result<Vec<AssignmentDetail>>;
    // 通过ID获取分配
    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<FeeAssignment>>;
    // 删除分配（级联删除分期）
    async fn delete_assignment(&self, id: i64) -> Result<bool>;
    // 列出分配下的分期
    async fn list_installments_by_assignment(&self, assignment_id: i64)
    -> Result<Vec<Installment>>;
    // 列出学生的全部分配及对应套餐（账单用）
    async fn list_assignments_by_student(
        &self,
        student_id: i64,
    ) -> Result<Vec<(FeeAssignment, Option<FeePackage>)>>;
    // 通过ID获取分期
    async fn get_installment_by_id(&self, id: i64) -> Result<Option<Installment>>;
    // 更新分期状态
    async fn set_installment_status(&self, id: i64, status: InstallmentStatus) -> Result<bool>;

    /// 缴费管理方法
    async fn create_payment(&self, payment: CreatePaymentRequest) -> Result<Payment>;
    // 列出缴费记录，附带学生与分期信息，可按学生过滤
    async fn list_payments_with_relations(
        &self,
        student_id: Option<i64>,
    ) -> Result<Vec<PaymentDetail>>;
    async fn get_payment_by_id(&self, id: i64) -> Result<Option<Payment>>;
    async fn delete_payment(&self, id: i64) -> Result<bool>;
    // 分期的已收总额（状态重算用）
    async fn sum_payments_by_installment(&self, installment_id: i64) -> Result<f64>;
    // 学生的已收总额（账单用）
    async fn sum_payments_by_student(&self, student_id: i64) -> Result<f64>;
    // 全部应收（分配 final_amount 之和）
    async fn sum_assignment_final_amounts(&self) -> Result<f64>;
    // 全部已收
    async fn sum_payments(&self) -> Result<f64>;
    // 指定时间区间内的已收（按 paid_at，左闭右开）
    async fn sum_payments_between(&self, from_ts: i64, to_ts: i64) -> Result<f64>;

    /// 考试管理方法
    // 在同一事务内创建考试与科目关联
    async fn create_exam_with_subjects(
        &self,
        name: &str,
        start_date: i64,
        end_date: Option<i64>,
        subjects: Vec<ExamSubjectLink>,
    ) -> Result<ExamDetail>;
    async fn list_exams_with_subjects(&self) -> Result<Vec<ExamDetail>>;
    async fn get_exam_by_id(&self, id: i64) -> Result<Option<Exam>>;
    async fn get_exam_with_subjects(&self, id: i64) -> Result<Option<ExamDetail>>;
    async fn update_exam(&self, id: i64, update: UpdateExamRequest) -> Result<Option<Exam>>;
    // 删除考试（级联删除科目关联与成绩）
    async fn delete_exam(&self, id: i64) -> Result<bool>;

    /// 科目管理方法
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject>;
    async fn list_subjects(&self) -> Result<Vec<Subject>>;

    /// 成绩管理方法
    // 获取考试中某科目的关联记录
    async fn get_exam_subject(&self, exam_id: i64, subject_id: i64)
    -> Result<Option<ExamSubject>>;
    // 列出某考试科目下的全部成绩及学生信息
    async fn list_marks_for_exam_subject(
        &self,
        exam_subject_id: i64,
    ) -> Result<Vec<(StudentMark, Option<Student>)>>;
    // 原子写入成绩：同一 (学生, 考试科目) 已存在则更新
    async fn upsert_mark(
        &self,
        student_id: i64,
        exam_subject_id: i64,
        obtained_marks: f64,
        remarks: Option<String>,
    ) -> Result<()>;
    // 列出考试全部科目的成绩及学生信息（成绩单用）
    async fn list_marks_for_exam(
        &self,
        exam_subject_ids: &[i64],
    ) -> Result<Vec<(StudentMark, Option<Student>)>>;

    /// 聊天助手查询方法
    // 按学号查找学生
    async fn search_students_by_roll(&self, roll_no: &str) -> Result<Vec<Student>>;
    // 按姓名模糊查找学生（最多返回 5 条）
    async fn search_students_by_name(&self, name: &str) -> Result<Vec<Student>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
