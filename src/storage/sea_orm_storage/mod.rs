//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod assignments;
mod exams;
mod fee_packages;
mod marks;
mod payments;
mod students;
mod subjects;

use crate::config::AppConfig;
use crate::errors::{EdubillError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| EdubillError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| EdubillError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            // SQLite 默认不检查外键，级联与 Restrict 都依赖这个开关
            .foreign_keys(true)
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| EdubillError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| EdubillError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(EdubillError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 学生模块
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        self.list_students_with_pagination_impl(query).await
    }

    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    async fn promote_students(
        &self,
        student_ids: &[i64],
        new_grade: &str,
        new_academic_year: &str,
    ) -> Result<u64> {
        self.promote_students_impl(student_ids, new_grade, new_academic_year)
            .await
    }

    async fn count_students(&self) -> Result<u64> {
        self.count_students_impl().await
    }

    // 收费套餐模块
    async fn create_fee_package(&self, package: CreateFeePackageRequest) -> Result<FeePackage> {
        self.create_fee_package_impl(package).await
    }

    async fn get_fee_package_by_id(&self, id: i64) -> Result<Option<FeePackage>> {
        self.get_fee_package_by_id_impl(id).await
    }

    async fn list_fee_packages(&self) -> Result<Vec<FeePackage>> {
        self.list_fee_packages_impl().await
    }

    async fn update_fee_package(
        &self,
        id: i64,
        update: UpdateFeePackageRequest,
    ) -> Result<Option<FeePackage>> {
        self.update_fee_package_impl(id, update).await
    }

    async fn delete_fee_package(&self, id: i64) -> Result<bool> {
        self.delete_fee_package_impl(id).await
    }

    // 收费分配模块
    async fn create_assignment_with_installments(
        &self,
        assignment: NewAssignment,
        installments: Vec<NewInstallment>,
    ) -> Result<(FeeAssignment, Vec<Installment>)> {
        self.create_assignment_with_installments_impl(assignment, installments)
            .await
    }

    async fn list_assignments_with_relations(&self) -> Result<Vec<AssignmentDetail>> {
        self.list_assignments_with_relations_impl().await
    }

    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<FeeAssignment>> {
        self.get_assignment_by_id_impl(id).await
    }

    async fn delete_assignment(&self, id: i64) -> Result<bool> {
        self.delete_assignment_impl(id).await
    }

    async fn list_installments_by_assignment(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<Installment>> {
        self.list_installments_by_assignment_impl(assignment_id)
            .await
    }

    async fn list_assignments_by_student(
        &self,
        student_id: i64,
    ) -> Result<Vec<(FeeAssignment, Option<FeePackage>)>> {
        self.list_assignments_by_student_impl(student_id).await
    }

    async fn get_installment_by_id(&self, id: i64) -> Result<Option<Installment>> {
        self.get_installment_by_id_impl(id).await
    }

    async fn set_installment_status(&self, id: i64, status: InstallmentStatus) -> Result<bool> {
        self.set_installment_status_impl(id, status).await
    }

    // 缴费模块
    async fn create_payment(&self, payment: CreatePaymentRequest) -> Result<Payment> {
        self.create_payment_impl(payment).await
    }

    async fn list_payments_with_relations(
        &self,
        student_id: Option<i64>,
    ) -> Result<Vec<PaymentDetail>> {
        self.list_payments_with_relations_impl(student_id).await
    }

    async fn get_payment_by_id(&self, id: i64) -> Result<Option<Payment>> {
        self.get_payment_by_id_impl(id).await
    }

    async fn delete_payment(&self, id: i64) -> Result<bool> {
        self.delete_payment_impl(id).await
    }

    async fn sum_payments_by_installment(&self, installment_id: i64) -> Result<f64> {
        self.sum_payments_by_installment_impl(installment_id).await
    }

    async fn sum_payments_by_student(&self, student_id: i64) -> Result<f64> {
        self.sum_payments_by_student_impl(student_id).await
    }

    async fn sum_assignment_final_amounts(&self) -> Result<f64> {
        self.sum_assignment_final_amounts_impl().await
    }

    async fn sum_payments(&self) -> Result<f64> {
        self.sum_payments_impl().await
    }

    async fn sum_payments_between(&self, from_ts: i64, to_ts: i64) -> Result<f64> {
        self.sum_payments_between_impl(from_ts, to_ts).await
    }

    // 考试模块
    async fn create_exam_with_subjects(
        &self,
        name: &str,
        start_date: i64,
        end_date: Option<i64>,
        subjects: Vec<ExamSubjectLink>,
    ) -> Result<ExamDetail> {
        self.create_exam_with_subjects_impl(name, start_date, end_date, subjects)
            .await
    }

    async fn list_exams_with_subjects(&self) -> Result<Vec<ExamDetail>> {
        self.list_exams_with_subjects_impl().await
    }

    async fn get_exam_by_id(&self, id: i64) -> Result<Option<Exam>> {
        self.get_exam_by_id_impl(id).await
    }

    async fn get_exam_with_subjects(&self, id: i64) -> Result<Option<ExamDetail>> {
        self.get_exam_with_subjects_impl(id).await
    }

    async fn update_exam(&self, id: i64, update: UpdateExamRequest) -> Result<Option<Exam>> {
        self.update_exam_impl(id, update).await
    }

    async fn delete_exam(&self, id: i64) -> Result<bool> {
        self.delete_exam_impl(id).await
    }

    // 科目模块
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject> {
        self.create_subject_impl(subject).await
    }

    async fn list_subjects(&self) -> Result<Vec<Subject>> {
        self.list_subjects_impl().await
    }

    // 成绩模块
    async fn get_exam_subject(
        &self,
        exam_id: i64,
        subject_id: i64,
    ) -> Result<Option<ExamSubject>> {
        self.get_exam_subject_impl(exam_id, subject_id).await
    }

    async fn list_marks_for_exam_subject(
        &self,
        exam_subject_id: i64,
    ) -> Result<Vec<(StudentMark, Option<Student>)>> {
        self.list_marks_for_exam_subject_impl(exam_subject_id).await
    }

    async fn upsert_mark(
        &self,
        student_id: i64,
        exam_subject_id: i64,
        obtained_marks: f64,
        remarks: Option<String>,
    ) -> Result<()> {
        self.upsert_mark_impl(student_id, exam_subject_id, obtained_marks, remarks)
            .await
    }

    async fn list_marks_for_exam(
        &self,
        exam_subject_ids: &[i64],
    ) -> Result<Vec<(StudentMark, Option<Student>)>> {
        self.list_marks_for_exam_impl(exam_subject_ids).await
    }

    // 聊天助手查询
    async fn search_students_by_roll(&self, roll_no: &str) -> Result<Vec<Student>> {
        self.search_students_by_roll_impl(roll_no).await
    }

    async fn search_students_by_name(&self, name: &str) -> Result<Vec<Student>> {
        self.search_students_by_name_impl(name).await
    }
}
