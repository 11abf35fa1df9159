use super::SeaOrmStorage;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{EdubillError, Result};
use crate::models::{
    PaginationInfo,
    students::{
        entities::{Student, StudentStatus},
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
};
use crate::utils::{escape_like_pattern, generate_registration_no};
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

// 注册号随机后缀只有四位，冲突时重试
const REGISTRATION_NO_ATTEMPTS: usize = 5;

impl SeaOrmStorage {
    /// 创建学生，注册号自动生成
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();
        let admission_date = req.admission_date.map(|d| d.timestamp()).unwrap_or(now);
        let status = req.status.unwrap_or(StudentStatus::Active);

        let mut last_err = None;
        for _ in 0..REGISTRATION_NO_ATTEMPTS {
            let model = ActiveModel {
                full_name: Set(req.full_name.clone()),
                grade: Set(req.grade.clone()),
                stream: Set(req.stream.clone()),
                section: Set(req.section.clone()),
                roll_no: Set(req.roll_no.clone()),
                registration_no: Set(generate_registration_no()),
                academic_year: Set(req.academic_year.clone()),
                parent_name: Set(req.parent_name.clone()),
                parent_contact: Set(req.parent_contact.clone()),
                address: Set(req.address.clone()),
                dob: Set(req.dob.map(|d| d.timestamp())),
                admission_date: Set(admission_date),
                status: Set(status.to_string()),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            };

            match model.insert(&self.db).await {
                Ok(result) => return Ok(result.into_student()),
                Err(e) => {
                    let message = e.to_string();
                    if message.contains("UNIQUE") || message.contains("Duplicate") {
                        last_err = Some(message);
                        continue;
                    }
                    return Err(EdubillError::database_operation(format!(
                        "创建学生失败: {e}"
                    )));
                }
            }
        }

        Err(EdubillError::database_operation(format!(
            "创建学生失败: 注册号生成冲突: {}",
            last_err.unwrap_or_default()
        )))
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EdubillError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 分页列出学生
    pub async fn list_students_with_pagination_impl(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Students::find();

        // 搜索条件：姓名、学号或注册号
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::FullName.contains(&escaped))
                    .add(Column::RollNo.contains(&escaped))
                    .add(Column::RegistrationNo.contains(&escaped)),
            );
        }

        // 年级筛选
        if let Some(ref grade) = query.grade {
            select = select.filter(Column::Grade.eq(grade));
        }

        // 状态筛选
        if let Some(ref status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        // 最近登记的在前；created_at 只有秒级精度，按主键排才稳定
        select = select.order_by_desc(Column::Id);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| EdubillError::database_operation(format!("查询学生总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| EdubillError::database_operation(format!("查询学生页数失败: {e}")))?;

        let students = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| EdubillError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(StudentListResponse {
            items: students.into_iter().map(|m| m.into_student()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新学生信息
    pub async fn update_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        // 先检查学生是否存在
        let existing = self.get_student_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(full_name) = update.full_name {
            model.full_name = Set(full_name);
        }

        if let Some(grade) = update.grade {
            model.grade = Set(grade);
        }

        if let Some(stream) = update.stream {
            model.stream = Set(stream);
        }

        if let Some(section) = update.section {
            model.section = Set(Some(section));
        }

        if let Some(roll_no) = update.roll_no {
            model.roll_no = Set(roll_no);
        }

        if let Some(academic_year) = update.academic_year {
            model.academic_year = Set(academic_year);
        }

        if let Some(parent_name) = update.parent_name {
            model.parent_name = Set(Some(parent_name));
        }

        if let Some(parent_contact) = update.parent_contact {
            model.parent_contact = Set(Some(parent_contact));
        }

        if let Some(address) = update.address {
            model.address = Set(Some(address));
        }

        if let Some(dob) = update.dob {
            model.dob = Set(Some(dob.timestamp()));
        }

        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EdubillError::database_operation(format!("更新学生失败: {e}")))?;

        self.get_student_by_id_impl(id).await
    }

    /// 删除学生
    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let result = Students::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EdubillError::database_operation(format!("删除学生失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 批量升级学生年级与学年
    pub async fn promote_students_impl(
        &self,
        student_ids: &[i64],
        new_grade: &str,
        new_academic_year: &str,
    ) -> Result<u64> {
        if student_ids.is_empty() {
            return Ok(0);
        }

        let now = chrono::Utc::now().timestamp();

        let result = Students::update_many()
            .col_expr(Column::Grade, sea_orm::sea_query::Expr::value(new_grade))
            .col_expr(
                Column::AcademicYear,
                sea_orm::sea_query::Expr::value(new_academic_year),
            )
            .col_expr(Column::UpdatedAt, sea_orm::sea_query::Expr::value(now))
            .filter(Column::Id.is_in(student_ids.to_vec()))
            .exec(&self.db)
            .await
            .map_err(|e| EdubillError::database_operation(format!("批量升级学生失败: {e}")))?;

        Ok(result.rows_affected)
    }

    /// 统计学生数量
    pub async fn count_students_impl(&self) -> Result<u64> {
        let count = Students::find()
            .count(&self.db)
            .await
            .map_err(|e| EdubillError::database_operation(format!("统计学生数量失败: {e}")))?;

        Ok(count)
    }

    /// 按学号精确查找学生
    pub async fn search_students_by_roll_impl(&self, roll_no: &str) -> Result<Vec<Student>> {
        let results = Students::find()
            .filter(Column::RollNo.eq(roll_no))
            .order_by_asc(Column::Grade)
            .limit(5)
            .all(&self.db)
            .await
            .map_err(|e| EdubillError::database_operation(format!("按学号查询学生失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_student()).collect())
    }

    /// 按姓名模糊查找学生
    pub async fn search_students_by_name_impl(&self, name: &str) -> Result<Vec<Student>> {
        // 两侧都转小写，避免依赖各数据库不同的排序规则。
        // ExprTrait 不能整体引入，会与 i64 的 max 产生歧义，这里用限定调用。
        let pattern = format!("%{}%", escape_like_pattern(name.trim()).to_lowercase());
        let lowered_name = Expr::expr(Func::lower(Expr::col(Column::FullName)));
        let results = Students::find()
            .filter(sea_orm::sea_query::ExprTrait::like(
                lowered_name,
                pattern.as_str(),
            ))
            .order_by_asc(Column::FullName)
            .limit(5)
            .all(&self.db)
            .await
            .map_err(|e| EdubillError::database_operation(format!("按姓名查询学生失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_student()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    async fn memory_storage() -> SeaOrmStorage {
        // 内存库必须限制为单连接，否则每个连接各有一份数据
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1);
        let db = Database::connect(opt).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        SeaOrmStorage { db }
    }

    fn new_student(name: &str, roll: &str) -> CreateStudentRequest {
        CreateStudentRequest {
            full_name: name.to_string(),
            grade: "11".to_string(),
            stream: "Science".to_string(),
            section: None,
            roll_no: roll.to_string(),
            academic_year: "2082".to_string(),
            parent_name: None,
            parent_contact: None,
            address: None,
            dob: None,
            admission_date: None,
            status: None,
        }
    }

    #[tokio::test]
    async fn test_name_search_is_case_insensitive() {
        let storage = memory_storage().await;
        storage
            .create_student_impl(new_student("Ram Sharma", "1"))
            .await
            .unwrap();

        let hits = storage.search_students_by_name_impl("RAM").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].full_name, "Ram Sharma");

        let misses = storage.search_students_by_name_impl("shyam").await.unwrap();
        assert!(misses.is_empty());
    }

    #[tokio::test]
    async fn test_list_orders_by_id_desc() {
        let storage = memory_storage().await;
        let first = storage
            .create_student_impl(new_student("Sita Sharma", "1"))
            .await
            .unwrap();
        let second = storage
            .create_student_impl(new_student("Hari Prasad", "2"))
            .await
            .unwrap();

        let listed = storage
            .list_students_with_pagination_impl(StudentListQuery {
                page: None,
                size: None,
                grade: None,
                status: None,
                search: None,
            })
            .await
            .unwrap();

        // 同一秒内登记的两条也要按登记先后倒序
        assert_eq!(listed.items.len(), 2);
        assert_eq!(listed.items[0].id, second.id);
        assert_eq!(listed.items[1].id, first.id);
    }
}
