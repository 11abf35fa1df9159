use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::exam_subjects::{
    ActiveModel as ExamSubjectActiveModel, Column as ExamSubjectColumn, Entity as ExamSubjects,
};
use crate::entity::exams::{ActiveModel, Column, Entity as Exams};
use crate::entity::subjects::{Column as SubjectColumn, Entity as Subjects};
use crate::errors::{EdubillError, Result};
use crate::models::{
    exams::{
        entities::Exam,
        requests::{ExamSubjectLink, UpdateExamRequest},
        responses::{ExamDetail, ExamSubjectDetail},
    },
    subjects::entities::Subject,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 在同一事务内创建考试与科目关联
    pub async fn create_exam_with_subjects_impl(
        &self,
        name: &str,
        start_date: i64,
        end_date: Option<i64>,
        subjects: Vec<ExamSubjectLink>,
    ) -> Result<ExamDetail> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EdubillError::database_operation(format!("开启事务失败: {e}")))?;

        let model = ActiveModel {
            name: Set(name.to_string()),
            start_date: Set(start_date),
            end_date: Set(end_date),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let created = model
            .insert(&txn)
            .await
            .map_err(|e| EdubillError::database_operation(format!("创建考试失败: {e}")))?;

        let mut links = Vec::with_capacity(subjects.len());
        for link in subjects {
            let link_model = ExamSubjectActiveModel {
                exam_id: Set(created.id),
                subject_id: Set(link.subject_id),
                full_marks: Set(link.full_marks),
                pass_marks: Set(link.pass_marks),
                ..Default::default()
            };

            let created_link = link_model.insert(&txn).await.map_err(|e| {
                EdubillError::database_operation(format!("创建考试科目关联失败: {e}"))
            })?;
            links.push(created_link);
        }

        txn.commit()
            .await
            .map_err(|e| EdubillError::database_operation(format!("提交事务失败: {e}")))?;

        let subject_map = self
            .load_subjects_for(links.iter().map(|l| l.subject_id))
            .await?;

        Ok(ExamDetail {
            exam: created.into_exam(),
            subjects: links
                .into_iter()
                .map(|link| {
                    let subject = subject_map.get(&link.subject_id).cloned();
                    ExamSubjectDetail {
                        exam_subject: link.into_exam_subject(),
                        subject,
                    }
                })
                .collect(),
        })
    }

    /// 列出全部考试及科目配置
    pub async fn list_exams_with_subjects_impl(&self) -> Result<Vec<ExamDetail>> {
        let exams = Exams::find()
            .order_by_desc(Column::StartDate)
            .all(&self.db)
            .await
            .map_err(|e| EdubillError::database_operation(format!("查询考试列表失败: {e}")))?;

        if exams.is_empty() {
            return Ok(Vec::new());
        }

        let exam_ids: Vec<i64> = exams.iter().map(|e| e.id).collect();
        let links = ExamSubjects::find()
            .filter(ExamSubjectColumn::ExamId.is_in(exam_ids))
            .all(&self.db)
            .await
            .map_err(|e| {
                EdubillError::database_operation(format!("查询考试科目关联失败: {e}"))
            })?;

        let subject_map = self
            .load_subjects_for(links.iter().map(|l| l.subject_id))
            .await?;

        let mut links_by_exam: HashMap<i64, Vec<ExamSubjectDetail>> = HashMap::new();
        for link in links {
            let subject = subject_map.get(&link.subject_id).cloned();
            links_by_exam
                .entry(link.exam_id)
                .or_default()
                .push(ExamSubjectDetail {
                    exam_subject: link.into_exam_subject(),
                    subject,
                });
        }

        Ok(exams
            .into_iter()
            .map(|exam| {
                let subjects = links_by_exam.remove(&exam.id).unwrap_or_default();
                ExamDetail {
                    exam: exam.into_exam(),
                    subjects,
                }
            })
            .collect())
    }

    /// 通过 ID 获取考试
    pub async fn get_exam_by_id_impl(&self, id: i64) -> Result<Option<Exam>> {
        let result = Exams::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EdubillError::database_operation(format!("查询考试失败: {e}")))?;

        Ok(result.map(|m| m.into_exam()))
    }

    /// 通过 ID 获取考试及科目配置
    pub async fn get_exam_with_subjects_impl(&self, id: i64) -> Result<Option<ExamDetail>> {
        let exam = match Exams::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EdubillError::database_operation(format!("查询考试失败: {e}")))?
        {
            Some(exam) => exam,
            None => return Ok(None),
        };

        let links = ExamSubjects::find()
            .filter(ExamSubjectColumn::ExamId.eq(id))
            .all(&self.db)
            .await
            .map_err(|e| {
                EdubillError::database_operation(format!("查询考试科目关联失败: {e}"))
            })?;

        let subject_map = self
            .load_subjects_for(links.iter().map(|l| l.subject_id))
            .await?;

        Ok(Some(ExamDetail {
            exam: exam.into_exam(),
            subjects: links
                .into_iter()
                .map(|link| {
                    let subject = subject_map.get(&link.subject_id).cloned();
                    ExamSubjectDetail {
                        exam_subject: link.into_exam_subject(),
                        subject,
                    }
                })
                .collect(),
        }))
    }

    /// 更新考试信息
    pub async fn update_exam_impl(
        &self,
        id: i64,
        update: UpdateExamRequest,
    ) -> Result<Option<Exam>> {
        let existing = self.get_exam_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(start_date) = update.start_date {
            model.start_date = Set(start_date.timestamp());
        }

        if let Some(end_date) = update.end_date {
            model.end_date = Set(Some(end_date.timestamp()));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EdubillError::database_operation(format!("更新考试失败: {e}")))?;

        self.get_exam_by_id_impl(id).await
    }

    /// 删除考试（科目关联与成绩随外键级联删除）
    pub async fn delete_exam_impl(&self, id: i64) -> Result<bool> {
        let result = Exams::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EdubillError::database_operation(format!("删除考试失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 批量加载科目，避免逐行查询
    pub(crate) async fn load_subjects_for(
        &self,
        subject_ids: impl Iterator<Item = i64>,
    ) -> Result<HashMap<i64, Subject>> {
        let mut ids: Vec<i64> = subject_ids.collect();
        ids.sort_unstable();
        ids.dedup();

        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let subjects = Subjects::find()
            .filter(SubjectColumn::Id.is_in(ids))
            .all(&self.db)
            .await
            .map_err(|e| EdubillError::database_operation(format!("批量查询科目失败: {e}")))?;

        Ok(subjects
            .into_iter()
            .map(|m| (m.id, m.into_subject()))
            .collect())
    }
}
