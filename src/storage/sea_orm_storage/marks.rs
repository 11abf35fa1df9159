use super::SeaOrmStorage;
use crate::entity::exam_subjects::{Column as ExamSubjectColumn, Entity as ExamSubjects};
use crate::entity::student_marks::{ActiveModel, Column, Entity as StudentMarks};
use crate::entity::students::Entity as Students;
use crate::errors::{EdubillError, Result};
use crate::models::{
    exams::entities::ExamSubject, marks::entities::StudentMark, students::entities::Student,
};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 获取考试中某科目的关联记录
    pub async fn get_exam_subject_impl(
        &self,
        exam_id: i64,
        subject_id: i64,
    ) -> Result<Option<ExamSubject>> {
        let result = ExamSubjects::find()
            .filter(ExamSubjectColumn::ExamId.eq(exam_id))
            .filter(ExamSubjectColumn::SubjectId.eq(subject_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                EdubillError::database_operation(format!("查询考试科目关联失败: {e}"))
            })?;

        Ok(result.map(|m| m.into_exam_subject()))
    }

    /// 列出某考试科目下的全部成绩及学生信息
    pub async fn list_marks_for_exam_subject_impl(
        &self,
        exam_subject_id: i64,
    ) -> Result<Vec<(StudentMark, Option<Student>)>> {
        let rows = StudentMarks::find()
            .filter(Column::ExamSubjectId.eq(exam_subject_id))
            .find_also_related(Students)
            .order_by_asc(Column::StudentId)
            .all(&self.db)
            .await
            .map_err(|e| EdubillError::database_operation(format!("查询成绩列表失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|(mark, student)| (mark.into_mark(), student.map(|m| m.into_student())))
            .collect())
    }

    /// 原子写入成绩
    ///
    /// (student_id, exam_subject_id) 上有唯一索引，并发保存同一学生
    /// 成绩时由数据库裁决，后写覆盖先写，不会产生重复行。
    pub async fn upsert_mark_impl(
        &self,
        student_id: i64,
        exam_subject_id: i64,
        obtained_marks: f64,
        remarks: Option<String>,
    ) -> Result<()> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(student_id),
            exam_subject_id: Set(exam_subject_id),
            obtained_marks: Set(obtained_marks),
            remarks: Set(remarks),
            updated_at: Set(now),
            ..Default::default()
        };

        StudentMarks::insert(model)
            .on_conflict(
                OnConflict::columns([Column::StudentId, Column::ExamSubjectId])
                    .update_columns([Column::ObtainedMarks, Column::Remarks, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(|e| EdubillError::database_operation(format!("保存成绩失败: {e}")))?;

        Ok(())
    }

    /// 列出考试全部科目的成绩及学生信息
    pub async fn list_marks_for_exam_impl(
        &self,
        exam_subject_ids: &[i64],
    ) -> Result<Vec<(StudentMark, Option<Student>)>> {
        if exam_subject_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = StudentMarks::find()
            .filter(Column::ExamSubjectId.is_in(exam_subject_ids.to_vec()))
            .find_also_related(Students)
            .order_by_asc(Column::StudentId)
            .all(&self.db)
            .await
            .map_err(|e| EdubillError::database_operation(format!("查询考试成绩失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|(mark, student)| (mark.into_mark(), student.map(|m| m.into_student())))
            .collect())
    }
}
