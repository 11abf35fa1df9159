use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ChatService;
use super::intent::{ChatIntent, parse_intent};
use crate::errors::Result;
use crate::models::{
    ApiResponse, ErrorCode,
    chat::{requests::ChatRequest, responses::ChatResponse},
    students::entities::Student,
};
use crate::storage::Storage;
use crate::utils::finance::fee_summary;

const HELP_TEXT: &str =
    "Try asking for a student by roll number (e.g. \"roll no 12\") or by name (e.g. \"find details of Ram\").";

pub async fn chat_query(
    service: &ChatService,
    request: &HttpRequest,
    chat_data: ChatRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let answer = match parse_intent(&chat_data.query) {
        ChatIntent::RollLookup(roll) => match storage.search_students_by_roll(&roll).await {
            Ok(students) if students.is_empty() => {
                Ok(format!("No student found with roll number {roll}."))
            }
            Ok(students) => describe_students(&storage, students).await,
            Err(e) => Err(e),
        },
        ChatIntent::NameSearch(name) => match storage.search_students_by_name(&name).await {
            Ok(students) if students.is_empty() => {
                Ok(format!("No student found matching \"{name}\"."))
            }
            Ok(students) => describe_students(&storage, students).await,
            Err(e) => Err(e),
        },
        ChatIntent::Empty => Ok(HELP_TEXT.to_string()),
    };

    match answer {
        Ok(text) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ChatResponse { text },
            "Chat query answered",
        ))),
        Err(e) => {
            error!("Chat lookup failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to look up student",
                )),
            )
        }
    }
}

// 唯一命中给出费用摘要，多个命中列出候选让用户收窄
async fn describe_students(
    storage: &Arc<dyn Storage>,
    mut students: Vec<Student>,
) -> Result<String> {
    if students.len() == 1 {
        let student = students.remove(0);
        return financial_summary(storage, student).await;
    }

    let names = students
        .iter()
        .map(|s| format!("{} (Roll No {})", s.full_name, s.roll_no))
        .collect::<Vec<_>>()
        .join(", ");
    Ok(format!(
        "Found {} students: {}. Please narrow your search.",
        students.len(),
        names
    ))
}

async fn financial_summary(storage: &Arc<dyn Storage>, student: Student) -> Result<String> {
    let assignments = storage.list_assignments_by_student(student.id).await?;
    let paid = storage.sum_payments_by_student(student.id).await?;

    // 金额全部来自分配时的快照
    let mut total_fee = 0.0;
    let mut discount = 0.0;
    for (assignment, _) in &assignments {
        total_fee += assignment.total_fee;
        discount += assignment.discount;
    }
    let summary = fee_summary(total_fee, discount, paid);

    Ok(format!(
        "{} — Grade {} ({}), Roll No {}, Reg No {}, Status: {}. Total fee {:.2}, discount {:.2}, paid {:.2}, due {:.2}.",
        student.full_name,
        student.grade,
        student.stream,
        student.roll_no,
        student.registration_no,
        student.status,
        summary.total_fee,
        summary.discount,
        summary.paid,
        summary.due
    ))
}
