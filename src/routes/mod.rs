pub mod assignments;

pub mod auth;

pub mod chat;

pub mod dashboard;

pub mod exams;

pub mod fees;

pub mod marks;

pub mod payments;

pub mod reports;

pub mod students;

pub mod subjects;

pub mod system;

pub use assignments::configure_assignment_routes;
pub use auth::configure_auth_routes;
pub use chat::configure_chat_routes;
pub use dashboard::configure_dashboard_routes;
pub use exams::configure_exam_routes;
pub use fees::configure_fee_package_routes;
pub use marks::configure_mark_routes;
pub use payments::configure_payment_routes;
pub use reports::configure_report_routes;
pub use students::configure_student_routes;
pub use subjects::configure_subject_routes;
pub use system::configure_system_routes;
