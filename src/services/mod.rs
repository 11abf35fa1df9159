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

pub use assignments::AssignmentService;
pub use auth::AuthService;
pub use chat::ChatService;
pub use dashboard::DashboardService;
pub use exams::ExamService;
pub use fees::FeePackageService;
pub use marks::MarkService;
pub use payments::PaymentService;
pub use reports::ReportService;
pub use students::StudentService;
pub use subjects::SubjectService;
pub use system::SystemService;
