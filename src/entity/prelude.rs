pub use super::exam_subjects::Entity as ExamSubjects;
pub use super::exams::Entity as Exams;
pub use super::fee_assignments::Entity as FeeAssignments;
pub use super::fee_packages::Entity as FeePackages;
pub use super::installments::Entity as Installments;
pub use super::payments::Entity as Payments;
pub use super::student_marks::Entity as StudentMarks;
pub use super::students::Entity as Students;
pub use super::subjects::Entity as Subjects;
