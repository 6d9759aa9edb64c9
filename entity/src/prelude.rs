pub use super::admin::Entity as Admin;
pub use super::branch::Entity as Branch;
pub use super::exam_result::Entity as ExamResult;
pub use super::student::Entity as Student;
pub use super::subject::Entity as Subject;
pub use super::subject_offering::Entity as SubjectOffering;
pub use super::teacher::Entity as Teacher;
