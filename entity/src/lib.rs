//! SeaORM entities for the exam result portal.
//!
//! Every column is stored as text, including marks, credits and grade points.
//! Numeric interpretation happens in the server crate at read time.

pub mod prelude;

pub mod admin;
pub mod branch;
pub mod exam_result;
pub mod student;
pub mod subject;
pub mod subject_offering;
pub mod teacher;
