//! Database repository layer for the academic records.
//!
//! This module contains repository structs that handle read queries for each table. The
//! portal never writes academic data, so repositories only select. Repositories use SeaORM
//! entity models internally and return domain models to keep the data layer separate from
//! the service layer.

pub mod admin;
pub mod branch;
pub mod exam_result;
pub mod offering;
pub mod student;
pub mod subject;
pub mod teacher;

#[cfg(test)]
mod test;
