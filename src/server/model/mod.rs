//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! the academic records and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary,
//! which is the only place presentation field names appear.

pub mod academic;
pub mod admin;
pub mod auth;
pub mod cgpa;
pub mod exam_result;
pub mod offering;
pub mod search;
pub mod student;
pub mod teacher;
