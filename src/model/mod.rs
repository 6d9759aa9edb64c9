//! Wire-level DTOs shared by every API endpoint.
//!
//! These types define the JSON contract of the portal. Field names follow the
//! client-facing camelCase convention (`rollNo`, `offeringID`), and the types carry
//! `utoipa` schemas for the generated OpenAPI document. Server-side domain models convert
//! into these at the controller boundary.

pub mod academic;
pub mod admin;
pub mod api;
pub mod auth;
pub mod search;
pub mod student;
pub mod teacher;
