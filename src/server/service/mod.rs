//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Credential verification**: Salted hash comparison for every login flow
//! - **Orchestration**: Coordinating repository calls into per-role payloads
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod admin;
pub mod auth;
pub mod credential;
pub mod student;
pub mod teacher;

#[cfg(test)]
mod test;
