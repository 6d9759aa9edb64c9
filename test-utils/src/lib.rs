//! Exam Portal Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the exam
//! portal. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas, plus factories that seed academic
//! records with hashed credentials.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders for branches, subjects, teachers, students, offerings, results
//!   and admins
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_student_lookup() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_academic_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     let branch = factory::create_branch(db).await?;
//!     let student = factory::create_student(db, &branch.branch_code).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
