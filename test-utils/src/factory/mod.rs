//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation. Factories that store a
//! secret take it in plain text and persist a cheap Argon2 hash of it, so tests can log in
//! with the plain value.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let branch = factory::create_branch(&db).await?;
//! let student = factory::student::StudentFactory::new(&db, &branch.branch_code)
//!     .roll_no("2024UCM2376")
//!     .date_of_birth("20040115")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `branch` - Create branch entities
//! - `subject` - Create subject entities
//! - `teacher` - Create teacher entities with hashed passwords
//! - `student` - Create student entities with hashed date-of-birth credentials
//! - `subject_offering` - Create offerings linking subject, branch and teacher
//! - `exam_result` - Create result entities for a student and offering
//! - `admin` - Create admin entities with hashed passwords
//! - `helpers` - ID generation, secret hashing, entities with dependencies

pub mod admin;
pub mod branch;
pub mod exam_result;
pub mod helpers;
pub mod student;
pub mod subject;
pub mod subject_offering;
pub mod teacher;

pub use admin::create_admin;
pub use branch::create_branch;
pub use exam_result::create_result;
pub use student::create_student;
pub use subject::create_subject;
pub use subject_offering::create_offering;
pub use teacher::create_teacher;
