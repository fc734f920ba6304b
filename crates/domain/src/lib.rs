//! Domain layer for the enrollment registry.
//!
//! This crate provides:
//! - Identifier allocation for new courses and students
//! - The enrollment admission rules and their decisions
//! - Cascading removal of enrollments on delete
//! - The `Registrar` facade the transport layer calls

pub mod cascade;
pub mod error;
pub mod ids;
pub mod outcome;
pub mod rules;
pub mod seed;
pub mod service;

pub use common::{Course, CourseId, Enrollment, Student, StudentId};
pub use error::DomainError;
pub use outcome::{Outcome, Status};
pub use rules::{COURSE_CAPACITY, Decision, STUDENT_CAPACITY, can_enroll, check_references};
pub use service::{DEFAULT_NAME, Registrar};
