//! Shared types for the enrollment registry.

pub mod records;
pub mod types;

pub use records::{Course, Enrollment, Student};
pub use types::{CourseId, StudentId};
