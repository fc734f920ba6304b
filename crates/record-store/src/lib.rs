//! In-memory record tables for the enrollment registry.
//!
//! Holds the student, course, and enrollment collections in insertion order
//! behind a single lock. Lookups are linear scans; every operation is total.

pub mod collection;
pub mod memory;
pub mod tables;

pub use collection::Collection;
pub use common::{Course, CourseId, Enrollment, Student, StudentId};
pub use memory::InMemoryStore;
pub use tables::Tables;
