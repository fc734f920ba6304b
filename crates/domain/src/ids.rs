//! Identifier allocation for new records.
//!
//! Courses and students use different strategies. Course ids continue from
//! the largest existing id, so deleting a course never frees its id. Student
//! ids are derived from the current head count, so a delete followed by a
//! create can hand out an id that is still in use.

use common::{Course, CourseId, Student, StudentId};

use crate::error::DomainError;

/// Returns `max(course_id) + 1`.
pub fn next_course_id(existing: &[Course]) -> Result<CourseId, DomainError> {
    existing
        .iter()
        .map(|c| c.course_id)
        .max()
        .map(|max| max.next())
        .ok_or(DomainError::EmptyCollection {
            collection: "course",
        })
}

/// Returns `count(students) + 1`.
pub fn next_student_id(existing: &[Student]) -> StudentId {
    StudentId::new(existing.len() as u64 + 1)
}
