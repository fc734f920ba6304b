//! Removal of enrollments that reference a deleted student or course.
//!
//! Both functions take the tables mutably so the caller runs them under the
//! same write guard as the delete they belong to.

use common::{CourseId, StudentId};
use record_store::Tables;

/// Removes every enrollment of the student. Returns the number removed.
pub fn on_student_deleted(tables: &mut Tables, student_id: StudentId) -> usize {
    let removed = tables
        .enrollments
        .remove_where(|e| e.student_id == student_id);
    if removed > 0 {
        tracing::debug!(%student_id, removed, "cascaded student enrollments");
        metrics::counter!("enrollments_cascaded_total").increment(removed as u64);
    }
    removed
}

/// Removes every enrollment in the course. Returns the number removed.
pub fn on_course_deleted(tables: &mut Tables, course_id: CourseId) -> usize {
    let removed = tables
        .enrollments
        .remove_where(|e| e.course_id == course_id);
    if removed > 0 {
        tracing::debug!(%course_id, removed, "cascaded course enrollments");
        metrics::counter!("enrollments_cascaded_total").increment(removed as u64);
    }
    removed
}
