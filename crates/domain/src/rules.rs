//! Enrollment admission rules.
//!
//! A new enrollment is checked against three conditions in a fixed order:
//!
//! 1. the pair must not already exist,
//! 2. the student must hold fewer than [`STUDENT_CAPACITY`] enrollments,
//! 3. the course must hold fewer than [`COURSE_CAPACITY`] enrollments.
//!
//! The first failing condition decides the outcome, so a duplicate request
//! against a full course still reports the duplicate.

use common::{CourseId, Enrollment, StudentId};
use record_store::Tables;

use crate::outcome::Status;

/// Maximum number of courses a student may be enrolled in.
pub const STUDENT_CAPACITY: usize = 5;

/// Maximum number of students a course may hold.
pub const COURSE_CAPACITY: usize = 20;

/// Result of evaluating the admission rules for one enrollment request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// The student or the course does not exist.
    UnknownRecord,
    AlreadyEnrolled,
    StudentAtCapacity,
    CourseAtCapacity,
    Allowed,
}

impl Decision {
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Status tag the caller should report.
    pub const fn status(&self) -> Status {
        match self {
            Self::Allowed => Status::Created,
            Self::UnknownRecord
            | Self::AlreadyEnrolled
            | Self::StudentAtCapacity
            | Self::CourseAtCapacity => Status::Forbidden,
        }
    }

    /// User-facing message. Callers pass it through unmodified.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::UnknownRecord => "Student or course does not exist",
            Self::AlreadyEnrolled => "Student is already enrolled in the course",
            Self::StudentAtCapacity => "Student is already enrolled in 5 classes",
            Self::CourseAtCapacity => "Class is full, unable to enroll student",
            Self::Allowed => "Student successfully enrolled in course",
        }
    }

    /// Short label used in logs and metrics.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UnknownRecord => "unknown_record",
            Self::AlreadyEnrolled => "already_enrolled",
            Self::StudentAtCapacity => "student_at_capacity",
            Self::CourseAtCapacity => "course_at_capacity",
            Self::Allowed => "allowed",
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Returns [`Decision::UnknownRecord`] unless both records exist.
pub fn check_references(
    tables: &Tables,
    student_id: StudentId,
    course_id: CourseId,
) -> Option<Decision> {
    let student_exists = tables.students.any(|s| s.student_id == student_id);
    let course_exists = tables.courses.any(|c| c.course_id == course_id);
    (!student_exists || !course_exists).then_some(Decision::UnknownRecord)
}

/// Decides whether `student_id` may join `course_id` given the current
/// enrollments. Pure; the caller performs the insert.
pub fn can_enroll<'a, I>(student_id: StudentId, course_id: CourseId, enrollments: I) -> Decision
where
    I: IntoIterator<Item = &'a Enrollment>,
{
    let mut already_enrolled = false;
    let mut student_count = 0usize;
    let mut course_count = 0usize;

    for enrollment in enrollments {
        if enrollment.links(student_id, course_id) {
            already_enrolled = true;
        }
        if enrollment.student_id == student_id {
            student_count += 1;
        }
        if enrollment.course_id == course_id {
            course_count += 1;
        }
    }

    if already_enrolled {
        Decision::AlreadyEnrolled
    } else if student_count >= STUDENT_CAPACITY {
        Decision::StudentAtCapacity
    } else if course_count >= COURSE_CAPACITY {
        Decision::CourseAtCapacity
    } else {
        Decision::Allowed
    }
}
