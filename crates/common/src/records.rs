//! Records held by the registry tables.

use serde::{Deserialize, Serialize};

use crate::{CourseId, StudentId};

/// A registered student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub student_id: StudentId,
    pub student_name: String,
}

impl Student {
    pub fn new(student_id: impl Into<StudentId>, student_name: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            student_name: student_name.into(),
        }
    }
}

/// A course in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub course_id: CourseId,
    pub course_name: String,
}

impl Course {
    pub fn new(course_id: impl Into<CourseId>, course_name: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            course_name: course_name.into(),
        }
    }
}

/// Membership of one student in one course.
///
/// The `(student_id, course_id)` pair is the natural key; there is no
/// separate identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Enrollment {
    pub student_id: StudentId,
    pub course_id: CourseId,
}

impl Enrollment {
    pub fn new(student_id: impl Into<StudentId>, course_id: impl Into<CourseId>) -> Self {
        Self {
            student_id: student_id.into(),
            course_id: course_id.into(),
        }
    }

    /// Returns true if this record links exactly the given pair.
    pub fn links(&self, student_id: StudentId, course_id: CourseId) -> bool {
        self.student_id == student_id && self.course_id == course_id
    }
}
