//! The three registry tables.

use common::{Course, CourseId, Enrollment, Student, StudentId};

use crate::Collection;

/// Students, courses, and the enrollments linking them.
///
/// Enrollment records are stored once here even though they belong
/// conceptually to both the student and the course they reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tables {
    pub students: Collection<Student>,
    pub courses: Collection<Course>,
    pub enrollments: Collection<Enrollment>,
}

impl Tables {
    /// Creates empty tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates tables pre-filled with the given records.
    pub fn from_records(
        students: Vec<Student>,
        courses: Vec<Course>,
        enrollments: Vec<Enrollment>,
    ) -> Self {
        Self {
            students: students.into(),
            courses: courses.into(),
            enrollments: enrollments.into(),
        }
    }

    pub fn students_by_id(&self, student_id: StudentId) -> Vec<Student> {
        self.students.find_all(|s| s.student_id == student_id)
    }

    pub fn courses_by_id(&self, course_id: CourseId) -> Vec<Course> {
        self.courses.find_all(|c| c.course_id == course_id)
    }

    /// Enrollment records referencing the student.
    pub fn enrollments_for_student(&self, student_id: StudentId) -> Vec<Enrollment> {
        self.enrollments.find_all(|e| e.student_id == student_id)
    }

    /// Enrollment records referencing the course.
    pub fn enrollments_for_course(&self, course_id: CourseId) -> Vec<Enrollment> {
        self.enrollments.find_all(|e| e.course_id == course_id)
    }

    /// Enrollment records linking exactly this pair (zero or one while the
    /// uniqueness invariant holds).
    pub fn enrollments_for_pair(&self, student_id: StudentId, course_id: CourseId) -> Vec<Enrollment> {
        self.enrollments.find_all(|e| e.links(student_id, course_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tables {
        Tables::from_records(
            vec![Student::new(1u64, "Sophia"), Student::new(2u64, "Jackson")],
            vec![Course::new(1u64, "Math"), Course::new(2u64, "Science")],
            vec![
                Enrollment::new(1u64, 1u64),
                Enrollment::new(2u64, 1u64),
                Enrollment::new(1u64, 2u64),
            ],
        )
    }

    #[test]
    fn lookups_filter_by_identifier() {
        let tables = sample();

        assert_eq!(tables.students_by_id(StudentId::new(2)).len(), 1);
        assert!(tables.students_by_id(StudentId::new(9)).is_empty());
        assert_eq!(tables.courses_by_id(CourseId::new(1))[0].course_name, "Math");
    }

    #[test]
    fn enrollment_lookups() {
        let tables = sample();

        assert_eq!(tables.enrollments_for_course(CourseId::new(1)).len(), 2);
        assert_eq!(tables.enrollments_for_student(StudentId::new(1)).len(), 2);
        assert_eq!(
            tables.enrollments_for_pair(StudentId::new(2), CourseId::new(1)),
            vec![Enrollment::new(2u64, 1u64)]
        );
        assert!(
            tables
                .enrollments_for_pair(StudentId::new(2), CourseId::new(2))
                .is_empty()
        );
    }
}
