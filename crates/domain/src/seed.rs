//! Fixture tables the registry boots with.
//!
//! Course 1 is full, student 1 carries a full schedule that leaves out
//! course 6, and student 21 is only in course 6. That gives every admission
//! rule a ready-made case.

use common::{Course, Enrollment, Student};
use record_store::Tables;

const COURSES: [&str; 6] = ["Math", "Science", "English", "History", "Music", "Art"];

const STUDENTS: [&str; 21] = [
    "Sophia", "Jackson", "Emma", "Aiden", "Olivia", "Lucas", "Ava", "Liam", "Mia", "Noah",
    "Isabella", "Ethan", "Riley", "Mason", "Aria", "Caden", "Zoe", "Oliver", "Charlotte", "Elijah",
    "Lily",
];

pub fn courses() -> Vec<Course> {
    (1u64..).zip(COURSES).map(|(id, name)| Course::new(id, name)).collect()
}

pub fn students() -> Vec<Student> {
    (1u64..).zip(STUDENTS).map(|(id, name)| Student::new(id, name)).collect()
}

pub fn enrollments() -> Vec<Enrollment> {
    let mut enrollments: Vec<Enrollment> = (1..=20u64).map(|s| Enrollment::new(s, 1u64)).collect();
    enrollments.extend((2..=5u64).map(|c| Enrollment::new(1u64, c)));
    enrollments.extend([
        Enrollment::new(2u64, 3u64),
        Enrollment::new(3u64, 3u64),
        Enrollment::new(4u64, 4u64),
        Enrollment::new(21u64, 6u64),
    ]);
    enrollments
}

/// All three fixture tables.
pub fn university() -> Tables {
    Tables::from_records(students(), courses(), enrollments())
}
