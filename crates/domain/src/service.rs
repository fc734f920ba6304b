//! Registrar facade: the operations the transport layer calls.

use common::{Course, CourseId, Enrollment, Student, StudentId};
use record_store::{InMemoryStore, Tables};

use crate::cascade;
use crate::ids;
use crate::outcome::Outcome;
use crate::rules::{self, Decision};

/// Name given to courses and students created without one.
pub const DEFAULT_NAME: &str = "TO BE DETERMINED";

/// Service for managing students, courses, and enrollments.
///
/// Every operation is total. Lookups of unknown ids return empty lists and
/// writes against unknown ids are no-ops. Each write holds the store's write
/// guard from its first check until its last mutation.
#[derive(Debug, Clone, Default)]
pub struct Registrar {
    store: InMemoryStore,
}

impl Registrar {
    /// Creates a registrar over the given store.
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }

    /// Creates a registrar over a fresh store holding the fixture tables.
    pub fn seeded() -> Self {
        Self::new(InMemoryStore::with_tables(crate::seed::university()))
    }

    /// Creates a registrar over a fresh store holding `tables`.
    pub fn with_tables(tables: Tables) -> Self {
        Self::new(InMemoryStore::with_tables(tables))
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &InMemoryStore {
        &self.store
    }

    // -- Courses --

    #[tracing::instrument(skip(self))]
    pub async fn list_courses(&self) -> Vec<Course> {
        self.store.read().await.courses.iter().cloned().collect()
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_course(&self, course_id: CourseId) -> Vec<Course> {
        self.store.read().await.courses_by_id(course_id)
    }

    /// Adds a course with the next course id.
    ///
    /// An empty catalog starts at [`CourseId::FIRST`].
    #[tracing::instrument(skip(self))]
    pub async fn create_course(&self, course_name: Option<String>) -> Outcome<Course> {
        let mut tables = self.store.write().await;

        let course_id = ids::next_course_id(tables.courses.as_slice()).unwrap_or(CourseId::FIRST);
        let course = Course::new(course_id, name_or_default(course_name));
        tables.courses.insert(course.clone());

        tracing::info!(%course_id, course_name = %course.course_name, "course created");
        metrics::counter!("courses_created_total").increment(1);
        Outcome::created(course)
    }

    /// Renames the course in place. The id never changes.
    #[tracing::instrument(skip(self))]
    pub async fn update_course_name(&self, course_id: CourseId, course_name: String) -> Outcome<()> {
        let mut tables = self.store.write().await;

        match tables.courses.find_mut(|c| c.course_id == course_id) {
            Some(course) => {
                tracing::info!(%course_id, from = %course.course_name, to = %course_name, "course renamed");
                course.course_name = course_name;
            }
            None => tracing::debug!(%course_id, "rename of unknown course ignored"),
        }

        Outcome::no_content()
    }

    /// Removes the course together with all of its enrollments.
    #[tracing::instrument(skip(self))]
    pub async fn delete_course(&self, course_id: CourseId) -> Outcome<()> {
        let mut tables = self.store.write().await;

        let removed = tables.courses.remove_where(|c| c.course_id == course_id);
        let cascaded = cascade::on_course_deleted(&mut tables, course_id);

        tracing::info!(%course_id, removed, cascaded, "course deleted");
        Outcome::no_content()
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_course_students(&self, course_id: CourseId) -> Vec<Enrollment> {
        self.store.read().await.enrollments_for_course(course_id)
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_enrollee(&self, course_id: CourseId, student_id: StudentId) -> Vec<Enrollment> {
        self.store
            .read()
            .await
            .enrollments_for_pair(student_id, course_id)
    }

    // -- Enrollments --

    /// Enrolls the student if the admission rules allow it.
    ///
    /// Both records must exist. The reference check, the rules and the
    /// insert all run under one write guard, so concurrent requests for the
    /// same pair cannot both succeed.
    #[tracing::instrument(skip(self))]
    pub async fn enroll(&self, course_id: CourseId, student_id: StudentId) -> Decision {
        let mut tables = self.store.write().await;

        let decision = rules::check_references(&tables, student_id, course_id)
            .unwrap_or_else(|| rules::can_enroll(student_id, course_id, &tables.enrollments));
        if decision.is_allowed() {
            tables
                .enrollments
                .insert(Enrollment::new(student_id, course_id));
            tracing::info!(%student_id, %course_id, "student enrolled");
        } else {
            tracing::info!(%student_id, %course_id, decision = decision.as_str(), "enrollment rejected");
        }

        metrics::counter!("enrollment_decisions_total", "decision" => decision.as_str())
            .increment(1);
        decision
    }

    /// Removes the enrollment for the pair, if there is one.
    #[tracing::instrument(skip(self))]
    pub async fn unenroll(&self, course_id: CourseId, student_id: StudentId) -> Outcome<()> {
        let removed = self
            .store
            .write()
            .await
            .enrollments
            .remove_where(|e| e.links(student_id, course_id));

        tracing::info!(%student_id, %course_id, removed, "student unenrolled");
        Outcome::no_content()
    }

    // -- Students --

    #[tracing::instrument(skip(self))]
    pub async fn list_students(&self) -> Vec<Student> {
        self.store.read().await.students.iter().cloned().collect()
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_student(&self, student_id: StudentId) -> Vec<Student> {
        self.store.read().await.students_by_id(student_id)
    }

    /// Adds a student whose id is the current head count plus one.
    #[tracing::instrument(skip(self))]
    pub async fn create_student(&self, student_name: Option<String>) -> Outcome<Student> {
        let mut tables = self.store.write().await;

        let student_id = ids::next_student_id(tables.students.as_slice());
        if tables.students.any(|s| s.student_id == student_id) {
            tracing::warn!(%student_id, "allocated student id is already in use");
        }
        let student = Student::new(student_id, name_or_default(student_name));
        tables.students.insert(student.clone());

        tracing::info!(%student_id, student_name = %student.student_name, "student created");
        metrics::counter!("students_created_total").increment(1);
        Outcome::created(student)
    }

    /// Removes the student together with all of their enrollments.
    #[tracing::instrument(skip(self))]
    pub async fn delete_student(&self, student_id: StudentId) -> Outcome<()> {
        let mut tables = self.store.write().await;

        let removed = tables.students.remove_where(|s| s.student_id == student_id);
        let cascaded = cascade::on_student_deleted(&mut tables, student_id);

        tracing::info!(%student_id, removed, cascaded, "student deleted");
        Outcome::no_content()
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_student_courses(&self, student_id: StudentId) -> Vec<Enrollment> {
        self.store.read().await.enrollments_for_student(student_id)
    }
}

fn name_or_default(name: Option<String>) -> String {
    name.filter(|n| !n.is_empty())
        .unwrap_or_else(|| DEFAULT_NAME.to_string())
}
