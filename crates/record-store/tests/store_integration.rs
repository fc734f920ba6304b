//! Integration tests for the shared record store.

use record_store::{Course, CourseId, Enrollment, InMemoryStore, Student, StudentId, Tables};

fn seeded_store() -> InMemoryStore {
    let students = (1..=3u64).map(|id| Student::new(id, format!("Student {id}"))).collect();
    let courses = vec![Course::new(1u64, "Math"), Course::new(2u64, "Science")];
    let enrollments = vec![
        Enrollment::new(1u64, 1u64),
        Enrollment::new(2u64, 1u64),
        Enrollment::new(3u64, 1u64),
        Enrollment::new(1u64, 2u64),
    ];
    InMemoryStore::with_tables(Tables::from_records(students, courses, enrollments))
}

#[tokio::test]
async fn remove_where_clears_every_reference_in_one_call() {
    let store = seeded_store();

    let removed = store
        .write()
        .await
        .enrollments
        .remove_where(|e| e.course_id == CourseId::new(1));

    assert_eq!(removed, 3);
    let tables = store.read().await;
    assert!(tables.enrollments_for_course(CourseId::new(1)).is_empty());
    assert_eq!(tables.enrollments_for_course(CourseId::new(2)).len(), 1);
}

#[tokio::test]
async fn listing_follows_insertion_order() {
    let store = seeded_store();

    store.write().await.students.insert(Student::new(10u64, "Late"));
    store.write().await.students.insert(Student::new(4u64, "Later"));

    let ids: Vec<StudentId> = store
        .read()
        .await
        .students
        .iter()
        .map(|s| s.student_id)
        .collect();
    assert_eq!(ids, [1, 2, 3, 10, 4].map(StudentId::new).to_vec());
}

#[tokio::test]
async fn concurrent_writers_are_serialized() {
    let store = seeded_store();

    let mut handles = Vec::new();
    for i in 0..50u64 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            let mut tables = store.write().await;
            let id = StudentId::new(tables.students.len() as u64 + 1);
            tables.students.insert(Student::new(id, format!("Spawned {i}")));
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let tables = store.read().await;
    assert_eq!(tables.students.len(), 53);
    let mut ids: Vec<u64> = tables.students.iter().map(|s| s.student_id.get()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 53);
}
