use common::{CourseId, Enrollment, StudentId};
use criterion::{Criterion, criterion_group, criterion_main};
use domain::{Registrar, can_enroll, seed};

fn bench_can_enroll(c: &mut Criterion) {
    let mut enrollments = seed::enrollments();
    // Pad out to a realistic term: 200 courses with 15 students each.
    for course in 10..210u64 {
        enrollments.extend((1000..1015u64).map(|s| Enrollment::new(s + course, course)));
    }

    c.bench_function("domain/can_enroll", |b| {
        b.iter(|| {
            can_enroll(
                std::hint::black_box(StudentId::new(21)),
                std::hint::black_box(CourseId::new(2)),
                &enrollments,
            )
        });
    });
}

fn bench_enroll_unenroll_cycle(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let registrar = Registrar::seeded();

    c.bench_function("domain/enroll_unenroll", |b| {
        b.iter(|| {
            rt.block_on(async {
                registrar.enroll(CourseId::new(2), StudentId::new(21)).await;
                registrar.unenroll(CourseId::new(2), StudentId::new(21)).await;
            });
        });
    });
}

fn bench_delete_with_cascade(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("domain/delete_course_cascade", |b| {
        b.iter(|| {
            rt.block_on(async {
                let registrar = Registrar::seeded();
                registrar.delete_course(CourseId::new(1)).await;
            });
        });
    });
}

criterion_group!(
    benches,
    bench_can_enroll,
    bench_enroll_unenroll_cycle,
    bench_delete_with_cascade
);
criterion_main!(benches);
