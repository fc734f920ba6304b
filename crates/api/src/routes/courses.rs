//! Course and enrollment endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use domain::{Course, CourseId, Enrollment, Status, StudentId};
use serde::Deserialize;

use super::{AppState, DataResponse, ListResponse, status_code};
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct CreateCourseParams {
    pub course_name: Option<String>,
}

type CoursePath = Result<Path<u64>, PathRejection>;
type EnrolleePath = Result<Path<(u64, u64)>, PathRejection>;

/// GET /courses: every course in catalog order.
#[tracing::instrument(skip(state))]
pub async fn list(State(state): State<Arc<AppState>>) -> Json<ListResponse<Course>> {
    Json(ListResponse::ok(state.registrar.list_courses().await))
}

/// GET /courses/{course_id}: zero or one course.
#[tracing::instrument(skip(state))]
pub async fn get(
    State(state): State<Arc<AppState>>,
    path: CoursePath,
) -> Result<Json<DataResponse<Vec<Course>>>, ApiError> {
    let Path(course_id) = path?;
    let courses = state.registrar.get_course(CourseId::new(course_id)).await;
    Ok(Json(DataResponse::new(Status::Ok, courses)))
}

/// POST /courses?course_name=: add a course.
#[tracing::instrument(skip(state))]
pub async fn create(
    State(state): State<Arc<AppState>>,
    query: Result<Query<CreateCourseParams>, QueryRejection>,
) -> Result<(StatusCode, Json<DataResponse<Course>>), ApiError> {
    let Query(params) = query?;
    let outcome = state.registrar.create_course(params.course_name).await;
    Ok((
        status_code(outcome.status),
        Json(DataResponse::new(outcome.status, outcome.body)),
    ))
}

/// PUT /courses/{course_id}/{course_name}: rename a course.
#[tracing::instrument(skip(state))]
pub async fn rename(
    State(state): State<Arc<AppState>>,
    path: Result<Path<(u64, String)>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path((course_id, course_name)) = path?;
    let outcome = state
        .registrar
        .update_course_name(CourseId::new(course_id), course_name)
        .await;
    Ok(status_code(outcome.status))
}

/// DELETE /courses/{course_id}: remove a course and its enrollments.
#[tracing::instrument(skip(state))]
pub async fn delete(
    State(state): State<Arc<AppState>>,
    path: CoursePath,
) -> Result<StatusCode, ApiError> {
    let Path(course_id) = path?;
    let outcome = state.registrar.delete_course(CourseId::new(course_id)).await;
    Ok(status_code(outcome.status))
}

/// GET /courses/{course_id}/students: enrollments in the course.
#[tracing::instrument(skip(state))]
pub async fn students(
    State(state): State<Arc<AppState>>,
    path: CoursePath,
) -> Result<Json<ListResponse<Enrollment>>, ApiError> {
    let Path(course_id) = path?;
    let enrollees = state
        .registrar
        .list_course_students(CourseId::new(course_id))
        .await;
    Ok(Json(ListResponse::ok(enrollees)))
}

/// GET /courses/{course_id}/students/{student_id}: zero or one enrollment.
#[tracing::instrument(skip(state))]
pub async fn enrollee(
    State(state): State<Arc<AppState>>,
    path: EnrolleePath,
) -> Result<Json<DataResponse<Vec<Enrollment>>>, ApiError> {
    let Path((course_id, student_id)) = path?;
    let enrollee = state
        .registrar
        .get_enrollee(CourseId::new(course_id), StudentId::new(student_id))
        .await;
    Ok(Json(DataResponse::new(Status::Ok, enrollee)))
}

/// POST /courses/{course_id}/students/{student_id}: enroll a student.
///
/// Rejections are reported as 403 with the rule's message.
#[tracing::instrument(skip(state))]
pub async fn enroll(
    State(state): State<Arc<AppState>>,
    path: EnrolleePath,
) -> Result<(StatusCode, Json<DataResponse<&'static str>>), ApiError> {
    let Path((course_id, student_id)) = path?;
    let decision = state
        .registrar
        .enroll(CourseId::new(course_id), StudentId::new(student_id))
        .await;
    Ok((
        status_code(decision.status()),
        Json(DataResponse::new(decision.status(), decision.message())),
    ))
}

/// DELETE /courses/{course_id}/students/{student_id}: drop an enrollment.
#[tracing::instrument(skip(state))]
pub async fn unenroll(
    State(state): State<Arc<AppState>>,
    path: EnrolleePath,
) -> Result<StatusCode, ApiError> {
    let Path((course_id, student_id)) = path?;
    let outcome = state
        .registrar
        .unenroll(CourseId::new(course_id), StudentId::new(student_id))
        .await;
    Ok(status_code(outcome.status))
}
