//! Student endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use domain::{Enrollment, Status, Student, StudentId};
use serde::Deserialize;

use super::{AppState, DataResponse, ListResponse, status_code};
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct CreateStudentParams {
    pub student_name: Option<String>,
}

type StudentPath = Result<Path<u64>, PathRejection>;

/// GET /students: every student in registration order.
#[tracing::instrument(skip(state))]
pub async fn list(State(state): State<Arc<AppState>>) -> Json<ListResponse<Student>> {
    Json(ListResponse::ok(state.registrar.list_students().await))
}

/// GET /students/{student_id}: zero or one student.
#[tracing::instrument(skip(state))]
pub async fn get(
    State(state): State<Arc<AppState>>,
    path: StudentPath,
) -> Result<Json<DataResponse<Vec<Student>>>, ApiError> {
    let Path(student_id) = path?;
    let students = state.registrar.get_student(StudentId::new(student_id)).await;
    Ok(Json(DataResponse::new(Status::Ok, students)))
}

/// POST /students?student_name=: register a student.
#[tracing::instrument(skip(state))]
pub async fn create(
    State(state): State<Arc<AppState>>,
    query: Result<Query<CreateStudentParams>, QueryRejection>,
) -> Result<(StatusCode, Json<DataResponse<Student>>), ApiError> {
    let Query(params) = query?;
    let outcome = state.registrar.create_student(params.student_name).await;
    Ok((
        status_code(outcome.status),
        Json(DataResponse::new(outcome.status, outcome.body)),
    ))
}

/// DELETE /students/{student_id}: remove a student and their enrollments.
#[tracing::instrument(skip(state))]
pub async fn delete(
    State(state): State<Arc<AppState>>,
    path: StudentPath,
) -> Result<StatusCode, ApiError> {
    let Path(student_id) = path?;
    let outcome = state
        .registrar
        .delete_student(StudentId::new(student_id))
        .await;
    Ok(status_code(outcome.status))
}

/// GET /students/{student_id}/courses: the student's enrollments.
#[tracing::instrument(skip(state))]
pub async fn courses(
    State(state): State<Arc<AppState>>,
    path: StudentPath,
) -> Result<Json<ListResponse<Enrollment>>, ApiError> {
    let Path(student_id) = path?;
    let enrollments = state
        .registrar
        .list_student_courses(StudentId::new(student_id))
        .await;
    Ok(Json(ListResponse::ok(enrollments)))
}
