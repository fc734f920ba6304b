//! Integration tests for the API server.

use std::sync::OnceLock;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use metrics_exporter_prometheus::PrometheusHandle;
use tower::ServiceExt;

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

fn get_metrics_handle() -> PrometheusHandle {
    METRICS_HANDLE
        .get_or_init(|| {
            let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
            builder
                .install_recorder()
                .expect("failed to install Prometheus recorder")
        })
        .clone()
}

fn setup() -> axum::Router {
    api::create_app(api::create_default_state(), get_metrics_handle())
}

async fn send(app: &axum::Router, method: &str, uri: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn json(response: Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

async fn get_json(app: &axum::Router, uri: &str) -> serde_json::Value {
    let response = send(app, "GET", uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    json(response).await
}

#[tokio::test]
async fn test_welcome_and_health() {
    let app = setup();

    let welcome = get_json(&app, "/").await;
    assert_eq!(welcome["message"], "Welcome to Credo University");

    let health = get_json(&app, "/health").await;
    assert_eq!(health["status"], "ok");
}

#[tokio::test]
async fn test_list_courses() {
    let app = setup();

    let json = get_json(&app, "/courses").await;
    assert_eq!(json["status"], 200);
    assert_eq!(json["total_count"], 6);
    assert_eq!(json["data"].as_array().unwrap().len(), 6);
    assert_eq!(json["data"][0]["course_name"], "Math");
}

#[tokio::test]
async fn test_get_course() {
    let app = setup();

    let json = get_json(&app, "/courses/4").await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["course_id"], 4);
    assert!(data[0]["course_name"].is_string());

    let missing = get_json(&app, "/courses/77").await;
    assert_eq!(missing["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let app = setup();

    let response = send(&app, "GET", "/courses/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(json(response).await["error"].is_string());

    let response = send(&app, "POST", "/courses/1/students/nobody").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_course_enrollees() {
    let app = setup();

    let json = get_json(&app, "/courses/1/students").await;
    assert_eq!(json["total_count"], 20);
    assert!(json["data"][0]["course_id"].is_number());
    assert!(json["data"][0]["student_id"].is_number());

    let json = get_json(&app, "/courses/1/students/1").await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_courses() {
    let app = setup();

    let response = send(&app, "POST", "/courses?course_name=geography").await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let named = json(response).await;
    assert_eq!(named["status"], 201);
    assert_eq!(named["data"]["course_id"], 7);
    assert_eq!(named["data"]["course_name"], "geography");

    let unnamed = json(send(&app, "POST", "/courses").await).await;
    assert_eq!(unnamed["data"]["course_id"], 8);
    assert_eq!(unnamed["data"]["course_name"], "TO BE DETERMINED");

    let list = get_json(&app, "/courses").await;
    assert_eq!(list["total_count"], 8);
}

#[tokio::test]
async fn test_enroll_failure_cases_and_success() {
    let app = setup();

    let cases = [
        (
            "/courses/1/students/1",
            StatusCode::FORBIDDEN,
            "Student is already enrolled in the course",
        ),
        (
            "/courses/6/students/1",
            StatusCode::FORBIDDEN,
            "Student is already enrolled in 5 classes",
        ),
        (
            "/courses/1/students/21",
            StatusCode::FORBIDDEN,
            "Class is full, unable to enroll student",
        ),
        (
            "/courses/2/students/21",
            StatusCode::CREATED,
            "Student successfully enrolled in course",
        ),
    ];

    for (uri, status, message) in cases {
        let response = send(&app, "POST", uri).await;
        assert_eq!(response.status(), status, "{uri}");
        let body = json(response).await;
        assert_eq!(body["status"], status.as_u16());
        assert_eq!(body["data"], message);
    }

    let list = get_json(&app, "/courses/2/students").await;
    assert_eq!(list["total_count"], 2);
}

#[tokio::test]
async fn test_enroll_unknown_records_is_forbidden() {
    let app = setup();

    let response = send(&app, "POST", "/courses/999/students/888").await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = json(response).await;
    assert_eq!(body["status"], 403);
    assert_eq!(body["data"], "Student or course does not exist");

    let list = get_json(&app, "/courses/999/students").await;
    assert_eq!(list["total_count"], 0);
    let list = get_json(&app, "/students/888/courses").await;
    assert_eq!(list["total_count"], 0);
}

#[tokio::test]
async fn test_unenroll() {
    let app = setup();
    send(&app, "POST", "/courses/2/students/21").await;

    let response = send(&app, "DELETE", "/courses/2/students/21").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let list = get_json(&app, "/courses/2/students").await;
    assert_eq!(list["total_count"], 1);

    let again = send(&app, "DELETE", "/courses/2/students/21").await;
    assert_eq!(again.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_rename_course() {
    let app = setup();

    let response = send(&app, "PUT", "/courses/3/spanish").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let json = get_json(&app, "/courses/3").await;
    assert_eq!(json["data"][0]["course_id"], 3);
    assert_eq!(json["data"][0]["course_name"], "spanish");
}

#[tokio::test]
async fn test_delete_course_cascades() {
    let app = setup();

    let before = get_json(&app, "/students/21/courses").await;
    assert_eq!(before["total_count"], 1);

    let response = send(&app, "DELETE", "/courses/6").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let list = get_json(&app, "/courses").await;
    assert_eq!(list["total_count"], 5);
    let after = get_json(&app, "/students/21/courses").await;
    assert_eq!(after["total_count"], 0);
}

#[tokio::test]
async fn test_students() {
    let app = setup();

    let list = get_json(&app, "/students").await;
    assert_eq!(list["status"], 200);
    assert_eq!(list["total_count"], 21);

    let student = get_json(&app, "/students/1").await;
    assert_eq!(student["data"][0]["student_id"], 1);
    assert_eq!(student["data"][0]["student_name"], "Sophia");

    let courses = get_json(&app, "/students/1/courses").await;
    assert_eq!(courses["total_count"], 5);
}

#[tokio::test]
async fn test_create_and_delete_students() {
    let app = setup();

    let response = send(&app, "POST", "/students?student_name=Andrew").await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let named = json(response).await;
    assert_eq!(named["data"]["student_id"], 22);
    assert_eq!(named["data"]["student_name"], "Andrew");

    let unnamed = json(send(&app, "POST", "/students").await).await;
    assert_eq!(unnamed["data"]["student_id"], 23);
    assert_eq!(unnamed["data"]["student_name"], "TO BE DETERMINED");

    let enrollees = get_json(&app, "/courses/4/students").await;
    assert_eq!(enrollees["total_count"], 2);

    let response = send(&app, "DELETE", "/students/4").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let list = get_json(&app, "/students").await;
    assert_eq!(list["total_count"], 22);
    let enrollees = get_json(&app, "/courses/4/students").await;
    assert_eq!(enrollees["total_count"], 1);
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let app = setup();
    send(&app, "POST", "/courses/1/students/1").await;

    let response = send(&app, "GET", "/metrics").await;
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/plain"));
}
