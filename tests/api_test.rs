use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;

use dreamjob_backend::{routes, AppState};

const BOUNDARY: &str = "dreamjob-test-boundary";

fn app() -> Router {
    routes::router(AppState::in_memory(), 1024 * 1024)
}

fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                BOUNDARY, name, value
            )
            .as_bytes(),
        );
    }
    if let Some((file_name, content)) = file {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
                BOUNDARY, file_name
            )
            .as_bytes(),
        );
        body.extend_from_slice(content);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

fn multipart_request(method: &str, uri: &str, body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

fn json_request(uri: &str, body: JsonValue) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn read_json(resp: axum::response::Response) -> JsonValue {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let resp = app().oneshot(empty_request("GET", "/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["status"], "ok");
}

#[tokio::test]
async fn candidate_crud_over_http() {
    let app = app();

    let body = multipart_body(
        &[
            ("name", "Vasia"),
            ("description", "test"),
            ("city_id", "1"),
        ],
        Some(("cv.txt", &b"hello"[..])),
    );
    let resp = app
        .clone()
        .oneshot(multipart_request("POST", "/api/candidates", body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = read_json(resp).await;
    assert_eq!(created["id"], 1);
    assert_eq!(created["name"], "Vasia");
    let file_id = created["file_id"].as_i64().unwrap();
    let creation_date = created["creation_date"].as_str().unwrap().to_string();

    let resp = app
        .clone()
        .oneshot(empty_request("GET", &format!("/api/files/{}", file_id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"cv.txt\""
    );
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"hello");

    let file_id_field = file_id.to_string();
    let body = multipart_body(
        &[
            ("name", "Vasia Pupkin"),
            ("description", "updated"),
            ("city_id", "2"),
            ("creation_date", creation_date.as_str()),
            ("file_id", file_id_field.as_str()),
        ],
        None,
    );
    let resp = app
        .clone()
        .oneshot(multipart_request("PUT", "/api/candidates/1", body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated = read_json(resp).await;
    assert_eq!(updated["name"], "Vasia Pupkin");
    assert_eq!(updated["city_id"], 2);
    assert_eq!(updated["file_id"], file_id);

    let resp = app
        .clone()
        .oneshot(empty_request("GET", "/api/candidates"))
        .await
        .unwrap();
    assert_eq!(read_json(resp).await["items"].as_array().unwrap().len(), 1);

    let resp = app
        .clone()
        .oneshot(empty_request("DELETE", "/api/candidates/1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = app
        .clone()
        .oneshot(empty_request("DELETE", "/api/candidates/1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = app
        .oneshot(empty_request("GET", "/api/candidates/1"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn candidate_without_attachment_is_rejected() {
    let body = multipart_body(&[("name", "Vasia"), ("city_id", "1")], None);
    let resp = app()
        .oneshot(multipart_request("POST", "/api/candidates", body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn vacancy_update_with_new_attachment() {
    let app = app();

    let body = multipart_body(
        &[
            ("title", "Junior Rust Developer"),
            ("description", "first"),
            ("visible", "on"),
            ("city_id", "1"),
        ],
        Some(("vacancy.txt", &b"v1"[..])),
    );
    let resp = app
        .clone()
        .oneshot(multipart_request("POST", "/api/vacancies", body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = read_json(resp).await;
    assert_eq!(created["visible"], true);
    let old_file_id = created["file_id"].as_i64().unwrap();

    let body = multipart_body(
        &[
            ("title", "Middle Rust Developer"),
            ("description", "second"),
            ("city_id", "3"),
            ("creation_date", "2023-03-21T12:00:00"),
        ],
        Some(("vacancy-v2.txt", &b"v2"[..])),
    );
    let resp = app
        .clone()
        .oneshot(multipart_request("PUT", "/api/vacancies/1", body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated = read_json(resp).await;
    assert_eq!(updated["id"], 1);
    assert_eq!(updated["title"], "Middle Rust Developer");
    assert_eq!(updated["visible"], false);
    assert_eq!(updated["creation_date"], "2023-03-21T12:00:00");
    assert_ne!(updated["file_id"].as_i64().unwrap(), old_file_id);

    let body = multipart_body(
        &[
            ("title", "Ghost"),
            ("city_id", "1"),
            ("creation_date", "2023-03-21T12:00:00"),
        ],
        Some(("ghost.txt", &b"x"[..])),
    );
    let resp = app
        .oneshot(multipart_request("PUT", "/api/vacancies/999", body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn register_login_and_duplicate_email() {
    let app = app();
    let payload = json!({ "email": "user@example.com", "name": "User", "password": "secret" });

    let resp = app
        .clone()
        .oneshot(json_request("/api/users/register", payload.clone()))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let user = read_json(resp).await;
    assert_eq!(user["email"], "user@example.com");
    assert!(user.get("password").is_none());

    let resp = app
        .clone()
        .oneshot(json_request("/api/users/register", payload))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let resp = app
        .clone()
        .oneshot(json_request(
            "/api/users/login",
            json!({ "email": "user@example.com", "password": "secret" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["name"], "User");

    let resp = app
        .clone()
        .oneshot(json_request(
            "/api/users/login",
            json!({ "email": "user@example.com", "password": "nope" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = app
        .oneshot(json_request(
            "/api/users/delete",
            json!({ "email": "user@example.com", "password": "secret" }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn cities_are_listed() {
    let resp = app()
        .oneshot(empty_request("GET", "/api/cities"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn update_of_missing_candidate_is_not_found_but_keeps_upload() {
    let state = AppState::in_memory();
    let app = routes::router(state.clone(), 1024 * 1024);

    let body = multipart_body(
        &[
            ("name", "Ghost"),
            ("city_id", "1"),
            ("creation_date", "2023-03-21T12:00:00"),
        ],
        Some(("ghost.txt", &b"boo"[..])),
    );
    let resp = app
        .oneshot(multipart_request("PUT", "/api/candidates/42", body))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(state.candidate_service.find_by_id(42).await.unwrap().is_none());
    assert_eq!(
        state.file_service.find_by_id(1).await.unwrap().map(|f| f.name),
        Some("ghost.txt".to_string())
    );
}

#[tokio::test]
async fn update_without_attachment_or_file_id_is_rejected() {
    let app = app();
    let body = multipart_body(
        &[("name", "Vasia"), ("city_id", "1")],
        Some(("cv.txt", &b"hello"[..])),
    );
    let resp = app
        .clone()
        .oneshot(multipart_request("POST", "/api/candidates", body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = multipart_body(
        &[
            ("name", "Vasia"),
            ("city_id", "1"),
            ("creation_date", "2023-03-21T12:00:00"),
        ],
        None,
    );
    let resp = app
        .clone()
        .oneshot(multipart_request("PUT", "/api/candidates/1", body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = app
        .oneshot(empty_request("GET", "/api/candidates/1"))
        .await
        .unwrap();
    assert_eq!(read_json(resp).await["name"], "Vasia");
}

#[tokio::test]
async fn upload_over_body_limit_is_rejected() {
    let state = AppState::in_memory();
    let app = routes::router(state.clone(), 256);

    let content = vec![b'x'; 4096];
    let body = multipart_body(
        &[("name", "Vasia"), ("city_id", "1")],
        Some(("big.bin", &content[..])),
    );
    let resp = app
        .oneshot(multipart_request("POST", "/api/candidates", body))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert!(state.candidate_service.find_all().await.unwrap().is_empty());
    assert!(state.file_service.find_by_id(1).await.unwrap().is_none());
}
