//! Router-level tests for the web API, driven through tower's oneshot.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use seqmatch::web::server::create_router;

const BOUNDARY: &str = "seqmatch-test-boundary";

/// Build a multipart body. Parts with a filename are sent as file fields.
fn multipart_body(parts: &[(&str, Option<&str>, &str)]) -> String {
    let mut body = String::new();
    for (name, filename, content) in parts {
        body.push_str(&format!("--{BOUNDARY}\r\n"));
        match filename {
            Some(filename) => body.push_str(&format!(
                "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: text/plain\r\n\r\n"
            )),
            None => {
                body.push_str(&format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n"));
            }
        }
        body.push_str(content);
        body.push_str("\r\n");
    }
    body.push_str(&format!("--{BOUNDARY}--\r\n"));
    body
}

fn search_request(parts: &[(&str, Option<&str>, &str)]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/search")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(parts)))
        .expect("request")
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("valid JSON")
}

#[tokio::test]
async fn test_index_page() {
    let response = create_router()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("x-content-type-options")
            .and_then(|v| v.to_str().ok()),
        Some("nosniff")
    );

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8_lossy(&bytes);
    assert!(html.contains("seqmatch"));
    assert!(html.contains("database_file"));
    assert!(html.contains("query_file"));
}

#[tokio::test]
async fn test_algorithms_endpoint() {
    let response = create_router()
        .oneshot(
            Request::builder()
                .uri("/api/algorithms")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["count"], 4);

    let names: Vec<&str> = json["algorithms"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "edit_distance",
            "longest_common_subsequence",
            "longest_common_substring",
            "needleman_wunsch",
        ]
    );
}

#[tokio::test]
async fn test_search_finds_best_match() {
    let request = search_request(&[
        ("database_file", Some("db.fa"), ">far\nTTTT\n>exact\nACGT\n"),
        ("query_file", Some("query.fa"), ">q\nACGT\n"),
        ("algorithm", None, "edit_distance"),
    ]);

    let response = create_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["score"], 0);
    assert_eq!(json["score_label"], "distance");
    assert_eq!(json["best_match"]["label"], "exact");
    assert_eq!(json["best_match"]["index"], 1);
    assert_eq!(json["database"]["records"], 2);
    assert!(json.get("ratio").is_none());
    assert!(json["processing_info"]["processing_time_ms"].is_u64());
}

#[tokio::test]
async fn test_search_substring_reports_ratio() {
    let request = search_request(&[
        ("database_file", Some("db.fa"), ">hit\nTTTACGTTT\n"),
        ("query_file", Some("query.fa"), ">q\nACG\n"),
        ("algorithm", None, "longest_common_substring"),
    ]);

    let response = create_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["score"], 3);
    let ratio = json["ratio"].as_f64().unwrap();
    assert!((ratio - 1.0 / 3.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_search_unknown_algorithm() {
    let request = search_request(&[
        ("database_file", Some("db.fa"), ">a\nACGT\n"),
        ("query_file", Some("query.fa"), ">q\nACGT\n"),
        ("algorithm", None, "smith_waterman"),
    ]);

    let response = create_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = json_body(response).await;
    assert_eq!(json["error_type"], "unknown_algorithm");
}

#[tokio::test]
async fn test_search_missing_query_file() {
    let request = search_request(&[
        ("database_file", Some("db.fa"), ">a\nACGT\n"),
        ("algorithm", None, "edit_distance"),
    ]);

    let response = create_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = json_body(response).await;
    assert_eq!(json["error_type"], "missing_input");
}

#[tokio::test]
async fn test_search_empty_database() {
    // A lone header with no residues parses to zero records
    let request = search_request(&[
        ("database_file", Some("db.fa"), ">only a header\n"),
        ("query_file", Some("query.fa"), ">q\nACGT\n"),
        ("algorithm", None, "edit_distance"),
    ]);

    let response = create_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = json_body(response).await;
    assert_eq!(json["error_type"], "empty_database");
}

#[tokio::test]
async fn test_search_degenerate_subsequence() {
    let request = search_request(&[
        ("database_file", Some("db.fa"), ">t\nTTTT\n"),
        ("query_file", Some("query.fa"), ">q\nAAAA\n"),
        ("algorithm", None, "longest_common_subsequence"),
    ]);

    let response = create_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = json_body(response).await;
    assert_eq!(json["error_type"], "degenerate_result");
}

#[tokio::test]
async fn test_search_missing_algorithm() {
    let request = search_request(&[
        ("database_file", Some("db.fa"), ">a\nACGT\n"),
        ("query_file", Some("query.fa"), ">q\nACGT\n"),
    ]);

    let response = create_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = json_body(response).await;
    assert_eq!(json["error_type"], "missing_algorithm");
}

#[tokio::test]
async fn test_search_rejects_traversal_filename() {
    let request = search_request(&[
        ("database_file", Some("../etc/passwd"), ">a\nACGT\n"),
        ("query_file", Some("query.fa"), ">q\nACGT\n"),
        ("algorithm", None, "edit_distance"),
    ]);

    let response = create_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = json_body(response).await;
    assert_eq!(json["error_type"], "invalid_filename");
}
