use std::io::Read;
use std::path::Path;
use std::time::Duration;

use axum::{
    extract::{DefaultBodyLimit, Multipart},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use flate2::read::GzDecoder;
use serde::Serialize;
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;

use crate::cli::ServeArgs;
use crate::core::record::Database;
use crate::core::types::Algorithm;
use crate::matching::engine::{BestMatch, MatchEngine, MatchError};
use crate::parsing::fasta::{self, ParseError};
use crate::utils::validation::{validate_upload, ValidationError};

/// Limits that keep a single request's cost bounded
pub const MAX_MULTIPART_FIELDS: usize = 10;
pub const MAX_FILE_FIELD_SIZE: usize = 16 * 1024 * 1024; // 16MB per file
pub const MAX_TEXT_FIELD_SIZE: usize = 1024; // algorithm name field

/// Enhanced error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_type: String,
    pub details: Option<String>,
}

/// Create a safe error response that prevents information disclosure
/// while logging detailed errors server-side for debugging
pub fn create_safe_error_response(
    error_type: &str,
    user_message: &str,
    internal_error: Option<&str>,
) -> ErrorResponse {
    // Log detailed error server-side for debugging (not exposed to client)
    if let Some(internal_msg) = internal_error {
        tracing::error!("Internal error ({}): {}", error_type, internal_msg);
    }

    ErrorResponse {
        error: user_message.to_string(),
        error_type: error_type.to_string(),
        details: None, // Never expose internal details to prevent information disclosure
    }
}

/// Fields extracted from the search form
#[derive(Debug, Default)]
struct SearchRequest {
    database_text: Option<String>,
    query_text: Option<String>,
    algorithm: Option<String>,
}

/// Run the web server
///
/// # Errors
///
/// Returns an error if the tokio runtime cannot be created or the server
/// fails to start.
pub fn run(args: ServeArgs) -> anyhow::Result<()> {
    // Build tokio runtime
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(args).await })
}

/// Create the application router with all routes and middleware configured
#[must_use]
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/search", post(search_handler))
        .route("/api/algorithms", get(algorithms_handler))
        .layer(
            ServiceBuilder::new()
                // Stop browsers from guessing content types
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-content-type-options"),
                    HeaderValue::from_static("nosniff"),
                ))
                // Request timeout bounds the wall-clock cost of one search
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    Duration::from_secs(30),
                ))
                // Limit concurrent requests to prevent DOS
                .layer(ConcurrencyLimitLayer::new(100))
                // Limit request body size (two files plus multipart overhead)
                .layer(DefaultBodyLimit::max(36 * 1024 * 1024)),
        )
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    let app = create_router();

    let addr = format!("{}:{}", args.address, args.port);
    println!("Starting seqmatch web server at http://{addr}");

    if args.open {
        let _ = open::that(format!("http://{addr}"));
    }

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Main page handler
async fn index_handler() -> Html<&'static str> {
    Html(include_str!("templates/index.html"))
}

/// Return the algorithm registry
async fn algorithms_handler() -> Json<serde_json::Value> {
    let algorithms: Vec<serde_json::Value> = Algorithm::all()
        .iter()
        .map(|a| {
            serde_json::json!({
                "name": a.name(),
                "display_name": a.display_name(),
                "score_label": a.score_label(),
                "description": a.description(),
            })
        })
        .collect();

    Json(serde_json::json!({
        "count": algorithms.len(),
        "algorithms": algorithms,
    }))
}

/// API endpoint for running a best-match search
async fn search_handler(mut multipart: Multipart) -> Response {
    let start_time = std::time::Instant::now();

    // Extract form fields
    let request = match extract_search_request(&mut multipart).await {
        Ok(request) => request,
        Err(error_response) => return error_response,
    };

    let Some(algorithm_name) = request.algorithm else {
        return (
            StatusCode::BAD_REQUEST,
            Json(create_safe_error_response(
                "missing_algorithm",
                "No algorithm selected.",
                None,
            )),
        )
            .into_response();
    };
    let Some(algorithm) = Algorithm::from_name(&algorithm_name) else {
        return match_error_response(&MatchError::UnknownAlgorithm {
            name: algorithm_name,
        });
    };

    // Parse both inputs through the record store
    let database = match fasta::parse_text(&request.database_text.unwrap_or_default()) {
        Ok(records) => Database::new(records),
        Err(err) => return parse_error_response(&err, "Database"),
    };
    let query_records = match fasta::parse_text(&request.query_text.unwrap_or_default()) {
        Ok(records) => records,
        Err(err) => return parse_error_response(&err, "Query"),
    };
    let query = match fasta::query_from_records(query_records) {
        Ok(query) => query,
        Err(_) => return match_error_response(&MatchError::EmptyQuery),
    };

    let query_label = query.label().to_string();
    let query_length = query.residues().len();
    let database_records = database.len();

    // The scan is CPU-bound, keep it off the async workers
    let result = tokio::task::spawn_blocking(move || {
        let engine = MatchEngine::new(&database);
        engine.best_match(&query, algorithm)
    })
    .await;

    let best = match result {
        Ok(Ok(best)) => best,
        Ok(Err(err)) => return match_error_response(&err),
        Err(err) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(create_safe_error_response(
                    "internal_error",
                    "Search failed unexpectedly.",
                    Some(&err.to_string()),
                )),
            )
                .into_response();
        }
    };

    #[allow(clippy::cast_possible_truncation)] // Processing time won't exceed u64
    let processing_time = start_time.elapsed().as_millis() as u64;

    Json(search_response(
        &best,
        &query_label,
        query_length,
        database_records,
        processing_time,
    ))
    .into_response()
}

fn search_response(
    best: &BestMatch,
    query_label: &str,
    query_length: usize,
    database_records: usize,
    processing_time: u64,
) -> serde_json::Value {
    let mut json = serde_json::json!({
        "query": {
            "label": query_label,
            "length": query_length,
        },
        "database": {
            "records": database_records,
        },
        "algorithm": best.algorithm,
        "algorithm_display_name": best.algorithm.display_name(),
        "score": best.score,
        "score_label": best.algorithm.score_label(),
        "best_match": {
            "index": best.index,
            "label": best.record.label,
            "length": best.record.len(),
            "preview": best.record.preview(),
        },
        "processing_info": {
            "processing_time_ms": processing_time,
        },
    });

    // Ratio only exists for the substring algorithm
    if let Some(ratio) = best.ratio {
        json["ratio"] = serde_json::json!(ratio);
    }

    json
}

/// Extract the search form fields from a multipart body
async fn extract_search_request(multipart: &mut Multipart) -> Result<SearchRequest, Response> {
    let mut request = SearchRequest::default();
    let mut fields_received = 0usize;
    let mut had_parse_error = false;

    loop {
        // Check field count limit before processing
        if fields_received >= MAX_MULTIPART_FIELDS {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Too many form fields".to_string(),
                    error_type: "field_limit_exceeded".to_string(),
                    details: None,
                }),
            )
                .into_response());
        }

        match multipart.next_field().await {
            Ok(Some(field)) => {
                fields_received += 1;
                let name = field.name().unwrap_or_default().to_string();

                match name.as_str() {
                    "database_file" | "query_file" => {
                        let filename = field.file_name().map(std::string::ToString::to_string);

                        match field.bytes().await {
                            Ok(bytes) => {
                                // Validate field size before processing
                                if bytes.len() > MAX_FILE_FIELD_SIZE {
                                    return Err((
                                        StatusCode::PAYLOAD_TOO_LARGE,
                                        Json(ErrorResponse {
                                            error: "File size exceeds limit".to_string(),
                                            error_type: "file_too_large".to_string(),
                                            details: None,
                                        }),
                                    )
                                        .into_response());
                                }

                                let text = decode_upload(filename.as_deref(), &bytes)?;
                                if name == "database_file" {
                                    request.database_text = Some(text);
                                } else {
                                    request.query_text = Some(text);
                                }
                            }
                            Err(_) => had_parse_error = true,
                        }
                    }
                    "algorithm" => match field.text().await {
                        Ok(text) => {
                            if text.len() > MAX_TEXT_FIELD_SIZE {
                                return Err((
                                    StatusCode::PAYLOAD_TOO_LARGE,
                                    Json(ErrorResponse {
                                        error: "Text field size exceeds limit".to_string(),
                                        error_type: "text_too_large".to_string(),
                                        details: None,
                                    }),
                                )
                                    .into_response());
                            }

                            if !text.trim().is_empty() {
                                request.algorithm = Some(text.trim().to_string());
                            }
                        }
                        Err(_) => had_parse_error = true,
                    },
                    _ => {} // Ignore unknown fields
                }
            }
            Ok(None) => break, // No more fields
            Err(_) => {
                had_parse_error = true;
                break;
            }
        }
    }

    // Validate that both files arrived
    if request.database_text.is_none() || request.query_text.is_none() {
        let error_msg = if had_parse_error {
            "Failed to parse upload. Please check the form data."
        } else if request.database_text.is_none() {
            "No database file received. Please upload a database file."
        } else {
            "No query file received. Please upload a query file."
        };

        return Err((
            StatusCode::BAD_REQUEST,
            Json(create_safe_error_response("missing_input", error_msg, None)),
        )
            .into_response());
    }

    Ok(request)
}

/// Validate an uploaded file and return its text, decompressing gzip
fn decode_upload(filename: Option<&str>, bytes: &[u8]) -> Result<String, Response> {
    let compressed = filename.is_some_and(|name| fasta::is_gzipped(Path::new(name)));

    let content = if compressed {
        decompress_upload(bytes)?
    } else {
        bytes.to_vec()
    };

    match validate_upload(filename, &content) {
        Ok(_) => Ok(String::from_utf8_lossy(&content).to_string()),
        Err(ValidationError::FilenameTooLong) => Err((
            StatusCode::BAD_REQUEST,
            Json(create_safe_error_response(
                "filename_too_long",
                "Filename exceeds maximum length limit",
                Some("Filename validation failed due to length constraints"),
            )),
        )
            .into_response()),
        Err(ValidationError::InvalidFilename | ValidationError::EmptyFilename) => Err((
            StatusCode::BAD_REQUEST,
            Json(create_safe_error_response(
                "invalid_filename",
                "Filename contains invalid or dangerous characters",
                Some("Filename validation failed due to invalid characters"),
            )),
        )
            .into_response()),
        Err(ValidationError::InvalidFileContent) => Err((
            StatusCode::BAD_REQUEST,
            Json(create_safe_error_response(
                "invalid_content",
                "File content appears malformed or corrupted",
                None,
            )),
        )
            .into_response()),
    }
}

/// Decompress a gzipped upload, capped at the file size limit
fn decompress_upload(bytes: &[u8]) -> Result<Vec<u8>, Response> {
    let mut decoded = Vec::new();
    let mut reader = GzDecoder::new(bytes).take(MAX_FILE_FIELD_SIZE as u64 + 1);

    if reader.read_to_end(&mut decoded).is_err() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(create_safe_error_response(
                "invalid_content",
                "File content appears malformed or corrupted",
                Some("Gzip decompression failed"),
            )),
        )
            .into_response());
    }

    if decoded.len() > MAX_FILE_FIELD_SIZE {
        return Err((
            StatusCode::PAYLOAD_TOO_LARGE,
            Json(ErrorResponse {
                error: "Decompressed file size exceeds limit".to_string(),
                error_type: "file_too_large".to_string(),
                details: None,
            }),
        )
            .into_response());
    }

    Ok(decoded)
}

/// Map a record-store failure to an error response
fn parse_error_response(err: &ParseError, what: &str) -> Response {
    match err {
        ParseError::TooManyRecords(_) | ParseError::TooManyResidues(_) => (
            StatusCode::PAYLOAD_TOO_LARGE,
            Json(create_safe_error_response(
                "input_too_large",
                &format!("{what} file exceeds the record or residue limits"),
                Some(&err.to_string()),
            )),
        )
            .into_response(),
        ParseError::NoRecords => match_error_response(&MatchError::EmptyQuery),
        ParseError::Io(_) => (
            StatusCode::BAD_REQUEST,
            Json(create_safe_error_response(
                "parse_failed",
                &format!("Unable to process the {what} file content."),
                Some(&err.to_string()),
            )),
        )
            .into_response(),
    }
}

/// Map a scan failure to an error response
fn match_error_response(err: &MatchError) -> Response {
    let (status, error_type) = match err {
        MatchError::UnknownAlgorithm { .. } => (StatusCode::BAD_REQUEST, "unknown_algorithm"),
        MatchError::EmptyDatabase => (StatusCode::UNPROCESSABLE_ENTITY, "empty_database"),
        MatchError::EmptyQuery => (StatusCode::UNPROCESSABLE_ENTITY, "empty_query"),
        MatchError::DegenerateResult => (StatusCode::UNPROCESSABLE_ENTITY, "degenerate_result"),
        MatchError::ZeroLengthCandidate => {
            (StatusCode::UNPROCESSABLE_ENTITY, "zero_length_candidate")
        }
    };

    (
        status,
        Json(create_safe_error_response(error_type, &err.to_string(), None)),
    )
        .into_response()
}
