//! Request routing for the `/api` surface.
//!
//! Routing is a pure function of method, URL and scanner so it can be
//! tested without a socket. Nothing is cached between requests.

use serde::Serialize;
use serde_json::json;
use stg_scan::ContentScanner;
use tiny_http::Method;

const JSON: &str = "application/json";
const HTML: &str = "text/html; charset=utf-8";

/// Status, content type and body of one API response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl ApiResponse {
    fn json(status: u16, value: &impl Serialize) -> Self {
        match serde_json::to_string(value) {
            Ok(body) => Self {
                status,
                content_type: JSON,
                body,
            },
            Err(error) => {
                tracing::warn!(%error, "failed to serialize response");
                Self::error(500, "Server error")
            }
        }
    }

    fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            content_type: JSON,
            body: json!({ "error": message }).to_string(),
        }
    }

    fn text(body: String) -> Self {
        Self {
            status: 200,
            content_type: HTML,
            body,
        }
    }
}

/// Dispatch one request.
pub fn route(method: &Method, url: &str, scanner: &ContentScanner) -> ApiResponse {
    let (path, query) = url.split_once('?').unwrap_or((url, ""));

    if *method != Method::Get {
        return ApiResponse::error(405, "Method not allowed");
    }

    match path {
        "/api/files" => list_files(scanner),
        "/api/content" => content(query, scanner),
        _ => match path.strip_prefix("/api/file/") {
            Some(encoded) if !encoded.is_empty() => file_info(encoded, scanner),
            _ => ApiResponse::error(404, "Not found"),
        },
    }
}

fn list_files(scanner: &ContentScanner) -> ApiResponse {
    match scanner.build_index() {
        Ok(index) => {
            tracing::debug!(stages = index.stage_count(), "index rebuilt");
            ApiResponse::json(200, &index)
        }
        Err(error) => {
            tracing::warn!(%error, "listing scan failed");
            ApiResponse::error(500, "Failed to scan files")
        }
    }
}

fn file_info(encoded: &str, scanner: &ContentScanner) -> ApiResponse {
    let Some(path) = decode(encoded) else {
        return ApiResponse::error(404, "File not found");
    };

    match scanner.find_stage(&path) {
        Ok(Some(summary)) => ApiResponse::json(200, &summary),
        Ok(None) => ApiResponse::error(404, "File not found"),
        Err(error) => {
            tracing::warn!(%error, path = %path, "lookup scan failed");
            ApiResponse::error(500, "Failed to scan files")
        }
    }
}

fn content(query: &str, scanner: &ContentScanner) -> ApiResponse {
    let Some(path) = query_param(query, "path").filter(|path| !path.is_empty()) else {
        return ApiResponse::error(400, "File path is required");
    };

    match scanner.read_content(&path) {
        Ok(text) => ApiResponse::text(text),
        Err(error) => {
            tracing::warn!(%error, path = %path, "content read failed");
            ApiResponse::error(404, "File not found or could not be read")
        }
    }
}

/// First value of `name` in a form-encoded query string.
fn query_param(query: &str, name: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(key, _)| *key == name)
        .and_then(|(_, value)| decode(&value.replace('+', " ")))
}

fn decode(value: &str) -> Option<String> {
    urlencoding::decode(value).ok().map(|decoded| decoded.into_owned())
}
