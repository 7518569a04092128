//! Routing against a real content tree, plus one loopback round trip.

use std::fs;
use std::io::{Read, Write};
use std::net::TcpStream;
use std::path::Path;

use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use stg_scan::{ContentScanner, ScanOptions};
use stg_server::{IndexServer, route};
use tempfile::TempDir;
use tiny_http::Method;

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "project_1_setup/2_102_configure.html", "<p>configure</p>");
    write(dir.path(), "project_1_setup/1_101_install.html", "<p>install</p>");
    write(dir.path(), "project_2_deploy/1_201_ship.html", "<p>ship</p>");
    write(dir.path(), "secret.txt", "outside");
    dir
}

fn scanner(root: &Path) -> ContentScanner {
    ContentScanner::new(root, ScanOptions::default())
}

fn unreadable() -> Value {
    json!({"error": "File not found or could not be read"})
}

fn body_json(body: &str) -> Value {
    serde_json::from_str(body).unwrap()
}

#[test]
fn files_lists_grouped_index() {
    let dir = tree();
    let scanner = scanner(dir.path());

    let response = route(&Method::Get, "/api/files", &scanner);
    assert_eq!(response.status, 200);

    let value = body_json(&response.body);
    let names: Vec<_> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|group| group["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["1: setup", "2: deploy"]);
    assert_eq!(value[0]["stages"][0]["order"], 1);
    assert_eq!(value[0]["stages"][1]["order"], 2);
}

#[test]
fn file_lookup_decodes_path() {
    let dir = tree();
    let scanner = scanner(dir.path());

    let response = route(
        &Method::Get,
        "/api/file/project_2_deploy%2F1_201_ship.html",
        &scanner,
    );
    assert_eq!(response.status, 200);
    assert_eq!(
        body_json(&response.body),
        json!({
            "path": "project_2_deploy/1_201_ship.html",
            "project": "2: deploy",
            "stage": "201: ship",
            "order": 1,
            "title": "ship"
        })
    );
}

#[rstest]
#[case::unknown_file(
    "/api/file/project_9_x%2F1_1_y.html",
    404,
    json!({"error": "File not found"})
)]
#[case::unknown_route("/api/nothing", 404, json!({"error": "Not found"}))]
#[case::missing_path("/api/content", 400, json!({"error": "File path is required"}))]
#[case::empty_path("/api/content?path=", 400, json!({"error": "File path is required"}))]
#[case::escape("/api/content?path=..%2Fsecret.txt", 404, unreadable())]
#[case::absent("/api/content?path=project_1_setup%2Fnope.html", 404, unreadable())]
fn error_responses(#[case] url: &str, #[case] status: u16, #[case] body: Value) {
    let dir = tree();
    let scanner = scanner(dir.path());

    let response = route(&Method::Get, url, &scanner);
    assert_eq!(response.status, status);
    assert_eq!(body_json(&response.body), body);
}

#[test]
fn content_returns_raw_text() {
    let dir = tree();
    let scanner = scanner(dir.path());

    let response = route(
        &Method::Get,
        "/api/content?path=project_1_setup/1_101_install.html",
        &scanner,
    );
    assert_eq!(response.status, 200);
    assert_eq!(response.body, "<p>install</p>");
    assert!(response.content_type.starts_with("text/html"));
}

#[test]
fn non_get_is_rejected() {
    let dir = tree();
    let scanner = scanner(dir.path());
    let response = route(&Method::Post, "/api/files", &scanner);
    assert_eq!(response.status, 405);
}

#[test]
fn scan_failure_is_500() {
    let dir = TempDir::new().unwrap();
    let scanner = scanner(&dir.path().join("missing"));

    let response = route(&Method::Get, "/api/files", &scanner);
    assert_eq!(response.status, 500);
    assert_eq!(body_json(&response.body), json!({"error": "Failed to scan files"}));
}

#[test]
fn listings_see_new_files() {
    let dir = tree();
    let scanner = scanner(dir.path());

    route(&Method::Get, "/api/files", &scanner);
    write(dir.path(), "project_3_scale/1_301_more.html", "<p>more</p>");
    let response = route(&Method::Get, "/api/files", &scanner);

    assert_eq!(body_json(&response.body).as_array().unwrap().len(), 3);
}

#[test]
fn loopback_round_trip_sets_cors_headers() {
    let dir = tree();
    let scanner = ContentScanner::new(dir.path(), ScanOptions::default());
    let server = IndexServer::bind("127.0.0.1:0", scanner).unwrap();
    let addr = server.local_addr().unwrap();

    let handle = std::thread::spawn(move || server.handle_next());

    let mut stream = TcpStream::connect(addr).unwrap();
    stream
        .write_all(b"GET /api/files HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .unwrap();
    let mut raw = String::new();
    stream.read_to_string(&mut raw).unwrap();

    handle.join().unwrap().unwrap();

    assert!(raw.starts_with("HTTP/1.1 200"));
    assert!(raw.contains("Access-Control-Allow-Origin: *"));
    assert!(raw.contains(
        "Access-Control-Allow-Headers: Origin, X-Requested-With, Content-Type, Accept"
    ));
    assert!(raw.contains("\"name\":\"1: setup\""));
}
