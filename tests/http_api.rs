//! End-to-end tests for the file store HTTP surface.
//!
//! Each test spins up the full router on an ephemeral port with an
//! isolated temporary directory behind the store.

use std::io::Read;

use serde_json::{json, Value};
use tempfile::TempDir;

use filedock::http_server::{self, Config};
use filedock::{FileStore, ServiceState};

async fn spawn_app() -> (String, TempDir) {
    let temp = TempDir::new().unwrap();
    let store = FileStore::open(temp.path().join("files")).unwrap();
    let state = ServiceState::new(store);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = http_server::router(Config::new(addr), state);

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (format!("http://{}", addr), temp)
}

#[tokio::test]
async fn test_crud_round_trip() {
    let (base, _temp) = spawn_app().await;
    let client = reqwest::Client::new();

    // create
    let resp = client
        .post(format!("{}/api/files", base))
        .json(&json!({"filename": "a.txt", "content": "hello"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "File created.");

    // read
    let resp = client
        .get(format!("{}/api/files/a.txt", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["filename"], "a.txt");
    assert_eq!(body["content"], "hello");

    // update
    let resp = client
        .put(format!("{}/api/files/a.txt", base))
        .json(&json!({"content": "world"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "File updated.");

    let resp = client
        .get(format!("{}/api/files/a.txt", base))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["content"], "world");

    // delete
    let resp = client
        .delete(format!("{}/api/files/a.txt", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 204);
    assert!(resp.bytes().await.unwrap().is_empty());

    // gone
    let resp = client
        .get(format!("{}/api/files/a.txt", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "File not found.");
}

#[tokio::test]
async fn test_create_overwrites_existing() {
    let (base, _temp) = spawn_app().await;
    let client = reqwest::Client::new();

    for content in ["first", "second"] {
        let resp = client
            .post(format!("{}/api/files", base))
            .json(&json!({"filename": "a.txt", "content": content}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 201);
    }

    let body: Value = client
        .get(format!("{}/api/files/a.txt", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["content"], "second");
}

#[tokio::test]
async fn test_update_missing_does_not_create() {
    let (base, _temp) = spawn_app().await;
    let client = reqwest::Client::new();

    let resp = client
        .put(format!("{}/api/files/ghost.txt", base))
        .json(&json!({"content": "content"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "File not found.");

    // the refused update must not have created the file
    let resp = client
        .get(format!("{}/api/files/ghost.txt", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_delete_missing_returns_404() {
    let (base, _temp) = spawn_app().await;
    let client = reqwest::Client::new();

    let resp = client
        .delete(format!("{}/api/files/ghost.txt", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "File not found.");
}

#[tokio::test]
async fn test_download_serves_file_as_attachment() {
    let (base, _temp) = spawn_app().await;
    let client = reqwest::Client::new();

    client
        .post(format!("{}/api/files", base))
        .json(&json!({"filename": "notes.txt", "content": "some notes"}))
        .send()
        .await
        .unwrap();

    let resp = client
        .get(format!("{}/api/files/notes.txt/download", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let disposition = resp
        .headers()
        .get("content-disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment"));
    assert!(disposition.contains("notes.txt"));

    assert_eq!(resp.text().await.unwrap(), "some notes");
}

#[tokio::test]
async fn test_download_missing_returns_404() {
    let (base, _temp) = spawn_app().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{}/api/files/ghost.txt/download", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_export_then_download_archive() {
    let (base, _temp) = spawn_app().await;
    let client = reqwest::Client::new();

    for (name, content) in [("a.txt", "alpha"), ("b.txt", "beta")] {
        client
            .post(format!("{}/api/files", base))
            .json(&json!({"filename": name, "content": content}))
            .send()
            .await
            .unwrap();
    }

    let resp = client
        .post(format!("{}/api/projects/export", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    let download_url = body["downloadUrl"].as_str().unwrap().to_string();

    // the URL is absolute and built from the request's Host header
    assert!(download_url.starts_with(&base));
    assert!(download_url.ends_with("/download"));

    let resp = client.get(&download_url).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let bytes = resp.bytes().await.unwrap().to_vec();

    let mut zip = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
    let mut a = String::new();
    zip.by_name("a.txt").unwrap().read_to_string(&mut a).unwrap();
    assert_eq!(a, "alpha");
    let mut b = String::new();
    zip.by_name("b.txt").unwrap().read_to_string(&mut b).unwrap();
    assert_eq!(b, "beta");
}

#[tokio::test]
async fn test_second_export_includes_first_archive() {
    let (base, _temp) = spawn_app().await;
    let client = reqwest::Client::new();

    client
        .post(format!("{}/api/files", base))
        .json(&json!({"filename": "a.txt", "content": "alpha"}))
        .send()
        .await
        .unwrap();

    let first: Value = client
        .post(format!("{}/api/projects/export", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let first_name = first["downloadUrl"]
        .as_str()
        .unwrap()
        .rsplit('/')
        .nth(1)
        .unwrap()
        .to_string();

    // archive names are millisecond-granular
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    let second: Value = client
        .post(format!("{}/api/projects/export", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let second_url = second["downloadUrl"].as_str().unwrap();

    let bytes = client
        .get(second_url)
        .send()
        .await
        .unwrap()
        .bytes()
        .await
        .unwrap()
        .to_vec();
    let mut zip = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
    let names: Vec<String> = (0..zip.len())
        .map(|i| zip.by_index(i).unwrap().name().to_string())
        .collect();

    assert!(names.contains(&"a.txt".to_string()));
    assert!(names.contains(&first_name));
}

#[tokio::test]
async fn test_status_endpoints() {
    let (base, _temp) = spawn_app().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{}/_status/livez", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = client
        .get(format!("{}/_status/readyz", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = client
        .get(format!("{}/_status/versionz", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_unrouted_path_falls_back_to_not_found() {
    let (base, _temp) = spawn_app().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{}/api/nope", base))
        .header("accept", "application/json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Not found.");
}
