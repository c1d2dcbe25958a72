use crate::http::tests::test_server;
use serde_json::Value;

#[tokio::test]
async fn test_openapi_document_info() {
    let server = test_server();

    let response = server.get("/openapi.json").await;

    response.assert_status_ok();
    let document = response.json::<Value>();
    assert_eq!(document["info"]["title"], "Flow Puzzle API");
    assert_eq!(
        document["info"]["description"],
        "Backend API for Flow Puzzle Game"
    );
    assert_eq!(document["info"]["version"], "1.0.0");
}

#[tokio::test]
async fn test_openapi_document_paths() {
    let server = test_server();

    let response = server.get("/openapi.json").await;

    let document = response.json::<Value>();
    let paths = document["paths"]
        .as_object()
        .expect("Document has no paths.");
    let mut names = paths.keys().map(String::as_str).collect::<Vec<_>>();
    names.sort_unstable();
    assert_eq!(names, ["/", "/api/test", "/health"]);
    for path in names {
        assert!(paths[path]["get"]["responses"]["200"].is_object());
    }
}

#[tokio::test]
async fn test_openapi_health_schema() {
    let server = test_server();

    let document = server.get("/openapi.json").await.json::<Value>();

    let status = &document["components"]["schemas"]["HealthStatus"];
    assert_eq!(status["enum"], serde_json::json!(["healthy"]));
}
