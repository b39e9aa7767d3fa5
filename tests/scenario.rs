mod common;

use serde_json::json;

/// Walks through the documented request sequence against a fresh registry.
#[tokio::test]
async fn test_end_to_end_scenario() {
    let server = common::create_test_server();

    let response = server
        .post("/api/shorturl")
        .form(&[("url", "https://www.freecodecamp.org")])
        .await;
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "original_url": "https://www.freecodecamp.org", "short_url": 1 })
    );

    let response = server
        .post("/api/shorturl")
        .form(&[("url", "https://www.freecodecamp.org")])
        .await;
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "original_url": "https://www.freecodecamp.org", "short_url": 1 })
    );

    let response = server
        .post("/api/shorturl")
        .form(&[("url", "https://www.example.com")])
        .await;
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "original_url": "https://www.example.com", "short_url": 2 })
    );

    let response = server.get("/api/shorturl/1").await;
    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://www.freecodecamp.org");

    let response = server.get("/api/shorturl/9999").await;
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "error": "No short URL found for the given input" })
    );

    let response = server
        .post("/api/shorturl")
        .form(&[("url", "ftp://example.com")])
        .await;
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "error": "invalid url" })
    );

    let response = server
        .post("/api/shorturl")
        .form(&[("url", "not a url")])
        .await;
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "error": "invalid url" })
    );
}

#[tokio::test]
async fn test_concurrent_submissions_get_distinct_gapless_ids() {
    let state = common::create_test_state();
    let service = state.short_url_service.clone();

    let mut handles = Vec::new();
    for i in 0..20 {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            let url = format!("https://host{}.example.com", i % 10);
            service.shorten(Some(&url)).await.unwrap().id
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap());
    }
    ids.sort_unstable();
    ids.dedup();

    assert_eq!(ids, (1..=10).collect::<Vec<i64>>());
    assert_eq!(service.registered_count().await, 10);
}
