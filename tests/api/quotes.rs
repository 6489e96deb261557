use std::collections::HashSet;

use quote_keeper::{Catalog, UserStore};
use serde_json::json;

use crate::support::{body, mandela, service_with, start, start_server};

#[tokio::test]
async fn random_quote_in_single_quote_category() {
    let (base, _) = start().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/api/quote?category=courage"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body = body(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["quote"], serde_json::to_value(mandela()).unwrap());
}

#[tokio::test]
async fn random_quote_unknown_category_is_404() {
    let (base, _) = start().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/api/quote?category=nonexistent"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let body = body(resp).await;
    assert_eq!(body, json!({ "error": "No quotes found for this category" }));
}

#[tokio::test]
async fn random_quote_stays_in_filtered_pool() {
    let (base, _) = start().await;
    let client = reqwest::Client::new();

    for _ in 0..10 {
        let resp = client
            .get(format!("{base}/api/quote?category=life"))
            .send()
            .await
            .unwrap();
        let body = body(resp).await;
        assert_eq!(body["quote"]["category"], "life");
    }
}

#[tokio::test]
async fn random_quote_all_and_missing_filter() {
    let (base, _) = start().await;
    let client = reqwest::Client::new();

    for url in [format!("{base}/api/quote"), format!("{base}/api/quote?category=all")] {
        let resp = client.get(url).send().await.unwrap();
        assert_eq!(resp.status(), 200);
    }
}

#[tokio::test]
async fn empty_catalog_is_404() {
    let base = start_server(service_with(Catalog::from_quotes(Vec::new()))).await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/api/quote")).send().await.unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn quote_retrieval_does_not_track_views() {
    let (base, service) = start().await;
    let client = reqwest::Client::new();

    client.get(format!("{base}/api/quote")).send().await.unwrap();
    assert!(service.store().is_empty().unwrap());
}

#[tokio::test]
async fn list_quotes() {
    let (base, _) = start().await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/api/quotes")).send().await.unwrap();
    let all = body(resp).await;
    assert_eq!(all["success"], true);
    assert_eq!(all["count"], 4);

    let resp = client
        .get(format!("{base}/api/quotes?category=life"))
        .send()
        .await
        .unwrap();
    let life = body(resp).await;
    assert_eq!(life["count"], 2);
    let authors: Vec<&str> = life["quotes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["author"].as_str().unwrap())
        .collect();
    assert_eq!(authors, vec!["John Lennon", "Will Rogers"]);
}

#[tokio::test]
async fn list_quotes_unknown_category_is_empty_not_404() {
    let (base, _) = start().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/api/quotes?category=nonexistent"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(body(resp).await, json!({ "success": true, "count": 0, "quotes": [] }));
}

#[tokio::test]
async fn categories_are_distinct() {
    let (base, _) = start().await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/api/categories")).send().await.unwrap();
    let body = body(resp).await;
    assert_eq!(body["success"], true);

    let categories: HashSet<&str> = body["categories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c.as_str().unwrap())
        .collect();
    assert_eq!(categories, HashSet::from(["life", "courage", "success"]));
    assert_eq!(body["categories"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn health_check() {
    let (base, _) = start().await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/api/health")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let body = body(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Server is running");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn unknown_route_is_404_json() {
    let (base, _) = start().await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/api/nope")).send().await.unwrap();
    assert_eq!(resp.status(), 404);
    assert!(body(resp).await["error"].is_string());
}

#[tokio::test]
async fn rejected_query_string_is_json_400() {
    let (base, _) = start().await;
    let client = reqwest::Client::new();

    for path in ["/api/quote", "/api/quotes"] {
        let resp = client
            .get(format!("{base}{path}?category=life&category=wisdom"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400);
        assert_eq!(
            resp.headers()["content-type"].to_str().unwrap(),
            "application/json"
        );

        let payload = body(resp).await;
        assert!(payload["error"].as_str().unwrap().contains("duplicate field"));
    }
}
