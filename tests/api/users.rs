use std::collections::HashSet;

use quote_keeper::UserStore;
use serde_json::json;

use crate::support::{body, start};

#[tokio::test]
async fn track_view_counts_up() {
    let (base, _) = start().await;
    let client = reqwest::Client::new();

    for expected in 1..=3 {
        let resp = client
            .post(format!("{base}/api/track-view"))
            .json(&json!({ "userId": "u1" }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(body(resp).await, json!({ "success": true, "viewCount": expected }));
    }

    let resp = client.get(format!("{base}/api/stats/u1")).send().await.unwrap();
    assert_eq!(
        body(resp).await,
        json!({ "success": true, "viewCount": 3, "favoritesCount": 0 })
    );
}

#[tokio::test]
async fn track_view_missing_user_is_400() {
    let (base, _) = start().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/api/track-view"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    assert_eq!(body(resp).await, json!({ "error": "Missing userId" }));
}

#[tokio::test]
async fn stats_of_unknown_user_are_zero_and_not_stored() {
    let (base, service) = start().await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/api/stats/ghost")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        body(resp).await,
        json!({ "success": true, "viewCount": 0, "favoritesCount": 0 })
    );
    assert_eq!(service.store().len().unwrap(), 0);
}

#[tokio::test]
async fn create_user_session() {
    let (base, service) = start().await;
    let client = reqwest::Client::new();

    let resp = client.post(format!("{base}/api/users")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let body = body(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "User session created");

    let user_id = body["userId"].as_str().unwrap();
    assert!(user_id.starts_with("user_"));
    assert!(service.store().contains(user_id).unwrap());
}

#[tokio::test]
async fn concurrent_sessions_do_not_collide() {
    let (base, service) = start().await;
    let client = reqwest::Client::new();

    let requests = (0..20).map(|_| {
        let client = client.clone();
        let url = format!("{base}/api/users");
        async move {
            let resp = client.post(url).send().await.unwrap();
            body(resp).await["userId"].as_str().unwrap().to_string()
        }
    });
    let ids: Vec<String> = futures_join_all(requests).await;

    let unique: HashSet<&String> = ids.iter().collect();
    assert_eq!(unique.len(), 20);
    assert_eq!(service.store().len().unwrap(), 20);
}

async fn futures_join_all<F>(futures: impl Iterator<Item = F>) -> Vec<String>
where
    F: std::future::Future<Output = String> + Send + 'static,
{
    let handles: Vec<_> = futures.map(tokio::spawn).collect();
    let mut ids = Vec::with_capacity(handles.len());
    for handle in handles {
        ids.push(handle.await.unwrap());
    }
    ids
}

#[tokio::test]
async fn favorites_and_views_show_in_stats() {
    let (base, _) = start().await;
    let client = reqwest::Client::new();

    let resp = client.post(format!("{base}/api/users")).send().await.unwrap();
    let user_id = body(resp).await["userId"].as_str().unwrap().to_string();

    client
        .post(format!("{base}/api/favorites"))
        .json(&json!({
            "userId": user_id,
            "quote": { "text": "t", "author": "a", "category": "life" },
        }))
        .send()
        .await
        .unwrap();
    client
        .post(format!("{base}/api/track-view"))
        .json(&json!({ "userId": user_id }))
        .send()
        .await
        .unwrap();

    let resp = client
        .get(format!("{base}/api/stats/{user_id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(
        body(resp).await,
        json!({ "success": true, "viewCount": 1, "favoritesCount": 1 })
    );
}

#[tokio::test]
async fn undecodable_path_is_json_400() {
    let (base, service) = start().await;
    let client = reqwest::Client::new();

    for path in ["/api/stats/%FF", "/api/favorites/%FF", "/api/favorites/%FF/0"] {
        let request = if path.ends_with("/0") {
            client.delete(format!("{base}{path}"))
        } else {
            client.get(format!("{base}{path}"))
        };
        let resp = request.send().await.unwrap();
        assert_eq!(resp.status(), 400, "{path}");

        let payload = body(resp).await;
        assert!(payload["error"].is_string(), "{path}");
    }
    assert!(service.store().is_empty().unwrap());
}
