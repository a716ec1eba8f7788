#![cfg(feature = "ssr")]

use std::{
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use app::api::{load_categories, load_portfolio, load_portfolio_item, load_reviews};
use app::types::MediaType;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use remote_store::{RemoteStore, StoreConfig};
use serde_json::{Value, json};
use tokio::net::TcpListener;

/// Counts every request that reaches the single-item route.
type Hits = Arc<AtomicUsize>;

async fn item(State(hits): State<Hits>, Path(id): Path<String>) -> Result<Json<Value>, StatusCode> {
    hits.fetch_add(1, Ordering::SeqCst);
    match id.as_str() {
        "66a1" => Ok(Json(json!({
            "_id": "66a1",
            "title": "Launch Reel",
            "mainCategory": "motion",
            "subCategory": "promo_video",
            "mediaType": "video",
            "files": ["https://cdn.example.com/reel.mp4"],
            "createdAt": "2024-03-01T10:00:00.000Z"
        }))),
        "broken" => Err(StatusCode::INTERNAL_SERVER_ERROR),
        "nope" => Err(StatusCode::NOT_FOUND),
        other => Ok(Json(json!({"_id": other, "title": "Echo"}))),
    }
}

async fn spawn_store() -> (RemoteStore, Hits) {
    let hits = Hits::default();
    let router = Router::new()
        .route(
            "/portfolio",
            get(|| async {
                Json(json!([
                    {"_id": "a", "title": "Logo Pack", "subCategory": "logo", "createdAt": "2024-01-01"},
                    {"_id": "b", "title": "Banner Set", "subCategory": "banner", "createdAt": "2024-02-01"}
                ]))
            }),
        )
        .route("/portfolio/{id}", get(item))
        .route(
            "/admin/categories",
            get(|| async {
                Json(json!([{"_id": "c1", "mainCategory": "branding", "subCategories": ["logo", "banner"]}]))
            }),
        )
        .route(
            "/reviews",
            get(|| async {
                Json(json!([
                    {"_id": "r1", "name": "Nadia", "photo": "https://cdn.example.com/nadia.jpg", "text": "Sharp work.", "rating": 5},
                    {"_id": "r2", "name": "Sam", "text": "On time.", "rating": 3.6}
                ]))
            }),
        )
        .with_state(hits.clone());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router).await });

    let config = StoreConfig::new(format!("http://{addr}/")).with_timeout(Duration::from_secs(2));
    (RemoteStore::new(config).unwrap(), hits)
}

#[tokio::test]
async fn test_load_portfolio() {
    let (store, _) = spawn_store().await;
    let items = load_portfolio(&store).await.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].title, "Banner Set");
}

#[tokio::test]
async fn test_load_item_found() {
    let (store, _) = spawn_store().await;
    let item = load_portfolio_item(&store, "66a1").await.unwrap().unwrap();
    assert_eq!(item.id, "66a1");
    assert_eq!(item.media_type, MediaType::Video);
    assert_eq!(item.cover(), "https://cdn.example.com/reel.mp4");
}

#[tokio::test]
async fn test_missing_item_is_not_an_error() {
    let (store, hits) = spawn_store().await;
    assert_eq!(load_portfolio_item(&store, "nope").await.unwrap(), None);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_opaque_ids_reach_store_intact() {
    let (store, hits) = spawn_store().await;
    let long = "x".repeat(80);
    let ids = ["logo.pack", "caf\u{e9}-01", "a/b?c", "50%off", "..%2Fadmin", long.as_str()];
    for id in ids {
        let item = load_portfolio_item(&store, id).await.unwrap().unwrap();
        assert_eq!(item.id, id);
    }
    assert_eq!(hits.load(Ordering::SeqCst), ids.len());
}

#[tokio::test]
async fn test_unaddressable_ids_never_reach_store() {
    let (store, hits) = spawn_store().await;
    for id in ["", ".", ".."] {
        assert_eq!(load_portfolio_item(&store, id).await.unwrap(), None);
    }
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_load_reviews() {
    let (store, _) = spawn_store().await;
    let reviews = load_reviews(&store).await.unwrap();
    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0].stars(), 5);
    assert_eq!(reviews[1].stars(), 4);
    assert!(reviews[1].photo.is_empty());
}

#[tokio::test]
async fn test_store_failure_is_an_error() {
    let (store, _) = spawn_store().await;
    assert!(load_portfolio_item(&store, "broken").await.is_err());
}

#[tokio::test]
async fn test_load_categories() {
    let (store, _) = spawn_store().await;
    let categories = load_categories(&store).await.unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].sub_categories, vec!["logo", "banner"]);
}

#[tokio::test]
async fn test_unreachable_store_is_an_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let store = RemoteStore::new(StoreConfig::new(format!("http://{addr}"))).unwrap();
    assert!(load_portfolio(&store).await.is_err());
}
