use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::catalog::Quote;
use crate::error::QuoteError;
use crate::service::QuoteService;
use crate::store::UserStore;

type Service<S> = State<Arc<QuoteService<S>>>;
type ApiResult = Result<Json<Value>, QuoteError>;

#[derive(Debug, Deserialize)]
pub(super) struct CategoryQuery {
    category: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct AddFavoriteBody {
    user_id: Option<String>,
    quote: Option<Quote>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct TrackViewBody {
    user_id: Option<String>,
}

/// `GET /api/quote?category=`
pub(super) async fn random_quote<S: UserStore + 'static>(
    State(service): Service<S>,
    query: Result<Query<CategoryQuery>, QueryRejection>,
) -> ApiResult {
    let Query(query) = query?;
    let quote = service.random_quote(query.category.as_deref())?;
    Ok(Json(json!({ "success": true, "quote": quote })))
}

/// `GET /api/quotes?category=`
pub(super) async fn list_quotes<S: UserStore + 'static>(
    State(service): Service<S>,
    query: Result<Query<CategoryQuery>, QueryRejection>,
) -> ApiResult {
    let Query(query) = query?;
    let quotes = service.list_quotes(query.category.as_deref());
    Ok(Json(json!({
        "success": true,
        "count": quotes.len(),
        "quotes": quotes,
    })))
}

/// `POST /api/favorites`
pub(super) async fn add_favorite<S: UserStore + 'static>(
    State(service): Service<S>,
    payload: Result<Json<AddFavoriteBody>, JsonRejection>,
) -> ApiResult {
    let Json(body) = payload?;
    let count = service.add_favorite(body.user_id.as_deref(), body.quote)?;
    Ok(Json(json!({
        "success": true,
        "message": "Quote added to favorites",
        "favoritesCount": count,
    })))
}

/// `GET /api/favorites/:userId`
pub(super) async fn favorites<S: UserStore + 'static>(
    State(service): Service<S>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult {
    let Path(user_id) = path?;
    let favorites = service.favorites(&user_id)?;
    Ok(Json(json!({
        "success": true,
        "count": favorites.len(),
        "favorites": favorites,
    })))
}

/// `DELETE /api/favorites/:userId/:quoteIndex`
pub(super) async fn remove_favorite<S: UserStore + 'static>(
    State(service): Service<S>,
    path: Result<Path<(String, String)>, PathRejection>,
) -> ApiResult {
    let Path((user_id, quote_index)) = path?;
    let count = service.remove_favorite(&user_id, &quote_index)?;
    Ok(Json(json!({
        "success": true,
        "message": "Quote removed from favorites",
        "favoritesCount": count,
    })))
}

/// `POST /api/track-view`
pub(super) async fn track_view<S: UserStore + 'static>(
    State(service): Service<S>,
    payload: Result<Json<TrackViewBody>, JsonRejection>,
) -> ApiResult {
    let Json(body) = payload?;
    let views = service.track_view(body.user_id.as_deref())?;
    Ok(Json(json!({ "success": true, "viewCount": views })))
}

/// `GET /api/stats/:userId`
pub(super) async fn stats<S: UserStore + 'static>(
    State(service): Service<S>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult {
    let Path(user_id) = path?;
    let stats = service.stats(&user_id)?;
    Ok(Json(json!({
        "success": true,
        "viewCount": stats.view_count,
        "favoritesCount": stats.favorites_count,
    })))
}

/// `GET /api/categories`
pub(super) async fn categories<S: UserStore + 'static>(State(service): Service<S>) -> ApiResult {
    Ok(Json(json!({
        "success": true,
        "categories": service.categories(),
    })))
}

/// `POST /api/users`
pub(super) async fn create_user<S: UserStore + 'static>(State(service): Service<S>) -> ApiResult {
    let user_id = service.create_user()?;
    Ok(Json(json!({
        "success": true,
        "userId": user_id,
        "message": "User session created",
    })))
}

/// `GET /api/health`
pub(super) async fn health() -> Json<Value> {
    Json(json!({
        "success": true,
        "message": "Server is running",
        "timestamp": Utc::now(),
    }))
}

pub(super) async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}
