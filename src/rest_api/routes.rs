//! # Route Dispatcher
//!
//! Binds method+path pairs to handlers: translate the request, invoke the
//! store, map the outcome to a response. Stateless across requests; the only
//! shared state is the injected store handle.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use serde_json::Value;

use crate::graph::{EntityKind, GraphStore, KeySpec};

use super::errors::ApiResult;
use super::translate::{self, FindParams};

/// Shared handler state
type StoreHandle = Arc<dyn GraphStore>;

/// Build the CRUD router over an injected store
pub fn router(store: StoreHandle) -> Router {
    Router::new()
        .route("/movie", get(find_movies).post(create_movie))
        .route("/movie/{id}", put(update_movie).delete(delete_movie))
        .route("/genre", get(find_genres).post(create_genre))
        .route("/genre/{name}", put(update_genre).delete(delete_genre))
        .with_state(store)
}

// ==================
// Shared handler bodies
// ==================

async fn find_entities(
    store: &StoreHandle,
    kind: EntityKind,
    params: FindParams,
) -> ApiResult<Json<Vec<Value>>> {
    let (filter, options) = translate::find_spec(kind, &params);
    let entities = store.find(kind, &filter, &options).await?;
    Ok(Json(entities))
}

async fn create_entity(
    store: &StoreHandle,
    kind: EntityKind,
    body: Value,
) -> ApiResult<Json<Value>> {
    let payload = translate::entity_payload(kind, &body)?;
    let result = store.create(kind, vec![payload]).await?;
    let entity = result.created.into_iter().next().unwrap_or(Value::Null);
    Ok(Json(entity))
}

async fn update_entity(
    store: &StoreHandle,
    kind: EntityKind,
    key_value: String,
    body: Value,
) -> ApiResult<Response> {
    let payload = translate::entity_payload(kind, &body)?;
    let key = KeySpec::for_kind(kind, key_value);
    let result = store.update(kind, &key, payload).await?;

    Ok(match result.updated.into_iter().next() {
        Some(entity) => Json(entity).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    })
}

async fn delete_entity(
    store: &StoreHandle,
    kind: EntityKind,
    key_value: String,
) -> ApiResult<StatusCode> {
    let key = KeySpec::for_kind(kind, key_value);
    let result = store.delete(kind, &key).await?;

    Ok(if result.nodes_deleted == 0 {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    })
}

// ==================
// Movie Handlers
// ==================

async fn find_movies(
    State(store): State<StoreHandle>,
    Query(params): Query<FindParams>,
) -> ApiResult<Json<Vec<Value>>> {
    find_entities(&store, EntityKind::Movie, params).await
}

async fn create_movie(
    State(store): State<StoreHandle>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Value>> {
    create_entity(&store, EntityKind::Movie, body).await
}

async fn update_movie(
    State(store): State<StoreHandle>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult<Response> {
    update_entity(&store, EntityKind::Movie, id, body).await
}

async fn delete_movie(
    State(store): State<StoreHandle>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    delete_entity(&store, EntityKind::Movie, id).await
}

// ==================
// Genre Handlers
// ==================

async fn find_genres(
    State(store): State<StoreHandle>,
    Query(params): Query<FindParams>,
) -> ApiResult<Json<Vec<Value>>> {
    find_entities(&store, EntityKind::Genre, params).await
}

async fn create_genre(
    State(store): State<StoreHandle>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Value>> {
    create_entity(&store, EntityKind::Genre, body).await
}

async fn update_genre(
    State(store): State<StoreHandle>,
    Path(name): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult<Response> {
    update_entity(&store, EntityKind::Genre, name, body).await
}

async fn delete_genre(
    State(store): State<StoreHandle>,
    Path(name): Path<String>,
) -> ApiResult<StatusCode> {
    delete_entity(&store, EntityKind::Genre, name).await
}
