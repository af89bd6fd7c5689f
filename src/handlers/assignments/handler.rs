//! Assignment handler implementations

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::{
    error::{AppResult, StoreError},
    models::{DeleteResult, Document, Filter, InsertOneResult, UpdateResult},
    state::AppState,
};

use super::{
    request::{AssignmentCountQuery, AssignmentPageQuery},
    response::CountResponse,
};

/// List every assignment
pub async fn list_assignments(State(state): State<AppState>) -> AppResult<Json<Vec<Document>>> {
    let assignments = state.assignments().find_all(&Filter::new()).await?;
    Ok(Json(assignments))
}

/// Get one assignment; `null` when no document has this id
pub async fn get_assignment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Option<Document>>> {
    match state.assignments().find_one(&id).await {
        Ok(assignment) => Ok(Json(Some(assignment))),
        Err(StoreError::NotFound) => Ok(Json(None)),
        Err(e) => Err(e.into()),
    }
}

/// Store the body verbatim as a new assignment
pub async fn create_assignment(
    State(state): State<AppState>,
    Json(payload): Json<Document>,
) -> AppResult<Json<InsertOneResult>> {
    let result = state.assignments().insert_one(payload).await?;
    Ok(Json(result))
}

/// Set the body's fields on the assignment, creating it when absent
pub async fn upsert_assignment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<Document>,
) -> AppResult<Json<UpdateResult>> {
    let result = state.assignments().update_one(&id, payload, true).await?;
    Ok(Json(result))
}

pub async fn delete_assignment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResult>> {
    let result = state.assignments().delete_one(&id).await?;
    Ok(Json(result))
}

/// One page of assignments, optionally restricted to a level
pub async fn list_assignments_page(
    State(state): State<AppState>,
    Query(query): Query<AssignmentPageQuery>,
) -> AppResult<Json<Vec<Document>>> {
    tracing::debug!(size = ?query.size, page = ?query.page, filter = ?query.filter, "Listing assignment page");

    let assignments = state
        .assignments()
        .find_page(&query.level_filter(), query.skip(), query.limit())
        .await?;

    Ok(Json(assignments))
}

/// Number of assignments, optionally restricted to a level
pub async fn count_assignments(
    State(state): State<AppState>,
    Query(query): Query<AssignmentCountQuery>,
) -> AppResult<Json<CountResponse>> {
    let count = state
        .assignments()
        .count_documents(&query.level_filter())
        .await?;

    Ok(Json(CountResponse { count }))
}
