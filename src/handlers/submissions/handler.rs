//! Submission handler implementations

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    constants::{statuses, EMAIL_FIELD, STATUS_FIELD},
    error::AppResult,
    models::{Document, Filter, FilterExt, InsertOneResult, UpdateResult},
    state::AppState,
};

/// List every submission
pub async fn list_submissions(State(state): State<AppState>) -> AppResult<Json<Vec<Document>>> {
    let submissions = state.submissions().find_all(&Filter::new()).await?;
    Ok(Json(submissions))
}

/// Store the body verbatim as a new submission
pub async fn create_submission(
    State(state): State<AppState>,
    Json(payload): Json<Document>,
) -> AppResult<Json<InsertOneResult>> {
    let result = state.submissions().insert_one(payload).await?;
    Ok(Json(result))
}

/// Submissions owned by `email`
pub async fn list_submissions_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<Vec<Document>>> {
    let submissions = state
        .submissions()
        .find_all(&Filter::field_eq(EMAIL_FIELD, email))
        .await?;
    Ok(Json(submissions))
}

/// Submissions still waiting to be marked
pub async fn list_pending_submissions(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Document>>> {
    let submissions = state
        .submissions()
        .find_all(&Filter::field_eq(STATUS_FIELD, statuses::PENDING))
        .await?;
    Ok(Json(submissions))
}

/// Set the body's fields on an existing submission
pub async fn update_submission(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<Document>,
) -> AppResult<Json<UpdateResult>> {
    let result = state.submissions().update_one(&id, payload, false).await?;
    Ok(Json(result))
}
