//! Cafe API Handlers

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use rand::seq::IteratorRandom;
use serde::{Deserialize, Serialize};
use shared::models::Cafe;
use shared::util::title_case;

use super::form::CafeFormBody;
use crate::core::ServerState;
use crate::db::repository::{RepoError, cafe};
use crate::utils::{AppError, AppResult, ErrorBody, ErrorCode};

const CAFE_NOT_FOUND: &str = "Sorry a cafe with that id was not found in the database.";
const NO_CAFE_AT_LOCATION: &str = "Sorry, we don't have a cafe at that location.";
const NO_CAFES: &str = "Sorry, there are no cafes in the database yet.";
const CAFE_ADDED: &str = "Successfully added the new cafe.";
const CAFE_DELETED: &str = "Cafe successfully deleted.";

// ── Query strings ──────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub loc: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiKeyQuery {
    pub api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PriceQuery {
    pub new_price: Option<String>,
}

// ── Response bodies ────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct RandomResponse {
    pub cafe: Cafe,
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub cafes: Vec<Cafe>,
}

/// Either the matches or a 200 "not found" body
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SearchResponse {
    Found { cafes_in_the_area: Vec<Cafe> },
    Empty(ErrorBody),
}

#[derive(Debug, Serialize)]
pub struct AddResponse {
    pub response: AddOutcome,
}

#[derive(Debug, Serialize)]
pub struct AddOutcome {
    // the trailing colon is part of the published key
    #[serde(rename = "success:")]
    pub success: &'static str,
}

#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub response: UpdatedCafe,
}

#[derive(Debug, Serialize)]
pub struct UpdatedCafe {
    pub updated_cafe: Cafe,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: &'static str,
}

// ── Handlers ───────────────────────────────────────────────────

/// GET /all
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<ListResponse>> {
    let cafes = cafe::find_all(state.pool()).await?;
    Ok(Json(ListResponse { cafes }))
}

/// GET /random - uniform pick; 404 on an empty directory
pub async fn random(State(state): State<ServerState>) -> AppResult<Json<RandomResponse>> {
    let cafes = cafe::find_all(state.pool()).await?;
    let cafe = pick_random(cafes).ok_or_else(|| AppError::not_found(NO_CAFES))?;
    Ok(Json(RandomResponse { cafe }))
}

/// GET /search?loc= - title-cased exact match
pub async fn search(
    State(state): State<ServerState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> AppResult<Json<SearchResponse>> {
    let loc = query_args(query)?
        .loc
        .ok_or_else(|| AppError::required_field("loc"))?;
    let location = title_case(&loc);

    let cafes = cafe::find_by_location(state.pool(), &location).await?;
    if cafes.is_empty() {
        tracing::debug!(location = %location, "No cafes at location");
        return Ok(Json(SearchResponse::Empty(ErrorBody::new(
            ErrorCode::NotFound.kind(),
            NO_CAFE_AT_LOCATION,
        ))));
    }
    Ok(Json(SearchResponse::Found {
        cafes_in_the_area: cafes,
    }))
}

/// POST /add?api_key= - form body; the key is checked before the form
pub async fn create(
    State(state): State<ServerState>,
    query: Result<Query<ApiKeyQuery>, QueryRejection>,
    form: Result<CafeFormBody, AppError>,
) -> AppResult<Json<AddResponse>> {
    let query = query_args(query)?;
    state.gate.require(query.api_key.as_deref(), "add")?;

    let CafeFormBody(form) = form?;
    let data = form.into_create()?;
    let created = cafe::insert(state.pool(), &data).await?;

    tracing::info!(id = created.id, name = %created.name, "Cafe created");

    Ok(Json(AddResponse {
        response: AddOutcome {
            success: CAFE_ADDED,
        },
    }))
}

/// PATCH /update_price/{cafe_id}?new_price=
pub async fn update_price(
    State(state): State<ServerState>,
    Path(cafe_id): Path<String>,
    query: Result<Query<PriceQuery>, QueryRejection>,
) -> AppResult<Json<UpdateResponse>> {
    let id = parse_cafe_id(&cafe_id)?;
    let query = query_args(query)?;
    let updated = cafe::update_price(state.pool(), id, query.new_price.as_deref())
        .await
        .map_err(missing_cafe)?;

    tracing::info!(id, price = ?updated.coffee_price, "Cafe price updated");

    Ok(Json(UpdateResponse {
        response: UpdatedCafe {
            updated_cafe: updated,
        },
    }))
}

/// DELETE /report-closed/{cafe_id}?api_key= - existence first, then the key
pub async fn delete(
    State(state): State<ServerState>,
    Path(cafe_id): Path<String>,
    query: Result<Query<ApiKeyQuery>, QueryRejection>,
) -> AppResult<Json<DeleteResponse>> {
    let id = parse_cafe_id(&cafe_id)?;
    if cafe::find_by_id(state.pool(), id).await?.is_none() {
        return Err(AppError::not_found(CAFE_NOT_FOUND));
    }

    let query = query_args(query)?;
    state.gate.require(query.api_key.as_deref(), "report-closed")?;

    cafe::delete(state.pool(), id).await.map_err(missing_cafe)?;
    tracing::info!(id, "Cafe deleted");

    Ok(Json(DeleteResponse {
        success: CAFE_DELETED,
    }))
}

// ── Helpers ────────────────────────────────────────────────────

/// Ids are unsigned decimal digits; anything else cannot exist
fn parse_cafe_id(raw: &str) -> AppResult<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::not_found(CAFE_NOT_FOUND));
    }
    raw.parse().map_err(|_| AppError::not_found(CAFE_NOT_FOUND))
}

/// Query string rejections rendered as a JSON validation error
fn query_args<T>(query: Result<Query<T>, QueryRejection>) -> AppResult<T> {
    query
        .map(|Query(args)| args)
        .map_err(|e| AppError::validation(e.body_text()))
}

/// Repository `NotFound` rendered with the public message
fn missing_cafe(err: RepoError) -> AppError {
    match err {
        RepoError::NotFound(_) => AppError::not_found(CAFE_NOT_FOUND),
        other => other.into(),
    }
}

fn pick_random<T>(items: Vec<T>) -> Option<T> {
    items.into_iter().choose(&mut rand::thread_rng())
}
