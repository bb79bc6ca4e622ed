use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use data_loader::Movie;
use pipeline::{Lookup, Suggestion};

use crate::error::{AppError, AppResult};
use crate::orchestrator::MovieRecommendation;
use crate::pages::{self, RecommendInput};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct RecommendPageParams {
    pub title: Option<String>,
    pub count: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct SuggestParams {
    pub q: String,
    pub limit: Option<usize>,
    pub min_score: Option<u8>,
}

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub query: String,
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendParams {
    pub title: String,
    pub count: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub title: String,
    pub recommendations: Vec<MovieRecommendation>,
}

// Pages

pub async fn home() -> Html<String> {
    Html(pages::render_home())
}

pub async fn about(State(state): State<AppState>) -> Html<String> {
    Html(pages::render_about(&state.orchestrator))
}

pub async fn recommend_page(
    State(state): State<AppState>,
    Query(params): Query<RecommendPageParams>,
) -> Html<String> {
    let input = RecommendInput {
        title: params.title,
        count: params.count,
    };
    let view = pages::recommend_view(&state.orchestrator, &state.config, &input);
    Html(pages::render_recommend(&view))
}

// JSON API

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// The whole catalog, in catalog order
pub async fn list_movies(State(state): State<AppState>) -> Json<Vec<Movie>> {
    Json(state.orchestrator.catalog().movies().to_vec())
}

pub async fn suggest(
    State(state): State<AppState>,
    Query(params): Query<SuggestParams>,
) -> AppResult<Json<SuggestResponse>> {
    let limit = params.limit.unwrap_or(state.config.suggest_limit);
    let min_score = params.min_score.unwrap_or(state.config.suggest_min_score);
    if min_score > 100 {
        return Err(AppError::InvalidInput(format!(
            "min_score must be between 0 and 100, got {min_score}"
        )));
    }

    let suggestions = state.orchestrator.get_suggestions(&params.q, limit, min_score);
    debug!("{} suggestions for '{}'", suggestions.len(), params.q);

    Ok(Json(SuggestResponse {
        query: params.q,
        suggestions,
    }))
}

pub async fn recommend(
    State(state): State<AppState>,
    Query(params): Query<RecommendParams>,
) -> AppResult<Json<RecommendResponse>> {
    let count = params.count.unwrap_or(state.config.default_count);
    if count == 0 || count > state.config.max_count {
        return Err(AppError::InvalidInput(format!(
            "count must be between 1 and {}, got {}",
            state.config.max_count, count
        )));
    }

    match state.orchestrator.get_recommendations(&params.title, count) {
        Lookup::Found(recommendations) => Ok(Json(RecommendResponse {
            title: params.title,
            recommendations,
        })),
        Lookup::NotFound => Err(AppError::NotFound(format!(
            "Movie '{}' not found",
            params.title
        ))),
    }
}
