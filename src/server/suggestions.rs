use axum::{
    extract::{Query, State},
    Json,
};
use log::debug;
use serde::Deserialize;

use super::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SuggestionParams {
    #[serde(default)]
    pub prefix: String,
}

/// `GET /api/suggestions?prefix=..`
///
/// The prefix is passed through untouched; the index does its own
/// normalization. No match is an empty array, not an error.
pub async fn suggestions(
    State(state): State<AppState>,
    Query(params): Query<SuggestionParams>,
) -> Json<Vec<String>> {
    let words = state.index.query(&params.prefix);
    debug!(
        "Handling suggestions for {:?}: {} matches",
        params.prefix,
        words.len()
    );
    Json(words)
}
