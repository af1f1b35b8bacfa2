//! City search handler

use axum::{Json, extract::Query};
use serde::{Deserialize, Serialize};
use weather_core::{LocationEntry, search_locations};

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LocationsResponse {
    pub success: bool,
    pub locations: Vec<LocationEntry>,
}

/// Filter the supported cities by name
pub async fn search(Query(params): Query<SearchParams>) -> Json<LocationsResponse> {
    let query = params.q.unwrap_or_default();

    Json(LocationsResponse {
        success: true,
        locations: search_locations(&query),
    })
}
