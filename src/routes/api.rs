// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity-log API routes.

use crate::error::Result;
use crate::models::NormalizedActivity;
use crate::services::normalizer;
use crate::AppState;
use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/activity/normalize", post(normalize_activity))
}

/// Normalized activity list.
#[derive(Serialize, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivitiesResponse {
    pub activities: Vec<NormalizedActivity>,
    /// Number of activities returned
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub total: usize,
}

/// Normalize a raw activity-log response body.
///
/// Items that are incomplete or not yet supported are left out of the result.
async fn normalize_activity(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Json<ActivitiesResponse>> {
    let activities = normalizer::from_api_with(&body, state.config.normalizer_options())?;

    tracing::debug!(
        total = activities.len(),
        actor_defaults = ?state.config.actor_defaults,
        "Normalized activity log"
    );

    Ok(Json(ActivitiesResponse {
        total: activities.len(),
        activities,
    }))
}
