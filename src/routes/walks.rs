// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Walk routes used by the walker and owner pages.

use crate::error::{AppError, Result};
use crate::models::{NewEvent, RoutePoint, Walk, WalkStatus, WalkSummary};
use crate::services::code::is_well_formed;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Walk routes. No authentication: the share code is the only handle.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/walks", post(create_walk))
        .route("/api/walks/{code}", get(get_walk).patch(update_walk))
        .route("/api/walks/{code}/summary", get(get_walk_summary))
}

// ─── Create ──────────────────────────────────────────────────

/// Response for a new walk. Only the share code is exposed.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CreateWalkResponse {
    pub code: String,
}

/// Start a new walk.
async fn create_walk(
    State(state): State<Arc<AppState>>,
) -> Result<(StatusCode, Json<CreateWalkResponse>)> {
    let walk = state.store.create_walk()?;
    Ok((
        StatusCode::CREATED,
        Json(CreateWalkResponse { code: walk.code }),
    ))
}

// ─── Read ────────────────────────────────────────────────────

/// Full walk record for the owner view.
async fn get_walk(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Json<Walk>> {
    if !is_well_formed(&code) {
        tracing::debug!(code = %code, "Lookup with malformed walk code");
    }
    Ok(Json(state.store.get_walk(&code)?))
}

/// Counts, distance and duration.
async fn get_walk_summary(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Json<WalkSummary>> {
    Ok(Json(state.store.summarize_walk(&code)?))
}

// ─── Update ──────────────────────────────────────────────────

/// PATCH body. Exactly one field must be present.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct UpdateWalkRequest {
    #[serde(default)]
    pub route_point: Option<RoutePoint>,
    #[serde(default)]
    pub event: Option<NewEvent>,
    #[serde(default)]
    pub status: Option<WalkStatus>,
}

/// A single validated update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WalkUpdate {
    AppendPoint(RoutePoint),
    AddEvent(NewEvent),
    End,
}

impl TryFrom<UpdateWalkRequest> for WalkUpdate {
    type Error = AppError;

    fn try_from(req: UpdateWalkRequest) -> Result<Self> {
        match (req.route_point, req.event, req.status) {
            (Some(point), None, None) => Ok(WalkUpdate::AppendPoint(point)),
            (None, Some(event), None) => Ok(WalkUpdate::AddEvent(event)),
            (None, None, Some(WalkStatus::Completed)) => Ok(WalkUpdate::End),
            (None, None, Some(WalkStatus::Active)) => Err(AppError::BadRequest(
                "status can only be set to \"completed\"".to_string(),
            )),
            (None, None, None) => Err(AppError::BadRequest(
                "Expected one of routePoint, event or status".to_string(),
            )),
            _ => Err(AppError::BadRequest(
                "Only one of routePoint, event or status may be given".to_string(),
            )),
        }
    }
}

/// Append a route point, record an event, or end the walk.
async fn update_walk(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
    body: std::result::Result<Json<UpdateWalkRequest>, JsonRejection>,
) -> Result<Json<Walk>> {
    let Json(req) = body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let update = WalkUpdate::try_from(req)?;

    let result = match update {
        WalkUpdate::AppendPoint(point) => state.store.append_route_point(&code, point),
        WalkUpdate::AddEvent(event) => state.store.add_event(&code, event),
        WalkUpdate::End => state.store.end_walk(&code),
    };

    let walk = result.inspect_err(|err| {
        tracing::debug!(code = %code, update = ?update, error = %err, "Walk update rejected");
    })?;

    Ok(Json(walk))
}
