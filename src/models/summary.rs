// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Walk summary for the owner view.
//!
//! Derived on read from a walk snapshot; nothing here is stored.

use crate::models::walk::{EventKind, RoutePoint, Walk, WalkStatus};
use geo::{Distance, Haversine, Point};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Counts, distance and duration of a walk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WalkSummary {
    pub code: String,
    pub status: WalkStatus,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub started_at: i64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number | null"))]
    pub ended_at: Option<i64>,
    pub route_points: usize,
    pub pee_count: usize,
    pub poo_count: usize,
    /// Haversine length of the route in arrival order
    pub distance_meters: f64,
    /// Elapsed server time; runs up to `now` while the walk is active
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub duration_ms: i64,
}

impl WalkSummary {
    /// Summarize a walk as of `now` (epoch milliseconds).
    pub fn from_walk(walk: &Walk, now: i64) -> Self {
        let end = walk.ended_at.unwrap_or(now);
        Self {
            code: walk.code.clone(),
            status: walk.status,
            started_at: walk.started_at,
            ended_at: walk.ended_at,
            route_points: walk.route.len(),
            pee_count: walk.count_events(EventKind::Pee),
            poo_count: walk.count_events(EventKind::Poo),
            distance_meters: route_distance_meters(&walk.route),
            duration_ms: (end - walk.started_at).max(0),
        }
    }
}

/// Sum of great-circle distances between consecutive points.
pub fn route_distance_meters(route: &[RoutePoint]) -> f64 {
    route
        .windows(2)
        .map(|pair| {
            let a = Point::new(pair[0].lng, pair[0].lat);
            let b = Point::new(pair[1].lng, pair[1].lat);
            Haversine.distance(a, b)
        })
        .sum()
}
