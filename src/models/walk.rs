// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Walk model: one tracked dog-walking session.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Lifecycle state of a walk. Moves once from `Active` to `Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum WalkStatus {
    Active,
    Completed,
}

/// Kind of marked event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum EventKind {
    Pee,
    Poo,
}

/// A single GPS sample as reported by the walker's device.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RoutePoint {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
    /// Client clock, epoch milliseconds
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub timestamp: i64,
}

/// Event fields supplied by the walker. The store fills in `id` and `walk_id`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct NewEvent {
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub lat: f64,
    pub lng: f64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub timestamp: i64,
}

/// A pee or poo marked during a walk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PeePooEvent {
    pub id: String,
    /// Id of the owning walk
    pub walk_id: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub lat: f64,
    pub lng: f64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub timestamp: i64,
}

/// Walk record as held by the store and returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Walk {
    /// Opaque unique id (UUID v4)
    pub id: String,
    /// Six-character share code, uppercase
    pub code: String,
    pub status: WalkStatus,
    /// Server clock at creation, epoch milliseconds
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub started_at: i64,
    /// Server clock when the walk ended; `None` while active
    #[cfg_attr(feature = "binding-generation", ts(type = "number | null"))]
    pub ended_at: Option<i64>,
    /// GPS samples in arrival order
    pub route: Vec<RoutePoint>,
    /// Marked events in arrival order
    pub events: Vec<PeePooEvent>,
}

impl Walk {
    /// Start a new active walk with an empty route.
    pub fn new(code: String, started_at: i64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            code,
            status: WalkStatus::Active,
            started_at,
            ended_at: None,
            route: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == WalkStatus::Active
    }

    /// Append a route point. Caller must have checked `is_active`.
    pub(crate) fn push_point(&mut self, point: RoutePoint) {
        self.route.push(point);
    }

    /// Record an event, assigning its id and back-reference.
    /// Caller must have checked `is_active`.
    pub(crate) fn push_event(&mut self, input: NewEvent) -> &PeePooEvent {
        self.events.push(PeePooEvent {
            id: uuid::Uuid::new_v4().to_string(),
            walk_id: self.id.clone(),
            kind: input.kind,
            lat: input.lat,
            lng: input.lng,
            timestamp: input.timestamp,
        });
        &self.events[self.events.len() - 1]
    }

    /// Mark the walk completed. Caller must have checked `is_active`.
    pub(crate) fn complete(&mut self, ended_at: i64) {
        self.status = WalkStatus::Completed;
        self.ended_at = Some(ended_at);
    }

    /// Number of events of the given kind.
    pub fn count_events(&self, kind: EventKind) -> usize {
        self.events.iter().filter(|e| e.kind == kind).count()
    }
}
