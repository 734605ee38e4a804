// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory walk registry.
//!
//! Walks are keyed by their normalized share code and live for the lifetime
//! of the process. Each walk is mutated under its DashMap shard write lock,
//! so appends to one walk are serialized in arrival order and ending a walk
//! is atomic with respect to concurrent appends.
//!
//! Every read returns an owned snapshot. Callers never hold a reference into
//! the map, and later mutations are not visible through a returned `Walk`.

use crate::models::{NewEvent, RoutePoint, Walk, WalkSummary};
use crate::services::code::{normalize_code, CodeError, CodeGenerator};
use crate::time_utils::{format_millis_rfc3339, now_millis};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;

/// Why a store operation was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Walk {0} not found")]
    NotFound(String),

    #[error("Walk {0} is not active")]
    NotActive(String),

    #[error("Failed to generate walk code")]
    CodeGeneration,
}

impl From<CodeError> for StoreError {
    fn from(_: CodeError) -> Self {
        StoreError::CodeGeneration
    }
}

/// Process-wide registry of walks.
///
/// Cloning is cheap and clones share the same registry.
#[derive(Clone, Default)]
pub struct WalkStore {
    walks: Arc<DashMap<String, Walk>>,
    codes: CodeGenerator,
}

impl WalkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of walks ever created in this process.
    pub fn len(&self) -> usize {
        self.walks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walks.is_empty()
    }

    /// Start a new active walk under a fresh, unused code.
    pub fn create_walk(&self) -> Result<Walk, StoreError> {
        loop {
            let code = self.codes.generate()?;
            // Vacancy check and insert happen under one shard lock.
            match self.walks.entry(code) {
                Entry::Occupied(taken) => {
                    tracing::debug!(code = %taken.key(), "Walk code collision, retrying");
                }
                Entry::Vacant(slot) => {
                    let walk = Walk::new(slot.key().clone(), now_millis());
                    let snapshot = walk.clone();
                    slot.insert(walk);
                    tracing::info!(
                        code = %snapshot.code,
                        walk_id = %snapshot.id,
                        total_walks = self.walks.len(),
                        "Walk created"
                    );
                    return Ok(snapshot);
                }
            }
        }
    }

    /// Look up a walk by code, in any case.
    pub fn get_walk(&self, code: &str) -> Result<Walk, StoreError> {
        let code = normalize_code(code);
        self.walks
            .get(&code)
            .map(|walk| walk.value().clone())
            .ok_or(StoreError::NotFound(code))
    }

    /// Append a GPS sample to an active walk.
    pub fn append_route_point(&self, code: &str, point: RoutePoint) -> Result<Walk, StoreError> {
        self.mutate_active(code, |walk| {
            walk.push_point(point);
            tracing::debug!(
                code = %walk.code,
                points = walk.route.len(),
                "Route point appended"
            );
        })
    }

    /// Record a pee or poo on an active walk.
    pub fn add_event(&self, code: &str, input: NewEvent) -> Result<Walk, StoreError> {
        self.mutate_active(code, |walk| {
            let event = walk.push_event(input);
            tracing::info!(
                walk_id = %event.walk_id,
                event_id = %event.id,
                kind = ?event.kind,
                "Event recorded"
            );
        })
    }

    /// End an active walk. A second call on the same walk is rejected.
    pub fn end_walk(&self, code: &str) -> Result<Walk, StoreError> {
        self.mutate_active(code, |walk| {
            walk.complete(now_millis());
            tracing::info!(
                code = %walk.code,
                points = walk.route.len(),
                events = walk.events.len(),
                ended_at = ?walk.ended_at.and_then(format_millis_rfc3339),
                "Walk ended"
            );
        })
    }

    /// Derived counts, distance and duration for a walk.
    pub fn summarize_walk(&self, code: &str) -> Result<WalkSummary, StoreError> {
        let walk = self.get_walk(code)?;
        Ok(WalkSummary::from_walk(&walk, now_millis()))
    }

    /// Apply `f` to an active walk while holding its write lock and return
    /// the resulting snapshot. Unknown and completed walks are left untouched.
    fn mutate_active<F>(&self, code: &str, f: F) -> Result<Walk, StoreError>
    where
        F: FnOnce(&mut Walk),
    {
        let code = normalize_code(code);
        let mut walk = self
            .walks
            .get_mut(&code)
            .ok_or_else(|| StoreError::NotFound(code.clone()))?;

        if !walk.is_active() {
            return Err(StoreError::NotActive(code));
        }

        f(walk.value_mut());
        Ok(walk.value().clone())
    }
}
