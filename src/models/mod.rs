// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod summary;
pub mod walk;

pub use summary::WalkSummary;
pub use walk::{EventKind, NewEvent, PeePooEvent, RoutePoint, Walk, WalkStatus};
