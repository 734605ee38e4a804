// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Walk Tracker: live dog-walk tracking with shareable codes
//!
//! A walker records a walk's GPS route and pee/poo events; an owner follows
//! along (or reviews afterwards) using the walk's six-character code. All
//! state is held in memory for the lifetime of the process.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::WalkStore;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: WalkStore,
}
