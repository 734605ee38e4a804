// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Storage layer (in-memory walk registry).

pub mod walk_store;

pub use walk_store::{StoreError, WalkStore};
