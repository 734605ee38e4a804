// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Concurrency tests: concurrent creation, appends and ending.

use std::collections::HashSet;
use walk_tracker::db::{StoreError, WalkStore};
use walk_tracker::models::RoutePoint;

const NUM_TASKS: i64 = 16;
const POINTS_PER_TASK: i64 = 50;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creation_yields_unique_codes() {
    let store = WalkStore::new();

    let mut handles = vec![];
    for _ in 0..NUM_TASKS {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            (0..POINTS_PER_TASK)
                .map(|_| store.create_walk().expect("create failed").code)
                .collect::<Vec<_>>()
        }));
    }

    let mut codes = HashSet::new();
    for handle in handles {
        for code in handle.await.expect("Task join failed") {
            assert!(codes.insert(code), "duplicate code handed out");
        }
    }

    assert_eq!(codes.len(), (NUM_TASKS * POINTS_PER_TASK) as usize);
    assert_eq!(store.len(), codes.len());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_appends_are_not_lost() {
    let store = WalkStore::new();
    let code = store.create_walk().unwrap().code;

    let mut handles = vec![];
    for task in 0..NUM_TASKS {
        let store = store.clone();
        let code = code.clone();
        handles.push(tokio::spawn(async move {
            for i in 0..POINTS_PER_TASK {
                let point = RoutePoint {
                    lat: task as f64,
                    lng: i as f64,
                    timestamp: task * 1_000 + i,
                };
                store
                    .append_route_point(&code, point)
                    .expect("append failed");
            }
        }));
    }

    for handle in handles {
        handle.await.expect("Task join failed");
    }

    let route = store.get_walk(&code).unwrap().route;
    assert_eq!(route.len(), (NUM_TASKS * POINTS_PER_TASK) as usize);

    // Each task's own points stay in the order that task sent them.
    for task in 0..NUM_TASKS {
        let mine: Vec<i64> = route
            .iter()
            .filter(|p| p.lat == task as f64)
            .map(|p| p.timestamp)
            .collect();
        let expected: Vec<i64> = (0..POINTS_PER_TASK).map(|i| task * 1_000 + i).collect();
        assert_eq!(mine, expected);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_end_races_with_appends() {
    let store = WalkStore::new();
    let code = store.create_walk().unwrap().code;

    let mut handles = vec![];
    for task in 0..NUM_TASKS {
        let store = store.clone();
        let code = code.clone();
        handles.push(tokio::spawn(async move {
            let mut accepted = 0usize;
            for i in 0..POINTS_PER_TASK {
                let point = RoutePoint {
                    lat: 0.0,
                    lng: 0.0,
                    timestamp: task * 1_000 + i,
                };
                match store.append_route_point(&code, point) {
                    Ok(_) => accepted += 1,
                    Err(StoreError::NotActive(_)) => {}
                    Err(err) => panic!("unexpected error: {}", err),
                }
                tokio::task::yield_now().await;
            }
            accepted
        }));
    }

    tokio::task::yield_now().await;
    let ended = store.end_walk(&code).expect("end failed");

    let mut accepted = 0;
    for handle in handles {
        accepted += handle.await.expect("Task join failed");
    }

    // Everything accepted before the end is kept; nothing after it is.
    let walk = store.get_walk(&code).unwrap();
    assert_eq!(walk.route.len(), accepted);
    assert_eq!(walk.route, ended.route);
    assert_eq!(walk.ended_at, ended.ended_at);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_end_succeeds_exactly_once() {
    let store = WalkStore::new();
    let code = store.create_walk().unwrap().code;

    let mut handles = vec![];
    for _ in 0..NUM_TASKS {
        let store = store.clone();
        let code = code.clone();
        handles.push(tokio::spawn(async move { store.end_walk(&code).is_ok() }));
    }

    let mut successes = 0;
    for handle in handles {
        if handle.await.expect("Task join failed") {
            successes += 1;
        }
    }

    assert_eq!(successes, 1);
}
