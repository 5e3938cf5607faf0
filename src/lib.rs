// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity log: normalize activity-log API responses for display.
//!
//! The core is [`services::normalizer`], a pure pipeline from a decoded
//! activity-log response to [`models::NormalizedActivity`] records. The
//! binary exposes it over HTTP for the rendering layer.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;

/// Shared application state.
pub struct AppState {
    pub config: Config,
}
