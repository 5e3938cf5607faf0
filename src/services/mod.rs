// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod normalizer;

pub use normalizer::{
    from_api, from_api_with, process_item, validate_item, ActorDefaults, NormalizeError,
    NormalizerOptions,
};
