// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber setup for the showcase binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the binary.

use tracing_subscriber::EnvFilter;

/// Filter used when neither `--log-level` nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "info";

/// Picks the filter directive: explicit level, then `RUST_LOG`, then [`DEFAULT_FILTER`].
#[must_use]
pub fn resolve_filter(level: Option<&str>) -> EnvFilter {
    match level {
        Some(level) => EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    }
}

/// Installs the global fmt subscriber. Returns `false` if one was already set.
pub fn init(level: Option<&str>) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(resolve_filter(level))
        .with_target(false)
        .try_init()
        .is_ok()
}
