// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application.

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Auto-dismiss delay applied when a notification does not set one (in milliseconds).
pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 5000;

/// Delay before a new toast switches from its entrance phase to fully visible.
pub const DEFAULT_TOAST_ENTER_DELAY_MS: u64 = 10;

/// Length of the exit phase between a dismiss click and the removal.
pub const DEFAULT_TOAST_EXIT_DELAY_MS: u64 = 150;

/// Upper bound accepted for the animation delays (in milliseconds).
pub const MAX_TOAST_ANIMATION_DELAY_MS: u64 = 2000;

// ==========================================================================
// Showcase Defaults
// ==========================================================================

/// Refresh interval of the showcase while toasts are on screen.
pub const TICK_INTERVAL_MS: u64 = 16;

const _: () = {
    assert!(DEFAULT_TOAST_ENTER_DELAY_MS <= MAX_TOAST_ANIMATION_DELAY_MS);
    assert!(DEFAULT_TOAST_EXIT_DELAY_MS <= MAX_TOAST_ANIMATION_DELAY_MS);
    assert!(DEFAULT_NOTIFICATION_DURATION_MS > DEFAULT_TOAST_EXIT_DELAY_MS);
};
