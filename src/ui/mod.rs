// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! - [`notifications`] - Notification queue and toast rendering
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod notifications;
pub mod theming;
