// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Appearance**: Accent colour
//! - **Lifetimes**: How long each overlay kind stays on screen
//! - **Transitions**: Exit delays and deferred-work delays
//! - **Geometry**: Margins and offsets used when anchoring to a target

// ==========================================================================
// Appearance Defaults
// ==========================================================================

/// Default accent colour, as written to `--eph-accent`.
pub const DEFAULT_ACCENT_HEX: &str = "#3b82f6";

// ==========================================================================
// Lifetime Defaults
// ==========================================================================

/// Default toast lifetime, also the global default duration (in milliseconds).
pub const DEFAULT_DURATION_MS: u64 = 2400;

/// Shortest accepted configured lifetime (in milliseconds).
pub const MIN_DURATION_MS: u64 = crate::domain::ui::newtypes::lifetime_bounds::MIN_MS;

/// Longest accepted configured lifetime (in milliseconds).
pub const MAX_DURATION_MS: u64 = crate::domain::ui::newtypes::lifetime_bounds::MAX_MS;

/// Default snackbar lifetime (in milliseconds).
pub const DEFAULT_SNACKBAR_DURATION_MS: u64 = 4000;

/// Default tooltip lifetime (in milliseconds).
pub const DEFAULT_TOOLTIP_DURATION_MS: u64 = 1800;

/// Default badge lifetime (in milliseconds).
pub const DEFAULT_BADGE_DURATION_MS: u64 = 2000;

/// Default highlight lifetime (in milliseconds).
pub const DEFAULT_HIGHLIGHT_DURATION_MS: u64 = 900;

/// Default banner lifetime. Zero keeps the banner until it is dismissed.
pub const DEFAULT_BANNER_DURATION_MS: u64 = 0;

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Delay between removing `show` from a toast and detaching it (in milliseconds).
pub const TOAST_EXIT_MS: u64 = 260;

/// Delay between removing `show` from a modal and detaching it (in milliseconds).
pub const MODAL_EXIT_MS: u64 = 200;

/// Delay before a context menu starts listening for outside pointer-down.
///
/// Keeps the pointer-down that opened the menu from closing it again.
pub const OUTSIDE_CLICK_ARM_MS: u64 = 10;

/// Delay before the prompt input receives focus (in milliseconds).
pub const PROMPT_FOCUS_MS: u64 = 30;

/// Length of one animation frame (in milliseconds).
pub const FRAME_INTERVAL_MS: u64 = 16;

// ==========================================================================
// Geometry Defaults
// ==========================================================================

/// Gap between a tooltip and its target (in pixels).
pub const TOOLTIP_GAP_PX: f32 = 8.0;

/// Minimum distance kept between a tooltip and the viewport edges (in pixels).
pub const VIEWPORT_MARGIN_PX: f32 = 8.0;

/// Tooltip size assumed when the surface cannot measure it yet.
pub const FALLBACK_TOOLTIP_WIDTH_PX: f32 = 120.0;

/// Tooltip height assumed when the surface cannot measure it yet.
pub const FALLBACK_TOOLTIP_HEIGHT_PX: f32 = 30.0;

/// Horizontal inset of a badge from the target's right edge (in pixels).
pub const BADGE_INSET_X_PX: f32 = 14.0;

/// Vertical lift of a badge above the target's top edge (in pixels).
pub const BADGE_LIFT_Y_PX: f32 = 6.0;
