// SPDX-License-Identifier: MPL-2.0
//! Overlay presentation layer.
//!
//! - [`ephemeral`] - the overlay manager and every overlay kind
//! - [`design_tokens`] - colours, spacing, typography and motion constants
//! - [`stylesheet`] - the shared stylesheet injected into the document
//! - [`placement`] - geometry for tooltips, badges and positioned overlays

pub mod design_tokens;
pub mod ephemeral;
pub mod placement;
pub mod stylesheet;
