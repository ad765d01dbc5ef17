// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! This module contains pure value objects and rules for ephemeral overlays.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`overlay`]: Overlay identity and classification ([`InstanceId`](overlay::InstanceId),
//!   [`Kind`](overlay::Kind), [`Tone`](overlay::Tone), [`Anchor`](overlay::Anchor),
//!   [`Placement`](overlay::Placement))
//! - [`ui`]: UI value objects ([`ProgressPercent`](ui::newtypes::ProgressPercent),
//!   [`Lifetime`](ui::newtypes::Lifetime))

pub mod overlay;
pub mod ui;
