// SPDX-License-Identifier: MPL-2.0
//! Overlay identity and classification.

mod id;
mod kind;

pub use id::{to_base36, InstanceId};
pub use kind::{Anchor, Kind, Placement, Tone};
