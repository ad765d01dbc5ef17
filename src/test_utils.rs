// SPDX-License-Identifier: MPL-2.0
//! Shared test helpers.

// Float comparisons
pub use approx::assert_abs_diff_eq;

use crate::surface::{Document, NodeId, Surface};
use iced_core::{Point, Rectangle, Size};

/// Appends a `div` with element id `id` to the body, laid out at `bounds`.
pub fn attach_target(doc: &mut Document, id: &str, bounds: Rectangle) -> NodeId {
    let node = doc.create_element("div");
    doc.set_element_id(node, id);
    let body = doc.body();
    doc.append_child(body, node);
    doc.set_bounds(node, bounds);
    node
}

/// Shorthand for a rectangle from its origin and size.
pub fn rect(x: f32, y: f32, width: f32, height: f32) -> Rectangle {
    Rectangle::new(Point::new(x, y), Size::new(width, height))
}
