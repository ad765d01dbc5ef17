// SPDX-License-Identifier: MPL-2.0
//! Positioning math for target-anchored overlays.
//!
//! All coordinates are viewport pixels. Nothing here touches a surface, so
//! the results can be checked directly.

use crate::config::{
    BADGE_INSET_X_PX, BADGE_LIFT_Y_PX, FALLBACK_TOOLTIP_HEIGHT_PX, FALLBACK_TOOLTIP_WIDTH_PX,
    TOOLTIP_GAP_PX, VIEWPORT_MARGIN_PX,
};
use crate::domain::overlay::Placement;
use crate::surface::{NodeId, Surface};
use iced_core::{Point, Rectangle, Size};

/// Substitutes the fallback tooltip size for unmeasured dimensions.
#[must_use]
pub fn tooltip_size(measured: Size) -> Size {
    let width = if measured.width > 0.0 {
        measured.width
    } else {
        FALLBACK_TOOLTIP_WIDTH_PX
    };
    let height = if measured.height > 0.0 {
        measured.height
    } else {
        FALLBACK_TOOLTIP_HEIGHT_PX
    };
    Size::new(width, height)
}

/// Top-left corner of a tooltip of size `tip` attached to `target`.
///
/// Horizontally the tip is centred on the target and kept at least
/// [`VIEWPORT_MARGIN_PX`] away from the viewport's left and right edges.
/// Vertically it sits [`TOOLTIP_GAP_PX`] above the target for
/// [`Placement::Top`], below it for [`Placement::Bottom`], and centred on it
/// for [`Placement::Middle`].
#[must_use]
pub fn tooltip_position(target: Rectangle, tip: Size, viewport: Size, placement: Placement) -> Point {
    let centred = target.x + target.width / 2.0 - tip.width / 2.0;
    // left margin wins when the tip is wider than the viewport
    let x = centred
        .min(viewport.width - tip.width - VIEWPORT_MARGIN_PX)
        .max(VIEWPORT_MARGIN_PX);

    let y = match placement {
        Placement::Top => target.y - tip.height - TOOLTIP_GAP_PX,
        Placement::Middle => target.y + target.height / 2.0 - tip.height / 2.0,
        Placement::Bottom => target.y + target.height + TOOLTIP_GAP_PX,
    };

    Point::new(x, y)
}

/// Top-left corner of a badge pinned to the target's top-right corner.
#[must_use]
pub fn badge_position(target: Rectangle) -> Point {
    Point::new(
        target.x + target.width - BADGE_INSET_X_PX,
        target.y - BADGE_LIFT_Y_PX,
    )
}

/// Writes `left`/`top` (and optionally `width`/`height`) as pixel styles.
pub(crate) fn place<S: Surface>(
    surface: &mut S,
    node: NodeId,
    origin: Point,
    size: Option<Size>,
) {
    surface.set_style(node, "left", &format!("{}px", origin.x));
    surface.set_style(node, "top", &format!("{}px", origin.y));
    if let Some(size) = size {
        surface.set_style(node, "width", &format!("{}px", size.width));
        surface.set_style(node, "height", &format!("{}px", size.height));
    }
}
