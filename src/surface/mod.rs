// SPDX-License-Identifier: MPL-2.0
//! Render surface abstraction.
//!
//! Overlays never talk to a concrete document. Everything they need (node
//! creation, tree edits, geometry, focus and deferred work) goes through the
//! [`Surface`] trait so the lifecycle logic stays testable without a real
//! renderer. [`Document`] is the headless implementation shipped with the
//! crate; it keeps a node arena and a virtual clock.
//!
//! # Scheduling
//!
//! Deferred work is expressed as wakeup tokens. The surface hands out a
//! [`WakeupId`] for every frame request or timer, and later reports it back
//! through [`Surface::next_wakeup`] once its due time has been reached. The
//! surface never runs overlay code itself; the manager owns the meaning of
//! each token.

mod document;

pub use document::Document;

use iced_core::{Rectangle, Size};
use std::time::Duration;

/// Handle to a node owned by a [`Surface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Returns the raw arena index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Token for a pending frame callback or timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WakeupId(pub(crate) u64);

/// Keys the overlays react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    Character(String),
}

/// Capabilities an overlay manager needs from the host document.
pub trait Surface {
    // ---------------------------------------------------------------------
    // Tree
    // ---------------------------------------------------------------------

    /// Creates a detached element.
    fn create_element(&mut self, tag: &str) -> NodeId;

    /// Appends `child` to `parent`, moving it if it already has a parent.
    fn append_child(&mut self, parent: NodeId, child: NodeId);

    /// Detaches `node` from its parent.
    ///
    /// Returns `false` when the node had no parent. Never fails.
    fn detach(&mut self, node: NodeId) -> bool;

    fn parent(&self, node: NodeId) -> Option<NodeId>;

    fn children(&self, node: NodeId) -> Vec<NodeId>;

    /// Returns whether `node` is reachable from the document element.
    fn is_attached(&self, node: NodeId) -> bool;

    fn document_element(&self) -> NodeId;

    fn head(&self) -> NodeId;

    fn body(&self) -> NodeId;

    // ---------------------------------------------------------------------
    // Attributes
    // ---------------------------------------------------------------------

    fn set_element_id(&mut self, node: NodeId, id: &str);

    fn add_class(&mut self, node: NodeId, class: &str);

    fn remove_class(&mut self, node: NodeId, class: &str);

    fn has_class(&self, node: NodeId, class: &str) -> bool;

    /// Replaces the text content of `node`.
    fn set_text(&mut self, node: NodeId, text: &str);

    /// Replaces the inner markup of `node`.
    fn set_markup(&mut self, node: NodeId, markup: &str);

    fn set_style(&mut self, node: NodeId, property: &str, value: &str);

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str);

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    /// Finds an attached element by its `id` attribute.
    fn find_by_id(&self, id: &str) -> Option<NodeId>;

    /// Returns attached nodes matching a simple selector list
    /// (`#id`, `.class` or `tag`, comma separated), in document order.
    fn query_all(&self, selector: &str) -> Vec<NodeId>;

    fn query(&self, selector: &str) -> Option<NodeId> {
        self.query_all(selector).into_iter().next()
    }

    /// Returns whether `node` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(candidate) = current {
            if candidate == ancestor {
                return true;
            }
            current = self.parent(candidate);
        }
        false
    }

    fn find_child_with_class(&self, parent: NodeId, class: &str) -> Option<NodeId> {
        self.children(parent)
            .into_iter()
            .find(|child| self.has_class(*child, class))
    }

    // ---------------------------------------------------------------------
    // Geometry
    // ---------------------------------------------------------------------

    /// Returns the node's rectangle in viewport coordinates.
    fn bounding_box(&self, node: NodeId) -> Rectangle;

    /// Returns the node's rendered size; zero when not laid out yet.
    fn measure(&self, node: NodeId) -> Size;

    fn viewport(&self) -> Size;

    // ---------------------------------------------------------------------
    // Input
    // ---------------------------------------------------------------------

    fn focus(&mut self, node: NodeId);

    /// Returns the current value of an input element.
    fn value(&self, node: NodeId) -> String;

    // ---------------------------------------------------------------------
    // Scheduling
    // ---------------------------------------------------------------------

    /// Current time on the surface clock.
    fn now(&self) -> Duration;

    /// Requests a wakeup on the next animation frame.
    fn request_frame(&mut self) -> WakeupId;

    /// Requests a wakeup after `delay`.
    fn schedule(&mut self, delay: Duration) -> WakeupId;

    /// Cancels a pending wakeup. Unknown tokens are ignored.
    fn cancel(&mut self, wakeup: WakeupId);

    /// Pops the earliest wakeup due at or before `deadline`, moving the
    /// clock to its due time. When none is due, moves the clock to
    /// `deadline` and returns `None`.
    fn next_wakeup(&mut self, deadline: Duration) -> Option<WakeupId>;
}
