// SPDX-License-Identifier: MPL-2.0
//! Stacking containers for notices.

use crate::domain::overlay::Anchor;
use crate::surface::{NodeId, Surface};

/// Element id of the shared root.
pub const ROOT_ID: &str = "eph-root";

/// Class carried by the shared root.
pub const ROOT_CLASS: &str = "eph-container";

/// Returns the shared root, creating it under `body` if needed.
pub fn ensure_root<S: Surface>(surface: &mut S) -> NodeId {
    if let Some(root) = surface.find_by_id(ROOT_ID) {
        return root;
    }
    let root = surface.create_element("div");
    surface.set_element_id(root, ROOT_ID);
    surface.add_class(root, ROOT_CLASS);
    let body = surface.body();
    surface.append_child(body, root);
    root
}

/// Returns the container for `anchor`, creating the root and the container
/// as needed. Repeated calls return the same node.
pub fn ensure_container<S: Surface>(surface: &mut S, anchor: Anchor) -> NodeId {
    let root = ensure_root(surface);
    if let Some(existing) = surface.find_child_with_class(root, anchor.class_name()) {
        return existing;
    }
    let container = surface.create_element("div");
    surface.add_class(container, anchor.class_name());
    surface.append_child(root, container);
    container
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Document;

    #[test]
    fn ensure_container_is_idempotent() {
        let mut doc = Document::new();
        let first = ensure_container(&mut doc, Anchor::Top);
        let second = ensure_container(&mut doc, Anchor::Top);

        assert_eq!(first, second);
        assert_eq!(doc.query_all(".eph-top").len(), 1);
        assert_eq!(doc.query_all("#eph-root").len(), 1);
    }

    #[test]
    fn anchors_share_one_root() {
        let mut doc = Document::new();
        let top = ensure_container(&mut doc, Anchor::Top);
        let bottom = ensure_container(&mut doc, Anchor::Bottom);

        assert_ne!(top, bottom);
        assert_eq!(doc.parent(top), doc.parent(bottom));
        assert_eq!(doc.query_all(".eph-container").len(), 1);
    }

    #[test]
    fn detached_root_is_recreated() {
        let mut doc = Document::new();
        let root = ensure_root(&mut doc);
        doc.detach(root);

        let fresh = ensure_root(&mut doc);
        assert_ne!(root, fresh);
        assert!(doc.is_attached(fresh));
    }
}
