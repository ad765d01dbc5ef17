// SPDX-License-Identifier: MPL-2.0
//! Headless document used by tests, benchmarks and the demo binary.
//!
//! Nodes live in an arena and are never freed; detaching only unlinks them.
//! Geometry is whatever the host declares through [`Document::set_bounds`],
//! and time only moves when the manager drains wakeups.

use super::{NodeId, Surface, WakeupId};
use crate::config::FRAME_INTERVAL_MS;
use iced_core::{Point, Rectangle, Size};
use std::collections::{BTreeMap, HashMap};
use std::fmt::Write as _;
use std::time::Duration;

/// Viewport used by [`Document::new`].
const DEFAULT_VIEWPORT: Size = Size {
    width: 1280.0,
    height: 720.0,
};

#[derive(Debug, Clone, Default)]
struct Node {
    tag: String,
    element_id: Option<String>,
    classes: Vec<String>,
    text: String,
    markup: Option<String>,
    style: BTreeMap<String, String>,
    attributes: BTreeMap<String, String>,
    value: String,
    bounds: Option<Rectangle>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }
}

/// In-memory [`Surface`] with a virtual clock.
///
/// Meant for tests, benchmarks and scripted sessions. Memory grows with every
/// node ever created: ids are never reused, so a handle to a removed overlay
/// can never alias a newer node.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
    head: NodeId,
    body: NodeId,
    viewport: Size,
    clock: Duration,
    next_wakeup: u64,
    /// Pending wakeups ordered by (due, sequence).
    timeline: BTreeMap<(Duration, u64), WakeupId>,
    due_by_id: HashMap<WakeupId, (Duration, u64)>,
    focused: Option<NodeId>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates an empty `html > (head, body)` document with a 1280×720 viewport.
    #[must_use]
    pub fn new() -> Self {
        Self::with_viewport(DEFAULT_VIEWPORT)
    }

    #[must_use]
    pub fn with_viewport(viewport: Size) -> Self {
        let mut doc = Self {
            nodes: vec![Node::new("html")],
            root: NodeId(0),
            head: NodeId(0),
            body: NodeId(0),
            viewport,
            clock: Duration::ZERO,
            next_wakeup: 0,
            timeline: BTreeMap::new(),
            due_by_id: HashMap::new(),
            focused: None,
        };
        doc.head = doc.create_element("head");
        doc.body = doc.create_element("body");
        doc.append_child(doc.root, doc.head);
        doc.append_child(doc.root, doc.body);
        doc
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Declares the laid-out rectangle of `node`.
    pub fn set_bounds(&mut self, node: NodeId, bounds: Rectangle) {
        if let Some(n) = self.nodes.get_mut(node.0) {
            n.bounds = Some(bounds);
        }
    }

    /// Replaces the value of an input, as if the user had typed it.
    pub fn set_value(&mut self, node: NodeId, value: &str) {
        if let Some(n) = self.nodes.get_mut(node.0) {
            n.value = value.to_string();
        }
    }

    #[must_use]
    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node.0).map(|n| n.tag.as_str())
    }

    #[must_use]
    pub fn text(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node.0).map(|n| n.text.as_str())
    }

    #[must_use]
    pub fn markup(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node.0).and_then(|n| n.markup.as_deref())
    }

    #[must_use]
    pub fn classes(&self, node: NodeId) -> &[String] {
        self.nodes
            .get(node.0)
            .map(|n| n.classes.as_slice())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.nodes
            .get(node.0)
            .and_then(|n| n.style.get(property))
            .map(String::as_str)
    }

    /// Reads a `<number>px` or `<number>%` style property as a number.
    #[must_use]
    pub fn style_number(&self, node: NodeId, property: &str) -> Option<f32> {
        let raw = self.style(node, property)?;
        let trimmed = raw.trim_end_matches("px").trim_end_matches('%');
        trimmed.trim().parse().ok()
    }

    #[must_use]
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes
            .get(node.0)
            .and_then(|n| n.attributes.get(name))
            .map(String::as_str)
    }

    #[must_use]
    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Number of wakeups still waiting on the clock.
    #[must_use]
    pub fn pending_wakeups(&self) -> usize {
        self.timeline.len()
    }

    /// Renders the attached tree as indented text.
    #[must_use]
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_node(self.root, 0, &mut out);
        out
    }

    fn dump_node(&self, node: NodeId, depth: usize, out: &mut String) {
        let Some(n) = self.nodes.get(node.0) else {
            return;
        };
        let _ = write!(out, "{:indent$}{}", "", n.tag, indent = depth * 2);
        if let Some(id) = &n.element_id {
            let _ = write!(out, "#{}", id);
        }
        for class in &n.classes {
            let _ = write!(out, ".{}", class);
        }
        if !n.text.is_empty() && n.tag != "style" {
            let _ = write!(out, " {:?}", n.text);
        }
        out.push('\n');
        for child in &n.children {
            self.dump_node(*child, depth + 1, out);
        }
    }

    fn matches(&self, node: NodeId, selector: &str) -> bool {
        let Some(n) = self.nodes.get(node.0) else {
            return false;
        };
        if let Some(id) = selector.strip_prefix('#') {
            n.element_id.as_deref() == Some(id)
        } else if let Some(class) = selector.strip_prefix('.') {
            n.classes.iter().any(|c| c == class)
        } else {
            n.tag == selector
        }
    }

    /// Attached nodes in document order.
    fn walk(&self) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![self.root];
        while let Some(node) = stack.pop() {
            order.push(node);
            if let Some(n) = self.nodes.get(node.0) {
                stack.extend(n.children.iter().rev().copied());
            }
        }
        order
    }

    fn node_mut(&mut self, node: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(node.0)
    }
}

impl Surface for Document {
    fn create_element(&mut self, tag: &str) -> NodeId {
        self.nodes.push(Node::new(tag));
        NodeId(self.nodes.len() - 1)
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if parent == child || self.contains(child, parent) {
            return;
        }
        if parent.0 >= self.nodes.len() || child.0 >= self.nodes.len() {
            return;
        }
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    fn detach(&mut self, node: NodeId) -> bool {
        let Some(parent) = self.nodes.get(node.0).and_then(|n| n.parent) else {
            return false;
        };
        self.nodes[parent.0].children.retain(|c| *c != node);
        self.nodes[node.0].parent = None;
        if self.focused.is_some_and(|f| self.contains(node, f)) {
            self.focused = None;
        }
        true
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.0).and_then(|n| n.parent)
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.nodes
            .get(node.0)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    fn is_attached(&self, node: NodeId) -> bool {
        self.contains(self.root, node)
    }

    fn document_element(&self) -> NodeId {
        self.root
    }

    fn head(&self) -> NodeId {
        self.head
    }

    fn body(&self) -> NodeId {
        self.body
    }

    fn set_element_id(&mut self, node: NodeId, id: &str) {
        if let Some(n) = self.node_mut(node) {
            n.element_id = Some(id.to_string());
        }
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(n) = self.node_mut(node) {
            if !n.classes.iter().any(|c| c == class) {
                n.classes.push(class.to_string());
            }
        }
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(n) = self.node_mut(node) {
            n.classes.retain(|c| c != class);
        }
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes
            .get(node.0)
            .is_some_and(|n| n.classes.iter().any(|c| c == class))
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        if let Some(n) = self.node_mut(node) {
            n.text = text.to_string();
        }
    }

    fn set_markup(&mut self, node: NodeId, markup: &str) {
        if let Some(n) = self.node_mut(node) {
            n.markup = Some(markup.to_string());
        }
    }

    fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
        if let Some(n) = self.node_mut(node) {
            n.style.insert(property.to_string(), value.to_string());
        }
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(n) = self.node_mut(node) {
            n.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn find_by_id(&self, id: &str) -> Option<NodeId> {
        self.walk()
            .into_iter()
            .find(|node| self.nodes[node.0].element_id.as_deref() == Some(id))
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        let parts: Vec<&str> = selector
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();
        self.walk()
            .into_iter()
            .filter(|node| parts.iter().any(|part| self.matches(*node, part)))
            .collect()
    }

    fn bounding_box(&self, node: NodeId) -> Rectangle {
        self.nodes
            .get(node.0)
            .and_then(|n| n.bounds)
            .unwrap_or(Rectangle::new(Point::ORIGIN, Size::ZERO))
    }

    fn measure(&self, node: NodeId) -> Size {
        self.bounding_box(node).size()
    }

    fn viewport(&self) -> Size {
        self.viewport
    }

    fn focus(&mut self, node: NodeId) {
        if self.is_attached(node) {
            self.focused = Some(node);
        }
    }

    fn value(&self, node: NodeId) -> String {
        self.nodes
            .get(node.0)
            .map(|n| n.value.clone())
            .unwrap_or_default()
    }

    fn now(&self) -> Duration {
        self.clock
    }

    fn request_frame(&mut self) -> WakeupId {
        self.schedule(Duration::from_millis(FRAME_INTERVAL_MS))
    }

    fn schedule(&mut self, delay: Duration) -> WakeupId {
        let seq = self.next_wakeup;
        self.next_wakeup += 1;
        let id = WakeupId(seq);
        let key = (self.clock.saturating_add(delay), seq);
        self.timeline.insert(key, id);
        self.due_by_id.insert(id, key);
        id
    }

    fn cancel(&mut self, wakeup: WakeupId) {
        if let Some(key) = self.due_by_id.remove(&wakeup) {
            self.timeline.remove(&key);
        }
    }

    fn next_wakeup(&mut self, deadline: Duration) -> Option<WakeupId> {
        let due = self
            .timeline
            .first_key_value()
            .map(|(key, _)| *key)
            .filter(|(due, _)| *due <= deadline);

        match due {
            Some(key) => {
                let id = self.timeline.remove(&key)?;
                self.due_by_id.remove(&id);
                self.clock = self.clock.max(key.0);
                Some(id)
            }
            None => {
                self.clock = self.clock.max(deadline);
                None
            }
        }
    }
}
