// SPDX-License-Identifier: MPL-2.0
//! Registry of live overlay instances.
//!
//! The registry and the surface are always edited together by the manager:
//! an entry leaves the map in the same step its element leaves the tree.

use crate::domain::overlay::{InstanceId, Kind};
use crate::surface::{NodeId, WakeupId};
use rand::Rng;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Length of the random part of a generated id.
const SUFFIX_LEN: usize = 6;

const SUFFIX_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

impl InstanceId {
    /// Generates `{prefix}-{base36 now_ms}-{6 random base36 chars}`.
    #[must_use]
    pub fn generate(prefix: &str) -> Self {
        let now_ms = u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or_default();
        Self::generate_with(prefix, now_ms, &mut rand::rng())
    }

    /// Same as [`InstanceId::generate`] with an explicit clock and source.
    pub fn generate_with<R: Rng + ?Sized>(prefix: &str, timestamp_ms: u64, rng: &mut R) -> Self {
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| char::from(SUFFIX_ALPHABET[rng.random_range(0..SUFFIX_ALPHABET.len())]))
            .collect();
        Self::compose(prefix, timestamp_ms, &suffix)
    }
}

// =============================================================================
// Metadata
// =============================================================================

/// A single observable field of an instance.
#[derive(Debug, Clone, PartialEq)]
pub enum MetaValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Node(NodeId),
    List(Vec<String>),
}

impl MetaValue {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MetaValue::Text(text) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            MetaValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            MetaValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_node(&self) -> Option<NodeId> {
        match self {
            MetaValue::Node(node) => Some(*node),
            _ => None,
        }
    }
}

impl From<&str> for MetaValue {
    fn from(value: &str) -> Self {
        MetaValue::Text(value.to_string())
    }
}

impl From<String> for MetaValue {
    fn from(value: String) -> Self {
        MetaValue::Text(value)
    }
}

impl From<f64> for MetaValue {
    fn from(value: f64) -> Self {
        MetaValue::Number(value)
    }
}

impl From<f32> for MetaValue {
    fn from(value: f32) -> Self {
        MetaValue::Number(f64::from(value))
    }
}

impl From<bool> for MetaValue {
    fn from(value: bool) -> Self {
        MetaValue::Bool(value)
    }
}

impl From<NodeId> for MetaValue {
    fn from(value: NodeId) -> Self {
        MetaValue::Node(value)
    }
}

impl From<Vec<String>> for MetaValue {
    fn from(value: Vec<String>) -> Self {
        MetaValue::List(value)
    }
}

/// Kind-specific observable fields, keyed by name.
pub type Meta = BTreeMap<String, MetaValue>;

// =============================================================================
// Instance
// =============================================================================

/// A callback run once by user interaction.
pub type Callback = Box<dyn FnOnce()>;

/// A callback receiving submitted text.
pub type SubmitCallback = Box<dyn FnOnce(String)>;

/// Child nodes the manager edits after creation.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Parts {
    /// Message or label node.
    pub text: Option<NodeId>,
    /// Progress bar.
    pub bar: Option<NodeId>,
    /// Text input.
    pub input: Option<NodeId>,
}

/// User callbacks owned by an instance.
#[derive(Default)]
pub(crate) enum Hooks {
    #[default]
    None,
    Action(Option<Callback>),
    Menu(Vec<Option<Callback>>),
    QuickInput {
        on_submit: Option<SubmitCallback>,
        on_cancel: Option<Callback>,
    },
}

/// A registered overlay.
pub struct Instance {
    id: InstanceId,
    kind: Kind,
    element: NodeId,
    meta: Meta,
    /// Auto-dismiss wakeup; cancelling it is how early removal stops expiry.
    pub(crate) timer: Option<WakeupId>,
    /// Every other wakeup owned by this instance.
    pub(crate) wakeups: Vec<WakeupId>,
    /// Exit transition started; the element is detached when it ends.
    pub(crate) leaving: bool,
    pub(crate) parts: Parts,
    pub(crate) hooks: Hooks,
}

impl Instance {
    pub(crate) fn new(id: InstanceId, kind: Kind, element: NodeId) -> Self {
        Self {
            id,
            kind,
            element,
            meta: Meta::new(),
            timer: None,
            wakeups: Vec::new(),
            leaving: false,
            parts: Parts::default(),
            hooks: Hooks::None,
        }
    }

    pub(crate) fn with_meta(mut self, key: &str, value: impl Into<MetaValue>) -> Self {
        self.meta.insert(key.to_string(), value.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> &InstanceId {
        &self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Root node of the instance.
    #[must_use]
    pub fn element(&self) -> NodeId {
        self.element
    }

    #[must_use]
    pub fn meta(&self) -> &Meta {
        &self.meta
    }

    pub(crate) fn meta_mut(&mut self) -> &mut Meta {
        &mut self.meta
    }

    /// Whether the exit transition is running.
    #[must_use]
    pub fn is_leaving(&self) -> bool {
        self.leaving
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("element", &self.element)
            .field("meta", &self.meta)
            .field("leaving", &self.leaving)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Registry
// =============================================================================

/// Map from id to live instance.
#[derive(Debug, Default)]
pub struct Registry {
    entries: HashMap<InstanceId, Instance>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `instance` under its own id, replacing any previous entry.
    pub fn insert(&mut self, instance: Instance) -> InstanceId {
        let id = instance.id.clone();
        self.entries.insert(id.clone(), instance);
        id
    }

    /// Removes an entry. Unknown ids are ignored.
    pub fn remove(&mut self, id: &InstanceId) -> Option<Instance> {
        self.entries.remove(id)
    }

    #[must_use]
    pub fn get(&self, id: &InstanceId) -> Option<&Instance> {
        self.entries.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: &InstanceId) -> Option<&mut Instance> {
        self.entries.get_mut(id)
    }

    #[must_use]
    pub fn contains(&self, id: &InstanceId) -> bool {
        self.entries.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of the current ids.
    #[must_use]
    pub fn ids(&self) -> Vec<InstanceId> {
        self.entries.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Instance> {
        self.entries.values()
    }

    /// Number of live instances of `kind`.
    #[must_use]
    pub fn count_of(&self, kind: Kind) -> usize {
        self.entries.values().filter(|i| i.kind == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn instance(raw: &str) -> Instance {
        Instance::new(InstanceId::from(raw), Kind::Toast, NodeId(1))
    }

    #[test]
    fn generated_ids_have_expected_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let id = InstanceId::generate_with("toast", 36, &mut rng);
        let parts: Vec<&str> = id.as_str().split('-').collect();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "toast");
        assert_eq!(parts[1], "10");
        assert_eq!(parts[2].len(), SUFFIX_LEN);
        assert!(parts[2]
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn generate_uses_kind_prefix() {
        let id = InstanceId::generate(Kind::QuickInput.id_prefix());
        assert_eq!(id.prefix(), "qinput");
    }

    #[test]
    fn consecutive_ids_differ() {
        let a = InstanceId::generate("toast");
        let b = InstanceId::generate("toast");
        assert_ne!(a, b);
    }

    #[test]
    fn insert_overwrites_and_returns_id() {
        let mut registry = Registry::new();
        let id = registry.insert(instance("toast-1-aaaaaa"));
        registry.insert(instance("toast-1-aaaaaa").with_meta("message", "second"));

        assert_eq!(id.as_str(), "toast-1-aaaaaa");
        assert_eq!(registry.len(), 1);
        let stored = registry.get(&id).expect("entry should exist");
        assert_eq!(
            stored.meta().get("message").and_then(MetaValue::as_text),
            Some("second")
        );
    }

    #[test]
    fn remove_is_idempotent() {
        let mut registry = Registry::new();
        let id = registry.insert(instance("toast-1-bbbbbb"));

        assert!(registry.remove(&id).is_some());
        assert!(registry.remove(&id).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn get_unknown_id_is_none() {
        let registry = Registry::new();
        assert!(registry.get(&InstanceId::from("nope")).is_none());
    }

    #[test]
    fn meta_value_conversions() {
        assert_eq!(MetaValue::from(2.5_f32).as_number(), Some(2.5));
        assert_eq!(MetaValue::from(true).as_bool(), Some(true));
        assert_eq!(MetaValue::from(NodeId(3)).as_node(), Some(NodeId(3)));
        assert_eq!(MetaValue::from("x").as_number(), None);
    }
}
