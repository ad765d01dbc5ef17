// SPDX-License-Identifier: MPL-2.0
//! Tooltips and target resolution shared by target-anchored overlays.

use super::handle::Handle;
use super::manager::Manager;
use super::registry::Instance;
use crate::domain::overlay::{InstanceId, Kind, Placement};
use crate::surface::{NodeId, Surface};
use crate::ui::placement::{place, tooltip_position, tooltip_size};
use std::time::Duration;

/// The host element an overlay attaches to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Node(NodeId),
    /// Resolved with [`Surface::query`] at creation time.
    Selector(String),
}

impl From<NodeId> for Target {
    fn from(node: NodeId) -> Self {
        Target::Node(node)
    }
}

impl From<&str> for Target {
    fn from(selector: &str) -> Self {
        Target::Selector(selector.to_string())
    }
}

impl From<String> for Target {
    fn from(selector: String) -> Self {
        Target::Selector(selector)
    }
}

impl Target {
    /// Finds the attached node this target designates.
    pub fn resolve<S: Surface>(&self, surface: &S) -> Option<NodeId> {
        match self {
            Target::Node(node) => surface.is_attached(*node).then_some(*node),
            Target::Selector(selector) => surface.query(selector),
        }
    }
}

/// Options for [`Manager::tooltip`].
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipOptions {
    pub target: Target,
    pub text: String,
    pub placement: Placement,
    /// Defaults to the manager's tooltip duration.
    pub duration: Option<Duration>,
}

impl TooltipOptions {
    #[must_use]
    pub fn new(target: impl Into<Target>, text: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            text: text.into(),
            placement: Placement::default(),
            duration: None,
        }
    }

    #[must_use]
    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }
}

impl<S: Surface> Manager<S> {
    /// Shows a tooltip next to the target.
    ///
    /// Returns `None` when the target cannot be found.
    pub fn tooltip(&mut self, options: TooltipOptions) -> Option<Handle> {
        let Some(target) = options.target.resolve(&self.surface) else {
            tracing::debug!(target = ?options.target, "tooltip target not found");
            return None;
        };
        let id = InstanceId::generate(Kind::Tooltip.id_prefix());

        let tip = self.surface.create_element("div");
        self.surface.add_class(tip, "eph-tooltip");
        self.surface.set_text(tip, &options.text);
        let body = self.surface.body();
        self.surface.append_child(body, tip);

        let rect = self.surface.bounding_box(target);
        let size = tooltip_size(self.surface.measure(tip));
        let origin = tooltip_position(rect, size, self.surface.viewport(), options.placement);
        place(&mut self.surface, tip, origin, None);

        let instance = Instance::new(id, Kind::Tooltip, tip)
            .with_meta("target", target)
            .with_meta("text", options.text);

        let lifetime = options.duration.unwrap_or(self.settings.tooltip_duration);
        let id = self.register(instance, true, Some(lifetime));
        Some(Handle::new(id, tip))
    }
}
