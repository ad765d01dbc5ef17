// SPDX-License-Identifier: MPL-2.0
//! Highlights: a pulsing outline over a target.

use super::handle::Handle;
use super::manager::Manager;
use super::registry::Instance;
use super::tooltip::Target;
use crate::domain::overlay::{InstanceId, Kind};
use crate::surface::Surface;
use crate::ui::placement::place;
use std::time::Duration;

/// Options for [`Manager::highlight`].
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightOptions {
    pub target: Target,
    /// Defaults to the manager's highlight duration.
    pub duration: Option<Duration>,
}

impl HighlightOptions {
    #[must_use]
    pub fn new(target: impl Into<Target>) -> Self {
        Self {
            target: target.into(),
            duration: None,
        }
    }

    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }
}

impl<S: Surface> Manager<S> {
    /// Outlines the target. Returns `None` when it cannot be found.
    pub fn highlight(&mut self, options: HighlightOptions) -> Option<Handle> {
        let target = options.target.resolve(&self.surface)?;
        let id = InstanceId::generate(Kind::Highlight.id_prefix());

        let el = self.surface.create_element("div");
        self.surface.add_class(el, "eph-highlight");
        let body = self.surface.body();
        self.surface.append_child(body, el);

        let rect = self.surface.bounding_box(target);
        place(&mut self.surface, el, rect.position(), Some(rect.size()));

        let instance = Instance::new(id, Kind::Highlight, el).with_meta("target", target);
        let lifetime = options.duration.unwrap_or(self.settings.highlight_duration);
        let id = self.register(instance, false, Some(lifetime));
        Some(Handle::new(id, el))
    }
}
