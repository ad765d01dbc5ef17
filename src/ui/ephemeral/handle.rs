// SPDX-License-Identifier: MPL-2.0
//! Handles returned by the overlay factories.
//!
//! A handle is plain data (`id` plus root element). Control methods take the
//! manager explicitly; once the instance is gone they become no-ops.

use super::manager::Manager;
use crate::domain::overlay::InstanceId;
use crate::surface::{NodeId, Surface};

/// Identity of a created overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handle {
    id: InstanceId,
    element: NodeId,
}

impl Handle {
    pub(crate) fn new(id: InstanceId, element: NodeId) -> Self {
        Self { id, element }
    }

    #[must_use]
    pub fn id(&self) -> &InstanceId {
        &self.id
    }

    #[must_use]
    pub fn element(&self) -> NodeId {
        self.element
    }

    /// Whether the instance is still registered.
    #[must_use]
    pub fn is_live<S: Surface>(&self, manager: &Manager<S>) -> bool {
        manager.get(&self.id).is_some()
    }

    /// Dismisses the overlay, cancelling its pending lifetime.
    ///
    /// Returns `false` if it was already gone or leaving.
    pub fn remove<S: Surface>(&self, manager: &mut Manager<S>) -> bool {
        manager.dismiss(&self.id)
    }
}

/// Handle to a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastHandle(pub(crate) Handle);

impl ToastHandle {
    #[must_use]
    pub fn id(&self) -> &InstanceId {
        self.0.id()
    }

    #[must_use]
    pub fn element(&self) -> NodeId {
        self.0.element()
    }

    /// Fades the toast out; it is detached once the exit transition ends.
    pub fn remove<S: Surface>(&self, manager: &mut Manager<S>) -> bool {
        self.0.remove(manager)
    }

    /// Replaces the message text in place.
    pub fn update<S: Surface>(&self, manager: &mut Manager<S>, message: &str) -> bool {
        manager.set_toast_message(self.0.id(), message)
    }
}

/// Handle to a progress toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressHandle(pub(crate) Handle);

impl ProgressHandle {
    #[must_use]
    pub fn id(&self) -> &InstanceId {
        self.0.id()
    }

    #[must_use]
    pub fn element(&self) -> NodeId {
        self.0.element()
    }

    /// Sets the percent, clamped to 0–100. Returns the stored value.
    pub fn update<S: Surface>(&self, manager: &mut Manager<S>, percent: f32) -> Option<f32> {
        manager
            .set_progress(self.0.id(), percent)
            .map(|stored| stored.value())
    }

    /// Fades the progress toast out.
    pub fn complete<S: Surface>(&self, manager: &mut Manager<S>) -> bool {
        self.0.remove(manager)
    }

    /// Stored percent, if still live.
    #[must_use]
    pub fn percent<S: Surface>(&self, manager: &Manager<S>) -> Option<f32> {
        manager
            .get(self.0.id())
            .and_then(|instance| instance.meta().get("progress"))
            .and_then(super::registry::MetaValue::as_number)
            .map(|value| value as f32)
    }
}
