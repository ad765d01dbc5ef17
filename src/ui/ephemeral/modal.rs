// SPDX-License-Identifier: MPL-2.0
//! Modal dialogs: the base modal and alert/confirm/prompt built on it.
//!
//! Modals are not registry instances. They are tracked separately until they
//! resolve, and each one settles its [`Pending`] exactly once:
//!
//! | Trigger                          | `base_modal`          | alert/confirm | prompt          |
//! |----------------------------------|-----------------------|---------------|-----------------|
//! | footer button                    | `Ok(value)`           | truthy value  | input if truthy |
//! | header close                     | `Cancelled`           | `false`       | `None`          |
//! | backdrop (when `overlay_close`)  | `Dismissed`           | `false`       | `None`          |
//! | swept by `dismiss_all`           | `Dismissed`           | `false`       | `None`          |

use super::manager::{Binding, Manager, ModalState, Scheduled};
use super::pending::{ButtonValue, ModalResult, Pending, Resolver};
use crate::config::PROMPT_FOCUS_MS;
use crate::domain::overlay::InstanceId;
use crate::surface::{NodeId, Surface};
use std::time::Duration;
use tokio::sync::oneshot;

/// Prefix of modal ids.
const MODAL_ID_PREFIX: &str = "modal";

/// Body of a modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalContent {
    Markup(String),
    /// A caller-built node, moved into the body.
    Node(NodeId),
}

impl Default for ModalContent {
    fn default() -> Self {
        ModalContent::Markup(String::new())
    }
}

/// A footer button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalButton {
    pub text: String,
    pub value: ButtonValue,
    pub primary: bool,
}

impl ModalButton {
    #[must_use]
    pub fn new(text: impl Into<String>, value: impl Into<ButtonValue>) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
            primary: false,
        }
    }

    #[must_use]
    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }
}

/// Options for [`Manager::base_modal`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalOptions {
    /// Empty means no header.
    pub title: String,
    pub content: ModalContent,
    /// Empty means no footer.
    pub buttons: Vec<ModalButton>,
    /// Clicking the backdrop itself dismisses the modal.
    pub overlay_close: bool,
    /// Adds a close button to the header.
    pub closable: bool,
}

impl Default for ModalOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: ModalContent::default(),
            buttons: Vec::new(),
            overlay_close: false,
            closable: true,
        }
    }
}

impl ModalOptions {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn markup(mut self, markup: impl Into<String>) -> Self {
        self.content = ModalContent::Markup(markup.into());
        self
    }

    #[must_use]
    pub fn content_node(mut self, node: NodeId) -> Self {
        self.content = ModalContent::Node(node);
        self
    }

    #[must_use]
    pub fn button(mut self, button: ModalButton) -> Self {
        self.buttons.push(button);
        self
    }

    #[must_use]
    pub fn overlay_close(mut self, enabled: bool) -> Self {
        self.overlay_close = enabled;
        self
    }

    #[must_use]
    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }
}

/// Options for [`Manager::alert`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertOptions {
    pub title: Option<String>,
    pub text: String,
}

impl AlertOptions {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            title: None,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Options for [`Manager::confirm`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfirmOptions {
    pub title: Option<String>,
    pub text: Option<String>,
    pub ok_text: Option<String>,
    pub cancel_text: Option<String>,
}

impl ConfirmOptions {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn ok_text(mut self, text: impl Into<String>) -> Self {
        self.ok_text = Some(text.into());
        self
    }

    #[must_use]
    pub fn cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = Some(text.into());
        self
    }
}

/// Options for [`Manager::prompt`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptOptions {
    pub title: Option<String>,
    pub text: String,
    pub placeholder: String,
    pub ok_text: Option<String>,
    pub cancel_text: Option<String>,
}

impl PromptOptions {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    #[must_use]
    pub fn ok_text(mut self, text: impl Into<String>) -> Self {
        self.ok_text = Some(text.into());
        self
    }

    #[must_use]
    pub fn cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = Some(text.into());
        self
    }
}

impl<S: Surface> Manager<S> {
    /// Opens a modal and returns its eventual result.
    pub fn base_modal(&mut self, options: ModalOptions) -> Pending<ModalResult> {
        let (tx, rx) = oneshot::channel();
        self.open_modal(options, Resolver::Raw(tx));
        Pending::new(rx)
    }

    /// Opens an alert with a single OK button. Resolves `true` on OK.
    pub fn alert(&mut self, options: AlertOptions) -> Pending<bool> {
        let title = options
            .title
            .unwrap_or_else(|| self.labels.alert_title.clone());
        let modal = ModalOptions::new(title)
            .markup(options.text)
            .button(ModalButton::new(self.labels.ok.clone(), true).primary());

        let (tx, rx) = oneshot::channel();
        self.open_modal(modal, Resolver::Flag(tx));
        Pending::new(rx)
    }

    /// Opens a Cancel/OK dialog. Resolves `true` only on OK.
    pub fn confirm(&mut self, options: ConfirmOptions) -> Pending<bool> {
        let ConfirmOptions {
            title,
            text,
            ok_text,
            cancel_text,
        } = options;
        let modal = ModalOptions::new(title.unwrap_or_else(|| self.labels.confirm_title.clone()))
            .markup(text.unwrap_or_else(|| self.labels.confirm_text.clone()))
            .button(ModalButton::new(
                cancel_text.unwrap_or_else(|| self.labels.cancel.clone()),
                false,
            ))
            .button(
                ModalButton::new(ok_text.unwrap_or_else(|| self.labels.ok.clone()), true).primary(),
            );

        let (tx, rx) = oneshot::channel();
        self.open_modal(modal, Resolver::Flag(tx));
        Pending::new(rx)
    }

    /// Opens a dialog with a text input, focused shortly after mount.
    ///
    /// Resolves to the input's text on OK and `None` otherwise.
    pub fn prompt(&mut self, options: PromptOptions) -> Pending<Option<String>> {
        let PromptOptions {
            title,
            text,
            placeholder,
            ok_text,
            cancel_text,
        } = options;

        let wrap = self.surface.create_element("div");
        let para = self.surface.create_element("p");
        self.surface.set_text(para, &text);
        self.surface.append_child(wrap, para);
        let input = self.surface.create_element("input");
        self.surface.add_class(input, "eph-input");
        self.surface.set_attribute(input, "placeholder", &placeholder);
        self.surface.append_child(wrap, input);

        let modal = ModalOptions::new(title.unwrap_or_else(|| self.labels.prompt_title.clone()))
            .content_node(wrap)
            .button(ModalButton::new(
                cancel_text.unwrap_or_else(|| self.labels.cancel.clone()),
                ButtonValue::Null,
            ))
            .button(
                ModalButton::new(ok_text.unwrap_or_else(|| self.labels.ok.clone()), true).primary(),
            );

        let (tx, rx) = oneshot::channel();
        let id = self.open_modal(modal, Resolver::Text { input, tx });
        let focus = self.schedule(
            Duration::from_millis(PROMPT_FOCUS_MS),
            Scheduled::Focus(input),
        );
        if let Some(state) = self.modals.get_mut(&id) {
            state.wakeups.push(focus);
        }
        Pending::new(rx)
    }

    fn open_modal(&mut self, options: ModalOptions, resolver: Resolver) -> InstanceId {
        let id = InstanceId::generate(MODAL_ID_PREFIX);

        let mask = self.surface.create_element("div");
        self.surface.add_class(mask, "eph-mask");
        let panel = self.surface.create_element("div");
        self.surface.add_class(panel, "eph-modal");
        self.surface.set_attribute(panel, "role", "dialog");

        if !options.title.is_empty() {
            let head = self.surface.create_element("div");
            self.surface.add_class(head, "eph-modal-header");
            let title = self.surface.create_element("span");
            self.surface.set_text(title, &options.title);
            self.surface.append_child(head, title);
            if options.closable {
                let close = self.surface.create_element("button");
                self.surface.add_class(close, "eph-modal-close");
                self.surface.set_text(close, "✕");
                self.surface.set_attribute(close, "aria-label", &self.labels.close);
                self.surface.append_child(head, close);
                self.bind(close, Binding::ModalClose(id.clone()));
            }
            self.surface.append_child(panel, head);
        }

        let body = self.surface.create_element("div");
        self.surface.add_class(body, "eph-modal-body");
        match &options.content {
            ModalContent::Markup(markup) => self.surface.set_markup(body, markup),
            ModalContent::Node(node) => self.surface.append_child(body, *node),
        }
        self.surface.append_child(panel, body);

        let mut values = Vec::with_capacity(options.buttons.len());
        if !options.buttons.is_empty() {
            let foot = self.surface.create_element("div");
            self.surface.add_class(foot, "eph-modal-footer");
            for (index, button) in options.buttons.into_iter().enumerate() {
                let node = self.surface.create_element("button");
                self.surface.add_class(node, "eph-btn");
                self.surface.add_class(
                    node,
                    if button.primary {
                        "eph-btn-primary"
                    } else {
                        "eph-btn-secondary"
                    },
                );
                self.surface.set_text(node, &button.text);
                self.surface.append_child(foot, node);
                self.bind(node, Binding::ModalButton(id.clone(), index));
                values.push(button.value);
            }
            self.surface.append_child(panel, foot);
        }

        self.surface.append_child(mask, panel);
        let page = self.surface.body();
        self.surface.append_child(page, mask);

        if options.overlay_close {
            self.bind(mask, Binding::Backdrop(id.clone()));
        }

        let reveal = self.on_next_frame(Scheduled::Reveal(vec![mask, panel]));
        self.modals.insert(
            id.clone(),
            ModalState {
                mask,
                panel,
                values,
                resolver,
                wakeups: vec![reveal],
            },
        );
        tracing::debug!(%id, "modal opened");
        id
    }
}
