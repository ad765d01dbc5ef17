// SPDX-License-Identifier: MPL-2.0
//! Single-resolution results for modal dialogs.
//!
//! Every modal owns the sending half of a `tokio::sync::oneshot` channel and
//! hands the receiving half to the caller wrapped in [`Pending`]. The sender
//! is consumed by the first resolution, so a second one cannot happen. If the
//! modal disappears without being resolved the channel closes and the caller
//! observes the type's [`Unresolved`] value instead.

use crate::surface::{NodeId, Surface};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

/// Value attached to a footer button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonValue {
    Bool(bool),
    Text(String),
    Null,
}

impl ButtonValue {
    /// `true`, non-empty text.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            ButtonValue::Bool(value) => *value,
            ButtonValue::Text(text) => !text.is_empty(),
            ButtonValue::Null => false,
        }
    }
}

impl From<bool> for ButtonValue {
    fn from(value: bool) -> Self {
        ButtonValue::Bool(value)
    }
}

impl From<&str> for ButtonValue {
    fn from(value: &str) -> Self {
        ButtonValue::Text(value.to_string())
    }
}

/// How a modal was closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalResult {
    /// A footer button was activated.
    Ok(ButtonValue),
    /// The header close button was activated.
    Cancelled,
    /// The backdrop was clicked, or the modal was swept away.
    Dismissed,
}

/// Value observed when a modal goes away without resolving.
pub trait Unresolved {
    fn unresolved() -> Self;
}

impl Unresolved for ModalResult {
    fn unresolved() -> Self {
        ModalResult::Dismissed
    }
}

impl Unresolved for bool {
    fn unresolved() -> Self {
        false
    }
}

impl Unresolved for Option<String> {
    fn unresolved() -> Self {
        None
    }
}

/// The eventual result of a modal.
///
/// Await it from async code, or poll it with [`Pending::try_take`] from a
/// synchronous host loop.
#[derive(Debug)]
pub struct Pending<T> {
    rx: oneshot::Receiver<T>,
    taken: bool,
}

impl<T: Unresolved> Pending<T> {
    pub(crate) fn new(rx: oneshot::Receiver<T>) -> Self {
        Self { rx, taken: false }
    }

    /// Returns the result once available.
    ///
    /// `None` while the modal is still open, and again after the result has
    /// been taken.
    pub fn try_take(&mut self) -> Option<T> {
        if self.taken {
            return None;
        }
        let value = match self.rx.try_recv() {
            Ok(value) => value,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Closed) => T::unresolved(),
        };
        self.taken = true;
        Some(value)
    }
}

impl<T: Unresolved> Future for Pending<T> {
    type Output = T;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<T> {
        let this = self.get_mut();
        Pin::new(&mut this.rx)
            .poll(cx)
            .map(|result| result.unwrap_or_else(|_| T::unresolved()))
    }
}

/// Sending half of a modal, shaped for the caller's result type.
#[derive(Debug)]
pub(crate) enum Resolver {
    Raw(oneshot::Sender<ModalResult>),
    Flag(oneshot::Sender<bool>),
    /// Reads `input` when resolved with a truthy button.
    Text {
        input: NodeId,
        tx: oneshot::Sender<Option<String>>,
    },
}

impl Resolver {
    pub(crate) fn settle<S: Surface>(self, outcome: ModalResult, surface: &S) {
        // A dropped receiver just means nobody is listening any more.
        match self {
            Resolver::Raw(tx) => {
                let _ = tx.send(outcome);
            }
            Resolver::Flag(tx) => {
                let flag = matches!(&outcome, ModalResult::Ok(value) if value.is_truthy());
                let _ = tx.send(flag);
            }
            Resolver::Text { input, tx } => {
                let text = match &outcome {
                    ModalResult::Ok(value) if value.is_truthy() => Some(surface.value(input)),
                    _ => None,
                };
                let _ = tx.send(text);
            }
        }
    }
}
