// SPDX-License-Identifier: MPL-2.0
//! `ephemera` manages short-lived UI overlays (toasts, snackbars, banners,
//! tooltips, progress toasts, context menus, badges, highlights, quick
//! inputs, modal dialogs and a loading overlay) on top of a pluggable
//! render [`surface`].
//!
//! The headless [`surface::Document`] is a complete in-memory surface with a
//! virtual clock, suitable for tests and scripted sessions.

#![doc(html_root_url = "https://docs.rs/ephemera/0.3.0")]

pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod paths;
pub mod surface;
pub mod ui;

#[cfg(test)]
mod test_utils;
