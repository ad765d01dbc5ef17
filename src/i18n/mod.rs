// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for default overlay labels.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! Buttons and titles that callers leave unset ("OK", "Cancel", "Send", ...) are
//! looked up here.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Embedded `.ftl` translation files
//! - Runtime language switching
//! - Fallback to the default locale when translations are missing

pub mod fluent;

pub use fluent::{I18n, DEFAULT_LOCALE};
