// SPDX-License-Identifier: MPL-2.0
//! Overlay kinds and the small enums that configure them.

use std::fmt;
use std::str::FromStr;

/// The kind of a registered ephemeral instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Toast,
    Snackbar,
    Banner,
    Tooltip,
    Progress,
    Context,
    Badge,
    Highlight,
    QuickInput,
}

impl Kind {
    /// All registrable kinds, in declaration order.
    pub const ALL: [Kind; 9] = [
        Kind::Toast,
        Kind::Snackbar,
        Kind::Banner,
        Kind::Tooltip,
        Kind::Progress,
        Kind::Context,
        Kind::Badge,
        Kind::Highlight,
        Kind::QuickInput,
    ];

    /// Prefix used when generating ids for this kind.
    #[must_use]
    pub fn id_prefix(self) -> &'static str {
        match self {
            Kind::Toast => "toast",
            Kind::Snackbar => "snack",
            Kind::Banner => "banner",
            Kind::Tooltip => "tooltip",
            Kind::Progress => "progress",
            Kind::Context => "ctx",
            Kind::Badge => "badge",
            Kind::Highlight => "hl",
            Kind::QuickInput => "qinput",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Toast => "toast",
            Kind::Snackbar => "snackbar",
            Kind::Banner => "banner",
            Kind::Tooltip => "tooltip",
            Kind::Progress => "progress",
            Kind::Context => "context",
            Kind::Badge => "badge",
            Kind::Highlight => "highlight",
            Kind::QuickInput => "quick_input",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic tone of a notice; drives its accent colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tone {
    #[default]
    Info,
    Success,
    Warn,
    Error,
}

impl Tone {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Info => "info",
            Tone::Success => "success",
            Tone::Warn => "warn",
            Tone::Error => "error",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_lowercase().as_str() {
            "info" => Ok(Tone::Info),
            "success" => Ok(Tone::Success),
            "warn" | "warning" => Ok(Tone::Warn),
            "error" => Ok(Tone::Error),
            other => Err(format!("unknown tone: {}", other)),
        }
    }
}

/// Which stacking container a notice lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Anchor {
    Top,
    Middle,
    #[default]
    Bottom,
}

impl Anchor {
    pub const ALL: [Anchor; 3] = [Anchor::Top, Anchor::Middle, Anchor::Bottom];

    /// Class carried by the container node for this anchor.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Anchor::Top => "eph-top",
            Anchor::Middle => "eph-middle",
            Anchor::Bottom => "eph-bottom",
        }
    }
}

/// Where a tooltip sits relative to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Placement {
    /// Above the target.
    #[default]
    Top,
    /// Vertically centred on the target.
    Middle,
    /// Below the target.
    Bottom,
}
