// SPDX-License-Identifier: MPL-2.0
//! Instance identifiers.
//!
//! Identifiers have the shape `{prefix}-{base36 timestamp}-{suffix}`. The
//! generator supplying the timestamp and random suffix lives outside the
//! domain layer; this type only knows how to assemble and inspect them.

use std::fmt;

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Renders `value` in lowercase base 36.
#[must_use]
pub fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8_lossy(&digits).into_owned()
}

/// Opaque identifier of a live overlay instance.
///
/// Uniqueness is probabilistic: collisions are negligible, not impossible.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(String);

impl InstanceId {
    /// Assembles an identifier from its parts.
    ///
    /// `suffix` is expected to already be base 36.
    #[must_use]
    pub fn compose(prefix: &str, timestamp_ms: u64, suffix: &str) -> Self {
        Self(format!("{}-{}-{}", prefix, to_base36(timestamp_ms), suffix))
    }

    /// Returns the prefix naming the kind that created this id.
    #[must_use]
    pub fn prefix(&self) -> &str {
        self.0.split('-').next().unwrap_or_default()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for InstanceId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<String> for InstanceId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}
