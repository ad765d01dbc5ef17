// SPDX-License-Identifier: MPL-2.0
#![doc = r##"
# Design Tokens

This module defines the overlay design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base and semantic colors
- **Opacity**: Backdrop and tooltip opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Typography**: Font size scale
- **Radius**: Border radii
- **Motion**: Transition lengths, kept in step with the detach delays

## Examples

```
use ephemera::ui::design_tokens::{palette, to_hex};

assert_eq!(to_hex(palette::ACCENT_500), "#3b82f6");
```
"##]

use crate::domain::overlay::Tone;
use iced_core::Color;

/// Builds a colour from 8-bit channels.
const fn rgb8(r: u8, g: u8, b: u8) -> Color {
    Color::from_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
}

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::{rgb8, Color};

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_100: Color = rgb8(0xf3, 0xf4, 0xf6);
    pub const GRAY_500: Color = rgb8(0x6b, 0x72, 0x80);
    pub const GRAY_900: Color = rgb8(0x11, 0x18, 0x27);

    // Dark scheme surfaces
    pub const NIGHT_900: Color = rgb8(0x0b, 0x12, 0x20);
    pub const NIGHT_100: Color = rgb8(0xe6, 0xee, 0xf8);

    // Brand
    pub const ACCENT_500: Color = rgb8(0x3b, 0x82, 0xf6);
    pub const ACCENT_300: Color = rgb8(0x60, 0xa5, 0xfa);

    // Semantic colors
    pub const INFO_500: Color = ACCENT_500;
    pub const SUCCESS_500: Color = rgb8(0x10, 0xb9, 0x81);
    pub const WARNING_500: Color = rgb8(0xf5, 0x9e, 0x0b);
    pub const ERROR_500: Color = rgb8(0xef, 0x44, 0x44);

    // Tinted backgrounds
    pub const WARNING_50: Color = rgb8(0xff, 0xfb, 0xeb);
    pub const ERROR_50: Color = rgb8(0xfe, 0xe2, 0xe2);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Spinner backdrop
    pub const OVERLAY_LIGHT: f32 = 0.32;
    /// Modal backdrop
    pub const OVERLAY_MEDIUM: f32 = 0.45;
    /// Tooltip background
    pub const OVERLAY_STRONG: f32 = 0.85;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 10.0;
    pub const MD: f32 = 14.0;
    pub const LG: f32 = 20.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Standard body - buttons, toast text
    pub const BODY: f32 = 14.0;

    /// Caption - tooltips and badges
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 6.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 999.0; // Pill shape
}

// ============================================================================
// Motion
// ============================================================================

pub mod motion {
    /// Toast fade/slide, in seconds. Must not outlast the toast detach delay.
    pub const TOAST_TRANSITION_S: f32 = 0.25;
    /// Modal scale/fade, in seconds. Must not outlast the modal detach delay.
    pub const MODAL_TRANSITION_S: f32 = 0.18;
    pub const TOOLTIP_TRANSITION_S: f32 = 0.15;
    pub const SPINNER_TURN_S: f32 = 0.8;
    pub const PULSE_S: f32 = 0.9;
}

// ============================================================================
// Helpers
// ============================================================================

/// Renders a colour as `#rrggbb`, ignoring alpha.
#[must_use]
pub fn to_hex(color: Color) -> String {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "#{:02x}{:02x}{:02x}",
        channel(color.r),
        channel(color.g),
        channel(color.b)
    )
}

/// Parses `#rrggbb` or `#rgb` (leading `#` optional).
#[must_use]
pub fn parse_hex(raw: &str) -> Option<Color> {
    let digits = raw.trim().trim_start_matches('#');
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return None,
    };
    let byte = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
    Some(rgb8(byte(0)?, byte(2)?, byte(4)?))
}

/// Accent colour for a notice of the given tone.
#[must_use]
pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Info => palette::INFO_500,
        Tone::Success => palette::SUCCESS_500,
        Tone::Warn => palette::WARNING_500,
        Tone::Error => palette::ERROR_500,
    }
}

/// Banner background tint; `None` keeps the themed background.
#[must_use]
pub fn banner_tint(tone: Tone) -> Option<Color> {
    match tone {
        Tone::Warn => Some(palette::WARNING_50),
        Tone::Error => Some(palette::ERROR_50),
        Tone::Info | Tone::Success => None,
    }
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > opacity::OVERLAY_LIGHT);
    assert!(opacity::OVERLAY_STRONG > opacity::OVERLAY_MEDIUM);

    // Typography validation
    assert!(typography::BODY > typography::CAPTION);

    // Motion validation: transitions finish before nodes are detached
    assert!(motion::TOAST_TRANSITION_S * 1000.0 <= crate::config::TOAST_EXIT_MS as f32);
    assert!(motion::MODAL_TRANSITION_S * 1000.0 <= crate::config::MODAL_EXIT_MS as f32);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip_for_palette() {
        for color in [
            palette::ACCENT_500,
            palette::SUCCESS_500,
            palette::WARNING_500,
            palette::ERROR_500,
        ] {
            assert_eq!(parse_hex(&to_hex(color)), Some(color));
        }
    }

    #[test]
    fn accent_renders_expected_hex() {
        assert_eq!(to_hex(palette::ACCENT_500), "#3b82f6");
        assert_eq!(to_hex(palette::ERROR_500), "#ef4444");
    }

    #[test]
    fn parse_hex_accepts_short_form() {
        assert_eq!(parse_hex("#fff"), Some(palette::WHITE));
        assert_eq!(parse_hex("000000"), Some(palette::BLACK));
    }

    #[test]
    fn parse_hex_rejects_garbage() {
        assert_eq!(parse_hex("#12345"), None);
        assert_eq!(parse_hex("#gg0000"), None);
        assert_eq!(parse_hex(""), None);
    }

    #[test]
    fn tone_colors_are_distinct() {
        let colors = [
            tone_color(Tone::Info),
            tone_color(Tone::Success),
            tone_color(Tone::Warn),
            tone_color(Tone::Error),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn only_warn_and_error_banners_are_tinted() {
        assert!(banner_tint(Tone::Info).is_none());
        assert!(banner_tint(Tone::Success).is_none());
        assert_eq!(banner_tint(Tone::Warn), Some(palette::WARNING_50));
        assert_eq!(banner_tint(Tone::Error), Some(palette::ERROR_50));
    }
}
