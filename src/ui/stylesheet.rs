// SPDX-License-Identifier: MPL-2.0
//! The single stylesheet shared by every overlay.
//!
//! Rendered from the design tokens and injected into the document head at
//! most once, guarded by the `#eph-styles` element id.

use crate::surface::{NodeId, Surface};
use crate::ui::design_tokens::{motion, opacity, palette, radius, spacing, to_hex, typography};

/// Element id of the injected `<style>` node.
pub const STYLE_ELEMENT_ID: &str = "eph-styles";

/// Renders the overlay stylesheet.
#[must_use]
pub fn css() -> String {
    let accent = to_hex(palette::ACCENT_500);
    let accent_soft = to_hex(palette::ACCENT_300);
    let bg = to_hex(palette::WHITE);
    let text = to_hex(palette::GRAY_900);
    let muted = to_hex(palette::GRAY_500);
    let secondary = to_hex(palette::GRAY_100);
    let night_bg = to_hex(palette::NIGHT_900);
    let night_text = to_hex(palette::NIGHT_100);

    let mut out = String::with_capacity(4096);

    // Theme variables
    out.push_str(&format!(
        ":root{{--eph-font:system-ui,-apple-system,'Segoe UI',Roboto,Arial;\
         --eph-accent:{accent};--eph-radius:{r}px;\
         --eph-shadow:0 6px 20px rgba(2,6,23,.16);\
         --eph-bg:{bg};--eph-text:{text};--eph-muted:{muted}}}\n\
         @media (prefers-color-scheme: dark){{:root{{--eph-bg:{night_bg};\
         --eph-text:{night_text};--eph-shadow:0 6px 30px rgba(2,6,23,.6)}}}}\n",
        r = radius::MD,
    ));

    // Containers
    out.push_str(&format!(
        ".eph-container{{position:fixed;inset:0;pointer-events:none;z-index:9999;font-family:var(--eph-font)}}\n\
         .eph-top{{top:{lg}px;left:0;right:0;display:flex;flex-direction:column;align-items:center;gap:{xs}px}}\n\
         .eph-middle{{top:50%;left:0;right:0;transform:translateY(-50%);display:flex;flex-direction:column;align-items:center;gap:{xs}px}}\n\
         .eph-bottom{{bottom:{lg}px;left:0;right:0;display:flex;flex-direction:column;align-items:center;gap:{xs}px}}\n",
        lg = spacing::LG,
        xs = spacing::XS,
    ));

    // Toast
    out.push_str(&format!(
        ".eph-toast{{pointer-events:auto;max-width:92vw;display:flex;align-items:center;gap:{sm}px;\
         padding:{sm}px {md}px;border-radius:var(--eph-radius);background:var(--eph-bg);color:var(--eph-text);\
         box-shadow:var(--eph-shadow);opacity:0;transform:translateY({xs}px);\
         transition:opacity {t}s,transform {t}s}}\n\
         .eph-toast.show{{opacity:1;transform:translateY(0)}}\n\
         .eph-toast .eph-close{{margin-left:auto;cursor:pointer;opacity:.75}}\n\
         .eph-progress-bar{{margin-left:{sm}px;min-width:80px;height:{xs}px;border-radius:{r}px;\
         background:linear-gradient(90deg,var(--eph-accent),{accent_soft})}}\n",
        sm = spacing::SM,
        md = spacing::MD,
        xs = spacing::XS,
        r = radius::SM,
        t = motion::TOAST_TRANSITION_S,
    ));

    // Modal
    out.push_str(&format!(
        ".eph-mask{{position:fixed;inset:0;background:rgba(0,0,0,{mask});display:flex;align-items:center;\
         justify-content:center;z-index:10010;pointer-events:auto;opacity:0;transition:opacity {t}s}}\n\
         .eph-mask.show{{opacity:1}}\n\
         .eph-modal{{width:clamp(280px,86vw,720px);border-radius:{lg}px;background:var(--eph-bg);\
         color:var(--eph-text);box-shadow:var(--eph-shadow);transform:scale(.96);opacity:0;\
         transition:transform {t}s,opacity {t}s}}\n\
         .eph-modal.show{{transform:scale(1);opacity:1}}\n\
         .eph-modal-header{{padding:12px 16px;border-bottom:1px solid rgba(0,0,0,.06);font-weight:600}}\n\
         .eph-modal-close{{float:right;background:none;border:none;cursor:pointer}}\n\
         .eph-modal-body{{padding:{md}px}}\n\
         .eph-modal-footer{{padding:{sm}px {md}px;border-top:1px solid rgba(0,0,0,.06);text-align:right}}\n\
         .eph-btn{{border-radius:{r}px;padding:{xs}px 12px;border:0;cursor:pointer;font-size:{body}px}}\n\
         .eph-btn-primary{{background:var(--eph-accent);color:#fff}}\n\
         .eph-btn-secondary{{background:{secondary};color:var(--eph-text)}}\n\
         .eph-input{{width:100%;padding:{xs}px;border:1px solid rgba(0,0,0,.08);border-radius:{r}px}}\n",
        mask = opacity::OVERLAY_MEDIUM,
        t = motion::MODAL_TRANSITION_S,
        lg = radius::LG,
        r = radius::MD,
        sm = spacing::SM,
        md = spacing::MD,
        xs = spacing::XS,
        body = typography::BODY,
    ));

    // Spinner
    out.push_str(&format!(
        ".eph-spinner-overlay{{position:fixed;inset:0;display:flex;flex-direction:column;align-items:center;\
         justify-content:center;z-index:10020;background:rgba(0,0,0,{o});pointer-events:auto}}\n\
         .eph-spinner{{width:36px;height:36px;border-radius:50%;border:3px solid rgba(255,255,255,.14);\
         border-top-color:var(--eph-accent);animation:eph-spin {s}s linear infinite}}\n\
         .eph-spinner-text{{margin-top:{sm}px;color:#fff}}\n\
         @keyframes eph-spin{{to{{transform:rotate(360deg)}}}}\n",
        o = opacity::OVERLAY_LIGHT,
        s = motion::SPINNER_TURN_S,
        sm = spacing::SM,
    ));

    // Tooltip, snackbar, banner
    out.push_str(&format!(
        ".eph-tooltip{{position:absolute;padding:6px {xs}px;border-radius:{r}px;background:rgba(0,0,0,{o});\
         color:#fff;font-size:{cap}px;pointer-events:none;opacity:0;transform:translateY(6px);\
         transition:opacity {t}s,transform {t}s}}\n\
         .eph-tooltip.show{{opacity:1;transform:translateY(0)}}\n\
         .eph-snackbar{{pointer-events:auto;display:flex;align-items:center;gap:{sm}px;padding:{sm}px {md}px;\
         border-radius:{sm}px;box-shadow:var(--eph-shadow);background:var(--eph-bg)}}\n\
         .eph-snackbar .eph-action{{margin-left:auto;border:0;background:none;cursor:pointer;font-weight:600}}\n\
         .eph-banner{{position:fixed;left:{sm}px;right:{sm}px;top:12px;padding:{sm}px {md}px;\
         border-radius:{sm}px;box-shadow:var(--eph-shadow);pointer-events:auto;max-width:calc(100% - {lg}px)}}\n",
        xs = spacing::XS,
        sm = spacing::SM,
        md = spacing::MD,
        lg = spacing::LG,
        r = radius::SM,
        o = opacity::OVERLAY_STRONG,
        cap = typography::CAPTION,
        t = motion::TOOLTIP_TRANSITION_S,
    ));

    // Context menu, badge, highlight, quick input
    out.push_str(&format!(
        ".eph-context{{position:absolute;border-radius:{r}px;padding:6px;background:var(--eph-bg);\
         box-shadow:var(--eph-shadow);min-width:140px;pointer-events:auto}}\n\
         .eph-context button{{display:block;width:100%;padding:{xs}px;border:0;background:transparent;\
         text-align:left;cursor:pointer}}\n\
         .eph-badge{{position:absolute;border-radius:{full}px;padding:2px 6px;font-size:{cap}px;\
         pointer-events:none;background:var(--eph-accent);color:#fff}}\n\
         .eph-highlight{{pointer-events:none;position:absolute;border-radius:{sm}px;\
         box-shadow:0 0 0 4px rgba(59,130,246,.14);animation:eph-pulse {p}s ease-out}}\n\
         @keyframes eph-pulse{{0%{{transform:scale(.98);opacity:1}}100%{{transform:scale(1.06);opacity:0}}}}\n\
         .eph-quick-input{{position:fixed;left:50%;transform:translateX(-50%);bottom:{lg}px;\
         background:var(--eph-bg);padding:{sm}px;border-radius:{rl}px;box-shadow:var(--eph-shadow);\
         pointer-events:auto;display:flex;gap:{xs}px}}\n",
        r = radius::MD,
        rl = radius::LG,
        full = radius::FULL,
        xs = spacing::XS,
        sm = spacing::SM,
        lg = spacing::LG,
        cap = typography::CAPTION,
        p = motion::PULSE_S,
    ));

    out
}

/// Injects the stylesheet unless it is already present.
///
/// Returns the `<style>` node either way.
pub fn inject<S: Surface>(surface: &mut S) -> NodeId {
    if let Some(existing) = surface.find_by_id(STYLE_ELEMENT_ID) {
        return existing;
    }
    let style = surface.create_element("style");
    surface.set_element_id(style, STYLE_ELEMENT_ID);
    surface.set_text(style, &css());
    let head = surface.head();
    surface.append_child(head, style);
    tracing::debug!("overlay stylesheet injected");
    style
}
