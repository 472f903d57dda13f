//! Named global palettes: shipped alongside every user palette.
//!
//! `gray` is hand-authored; `red`, `green`, `orange` and `blue` are fixed
//! ramps built through the renderer on each call.

use tonal_color::ColorRenderer;

use crate::fixed::{BLUE, GREEN, ORANGE, RED, gray};
use crate::palette::Palette;

/// Look up a global palette by name.
///
/// Returns `None` if the name is not recognized.
#[must_use]
pub fn builtin_palette(renderer: &dyn ColorRenderer, name: &str) -> Option<Palette> {
    let ramp = match name {
        "gray" | "grey" => return Some(gray()),
        "red" => RED,
        "green" => GREEN,
        "orange" => ORANGE,
        "blue" => BLUE,
        _ => return None,
    };
    Some(ramp.build(renderer))
}

/// List all global palette names, in output order.
#[must_use]
pub const fn builtin_names() -> &'static [&'static str] {
    &["gray", "red", "green", "orange", "blue"]
}

/// Every global palette, in output order.
#[must_use]
pub fn global_palettes(renderer: &dyn ColorRenderer) -> Vec<Palette> {
    builtin_names()
        .iter()
        .filter_map(|name| builtin_palette(renderer, name))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
