// SPDX-License-Identifier: MIT
//
// Conversion layer: arbitrary color expression → canonical (L, C, H), and
// canonical renderings → device RGB, Hex and HSL views.
//
// All conversions go through an injected `ColorRenderer`. The rendered text
// is read back with the notation grammar; an unreadable rendering becomes a
// `ParseFailure`, which the `*_or_fallback` helpers turn into the fixed
// black fallback plus a warning.

use rgb::RGB8;
use tracing::{debug, warn};

use crate::color::{Color, normalize_hue, rgb8_to_hex, rgb8_to_hsl_string};
use crate::error::ParseFailure;
use crate::notation;
use crate::number::EXACT_DECIMALS;
use crate::render::{ColorRenderer, Notation};

/// Rendering used for the fallback color.
pub const FALLBACK_RENDERING: &str = "oklch(0 0 0)";

/// Hex string produced when an input cannot be rasterized.
pub const FALLBACK_HEX: &str = "#000000";

/// HSL string produced when an input cannot be rasterized.
pub const FALLBACK_HSL: &str = "hsl(0, 0%, 0%)";

/// A seed reduced to its canonical triple, with the exact rendering that
/// palettes reproduce verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct Canonical {
    pub color: Color,
    /// `oklch(<L%> <C> <H>)`, each component at four decimals.
    pub rendering: String,
}

impl Canonical {
    /// The safe default substituted for unreadable input.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            color: Color::BLACK,
            rendering: FALLBACK_RENDERING.to_string(),
        }
    }

    /// Whether this is the fallback substituted for unreadable input.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.rendering == FALLBACK_RENDERING
    }
}

/// Reduce a color expression to its canonical `(L, C, H)` triple.
///
/// # Errors
///
/// Returns [`ParseFailure`] when the renderer's OKLCH output is not a
/// readable `oklch()` notation.
pub fn to_canonical(renderer: &dyn ColorRenderer, input: &str) -> Result<Canonical, ParseFailure> {
    let rendered = renderer.render(input, Notation::Oklch);
    let parsed = notation::parse_oklch(&rendered)?;

    let color = Color::oklch(parsed.l, parsed.c, normalize_hue(parsed.h));
    let rendering = color.to_css(EXACT_DECIMALS);
    debug!(input, %rendered, %rendering, "canonicalized color");

    Ok(Canonical { color, rendering })
}

/// Like [`to_canonical`], substituting the fallback on failure.
#[must_use]
pub fn canonical_or_fallback(renderer: &dyn ColorRenderer, input: &str) -> Canonical {
    to_canonical(renderer, input).unwrap_or_else(|err| {
        warn!(input, error = %err, "unreadable color, using fallback");
        Canonical::fallback()
    })
}

/// Obtain the 8-bit device triple for a color expression.
///
/// Prefers the renderer's `rgb()` output. When that is not readable, the
/// OKLCH rendering is rasterized locally instead. Returns `None` only when
/// neither rendering can be read.
#[must_use]
pub fn device_rgb(renderer: &dyn ColorRenderer, input: &str) -> Option<RGB8> {
    if let Ok(n) = notation::parse_rgb(&renderer.render(input, Notation::Rgb)) {
        return Some(n.rgb);
    }

    let rendered = renderer.render(input, Notation::Oklch);
    match notation::parse_oklch(&rendered) {
        Ok(n) => Some(Color::oklch(n.l, n.c, n.h).to_rgb8()),
        Err(err) => {
            warn!(input, error = %err, "could not convert color to RGB");
            None
        }
    }
}

/// `#rrggbb` for a color expression, `#000000` if it cannot be rasterized.
#[must_use]
pub fn to_hex(renderer: &dyn ColorRenderer, input: &str) -> String {
    device_rgb(renderer, input).map_or_else(|| FALLBACK_HEX.to_string(), rgb8_to_hex)
}

/// `hsl(D, S%, L%)` for a color expression, `hsl(0, 0%, 0%)` if it cannot
/// be rasterized.
#[must_use]
pub fn to_hsl(renderer: &dyn ColorRenderer, input: &str) -> String {
    device_rgb(renderer, input).map_or_else(|| FALLBACK_HSL.to_string(), rgb8_to_hsl_string)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
