//! Adaptive palette generation: a full twelve-entry ramp from any seed.
//!
//! The seed's own rendering is placed verbatim at the step its luminosity
//! falls into. Every other step keeps the seed hue and sits at its band's
//! midpoint, with chroma scaled down toward both luminosity extremes.

use std::collections::BTreeMap;

use tonal_color::number::DEFAULT_DECIMALS;
use tonal_color::{Color, ColorRenderer, to_canonical};
use tracing::{debug, warn};

use crate::palette::{Palette, PaletteStrategy};
use crate::step::{LUMINOSITY_BANDS, Variant, step_for_luminosity};

/// Upper chroma bound for every generated step.
pub const MAX_CHROMA: f64 = 0.33;

/// Chroma for a step at `target_l`, derived from the seed chroma.
///
/// A stepwise approximation of the chroma compression near black and white:
/// `≥0.95 ×0.3`, `≥0.85 ×0.6`, `≤0.25 ×0.4`, `≤0.35 ×0.7`, otherwise
/// unchanged. The result is clamped to `[0, MAX_CHROMA]`.
#[must_use]
pub fn chroma_for_luminosity(base_c: f64, target_l: f64) -> f64 {
    let factor = if target_l >= 0.95 {
        0.3
    } else if target_l >= 0.85 {
        0.6
    } else if target_l <= 0.25 {
        0.4
    } else if target_l <= 0.35 {
        0.7
    } else {
        1.0
    };
    (base_c * factor).clamp(0.0, MAX_CHROMA)
}

/// Generate an adaptive palette from a canonical seed.
///
/// `exact_rendering` is stored as-is at the seed's step rather than
/// re-rendered from the triple, so the user's color survives bit for bit.
#[must_use]
pub fn generate(seed: Color, exact_rendering: &str, name: &str) -> Palette {
    let Color { l, c, h } = seed;
    let base_step = step_for_luminosity(l * 100.0);
    debug!(name, base_step = %base_step, "generating adaptive palette");

    let render = |l: f64, c: f64| Color::oklch(l, c, h).to_css(DEFAULT_DECIMALS);
    let mut variants = BTreeMap::new();

    variants.insert(Variant::S50, render(1.0, (c * 0.05).max(0.005)));
    variants.insert(Variant::S100, render(0.98, (c * 0.15).max(0.01)));

    // After 50/100 so a 100%-luminosity seed still lands verbatim.
    variants.insert(base_step, exact_rendering.to_string());

    for band in &LUMINOSITY_BANDS[2..] {
        if band.step == base_step {
            continue;
        }
        let target_l = band.midpoint();
        variants.insert(band.step, render(target_l, chroma_for_luminosity(c, target_l)));
    }

    variants.insert(Variant::Fade, render(l, (c * 0.6).clamp(0.0, MAX_CHROMA)));
    variants.insert(Variant::Bright, render(l, (c * 1.4).min(MAX_CHROMA)));

    Palette {
        name: name.to_string(),
        strategy: PaletteStrategy::Adaptive,
        base: seed,
        base_rendering: exact_rendering.to_string(),
        base_step: Some(base_step),
        variants,
    }
}

/// Generate an adaptive palette from a user-supplied color expression.
///
/// When the seed cannot be read, returns a degenerate palette whose twelve
/// variants are all the fallback black. No arithmetic is done on the
/// fallback triple.
#[must_use]
pub fn generate_from_input(renderer: &dyn ColorRenderer, input: &str, name: &str) -> Palette {
    match to_canonical(renderer, input) {
        Ok(seed) => generate(seed.color, &seed.rendering, name),
        Err(err) => {
            warn!(name, input, error = %err, "unreadable seed color, emitting degenerate palette");
            Palette::degenerate(name, PaletteStrategy::Adaptive, &Variant::ADAPTIVE)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
