//! Fixed palettes: the hand-authored gray ramp and the five-step ramps
//! built around hard-coded seeds.
//!
//! Fixed ramps use their own lightness offsets instead of the luminosity
//! bands, so a fixed `red` and an adaptive palette seeded with the same hex
//! differ numerically.

use std::collections::BTreeMap;

use tonal_color::number::DEFAULT_DECIMALS;
use tonal_color::{Color, ColorRenderer, to_canonical};
use tracing::{debug, warn};

use crate::palette::{Palette, PaletteStrategy};
use crate::step::Variant;

/// The steps a fixed ramp carries.
pub const FIXED_STEPS: [Variant; 5] = [
    Variant::S100,
    Variant::S300,
    Variant::S500,
    Variant::S700,
    Variant::S900,
];

/// Above this chroma the `900` step is pinned to [`DARK_CHROMA`].
pub const DARK_CHROMA_THRESHOLD: f64 = 0.13;

/// Chroma of the `900` step for saturated seeds.
pub const DARK_CHROMA: f64 = 0.11;

/// A ramp around a hard-coded seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedRamp {
    pub name: &'static str,
    pub seed: &'static str,
}

pub const RED: FixedRamp = FixedRamp { name: "red", seed: "#b91c1c" };
pub const GREEN: FixedRamp = FixedRamp { name: "green", seed: "#187c3e" };
pub const ORANGE: FixedRamp = FixedRamp { name: "orange", seed: "#d66400" };
pub const BLUE: FixedRamp = FixedRamp { name: "blue", seed: "#0263c9" };

/// All fixed ramps, in display order.
pub const FIXED_RAMPS: [FixedRamp; 4] = [RED, GREEN, ORANGE, BLUE];

impl FixedRamp {
    /// Build this ramp through `renderer`.
    #[must_use]
    pub fn build(self, renderer: &dyn ColorRenderer) -> Palette {
        fixed_ramp(renderer, self.name, self.seed)
    }
}

/// Build a five-step ramp around `seed`.
///
/// `500` is the seed itself at default precision and doubles as the base
/// rendering. `700`/`900` darken by 0.15/0.3, `300` lightens by 0.2, and
/// `100` sits at 97% with half the seed chroma. On an unreadable seed the
/// five steps are all fallback black.
#[must_use]
pub fn fixed_ramp(renderer: &dyn ColorRenderer, name: &str, seed: &str) -> Palette {
    let canonical = match to_canonical(renderer, seed) {
        Ok(canonical) => canonical,
        Err(err) => {
            warn!(name, seed, error = %err, "unreadable ramp seed, emitting degenerate palette");
            return Palette::degenerate(name, PaletteStrategy::FixedRamp, &FIXED_STEPS);
        }
    };
    let base = canonical.color;
    debug!(name, seed, base = %base, "building fixed ramp");

    let dark_chroma = if base.c > DARK_CHROMA_THRESHOLD {
        DARK_CHROMA
    } else {
        base.c
    };
    let base_rendering = base.to_css(DEFAULT_DECIMALS);

    let variants = BTreeMap::from([
        (
            Variant::S100,
            base.with_lightness(0.97)
                .with_chroma(base.c * 0.5)
                .to_css(DEFAULT_DECIMALS),
        ),
        (Variant::S300, base.lighten(0.2).to_css(DEFAULT_DECIMALS)),
        (Variant::S500, base_rendering.clone()),
        (Variant::S700, base.darken(0.15).to_css(DEFAULT_DECIMALS)),
        (
            Variant::S900,
            base.darken(0.3)
                .with_chroma(dark_chroma)
                .to_css(DEFAULT_DECIMALS),
        ),
    ]);

    Palette {
        name: name.to_string(),
        strategy: PaletteStrategy::FixedRamp,
        base,
        base_rendering,
        base_step: Some(Variant::S500),
        variants,
    }
}

/// Gray lightness per variant, in percent.
const GRAY_STEPS: [(Variant, f64); 12] = [
    (Variant::S50, 97.0),
    (Variant::S100, 92.2),
    (Variant::S200, 87.0),
    (Variant::S300, 70.8),
    (Variant::S400, 55.6),
    (Variant::S500, 43.9),
    (Variant::S600, 37.1),
    (Variant::S700, 26.9),
    (Variant::S800, 20.5),
    (Variant::S900, 14.5),
    (Variant::White, 100.0),
    (Variant::Black, 0.0),
];

/// The hand-authored neutral ramp, including the global `white`/`black`.
///
/// Base is `gray-500`.
#[must_use]
pub fn gray() -> Palette {
    let render = |percent: f64| format!("oklch({percent}% 0 0)");
    Palette {
        name: "gray".to_string(),
        strategy: PaletteStrategy::Hand,
        base: Color::gray(0.439),
        base_rendering: render(43.9),
        base_step: Some(Variant::S500),
        variants: GRAY_STEPS.iter().map(|&(v, l)| (v, render(l))).collect(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
