//! Palette value type: a named set of rendered variants.
//!
//! Palettes are plain values: every generator call returns a fresh one and
//! nothing is shared between them.

use std::collections::BTreeMap;

use serde::Serialize;
use tonal_color::Color;
use tonal_color::convert::FALLBACK_RENDERING;

use crate::step::Variant;

/// How a palette's variants were derived.
///
/// The adaptive and fixed-ramp rules produce visually similar but
/// numerically different ramps. Both are kept as separate strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaletteStrategy {
    /// Twelve variants derived from an arbitrary seed.
    Adaptive,
    /// Five steps (`100,300,500,700,900`) around a hard-coded seed.
    FixedRamp,
    /// Hand-authored values (the gray ramp).
    Hand,
}

/// A named tonal ramp.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Palette {
    /// Display name, also the CSS property infix.
    pub name: String,
    pub strategy: PaletteStrategy,
    /// The seed's canonical triple.
    pub base: Color,
    /// The seed's rendering, reproduced verbatim among the variants.
    pub base_rendering: String,
    /// The step holding the seed. `None` when the seed could not be read.
    pub base_step: Option<Variant>,
    /// Variant → rendered `oklch()` notation.
    pub variants: BTreeMap<Variant, String>,
}

impl Palette {
    /// The rendered color of a variant.
    #[must_use]
    pub fn get(&self, variant: Variant) -> Option<&str> {
        self.variants.get(&variant).map(String::as_str)
    }

    /// Variants in canonical display order.
    pub fn in_order(&self) -> impl Iterator<Item = (Variant, &str)> {
        Variant::ORDER
            .into_iter()
            .filter_map(|v| self.get(v).map(|color| (v, color)))
    }

    /// Whether `variant` is the step that holds the seed.
    ///
    /// Decided by step, not by text: the fade and bright renderings of an
    /// achromatic seed can coincide with the seed's own.
    #[must_use]
    pub fn is_base_step(&self, variant: Variant) -> bool {
        self.base_step == Some(variant)
    }

    /// Whether every variant is the fallback black.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.base_rendering == FALLBACK_RENDERING
            && self.variants.values().all(|c| c == FALLBACK_RENDERING)
    }

    /// A palette whose listed variants are all the fallback black.
    ///
    /// Produced when the seed cannot be read; structurally valid so the
    /// caller never has to special-case it.
    #[must_use]
    pub fn degenerate(name: &str, strategy: PaletteStrategy, variants: &[Variant]) -> Self {
        Self {
            name: name.to_string(),
            strategy,
            base: Color::BLACK,
            base_rendering: FALLBACK_RENDERING.to_string(),
            base_step: None,
            variants: variants
                .iter()
                .map(|v| (*v, FALLBACK_RENDERING.to_string()))
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
