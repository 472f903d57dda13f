//! Presentation: swatches, CSS custom properties, and the plain-text table.
//!
//! Everything here is total. A color the renderer cannot rasterize gets the
//! fallback Hex/HSL strings, no contrast report, and black text.

use std::collections::HashSet;

use serde::Serialize;
use tonal_color::number::DEFAULT_DECIMALS;
use tonal_color::{Color, ColorRenderer, to_hex, to_hsl};

use crate::contrast::{ContrastReport, TextColor};
use crate::palette::{Palette, PaletteStrategy};
use crate::step::Variant;

/// One displayed color of a palette.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Swatch {
    pub variant: Variant,
    /// `<palette>-<variant>`, or bare `white`/`black`.
    pub label: String,
    /// The rendered `oklch()` notation, exactly as stored in the palette.
    pub oklch: String,
    pub hex: String,
    pub hsl: String,
    /// `None` when the color has no RGB form.
    pub contrast: Option<ContrastReport>,
    pub text: TextColor,
    /// The swatch shows the palette's own seed.
    pub is_user_color: bool,
    /// Highlight ring for the seed swatch: darker and more saturated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline: Option<String>,
}

impl Swatch {
    #[must_use]
    pub fn new(palette: &Palette, variant: Variant, oklch: &str, renderer: &dyn ColorRenderer) -> Self {
        let contrast = ContrastReport::for_color(renderer, oklch);
        let is_user_color = palette.is_base_step(variant);
        Self {
            variant,
            label: variant.label(&palette.name),
            oklch: oklch.to_string(),
            hex: to_hex(renderer, oklch),
            hsl: to_hsl(renderer, oklch),
            contrast,
            text: contrast.map_or(TextColor::Black, |c| c.text),
            is_user_color,
            outline: is_user_color.then(|| outline_for(palette.base)),
        }
    }

    /// `white 4.54 √  black 4.62 √`, or `n/a` without a report.
    #[must_use]
    pub fn contrast_summary(&self) -> String {
        self.contrast.map_or_else(
            || "n/a".to_string(),
            |c| {
                format!(
                    "white {:>5.2}{}  black {:>5.2}{}",
                    c.white,
                    check_mark(c.white_passes_aa()),
                    c.black,
                    check_mark(c.black_passes_aa()),
                )
            },
        )
    }

    /// One line of the plain-text table.
    #[must_use]
    pub fn table_row(&self) -> String {
        format!(
            "{} {:<18} {:<32} {:<8} {:<20} {:<28} {}",
            if self.is_user_color { '*' } else { ' ' },
            self.label,
            self.oklch,
            self.hex,
            self.hsl,
            self.contrast_summary(),
            self.text,
        )
    }
}

const fn check_mark(passes: bool) -> &'static str {
    if passes { " √" } else { "  " }
}

fn outline_for(base: Color) -> String {
    Color::oklch(base.l * 0.8, base.c * 1.2, base.h).to_css(DEFAULT_DECIMALS)
}

/// Swatches of a palette in canonical order.
#[must_use]
pub fn swatches(palette: &Palette, renderer: &dyn ColorRenderer) -> Vec<Swatch> {
    palette
        .in_order()
        .map(|(variant, oklch)| Swatch::new(palette, variant, oklch, renderer))
        .collect()
}

/// A palette together with its evaluated swatches, for JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct PaletteReport<'a> {
    pub name: &'a str,
    pub strategy: PaletteStrategy,
    pub base: &'a str,
    pub swatches: Vec<Swatch>,
}

impl<'a> PaletteReport<'a> {
    #[must_use]
    pub fn new(palette: &'a Palette, renderer: &dyn ColorRenderer) -> Self {
        Self {
            name: &palette.name,
            strategy: palette.strategy,
            base: &palette.base_rendering,
            swatches: swatches(palette, renderer),
        }
    }
}

/// CSS custom property name of a variant.
#[must_use]
pub fn property_name(palette: &str, variant: Variant) -> String {
    format!("--color-{}", variant.label(palette))
}

/// Serialize palettes into a `:root { ... }` block of custom properties.
///
/// Variants follow the canonical order within each palette. `white` and
/// `black` are global names, so only their first occurrence is emitted.
#[must_use]
pub fn css_custom_properties(palettes: &[Palette]) -> String {
    let mut lines = vec![":root {".to_string()];
    let mut globals = HashSet::new();

    for palette in palettes {
        for (variant, color) in palette.in_order() {
            if variant.is_global() && !globals.insert(variant) {
                continue;
            }
            lines.push(format!("  {}: {color};", property_name(&palette.name, variant)));
        }
    }

    lines.push("}".to_string());
    lines.join("\n")
}

/// Plain-text table: a heading per palette, one row per swatch.
#[must_use]
pub fn table(palettes: &[Palette], renderer: &dyn ColorRenderer) -> String {
    let mut out = String::new();
    for (i, palette) in palettes.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&palette.name);
        out.push('\n');
        for swatch in swatches(palette, renderer) {
            out.push_str(swatch.table_row().trim_end());
            out.push('\n');
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
