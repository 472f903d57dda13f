//! Tonal steps: variant names, canonical order, and luminosity bands.
//!
//! Every palette is a map from [`Variant`] to a rendered color. Display and
//! CSS order are imposed by [`Variant::ORDER`], never by insertion order.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Variant
// ---------------------------------------------------------------------------

/// A named tonal entry in a palette.
///
/// The derived `Ord` follows the canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Variant {
    #[serde(rename = "50")]
    S50,
    #[serde(rename = "100")]
    S100,
    #[serde(rename = "200")]
    S200,
    #[serde(rename = "300")]
    S300,
    #[serde(rename = "400")]
    S400,
    #[serde(rename = "500")]
    S500,
    #[serde(rename = "600")]
    S600,
    #[serde(rename = "700")]
    S700,
    #[serde(rename = "800")]
    S800,
    #[serde(rename = "900")]
    S900,
    /// Seed luminosity and hue, reduced chroma.
    #[serde(rename = "fade")]
    Fade,
    /// Seed luminosity and hue, boosted chroma.
    #[serde(rename = "bright")]
    Bright,
    /// Pure white; only the gray ramp carries it.
    #[serde(rename = "white")]
    White,
    /// Pure black; only the gray ramp carries it.
    #[serde(rename = "black")]
    Black,
}

impl Variant {
    /// Canonical display order.
    pub const ORDER: [Self; 14] = [
        Self::S50,
        Self::S100,
        Self::S200,
        Self::S300,
        Self::S400,
        Self::S500,
        Self::S600,
        Self::S700,
        Self::S800,
        Self::S900,
        Self::Fade,
        Self::Bright,
        Self::White,
        Self::Black,
    ];

    /// The ten luminosity steps, lightest first.
    pub const TONAL: [Self; 10] = [
        Self::S50,
        Self::S100,
        Self::S200,
        Self::S300,
        Self::S400,
        Self::S500,
        Self::S600,
        Self::S700,
        Self::S800,
        Self::S900,
    ];

    /// The twelve entries of an adaptive palette.
    pub const ADAPTIVE: [Self; 12] = [
        Self::S50,
        Self::S100,
        Self::S200,
        Self::S300,
        Self::S400,
        Self::S500,
        Self::S600,
        Self::S700,
        Self::S800,
        Self::S900,
        Self::Fade,
        Self::Bright,
    ];

    /// The name used in labels and CSS properties.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::S50 => "50",
            Self::S100 => "100",
            Self::S200 => "200",
            Self::S300 => "300",
            Self::S400 => "400",
            Self::S500 => "500",
            Self::S600 => "600",
            Self::S700 => "700",
            Self::S800 => "800",
            Self::S900 => "900",
            Self::Fade => "fade",
            Self::Bright => "bright",
            Self::White => "white",
            Self::Black => "black",
        }
    }

    /// `white` and `black` are global: they are named without a palette prefix.
    #[must_use]
    pub const fn is_global(self) -> bool {
        matches!(self, Self::White | Self::Black)
    }

    /// Swatch label: `<palette>-<variant>`, or the bare name for globals.
    #[must_use]
    pub fn label(self, palette: &str) -> String {
        if self.is_global() {
            self.as_str().to_string()
        } else {
            format!("{palette}-{}", self.as_str())
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a variant name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown palette variant `{0}`")]
pub struct UnknownVariant(pub String);

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ORDER
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Luminosity bands
// ---------------------------------------------------------------------------

/// An inclusive luminosity range, in percent, owned by one tonal step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LuminosityBand {
    pub step: Variant,
    pub min: u8,
    pub max: u8,
}

impl LuminosityBand {
    /// Whether `percent` falls inside this band (both ends inclusive).
    #[must_use]
    pub fn contains(self, percent: f64) -> bool {
        f64::from(self.min) <= percent && percent <= f64::from(self.max)
    }

    /// Band midpoint as a ratio (e.g. `[90, 99]` → `0.945`).
    #[must_use]
    pub fn midpoint(self) -> f64 {
        (f64::from(self.min) + f64::from(self.max)) / 2.0 / 100.0
    }
}

const fn band(step: Variant, min: u8, max: u8) -> LuminosityBand {
    LuminosityBand { step, min, max }
}

/// Step → luminosity band, in lookup order. `50` and `100` are both pinned
/// to 100%; `200`–`900` cover one decade each.
pub const LUMINOSITY_BANDS: [LuminosityBand; 10] = [
    band(Variant::S50, 100, 100),
    band(Variant::S100, 100, 100),
    band(Variant::S200, 90, 99),
    band(Variant::S300, 80, 89),
    band(Variant::S400, 70, 79),
    band(Variant::S500, 60, 69),
    band(Variant::S600, 50, 59),
    band(Variant::S700, 40, 49),
    band(Variant::S800, 30, 39),
    band(Variant::S900, 20, 29),
];

/// The step a luminosity (in percent) belongs to.
///
/// The first band in table order that contains `percent` wins, so 100%
/// maps to `50`. Anything no band covers (below 20%, above 100%, the gap
/// between 99% and 100%, or non-integral values between two decades such
/// as 89.5%) maps to `900`. That default is policy, not an error.
#[must_use]
pub fn step_for_luminosity(percent: f64) -> Variant {
    LUMINOSITY_BANDS
        .iter()
        .find(|b| b.contains(percent))
        .map_or(Variant::S900, |b| b.step)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn order_matches_ord() {
        let mut sorted = Variant::ORDER;
        sorted.sort();
        assert_eq!(sorted, Variant::ORDER);
    }

    #[test]
    fn names_round_trip() {
        for v in Variant::ORDER {
            assert_eq!(v.as_str().parse::<Variant>(), Ok(v));
        }
        assert!("1000".parse::<Variant>().is_err());
    }

    #[test]
    fn labels() {
        assert_eq!(Variant::S500.label("red"), "red-500");
        assert_eq!(Variant::Fade.label("brand"), "brand-fade");
        assert_eq!(Variant::White.label("gray"), "white");
        assert_eq!(Variant::Black.label("gray"), "black");
    }

    #[test]
    fn full_luminosity_is_step_50() {
        assert_eq!(step_for_luminosity(100.0), Variant::S50);
    }

    #[test]
    fn decades_map_to_steps() {
        assert_eq!(step_for_luminosity(99.0), Variant::S200);
        assert_eq!(step_for_luminosity(90.0), Variant::S200);
        assert_eq!(step_for_luminosity(84.5), Variant::S300);
        assert_eq!(step_for_luminosity(62.3), Variant::S500);
        assert_eq!(step_for_luminosity(50.54), Variant::S600);
        assert_eq!(step_for_luminosity(20.0), Variant::S900);
    }

    #[test]
    fn uncovered_luminosity_defaults_to_900() {
        assert_eq!(step_for_luminosity(10.0), Variant::S900);
        assert_eq!(step_for_luminosity(-5.0), Variant::S900);
        assert_eq!(step_for_luminosity(150.0), Variant::S900);
        assert_eq!(step_for_luminosity(99.5), Variant::S900);
        assert_eq!(step_for_luminosity(89.5), Variant::S900);
    }

    #[test]
    fn bands_partition_decades() {
        let tail = &LUMINOSITY_BANDS[2..];
        for pair in tail.windows(2) {
            assert_eq!(pair[0].min, pair[1].max + 1);
        }
        assert_eq!(tail.first().map(|b| b.max), Some(99));
        assert_eq!(tail.last().map(|b| b.min), Some(20));
    }

    #[test]
    fn midpoints() {
        assert!((LUMINOSITY_BANDS[2].midpoint() - 0.945).abs() < 1e-12);
        assert!((LUMINOSITY_BANDS[9].midpoint() - 0.245).abs() < 1e-12);
    }
}
