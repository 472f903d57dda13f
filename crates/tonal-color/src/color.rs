// SPDX-License-Identifier: MIT
//
// tonal color model: OKLCH is the single source of truth.
//
// Single-character variable names (r, g, b, l, c, h, s, m) are the
// standard mathematical convention in color science. Renaming them would
// make the code harder to compare against reference implementations.
#![allow(clippy::many_single_char_names)]
//
// Every palette step is computed on an (L, C, H) triple. Hex, HSL and the
// 8-bit device triple used for contrast checks are derived views, produced
// on demand and never stored.
//
// Conversion pipeline:
//
//   OKLCH ↔ Oklab ↔ Linear sRGB ↔ sRGB ↔ 8-bit device RGB
//
// Out-of-gamut results are clamped per channel. Components are f64 so that
// serialized notations do not pick up single-precision noise.

use std::fmt;

use rgb::RGB8;
use serde::Serialize;

use crate::number::format_number;

/// Chroma below this is treated as gray: hue is meaningless and reported as 0.
const ACHROMATIC_EPSILON: f64 = 1e-6;

// ─── Color ───────────────────────────────────────────────────────────────────

/// A perceptual color stored in OKLCH space.
///
/// OKLCH is a cylindrical representation of the Oklab color space, designed
/// by Björn Ottosson. Equal numerical steps in lightness produce roughly
/// equal visual steps, which is what makes it suitable for tonal ramps.
///
/// # Examples
///
/// ```
/// use tonal_color::color::Color;
///
/// let red = Color::oklch(0.505, 0.213, 27.52);
/// let darker = red.darken(0.15);
/// assert!(darker.l < red.l);
///
/// assert_eq!(red.to_css(2), "oklch(50.5% 0.21 27.52)");
/// ```
#[derive(Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    /// Lightness: 0.0 (black) to 1.0 (white).
    pub l: f64,

    /// Chroma (colorfulness): 0.0 (gray) to ~0.37 (most vivid).
    pub c: f64,

    /// Hue angle in degrees: 0.0 to 360.0.
    pub h: f64,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from OKLCH values.
    ///
    /// - `l`: Lightness, 0.0 to 1.0
    /// - `c`: Chroma, 0.0 to ~0.37
    /// - `h`: Hue angle in degrees, 0.0 to 360.0
    #[inline]
    #[must_use]
    pub const fn oklch(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Create a color from sRGB values (0.0 to 1.0 range).
    #[must_use]
    pub fn srgb(r: f64, g: f64, b: f64) -> Self {
        let (l, c, h) = srgb_to_oklch(r, g, b);
        Self { l, c, h }
    }

    /// Create a color from an 8-bit device triple.
    #[must_use]
    pub fn from_rgb8(rgb: RGB8) -> Self {
        Self::srgb(
            f64::from(rgb.r) / 255.0,
            f64::from(rgb.g) / 255.0,
            f64::from(rgb.b) / 255.0,
        )
    }

    /// Create a pure gray at the given OKLCH lightness.
    #[inline]
    #[must_use]
    pub const fn gray(lightness: f64) -> Self {
        Self::oklch(lightness, 0.0, 0.0)
    }

    /// Pure black. Also the fallback for unreadable input.
    pub const BLACK: Self = Self::oklch(0.0, 0.0, 0.0);

    /// Pure white.
    pub const WHITE: Self = Self::oklch(1.0, 0.0, 0.0);

    // ─── Perceptual Operations ───────────────────────────────────────────

    /// Increase lightness by `amount` (clamped to 0.0–1.0).
    #[inline]
    #[must_use]
    pub fn lighten(self, amount: f64) -> Self {
        Self {
            l: (self.l + amount).clamp(0.0, 1.0),
            ..self
        }
    }

    /// Decrease lightness by `amount` (clamped to 0.0–1.0).
    #[inline]
    #[must_use]
    pub fn darken(self, amount: f64) -> Self {
        Self {
            l: (self.l - amount).clamp(0.0, 1.0),
            ..self
        }
    }

    /// Set lightness to an absolute value (clamped to 0.0–1.0).
    #[inline]
    #[must_use]
    pub const fn with_lightness(self, l: f64) -> Self {
        Self {
            l: l.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Set chroma to an absolute value (clamped to >= 0.0).
    #[inline]
    #[must_use]
    pub const fn with_chroma(self, c: f64) -> Self {
        Self {
            c: c.max(0.0),
            ..self
        }
    }

    // ─── Conversions ─────────────────────────────────────────────────────

    /// Convert to sRGB with per-channel clamping to 0.0–1.0.
    #[must_use]
    pub fn to_srgb(self) -> (f64, f64, f64) {
        let (r, g, b) = oklch_to_srgb(self.l, self.c, self.h);
        (r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0))
    }

    /// Rasterize to an 8-bit device triple.
    #[must_use]
    pub fn to_rgb8(self) -> RGB8 {
        let (r, g, b) = self.to_srgb();
        RGB8::new(to_u8(r), to_u8(g), to_u8(b))
    }

    /// CSS `oklch()` notation with lightness as a percentage.
    ///
    /// Each component goes through [`format_number`] with the given precision.
    #[must_use]
    pub fn to_css(self, decimals: usize) -> String {
        format!(
            "oklch({}% {} {})",
            format_number(self.l * 100.0, decimals),
            format_number(self.c, decimals),
            format_number(self.h, decimals),
        )
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color::oklch({:.4}, {:.4}, {:.1})", self.l, self.c, self.h)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css(crate::number::EXACT_DECIMALS))
    }
}

impl Default for Color {
    /// Default is black.
    fn default() -> Self {
        Self::BLACK
    }
}

// ─── Device RGB views ────────────────────────────────────────────────────────

/// `#rrggbb`, two lower-case zero-padded digits per channel.
#[must_use]
pub fn rgb8_to_hex(rgb: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

/// HSL components of a device triple: hue in degrees, saturation and
/// lightness in percent, each rounded to the nearest integer.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::float_cmp)]
pub fn rgb8_to_hsl(rgb: RGB8) -> (u16, u8, u8) {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (h / 6.0, s)
    };

    // All three are non-negative and bounded (360, 100, 100).
    (
        (h * 360.0).round() as u16,
        (s * 100.0).round() as u8,
        (l * 100.0).round() as u8,
    )
}

/// `hsl(D, S%, L%)`.
#[must_use]
pub fn rgb8_to_hsl_string(rgb: RGB8) -> String {
    let (h, s, l) = rgb8_to_hsl(rgb);
    format!("hsl({h}, {s}%, {l}%)")
}

/// Convert HSL (hue in degrees, saturation and lightness 0.0–1.0) to sRGB.
#[must_use]
pub fn hsl_to_srgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let h = normalize_hue(h) / 360.0;
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    if s == 0.0 {
        return (l, l, l);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0f64.mul_add(l, -q);
    (
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    )
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };
    if t < 1.0 / 6.0 {
        ((q - p) * 6.0).mul_add(t, p)
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        ((q - p) * (2.0 / 3.0 - t)).mul_add(6.0, p)
    } else {
        p
    }
}

// ─── Color Space Conversion Functions ────────────────────────────────────────
//
// Oklab math by Björn Ottosson.
// Reference: https://bottosson.github.io/posts/oklab/
//
// Pipeline: OKLCH ↔ Oklab ↔ Linear sRGB ↔ sRGB

/// Normalize a hue angle to the range [0, 360).
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    let h = h % 360.0;
    if h < 0.0 { h + 360.0 } else { h }
}

// ─── OKLCH ↔ Oklab ──────────────────────────────────────────────────────────

/// Convert OKLCH chroma and hue to Oklab a, b components.
#[inline]
fn oklch_to_oklab_ab(c: f64, h: f64) -> (f64, f64) {
    let h_rad = h.to_radians();
    (c * h_rad.cos(), c * h_rad.sin())
}

/// Convert Oklab a, b components to OKLCH chroma and hue.
#[inline]
fn oklab_ab_to_oklch(a: f64, b: f64) -> (f64, f64) {
    let c = a.hypot(b);
    if c < ACHROMATIC_EPSILON {
        // Hue is undefined for grays.
        return (0.0, 0.0);
    }
    (c, normalize_hue(b.atan2(a).to_degrees()))
}

// ─── Oklab ↔ Linear sRGB ────────────────────────────────────────────────────
//
// Goes through an intermediate LMS (cone response) space.

fn oklab_to_linear_srgb(l_ok: f64, a: f64, b: f64) -> (f64, f64, f64) {
    let l_ = 0.215_803_757_3f64.mul_add(b, 0.396_337_777_4f64.mul_add(a, l_ok));
    let m_ = (-0.063_854_172_8f64).mul_add(b, (-0.105_561_345_8f64).mul_add(a, l_ok));
    let s_ = (-1.291_485_548_0f64).mul_add(b, (-0.089_484_177_5f64).mul_add(a, l_ok));

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    (
        0.230_969_929_2f64.mul_add(s, 4.076_741_662_1f64.mul_add(l, -(3.307_711_591_3 * m))),
        (-0.341_319_396_5f64).mul_add(s, (-1.268_438_004_6f64).mul_add(l, 2.609_757_401_1 * m)),
        1.707_614_701_0f64.mul_add(s, (-0.004_196_086_3f64).mul_add(l, -(0.703_418_614_7 * m))),
    )
}

fn linear_srgb_to_oklab(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let l = 0.051_445_992_9f64.mul_add(b, 0.412_221_470_8f64.mul_add(r, 0.536_332_536_3 * g));
    let m = 0.107_396_956_6f64.mul_add(b, 0.211_903_498_2f64.mul_add(r, 0.680_699_545_1 * g));
    let s = 0.629_978_700_5f64.mul_add(b, 0.088_302_461_9f64.mul_add(r, 0.281_718_837_6 * g));

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    (
        (-0.004_072_046_8f64).mul_add(s_, 0.210_454_255_3f64.mul_add(l_, 0.793_617_785_0 * m_)),
        0.450_593_709_9f64.mul_add(s_, 1.977_998_495_1f64.mul_add(l_, -(2.428_592_205_0 * m_))),
        (-0.808_675_766_0f64).mul_add(s_, 0.025_904_037_1f64.mul_add(l_, 0.782_771_766_2 * m_)),
    )
}

// ─── Linear sRGB ↔ sRGB (Gamma) ─────────────────────────────────────────────

/// Convert a single linear sRGB component to sRGB (apply gamma).
#[inline]
#[must_use]
pub fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055f64.mul_add(c.powf(1.0 / 2.4), -0.055)
    }
}

/// Convert a single sRGB component to linear sRGB (remove gamma).
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ─── Composite Conversions ───────────────────────────────────────────────────

fn srgb_to_oklch(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let (l, a, b_ok) = linear_srgb_to_oklab(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b));
    let (c, h) = oklab_ab_to_oklch(a, b_ok);
    (l, c, h)
}

/// OKLCH → sRGB (0.0–1.0, may be out of gamut).
fn oklch_to_srgb(l: f64, c: f64, h: f64) -> (f64, f64, f64) {
    let (a, b) = oklch_to_oklab_ab(c, h);
    let (lr, lg, lb) = oklab_to_linear_srgb(l, a, b);
    (linear_to_srgb(lr), linear_to_srgb(lg), linear_to_srgb(lb))
}

/// Convert a float (0.0–1.0) to a u8 (0–255) with correct rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
