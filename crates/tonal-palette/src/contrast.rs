//! WCAG contrast evaluation and text-color selection for swatches.
//!
//! Every swatch gets either white or black text. The choice works on the
//! 8-bit device color, in sRGB relative luminance space (WCAG 2.1), against
//! the AA threshold for normal text.

use std::fmt;

use rgb::RGB8;
use serde::Serialize;
use tonal_color::{ColorRenderer, device_rgb};
use tracing::debug;

/// WCAG AA minimum contrast for normal text.
pub const AA_NORMAL: f64 = 4.5;

const WHITE: RGB8 = RGB8::new(255, 255, 255);
const BLACK: RGB8 = RGB8::new(0, 0, 0);

/// WCAG 2.0 channel linearization (threshold `0.03928`).
fn linearize(channel: u8) -> f64 {
    let v = f64::from(channel) / 255.0;
    if v <= 0.039_28 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of an 8-bit sRGB color, in `[0, 1]`.
///
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
#[must_use]
pub fn relative_luminance(rgb: RGB8) -> f64 {
    0.2126f64.mul_add(
        linearize(rgb.r),
        0.7152f64.mul_add(linearize(rgb.g), 0.0722 * linearize(rgb.b)),
    )
}

/// WCAG contrast ratio between two colors, in `[1, 21]`.
///
/// Symmetric: argument order does not matter.
#[must_use]
pub fn contrast_ratio(a: RGB8, b: RGB8) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Text color placed on a swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextColor {
    White,
    Black,
}

impl TextColor {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
        }
    }

    /// The device color of the text.
    #[must_use]
    pub const fn rgb(self) -> RGB8 {
        match self {
            Self::White => WHITE,
            Self::Black => BLACK,
        }
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick the text color from the two contrast ratios.
///
/// Ties go to white in every branch.
fn choose(white: f64, black: f64) -> TextColor {
    let white_ok = white >= AA_NORMAL;
    let black_ok = black >= AA_NORMAL;
    let higher = if white >= black {
        TextColor::White
    } else {
        TextColor::Black
    };

    match (white_ok, black_ok) {
        // Both readable: prefer the stronger one.
        (true, true) => higher,
        (true, false) => TextColor::White,
        (false, true) => TextColor::Black,
        // Neither meets AA: still take the better of the two.
        (false, false) => higher,
    }
}

/// Text color for a background.
#[must_use]
pub fn decide_text_color(background: RGB8) -> TextColor {
    ContrastReport::evaluate(background).text
}

/// Contrast of a background against both text candidates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContrastReport {
    /// Ratio of white text on this background.
    pub white: f64,
    /// Ratio of black text on this background.
    pub black: f64,
    /// The chosen text color.
    pub text: TextColor,
}

impl ContrastReport {
    #[must_use]
    pub fn evaluate(background: RGB8) -> Self {
        let white = contrast_ratio(background, WHITE);
        let black = contrast_ratio(background, BLACK);
        Self {
            white,
            black,
            text: choose(white, black),
        }
    }

    /// Evaluate a rendered color expression.
    ///
    /// `None` when the renderer cannot turn it into RGB.
    #[must_use]
    pub fn for_color(renderer: &dyn ColorRenderer, color: &str) -> Option<Self> {
        let report = device_rgb(renderer, color).map(Self::evaluate);
        debug!(color, ?report, "evaluated contrast");
        report
    }

    #[must_use]
    pub fn white_passes_aa(&self) -> bool {
        self.white >= AA_NORMAL
    }

    #[must_use]
    pub fn black_passes_aa(&self) -> bool {
        self.black >= AA_NORMAL
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tonal_color::SoftwareRenderer;

    fn gray(v: u8) -> RGB8 {
        RGB8::new(v, v, v)
    }

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // ── Relative luminance ──────────────────────────────────────────

    #[test]
    fn luminance_extremes() {
        assert!(approx_eq(relative_luminance(BLACK), 0.0, 1e-12));
        assert!(approx_eq(relative_luminance(WHITE), 1.0, 1e-12));
    }

    #[test]
    fn luminance_primaries() {
        assert!(approx_eq(relative_luminance(RGB8::new(255, 0, 0)), 0.2126, 1e-9));
        assert!(approx_eq(relative_luminance(RGB8::new(0, 255, 0)), 0.7152, 1e-9));
        assert!(approx_eq(relative_luminance(RGB8::new(0, 0, 255)), 0.0722, 1e-9));
    }

    #[test]
    fn luminance_dark_channel_is_linear() {
        // 10/255 sits below the 0.03928 knee.
        assert!(approx_eq(relative_luminance(gray(10)), 10.0 / 255.0 / 12.92, 1e-12));
    }

    // ── Contrast ratio ──────────────────────────────────────────────

    #[test]
    fn contrast_bounds() {
        assert!(approx_eq(contrast_ratio(WHITE, WHITE), 1.0, 1e-12));
        assert!(approx_eq(contrast_ratio(WHITE, BLACK), 21.0, 1e-9));
    }

    #[test]
    fn contrast_is_symmetric() {
        let a = RGB8::new(0x3b, 0x82, 0xf6);
        let b = RGB8::new(0xb9, 0x1c, 0x1c);
        assert!(approx_eq(contrast_ratio(a, b), contrast_ratio(b, a), 1e-12));
    }

    #[test]
    fn gray_on_white() {
        let ratio = contrast_ratio(gray(0x76), WHITE);
        assert!(approx_eq(ratio, 4.54, 0.01), "{ratio}");
    }

    // ── Text color decision ─────────────────────────────────────────

    #[test]
    fn extremes_take_opposite_text() {
        assert_eq!(decide_text_color(BLACK), TextColor::White);
        assert_eq!(decide_text_color(WHITE), TextColor::Black);
        assert_eq!(decide_text_color(RGB8::new(255, 255, 0)), TextColor::Black);
        assert_eq!(decide_text_color(RGB8::new(0, 0, 255)), TextColor::White);
    }

    #[test]
    fn only_one_passing_wins() {
        // White 3.68, black 5.71.
        let r = ContrastReport::evaluate(RGB8::new(0x3b, 0x82, 0xf6));
        assert!(!r.white_passes_aa());
        assert!(r.black_passes_aa());
        assert_eq!(r.text, TextColor::Black);

        // White 6.47, black 3.25.
        let r = ContrastReport::evaluate(RGB8::new(0xb9, 0x1c, 0x1c));
        assert!(r.white_passes_aa());
        assert!(!r.black_passes_aa());
        assert_eq!(r.text, TextColor::White);
    }

    #[test]
    fn both_passing_prefers_higher() {
        // #757575: white 4.61, black 4.56.
        let r = ContrastReport::evaluate(gray(0x75));
        assert!(r.white_passes_aa() && r.black_passes_aa());
        assert_eq!(r.text, TextColor::White);

        // #767676: white 4.54, black 4.62.
        let r = ContrastReport::evaluate(gray(0x76));
        assert!(r.white_passes_aa() && r.black_passes_aa());
        assert_eq!(r.text, TextColor::Black);
    }

    #[test]
    fn neither_passing_prefers_higher() {
        assert_eq!(choose(3.0, 4.0), TextColor::Black);
        assert_eq!(choose(4.0, 3.0), TextColor::White);
    }

    #[test]
    fn ties_go_to_white() {
        assert_eq!(choose(4.0, 4.0), TextColor::White);
        assert_eq!(choose(5.0, 5.0), TextColor::White);
    }

    #[test]
    fn decision_is_deterministic() {
        for v in 0..=255u8 {
            assert_eq!(decide_text_color(gray(v)), decide_text_color(gray(v)));
        }
    }

    #[test]
    fn unconvertible_color_gets_black_text() {
        assert_eq!(ContrastReport::for_color(&SoftwareRenderer, "nonsense"), None);
        let black = ContrastReport::for_color(&SoftwareRenderer, "oklch(0% 0 0)").unwrap();
        assert_eq!(black.text, TextColor::White);
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_value(ContrastReport::evaluate(BLACK)).unwrap();
        assert_eq!(json["text"], "white");
    }
}
