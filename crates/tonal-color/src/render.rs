// SPDX-License-Identifier: MIT
//
// The color-rendering capability.
//
// Turning an arbitrary color expression into a canonical device color is
// delegated to a `ColorRenderer`. The conversion layer only ever sees the
// rendered notation text, which it reads back with the grammar in
// `notation`. Swapping renderers (a browser engine, a test stub) never
// touches the palette math.
//
// `SoftwareRenderer` is the deterministic in-process implementation: the
// same input string always renders to the same text, bit for bit.

use rgb::RGB8;

use crate::color::{Color, hsl_to_srgb, normalize_hue, to_u8};
use crate::notation::{self, RgbNotation};
use crate::number::format_number;

/// Decimal precision used when rendering OKLCH components.
const RENDER_DECIMALS: usize = 6;

/// The notation a renderer is asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notation {
    /// `oklch(L C H)` or `oklch(L C H / A)`.
    Oklch,
    /// `rgb(r, g, b)` or `rgba(r, g, b, a)`.
    Rgb,
}

/// Renders a color expression into a target notation.
///
/// Implementations must be deterministic and side-effect free. An input
/// the renderer cannot interpret is returned in whatever form the
/// renderer falls back to; the caller's notation parser decides whether
/// the result is usable.
pub trait ColorRenderer {
    fn render(&self, input: &str, target: Notation) -> String;
}

impl<R: ColorRenderer + ?Sized> ColorRenderer for &R {
    fn render(&self, input: &str, target: Notation) -> String {
        (**self).render(input, target)
    }
}

// ─── SoftwareRenderer ────────────────────────────────────────────────────────

/// Deterministic renderer for hex, named, `rgb()`, `hsl()` and `oklch()`
/// inputs.
///
/// Inputs it does not understand are echoed back unchanged, like a style
/// engine that ignores an invalid value.
///
/// ```
/// use tonal_color::render::{ColorRenderer, Notation, SoftwareRenderer};
///
/// let r = SoftwareRenderer;
/// assert_eq!(r.render("red", Notation::Rgb), "rgb(255, 0, 0)");
/// assert_eq!(r.render("banana", Notation::Oklch), "banana");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct SoftwareRenderer;

/// An interpreted input: the perceptual color, the exact device bytes when
/// the input was device-referred, and its opacity.
struct Paint {
    color: Color,
    device: Option<RGB8>,
    alpha: f64,
}

impl SoftwareRenderer {
    fn interpret(input: &str) -> Option<Paint> {
        let text = input.trim();

        let device = |n: RgbNotation| Paint {
            color: Color::from_rgb8(n.rgb),
            device: Some(n.rgb),
            alpha: n.alpha.unwrap_or(1.0),
        };

        if text.starts_with('#') {
            return notation::parse_hex(text).ok().map(device);
        }
        if let Some(rgb) = named_color(text) {
            return Some(Paint {
                color: Color::from_rgb8(rgb),
                device: Some(rgb),
                alpha: 1.0,
            });
        }
        if let Ok(n) = notation::parse_rgb(text) {
            return Some(device(n));
        }
        if let Ok(n) = notation::parse_hsl(text) {
            let (r, g, b) = hsl_to_srgb(n.h, n.s, n.l);
            return Some(Paint {
                color: Color::srgb(r, g, b),
                device: Some(RGB8::new(to_u8(r), to_u8(g), to_u8(b))),
                alpha: n.alpha.unwrap_or(1.0),
            });
        }
        if let Ok(n) = notation::parse_oklch(text) {
            return Some(Paint {
                color: Color::oklch(n.l.clamp(0.0, 1.0), n.c, normalize_hue(n.h)),
                device: None,
                alpha: n.alpha.unwrap_or(1.0),
            });
        }
        None
    }
}

impl ColorRenderer for SoftwareRenderer {
    fn render(&self, input: &str, target: Notation) -> String {
        let Some(paint) = Self::interpret(input) else {
            return input.to_string();
        };
        let translucent = paint.alpha < 1.0;

        match target {
            Notation::Oklch => {
                let Color { l, c, h } = paint.color;
                let body = format!(
                    "{} {} {}",
                    format_number(l, RENDER_DECIMALS),
                    format_number(c, RENDER_DECIMALS),
                    format_number(h, RENDER_DECIMALS),
                );
                if translucent {
                    format!("oklch({body} / {})", format_number(paint.alpha, 3))
                } else {
                    format!("oklch({body})")
                }
            }
            Notation::Rgb => {
                let rgb = paint.device.unwrap_or_else(|| paint.color.to_rgb8());
                if translucent {
                    format!(
                        "rgba({}, {}, {}, {})",
                        rgb.r,
                        rgb.g,
                        rgb.b,
                        format_number(paint.alpha, 3)
                    )
                } else {
                    format!("rgb({}, {}, {})", rgb.r, rgb.g, rgb.b)
                }
            }
        }
    }
}

// ─── Named colors ────────────────────────────────────────────────────────────

/// CSS named colors, sorted by name for binary search.
const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("aqua", [0, 255, 255]),
    ("black", [0, 0, 0]),
    ("blue", [0, 0, 255]),
    ("brown", [165, 42, 42]),
    ("coral", [255, 127, 80]),
    ("crimson", [220, 20, 60]),
    ("cyan", [0, 255, 255]),
    ("darkblue", [0, 0, 139]),
    ("darkgreen", [0, 100, 0]),
    ("darkred", [139, 0, 0]),
    ("fuchsia", [255, 0, 255]),
    ("gold", [255, 215, 0]),
    ("gray", [128, 128, 128]),
    ("green", [0, 128, 0]),
    ("grey", [128, 128, 128]),
    ("hotpink", [255, 105, 180]),
    ("indigo", [75, 0, 130]),
    ("lime", [0, 255, 0]),
    ("magenta", [255, 0, 255]),
    ("maroon", [128, 0, 0]),
    ("navy", [0, 0, 128]),
    ("olive", [128, 128, 0]),
    ("orange", [255, 165, 0]),
    ("orchid", [218, 112, 214]),
    ("pink", [255, 192, 203]),
    ("purple", [128, 0, 128]),
    ("rebeccapurple", [102, 51, 153]),
    ("red", [255, 0, 0]),
    ("royalblue", [65, 105, 225]),
    ("salmon", [250, 128, 114]),
    ("seagreen", [46, 139, 87]),
    ("silver", [192, 192, 192]),
    ("skyblue", [135, 206, 235]),
    ("slategray", [112, 128, 144]),
    ("steelblue", [70, 130, 180]),
    ("teal", [0, 128, 128]),
    ("tomato", [255, 99, 71]),
    ("turquoise", [64, 224, 208]),
    ("violet", [238, 130, 238]),
    ("white", [255, 255, 255]),
    ("yellow", [255, 255, 0]),
];

/// Look up a CSS named color (case-insensitive).
#[must_use]
pub fn named_color(name: &str) -> Option<RGB8> {
    let name = name.to_ascii_lowercase();
    NAMED_COLORS
        .binary_search_by(|(n, _)| n.cmp(&name.as_str()))
        .ok()
        .map(|idx| {
            let [r, g, b] = NAMED_COLORS[idx].1;
            RGB8::new(r, g, b)
        })
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn named_table_is_sorted() {
        assert!(NAMED_COLORS.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn named_lookup_is_case_insensitive() {
        assert_eq!(named_color("RebeccaPurple"), Some(RGB8::new(102, 51, 153)));
        assert_eq!(named_color("notacolor"), None);
    }

    #[test]
    fn hex_renders_device_bytes_exactly() {
        let r = SoftwareRenderer;
        assert_eq!(r.render("#b91c1c", Notation::Rgb), "rgb(185, 28, 28)");
        assert_eq!(r.render("  #B91C1C ", Notation::Rgb), "rgb(185, 28, 28)");
    }

    #[test]
    fn translucent_inputs_keep_alpha() {
        let r = SoftwareRenderer;
        assert_eq!(r.render("#ff000080", Notation::Rgb), "rgba(255, 0, 0, 0.502)");
        assert!(r.render("rgb(0 0 255 / 0.5)", Notation::Oklch).ends_with(" / 0.5)"));
    }

    #[test]
    fn white_renders_as_unit_lightness() {
        let r = SoftwareRenderer;
        assert_eq!(r.render("white", Notation::Oklch), "oklch(1 0 0)");
        assert_eq!(r.render("#000", Notation::Oklch), "oklch(0 0 0)");
    }

    #[test]
    fn oklch_input_round_trips() {
        let r = SoftwareRenderer;
        assert_eq!(r.render("oklch(50% 0.1 120)", Notation::Oklch), "oklch(0.5 0.1 120)");
        assert_eq!(r.render("oklch(100% 0 0)", Notation::Rgb), "rgb(255, 255, 255)");
    }

    #[test]
    fn hsl_input_renders() {
        let r = SoftwareRenderer;
        assert_eq!(r.render("hsl(120, 100%, 25%)", Notation::Rgb), "rgb(0, 128, 0)");
    }

    #[test]
    fn hsl_input_keeps_device_bytes() {
        let r = SoftwareRenderer;
        assert_eq!(r.render("hsl(240, 100%, 25%)", Notation::Rgb), "rgb(0, 0, 128)");
        assert_eq!(r.render("hsl(0, 0%, 50%)", Notation::Rgb), "rgb(128, 128, 128)");
    }

    #[test]
    fn unknown_input_is_echoed() {
        let r = SoftwareRenderer;
        assert_eq!(r.render("not a color", Notation::Oklch), "not a color");
        assert_eq!(r.render("#zzzzzz", Notation::Rgb), "#zzzzzz");
    }

    #[test]
    fn rendering_is_deterministic() {
        let r = SoftwareRenderer;
        let a = r.render("#187c3e", Notation::Oklch);
        let b = r.render("#187c3e", Notation::Oklch);
        assert_eq!(a, b);
    }
}
