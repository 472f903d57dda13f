// SPDX-License-Identifier: MIT
//
// Color notation grammar.
//
// A small hand-written parser for the notations a renderer emits and a
// user types:
//
//   notation  := ident "(" args ")"
//   args      := component (sep component)* [ "/" component ]
//   sep       := "," | whitespace
//   component := number [ "%" | "deg" ] | "none"
//
// plus hex literals (#rgb, #rgba, #rrggbb, #rrggbbaa). The generic layer
// produces a `Function`; the typed readers (`parse_oklch`, `parse_rgb`,
// `parse_hsl`) check arity and units and return a typed value or a
// `ParseFailure`. Nothing is ever half-matched.

use rgb::RGB8;

use crate::color::to_u8;
use crate::error::ParseFailure;

// ─── Generic functional notation ─────────────────────────────────────────────

/// One argument of a functional notation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Component {
    /// A bare number (`0.5`, `255`). `none` reads as `Number(0.0)`.
    Number(f64),
    /// A percentage (`50%` is stored as `50.0`).
    Percent(f64),
    /// An angle with an explicit `deg` unit.
    Degrees(f64),
}

impl Component {
    /// The raw numeric value, whatever the unit.
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Number(v) | Self::Percent(v) | Self::Degrees(v) => v,
        }
    }
}

/// A parsed `name(args / alpha)` expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    /// Lower-cased function name.
    pub name: String,
    /// Arguments before the slash.
    pub args: Vec<Component>,
    /// Argument after the slash, if any.
    pub alpha: Option<Component>,
}

/// Parse any functional notation.
///
/// # Errors
///
/// Returns [`ParseFailure`] when the text is not of the form
/// `ident(args)` or an argument is not a finite number.
pub fn parse_function(input: &str) -> Result<Function, ParseFailure> {
    let text = input.trim();

    let open = text
        .find('(')
        .ok_or_else(|| ParseFailure::new(input, "expected `(`"))?;
    let inner = text[open + 1..]
        .strip_suffix(')')
        .ok_or_else(|| ParseFailure::new(input, "expected closing `)`"))?;

    let name = text[..open].trim();
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(ParseFailure::new(input, "invalid function name"));
    }
    if inner.contains('(') || inner.contains(')') {
        return Err(ParseFailure::new(input, "nested expressions are not supported"));
    }

    let (main, alpha) = match inner.split_once('/') {
        Some((main, alpha)) => (main, Some(alpha)),
        None => (inner, None),
    };

    let args = split_args(main)
        .map(|token| parse_component(input, token))
        .collect::<Result<Vec<_>, _>>()?;
    if args.is_empty() {
        return Err(ParseFailure::new(input, "no arguments"));
    }

    let alpha = match alpha {
        Some(raw) => {
            let mut tokens = split_args(raw);
            let token = tokens
                .next()
                .ok_or_else(|| ParseFailure::new(input, "missing alpha after `/`"))?;
            if tokens.next().is_some() {
                return Err(ParseFailure::new(input, "more than one alpha value"));
            }
            Some(parse_component(input, token)?)
        }
        None => None,
    };

    Ok(Function {
        name: name.to_ascii_lowercase(),
        args,
        alpha,
    })
}

/// Split on commas and whitespace, dropping empty tokens.
fn split_args(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
}

fn parse_component(input: &str, token: &str) -> Result<Component, ParseFailure> {
    if token.eq_ignore_ascii_case("none") {
        return Ok(Component::Number(0.0));
    }

    if let Some(digits) = token.strip_suffix('%') {
        parse_number(input, digits).map(Component::Percent)
    } else if let Some(digits) = token.strip_suffix("deg") {
        parse_number(input, digits).map(Component::Degrees)
    } else {
        parse_number(input, token).map(Component::Number)
    }
}

fn parse_number(input: &str, digits: &str) -> Result<f64, ParseFailure> {
    // Rust's float parser accepts "inf"/"nan"; CSS does not.
    let plain = digits
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'-' | b'+' | b'e' | b'E'));
    match digits.parse::<f64>() {
        Ok(v) if plain && v.is_finite() => Ok(v),
        _ => Err(ParseFailure::new(input, "component is not a number")),
    }
}

fn alpha_value(c: Component) -> f64 {
    match c {
        Component::Percent(p) => (p / 100.0).clamp(0.0, 1.0),
        other => other.value().clamp(0.0, 1.0),
    }
}

// ─── oklch() ─────────────────────────────────────────────────────────────────

/// Components read from an `oklch()` notation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OklchNotation {
    /// Lightness as a ratio, 0.0–1.0.
    pub l: f64,
    /// Chroma.
    pub c: f64,
    /// Hue in degrees, as written.
    pub h: f64,
    /// Alpha, when present.
    pub alpha: Option<f64>,
}

/// Parse `oklch(L C H [/ A])`.
///
/// Lightness may be a percentage or a bare ratio; a bare value above 1 is
/// taken as a percentage. A chroma percentage maps 100% to 0.4.
///
/// # Errors
///
/// Returns [`ParseFailure`] for any other function name, wrong arity, or
/// misplaced units.
pub fn parse_oklch(input: &str) -> Result<OklchNotation, ParseFailure> {
    let func = parse_function(input)?;
    if func.name != "oklch" {
        return Err(ParseFailure::new(input, "not an oklch() notation"));
    }
    let [l, c, h] = func.args[..] else {
        return Err(ParseFailure::new(input, "oklch() takes three components"));
    };

    let l = match l {
        Component::Percent(p) => p / 100.0,
        Component::Number(n) if n > 1.0 => n / 100.0,
        Component::Number(n) => n,
        Component::Degrees(_) => return Err(ParseFailure::new(input, "lightness cannot be an angle")),
    };
    let c = match c {
        Component::Percent(p) => p / 100.0 * 0.4,
        Component::Number(n) => n,
        Component::Degrees(_) => return Err(ParseFailure::new(input, "chroma cannot be an angle")),
    };
    let h = match h {
        Component::Number(n) | Component::Degrees(n) => n,
        Component::Percent(_) => return Err(ParseFailure::new(input, "hue cannot be a percentage")),
    };

    Ok(OklchNotation {
        l,
        c: c.max(0.0),
        h,
        alpha: func.alpha.map(alpha_value),
    })
}

// ─── rgb() / rgba() ──────────────────────────────────────────────────────────

/// A device triple read from an `rgb()`/`rgba()` notation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbNotation {
    pub rgb: RGB8,
    pub alpha: Option<f64>,
}

/// Parse `rgb(r, g, b)`, `rgba(r, g, b, a)` or `rgb(r g b / a)`.
///
/// Channels are numbers in 0–255 or percentages.
///
/// # Errors
///
/// Returns [`ParseFailure`] for any other function name or wrong arity.
pub fn parse_rgb(input: &str) -> Result<RgbNotation, ParseFailure> {
    let func = parse_function(input)?;
    if func.name != "rgb" && func.name != "rgba" {
        return Err(ParseFailure::new(input, "not an rgb() notation"));
    }

    let (channels, alpha) = match (&func.args[..], func.alpha) {
        ([r, g, b], alpha) => ([*r, *g, *b], alpha),
        ([r, g, b, a], None) => ([*r, *g, *b], Some(*a)),
        _ => return Err(ParseFailure::new(input, "rgb() takes three channels and an optional alpha")),
    };

    let mut bytes = [0u8; 3];
    for (byte, channel) in bytes.iter_mut().zip(channels) {
        *byte = match channel {
            Component::Number(n) => to_u8(n / 255.0),
            Component::Percent(p) => to_u8(p / 100.0),
            Component::Degrees(_) => return Err(ParseFailure::new(input, "channel cannot be an angle")),
        };
    }

    Ok(RgbNotation {
        rgb: RGB8::new(bytes[0], bytes[1], bytes[2]),
        alpha: alpha.map(alpha_value),
    })
}

// ─── hsl() / hsla() ──────────────────────────────────────────────────────────

/// Components read from an `hsl()`/`hsla()` notation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslNotation {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation, 0.0–1.0.
    pub s: f64,
    /// Lightness, 0.0–1.0.
    pub l: f64,
    pub alpha: Option<f64>,
}

/// Parse `hsl(h, s%, l%)`, `hsla(h, s%, l%, a)` or `hsl(h s% l% / a)`.
///
/// # Errors
///
/// Returns [`ParseFailure`] for any other function name or wrong arity.
pub fn parse_hsl(input: &str) -> Result<HslNotation, ParseFailure> {
    let func = parse_function(input)?;
    if func.name != "hsl" && func.name != "hsla" {
        return Err(ParseFailure::new(input, "not an hsl() notation"));
    }

    let (h, s, l, alpha) = match (&func.args[..], func.alpha) {
        ([h, s, l], alpha) => (*h, *s, *l, alpha),
        ([h, s, l, a], None) => (*h, *s, *l, Some(*a)),
        _ => return Err(ParseFailure::new(input, "hsl() takes three components and an optional alpha")),
    };

    let h = match h {
        Component::Number(n) | Component::Degrees(n) => n,
        Component::Percent(_) => return Err(ParseFailure::new(input, "hue cannot be a percentage")),
    };
    let fraction = |c: Component| match c {
        Component::Percent(p) | Component::Number(p) => Ok((p / 100.0).clamp(0.0, 1.0)),
        Component::Degrees(_) => Err(ParseFailure::new(input, "saturation/lightness cannot be an angle")),
    };

    Ok(HslNotation {
        h,
        s: fraction(s)?,
        l: fraction(l)?,
        alpha: alpha.map(alpha_value),
    })
}

// ─── Hex literals ────────────────────────────────────────────────────────────

/// Parse a hex color literal.
///
/// Supports: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`. The `#` is required so
/// that names like `bad` are not read as hex.
///
/// # Errors
///
/// Returns [`ParseFailure`] for a missing `#`, a bad length or a non-hex digit.
pub fn parse_hex(input: &str) -> Result<RgbNotation, ParseFailure> {
    let s = input
        .trim()
        .strip_prefix('#')
        .ok_or_else(|| ParseFailure::new(input, "hex color must start with `#`"))?;
    let bytes = s.as_bytes();
    let digit = |i: usize| parse_hex_digit(bytes[i]).ok_or_else(|| ParseFailure::new(input, "invalid hex digit"));
    let byte = |i: usize| Ok::<u8, ParseFailure>(digit(i)? << 4 | digit(i + 1)?);

    let (r, g, b, a) = match bytes.len() {
        // #RGB
        3 => (digit(0)? * 17, digit(1)? * 17, digit(2)? * 17, None),
        // #RGBA
        4 => (digit(0)? * 17, digit(1)? * 17, digit(2)? * 17, Some(digit(3)? * 17)),
        // #RRGGBB
        6 => (byte(0)?, byte(2)?, byte(4)?, None),
        // #RRGGBBAA
        8 => (byte(0)?, byte(2)?, byte(4)?, Some(byte(6)?)),
        _ => return Err(ParseFailure::new(input, "hex color must have 3, 4, 6 or 8 digits")),
    };

    Ok(RgbNotation {
        rgb: RGB8::new(r, g, b),
        alpha: a.map(|a| f64::from(a) / 255.0),
    })
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ── Generic grammar ──────────────────────────────────────────────────

    #[test]
    fn function_with_alpha() {
        let f = parse_function("OKLCH(0.5 0.1 20deg / 50%)").unwrap();
        assert_eq!(f.name, "oklch");
        assert_eq!(
            f.args,
            vec![Component::Number(0.5), Component::Number(0.1), Component::Degrees(20.0)]
        );
        assert_eq!(f.alpha, Some(Component::Percent(50.0)));
    }

    #[test]
    fn function_rejects_garbage() {
        assert!(parse_function("banana").is_err());
        assert!(parse_function("oklch(0.5 0.1 20").is_err());
        assert!(parse_function("oklch()").is_err());
        assert!(parse_function("oklch(a b c)").is_err());
        assert!(parse_function("oklch(inf 0 0)").is_err());
        assert!(parse_function("oklch(from red l c h)").is_err());
        assert!(parse_function("oklch(0.5 0.1 20 / 1 2)").is_err());
        assert!(parse_function("calc(1 + (2))").is_err());
    }

    #[test]
    fn none_reads_as_zero() {
        let f = parse_function("oklch(1 0 none)").unwrap();
        assert_eq!(f.args[2], Component::Number(0.0));
    }

    // ── oklch() ──────────────────────────────────────────────────────────

    #[test]
    fn oklch_percent_lightness() {
        let n = parse_oklch("oklch(50.5% 0.213 27.518)").unwrap();
        assert!((n.l - 0.505).abs() < 1e-12);
        assert!((n.c - 0.213).abs() < 1e-12);
        assert!((n.h - 27.518).abs() < 1e-12);
        assert_eq!(n.alpha, None);
    }

    #[test]
    fn oklch_ratio_lightness() {
        let n = parse_oklch("oklch(0.505193 0.190306 27.5181)").unwrap();
        assert!((n.l - 0.505_193).abs() < 1e-12);
    }

    #[test]
    fn oklch_bare_lightness_above_one_is_percent() {
        let n = parse_oklch("oklch(62 0.1 200)").unwrap();
        assert!((n.l - 0.62).abs() < 1e-12);
    }

    #[test]
    fn oklch_with_alpha() {
        let n = parse_oklch("oklch(0.7 0.1 120 / 0.25)").unwrap();
        assert_eq!(n.alpha, Some(0.25));
    }

    #[test]
    fn oklch_rejects_wrong_shape() {
        assert!(parse_oklch("rgb(1, 2, 3)").is_err());
        assert!(parse_oklch("oklch(0.5 0.1)").is_err());
        assert!(parse_oklch("oklch(0.5 0.1 20%)").is_err());
        assert!(parse_oklch("#ff0000").is_err());
    }

    // ── rgb() ────────────────────────────────────────────────────────────

    #[test]
    fn rgb_legacy_and_modern() {
        let a = parse_rgb("rgb(185, 28, 28)").unwrap();
        let b = parse_rgb("rgb(185 28 28)").unwrap();
        assert_eq!(a.rgb, RGB8::new(185, 28, 28));
        assert_eq!(a, b);
    }

    #[test]
    fn rgba_alpha_positions() {
        let a = parse_rgb("rgba(255, 0, 0, 0.5)").unwrap();
        let b = parse_rgb("rgb(255 0 0 / 50%)").unwrap();
        assert_eq!(a.alpha, Some(0.5));
        assert_eq!(b.alpha, Some(0.5));
        assert_eq!(a.rgb, b.rgb);
    }

    #[test]
    fn rgb_percent_channels() {
        let n = parse_rgb("rgb(100%, 0%, 50%)").unwrap();
        assert_eq!(n.rgb, RGB8::new(255, 0, 128));
    }

    #[test]
    fn rgb_rejects_wrong_arity() {
        assert!(parse_rgb("rgb(1, 2)").is_err());
        assert!(parse_rgb("rgb(1, 2, 3, 4, 5)").is_err());
        assert!(parse_rgb("oklch(0.5 0.1 20)").is_err());
    }

    // ── hsl() ────────────────────────────────────────────────────────────

    #[test]
    fn hsl_reads_percentages() {
        let n = parse_hsl("hsl(210, 50%, 40%)").unwrap();
        assert!((n.h - 210.0).abs() < 1e-12);
        assert!((n.s - 0.5).abs() < 1e-12);
        assert!((n.l - 0.4).abs() < 1e-12);
    }

    #[test]
    fn hsla_alpha() {
        let n = parse_hsl("hsla(0, 100%, 50%, 0.3)").unwrap();
        assert_eq!(n.alpha, Some(0.3));
    }

    // ── Hex ──────────────────────────────────────────────────────────────

    #[test]
    fn hex_rrggbb() {
        assert_eq!(parse_hex("#b91c1c").unwrap().rgb, RGB8::new(0xb9, 0x1c, 0x1c));
        assert_eq!(parse_hex("#187C3E").unwrap().rgb, RGB8::new(0x18, 0x7c, 0x3e));
    }

    #[test]
    fn hex_short() {
        assert_eq!(parse_hex("#f0a").unwrap().rgb, RGB8::new(0xff, 0x00, 0xaa));
    }

    #[test]
    fn hex_with_alpha() {
        let n = parse_hex("#ff000080").unwrap();
        assert_eq!(n.rgb, RGB8::new(255, 0, 0));
        let alpha = n.alpha.unwrap();
        assert!((alpha - 128.0 / 255.0).abs() < 1e-12);
    }

    #[test]
    fn hex_invalid() {
        assert!(parse_hex("ff0000").is_err());
        assert!(parse_hex("#ff00").is_ok());
        assert!(parse_hex("#ff00000").is_err());
        assert!(parse_hex("#gg0000").is_err());
        assert!(parse_hex("#").is_err());
    }
}
