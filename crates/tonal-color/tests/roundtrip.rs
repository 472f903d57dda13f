//! Property tests for the conversion layer.
//!
//! Hex → canonical OKLCH → Hex must come back within one 8-bit step per
//! channel, and rendering must be a pure function of its input.

use proptest::prelude::*;
use tonal_color::{Color, RGB8, SoftwareRenderer, format_number, to_canonical, to_hex};

fn arb_rgb() -> impl Strategy<Value = RGB8> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| RGB8::new(r, g, b))
}

fn hex_channels(hex: &str) -> [u8; 3] {
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap();
    [byte(1), byte(3), byte(5)]
}

proptest! {
    #[test]
    fn hex_survives_canonical_roundtrip(rgb in arb_rgb()) {
        let renderer = SoftwareRenderer;
        let hex = format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b);

        let canonical = to_canonical(&renderer, &hex).unwrap();
        let back = to_hex(&renderer, &canonical.rendering);

        let expected = hex_channels(&hex);
        let actual = hex_channels(&back);
        for (a, e) in actual.iter().zip(expected) {
            prop_assert!(a.abs_diff(e) <= 1, "{hex} came back as {back}");
        }
    }

    #[test]
    fn rasterized_rendering_is_stable(rgb in arb_rgb()) {
        // Re-canonicalizing an already-canonical hex is a fixed point.
        let renderer = SoftwareRenderer;
        let first = to_hex(&renderer, &to_canonical(&renderer, &format!("rgb({}, {}, {})", rgb.r, rgb.g, rgb.b)).unwrap().rendering);
        let second = to_hex(&renderer, &to_canonical(&renderer, &first).unwrap().rendering);
        let a = hex_channels(&first);
        let b = hex_channels(&second);
        for (x, y) in a.iter().zip(b) {
            prop_assert!(x.abs_diff(y) <= 1, "{first} drifted to {second}");
        }
    }

    #[test]
    fn canonicalization_is_deterministic(rgb in arb_rgb()) {
        let renderer = SoftwareRenderer;
        let hex = format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b);
        let a = to_canonical(&renderer, &hex).unwrap();
        let b = to_canonical(&renderer, &hex).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn css_components_never_carry_float_noise(l in 0.0f64..=1.0, c in 0.0f64..0.4, h in 0.0f64..360.0) {
        let css = Color::oklch(l, c, h).to_css(2);
        prop_assert!(!css.contains("0000"), "{css}");
        prop_assert!(!css.contains("9999"), "{css}");
    }

    #[test]
    fn format_number_respects_precision(value in -1000.0f64..1000.0, decimals in 0usize..6) {
        let text = format_number(value, decimals);
        let fraction = text.split_once('.').map_or(0, |(_, f)| f.len());
        prop_assert!(fraction <= decimals, "{value} with {decimals} decimals gave {text}");
        prop_assert!(!text.ends_with('0') || !text.contains('.'), "{text}");
    }
}
