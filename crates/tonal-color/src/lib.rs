// SPDX-License-Identifier: MIT
//
// tonal-color — color model and conversion layer for tonal.
//
// OKLCH is the canonical representation; Hex, HSL and 8-bit RGB are views
// derived on demand. Parsing arbitrary color expressions is delegated to a
// `ColorRenderer` so the math here can be exercised against a
// deterministic stub, and every rendered notation is read back with a
// small grammar instead of pattern scraping.

pub mod color;
pub mod convert;
pub mod error;
pub mod notation;
pub mod number;
pub mod render;

pub use color::Color;
pub use convert::{Canonical, canonical_or_fallback, device_rgb, to_canonical, to_hex, to_hsl};
pub use error::ParseFailure;
pub use number::format_number;
pub use render::{ColorRenderer, Notation, SoftwareRenderer};
pub use rgb::RGB8;
