//! # tonal-palette — OKLCH tonal ramp generation
//!
//! Turns a seed color into a set of named tonal variants (`50`…`900`,
//! `fade`, `bright`), ships a fixed set of global palettes, picks a
//! readable text color for every swatch, and serializes palettes as CSS
//! custom properties.
//!
//! # Architecture
//!
//! ```text
//! seed expression + name
//!     │
//!     ▼
//! tonal_color:  renderer → canonical (L, C, H) + exact rendering
//!     │
//!     ▼
//! step.rs:      luminosity → step (band table)
//!     │
//!     ▼
//! adaptive.rs / fixed.rs:  Palette (variant → rendered oklch())
//!     │
//!     ▼
//! contrast.rs:  WCAG ratios, white/black text decision
//!     │
//!     ▼
//! format.rs:    swatches, CSS `:root` block, table
//! ```
//!
//! # Two strategies
//!
//! Adaptive palettes place the seed at the band its luminosity falls into
//! and derive the other steps from band midpoints. Fixed ramps (`red`,
//! `green`, `orange`, `blue`) offset the seed lightness by fixed amounts.
//! The two are kept apart as [`PaletteStrategy`] values.

// Hue/lightness/chroma variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod adaptive;
pub mod builtin;
pub mod contrast;
pub mod fixed;
pub mod format;
pub mod palette;
pub mod step;

pub use adaptive::{generate, generate_from_input};
pub use builtin::{builtin_names, builtin_palette, global_palettes};
pub use contrast::{ContrastReport, TextColor, contrast_ratio, decide_text_color, relative_luminance};
pub use format::{PaletteReport, Swatch, css_custom_properties, swatches, table};
pub use palette::{Palette, PaletteStrategy};
pub use step::{Variant, step_for_luminosity};
