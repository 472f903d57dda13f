// SPDX-License-Identifier: MIT
//
// tonal — perceptual OKLCH tonal palettes from the command line.
//
// This is the main binary that wires together the two crates:
//
//   tonal-color   → renderer, canonical OKLCH, Hex/HSL views
//   tonal-palette → adaptive + fixed ramps, contrast, CSS/table output
//
// A run generates the two user palettes (primary, secondary), appends the
// global palettes unless `--no-global` is given, and prints one of:
//
//   css   → `:root { --color-<name>-<variant>: oklch(...); ... }`
//   table → one row per swatch with Hex, HSL and WCAG ratios
//   json  → palettes with evaluated swatches, plus the CSS block
//
// Logs go to stderr so stdout stays clean for redirection.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tonal_color::{ColorRenderer, SoftwareRenderer};
use tonal_palette::{
    Palette, PaletteReport, css_custom_properties, generate_from_input, global_palettes, table,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

// ─── Command line ───────────────────────────────────────────────────────────

/// Output rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// CSS custom properties in a `:root` block.
    Css,
    /// JSON with every swatch's Hex, HSL and contrast report.
    Json,
    /// Plain-text swatch table.
    Table,
}

#[derive(Debug, Parser)]
#[command(name = "tonal")]
#[command(version, about = "Generate perceptual OKLCH tonal palettes", long_about = None)]
struct Cli {
    /// Seed of the primary palette (any CSS color expression)
    #[arg(long, env = "TONAL_PRIMARY", default_value = "#3b82f6")]
    primary: String,

    /// Name of the primary palette
    #[arg(long, default_value = "primary")]
    primary_name: String,

    /// Seed of the secondary palette
    #[arg(long, env = "TONAL_SECONDARY", default_value = "#f59e0b")]
    secondary: String,

    /// Name of the secondary palette
    #[arg(long, default_value = "secondary")]
    secondary_name: String,

    /// Output format
    #[arg(long, value_enum, default_value = "css")]
    format: OutputFormat,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Omit the global gray/red/green/orange/blue palettes
    #[arg(long)]
    no_global: bool,

    /// Enable debug logging (overridden by TONAL_LOG)
    #[arg(short, long)]
    verbose: bool,
}

// ─── Logging ────────────────────────────────────────────────────────────────

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "TONAL_LOG";

fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

// ─── Generation ─────────────────────────────────────────────────────────────

/// Palettes of one run: the user's seeds, then the globals.
struct Palettes {
    user: Vec<Palette>,
    global: Vec<Palette>,
}

impl Palettes {
    fn generate(cli: &Cli, renderer: &dyn ColorRenderer) -> Self {
        let user = vec![
            generate_from_input(renderer, &cli.primary, &cli.primary_name),
            generate_from_input(renderer, &cli.secondary, &cli.secondary_name),
        ];
        let global = if cli.no_global {
            Vec::new()
        } else {
            global_palettes(renderer)
        };
        debug!(user = user.len(), global = global.len(), "generated palettes");
        Self { user, global }
    }

    fn all(&self) -> Vec<Palette> {
        self.user.iter().chain(&self.global).cloned().collect()
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    user: Vec<PaletteReport<'a>>,
    global: Vec<PaletteReport<'a>>,
    css: String,
}

fn reports<'a>(list: &'a [Palette], renderer: &dyn ColorRenderer) -> Vec<PaletteReport<'a>> {
    list.iter().map(|p| PaletteReport::new(p, renderer)).collect()
}

fn render(format: OutputFormat, palettes: &Palettes, renderer: &dyn ColorRenderer) -> Result<String> {
    let text = match format {
        OutputFormat::Css => css_custom_properties(&palettes.all()),
        OutputFormat::Table => {
            let mut text = format!("# Your palette\n\n{}", table(&palettes.user, renderer));
            if !palettes.global.is_empty() {
                text.push_str("\n# Global colors\n\n");
                text.push_str(&table(&palettes.global, renderer));
            }
            text.trim_end().to_string()
        }
        OutputFormat::Json => {
            let output = JsonOutput {
                user: reports(&palettes.user, renderer),
                global: reports(&palettes.global, renderer),
                css: css_custom_properties(&palettes.all()),
            };
            serde_json::to_string_pretty(&output).context("failed to serialize palettes")?
        }
    };
    Ok(text)
}

fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, format!("{text}\n"))
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "wrote palettes");
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{text}").context("failed to write to stdout")?;
        }
    }
    Ok(())
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let renderer = SoftwareRenderer;
    let palettes = Palettes::generate(&cli, &renderer);
    let text = render(cli.format, &palettes, &renderer)?;
    write_output(cli.output.as_deref(), &text)
}

// ─── Tests ──────────────────────────────────────────────────────────────────
