//! printsafe - keep SVG colors inside a printer's CMYK gamut
//!
//! Runs as an Inkscape extension (document path last, modified document on
//! stdout, messages on stderr) or standalone from a shell.

use anyhow::Result;
use clap::builder::{BoolishValueParser, OsStringValueParser, TypedValueParser};
use clap::{ArgAction, Parser};
use printsafe_icc::Intent;
use printsafe_ops::{Action, RunOptions};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{error, info};

mod commands;
mod logging;

#[derive(Parser, Debug)]
#[command(name = "printsafe")]
#[command(author, version, about = "Check SVG colors against a CMYK ICC profile")]
#[command(long_about = "
Checks every fill and stroke (gradient stops included) of an SVG document
against a CMYK output profile. Colors that do not survive the trip to the
device and back are flagged with a magenta outline; `clear` removes the
outlines again. `palette` writes a GIMP palette of printable colors.

Examples:
  printsafe --icc_path CoatedFOGRA39.icc drawing.svg > checked.svg
  printsafe --action clear checked.svg -o drawing.svg
  printsafe --action palette --icc_path CoatedFOGRA39.icc --palette_density 9
  printsafe --action palette --icc_path press.icm --palette-dir ./palettes
")]
struct Cli {
    /// Action: validate, palette or clear
    #[arg(long, default_value = "validate", value_parser = Action::from_str)]
    action: Action,

    /// Destination CMYK profile (.icc/.icm)
    #[arg(
        long = "icc_path",
        visible_alias = "icc-path",
        value_parser = OsStringValueParser::new().map(PathBuf::from)
    )]
    icc_path: Option<PathBuf>,

    /// Marker stroke width in pixels (at least 1)
    #[arg(long = "flag_width_px", visible_alias = "flag-width-px", default_value_t = 6, allow_negative_numbers = true)]
    flag_width_px: i64,

    /// Palette name prefix
    #[arg(long = "palette_name", visible_alias = "palette-name", default_value = "PrintSafe")]
    palette_name: String,

    /// Palette density, 3..=10
    #[arg(long = "palette_density", visible_alias = "palette-density", default_value_t = 7, allow_negative_numbers = true)]
    palette_density: i64,

    /// Add a grey ramp to the palette
    #[arg(
        long = "include_gray",
        visible_alias = "include-gray",
        default_value_t = true,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    include_gray: bool,

    /// Add skin tones to the palette
    #[arg(
        long = "include_skin",
        visible_alias = "include-skin",
        default_value_t = false,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    include_skin: bool,

    /// Round-trip drift above which a color counts as out of gamut
    #[arg(long, default_value_t = printsafe_core::DEFAULT_THRESHOLD)]
    threshold: f64,

    /// Rendering intent: perceptual, relative, saturation, absolute
    #[arg(long, default_value = "perceptual", value_parser = Intent::from_str)]
    intent: Intent,

    /// Palette directory (default: the per-user Inkscape palettes directory)
    #[arg(long = "palette-dir", alias = "palette_dir")]
    palette_dir: Option<PathBuf>,

    /// Write the document here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose stderr logging (repeat for more)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Selected object ids passed by Inkscape (ignored)
    #[arg(long = "id", hide = true)]
    ids: Vec<String>,

    /// Notebook page passed by Inkscape (ignored)
    #[arg(long, hide = true)]
    tab: Option<String>,

    /// SVG document
    document: Option<PathBuf>,
}

impl Cli {
    fn run_options(&self) -> RunOptions {
        RunOptions {
            action: self.action,
            icc_path: self.icc_path.clone(),
            flag_width_px: u32::try_from(self.flag_width_px.max(1)).unwrap_or(u32::MAX),
            palette_name: self.palette_name.clone(),
            palette_density: u32::try_from(self.palette_density.clamp(3, 10)).unwrap_or(7),
            include_gray: self.include_gray,
            include_skin: self.include_skin,
            threshold: self.threshold,
            intent: self.intent,
        }
        .normalized()
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init(cli.verbose);
    info!(action = %cli.action, "Print-Safe start");

    let result = commands::run(&cli);
    if let Err(err) = &result {
        error!("fatal: {err:?}");
    }
    result
}
