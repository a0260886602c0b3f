//! CLI argument definitions for the color lookup tool.
//!
//! Color components and flag values are taken as raw strings and normalized
//! by the command handlers, so a bad value is reported like any other error.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "color",
    version,
    about = "Look up colors by name, hex code, RGB, HSL, HSV or CMYK",
    long_about = "Look up colors using various color models.\n\n\
                  Every lookup shows the color in all supported models together with\n\
                  its CSS3 name, or the nearest one when there is no exact match.\n\n\
                  Examples:\n  \
                  color name green\n  \
                  color hex FFF --shades=5\n  \
                  color rgb 10 20 30 --json --all\n  \
                  color palette molokai --units"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output of logs and tables (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Directory holding config.json (default: the platform config directory).
    #[arg(long = "config-dir", value_name = "DIR", global = true)]
    pub config_dir: Option<PathBuf>,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Look up a color by CSS3 name.
    Name(NameArgs),

    /// Look up a color by hexadecimal (web) code.
    ///
    /// The code is given without the hash (#) prefix and must have three or
    /// six hex digits, e.g. FFF or FFFFFF.
    Hex(HexArgs),

    /// Look up a color by RGB (Red Green Blue) values.
    ///
    /// Values must be integers between 0 and 255 inclusive.
    Rgb(RgbArgs),

    /// Look up a color by HSL (Hue Saturation Lightness) values.
    ///
    /// Hue is an angle on the color wheel from 0 to 360 where 0 is red, 120 is
    /// green and 240 is blue. Saturation and lightness are percentages.
    Hsl(HslArgs),

    /// Look up a color by HSV (Hue Saturation Brightness/Value) values.
    ///
    /// Hue is an angle on the color wheel from 0 to 360. Saturation and
    /// brightness are percentages.
    Hsv(HsvArgs),

    /// Look up a color by CMYK (Cyan Magenta Yellow Black) values.
    ///
    /// Values are ink percentages between 0 and 100 inclusive.
    Cmyk(CmykArgs),

    /// Display the colors of a palette.
    Palette(PaletteArgs),

    /// List all CSS3 color names.
    Names,

    /// List all color palettes.
    Palettes,

    /// Manage the configuration file.
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Display the version.
    Version(VersionArgs),
}

/// Flags shared by every command that displays colors.
#[derive(Args, Default)]
pub struct OutputArgs {
    /// Display in JSON format.
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        overrides_with = "no_json"
    )]
    pub json: Option<String>,

    /// Display as text even if the configuration asks for JSON.
    #[arg(long = "no-json", overrides_with = "json")]
    pub no_json: bool,

    /// Bypass the configured keys and display all of them.
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub all: Option<String>,

    /// Display degree and percent symbols.
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        overrides_with = "no_units"
    )]
    pub units: Option<String>,

    /// Hide degree and percent symbols.
    #[arg(long = "no-units", overrides_with = "units")]
    pub no_units: bool,
}

/// Flags of a single color lookup.
#[derive(Args, Default)]
pub struct LookupArgs {
    /// Display shades of the color: a count (0 to 100), or true/false to
    /// toggle the configured count.
    #[arg(
        long,
        value_name = "N|BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub shades: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct NameArgs {
    /// CSS3 color name, e.g. green.
    pub name: String,

    #[command(flatten)]
    pub lookup: LookupArgs,
}

#[derive(Args)]
pub struct HexArgs {
    /// Hex code without the hash (#) prefix.
    #[arg(value_name = "CODE")]
    pub code: String,

    #[command(flatten)]
    pub lookup: LookupArgs,
}

#[derive(Args)]
pub struct RgbArgs {
    /// Red (0 to 255).
    #[arg(allow_negative_numbers = true)]
    pub r: String,
    /// Green (0 to 255).
    #[arg(allow_negative_numbers = true)]
    pub g: String,
    /// Blue (0 to 255).
    #[arg(allow_negative_numbers = true)]
    pub b: String,

    #[command(flatten)]
    pub lookup: LookupArgs,
}

#[derive(Args)]
pub struct HslArgs {
    /// Hue in degrees (0.0 to 360.0).
    #[arg(allow_negative_numbers = true)]
    pub h: String,
    /// Saturation % (0.0 to 100.0).
    #[arg(allow_negative_numbers = true)]
    pub s: String,
    /// Lightness % (0.0 to 100.0).
    #[arg(allow_negative_numbers = true)]
    pub l: String,

    #[command(flatten)]
    pub lookup: LookupArgs,
}

#[derive(Args)]
pub struct HsvArgs {
    /// Hue in degrees (0.0 to 360.0).
    #[arg(allow_negative_numbers = true)]
    pub h: String,
    /// Saturation % (0.0 to 100.0).
    #[arg(allow_negative_numbers = true)]
    pub s: String,
    /// Brightness/value % (0.0 to 100.0).
    #[arg(allow_negative_numbers = true)]
    pub v: String,

    #[command(flatten)]
    pub lookup: LookupArgs,
}

#[derive(Args)]
pub struct CmykArgs {
    /// Cyan % (0.0 to 100.0).
    #[arg(allow_negative_numbers = true)]
    pub c: String,
    /// Magenta % (0.0 to 100.0).
    #[arg(allow_negative_numbers = true)]
    pub m: String,
    /// Yellow % (0.0 to 100.0).
    #[arg(allow_negative_numbers = true)]
    pub y: String,
    /// Black/key % (0.0 to 100.0).
    #[arg(allow_negative_numbers = true)]
    pub k: String,

    #[command(flatten)]
    pub lookup: LookupArgs,
}

#[derive(Args)]
pub struct PaletteArgs {
    /// Palette name, e.g. molokai. Run `color palettes` for the full list.
    pub name: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Initialize or reset the configuration.
    Init {
        /// Overwrite an existing configuration without asking.
        #[arg(long)]
        force: bool,
    },

    /// Display the configuration.
    Show {
        /// JSON indent width (0 to 8).
        #[arg(long, value_name = "N", default_value = "2")]
        indent: String,
    },

    /// Edit the configuration with a text editor.
    ///
    /// Without --editor, $VISUAL and $EDITOR are checked, falling back to
    /// notepad on Windows and vi elsewhere.
    Edit {
        /// Editor command, without arguments.
        #[arg(long, value_name = "PROGRAM")]
        editor: Option<String>,
    },
}

#[derive(Args)]
pub struct VersionArgs {
    /// Display in JSON format.
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub json: Option<String>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
