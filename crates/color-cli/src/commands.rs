//! Command handlers.
//!
//! Each handler normalizes its raw arguments, loads the stored configuration,
//! applies the per-invocation flags and writes the rendered result.

use std::io::{BufRead, ErrorKind, Write};

use anyhow::{Context, Result};
use serde_json::json;
use tracing::debug;

use color_config::{CommandEditor, Config, ConfigStore, Flags, render_document};
use color_model::inputs::{
    normalize_degree_angle, normalize_hex_code, normalize_percent_value, parse_boolean_flag,
    parse_shades_flag, validate_editor, validate_indent_width, validate_rgb_value,
};
use color_model::{
    Cmyk, Color, Hsl, Hsv, Rgb, ShadesFlag, cmyk_to_rgb, hex_to_rgb, hsl_to_rgb, hsv_to_rgb,
    name_to_rgb, palette_to_rgbs,
};
use color_report::{render_color, render_colors};
use color_standards::default_table;

use crate::cli::{Command, ConfigCommand, LookupArgs, OutputArgs};
use crate::tables::{names_table, palettes_table};

const NOT_INITIALIZED: &str = "Configuration not initialized. Run \"color config init\".";
const CONFIG_INDENT: usize = 2;

/// Where a command reads answers from and writes its output to.
pub struct Session<'a> {
    pub store: ConfigStore,
    /// Table styling override; `None` detects the terminal.
    pub styled: Option<bool>,
    pub input: &'a mut dyn BufRead,
    pub output: &'a mut dyn Write,
}

impl Session<'_> {
    fn load_config(&self, flags: &Flags) -> Result<Config> {
        let mut config = self
            .store
            .load()
            .context("Failed to load configuration")?;
        config.set_flags(flags);
        Ok(config)
    }

    /// Writes one line of output. A closed pipe ends the command quietly.
    fn print(&mut self, text: &str) -> Result<()> {
        match writeln!(self.output, "{text}").and_then(|()| self.output.flush()) {
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                debug!("output closed by reader");
                Ok(())
            }
            result => result.context("Failed to write output"),
        }
    }
}

/// Runs one parsed command.
///
/// # Errors
///
/// Fails on invalid arguments, unknown names or palettes, configuration
/// problems, and output errors.
pub fn run(command: &Command, session: &mut Session<'_>) -> Result<()> {
    match command {
        Command::Name(args) => {
            let flags = lookup_flags(&args.lookup)?;
            let rgb = name_to_rgb(&args.name)?;
            show_color(session, &flags, rgb)
        }
        Command::Hex(args) => {
            let flags = lookup_flags(&args.lookup)?;
            let rgb = hex_to_rgb(&normalize_hex_code(&args.code)?)?;
            show_color(session, &flags, rgb)
        }
        Command::Rgb(args) => {
            let flags = lookup_flags(&args.lookup)?;
            let rgb = Rgb::new(
                validate_rgb_value(&args.r)?,
                validate_rgb_value(&args.g)?,
                validate_rgb_value(&args.b)?,
            );
            show_color(session, &flags, rgb)
        }
        Command::Hsl(args) => {
            let flags = lookup_flags(&args.lookup)?;
            let hsl = Hsl::new(
                normalize_degree_angle(&args.h)?,
                normalize_percent_value(&args.s)?,
                normalize_percent_value(&args.l)?,
            );
            show_color(session, &flags, hsl_to_rgb(hsl))
        }
        Command::Hsv(args) => {
            let flags = lookup_flags(&args.lookup)?;
            let hsv = Hsv::new(
                normalize_degree_angle(&args.h)?,
                normalize_percent_value(&args.s)?,
                normalize_percent_value(&args.v)?,
            );
            show_color(session, &flags, hsv_to_rgb(hsv))
        }
        Command::Cmyk(args) => {
            let flags = lookup_flags(&args.lookup)?;
            let cmyk = Cmyk::new(
                normalize_percent_value(&args.c)?,
                normalize_percent_value(&args.m)?,
                normalize_percent_value(&args.y)?,
                normalize_percent_value(&args.k)?,
            );
            show_color(session, &flags, cmyk_to_rgb(cmyk))
        }
        Command::Palette(args) => {
            let flags = output_flags(&args.output)?;
            let config = session.load_config(&flags)?;
            let colors: Vec<_> = palette_to_rgbs(&args.name)?
                .into_iter()
                .map(Color::new)
                .collect();
            debug!(palette = %args.name, size = colors.len(), "rendering palette");
            let text = render_colors(&config, &colors)?;
            session.print(&text)
        }
        Command::Names => {
            let config = session.load_config(&Flags::default())?;
            let table = names_table(&config, default_table(), session.styled);
            session.print(&table.to_string())
        }
        Command::Palettes => {
            let config = session.load_config(&Flags::default())?;
            let table = palettes_table(&config, default_table(), session.styled);
            session.print(&table.to_string())
        }
        Command::Config(command) => run_config(command, session),
        Command::Version(args) => {
            let as_json = args
                .json
                .as_deref()
                .map(parse_boolean_flag)
                .transpose()?
                .unwrap_or(false);
            let version = env!("CARGO_PKG_VERSION");
            if as_json {
                session.print(&json!({ "version": version }).to_string())
            } else {
                session.print(version)
            }
        }
    }
}

fn run_config(command: &ConfigCommand, session: &mut Session<'_>) -> Result<()> {
    match command {
        ConfigCommand::Init { force } => {
            if session.store.exists()
                && !force
                && !prompt_user(session, "Overwrite existing configuration?")?
            {
                return Ok(());
            }
            let config = session
                .store
                .init()
                .context("Failed to initialize configuration")?;
            session.print(&render_document(&config.dump(), CONFIG_INDENT))
        }
        ConfigCommand::Show { indent } => {
            if !session.store.exists() {
                return session.print(NOT_INITIALIZED);
            }
            let indent = validate_indent_width(indent)?;
            let config = session.load_config(&Flags::default())?;
            session.print(&render_document(&config.dump(), indent))
        }
        ConfigCommand::Edit { editor } => {
            if !session.store.exists() {
                return session.print(NOT_INITIALIZED);
            }
            let explicit = editor.as_deref().map(validate_editor).transpose()?;
            let editor = CommandEditor::from_env(explicit.as_deref());
            let config = session
                .store
                .edit(&editor)
                .context("Failed to edit configuration")?;
            session.print(&render_document(&config.dump(), CONFIG_INDENT))
        }
    }
}

fn show_color(session: &mut Session<'_>, flags: &Flags, rgb: Rgb) -> Result<()> {
    let config = session.load_config(flags)?;
    let text = render_color(&config, &Color::new(rgb))?;
    session.print(&text)
}

fn optional_bool(value: Option<&str>) -> Result<Option<bool>> {
    Ok(value.map(parse_boolean_flag).transpose()?)
}

fn output_flags(args: &OutputArgs) -> Result<Flags> {
    let json = if args.no_json {
        Some(false)
    } else {
        optional_bool(args.json.as_deref())?
    };
    let units = if args.no_units {
        Some(false)
    } else {
        optional_bool(args.units.as_deref())?
    };
    Ok(Flags {
        json,
        all: optional_bool(args.all.as_deref())?,
        units,
        shades: None,
    })
}

/// Flags of a single lookup; shades are off unless `--shades` is given.
fn lookup_flags(args: &LookupArgs) -> Result<Flags> {
    let shades = match args.shades.as_deref() {
        Some(value) => parse_shades_flag(value)?,
        None => ShadesFlag::Count(0),
    };
    Ok(Flags {
        shades: Some(shades),
        ..output_flags(&args.output)?
    })
}

/// Asks a yes/no question until it gets an answer; end of input means no.
fn prompt_user(session: &mut Session<'_>, question: &str) -> Result<bool> {
    loop {
        write!(session.output, "{question} [y/n] ")?;
        session.output.flush()?;
        let mut answer = String::new();
        if session.input.read_line(&mut answer)? == 0 {
            return Ok(false);
        }
        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" | "t" | "true" | "on" | "1" => return Ok(true),
            "n" | "no" | "f" | "false" | "off" | "0" => return Ok(false),
            _ => writeln!(session.output, "Please respond with \"y\" or \"n\"\n")?,
        }
    }
}
