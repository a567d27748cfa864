//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum, ValueHint};

use crate::domain::{Point, Shape};

/// Shape model playground: drawing, sorting, change notification and metadata inspection
#[derive(Parser, Debug)]
#[command(name = "shapelab")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Directory holding a local .shapelab.toml
    #[arg(
        short = 'C',
        long,
        global = true,
        env = "SHAPELAB_CONFIG_DIR",
        value_hint = ValueHint::DirPath
    )]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Draw a shape (parent level first, then variant fields)
    Draw {
        /// Shape variant
        #[arg(value_enum)]
        kind: ShapeArg,
        /// Center x
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        x: i32,
        /// Center y
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        y: i32,
        /// Radius (circle, labeled)
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        radius: i32,
        /// Width (rectangle)
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        width: i32,
        /// Height (rectangle)
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        height: i32,
        /// Caption (labeled)
        #[arg(long, default_value = "label")]
        label: String,
    },

    /// Sort shapes by center, e.g. `sort 10,100 10,100 3,4`
    Sort {
        /// Centers as x,y
        #[arg(required = true, allow_hyphen_values = true)]
        points: Vec<Point>,
    },

    /// Read a center coordinate by index (0 = x, 1 = y)
    Coord {
        /// Center as x,y
        point: Point,
        /// Coordinate index; anything but 0 or 1 is out of range
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },

    /// Demonstrate change notification
    Observe,

    /// Show members and help metadata of a type
    Inspect {
        /// Type to inspect
        #[arg(value_enum)]
        target: InspectTarget,
        /// Only list members carrying help metadata
        #[arg(long)]
        documented: bool,
    },

    /// Write shapes to a text file, read them back, delete the file
    Roundtrip {
        /// Directory for the shape file (default: settings or a temp dir)
        #[arg(long, value_hint = ValueHint::DirPath)]
        dir: Option<PathBuf>,
        /// Shapes: shape:X,Y | circle:X,Y:R | rect:X,Y:W:H | labeled:X,Y:R:TEXT
        #[arg(required = true, allow_hyphen_values = true, value_parser = parse_shape_spec)]
        shapes: Vec<Shape>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings
    Show,
    /// Print a commented template
    Template,
    /// Print the global config file path
    Path,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeArg {
    Shape,
    Circle,
    Rect,
    Labeled,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InspectTarget {
    Point,
    Shape,
    Notifier,
}

/// Parse `kind:X,Y[:field...]` into a shape.
pub fn parse_shape_spec(spec: &str) -> Result<Shape, String> {
    let mut parts = spec.splitn(4, ':');
    let kind = parts.next().unwrap_or_default();
    let center: Point = next_field(&mut parts, "center", spec)?
        .parse()
        .map_err(|e| format!("{e}"))?;

    let shape = match kind.to_ascii_lowercase().as_str() {
        "shape" => Shape::plain(center),
        "circle" => Shape::circle(center, next_int(&mut parts, "radius", spec)?),
        "rect" | "rectangle" => {
            let width = next_int(&mut parts, "width", spec)?;
            let height = next_int(&mut parts, "height", spec)?;
            Shape::rectangle(center, width, height)
        }
        "labeled" => {
            let radius = next_int(&mut parts, "radius", spec)?;
            let label = next_field(&mut parts, "label", spec)?;
            Shape::labeled_circle(center, radius, label).map_err(|e| e.to_string())?
        }
        other => return Err(format!("unknown shape kind '{other}'")),
    };
    Ok(shape)
}

fn next_field<'a>(
    parts: &mut impl Iterator<Item = &'a str>,
    name: &str,
    spec: &str,
) -> Result<&'a str, String> {
    parts
        .next()
        .ok_or_else(|| format!("missing {name} in '{spec}'"))
}

fn next_int<'a>(
    parts: &mut impl Iterator<Item = &'a str>,
    name: &str,
    spec: &str,
) -> Result<i32, String> {
    next_field(parts, name, spec)?
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("{name}: {e}"))
}
