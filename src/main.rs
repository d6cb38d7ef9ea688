//! SVG Helpers CLI
//!
//! Usage:
//!   svg-helpers [OPTIONS] <COMMAND>
//!
//! Commands:
//!   line      Emit a <line> element
//!   polyline  Emit a <polyline> element
//!   circle    Emit a <circle> element
//!   text      Emit a <text> element
//!
//! Options:
//!   -c, --defaults <FILE>  Defaults file (TOML format)
//!   -d, --debug            Print resolved options to stderr
//!   -h, --help             Print help

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use svg_helpers::{svg_circle, svg_line, svg_polyline, svg_text, Defaults, Point};

#[derive(Parser)]
#[command(name = "svg-helpers")]
#[command(about = "Emit single SVG elements as escaped markup")]
struct Cli {
    /// Defaults file overriding stroke width, font size and font family (TOML format)
    #[arg(short = 'c', long, global = true)]
    defaults: Option<PathBuf>,

    /// Debug mode: print the resolved options to stderr
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Emit a <line> element
    Line {
        #[arg(allow_negative_numbers = true)]
        x1: f64,
        #[arg(allow_negative_numbers = true)]
        y1: f64,
        #[arg(allow_negative_numbers = true)]
        x2: f64,
        #[arg(allow_negative_numbers = true)]
        y2: f64,
        #[command(flatten)]
        common: CommonArgs,
        #[command(flatten)]
        stroke: StrokeArgs,
    },
    /// Emit a <polyline> element from X,Y points
    Polyline {
        /// Vertices as X,Y pairs; put them after `--` when the first starts with `-`
        points: Vec<String>,
        #[command(flatten)]
        common: CommonArgs,
        #[command(flatten)]
        stroke: StrokeArgs,
        /// Extra style declarations appended after fill
        #[arg(long)]
        styles: Option<String>,
    },
    /// Emit a <circle> element
    Circle {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
        #[arg(allow_negative_numbers = true)]
        radius: f64,
        #[command(flatten)]
        common: CommonArgs,
        #[command(flatten)]
        stroke: StrokeArgs,
        /// Extra style declarations appended after fill
        #[arg(long)]
        styles: Option<String>,
    },
    /// Emit a <text> element
    Text {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
        text: String,
        #[command(flatten)]
        common: CommonArgs,
        #[arg(long)]
        font_size: Option<f64>,
        #[arg(long)]
        colour: Option<String>,
        #[arg(long)]
        font_family: Option<String>,
        #[arg(long)]
        font_weight: Option<String>,
        #[arg(long)]
        text_anchor: Option<String>,
        /// Tooltip rendered as a nested <title>
        #[arg(long)]
        title: Option<String>,
    },
}

#[derive(Args)]
struct CommonArgs {
    #[arg(long)]
    id: Option<String>,
    #[arg(long = "class")]
    css_class: Option<String>,
}

#[derive(Args)]
struct StrokeArgs {
    #[arg(long)]
    stroke: Option<String>,
    #[arg(long)]
    stroke_width: Option<f64>,
    #[arg(long)]
    fill: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let defaults = match &cli.defaults {
        Some(path) => match Defaults::from_file(path) {
            Ok(d) => d,
            Err(e) => {
                eprintln!("Error loading defaults '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Defaults::default(),
    };

    let svg = match cli.command {
        Command::Line {
            x1,
            y1,
            x2,
            y2,
            common,
            stroke,
        } => {
            let mut options = defaults.line();
            options.id = common.id;
            options.css_class = common.css_class;
            options.stroke = stroke.stroke;
            options.fill = stroke.fill;
            if let Some(width) = stroke.stroke_width {
                options.stroke_width = width;
            }
            if cli.debug {
                eprintln!("{:#?}", options);
            }
            svg_line(x1, y1, x2, y2, &options)
        }
        Command::Polyline {
            points,
            common,
            stroke,
            styles,
        } => {
            let points = match points
                .iter()
                .map(|p| p.parse::<Point>())
                .collect::<Result<Vec<_>, _>>()
            {
                Ok(points) => points,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };
            let mut options = defaults.polyline();
            options.id = common.id;
            options.css_class = common.css_class;
            options.stroke = stroke.stroke;
            options.fill = stroke.fill;
            options.styles = styles;
            if let Some(width) = stroke.stroke_width {
                options.stroke_width = width;
            }
            if cli.debug {
                eprintln!("{:#?}", options);
            }
            svg_polyline(&points, &options)
        }
        Command::Circle {
            x,
            y,
            radius,
            common,
            stroke,
            styles,
        } => {
            let mut options = defaults.circle();
            options.id = common.id;
            options.css_class = common.css_class;
            options.stroke = stroke.stroke;
            options.fill = stroke.fill;
            options.styles = styles;
            if let Some(width) = stroke.stroke_width {
                options.stroke_width = width;
            }
            if cli.debug {
                eprintln!("{:#?}", options);
            }
            svg_circle(x, y, radius, &options)
        }
        Command::Text {
            x,
            y,
            text,
            common,
            font_size,
            colour,
            font_family,
            font_weight,
            text_anchor,
            title,
        } => {
            let mut options = defaults.text();
            options.id = common.id;
            options.css_class = common.css_class;
            options.colour = colour;
            options.font_weight = font_weight;
            options.text_anchor = text_anchor;
            options.title = title;
            if let Some(size) = font_size {
                options.font_size = size;
            }
            if font_family.is_some() {
                options.font_family = font_family;
            }
            if cli.debug {
                eprintln!("{:#?}", options);
            }
            svg_text(x, y, &text, &options)
        }
    };

    println!("{}", svg);
}
