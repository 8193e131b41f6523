//! Graphattr: attribute codecs, geometry helpers and PDF export for graph
//! scenes.
//!
//! Graph editors store item attributes (positions, sizes, colors, fonts,
//! pen styles, identifier sets, polyline geometry) as short text. Graphattr
//! converts that text to typed values and back, provides the line and
//! polygon helpers used to draw edges between node outlines, and exports
//! a scene to a single PDF page.
//!
//! # Modules
//!
//! - [`codec`]: Text codecs for attribute values
//! - [`geom`]: Points, lines, polygons, rects and intersection helpers
//! - [`scene`]: The scene abstraction, painters and the JSON graph scene
//! - [`validation`]: Scene validation and error reporting
//! - [`export`]: Page setup and PDF export
//! - [`settings`]: Grouped settings persisted as JSON or YAML
//! - [`error`]: Error types for graphattr operations

pub mod codec;
pub mod error;
pub mod export;
pub mod geom;
pub mod scene;
pub mod settings;
pub mod validation;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::codec::{
    decode, decode_strict, encode, pen_style_to_text, points_from_string_strict,
    text_to_pen_style, PenStyle, Value, ValueType,
};
use crate::export::{PageSize, PdfExporter};
use crate::geom::{first_bounded_intersection, nearest_bounded_intersection, LineF, PolygonF};
use crate::scene::{GraphDocument, GraphScene, Scene};
use crate::settings::Settings;
use crate::validation::ValidationIssue;

pub use error::GraphAttrError;

/// The graphattr CLI application.
#[derive(Parser)]
#[command(name = "graphattr")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    /// Log debug output to stderr (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Decode attribute text and print its canonical form.
    Normalize(NormalizeArgs),
    /// Print the canonical name of a pen style.
    PenStyle(PenStyleArgs),
    /// Intersect a line with a polygon outline.
    Intersect(IntersectArgs),
    /// Print the items bounding rect of a scene.
    Bounds(BoundsArgs),
    /// Validate a scene for errors and warnings.
    Validate(ValidateArgs),
    /// Export a scene to a single-page PDF.
    Export(ExportArgs),
}

/// Arguments for the normalize subcommand.
#[derive(clap::Args)]
struct NormalizeArgs {
    /// Value type (int, double, float, bool, string, string-list, point,
    /// pointf, size, sizef, color, font, id-set).
    #[arg(long = "type", value_name = "TAG")]
    tag: ValueType,

    /// Fail on malformed text instead of printing the zero value.
    #[arg(long)]
    strict: bool,

    /// Attribute text to decode.
    #[arg(allow_hyphen_values = true)]
    text: String,
}

/// Arguments for the pen-style subcommand.
#[derive(clap::Args)]
struct PenStyleArgs {
    /// Style name to look up.
    name: String,
}

/// Arguments for the intersect subcommand.
#[derive(clap::Args)]
struct IntersectArgs {
    /// The line as a point sequence of exactly two points ("x1 y1 x2 y2").
    #[arg(long, allow_hyphen_values = true)]
    line: String,

    /// The polygon as a point sequence; repeat the first point to close it.
    #[arg(long, allow_hyphen_values = true)]
    polygon: String,

    /// Report the hit nearest to the line start instead of the first edge hit.
    #[arg(long)]
    nearest: bool,
}

/// Arguments for the bounds subcommand.
#[derive(clap::Args)]
struct BoundsArgs {
    /// Scene JSON file.
    input: PathBuf,
}

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

/// Arguments for the validate subcommand.
#[derive(clap::Args)]
struct ValidateArgs {
    /// Scene JSON file to validate.
    input: PathBuf,

    /// Treat warnings as errors (exit non-zero if any warnings).
    #[arg(long)]
    strict: bool,

    /// Output format for the report.
    #[arg(long, value_enum, default_value = "text")]
    output: ReportFormat,
}

/// Arguments for the export subcommand.
#[derive(clap::Args)]
struct ExportArgs {
    /// Scene JSON file to export.
    input: PathBuf,

    /// Output PDF file.
    #[arg(short, long)]
    output: PathBuf,

    /// Page setup settings file (.json, .yaml or .yml).
    #[arg(long, env = "GRAPHATTR_SETTINGS")]
    settings: Option<PathBuf>,

    /// Standard paper name, overriding the settings (A3, A4, A5, B5,
    /// Letter, Legal, Tabloid, Ledger).
    #[arg(long)]
    paper: Option<String>,

    /// Uniform page margin in points, overriding the settings.
    #[arg(long)]
    margin: Option<f64>,

    /// Use landscape for scenes wider than tall.
    #[arg(long)]
    auto_orient: bool,

    /// Write the effective page setup back to the settings file.
    #[arg(long, requires = "settings")]
    save_settings: bool,
}

/// Run the graphattr CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), GraphAttrError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Normalize(args)) => run_normalize(args),
        Some(Commands::PenStyle(args)) => run_pen_style(args),
        Some(Commands::Intersect(args)) => run_intersect(args),
        Some(Commands::Bounds(args)) => run_bounds(args),
        Some(Commands::Validate(args)) => run_validate(args),
        Some(Commands::Export(args)) => run_export(args),
        None => {
            println!("graphattr {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Attribute codecs, geometry helpers and PDF export for graph scenes.");
            println!();
            println!("Run 'graphattr --help' for usage information.");
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Fails only if a subscriber is already installed.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Execute the normalize subcommand.
fn run_normalize(args: NormalizeArgs) -> Result<(), GraphAttrError> {
    let value = if args.strict {
        decode_strict(&args.text, args.tag)?
    } else {
        decode(&args.text, args.tag)
    };
    println!("{}", encode(&value, None));
    Ok(())
}

/// Execute the pen-style subcommand.
fn run_pen_style(args: PenStyleArgs) -> Result<(), GraphAttrError> {
    let style = text_to_pen_style(&args.name, PenStyle::NoPen);
    println!("{}", pen_style_to_text(style));
    Ok(())
}

/// Execute the intersect subcommand.
fn run_intersect(args: IntersectArgs) -> Result<(), GraphAttrError> {
    let line_points = points_from_string_strict(&args.line)?;
    let &[p1, p2] = line_points.as_slice() else {
        return Err(GraphAttrError::PointListParse {
            index: line_points.len() * 2,
            message: format!(
                "a line needs exactly two points, got {}",
                line_points.len()
            ),
        });
    };
    let line = LineF::new(p1, p2);
    let polygon = PolygonF::new(points_from_string_strict(&args.polygon)?);

    let hit = if args.nearest {
        nearest_bounded_intersection(&line, &polygon)
    } else {
        first_bounded_intersection(&line, &polygon)
    };

    match hit {
        Some(p) => println!("{}", encode(&Value::PointF(p), None)),
        None => println!("none"),
    }
    Ok(())
}

/// Execute the bounds subcommand.
fn run_bounds(args: BoundsArgs) -> Result<(), GraphAttrError> {
    let scene = GraphScene::load(&args.input)?;
    let rect = scene.items_bounding_rect();
    println!(
        "{} {}",
        encode(&Value::PointF(rect.top_left()), None),
        encode(&Value::SizeF(rect.size()), None)
    );
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    error_count: usize,
    warning_count: usize,
    issues: &'a [ValidationIssue],
}

/// Execute the validate subcommand.
fn run_validate(args: ValidateArgs) -> Result<(), GraphAttrError> {
    let doc = GraphDocument::load(&args.input)?;

    let opts = validation::ValidateOptions {
        strict: args.strict,
    };
    let report = validation::validate_scene(&doc, &opts);

    match args.output {
        ReportFormat::Json => {
            let json = JsonReport {
                error_count: report.error_count(),
                warning_count: report.warning_count(),
                issues: &report.issues,
            };
            let text = serde_json::to_string_pretty(&json)
                .map_err(|e| GraphAttrError::Io(std::io::Error::from(e)))?;
            println!("{}", text);
        }
        ReportFormat::Text => {
            print!("{}", report);
        }
    }

    // Determine exit status
    let has_errors = report.error_count() > 0;
    let has_warnings = report.warning_count() > 0;

    if has_errors || (args.strict && has_warnings) {
        Err(GraphAttrError::ValidationFailed {
            error_count: report.error_count(),
            warning_count: report.warning_count(),
            report,
        })
    } else {
        Ok(())
    }
}

/// Execute the export subcommand.
fn run_export(args: ExportArgs) -> Result<(), GraphAttrError> {
    let doc = GraphDocument::load(&args.input)?;

    let report = validation::validate_scene(&doc, &validation::ValidateOptions::default());
    for issue in &report.issues {
        warn!("{}", issue);
    }
    let scene = GraphScene::from_document(&doc);

    let mut exporter = PdfExporter::new();
    let settings = match &args.settings {
        Some(path) => {
            let settings = Settings::load(path)?;
            exporter.read_settings(&settings);
            Some((path, settings))
        }
        None => None,
    };

    if let Some(name) = &args.paper {
        exporter.page_setup_mut().page_size = PageSize::standard(name).ok_or_else(|| {
            let names: Vec<&str> = export::STANDARD_PAGE_SIZES.iter().map(|(n, _, _)| *n).collect();
            GraphAttrError::UnsupportedFormat(format!(
                "paper '{}' (supported: {})",
                name,
                names.join(", ")
            ))
        })?;
    }
    if let Some(margin) = args.margin {
        if !(margin.is_finite() && margin >= 0.0) {
            return Err(GraphAttrError::UnsupportedFormat(format!(
                "margin {} (must be a non-negative number of points)",
                margin
            )));
        }
        exporter.page_setup_mut().margins = export::Margins::uniform(margin);
    }
    if args.auto_orient {
        let orientation = exporter.choose_orientation(&scene);
        debug!(%orientation, "orientation chosen from scene bounds");
    }

    exporter.export_document(&args.output, &scene)?;

    if args.save_settings {
        if let Some((path, mut settings)) = settings {
            exporter.write_settings(&mut settings);
            settings.save(path)?;
        }
    }

    println!("Exported {} to {}", args.input.display(), args.output.display());
    Ok(())
}
