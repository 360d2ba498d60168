//! Render a view description to a PNG.
//!
//! Acts as the host for one layout pass and one paint pass: reads the JSON
//! view description, decodes its image, measures under the constraints given
//! on the command line and rasterizes the result.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use picto::{
    Color, CosmicMeasurer, DisplayList, ImageLabelView, LayoutConstraints, MonospaceMeasurer,
    RasterSurface, Size, SizeConstraint, TextMeasurer, ViewConfig,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum Measurer {
    /// Shape with the system fonts.
    Cosmic,
    /// Font-independent cell estimate.
    Monospace,
}

#[derive(clap::Parser)]
struct Opts {
    /// Path to the JSON view description.
    #[arg(long)]
    config: PathBuf,

    /// Width constraint: `exact:N` or `at-most:N`.
    #[arg(long, value_parser = parse_constraint, default_value = "at-most:1024")]
    width: SizeConstraint,

    /// Height constraint: `exact:N` or `at-most:N`.
    #[arg(long, value_parser = parse_constraint, default_value = "at-most:1024")]
    height: SizeConstraint,

    /// Output image path. The format follows the extension.
    #[arg(long, default_value = "view.png")]
    out: PathBuf,

    /// Text measurement backend.
    #[arg(long, value_enum, default_value_t = Measurer::Cosmic)]
    measurer: Measurer,

    /// Canvas background as `#RRGGBB` or `#RRGGBBAA`.
    #[arg(long, default_value = "#FFFFFF")]
    background: String,
}

fn parse_constraint(s: &str) -> std::result::Result<SizeConstraint, String> {
    let (kind, value) = s
        .split_once(':')
        .ok_or_else(|| format!("expected `exact:N` or `at-most:N`, got `{s}`"))?;
    let value: u32 = value
        .trim()
        .parse()
        .map_err(|e| format!("invalid pixel count `{value}`: {e}"))?;
    match kind.trim() {
        "exact" => Ok(SizeConstraint::Exact(value)),
        "at-most" | "at_most" => Ok(SizeConstraint::AtMost(value)),
        other => Err(format!("unknown constraint kind `{other}`")),
    }
}

fn run(opts: Opts) -> Result<()> {
    let config = ViewConfig::from_path(&opts.config)
        .with_context(|| format!("reading {}", opts.config.display()))?;
    let base_dir = opts.config.parent().unwrap_or(Path::new("."));
    let (style, padding) = config
        .into_style(base_dir)
        .context("building view style")?;

    let measurer: Box<dyn TextMeasurer> = match opts.measurer {
        Measurer::Cosmic => Box::new(CosmicMeasurer::new()),
        Measurer::Monospace => Box::new(MonospaceMeasurer::default()),
    };
    let mut view = ImageLabelView::with_measurer(style, measurer).padding(padding);

    let size = view.measure(LayoutConstraints::new(opts.width, opts.height));
    info!(width = size.width, height = size.height, "measured");

    let background = Color::from_hex(&opts.background).context("parsing --background")?;

    // Image encoders reject zero-area canvases. Still run the paint pass so
    // input errors surface, but leave the output untouched.
    if size.width == 0 || size.height == 0 {
        view.paint(&mut DisplayList::new(), size).context("painting view")?;
        warn!(
            width = size.width,
            height = size.height,
            path = %opts.out.display(),
            "zero-area layout, not writing image"
        );
        return Ok(());
    }

    let mut surface = RasterSurface::new(Size::new(size.width, size.height), background);
    let plan = view.paint(&mut surface, size).context("painting view")?;
    if plan.title.truncated {
        info!(drawn = %plan.title.text, "title truncated");
    }

    surface
        .save(&opts.out)
        .with_context(|| format!("writing {}", opts.out.display()))?;
    info!(path = %opts.out.display(), "wrote image");
    Ok(())
}

fn main() -> Result<()> {
    // Set up logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    run(Opts::parse())
}
