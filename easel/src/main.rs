//! easel: place, tile and chroma-key images from the command line.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use easel_rs::{
    Anchors, AspectMode, Canvas2dContext, FillStyle, FitOptions, HorizontalAnchor, Image, Margin,
    PatternOptions, PatternRepeat, Region, StaggerAxis, StyleSettings, Surface, Vector2,
    VerticalAnchor,
};
use std::path::{Path, PathBuf};

/// easel: image placement, pattern tiling and chroma-key removal
#[derive(Parser, Debug)]
#[command(name = "easel", version, about, long_about = None)]
struct Cli {
    /// Log every drawing operation (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Draw an image into the output, preserving its aspect ratio
    Fit {
        #[command(flatten)]
        io: IoArgs,

        /// Cover the whole output instead of fitting inside it
        #[arg(long)]
        fill: bool,

        /// Horizontal alignment of the image in leftover space
        #[arg(long, value_enum, default_value_t = AnchorX::Center)]
        anchor_x: AnchorX,

        /// Vertical alignment of the image in leftover space
        #[arg(long, value_enum, default_value_t = AnchorY::Center)]
        anchor_y: AnchorY,

        /// Margin in pixels kept free on every side
        #[arg(long, default_value_t = 0.0)]
        margin: f32,
    },

    /// Tile an image across the output
    Pattern {
        #[command(flatten)]
        io: IoArgs,

        /// Tiles per axis, as "N" or "NxM". Derived from the image size when absent
        #[arg(long, value_parser = parse_repeat)]
        repeat: Option<PatternRepeat>,

        /// Shift every other row (x) or column (y) by half a tile
        #[arg(long, value_enum)]
        stagger: Option<Stagger>,

        /// Pattern rotation in degrees around the output center
        #[arg(long, default_value_t = 0.0)]
        rotation: f32,

        /// Gap between tiles in pixels
        #[arg(long, default_value_t = 0.0)]
        gap: f32,
    },

    /// Make pixels close to a color transparent
    ChromaKey {
        #[command(flatten)]
        io: IoArgs,

        /// Color to remove, in CSS syntax
        #[arg(short, long, default_value = "#00ff00")]
        color: String,

        /// Match tolerance, clamped to [0.01, 1]
        #[arg(short, long, default_value_t = 0.01)]
        threshold: f32,
    },
}

#[derive(Args, Debug)]
struct IoArgs {
    /// Path to input image (PNG or JPEG)
    #[arg(short, long)]
    input: PathBuf,

    /// Path to output image. The extension picks the format (.png, .jpg, .jpeg)
    #[arg(short, long)]
    output: PathBuf,

    /// Output width in pixels. Defaults to the input width
    #[arg(long)]
    width: Option<u32>,

    /// Output height in pixels. Defaults to the input height
    #[arg(long)]
    height: Option<u32>,

    /// Background color in CSS syntax, painted before the image
    #[arg(short, long)]
    background: Option<String>,

    /// JPEG quality in [0, 1]
    #[arg(short, long, default_value_t = 0.92)]
    quality: f32,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum AnchorX {
    Left,
    Center,
    Right,
}

impl From<AnchorX> for HorizontalAnchor {
    fn from(anchor: AnchorX) -> Self {
        match anchor {
            AnchorX::Left => HorizontalAnchor::Left,
            AnchorX::Center => HorizontalAnchor::Center,
            AnchorX::Right => HorizontalAnchor::Right,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum AnchorY {
    Top,
    Center,
    Bottom,
}

impl From<AnchorY> for VerticalAnchor {
    fn from(anchor: AnchorY) -> Self {
        match anchor {
            AnchorY::Top => VerticalAnchor::Top,
            AnchorY::Center => VerticalAnchor::Center,
            AnchorY::Bottom => VerticalAnchor::Bottom,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Stagger {
    X,
    Y,
}

impl From<Stagger> for StaggerAxis {
    fn from(stagger: Stagger) -> Self {
        match stagger {
            Stagger::X => StaggerAxis::X,
            Stagger::Y => StaggerAxis::Y,
        }
    }
}

fn parse_repeat(s: &str) -> Result<PatternRepeat, String> {
    let parse = |part: &str| {
        part.trim()
            .parse::<f32>()
            .map_err(|err| format!("invalid repeat count {part:?}: {err}"))
    };
    let (x, y) = match s.split_once(['x', 'X']) {
        Some((x, y)) => (parse(x)?, parse(y)?),
        None => {
            let n = parse(s)?;
            (n, n)
        }
    };
    if !(x.is_finite() && y.is_finite() && x > 0.0 && y > 0.0) {
        return Err(format!("repeat counts must be positive, got {s:?}"));
    }
    Ok(PatternRepeat::new(x, y))
}

fn output_mime(path: &Path) -> Result<&'static str> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("png") => Ok("image/png"),
        Some("jpg") | Some("jpeg") => Ok("image/jpeg"),
        _ => bail!(
            "Unsupported output extension for {} (expected .png, .jpg or .jpeg)",
            path.display()
        ),
    }
}

/// Read the input and build a surface sized from the flags or the image.
fn prepare(io: &IoArgs) -> Result<(Image, Surface<Canvas2dContext>)> {
    let image = Image::open(&io.input)
        .with_context(|| format!("Failed to read input image: {}", io.input.display()))?;

    let mut builder = Surface::builder()
        .width(io.width.unwrap_or(image.width()))
        .height(io.height.unwrap_or(image.height()));
    if let Some(background) = &io.background {
        let style = FillStyle::from_css(background)
            .with_context(|| format!("Invalid background color: {background}"))?;
        builder = builder.background(style);
    }
    let surface = builder.build().context("Failed to create drawing surface")?;
    Ok((image, surface))
}

/// Fail on any diagnostic, then encode and write the output file.
fn finish(surface: &mut Surface<Canvas2dContext>, io: &IoArgs) -> Result<()> {
    let diagnostics = surface.take_diagnostics();
    if !diagnostics.is_empty() {
        let messages: Vec<String> = diagnostics.iter().map(|d| d.to_string()).collect();
        bail!("Drawing failed: {}", messages.join("; "));
    }

    let mime = output_mime(&io.output)?;
    let bytes = surface
        .encode(mime, io.quality)
        .with_context(|| format!("Failed to encode output as {mime}"))?;
    std::fs::write(&io.output, bytes).with_context(|| {
        format!(
            "Failed to write conversion output to {}",
            io.output.display()
        )
    })?;
    log::info!("wrote {}", io.output.display());
    Ok(())
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Fit {
            io,
            fill,
            anchor_x,
            anchor_y,
            margin,
        } => {
            let (image, mut surface) = prepare(&io)?;
            let options = FitOptions {
                fill,
                anchors: Anchors::new(anchor_x.into(), anchor_y.into()),
                margin: Margin::Uniform(margin),
                ..Default::default()
            };
            surface.fill_image_fit_or_fill(&image, &options, &StyleSettings::default());
            finish(&mut surface, &io)
        }
        Commands::Pattern {
            io,
            repeat,
            stagger,
            rotation,
            gap,
        } => {
            let (image, mut surface) = prepare(&io)?;
            let options = PatternOptions {
                repeat,
                stagger: stagger.map(Into::into),
                rotation: rotation.to_radians(),
                margin: Vector2::new(gap, gap),
                ..Default::default()
            };
            surface.fill_image_pattern(&image, &options, &StyleSettings::default());
            finish(&mut surface, &io)
        }
        Commands::ChromaKey {
            io,
            color,
            threshold,
        } => {
            let (image, mut surface) = prepare(&io)?;
            // Key the image alone so the background survives
            surface
                .clear_region(&Region::default())
                .fill_image(&image, AspectMode::Stretch, &StyleSettings::default())
                .chroma_key_remove(color.as_str(), threshold);
            if let Some(background) = &io.background {
                let style = FillStyle::from_css(background)
                    .with_context(|| format!("Invalid background color: {background}"))?;
                surface.fill_region(
                    &Region::default(),
                    &StyleSettings::new()
                        .with_fill(style)
                        .with_composite("BEHIND"),
                );
            }
            finish(&mut surface, &io)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();

    run(cli.command)
}
