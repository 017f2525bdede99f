use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};

use pixmatrix::logger;
use pixmatrix::matrix_pipeline::{
    BrightnessRange, EditedWindow, ExportConfig, InversionMode, Operation, Session, TiffCompression,
    TiffMatrixWriter, TransformConfig,
};

use tracing::{error, info};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RangeArg {
    /// Brightness offset in [-100, 100]
    Signed,
    /// Brightness offset in [0, 100]
    Positive,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum InversionArg {
    Fixed,
    Blended,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CompressionArg {
    None,
    Lzw,
    Deflate,
}

/// Shows an image as a matrix of numbers: a 5×5 window of real pixel values
/// next to brightness, inversion, threshold and user-edited variants.
#[derive(Parser, Debug)]
#[command(name = "pixmatrix", version)]
struct Cli {
    /// JPEG or PNG image to inspect
    #[arg(long, short)]
    input: PathBuf,

    /// Start row of the 5×5 window (clamped to the image)
    #[arg(long, default_value_t = 0)]
    row: usize,

    /// Start column of the 5×5 window (clamped to the image)
    #[arg(long, default_value_t = 0)]
    col: usize,

    /// Brightness offset added to every pixel
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    brightness: i32,

    /// Declared range of the brightness offset
    #[arg(long, value_enum, default_value_t = RangeArg::Signed)]
    brightness_range: RangeArg,

    /// Inversion strength in percent (blended inversion only)
    #[arg(long, default_value_t = 100)]
    strength: i32,

    /// Fixed `255 - v` or strength-weighted blend
    #[arg(long, value_enum, default_value_t = InversionArg::Blended)]
    inversion: InversionArg,

    /// Threshold level; pixels strictly above it become white
    #[arg(long, default_value_t = 128)]
    threshold: i32,

    /// Operation applied to the RGB image: brightness, inversion or grayscale
    #[arg(long, default_value = "brightness")]
    operation: Operation,

    /// File with 5 lines of 5 integers replacing the window values
    #[arg(long)]
    edits: Option<PathBuf>,

    /// Single window cell edit as ROW,COL=VALUE (window-relative), repeatable
    #[arg(long = "set", value_name = "ROW,COL=VALUE")]
    cells: Vec<String>,

    /// Directory to write one TIFF per panel into
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Also write each panel's 5×5 window as its own TIFF
    #[arg(long, default_value_t = false)]
    windows: bool,

    #[arg(long, value_enum, default_value_t = CompressionArg::None)]
    compression: CompressionArg,

    /// Debug logging for this crate (RUST_LOG is honoured otherwise)
    #[arg(long, short, default_value_t = false)]
    verbose: bool,
}

fn parse_cell(spec: &str) -> Result<(usize, usize, i32)> {
    let (coords, value) = spec
        .split_once('=')
        .with_context(|| format!("cell edit '{spec}' is missing '='"))?;
    let (row, col) = coords
        .split_once(',')
        .with_context(|| format!("cell edit '{spec}' needs ROW,COL before '='"))?;
    Ok((
        row.trim().parse().with_context(|| format!("bad row in '{spec}'"))?,
        col.trim().parse().with_context(|| format!("bad column in '{spec}'"))?,
        value.trim().parse().with_context(|| format!("bad value in '{spec}'"))?,
    ))
}

fn run(cli: Cli) -> Result<()> {
    let config = TransformConfig::builder()
        .brightness_range(match cli.brightness_range {
            RangeArg::Signed => BrightnessRange::Signed,
            RangeArg::Positive => BrightnessRange::Positive,
        })
        .inversion(match cli.inversion {
            InversionArg::Fixed => InversionMode::Fixed,
            InversionArg::Blended => InversionMode::Blended,
        })
        .build();

    let mut session = Session::new(config);
    let shape = session
        .load_file(&cli.input)
        .with_context(|| format!("failed to load {}", cli.input.display()))?;
    info!("Image shape: {}", shape);

    let selector = session.set_window(cli.row, cli.col)?;
    if (selector.start_row, selector.start_col) != (cli.row, cli.col) {
        info!(
            "Window clamped to row {}, col {}",
            selector.start_row, selector.start_col
        );
    }

    session.set_brightness(cli.brightness);
    session.set_inversion_strength(cli.strength);
    session.set_threshold(cli.threshold);
    session.set_operation(cli.operation);

    if let Some(path) = &cli.edits {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read edits from {}", path.display()))?;
        let edits: EditedWindow = text.parse()?;
        session.set_edits(edits);
    }
    for spec in &cli.cells {
        let (row, col, value) = parse_cell(spec)?;
        session.set_cell(row, col, value)?;
    }

    let frame = session.render()?;
    println!("{frame}");

    if let Some(dir) = &cli.out_dir {
        let export = ExportConfig::builder()
            .compression(match cli.compression {
                CompressionArg::None => TiffCompression::None,
                CompressionArg::Lzw => TiffCompression::Lzw,
                CompressionArg::Deflate => TiffCompression::Deflate,
            })
            .include_windows(cli.windows)
            .build();
        let written = frame.export(dir, &TiffMatrixWriter, &export)?;
        info!("Wrote {} files to {}", written.len(), dir.display());
    } else if cli.windows {
        bail!("--windows requires --out-dir");
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    info!("Starting pixmatrix...");

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        return Err(e);
    }
    Ok(())
}
