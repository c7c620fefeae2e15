//! Command implementations and argument parsing for `cclabel`.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use cclabel_core::{
    BinaryMask, ComponentStats, Connectivity, LabelError, LabelledImage, Labeller,
    LabellerBuilder, Palette, component_stats, largest_component,
};
use clap::{Args, Parser, Subcommand};
use image::{GrayImage, ImageError, ImageFormat, ImageReader, Rgb, RgbImage};
use thiserror::Error;
use tracing::{Span, debug, field, info, instrument};

/// Grey level above which a pixel counts as set before polarity is applied.
pub const DEFAULT_THRESHOLD: u8 = 65;
const DEFAULT_CONNECTIVITY: u8 = 8;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "cclabel",
    version,
    about = "Label connected components in binary images."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Threshold an image and label its connected components.
    Label(LabelCommand),
}

/// Options accepted by the `label` command.
#[derive(Debug, Args, Clone)]
pub struct LabelCommand {
    /// Image to label; any format the `image` crate can decode.
    pub input: PathBuf,

    /// Neighbourhood size, 4 or 8.
    #[arg(long, default_value_t = DEFAULT_CONNECTIVITY)]
    pub connectivity: u8,

    /// Grey levels strictly above this value count as set.
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: u8,

    /// Treat pixels at or below the threshold as foreground instead.
    #[arg(long)]
    pub zero_foreground: bool,

    /// Write a false-colour PNG of the labelling to this path.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Print per-component measurements.
    #[arg(long)]
    pub stats: bool,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Opening or sniffing the input failed.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The input could not be decoded as an image.
    #[error("failed to decode `{path}`: {source}")]
    Decode {
        /// Path of the undecodable input.
        path: PathBuf,
        /// Error raised by the decoder.
        #[source]
        source: ImageError,
    },
    /// Writing the rendered labelling failed.
    #[error("failed to write `{path}`: {source}")]
    Encode {
        /// Destination path.
        path: PathBuf,
        /// Error raised by the encoder.
        #[source]
        source: ImageError,
    },
    /// The image is too large for the label range on this platform.
    #[error("image dimensions {width}x{height} exceed the addressable range")]
    Dimensions {
        /// Decoded width.
        width: u32,
        /// Decoded height.
        height: u32,
    },
    /// Mask construction or labelling failed.
    #[error(transparent)]
    Core(#[from] LabelError),
}

/// Outcome of a `label` run.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Image that was labelled.
    pub input: PathBuf,
    /// Adjacency rule used.
    pub connectivity: Connectivity,
    /// The labelling itself.
    pub image: LabelledImage,
    /// Per-component measurements when `--stats` was given.
    pub stats: Option<Vec<ComponentStats>>,
    /// Where the false-colour render was written, if anywhere.
    pub output: Option<PathBuf>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the input cannot be read, the configuration is
/// rejected or the render cannot be written.
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Label(label) => {
            Span::current().record("command", "label");
            run_label(label)
        }
    }
}

#[instrument(
    name = "cli.label",
    err,
    skip(command),
    fields(input = %command.input.display(), threshold = command.threshold, components = field::Empty),
)]
pub(super) fn run_label(command: LabelCommand) -> Result<ExecutionSummary, CliError> {
    let LabelCommand {
        input,
        connectivity,
        threshold,
        zero_foreground,
        output,
        stats,
    } = command;

    let labeller = LabellerBuilder::new()
        .with_connectivity(connectivity)
        .with_zero_foreground(zero_foreground)
        .build()?;

    let grey = load_grey(&input)?;
    let mask = threshold_mask(&grey, threshold, labeller)?;
    debug!(
        foreground = mask.foreground_count(),
        pixels = mask.len(),
        "mask thresholded"
    );

    let image = labeller.label(&mask)?;
    Span::current().record("components", image.component_count());

    if let Some(path) = &output {
        write_render(&image, grey.dimensions(), path)?;
    }

    info!(
        input = %input.display(),
        components = image.component_count(),
        "labelling completed"
    );
    Ok(ExecutionSummary {
        input,
        connectivity: labeller.connectivity(),
        stats: stats.then(|| component_stats(&image)),
        image,
        output,
    })
}

#[instrument(name = "cli.load", err, level = "debug")]
pub(super) fn load_grey(path: &Path) -> Result<GrayImage, CliError> {
    let io_error = |source: io::Error| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_error)?;
    let reader = ImageReader::new(BufReader::new(file))
        .with_guessed_format()
        .map_err(io_error)?;
    let decoded = reader.decode().map_err(|source| CliError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decoded.into_luma8())
}

fn threshold_mask(
    grey: &GrayImage,
    threshold: u8,
    labeller: Labeller,
) -> Result<BinaryMask, CliError> {
    let (width, height) = grey.dimensions();
    let too_large = || CliError::Dimensions { width, height };
    let w = usize::try_from(width).map_err(|_| too_large())?;
    let h = usize::try_from(height).map_err(|_| too_large())?;
    Ok(BinaryMask::threshold(
        w,
        h,
        grey.as_raw(),
        threshold,
        labeller.polarity(),
    )?)
}

/// Paints each component in its palette colour; `(width, height)` are the
/// dimensions of the decoded source.
#[instrument(name = "cli.render", err, level = "debug", skip(image))]
pub(super) fn write_render(
    image: &LabelledImage,
    (width, height): (u32, u32),
    path: &Path,
) -> Result<(), CliError> {
    let palette = Palette::default();
    let rgb = RgbImage::from_fn(width, height, |x, y| {
        let label = image.get(x as usize, y as usize).unwrap_or(0);
        Rgb(palette.colour(label))
    });
    rgb.save_with_format(path, ImageFormat::Png)
        .map_err(|source| CliError::Encode {
            path: path.to_path_buf(),
            source,
        })
}

/// Renders `summary` to `writer` as plain text.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let image = &summary.image;
    writeln!(writer, "input: {}", summary.input.display())?;
    writeln!(writer, "size: {}x{}", image.width(), image.height())?;
    writeln!(writer, "connectivity: {}", summary.connectivity)?;
    writeln!(writer, "components: {}", image.component_count())?;

    if let Some(stats) = &summary.stats {
        writeln!(
            writer,
            "label\tarea\tbbox\tcentroid\tperimeter\tcircularity"
        )?;
        for component in stats {
            let bbox = component.bounding_box;
            let (cx, cy) = component.centroid;
            writeln!(
                writer,
                "{}\t{}\t{},{}-{},{}\t{cx:.2},{cy:.2}\t{}\t{:.3}",
                component.label,
                component.area,
                bbox.min_x,
                bbox.min_y,
                bbox.max_x,
                bbox.max_y,
                component.perimeter,
                component.circularity(),
            )?;
        }
        if let Some(largest) = largest_component(stats) {
            writeln!(
                writer,
                "largest: {} (area {}, perimeter {}, circularity {:.3})",
                largest.label,
                largest.area,
                largest.perimeter,
                largest.circularity(),
            )?;
        }
    }

    if let Some(path) = &summary.output {
        writeln!(writer, "output: {}", path.display())?;
    }
    Ok(())
}
