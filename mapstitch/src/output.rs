//! Saving and displaying the stitched image.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::str::FromStr;

use chrono::{DateTime, Local};
use image::codecs::jpeg::JpegEncoder;
use image::{ImageFormat, ImageResult, RgbImage};
use thiserror::Error;
use tracing::info;

/// Prefix of every output file name.
pub const FILE_PREFIX: &str = "satellite_";

/// JPEG quality for saved images; the encoder default of 75 smears fine detail.
pub const JPEG_QUALITY: u8 = 90;

/// Errors while writing or showing the result.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to save image to {path}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to open image viewer for {path}: {source}")]
    Show {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unknown output format '{0}' (expected bmp, png, jpeg, tiff or webp)")]
    UnknownFormat(String),
}

/// Supported output image formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Bmp,
    Png,
    Jpeg,
    Tiff,
    Webp,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 5] = [
        OutputFormat::Bmp,
        OutputFormat::Png,
        OutputFormat::Jpeg,
        OutputFormat::Tiff,
        OutputFormat::Webp,
    ];

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Bmp => "bmp",
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpg",
            OutputFormat::Tiff => "tiff",
            OutputFormat::Webp => "webp",
        }
    }

    pub fn image_format(&self) -> ImageFormat {
        match self {
            OutputFormat::Bmp => ImageFormat::Bmp,
            OutputFormat::Png => ImageFormat::Png,
            OutputFormat::Jpeg => ImageFormat::Jpeg,
            OutputFormat::Tiff => ImageFormat::Tiff,
            OutputFormat::Webp => ImageFormat::WebP,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Jpeg => "jpeg",
            other => other.extension(),
        };
        f.write_str(name)
    }
}

impl FromStr for OutputFormat {
    type Err = OutputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bmp" => Ok(OutputFormat::Bmp),
            "png" => Ok(OutputFormat::Png),
            "jpg" | "jpeg" => Ok(OutputFormat::Jpeg),
            "tif" | "tiff" => Ok(OutputFormat::Tiff),
            "webp" => Ok(OutputFormat::Webp),
            _ => Err(OutputError::UnknownFormat(s.to_string())),
        }
    }
}

/// File name for an image produced at `now`, e.g. `satellite_20240131_235959.bmp`.
pub fn output_filename(now: DateTime<Local>, format: OutputFormat) -> String {
    format!(
        "{}{}.{}",
        FILE_PREFIX,
        now.format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}

/// Writes `image` into `dir` under a timestamped name and returns the path.
pub fn save_image(
    image: &RgbImage,
    dir: &Path,
    format: OutputFormat,
) -> Result<PathBuf, OutputError> {
    let path = dir.join(output_filename(Local::now(), format));
    write_image(image, &path, format).map_err(|source| OutputError::Save {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), width = image.width(), height = image.height(), "Saved image");
    Ok(path)
}

fn write_image(image: &RgbImage, path: &Path, format: OutputFormat) -> ImageResult<()> {
    match format {
        OutputFormat::Jpeg => {
            let mut writer = BufWriter::new(File::create(path)?);
            image.write_with_encoder(JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY))?;
            writer.flush()?;
            Ok(())
        }
        _ => image.save_with_format(path, format.image_format()),
    }
}

/// Opens `path` in the desktop's default image viewer without waiting for it.
pub fn show_image(path: &Path) -> Result<(), OutputError> {
    viewer_command(path)
        .spawn()
        .map(|_| ())
        .map_err(|source| OutputError::Show {
            path: path.to_path_buf(),
            source,
        })
}

fn viewer_command(path: &Path) -> Command {
    if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]).arg(path);
        cmd
    } else if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(path);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(path);
        cmd
    }
}
