//! Command-line arguments.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use mapstitch::coord::{BoundingBox, CoordError};
use mapstitch::grid::MAX_ZOOM;
use mapstitch::output::OutputFormat;

/// Stitch Google Maps satellite tiles for a lat/lon bounding box into one image.
///
/// Requires the GOOGLE_MAPS_API_KEY environment variable.
#[derive(Debug, Parser)]
#[command(name = "mapstitch", version)]
pub struct Args {
    /// Northwest corner as LAT LON in degrees
    #[arg(
        short = 'n',
        long,
        num_args = 2,
        value_names = ["LAT", "LON"],
        required = true,
        allow_negative_numbers = true
    )]
    pub northwest: Vec<f64>,

    /// Southeast corner as LAT LON in degrees
    #[arg(
        short = 's',
        long,
        num_args = 2,
        value_names = ["LAT", "LON"],
        required = true,
        allow_negative_numbers = true
    )]
    pub southeast: Vec<f64>,

    /// Zoom level from 1 (world) to 20+ (buildings), at most 22
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=MAX_ZOOM as i64))]
    pub zoom: u8,

    /// Device pixel ratio requested from the API
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub scale: u8,

    /// Seconds to wait between tile requests
    #[arg(long, default_value = "0.5", value_parser = parse_delay)]
    pub delay: Duration,

    /// Output image format
    #[arg(short, long, value_enum, default_value_t = FormatArg::Bmp)]
    pub format: FormatArg,

    /// Directory the image is written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Enable debug output
    #[arg(short, long)]
    pub debug: bool,

    /// Also write log output to this file
    #[arg(short, long)]
    pub logfile: Option<PathBuf>,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Do not open the finished image in a viewer
    #[arg(long)]
    pub no_show: bool,
}

impl Args {
    /// Validated bounding box from the corner arguments.
    pub fn bounding_box(&self) -> Result<BoundingBox, CoordError> {
        BoundingBox::from_degrees(
            (self.northwest[0], self.northwest[1]),
            (self.southeast[0], self.southeast[1]),
        )
    }
}

/// Output format selection for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum FormatArg {
    /// Windows bitmap (uncompressed)
    Bmp,
    /// PNG (lossless)
    Png,
    /// JPEG (lossy, smallest)
    Jpeg,
    /// TIFF
    Tiff,
    /// WebP (lossless)
    Webp,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Bmp => OutputFormat::Bmp,
            FormatArg::Png => OutputFormat::Png,
            FormatArg::Jpeg => OutputFormat::Jpeg,
            FormatArg::Tiff => OutputFormat::Tiff,
            FormatArg::Webp => OutputFormat::Webp,
        }
    }
}

fn parse_delay(s: &str) -> Result<Duration, String> {
    let secs: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a number of seconds", s))?;
    Duration::try_from_secs_f64(secs).map_err(|e| format!("invalid delay {}: {}", s, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(extra: &[&str]) -> Result<Args, clap::Error> {
        let mut argv = vec![
            "mapstitch",
            "--northwest",
            "1.0",
            "1.0",
            "--southeast",
            "0.5",
            "1.5",
            "-z",
            "18",
        ];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv)
    }

    #[test]
    fn test_command_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.northwest, vec![1.0, 1.0]);
        assert_eq!(args.southeast, vec![0.5, 1.5]);
        assert_eq!(args.zoom, 18);
        assert_eq!(args.scale, 1);
        assert_eq!(args.delay, Duration::from_millis(500));
        assert_eq!(args.format, FormatArg::Bmp);
        assert_eq!(args.output_dir, PathBuf::from("."));
        assert!(!args.debug && !args.yes && !args.no_show);
        assert!(args.logfile.is_none());
    }

    #[test]
    fn test_negative_coordinates() {
        let args = Args::try_parse_from([
            "mapstitch", "-n", "-33.85", "151.20", "-s", "-33.87", "151.22", "-z", "17",
        ])
        .unwrap();
        assert_eq!(args.northwest, vec![-33.85, 151.20]);
        let bbox = args.bounding_box().unwrap();
        assert!(bbox.northwest.lat < 0.0);
    }

    #[test]
    fn test_scale_is_limited() {
        assert_eq!(parse(&["--scale", "2"]).unwrap().scale, 2);
        assert!(parse(&["--scale", "3"]).is_err());
    }

    #[test]
    fn test_delay_parsing() {
        assert_eq!(
            parse(&["--delay", "1.25"]).unwrap().delay,
            Duration::from_millis(1250)
        );
        assert!(parse(&["--delay", "-1"]).is_err());
        assert!(parse(&["--delay", "soon"]).is_err());
    }

    #[test]
    fn test_format_and_flags() {
        let args = parse(&["-f", "png", "-d", "-y", "--no-show", "-l", "run.log"]).unwrap();
        assert_eq!(OutputFormat::from(args.format), OutputFormat::Png);
        assert!(args.debug && args.yes && args.no_show);
        assert_eq!(args.logfile, Some(PathBuf::from("run.log")));
    }

    #[test]
    fn test_missing_required_arguments() {
        assert!(Args::try_parse_from(["mapstitch", "-z", "18"]).is_err());
        assert!(Args::try_parse_from(["mapstitch", "-n", "1", "1", "-s", "0", "2"]).is_err());
    }

    #[test]
    fn test_zoom_is_limited_to_provider_range() {
        let args = |zoom: &'static str| {
            Args::try_parse_from([
                "mapstitch", "-n", "1", "1", "-s", "0.5", "1.5", "-z", zoom,
            ])
        };
        assert_eq!(args("22").unwrap().zoom, 22);
        assert!(args("23").is_err());
        assert!(args("40").is_err());
    }

    #[test]
    fn test_invalid_number_is_rejected() {
        assert!(Args::try_parse_from([
            "mapstitch", "-n", "north", "1", "-s", "0", "2", "-z", "18"
        ])
        .is_err());
    }

    #[test]
    fn test_pole_is_rejected_by_bounding_box() {
        let args = Args::try_parse_from([
            "mapstitch", "-n", "90", "0", "-s", "80", "10", "-z", "5",
        ])
        .unwrap();
        assert!(args.bounding_box().is_err());
    }
}
