//! Command-line surface
//!
//! One subcommand per engine operation. Each reads one PGM (two for the
//! arithmetic commands), runs the operation and writes one PGM.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{ArgAction, Parser, Subcommand};
use graymap::Raster;
use graymap::{detect, filter, io, transform};

#[derive(Parser, Debug)]
#[command(name = "graymap", version, about = "Grayscale PGM image processing")]
pub struct Cli {
    /// Verbosity, repeat for more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output file (defaults to a per-command name in the current directory)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Add two images, clamping at the first image's ceiling
    Addition { input: PathBuf, other: PathBuf },
    /// Subtract the second image from the first, clamping at 0
    Soustraction { input: PathBuf, other: PathBuf },
    /// Add a constant to every sample
    Luminosite {
        input: PathBuf,
        #[arg(allow_negative_numbers = true)]
        delta: i32,
    },
    /// Stretch intensities to the full range
    Contrast { input: PathBuf },
    /// Histogram equalization
    #[command(alias = "eq_histogramme")]
    EqHistogramme { input: PathBuf },
    /// Binarize at a fixed threshold
    Seuillage {
        input: PathBuf,
        #[arg(allow_negative_numbers = true)]
        seuil: i32,
    },
    /// Binarize at the Otsu threshold
    Otsu { input: PathBuf },
    /// 3x3 mean smoothing
    Moyenneur { input: PathBuf },
    /// 3x3 Gaussian smoothing
    Gaussien { input: PathBuf },
    /// Robert cross edge magnitude
    Robert { input: PathBuf },
    /// Prewitt edge magnitude
    Prewitt { input: PathBuf },
    /// Sobel edge magnitude
    Sobel { input: PathBuf },
    /// Laplacian edge magnitude
    Laplace { input: PathBuf },
    /// Thresholded Robert cross edges
    #[command(alias = "robert_seuil")]
    RobertSeuil { input: PathBuf, seuil: u32 },
    /// Thresholded Prewitt edges
    #[command(alias = "prewitt_seuil")]
    PrewittSeuil { input: PathBuf, seuil: u32 },
    /// Thresholded Sobel edges
    #[command(alias = "sobel_seuil")]
    SobelSeuil { input: PathBuf, seuil: u32 },
    /// Thresholded Laplacian edges
    #[command(alias = "laplace_seuil")]
    LaplaceSeuil { input: PathBuf, seuil: u32 },
    /// Detect straight lines and draw them over the input
    Hough {
        input: PathBuf,
        /// Prewitt threshold for the edge stage
        seuil: u32,
    },
    /// Halve the image size
    #[command(alias = "zoom_in")]
    ZoomIn { input: PathBuf },
    /// Double the image size
    #[command(alias = "zoom_out")]
    ZoomOut { input: PathBuf },
}

impl Command {
    /// Subcommand name as shown in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Addition { .. } => "addition",
            Command::Soustraction { .. } => "soustraction",
            Command::Luminosite { .. } => "luminosite",
            Command::Contrast { .. } => "contrast",
            Command::EqHistogramme { .. } => "eq-histogramme",
            Command::Seuillage { .. } => "seuillage",
            Command::Otsu { .. } => "otsu",
            Command::Moyenneur { .. } => "moyenneur",
            Command::Gaussien { .. } => "gaussien",
            Command::Robert { .. } => "robert",
            Command::Prewitt { .. } => "prewitt",
            Command::Sobel { .. } => "sobel",
            Command::Laplace { .. } => "laplace",
            Command::RobertSeuil { .. } => "robert-seuil",
            Command::PrewittSeuil { .. } => "prewitt-seuil",
            Command::SobelSeuil { .. } => "sobel-seuil",
            Command::LaplaceSeuil { .. } => "laplace-seuil",
            Command::Hough { .. } => "hough",
            Command::ZoomIn { .. } => "zoom-in",
            Command::ZoomOut { .. } => "zoom-out",
        }
    }

    /// Output file written when `--output` is not given.
    pub fn default_output(&self) -> &'static str {
        match self {
            Command::Addition { .. } => "somme_img.pgm",
            Command::Soustraction { .. } => "diff_img.pgm",
            Command::Luminosite { .. } => "lumin_img.pgm",
            Command::Contrast { .. } => "contrast_img.pgm",
            Command::EqHistogramme { .. } => "eq_hist_img.pgm",
            Command::Seuillage { .. } => "seuillage_img.pgm",
            Command::Otsu { .. } => "otsu_img.pgm",
            Command::Moyenneur { .. } => "moyenneur_img.pgm",
            Command::Gaussien { .. } => "gaussien_img.pgm",
            Command::Robert { .. } => "robert_img.pgm",
            Command::Prewitt { .. } => "prewitt_img.pgm",
            Command::Sobel { .. } => "sobel_img.pgm",
            Command::Laplace { .. } => "laplace_img.pgm",
            Command::RobertSeuil { .. } => "robert_seuil_img.pgm",
            Command::PrewittSeuil { .. } => "prewitt_seuil_img.pgm",
            Command::SobelSeuil { .. } => "sobel_seuil_img.pgm",
            Command::LaplaceSeuil { .. } => "laplace_seuil_img.pgm",
            Command::Hough { .. } => "hough_img.pgm",
            Command::ZoomIn { .. } => "zoom_in_img.pgm",
            Command::ZoomOut { .. } => "zoom_out_img.pgm",
        }
    }

    /// The primary input image path.
    pub fn input(&self) -> &Path {
        match self {
            Command::Addition { input, .. }
            | Command::Soustraction { input, .. }
            | Command::Luminosite { input, .. }
            | Command::Contrast { input }
            | Command::EqHistogramme { input }
            | Command::Seuillage { input, .. }
            | Command::Otsu { input }
            | Command::Moyenneur { input }
            | Command::Gaussien { input }
            | Command::Robert { input }
            | Command::Prewitt { input }
            | Command::Sobel { input }
            | Command::Laplace { input }
            | Command::RobertSeuil { input, .. }
            | Command::PrewittSeuil { input, .. }
            | Command::SobelSeuil { input, .. }
            | Command::LaplaceSeuil { input, .. }
            | Command::Hough { input, .. }
            | Command::ZoomIn { input }
            | Command::ZoomOut { input } => input,
        }
    }

    /// Run the operation on an already loaded input.
    ///
    /// The arithmetic commands load their second operand themselves.
    pub fn apply(&self, src: &Raster) -> anyhow::Result<Raster> {
        let out = match self {
            Command::Addition { other, .. } => src.arith_add(&load(other)?)?,
            Command::Soustraction { other, .. } => src.arith_subtract(&load(other)?)?,
            Command::Luminosite { delta, .. } => src.add_constant(*delta)?,
            Command::Contrast { .. } => filter::stretch_contrast(src)?,
            Command::EqHistogramme { .. } => filter::equalize(src)?,
            Command::Seuillage { seuil, .. } => filter::threshold(src, *seuil)?,
            Command::Otsu { .. } => {
                let t = filter::otsu_threshold_value(src);
                log::info!("otsu threshold: {t}");
                filter::threshold(src, t as i32)?
            }
            Command::Moyenneur { .. } => filter::smooth_mean(src)?,
            Command::Gaussien { .. } => filter::smooth_gaussian(src)?,
            Command::Robert { .. } => filter::robert_edge(src)?,
            Command::Prewitt { .. } => filter::prewitt_edge(src)?,
            Command::Sobel { .. } => filter::sobel_edge(src)?,
            Command::Laplace { .. } => filter::laplacian_edge(src)?,
            Command::RobertSeuil { seuil, .. } => filter::robert_edge_threshold(src, *seuil)?,
            Command::PrewittSeuil { seuil, .. } => filter::prewitt_edge_threshold(src, *seuil)?,
            Command::SobelSeuil { seuil, .. } => filter::sobel_edge_threshold(src, *seuil)?,
            Command::LaplaceSeuil { seuil, .. } => {
                filter::laplacian_edge_threshold(src, *seuil)?
            }
            Command::Hough { seuil, .. } => {
                let options = detect::HoughOptions::default().with_edge_threshold(*seuil);
                let result = detect::hough_transform(src, &options)?;
                log::info!("hough: {} line(s) detected", result.lines.len());
                for line in &result.lines {
                    log::debug!(
                        "line rho={} theta={} votes={}",
                        line.rho,
                        line.theta_deg,
                        line.votes
                    );
                }
                result.overlay
            }
            Command::ZoomIn { .. } => transform::zoom_in(src)?,
            Command::ZoomOut { .. } => transform::zoom_out(src)?,
        };
        Ok(out)
    }
}

impl Cli {
    /// Resolved output path.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.command.default_output()))
    }

    /// Log filter for the requested verbosity.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    /// Load the input, apply the command and write the result.
    pub fn run(&self) -> anyhow::Result<()> {
        let input = self.command.input();
        let output = self.output_path();
        log::info!(
            "{}: {} -> {}",
            self.command.name(),
            input.display(),
            output.display()
        );

        let src = load(input)?;
        let out = self.command.apply(&src)?;
        io::write_image(&out, &output)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        Ok(())
    }
}

/// Process exit status for a command-line parse outcome.
///
/// `--help` and `--version` succeed; an unknown command or a malformed
/// argument exits with 1 like any other failure.
pub fn parse_exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

fn load(path: &Path) -> anyhow::Result<Raster> {
    io::read_image(path).with_context(|| format!("Failed to read {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_parse_threshold_command() {
        let cli = parse(&["graymap", "seuillage", "in.pgm", "128"]);
        assert_eq!(
            cli.command,
            Command::Seuillage {
                input: PathBuf::from("in.pgm"),
                seuil: 128
            }
        );
        assert_eq!(cli.output_path(), PathBuf::from("seuillage_img.pgm"));
        assert_eq!(cli.log_level(), log::LevelFilter::Warn);
    }

    #[test]
    fn test_parse_negative_delta() {
        let cli = parse(&["graymap", "luminosite", "in.pgm", "-40"]);
        assert!(matches!(cli.command, Command::Luminosite { delta: -40, .. }));
    }

    #[test]
    fn test_parse_output_and_verbosity() {
        let cli = parse(&["graymap", "-vv", "otsu", "in.pgm", "-o", "out.pgm"]);
        assert_eq!(cli.output_path(), PathBuf::from("out.pgm"));
        assert_eq!(cli.log_level(), log::LevelFilter::Debug);
        assert_eq!(cli.command.name(), "otsu");
    }

    #[test]
    fn test_underscore_aliases() {
        let cli = parse(&["graymap", "eq_histogramme", "in.pgm"]);
        assert_eq!(cli.command.default_output(), "eq_hist_img.pgm");
        let cli = parse(&["graymap", "sobel_seuil", "in.pgm", "50"]);
        assert_eq!(cli.command.name(), "sobel-seuil");
        let cli = parse(&["graymap", "zoom-out", "in.pgm"]);
        assert_eq!(cli.command.default_output(), "zoom_out_img.pgm");
    }

    #[test]
    fn test_rejects_bad_arguments() {
        // missing threshold
        assert!(Cli::try_parse_from(["graymap", "hough", "in.pgm"]).is_err());
        // not a number
        assert!(Cli::try_parse_from(["graymap", "seuillage", "in.pgm", "abc"]).is_err());
        // edge thresholds are unsigned
        assert!(Cli::try_parse_from(["graymap", "prewitt-seuil", "in.pgm", "-1"]).is_err());
        assert!(Cli::try_parse_from(["graymap", "bogus", "in.pgm"]).is_err());
    }

    #[test]
    fn test_parse_errors_exit_with_one() {
        let err = Cli::try_parse_from(["graymap", "bogus", "p.pgm"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
        assert_eq!(parse_exit_code(err.kind()), 1);

        let err = Cli::try_parse_from(["graymap", "seuillage", "p.pgm", "abc"]).unwrap_err();
        assert_eq!(parse_exit_code(err.kind()), 1);

        let err = Cli::try_parse_from(["graymap"]).unwrap_err();
        assert_eq!(parse_exit_code(err.kind()), 1);

        let err = Cli::try_parse_from(["graymap", "--help"]).unwrap_err();
        assert_eq!(parse_exit_code(err.kind()), 0);
        let err = Cli::try_parse_from(["graymap", "--version"]).unwrap_err();
        assert_eq!(parse_exit_code(err.kind()), 0);
    }

    #[test]
    fn test_apply_in_memory() {
        let src = Raster::from_data(4, 4, 255, (0..16).map(|v| v * 16).collect()).unwrap();

        let cmd = Command::Seuillage {
            input: PathBuf::new(),
            seuil: 128,
        };
        let out = cmd.apply(&src).unwrap();
        assert_eq!(out.count_pixels(), 8);

        let cmd = Command::ZoomIn {
            input: PathBuf::new(),
        };
        let out = cmd.apply(&src).unwrap();
        assert_eq!((out.width(), out.height()), (2, 2));

        let cmd = Command::Seuillage {
            input: PathBuf::new(),
            seuil: 300,
        };
        assert!(cmd.apply(&src).is_err());
    }
}
