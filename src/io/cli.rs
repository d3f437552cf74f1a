//! Command-line interface for generating a single rectangle image

use crate::algorithm::placement::{PlacementConfig, PlacementSummary, RectanglePlacer};
use crate::color::extraction::extract_colors;
use crate::io::config_file::{CanvasOverrides, ConfigFile, apply_overrides};
use crate::io::configuration::DEFAULT_OUTPUT;
use crate::io::error::{GenerationError, Result};
use crate::io::image::{export_canvas_as_png, load_canvas};
use crate::io::progress::ProgressManager;
use crate::io::sampling::sampled_config;
use crate::math::random::RandomSource;
use crate::spatial::Canvas;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "jitterect")]
#[command(
    author,
    version,
    about = "Scatter jittered rectangles over a grid and save the result as PNG"
)]
/// Command-line arguments for the rectangle generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// JSON config file describing the placement
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Use an image as the canvas (overrides canvasColor)
    #[arg(short, long, value_name = "FILE")]
    pub image: Option<PathBuf>,

    /// Extract colors from a text file containing color codes
    #[arg(short, long, value_name = "FILE")]
    pub extract: Option<PathBuf>,

    /// Output filename; always written as PNG
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Print the effective config to stdout after writing the image
    #[arg(short, long)]
    pub print_config: bool,

    /// Canvas width (overrides the config file)
    #[arg(short = 'w', long)]
    pub width: Option<u32>,

    /// Canvas height (overrides the config file)
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Horizontal distance factor (overrides the config file)
    #[arg(short = 'x', long)]
    pub x_factor: Option<u32>,

    /// Vertical distance factor (overrides the config file)
    #[arg(short = 'y', long)]
    pub y_factor: Option<u32>,

    /// Random seed for reproducible generation (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log placement details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Dimension and factor overrides given on the command line
    pub const fn overrides(&self) -> CanvasOverrides {
        CanvasOverrides {
            width: self.width,
            height: self.height,
            x_factor: self.x_factor,
            y_factor: self.y_factor,
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Install the stderr log subscriber
///
/// Warnings only by default, debug detail with `verbose`. A subscriber
/// installed earlier is left in place.
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Orchestrates config loading, canvas setup, placement and export
pub struct Generator {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl Generator {
    /// Create a new generator with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run one generation according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if no source is given, the configuration is
    /// invalid, or any file cannot be read or written
    pub fn run(&mut self) -> Result<PlacementSummary> {
        let mut rng = self.random_source();
        let mut config = self.load_config(&mut rng)?;
        let mut canvas = self.prepare_canvas(&mut config)?;

        let summary = self.place(&config, &mut canvas, &mut rng);

        export_canvas_as_png(&canvas, &self.cli.output)?;
        info!(output = %self.cli.output.display(), "image written");

        if self.cli.print_config {
            Self::print_config(&config)?;
        }

        Ok(summary)
    }

    fn random_source(&self) -> RandomSource {
        if let Some(seed) = self.cli.seed {
            RandomSource::new(seed)
        } else {
            let (rng, seed) = RandomSource::from_os();
            info!(seed, "no seed given, using a random one");
            rng
        }
    }

    fn load_config(&self, rng: &mut RandomSource) -> Result<PlacementConfig> {
        let overrides = self.cli.overrides();

        if let Some(path) = &self.cli.config {
            let mut config = ConfigFile::load(path)?.into_placement_config()?;
            apply_overrides(&mut config, &overrides)?;
            Ok(config)
        } else if let Some(path) = &self.cli.extract {
            let colors = extract_colors(path)?;
            sampled_config(colors, &overrides, rng)
        } else {
            Err(GenerationError::MissingSource)
        }
    }

    // An image-backed canvas switches on occlusion-skip and sets the grid extent
    fn prepare_canvas(&self, config: &mut PlacementConfig) -> Result<Canvas> {
        let Some(path) = &self.cli.image else {
            return Ok(Canvas::solid(
                config.canvas_width,
                config.canvas_height,
                config.canvas_color,
            ));
        };

        let canvas = load_canvas(path)?;
        let configured = (config.canvas_width, config.canvas_height);
        config.use_image_extent(canvas.width(), canvas.height());
        if configured != (config.canvas_width, config.canvas_height) {
            warn!(
                configured = %format!("{}x{}", configured.0, configured.1),
                image = %format!("{}x{}", config.canvas_width, config.canvas_height),
                x_dist_factor = config.x_dist_factor(),
                y_dist_factor = config.y_dist_factor(),
                "canvas image size differs from config, using image size with the configured spacing"
            );
        }
        Ok(canvas)
    }

    fn place(
        &self,
        config: &PlacementConfig,
        canvas: &mut Canvas,
        rng: &mut RandomSource,
    ) -> PlacementSummary {
        let placer = RectanglePlacer::new(config);

        let Some(pm) = &self.progress_manager else {
            return placer.place(canvas, rng);
        };

        pm.initialize(placer.columns().len(), "placing");
        let summary = placer.place_with_progress(canvas, rng, |column| pm.complete_column(column));
        pm.finish();
        summary
    }

    // Allow print for the config dump the user asked for
    #[allow(clippy::print_stdout)]
    fn print_config(config: &PlacementConfig) -> Result<()> {
        let json = ConfigFile::from_placement_config(config).to_pretty_json()?;
        println!("{json}");
        Ok(())
    }
}
