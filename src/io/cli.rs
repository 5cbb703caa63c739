//! Command-line interface for generating maze images

use crate::io::commands::MazeCommand;
use crate::io::configuration::{DEFAULT_OUTPUT, GLYPH_FONT_PATH, MASK_SUFFIX, TEXT_FONT_PATH};
use crate::io::error::{Result, invalid_parameter};
use crate::io::export::{numbered_path, save_png, with_stem_suffix};
use crate::io::progress::ProgressManager;
use crate::seeding::{FontHandle, FontLibrary};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "shapemaze")]
#[command(
    author,
    version,
    about = "Generate mazes, optionally carved around text, an emoji or a heart"
)]
/// Command-line arguments for the maze generator
pub struct Cli {
    /// Random seed for reproducible mazes (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Output PNG path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Number of mazes to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Also write the open-floor mask next to each image
    #[arg(short, long)]
    pub mask: bool,

    /// Suppress progress and summary output
    #[arg(short, long)]
    pub quiet: bool,

    /// Font used for text mazes
    #[arg(long, default_value = TEXT_FONT_PATH)]
    pub text_font: PathBuf,

    /// Font used for emoji mazes
    #[arg(long, default_value = GLYPH_FONT_PATH)]
    pub glyph_font: PathBuf,

    /// Which maze to generate
    #[command(subcommand)]
    pub command: MazeCommand,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Load the fonts this command needs
    ///
    /// # Errors
    ///
    /// Returns `ResourceUnavailable` if a needed font cannot be loaded
    pub fn load_fonts(&self) -> Result<FontLibrary> {
        let text = self
            .command
            .needs_text_font()
            .then(|| FontHandle::load(&self.text_font))
            .transpose()?;
        let glyph = self
            .command
            .needs_glyph_font()
            .then(|| FontHandle::load(&self.glyph_font))
            .transpose()?;
        Ok(FontLibrary::new(text, glyph))
    }

    /// Random source for the `index`-th maze
    ///
    /// With a seed, maze `i` uses `seed + i` so every file of a batch is
    /// reproducible on its own.
    pub fn rng_for(&self, index: usize) -> StdRng {
        self.seed.map_or_else(StdRng::from_os_rng, |seed| {
            StdRng::seed_from_u64(seed.wrapping_add(index as u64))
        })
    }
}

/// Generates a batch of mazes and writes them to disk
pub struct MazeBatch {
    cli: Cli,
    fonts: FontLibrary,
    progress: ProgressManager,
}

impl MazeBatch {
    /// Validate arguments and load fonts once for the whole batch
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is zero or a needed font cannot be loaded
    pub fn new(cli: Cli) -> Result<Self> {
        if cli.count == 0 {
            return Err(invalid_parameter("count", &cli.count, &"must be positive"));
        }
        let fonts = cli.load_fonts()?;
        let progress = if cli.should_show_progress() {
            ProgressManager::new(cli.count)
        } else {
            ProgressManager::hidden()
        };
        Ok(Self {
            cli,
            fonts,
            progress,
        })
    }

    /// Generate every maze in the batch, returning the paths written
    ///
    /// # Errors
    ///
    /// Returns an error if generation, rendering or export fails
    pub fn run(&mut self) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(self.cli.count * 2);

        for index in 0..self.cli.count {
            let start_time = Instant::now();
            let artifact = self.cli.command.run(&self.fonts, self.cli.rng_for(index))?;

            let image_path = numbered_path(&self.cli.output, index, self.cli.count);
            save_png(&artifact.image, &image_path)?;
            written.push(image_path.clone());

            if self.cli.mask {
                let mask_path = with_stem_suffix(&image_path, MASK_SUFFIX);
                save_png(&artifact.mask, &mask_path)?;
                written.push(mask_path);
            }

            if !self.cli.quiet {
                tracing::info!(
                    "{} ({} passages, {:.1?}): {}",
                    image_path.display(),
                    artifact.summary.passages,
                    start_time.elapsed(),
                    artifact.alt_text
                );
            }
            self.progress
                .complete_one(&image_path.display().to_string());
        }

        self.progress.finish();
        Ok(written)
    }
}
