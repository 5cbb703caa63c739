//! The maze commands offered to callers and the artifacts they produce

use clap::Subcommand;
use image::{GrayImage, RgbImage};
use ndarray::Array2;
use rand::Rng;

use crate::algorithm::MazeMaker;
use crate::algorithm::topology::MazeSummary;
use crate::io::configuration::{
    BASE_TAGS, CAPTION, DEFAULT_CELL_SIZE, GLYPH_PADDING, HEART_MAZE_SIZE, HEART_OFFSET,
    HEART_SHAPE, MAX_COLUMNS, MAX_RANDOM_SIZE, MAX_ROWS, MIN_RANDOM_SIZE, SEEDED_CELL_SIZE,
    TEXT_PADDING,
};
use crate::io::error::Result;
use crate::render::{render_image, render_mask};
use crate::seeding::shape::{apply_shape, seed_from_glyph, seed_from_text};
use crate::seeding::{FontLibrary, OverflowPolicy, ShapeMask};
use crate::spatial::Grid;

/// One maze request
///
/// Doubles as the CLI's subcommand list, so every command is registered here
/// explicitly.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum MazeCommand {
    /// Plain maze; missing or zero sizes are picked at random
    Random {
        /// Requested rows, clamped to 1..=64
        rows: Option<usize>,
        /// Requested columns, clamped to 1..=120; defaults to rows
        columns: Option<usize>,
    },
    /// Maze around a heart
    Heart,
    /// Maze around up to three lines of text, one per word
    Text {
        /// Lines of text
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Maze around a single glyph
    Emoji {
        /// Text whose first character is drawn
        emoji: String,
    },
}

/// Everything a caller needs to publish a maze
#[derive(Debug, Clone)]
pub struct MazeArtifact {
    /// Full-color rendering
    pub image: RgbImage,
    /// Open-floor mask with the same dimensions
    pub mask: GrayImage,
    /// Post caption
    pub caption: String,
    /// Image description for accessibility
    pub alt_text: String,
    /// Post tags
    pub tags: Vec<String>,
    /// Structural summary of the generated maze
    pub summary: MazeSummary,
}

impl MazeCommand {
    /// Short name used in logs
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Random { .. } => "random",
            Self::Heart => "heart",
            Self::Text { .. } => "text",
            Self::Emoji { .. } => "emoji",
        }
    }

    /// Whether the command rasterizes text
    pub const fn needs_text_font(&self) -> bool {
        matches!(self, Self::Text { .. })
    }

    /// Whether the command rasterizes a glyph
    pub const fn needs_glyph_font(&self) -> bool {
        matches!(self, Self::Emoji { .. })
    }

    /// Build, generate and render one maze
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A required font or glyph is unavailable
    /// - The seeded shape leaves no valid start cell
    /// - Text input is empty
    pub fn run<R: Rng>(&self, fonts: &FontLibrary, mut rng: R) -> Result<MazeArtifact> {
        let mut tags: Vec<String> = BASE_TAGS.iter().map(ToString::to_string).collect();

        let (mut maker, cell_size, alt_text) = match self {
            Self::Random { rows, columns } => {
                let rows = rows.filter(|&r| r > 0).map_or_else(
                    || rng.random_range(MIN_RANDOM_SIZE..=MAX_RANDOM_SIZE),
                    |r| r.clamp(1, MAX_ROWS),
                );
                let columns = columns
                    .filter(|&c| c > 0)
                    .map_or(rows, |c| c.clamp(1, MAX_COLUMNS));
                (
                    MazeMaker::new(columns, rows, rng)?,
                    DEFAULT_CELL_SIZE,
                    format!("A computer generated {rows} by {columns} maze."),
                )
            }
            Self::Heart => {
                let mut grid = Grid::new(HEART_MAZE_SIZE, HEART_MAZE_SIZE);
                let side = HEART_SHAPE.len();
                let shape = Array2::from_shape_fn((side, side), |(row, col)| {
                    HEART_SHAPE
                        .get(row)
                        .and_then(|cells| cells.get(col))
                        .copied()
                        .unwrap_or(0)
                });
                apply_shape(
                    &mut grid,
                    &ShapeMask::from_matrix(&shape),
                    HEART_OFFSET,
                    OverflowPolicy::Reject,
                )?;
                tags.push("❤️".to_string());
                (
                    MazeMaker::from_grid(grid, rng)?,
                    DEFAULT_CELL_SIZE,
                    format!(
                        "A computer generated {HEART_MAZE_SIZE} by {HEART_MAZE_SIZE} maze with a heart in the middle."
                    ),
                )
            }
            Self::Text { words } => {
                let (grid, _) = seed_from_text(fonts, words, TEXT_PADDING)?;
                let alt_text = format!(
                    "A computer generated {} by {} maze, containing the text: {}.",
                    grid.height(),
                    grid.width(),
                    words.join(" ")
                );
                (MazeMaker::from_grid(grid, rng)?, SEEDED_CELL_SIZE, alt_text)
            }
            Self::Emoji { emoji } => {
                let (grid, _) = seed_from_glyph(fonts, emoji, GLYPH_PADDING)?;
                tags.push(emoji.clone());
                let alt_text = format!(
                    "A computer generated {} by {} maze, containing the emoji: {emoji}.",
                    grid.height(),
                    grid.width()
                );
                (MazeMaker::from_grid(grid, rng)?, SEEDED_CELL_SIZE, alt_text)
            }
        };

        maker.generate()?;
        let image = render_image(&mut maker, cell_size)?;
        let mask = render_mask(&mut maker, cell_size)?;
        let summary = MazeSummary::of(maker.grid());
        tracing::debug!("{} maze summary: {summary:?}", self.name());

        Ok(MazeArtifact {
            image,
            mask,
            caption: CAPTION.to_string(),
            alt_text,
            tags,
            summary,
        })
    }
}
