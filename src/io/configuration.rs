//! Generation constants and runtime configuration defaults

/// Conventional start cell for generation, top-left of the interior
pub const START_CELL: [i32; 2] = [1, 1];

// Fonts are only read at startup; both paths can be overridden from the CLI
/// Default font used for text seeding
pub const TEXT_FONT_PATH: &str = "/usr/share/fonts/truetype/noto/NotoMono-Regular.ttf";
/// Default font used for glyph (emoji) seeding
pub const GLYPH_FONT_PATH: &str = "/usr/share/fonts/truetype/ancient-scripts/Symbola_hint.ttf";
/// Pixel height used when rasterizing text
pub const TEXT_FONT_SIZE: f32 = 32.0;
/// Pixel height used when rasterizing a single glyph
pub const GLYPH_FONT_SIZE: f32 = 48.0;
/// Extra vertical spacing between text lines in pixels
pub const LINE_SPACING: f32 = 4.0;
/// Minimum glyph coverage for a pixel to be set in a 1-bit mask
pub const COVERAGE_THRESHOLD: f32 = 0.5;
/// Maximum number of text lines rasterized into a maze
pub const MAX_TEXT_LINES: usize = 3;

/// Padding around text content in grid cells
pub const TEXT_PADDING: usize = 4;
/// Padding around a glyph in grid cells
pub const GLYPH_PADDING: usize = 8;

/// Cell size for plain and heart mazes
pub const DEFAULT_CELL_SIZE: u32 = 16;
/// Cell size for text and glyph mazes, which have many more cells
pub const SEEDED_CELL_SIZE: u32 = 8;

/// Smallest size picked when no dimensions are requested
pub const MIN_RANDOM_SIZE: usize = 12;
/// Largest size picked when no dimensions are requested
pub const MAX_RANDOM_SIZE: usize = 32;
/// Upper clamp for requested rows
pub const MAX_ROWS: usize = 64;
/// Upper clamp for requested columns
pub const MAX_COLUMNS: usize = 120;

/// Lower bound of each floor color channel
pub const FLOOR_CHANNEL_MIN: u8 = 128;
/// Start marker color
pub const START_COLOR: [u8; 3] = [0, 192, 0];
/// Goal marker color
pub const GOAL_COLOR: [u8; 3] = [192, 0, 0];
/// Number of sides on the start and goal markers
pub const MARKER_SIDES: usize = 5;
/// Mask value for open pixels
pub const MASK_OPEN: u8 = 255;

/// Side length of the heart maze
pub const HEART_MAZE_SIZE: usize = 23;
/// Offset of the heart shape inside the heart maze
pub const HEART_OFFSET: [i32; 2] = [4, 4];
/// Heart outline, 1 = solid
pub const HEART_SHAPE: [[u8; 15]; 15] = [
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0, 0],
    [0, 0, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 0, 0],
    [0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0],
    [0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0],
    [0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0],
    [0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0],
    [0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0],
    [0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
];

/// Caption attached to every maze
pub const CAPTION: &str = "Can you find your way through my maze?";
/// Tags attached to every maze
pub const BASE_TAGS: [&str; 3] = ["maze", "fractal", "brainTraining"];

/// Default output file
pub const DEFAULT_OUTPUT: &str = "maze.png";
/// Suffix added to mask output filenames
pub const MASK_SUFFIX: &str = "_mask";
