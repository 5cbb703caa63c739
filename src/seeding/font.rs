//! Read-only font handles loaded once at startup

use std::path::{Path, PathBuf};

use rusttype::Font;

use crate::io::error::{MazeError, Result, resource_unavailable};

/// A parsed font together with the file it came from
#[derive(Clone)]
pub struct FontHandle {
    font: Font<'static>,
    path: PathBuf,
}

impl std::fmt::Debug for FontHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontHandle")
            .field("path", &self.path)
            .field("glyphs", &self.font.glyph_count())
            .finish()
    }
}

impl FontHandle {
    /// Read and parse a TrueType/OpenType font file
    ///
    /// # Errors
    ///
    /// Returns `ResourceUnavailable` if the file cannot be read or is not a font
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let bytes = std::fs::read(&path).map_err(|e| MazeError::ResourceUnavailable {
            resource: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let handle = Self::from_bytes(bytes, path)?;
        tracing::debug!(
            "loaded font {} with {} glyphs",
            handle.path.display(),
            handle.font.glyph_count()
        );
        Ok(handle)
    }

    /// Parse font data already in memory
    ///
    /// # Errors
    ///
    /// Returns `ResourceUnavailable` if the bytes are not a parsable font
    pub fn from_bytes(bytes: Vec<u8>, path: PathBuf) -> Result<Self> {
        let font = Font::try_from_vec(bytes).ok_or_else(|| {
            resource_unavailable(&path.display(), &"file is not a parsable font")
        })?;
        Ok(Self { font, path })
    }

    /// The underlying font
    pub const fn font(&self) -> &Font<'static> {
        &self.font
    }

    /// File the font was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the font has a real glyph for `c` (glyph 0 is `.notdef`)
    pub fn has_glyph(&self, c: char) -> bool {
        self.font.glyph(c).id().0 != 0
    }
}

/// Fonts available to the shape seeder
///
/// Either slot may be empty; seeding that needs a missing font fails with
/// `ResourceUnavailable` instead of silently skipping the shape.
#[derive(Debug, Clone, Default)]
pub struct FontLibrary {
    text: Option<FontHandle>,
    glyph: Option<FontHandle>,
}

impl FontLibrary {
    /// Build a library from already loaded handles
    pub const fn new(text: Option<FontHandle>, glyph: Option<FontHandle>) -> Self {
        Self { text, glyph }
    }

    /// Font for multi-line text
    ///
    /// # Errors
    ///
    /// Returns `ResourceUnavailable` if no text font was loaded
    pub fn text(&self) -> Result<&FontHandle> {
        self.text
            .as_ref()
            .ok_or_else(|| resource_unavailable(&"text font", &"no text font loaded"))
    }

    /// Font for single glyphs such as emoji
    ///
    /// # Errors
    ///
    /// Returns `ResourceUnavailable` if no glyph font was loaded
    pub fn glyph(&self) -> Result<&FontHandle> {
        self.glyph
            .as_ref()
            .ok_or_else(|| resource_unavailable(&"glyph font", &"no glyph font loaded"))
    }
}
