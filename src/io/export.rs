//! PNG export of rendered mazes and masks

use std::path::{Path, PathBuf};

use image::{ImageBuffer, PixelWithColorType};

use crate::io::error::{MazeError, Result};

/// Save an image buffer as PNG, creating the parent directory if needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn save_png<P>(img: &ImageBuffer<P, Vec<u8>>, output_path: &Path) -> Result<()>
where
    P: PixelWithColorType<Subpixel = u8>,
{
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| MazeError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| MazeError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

/// Output path for the `index`-th of `count` mazes
///
/// A single maze keeps the requested path; batches append `_<index>` to the stem.
pub fn numbered_path(base: &Path, index: usize, count: usize) -> PathBuf {
    if count <= 1 {
        base.to_path_buf()
    } else {
        with_stem_suffix(base, &format!("_{index}"))
    }
}

/// Insert `suffix` between a path's stem and its extension
pub fn with_stem_suffix(path: &Path, suffix: &str) -> PathBuf {
    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    let name = path.extension().map_or_else(
        || format!("{stem}{suffix}"),
        |extension| format!("{stem}{suffix}.{}", extension.to_string_lossy()),
    );

    if let Some(parent) = path.parent() {
        parent.join(name)
    } else {
        PathBuf::from(name)
    }
}
