//! Tests for PNG export and output naming

#[cfg(test)]
mod tests {
    use image::{GrayImage, Luma};
    use shapemaze::io::export::{numbered_path, save_png, with_stem_suffix};
    use std::path::{Path, PathBuf};

    #[test]
    fn test_with_stem_suffix() {
        assert_eq!(
            with_stem_suffix(Path::new("out/maze.png"), "_mask"),
            PathBuf::from("out/maze_mask.png")
        );
        assert_eq!(
            with_stem_suffix(Path::new("maze"), "_2"),
            PathBuf::from("maze_2")
        );
    }

    // Single mazes keep the requested name
    #[test]
    fn test_numbered_path() {
        let base = Path::new("maze.png");
        assert_eq!(numbered_path(base, 0, 1), PathBuf::from("maze.png"));
        assert_eq!(numbered_path(base, 0, 3), PathBuf::from("maze_0.png"));
        assert_eq!(numbered_path(base, 2, 3), PathBuf::from("maze_2.png"));
    }

    // Tests nested directories are created and the PNG reads back
    #[test]
    fn test_save_png() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temp dir is creatable");
        };
        let path = dir.path().join("nested").join("mask.png");
        let mut img = GrayImage::new(5, 4);
        img.put_pixel(2, 1, Luma([255]));

        assert!(save_png(&img, &path).is_ok());

        let Ok(loaded) = image::open(&path) else {
            unreachable!("saved PNG decodes");
        };
        let loaded = loaded.to_luma8();
        assert_eq!(loaded.dimensions(), (5, 4));
        assert_eq!(loaded.get_pixel(2, 1), &Luma([255]));
        assert_eq!(loaded.get_pixel(0, 0), &Luma([0]));
    }
}
