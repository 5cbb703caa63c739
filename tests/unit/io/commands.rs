//! Tests for the maze commands and their artifacts

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};
    use shapemaze::io::commands::{MazeArtifact, MazeCommand};
    use shapemaze::{MazeError, Result};
    use shapemaze::io::configuration::{
        BASE_TAGS, CAPTION, DEFAULT_CELL_SIZE, HEART_MAZE_SIZE, MAX_COLUMNS, MAX_RANDOM_SIZE,
        MAX_ROWS, MIN_RANDOM_SIZE, SEEDED_CELL_SIZE,
    };
    use shapemaze::seeding::FontLibrary;

    fn run(command: &MazeCommand, fonts: &FontLibrary, seed: u64) -> Result<MazeArtifact> {
        command.run(fonts, StdRng::seed_from_u64(seed))
    }

    // Tests explicit sizes, caption, tags and the spanning tree
    #[test]
    fn test_random_with_sizes() {
        let command = MazeCommand::Random {
            rows: Some(5),
            columns: Some(7),
        };
        let Ok(artifact) = run(&command, &FontLibrary::default(), 3) else {
            unreachable!("plain mazes need no fonts");
        };

        assert_eq!(
            artifact.image.dimensions(),
            (7 * DEFAULT_CELL_SIZE, 5 * DEFAULT_CELL_SIZE)
        );
        assert_eq!(artifact.mask.dimensions(), artifact.image.dimensions());
        assert_eq!(artifact.alt_text, "A computer generated 5 by 7 maze.");
        assert_eq!(artifact.caption, CAPTION);
        assert_eq!(artifact.tags, BASE_TAGS.map(String::from).to_vec());
        assert_eq!(artifact.summary.passages, 34);
        assert_eq!(artifact.summary.reachable_from_start, 35);
    }

    // Tests clamping and the columns-follow-rows default
    // Verified by clamping columns to MAX_ROWS
    #[test]
    fn test_random_clamps() {
        let fonts = FontLibrary::default();
        let big = MazeCommand::Random {
            rows: Some(500),
            columns: Some(500),
        };
        let Ok(artifact) = run(&big, &fonts, 1) else {
            unreachable!("plain mazes need no fonts");
        };
        assert_eq!(artifact.summary.dimensions, (MAX_COLUMNS, MAX_ROWS));

        let square = MazeCommand::Random {
            rows: Some(6),
            columns: None,
        };
        let Ok(artifact) = run(&square, &fonts, 1) else {
            unreachable!("plain mazes need no fonts");
        };
        assert_eq!(artifact.summary.dimensions, (6, 6));
    }

    // Missing and zero sizes pick a random square size
    #[test]
    fn test_random_size_range() {
        let fonts = FontLibrary::default();
        for (seed, rows) in [(1, None), (2, Some(0)), (3, None)] {
            let command = MazeCommand::Random { rows, columns: None };
            let Ok(artifact) = run(&command, &fonts, seed) else {
                unreachable!("plain mazes need no fonts");
            };
            let (width, height) = artifact.summary.dimensions;
            assert_eq!(width, height);
            assert!((MIN_RANDOM_SIZE..=MAX_RANDOM_SIZE).contains(&width));
        }
    }

    // Tests the heart is solid and the rest is one spanning tree
    // Verified by applying the heart without the offset
    #[test]
    fn test_heart() {
        let Ok(artifact) = run(&MazeCommand::Heart, &FontLibrary::default(), 4) else {
            unreachable!("heart needs no fonts");
        };
        let cells = HEART_MAZE_SIZE * HEART_MAZE_SIZE;

        assert_eq!(artifact.summary.solid_cells, 91);
        assert_eq!(artifact.summary.reachable_from_start, cells - 91);
        assert_eq!(artifact.summary.passages, cells - 91 - 1);
        assert!(artifact.tags.contains(&"❤️".to_string()));
        assert_eq!(
            artifact.image.dimensions(),
            (23 * DEFAULT_CELL_SIZE, 23 * DEFAULT_CELL_SIZE)
        );
    }

    // Tests text and emoji commands surface missing fonts
    #[test]
    fn test_seeded_commands_need_fonts() {
        let fonts = FontLibrary::default();
        let text = MazeCommand::Text {
            words: vec!["hi".to_string()],
        };
        let emoji = MazeCommand::Emoji {
            emoji: "A".to_string(),
        };
        assert!(matches!(
            run(&text, &fonts, 0),
            Err(MazeError::ResourceUnavailable { .. })
        ));
        assert!(matches!(
            run(&emoji, &fonts, 0),
            Err(MazeError::ResourceUnavailable { .. })
        ));
        assert!(text.needs_text_font() && !text.needs_glyph_font());
        assert!(emoji.needs_glyph_font() && !emoji.needs_text_font());
        assert!(!MazeCommand::Heart.needs_text_font());
    }

    #[test]
    fn test_text_and_emoji() {
        let Some(font) = crate::system_font() else {
            return;
        };
        let fonts = FontLibrary::new(Some(font.clone()), Some(font));

        let text = MazeCommand::Text {
            words: vec!["Hi".to_string(), "there".to_string()],
        };
        let Ok(artifact) = run(&text, &fonts, 5) else {
            unreachable!("text seeds with a system font");
        };
        let (width, height) = artifact.summary.dimensions;
        assert_eq!(
            artifact.image.dimensions(),
            (width as u32 * SEEDED_CELL_SIZE, height as u32 * SEEDED_CELL_SIZE)
        );
        assert!(artifact.summary.solid_cells > 0);
        assert!(artifact.alt_text.ends_with("containing the text: Hi there."));
        assert!(artifact.alt_text.contains(&format!("{height} by {width}")));

        let emoji = MazeCommand::Emoji {
            emoji: "A".to_string(),
        };
        let Ok(artifact) = run(&emoji, &fonts, 5) else {
            unreachable!("glyph seeds with a system font");
        };
        assert_eq!(artifact.tags.last().map(String::as_str), Some("A"));
    }

    #[test]
    fn test_command_names() {
        assert_eq!(MazeCommand::Heart.name(), "heart");
        assert_eq!(
            MazeCommand::Random {
                rows: None,
                columns: None
            }
            .name(),
            "random"
        );
    }
}
