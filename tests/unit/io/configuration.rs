//! Tests for configuration constants

#[cfg(test)]
mod tests {
    use shapemaze::io::configuration::{
        DEFAULT_CELL_SIZE, FLOOR_CHANNEL_MIN, GLYPH_PADDING, HEART_MAZE_SIZE, HEART_OFFSET,
        HEART_SHAPE, MAX_COLUMNS, MAX_RANDOM_SIZE, MAX_ROWS, MIN_RANDOM_SIZE, SEEDED_CELL_SIZE,
        START_CELL, TEXT_PADDING,
    };

    // Tests the heart fits inside the heart maze with its offset
    #[test]
    fn test_heart_fits() {
        let side = HEART_SHAPE.len();
        assert!(HEART_SHAPE.iter().all(|row| row.len() == side));
        for (axis, &offset) in HEART_OFFSET.iter().enumerate() {
            let Ok(offset) = usize::try_from(offset) else {
                unreachable!("heart offset {axis} is non-negative");
            };
            assert!(offset + side <= HEART_MAZE_SIZE);
        }
    }

    // The heart must leave the start cell and outer ring open
    #[test]
    fn test_heart_border_open() {
        let edges = [
            HEART_SHAPE.first(),
            HEART_SHAPE.last(),
        ];
        assert!(edges.iter().flatten().all(|row| row.iter().all(|&v| v == 0)));
        assert!(HEART_SHAPE.iter().all(|row| row.first() == Some(&0) && row.last() == Some(&0)));
        assert_eq!(START_CELL, [1, 1]);
    }

    #[test]
    fn test_size_ranges() {
        assert!(MIN_RANDOM_SIZE <= MAX_RANDOM_SIZE);
        assert!(MAX_RANDOM_SIZE <= MAX_ROWS);
        assert!(MAX_ROWS <= MAX_COLUMNS);
        assert!(SEEDED_CELL_SIZE >= 3 && DEFAULT_CELL_SIZE >= SEEDED_CELL_SIZE);
        assert!(TEXT_PADDING > 0 && GLYPH_PADDING >= TEXT_PADDING);
        assert!(FLOOR_CHANNEL_MIN > 0);
    }
}
