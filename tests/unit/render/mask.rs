//! Tests for the boolean occupancy mask

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};
    use shapemaze::MazeMaker;
    use shapemaze::render::mask::is_open;
    use shapemaze::render::render_mask;
    use shapemaze::spatial::{Direction, Grid};

    // Tests mask size matches the image layout
    #[test]
    fn test_mask_dimensions() {
        let Ok(mut maker) = MazeMaker::seeded(3, 5, 1) else {
            unreachable!("positive dimensions are valid");
        };
        let mask = render_mask(&mut maker, 10);
        assert_eq!(mask.ok().map(|mask| mask.dimensions()), Some((30, 50)));
    }

    // Tests floor is open and solid cells are closed
    // Verified by filling interiors of solid cells
    #[test]
    fn test_mask_excludes_solid_cells() {
        let mut grid = Grid::new(3, 3);
        grid.mark_blocked([2, 2]);
        let Ok(mut maker) = MazeMaker::from_grid(grid, StdRng::seed_from_u64(6)) else {
            unreachable!("grid is non-empty");
        };
        assert!(maker.generate().is_ok());
        let Ok(mask) = render_mask(&mut maker, 8) else {
            unreachable!("valid cell size");
        };

        assert!(is_open(&mask, 3, 3), "cell (1, 1) floor");
        assert!(!is_open(&mask, 11, 11), "cell (2, 2) is solid");
        assert!(!is_open(&mask, 0, 0), "corners are wall");
        assert!(!is_open(&mask, 100, 100), "outside the mask");
    }

    // Tests passages open the shared border and walls keep it closed
    // Verified by skipping wall extensions in open_regions
    #[test]
    fn test_mask_follows_walls() {
        let Ok(mut maker) = MazeMaker::seeded(2, 1, 0) else {
            unreachable!("positive dimensions are valid");
        };
        assert!(maker.generate().is_ok());
        assert!(!maker.grid().get([1, 1]).has_wall(Direction::East));

        let Ok(mask) = render_mask(&mut maker, 8) else {
            unreachable!("valid cell size");
        };
        // Border between the two cells spans x = 6..=9
        for x in 6..=9 {
            assert!(is_open(&mask, x, 4), "x = {x} should be open");
        }
        // Outer border stays closed
        assert!(!is_open(&mask, 0, 4));
        assert!(!is_open(&mask, 4, 0));
        assert!(!is_open(&mask, 15, 4));
    }
}
