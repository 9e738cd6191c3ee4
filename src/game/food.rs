use rand::Rng;

use super::grid::{Grid, Position};

/// Pick a random unoccupied tile for food.
///
/// Returns `None` when the occupied set covers the entire board, which the
/// engine treats as a win. Otherwise samples uniformly and rejects occupied
/// tiles; a free tile exists, so the loop terminates.
pub fn spawn<R: Rng>(rng: &mut R, grid: Grid, occupied: &[Position]) -> Option<Position> {
    if occupied.len() >= grid.tile_count() {
        return None;
    }

    loop {
        let pos = Position::new(
            rng.gen_range(0..grid.width) as i32,
            rng.gen_range(0..grid.height) as i32,
        );

        if !occupied.contains(&pos) {
            return Some(pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_food_avoids_occupied_tiles() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = Grid::new(3, 3);
        // Everything occupied except (2, 2)
        let occupied: Vec<Position> = (0..3)
            .flat_map(|y| (0..3).map(move |x| Position::new(x, y)))
            .filter(|p| *p != Position::new(2, 2))
            .collect();

        for _ in 0..20 {
            assert_eq!(spawn(&mut rng, grid, &occupied), Some(Position::new(2, 2)));
        }
    }

    #[test]
    fn test_food_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let grid = Grid::new(5, 4);

        for _ in 0..100 {
            let pos = spawn(&mut rng, grid, &[]).unwrap();
            assert!(grid.contains(pos));
        }
    }

    #[test]
    fn test_full_board_returns_none() {
        let mut rng = StdRng::seed_from_u64(1);
        let grid = Grid::new(2, 2);
        let occupied = vec![
            Position::new(0, 0),
            Position::new(1, 0),
            Position::new(0, 1),
            Position::new(1, 1),
        ];

        assert_eq!(spawn(&mut rng, grid, &occupied), None);
    }
}
