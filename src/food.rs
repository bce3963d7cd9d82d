use rand::Rng;

use crate::config::{GridSize, MAX_SPAWN_ATTEMPTS};
use crate::snake::{Cell, Snake};

/// Picks a uniformly random free cell for the next food.
///
/// Draws up to [`MAX_SPAWN_ATTEMPTS`] random coordinates, then scans the grid
/// row-major for the first free cell. Returns `None` only when the snake
/// covers every cell.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, snake: &Snake) -> Option<Cell> {
    if snake.len() >= bounds.total_cells() {
        return None;
    }

    for _ in 0..MAX_SPAWN_ATTEMPTS {
        let candidate = Cell::new(
            rng.gen_range(0..i32::from(bounds.width)),
            rng.gen_range(0..i32::from(bounds.height)),
        );
        if !snake.occupies(candidate) {
            return Some(candidate);
        }
    }

    log::debug!(
        "food placement fell back to grid scan after {MAX_SPAWN_ATTEMPTS} attempts (snake length {})",
        snake.len()
    );
    first_free_cell(bounds, snake)
}

/// Returns the canonical food cell for a fresh game.
///
/// Sits at three quarters of each axis, (15, 15) on the default 20x20 board.
/// Falls back to the first free cell if that collides with `start`.
#[must_use]
pub fn initial_food(bounds: GridSize, start: Cell) -> Cell {
    let preferred = Cell::new(
        i32::from(bounds.width) * 3 / 4,
        i32::from(bounds.height) * 3 / 4,
    );
    if preferred != start {
        return preferred;
    }

    first_free_cell(bounds, &Snake::new(start)).unwrap_or(preferred)
}

fn first_free_cell(bounds: GridSize, snake: &Snake) -> Option<Cell> {
    (0..i32::from(bounds.height))
        .flat_map(|y| (0..i32::from(bounds.width)).map(move |x| Cell::new(x, y)))
        .find(|cell| !snake.occupies(*cell))
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::GridSize;
    use crate::snake::{Cell, Snake};

    use super::{initial_food, spawn_position};

    fn row_snake(width: i32, rows: i32) -> Snake {
        let cells = (0..rows)
            .flat_map(|y| (0..width).map(move |x| Cell::new(x, y)))
            .collect();
        Snake::from_cells(cells).unwrap()
    }

    #[test]
    fn food_spawn_never_overlaps_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = GridSize {
            width: 8,
            height: 6,
        };
        let snake = Snake::from_cells(vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)])
            .unwrap();

        for _ in 0..100 {
            let food = spawn_position(&mut rng, bounds, &snake).expect("grid has free cells");
            assert!(!snake.occupies(food));
            assert!(food.is_within(bounds));
        }
    }

    #[test]
    fn nearly_full_grid_finds_the_last_free_cell() {
        let mut rng = StdRng::seed_from_u64(11);
        let bounds = GridSize {
            width: 4,
            height: 4,
        };
        let mut cells: Vec<Cell> = row_snake(4, 4).cells().copied().collect();
        let free = cells.remove(9);
        let snake = Snake::from_cells(cells).unwrap();

        for _ in 0..20 {
            assert_eq!(spawn_position(&mut rng, bounds, &snake), Some(free));
        }
    }

    #[test]
    fn full_grid_yields_none() {
        let mut rng = StdRng::seed_from_u64(3);
        let bounds = GridSize {
            width: 4,
            height: 4,
        };

        assert_eq!(spawn_position(&mut rng, bounds, &row_snake(4, 4)), None);
    }

    #[test]
    fn initial_food_matches_classic_start() {
        let bounds = GridSize {
            width: 20,
            height: 20,
        };

        assert_eq!(initial_food(bounds, Cell::new(10, 10)), Cell::new(15, 15));
    }

    #[test]
    fn initial_food_avoids_start_cell() {
        let bounds = GridSize {
            width: 4,
            height: 4,
        };

        assert_ne!(initial_food(bounds, Cell::new(3, 3)), Cell::new(3, 3));
    }
}
