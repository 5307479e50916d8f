use rand::Rng;

use crate::grid::{Cell, GridGeometry};

/// The single apple on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Apple {
    position: Cell,
}

impl Apple {
    /// Creates an apple at a fixed cell.
    #[must_use]
    pub fn at(position: Cell) -> Self {
        Self { position }
    }

    /// Creates an apple at a random interior cell.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, geometry: GridGeometry) -> Self {
        Self::at(random_interior_cell(rng, geometry))
    }

    /// Moves the apple to a new random interior cell.
    ///
    /// The snake body is not consulted, so the apple may land underneath it.
    pub fn relocate<R: Rng + ?Sized>(&mut self, rng: &mut R, geometry: GridGeometry) {
        self.position = random_interior_cell(rng, geometry);
    }

    #[must_use]
    pub fn position(self) -> Cell {
        self.position
    }
}

/// Picks a uniformly random cell off the border ring.
#[must_use]
pub fn random_interior_cell<R: Rng + ?Sized>(rng: &mut R, geometry: GridGeometry) -> Cell {
    let interior = geometry.interior();
    Cell {
        x: rng.gen_range(interior.min.x..=interior.max.x),
        y: rng.gen_range(interior.min.y..=interior.max.y),
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::grid::{Cell, GridGeometry};

    use super::{Apple, random_interior_cell};

    #[test]
    fn relocation_stays_inside_interior_for_any_seed() {
        let geometry = GridGeometry::new(800, 600, 20).expect("geometry should be valid");
        let interior = geometry.interior();

        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut apple = Apple::spawn(&mut rng, geometry);
            assert!(interior.contains(apple.position()));

            for _ in 0..50 {
                apple.relocate(&mut rng, geometry);
                let Cell { x, y } = apple.position();
                assert!((1..=38).contains(&x), "x={x} escaped the interior");
                assert!((1..=28).contains(&y), "y={y} escaped the interior");
            }
        }
    }

    #[test]
    fn smallest_board_draws_stay_off_the_border() {
        let geometry = GridGeometry::new(220, 140, 20).expect("11x7 geometry should be valid");
        let mut rng = StdRng::seed_from_u64(9);

        for _ in 0..200 {
            let Cell { x, y } = random_interior_cell(&mut rng, geometry);
            assert!((1..=9).contains(&x), "x={x} escaped the interior");
            assert!((1..=5).contains(&y), "y={y} escaped the interior");
        }
    }

    #[test]
    fn seeded_relocation_is_reproducible() {
        let geometry = GridGeometry::new(800, 600, 20).expect("geometry should be valid");
        let mut first = StdRng::seed_from_u64(5);
        let mut second = StdRng::seed_from_u64(5);

        let mut a = Apple::at(Cell::new(10, 10));
        let mut b = Apple::at(Cell::new(10, 10));
        a.relocate(&mut first, geometry);
        b.relocate(&mut second, geometry);

        assert_eq!(a, b);
    }
}
