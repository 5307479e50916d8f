use std::collections::VecDeque;

use crate::grid::{Cell, GridGeometry};
use crate::input::Direction;

/// Cells of a freshly spawned snake, oldest first.
pub const INITIAL_BODY: [Cell; 5] = [
    Cell::new(5, 5),
    Cell::new(6, 5),
    Cell::new(7, 5),
    Cell::new(8, 5),
    Cell::new(9, 5),
];

/// Result of one movement step.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Outcome {
    AppleEaten,
    HitWall,
    HitSelf,
}

/// Mutable snake state and movement buffering behavior.
///
/// The body is stored oldest cell first; the newest cell is the one the snake
/// moves from and the one that grows onto the apple.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    pending_direction: Direction,
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}

impl Snake {
    /// Creates the five-cell starting snake heading right.
    #[must_use]
    pub fn new() -> Self {
        Self::from_cells(INITIAL_BODY.to_vec(), Direction::Right)
    }

    /// Creates a snake from explicit cells (last is head).
    ///
    /// # Panics
    ///
    /// Panics if `cells` is empty.
    #[must_use]
    pub fn from_cells(cells: Vec<Cell>, direction: Direction) -> Self {
        assert!(!cells.is_empty(), "snake body needs at least one cell");

        Self {
            body: VecDeque::from(cells),
            direction,
            pending_direction: direction,
        }
    }

    /// Applies one movement step against `apple` and reports what happened.
    ///
    /// The body always gains the stepped-to cell; the oldest cell is dropped
    /// unless the apple was reached. Wall and self checks run after the eat
    /// check and replace its outcome.
    pub fn update(&mut self, apple: Cell, geometry: GridGeometry) -> Option<Outcome> {
        self.direction = self.pending_direction;

        let (dx, dy) = self.direction.delta();
        let anchor = self.head();
        let next = Cell::new(anchor.x + dx, anchor.y + dy);
        self.body.push_back(next);

        let mut outcome = None;
        if next == apple {
            outcome = Some(Outcome::AppleEaten);
        } else {
            self.body.pop_front();
        }

        if self.touches_wall(geometry) {
            outcome = Some(Outcome::HitWall);
        }

        if self.touches_self() {
            outcome = Some(Outcome::HitSelf);
        }

        outcome
    }

    /// Buffers `direction` for the next update unless it reverses the current
    /// direction.
    pub fn set_direction(&mut self, direction: Direction) {
        if direction == self.direction.opposite() {
            return;
        }
        self.pending_direction = direction;
    }

    /// Returns true if any body cell is a wall cell.
    #[must_use]
    pub fn touches_wall(&self, geometry: GridGeometry) -> bool {
        self.body.iter().any(|cell| geometry.is_wall(*cell))
    }

    /// Returns true if two distinct body slots hold the same cell.
    #[must_use]
    pub fn touches_self(&self) -> bool {
        let len = self.body.len();
        (0..len).any(|i| (0..len).any(|j| i != j && self.body[i] == self.body[j]))
    }

    /// Returns the newest cell.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one cell")
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Never true for a live snake.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    /// Iterates over body cells from oldest to newest.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::{Cell, GridGeometry};
    use crate::input::Direction;

    use super::{Outcome, Snake};

    fn geometry() -> GridGeometry {
        GridGeometry::new(800, 600, 20).expect("default geometry should be valid")
    }

    fn body(snake: &Snake) -> Vec<Cell> {
        snake.cells().copied().collect()
    }

    #[test]
    fn new_snake_is_five_cells_heading_right() {
        let snake = Snake::new();

        assert_eq!(snake.len(), 5);
        assert_eq!(snake.head(), Cell::new(9, 5));
        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.pending_direction(), Direction::Right);
    }

    #[test]
    fn eating_apple_appends_without_dropping_tail() {
        let mut snake = Snake::new();

        let outcome = snake.update(Cell::new(10, 5), geometry());

        assert_eq!(outcome, Some(Outcome::AppleEaten));
        assert_eq!(snake.len(), 6);
        assert_eq!(snake.head(), Cell::new(10, 5));
        assert_eq!(body(&snake)[0], Cell::new(5, 5));
    }

    #[test]
    fn plain_move_keeps_length() {
        let mut snake = Snake::new();
        let far_apple = Cell::new(30, 20);

        for _ in 0..5 {
            let before = snake.len();
            assert_eq!(snake.update(far_apple, geometry()), None);
            assert_eq!(snake.len(), before);
        }
        assert_eq!(snake.head(), Cell::new(14, 5));
    }

    #[test]
    fn growth_persists_until_next_plain_move() {
        let mut snake = Snake::new();

        snake.update(Cell::new(10, 5), geometry());
        assert_eq!(snake.len(), 6);

        snake.update(Cell::new(30, 20), geometry());
        assert_eq!(snake.len(), 6);
    }

    #[test]
    fn reversal_is_rejected_for_every_axis() {
        for direction in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            let mut snake = Snake::from_cells(vec![Cell::new(10, 10)], direction);

            snake.set_direction(direction.opposite());

            assert_eq!(snake.pending_direction(), direction);
        }
    }

    #[test]
    fn perpendicular_turn_is_buffered_until_update() {
        let mut snake = Snake::new();

        snake.set_direction(Direction::Up);
        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.pending_direction(), Direction::Up);

        snake.update(Cell::new(30, 20), geometry());
        assert_eq!(snake.direction(), Direction::Up);
        assert_eq!(snake.head(), Cell::new(9, 4));
    }

    #[test]
    fn reversal_is_checked_against_current_not_pending() {
        let mut snake = Snake::new();

        // Up then Left within one tick: Left reverses the current Right.
        snake.set_direction(Direction::Up);
        snake.set_direction(Direction::Left);
        assert_eq!(snake.pending_direction(), Direction::Up);

        // Up then Down: Down is not the reverse of Right, so it replaces Up.
        snake.set_direction(Direction::Down);
        assert_eq!(snake.pending_direction(), Direction::Down);
    }

    #[test]
    fn stepping_onto_each_edge_hits_wall() {
        let geometry = geometry();
        let cases = [
            (Cell::new(1, 5), Direction::Left),
            (Cell::new(39, 5), Direction::Right),
            (Cell::new(5, 1), Direction::Up),
            (Cell::new(5, 29), Direction::Down),
        ];

        for (start, direction) in cases {
            let mut snake = Snake::from_cells(vec![start], direction);

            assert_eq!(
                snake.update(Cell::new(20, 20), geometry),
                Some(Outcome::HitWall),
                "moving {direction:?} from {start:?}"
            );
        }
    }

    #[test]
    fn wall_overrides_eat_on_same_tick() {
        let mut snake = Snake::from_cells(vec![Cell::new(2, 5), Cell::new(1, 5)], Direction::Left);

        assert_eq!(
            snake.update(Cell::new(0, 5), geometry()),
            Some(Outcome::HitWall)
        );
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn duplicate_cell_is_self_collision() {
        let looped = Snake::from_cells(
            vec![
                Cell::new(5, 5),
                Cell::new(6, 5),
                Cell::new(6, 6),
                Cell::new(5, 6),
                Cell::new(5, 5),
            ],
            Direction::Up,
        );
        let straight = Snake::new();

        assert!(looped.touches_self());
        assert!(!straight.touches_self());
    }

    #[test]
    fn turning_into_own_body_hits_self() {
        // Head at (6,6) moving up re-enters (6,5), which is not the tail.
        let mut snake = Snake::from_cells(
            vec![
                Cell::new(4, 5),
                Cell::new(5, 5),
                Cell::new(6, 5),
                Cell::new(7, 5),
                Cell::new(7, 6),
                Cell::new(6, 6),
            ],
            Direction::Left,
        );
        snake.set_direction(Direction::Up);

        assert_eq!(
            snake.update(Cell::new(30, 20), geometry()),
            Some(Outcome::HitSelf)
        );
    }

    #[test]
    fn self_hit_overrides_wall_hit() {
        // The stacked (6,5) pair survives the tail drop while the head leaves
        // the board.
        let mut snake = Snake::from_cells(
            vec![
                Cell::new(5, 5),
                Cell::new(6, 5),
                Cell::new(6, 5),
                Cell::new(1, 2),
            ],
            Direction::Left,
        );

        assert_eq!(
            snake.update(Cell::new(30, 20), geometry()),
            Some(Outcome::HitSelf)
        );
    }
}
