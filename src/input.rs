use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Order in which held directions are offered to the snake each frame.
    pub const POLL_ORDER: [Self; 4] = [Self::Up, Self::Left, Self::Down, Self::Right];

    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the `(dx, dy)` step for one cell of movement.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Directional controls asserted during one frame.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct HeldDirections {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldDirections {
    /// Nothing held.
    pub const NONE: Self = Self {
        up: false,
        down: false,
        left: false,
        right: false,
    };

    /// Returns a state with only `direction` held.
    #[must_use]
    pub fn only(direction: Direction) -> Self {
        let mut held = Self::NONE;
        held.press(direction);
        held
    }

    pub fn press(&mut self, direction: Direction) {
        *self.slot(direction) = true;
    }

    #[must_use]
    pub fn is_held(self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// Iterates held directions in [`Direction::POLL_ORDER`].
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::POLL_ORDER
            .into_iter()
            .filter(move |direction| self.is_held(*direction))
    }

    fn slot(&mut self, direction: Direction) -> &mut bool {
        match direction {
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }
}

/// Everything the frame loop learned from the keyboard during one frame.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct FrameInput {
    pub held: HeldDirections,
    pub confirm: bool,
    pub quit: bool,
}

/// Maps a key to a direction. WASD and the arrow keys both steer.
#[must_use]
pub fn direction_for_key(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => Some(Direction::Up),
        KeyCode::Left | KeyCode::Char('a' | 'A') => Some(Direction::Left),
        KeyCode::Down | KeyCode::Char('s' | 'S') => Some(Direction::Down),
        KeyCode::Right | KeyCode::Char('d' | 'D') => Some(Direction::Right),
        _ => None,
    }
}

/// Folds one key event into the frame's input.
pub fn apply_key(input: &mut FrameInput, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }

    if let Some(direction) = direction_for_key(key.code) {
        input.held.press(direction);
        return;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => input.quit = true,
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => input.quit = true,
        KeyCode::Enter | KeyCode::Char(' ') => input.confirm = true,
        _ => {}
    }
}

/// Drains terminal key events into per-frame input snapshots.
///
/// Terminals report presses rather than held state, so a direction counts as
/// held for the frame in which a press or repeat for one of its keys arrived.
#[derive(Debug, Clone, Copy)]
pub struct InputHandler {
    frame_budget: Duration,
}

impl InputHandler {
    #[must_use]
    pub fn new(frame_budget: Duration) -> Self {
        Self { frame_budget }
    }

    /// Waits up to one frame for input, then drains whatever is queued.
    pub fn poll_frame(&mut self) -> io::Result<FrameInput> {
        let mut input = FrameInput::default();
        let mut timeout = self.frame_budget;

        while event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                apply_key(&mut input, key);
            }
            timeout = Duration::ZERO;
        }

        Ok(input)
    }
}
