use rand::Rng;
use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::Block;
use ratatui::widgets::canvas::{Canvas, Circle, Context, Line as CanvasLine};

use crate::config::{DisplayConfig, PALETTE};
use crate::game::{GameSession, SessionStatus};
use crate::grid::{Cell, GridGeometry};
use crate::score::RecordStore;
use crate::ui::menu::render_game_over_menu;

/// Renders the full game frame from immutable state.
pub fn render<S: RecordStore, R: Rng>(
    frame: &mut Frame<'_>,
    session: &GameSession<S, R>,
    config: &DisplayConfig,
) {
    let geometry = session.geometry();
    let block = Block::new().title(Line::from(" Snake ").centered());
    let outer = board_area(frame.area(), geometry, config.fullscreen);
    let board = block.inner(outer);
    frame.render_widget(block, outer);

    let painter = BoardPainter {
        geometry,
        step: fill_step(board, f64::from(geometry.height_px())),
    };

    let canvas = Canvas::default()
        .marker(Marker::HalfBlock)
        .background_color(PALETTE.background)
        .x_bounds([0.0, f64::from(geometry.width_px())])
        .y_bounds([0.0, f64::from(geometry.height_px())])
        .paint(|ctx| {
            painter.walls(ctx);
            for cell in session.snake.cells() {
                painter.cell(ctx, *cell, PALETTE.snake);
            }
            painter.apple(ctx, session.apple.position());
            painter.score(ctx, session.score);
        });
    frame.render_widget(canvas, board);

    if let SessionStatus::Over(game_over) = session.status() {
        render_game_over_menu(frame, board, game_over);
    }
}

/// Picks the terminal area the board is drawn into.
///
/// Outside fullscreen the board keeps the playfield's aspect ratio, assuming
/// terminal cells twice as tall as they are wide.
fn board_area(area: Rect, geometry: GridGeometry, fullscreen: bool) -> Rect {
    if fullscreen {
        return area;
    }

    let width_px = f64::from(geometry.width_px());
    let height_px = f64::from(geometry.height_px());
    // One title row sits above the canvas.
    let usable_rows = f64::from(area.height.saturating_sub(1));

    let mut cols = f64::from(area.width);
    let mut rows = cols * height_px / (2.0 * width_px);
    if rows > usable_rows {
        rows = usable_rows;
        cols = rows * 2.0 * width_px / height_px;
    }

    let [row] = Layout::vertical([Constraint::Length(rows as u16 + 1)])
        .flex(Flex::Center)
        .areas(area);
    let [centered] = Layout::horizontal([Constraint::Length(cols as u16)])
        .flex(Flex::Center)
        .areas(row);
    centered
}

/// Vertical pixel distance between fill lines, small enough that every
/// half-block row the board covers gets painted.
fn fill_step(board: Rect, height_px: f64) -> f64 {
    let dot_rows = f64::from(board.height.max(1)) * 2.0;
    (height_px / dot_rows * 0.75).max(0.5)
}

/// Draws board elements given in top-down pixel space onto a bottom-up
/// canvas.
#[derive(Debug, Clone, Copy)]
struct BoardPainter {
    geometry: GridGeometry,
    step: f64,
}

impl BoardPainter {
    fn walls(self, ctx: &mut Context<'_>) {
        let width = f64::from(self.geometry.width_px());
        let height = self.height();
        let size = self.size();

        self.fill_rect(ctx, (0.0, 0.0, size, height), PALETTE.border);
        self.fill_rect(ctx, (0.0, height - size, width, size), PALETTE.border);
        self.fill_rect(ctx, (width - size, 0.0, size, height), PALETTE.border);
        self.fill_rect(ctx, (0.0, 0.0, width, size), PALETTE.border);
    }

    fn cell(self, ctx: &mut Context<'_>, cell: Cell, color: Color) {
        let origin = self.geometry.cell_origin(cell);
        let size = self.size();
        self.fill_rect(
            ctx,
            (f64::from(origin.x), f64::from(origin.y), size, size),
            color,
        );
    }

    fn apple(self, ctx: &mut Context<'_>, cell: Cell) {
        let origin = self.geometry.cell_origin(cell);
        let radius = self.size() / 2.0;

        ctx.draw(&Circle {
            x: f64::from(origin.x) + radius,
            y: self.height() - (f64::from(origin.y) + radius),
            radius,
            color: PALETTE.apple,
        });
    }

    /// Writes the score label one cell in from the top-left corner.
    fn score(self, ctx: &mut Context<'_>, score: u32) {
        let size = self.size();
        ctx.print(
            size,
            self.height() - size,
            Span::styled(
                format!("Score: {score}"),
                Style::new().fg(PALETTE.score).add_modifier(Modifier::BOLD),
            ),
        );
    }

    /// Fills `(x, y, w, h)` with horizontal lines `step` pixels apart.
    fn fill_rect(self, ctx: &mut Context<'_>, rect: (f64, f64, f64, f64), color: Color) {
        let (x, y, w, h) = rect;

        let mut offset = 0.0;
        while offset < h {
            let canvas_y = self.height() - (y + offset);
            ctx.draw(&CanvasLine::new(x, canvas_y, x + w, canvas_y, color));
            offset += self.step;
        }
    }

    fn size(self) -> f64 {
        f64::from(self.geometry.cell_size())
    }

    fn height(self) -> f64 {
        f64::from(self.geometry.height_px())
    }
}
