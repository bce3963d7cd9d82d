use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{GridSize, GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD, PALETTE};
use crate::controller::Snapshot;
use crate::game::GameStatus;
use crate::snake::Cell;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_victory_menu};

/// Terminal columns per logical cell, so cells look square.
pub const CELL_WIDTH: u16 = 2;

/// Renders the full game frame from a read-only snapshot.
pub fn render(frame: &mut Frame<'_>, snapshot: &Snapshot<'_>) {
    let area = frame.area();
    let board_area = render_hud(frame, area, snapshot);
    let board_area = fit_board(board_area, snapshot.bounds);

    let block = Block::bordered()
        .title(" snake ")
        .border_style(Style::new().fg(PALETTE.border));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    render_food(frame, inner, snapshot);
    render_snake(frame, inner, snapshot);

    match snapshot.status {
        GameStatus::GameOver(reason) => {
            render_game_over_menu(frame, board_area, snapshot.score, reason);
        }
        GameStatus::Victory => render_victory_menu(frame, board_area, snapshot.score),
        GameStatus::Running => {}
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot<'_>) {
    if snapshot.terminal && snapshot.snake.occupies(snapshot.food) {
        return;
    }

    let Some((x, y)) = logical_to_terminal(inner, snapshot.bounds, snapshot.food) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(PALETTE.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot<'_>) {
    let head = snapshot.snake.head();
    let buffer = frame.buffer_mut();

    for cell in snapshot.snake.cells() {
        let Some((x, y)) = logical_to_terminal(inner, snapshot.bounds, *cell) else {
            continue;
        };

        if *cell == head {
            buffer.set_string(
                x,
                y,
                GLYPH_SNAKE_HEAD,
                Style::new()
                    .fg(PALETTE.snake_head)
                    .add_modifier(Modifier::BOLD),
            );
        } else {
            buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(PALETTE.snake_body));
        }
    }
}

/// Centers a bordered board of `bounds` cells inside `area`, clamped to it.
fn fit_board(area: Rect, bounds: GridSize) -> Rect {
    let width = (bounds.width.saturating_mul(CELL_WIDTH).saturating_add(2)).min(area.width);
    let height = (bounds.height.saturating_add(2)).min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, cell: Cell) -> Option<(u16, u16)> {
    if !cell.is_within(bounds) {
        return None;
    }

    let x_offset = u16::try_from(cell.x).ok()?.checked_mul(CELL_WIDTH)?;
    let y_offset = u16::try_from(cell.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;
    use ratatui::Terminal;

    use crate::config::{GridSize, GLYPH_FOOD, GLYPH_SNAKE_HEAD};
    use crate::controller::GameController;
    use crate::snake::Cell;

    use super::{fit_board, logical_to_terminal, render};

    const BOARD: GridSize = GridSize {
        width: 20,
        height: 20,
    };

    fn frame_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn cells_map_to_two_column_slots() {
        let inner = Rect::new(1, 1, 40, 20);

        assert_eq!(logical_to_terminal(inner, BOARD, Cell::new(0, 0)), Some((1, 1)));
        assert_eq!(logical_to_terminal(inner, BOARD, Cell::new(3, 2)), Some((7, 3)));
        assert_eq!(logical_to_terminal(inner, BOARD, Cell::new(-1, 0)), None);
    }

    #[test]
    fn cells_outside_a_cramped_area_are_skipped() {
        let inner = Rect::new(0, 0, 10, 5);

        assert_eq!(logical_to_terminal(inner, BOARD, Cell::new(10, 1)), None);
        assert_eq!(logical_to_terminal(inner, BOARD, Cell::new(1, 10)), None);
    }

    #[test]
    fn board_is_centered_and_clamped() {
        let board = fit_board(Rect::new(0, 0, 100, 30), BOARD);
        assert_eq!(board, Rect::new(29, 4, 42, 22));

        let clamped = fit_board(Rect::new(0, 0, 30, 10), BOARD);
        assert_eq!(clamped, Rect::new(0, 0, 30, 10));
    }

    #[test]
    fn frame_shows_snake_food_and_score() {
        let controller = GameController::with_seed(BOARD, Duration::from_millis(100), 5);
        let mut terminal = Terminal::new(TestBackend::new(60, 26)).unwrap();

        terminal
            .draw(|frame| render(frame, &controller.snapshot()))
            .unwrap();

        let text = frame_text(&terminal);
        assert!(text.contains(GLYPH_SNAKE_HEAD.chars().next().unwrap()));
        assert!(text.contains(GLYPH_FOOD));
        assert!(text.contains("Score: 0"));
    }

    #[test]
    fn game_over_popup_is_drawn_when_terminal() {
        let mut controller = GameController::with_seed(BOARD, Duration::from_millis(100), 5);
        for _ in 0..15 {
            controller.tick();
        }
        assert!(controller.snapshot().terminal);

        let mut terminal = Terminal::new(TestBackend::new(60, 26)).unwrap();
        terminal
            .draw(|frame| render(frame, &controller.snapshot()))
            .unwrap();

        assert!(frame_text(&terminal).contains("GAME OVER"));
    }
}
