use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::PALETTE;
use crate::controller::Snapshot;

/// Renders the status rows and returns the remaining area for the board.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, snapshot: &Snapshot<'_>) -> Rect {
    let [board_area, score_area, help_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(score_line(snapshot)).alignment(Alignment::Center),
        score_area,
    );
    frame.render_widget(
        Paragraph::new(Line::from("arrows/WASD move  [R] new game  [Q] quit"))
            .alignment(Alignment::Center)
            .style(Style::new().fg(PALETTE.hud_muted)),
        help_area,
    );

    board_area
}

fn score_line(snapshot: &Snapshot<'_>) -> Line<'static> {
    let muted = Style::new().fg(PALETTE.hud_muted);

    Line::from(vec![
        Span::styled(
            format!("Score: {}", snapshot.score),
            Style::new()
                .fg(PALETTE.hud_score)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  |  ", muted),
        Span::styled(format!("Length: {}", snapshot.snake.len()), muted),
        Span::styled("  |  ", muted),
        Span::styled(
            format!("{}x{}", snapshot.bounds.width, snapshot.bounds.height),
            muted,
        ),
    ])
}
