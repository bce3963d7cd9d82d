use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use crate::config::PALETTE;
use crate::game::DeathReason;

/// Draws the game-over popup centered on the board.
pub fn render_game_over_menu(frame: &mut Frame<'_>, area: Rect, score: u32, reason: DeathReason) {
    let cause = match reason {
        DeathReason::WallCollision => "Cause: hit wall",
        DeathReason::SelfCollision => "Cause: hit yourself",
    };

    render_popup(frame, area, "GAME OVER", PALETTE.game_over, score, cause);
}

/// Draws the popup shown when the snake fills the board.
pub fn render_victory_menu(frame: &mut Frame<'_>, area: Rect, score: u32) {
    render_popup(frame, area, "YOU WIN", PALETTE.victory, score, "The board is full");
}

fn render_popup(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &'static str,
    title_color: Color,
    score: u32,
    detail: &'static str,
) {
    let popup = centered_popup(area, 70, 50);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::styled(
            title,
            Style::new().fg(title_color).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!("Final score: {score}")),
        Line::from(detail),
        Line::from(""),
        Line::from("[R]/[Enter] Play Again"),
        Line::from("[Q] Quit"),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered()),
        popup,
    );
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
