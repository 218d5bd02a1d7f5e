//! Helpers shared by several panes

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered block whose border lights up when the pane has focus
pub(crate) fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Clamp a scroll offset so the last page stays full
pub(crate) fn clamp_scroll(offset: &mut usize, total_items: usize, area: Rect) {
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1
    if total_items > visible_height {
        *offset = (*offset).min(total_items - visible_height);
    } else {
        *offset = 0;
    }
}

/// A rectangle of `percent_x` by `percent_y` centered in `area`
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
