//! Status bar rendering with keybindings and state indicators

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// What the status bar needs to know about the session
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub current_step: usize,
    pub total_steps: usize,
    pub is_playing: bool,
    pub quiz_open: bool,
    pub teaching_mode: bool,
    pub challenge_mode: bool,
}

fn indicator(label: &str, bg: Color) -> Span<'_> {
    Span::styled(
        label,
        Style::default()
            .bg(bg)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    )
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: &StatusRenderData) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    // Left side: step info and the last status message
    let left_spans = vec![
        Span::styled(
            format!(" Step {}/{} ", data.current_step + 1, data.total_steps),
            Style::default()
                .bg(if data.quiz_open {
                    DEFAULT_THEME.secondary
                } else {
                    DEFAULT_THEME.primary
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", data.message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = if data.quiz_open {
        vec![
            Span::styled(" 1-3 ", key_style),
            Span::styled(" answer ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" ↵ ", key_style),
            Span::styled(" close ", desc_style),
        ]
    } else {
        vec![
            Span::styled(" ←/→ ", key_style),
            Span::styled(" step ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" ⎵ ", key_style),
            Span::styled(" play ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" ↵ / ⌫ ", key_style),
            Span::styled(" end/start ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" t/z/c/l ", key_style),
            Span::styled(" modes ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled("q", key_style),
            Span::styled(" quit ", desc_style),
        ]
    };

    if data.teaching_mode {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(indicator(" TEACH ", DEFAULT_THEME.primary));
    }
    if data.challenge_mode {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(indicator(" CHALLENGE ", DEFAULT_THEME.bar_swapped));
    }

    let is_at_start = data.current_step == 0;
    let is_at_end = data.current_step + 1 >= data.total_steps;

    if data.quiz_open {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(indicator(" ? QUIZ ", DEFAULT_THEME.secondary));
    } else if data.is_playing {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(indicator(" ▶ PLAYING ", DEFAULT_THEME.secondary));
    } else if is_at_end {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(indicator(" END ", DEFAULT_THEME.error));
    } else if is_at_start {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(indicator(" START ", DEFAULT_THEME.success));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
