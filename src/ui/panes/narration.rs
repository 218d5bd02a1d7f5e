//! Narration pane: what the current frame means, plus the loop invariant

use super::utils::pane_block;
use crate::trace::Frame as TraceFrame;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Render the narration pane
///
/// In challenge mode the narration of non-terminal frames is withheld so the
/// learner has to read the bars.
pub fn render_narration_pane(
    frame: &mut Frame,
    area: Rect,
    step: &TraceFrame,
    invariant: &str,
    challenge_mode: bool,
    is_focused: bool,
) {
    let block = pane_block(" Narration ", is_focused);

    let message = if challenge_mode && !step.is_terminal() {
        Line::from(Span::styled(
            "Challenge mode: predict the next step from the bars.",
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::ITALIC),
        ))
    } else {
        let color = if step.is_terminal() {
            DEFAULT_THEME.success
        } else {
            DEFAULT_THEME.fg
        };
        Line::from(Span::styled(
            step.message.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
    };

    let lines = vec![
        message,
        Line::raw(""),
        Line::from(vec![
            Span::styled("Invariant: ", Style::default().fg(DEFAULT_THEME.primary)),
            Span::styled(invariant, Style::default().fg(DEFAULT_THEME.comment)),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
