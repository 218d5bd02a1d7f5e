//! Quiz popup drawn over the panes

use super::utils::centered_rect;
use crate::quiz::{Quiz, QuizOutcome};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render_quiz_popup(
    frame: &mut Frame,
    area: Rect,
    quiz: &Quiz,
    outcome: Option<&QuizOutcome>,
) {
    let popup = centered_rect(60, 50, area);

    let mut lines = vec![
        Line::from(Span::styled(
            quiz.prompt.clone(),
            Style::default()
                .fg(DEFAULT_THEME.fg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
    ];

    for (i, option) in quiz.options.iter().enumerate() {
        let style = match quiz.answered {
            Some(_) if i == quiz.correct => Style::default().fg(DEFAULT_THEME.success),
            Some(picked) if i == picked => Style::default().fg(DEFAULT_THEME.error),
            _ => Style::default().fg(DEFAULT_THEME.fg),
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} ", i + 1),
                Style::default()
                    .bg(DEFAULT_THEME.comment)
                    .fg(ratatui::style::Color::Black),
            ),
            Span::styled(format!(" {}", option), style),
        ]));
    }

    if let Some(outcome) = outcome {
        lines.push(Line::raw(""));
        let (verdict, color) = if outcome.correct {
            ("Correct!", DEFAULT_THEME.success)
        } else {
            ("Not quite.", DEFAULT_THEME.error)
        };
        lines.push(Line::from(Span::styled(
            verdict,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::raw(outcome.explanation.clone()));
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "Press Enter to continue",
            Style::default().fg(DEFAULT_THEME.comment),
        )));
    }

    let block = Block::default()
        .title(format!(" Quiz (step {}) ", quiz.step_index + 1))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.secondary));

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        popup,
    );
}
