//! Info pane: registry metadata for the selected algorithm

use super::utils::{clamp_scroll, pane_block};
use crate::algorithms::AlgorithmId;
use crate::registry::info_for;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

fn heading(text: &str) -> Line<'_> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD),
    ))
}

fn field(label: &str, value: String) -> Line<'_> {
    Line::from(vec![
        Span::styled(format!("{:<10}", label), Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(value, Style::default().fg(DEFAULT_THEME.fg)),
    ])
}

fn yes_no(flag: Option<bool>) -> String {
    match flag {
        Some(true) => "yes".to_string(),
        Some(false) => "no".to_string(),
        None => "n/a".to_string(),
    }
}

pub fn render_info_pane(
    frame: &mut Frame,
    area: Rect,
    algorithm: AlgorithmId,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let info = info_for(algorithm);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                info.name,
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  [{}]", info.category.label()),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
        ]),
        Line::from(Span::styled(
            info.short,
            Style::default().fg(DEFAULT_THEME.comment),
        )),
        Line::raw(""),
        heading("Complexity"),
        field("best", info.complexity.best.to_string()),
        field("average", info.complexity.average.to_string()),
        field("worst", info.complexity.worst.to_string()),
        field("space", info.complexity.space.to_string()),
        field("stable", yes_no(info.stable)),
        field("in place", yes_no(info.in_place)),
        Line::raw(""),
        heading("When to use"),
    ];
    lines.extend(info.when_to_use.iter().map(|tip| Line::raw(format!("• {}", tip))));
    if !info.notes.is_empty() {
        lines.push(Line::raw(""));
        lines.push(heading("Notes"));
        lines.extend(info.notes.iter().map(|note| Line::raw(format!("• {}", note))));
    }

    clamp_scroll(scroll_offset, lines.len(), area);

    let paragraph = Paragraph::new(lines)
        .block(pane_block(" Info ", is_focused))
        .wrap(Wrap { trim: false })
        .scroll((*scroll_offset as u16, 0));
    frame.render_widget(paragraph, area);
}
