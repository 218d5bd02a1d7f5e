//! Array pane: one horizontal bar per element
//!
//! Bar length is proportional to the element's magnitude relative to the
//! largest magnitude in the frame. Colour encodes the frame's annotations,
//! in priority order: swapped, comparing, active pointer, highlight, sorted.

use super::utils::{clamp_scroll, pane_block};
use crate::trace::{fmt_value, Frame as TraceFrame};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

/// Style and marker for one position
fn bar_style(step: &TraceFrame, index: usize) -> (Color, &'static str) {
    if step.swapped.contains(&index) {
        (DEFAULT_THEME.bar_swapped, "swap")
    } else if step.comparing.contains(&index) {
        (DEFAULT_THEME.bar_comparing, "cmp")
    } else if step.active_indices.contains(&index) {
        (DEFAULT_THEME.bar_active, "ptr")
    } else if step.highlight.contains(&index) {
        (DEFAULT_THEME.bar_highlight, "")
    } else if step.is_sorted_at(index) {
        (DEFAULT_THEME.bar_sorted, "✓")
    } else {
        (DEFAULT_THEME.bar_idle, "")
    }
}

/// Render the array pane
pub fn render_array_pane(
    frame: &mut Frame,
    area: Rect,
    step: &TraceFrame,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Array ", is_focused);

    if step.array.is_empty() {
        let paragraph = Paragraph::new("(empty array)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let labels: Vec<String> = step.array.iter().map(|&v| fmt_value(v)).collect();
    let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(1);
    let index_width = (step.array.len() - 1).to_string().len();
    let max_magnitude = step
        .array
        .iter()
        .fold(0.0_f64, |acc, v| acc.max(v.abs()));

    // "[idx] " + bar + " value marker"
    let inner_width = area.width.saturating_sub(2) as usize;
    let reserved = index_width + 3 + label_width + 6;
    let bar_space = inner_width.saturating_sub(reserved).max(1);

    let all_items: Vec<ListItem> = step
        .array
        .iter()
        .zip(labels.iter())
        .enumerate()
        .map(|(i, (&value, label))| {
            let (color, marker) = bar_style(step, i);
            let len = if max_magnitude > 0.0 {
                ((value.abs() / max_magnitude) * bar_space as f64).round() as usize
            } else {
                0
            };
            let bar_char = if value < 0.0 { "░" } else { "█" };

            let mut spans = vec![
                Span::styled(
                    format!("[{:>width$}] ", i, width = index_width),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(bar_char.repeat(len.max(1)), Style::default().fg(color)),
                Span::raw(" ".repeat(bar_space.saturating_sub(len.max(1)) + 1)),
                Span::styled(
                    format!("{:>width$}", label, width = label_width),
                    Style::default().fg(DEFAULT_THEME.number),
                ),
            ];
            if !marker.is_empty() {
                spans.push(Span::styled(
                    format!(" {}", marker),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    clamp_scroll(scroll_offset, all_items.len(), area);
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
