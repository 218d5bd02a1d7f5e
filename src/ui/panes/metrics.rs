//! Metrics pane: live counters for the current frame and learner progress

use super::utils::pane_block;
use crate::algorithms::AlgorithmId;
use crate::progress::Progress;
use crate::registry::estimate_comparisons;
use crate::trace::Counters;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub struct MetricsRenderData<'a> {
    pub algorithm: AlgorithmId,
    pub input_len: usize,
    pub counters: &'a Counters,
    pub progress: &'a Progress,
}

fn metric<'a>(label: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            format!("{:<12}", label),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            value,
            Style::default()
                .fg(DEFAULT_THEME.number)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

pub fn render_metrics_pane(
    frame: &mut Frame,
    area: Rect,
    data: &MetricsRenderData,
    is_focused: bool,
) {
    let (best, worst) = estimate_comparisons(data.algorithm, data.input_len);
    let counters = data.counters;
    let progress = data.progress;

    let lines = vec![
        metric(
            "comparisons",
            format!("{}  (expect {}..={})", counters.comparisons, best, worst),
        ),
        metric("swaps", counters.swaps.to_string()),
        metric("writes", counters.writes.to_string()),
        metric("passes", counters.passes.to_string()),
        Line::raw(""),
        metric(
            "level",
            format!("{}  ({} xp, streak {})", progress.level, progress.xp, progress.streak),
        ),
        metric("mastery", format!("{}%", progress.mastery(data.algorithm))),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(pane_block(" Metrics ", is_focused)),
        area,
    );
}
