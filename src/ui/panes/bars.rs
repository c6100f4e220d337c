//! Bar chart pane: one bar per array position
//!
//! Bar height follows the value (scaled against the largest value in the
//! frame, never below 1). Eliminated positions are drawn dimmed and take
//! precedence over active ones; active positions use the highlight colour.

use crate::snapshot::Snapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};
use rustc_hash::FxHashSet;

const BAR_GAP: u16 = 1;
const MAX_BAR_WIDTH: u16 = 7;

/// How a single bar should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarState {
    Normal,
    Active,
    Eliminated,
}

/// Classify every position of `snapshot`
pub fn bar_states(snapshot: &Snapshot) -> Vec<BarState> {
    let active: FxHashSet<usize> = snapshot.active().iter().copied().collect();
    let eliminated: FxHashSet<usize> = snapshot.eliminated().iter().copied().collect();

    (0..snapshot.values().len())
        .map(|i| {
            if eliminated.contains(&i) {
                BarState::Eliminated
            } else if active.contains(&i) {
                BarState::Active
            } else {
                BarState::Normal
            }
        })
        .collect()
}

/// Width of each bar so that `count` bars fit inside `inner_width`
fn bar_width(inner_width: u16, count: usize) -> u16 {
    let count = count.max(1) as u16;
    let gaps = BAR_GAP * count.saturating_sub(1);
    (inner_width.saturating_sub(gaps) / count).clamp(1, MAX_BAR_WIDTH)
}

/// Render the bar chart pane
pub fn render_bars_pane(frame: &mut Frame, area: Rect, snapshot: Option<&Snapshot>, title: &str) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        );

    let Some(snapshot) = snapshot else {
        let paragraph = Paragraph::new("(no frames recorded)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let states = bar_states(snapshot);
    let bars: Vec<Bar> = snapshot
        .values()
        .iter()
        .zip(&states)
        .enumerate()
        .map(|(i, (&value, state))| {
            let color = match state {
                BarState::Normal => DEFAULT_THEME.bar,
                BarState::Active => DEFAULT_THEME.bar_active,
                BarState::Eliminated => DEFAULT_THEME.bar_eliminated,
            };
            let label_style = match state {
                BarState::Eliminated => Style::default()
                    .fg(DEFAULT_THEME.comment)
                    .add_modifier(Modifier::CROSSED_OUT),
                _ => Style::default().fg(DEFAULT_THEME.comment),
            };
            Bar::default()
                .value(u64::from(value))
                .text_value(value.to_string())
                .label(Line::styled(i.to_string(), label_style))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(DEFAULT_THEME.bar_value).bg(color))
        })
        .collect();

    let max = snapshot.values().iter().copied().max().unwrap_or(0).max(1);
    let inner_width = area.width.saturating_sub(2);

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width(inner_width, bars.len()))
        .bar_gap(BAR_GAP)
        .max(u64::from(max));

    frame.render_widget(chart, area);
}
