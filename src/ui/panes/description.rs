//! Description pane: what the algorithm does and what the run produced

use crate::engine::RunOutcome;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the description pane
pub fn render_description_pane(frame: &mut Frame, area: Rect, outcome: &RunOutcome) {
    let block = Block::default()
        .title(" About ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let label = Style::default().fg(DEFAULT_THEME.comment);
    let value = Style::default().fg(DEFAULT_THEME.fg);

    let mut lines = Vec::new();

    match outcome.algorithm {
        Some(algorithm) => {
            lines.push(Line::from(Span::styled(
                algorithm.title(),
                Style::default()
                    .fg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(algorithm.description(), value)));
        }
        None => {
            lines.push(Line::from(Span::styled(
                format!("Unknown algorithm '{}': nothing was run", outcome.identifier),
                Style::default().fg(DEFAULT_THEME.error),
            )));
        }
    }

    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("Input:  ", label),
        Span::styled(outcome.input.as_str(), value),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Result: ", label),
        Span::styled(outcome.flattened(), value),
    ]));

    if let Some(last) = outcome.last() {
        if !last.eliminated().is_empty() {
            lines.push(Line::from(vec![
                Span::styled("Purged: ", label),
                Span::styled(
                    last.eliminated().len().to_string(),
                    Style::default().fg(DEFAULT_THEME.error),
                ),
            ]));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
