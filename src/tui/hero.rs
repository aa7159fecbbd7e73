//! Hero section: wordmark, tagline, and lead copy.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::content;
use crate::tui::Theme;

/// Renders the hero section centered in `area`.
pub fn render(f: &mut Frame, area: Rect, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.text_muted))
        .style(Style::default().bg(theme.background));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();

    // Vertical centering: wordmark + tagline + lead take a known height
    let content_height = content::HERO_WORDMARK.len() as u16 + 6;
    let top_pad = inner.height.saturating_sub(content_height) / 2;
    for _ in 0..top_pad {
        lines.push(Line::from(""));
    }

    for row in content::HERO_WORDMARK {
        lines.push(Line::styled(
            *row,
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(
        content::STUDIO_TAGLINE,
        Style::default().fg(theme.accent),
    ));
    lines.push(Line::from(""));
    lines.push(Line::styled(
        content::HERO_LEAD,
        Style::default().fg(theme.text_secondary),
    ));
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "Tab to explore the studio",
        Style::default().fg(theme.text_muted),
    ));

    let hero = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().bg(theme.background));
    f.render_widget(hero, inner);
}
