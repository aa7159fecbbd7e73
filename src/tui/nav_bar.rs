//! Navigation bar widget: studio name, section tabs, theme indicator.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::constants::APP_NAME;
use crate::tui::{AppState, Section, Theme};

/// Navigation bar widget
pub struct NavBar;

impl NavBar {
    /// Renders the navigation bar across the top of the screen.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let mut spans: Vec<Span> = vec![
            Span::styled(
                format!(" {APP_NAME} "),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("│ ", Style::default().fg(theme.text_muted)),
        ];

        for section in Section::ALL {
            let style = if section == state.active_section {
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(theme.text_secondary)
            };
            spans.push(Span::styled(section.label(), style));
            spans.push(Span::raw("  "));
        }

        let mode = if theme.is_dark() { "dark" } else { "light" };
        spans.push(Span::styled(
            format!("· {mode} (t)"),
            Style::default().fg(theme.text_muted),
        ));

        let bar = Paragraph::new(Line::from(spans))
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.text_muted))
                    .style(Style::default().bg(theme.background)),
            );
        f.render_widget(bar, area);
    }
}
