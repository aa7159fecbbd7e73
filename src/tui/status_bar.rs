//! Status bar widget: current route, transient messages, and key hints.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::services_view::{active_view, ViewKind};
use crate::tui::{AppState, Section, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Renders the status bar: route line on top, message or hints below.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let mut lines: Vec<Line> = vec![Self::route_line(state, theme)];

        if state.status_message.is_empty() {
            lines.push(Self::hints_line(state, theme));
        } else {
            let color = state.status_color.unwrap_or(theme.text);
            lines.push(Line::from(Span::styled(
                state.status_message.clone(),
                Style::default().fg(color),
            )));
        }

        let status = Paragraph::new(lines)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .border_style(Style::default().fg(theme.text_muted))
                    .title_style(Style::default().fg(theme.text_secondary))
                    .style(Style::default().bg(theme.background)),
            );
        f.render_widget(status, area);
    }

    /// The address-bar line: current route plus history direction markers.
    fn route_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let back = if state.router.can_go_back() { "‹" } else { " " };
        let forward = if state.router.can_go_forward() { "›" } else { " " };

        Line::from(vec![
            Span::styled("Route ", Style::default().fg(theme.primary)),
            Span::styled(
                state.router.current_path().to_string(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("{back} {forward}"),
                Style::default().fg(theme.text_muted),
            ),
        ])
    }

    /// Contextual key hints for the active section.
    fn hints_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let hints: &[(&str, &str)] = match state.active_section {
            Section::Home | Section::About => {
                &[("Tab", "sections"), ("t", "theme"), ("q", "quit")]
            }
            Section::Gallery => &[
                ("←/→", "frames"),
                ("Tab", "sections"),
                ("t", "theme"),
                ("q", "quit"),
            ],
            Section::Services => match active_view(state.router.selection()) {
                ViewKind::Carousel => &[
                    ("Enter", "open first card"),
                    ("1-9", "open card"),
                    ("[ ]", "history"),
                    ("Tab", "sections"),
                    ("q", "quit"),
                ],
                ViewKind::Detail => &[
                    ("Esc", "close"),
                    ("[", "back"),
                    ("]", "forward"),
                    ("Tab", "sections"),
                ],
            },
            Section::Contact => &[
                ("↑/↓", "fields"),
                ("Enter", "send"),
                ("Tab", "leave form"),
            ],
        };

        let mut spans: Vec<Span<'static>> = Vec::new();
        for (i, (key, action)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", Style::default().fg(theme.text_muted)));
            }
            spans.push(Span::styled(
                (*key).to_string(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                (*action).to_string(),
                Style::default().fg(theme.text_muted),
            ));
        }

        Line::from(spans)
    }
}
