//! About section: studio biography and disciplines.

use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::content;
use crate::tui::Theme;

/// Renders the about section: biography on the left, disciplines on the right.
pub fn render(f: &mut Frame, area: Rect, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" About ")
        .border_style(Style::default().fg(theme.text_muted))
        .title_style(Style::default().fg(theme.primary))
        .style(Style::default().bg(theme.background));
    let inner = block
        .inner(area)
        .inner(Margin {
            horizontal: 2,
            vertical: 1,
        });
    f.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(inner);

    let bio = Paragraph::new(vec![
        Line::styled(content::ABOUT_LEAD, Style::default().fg(theme.text)),
        Line::from(""),
        Line::styled(content::ABOUT_BODY, Style::default().fg(theme.text_secondary)),
    ])
    .wrap(Wrap { trim: true })
    .style(Style::default().bg(theme.background));
    f.render_widget(bio, columns[0]);

    let mut discipline_lines = vec![
        Line::styled(
            "Disciplines",
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
    ];
    for discipline in content::ABOUT_DISCIPLINES {
        discipline_lines.push(Line::from(vec![
            Span::styled("· ", Style::default().fg(theme.accent)),
            Span::styled(*discipline, Style::default().fg(theme.text_secondary)),
        ]));
    }

    let disciplines = Paragraph::new(discipline_lines)
        .wrap(Wrap { trim: true })
        .style(Style::default().bg(theme.background));
    f.render_widget(
        disciplines,
        columns[1].inner(Margin {
            horizontal: 2,
            vertical: 0,
        }),
    );
}
