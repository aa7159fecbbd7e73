//! Gallery section: a wall of captioned frames with a drifting glint.
//!
//! The glint is purely decorative; it advances on the main loop's frame
//! counter and touches no other state.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::content::{GalleryFrame, GALLERY_FRAMES};
use crate::tui::{Component, Theme};

/// Loop iterations between glint movements (~1.5 s at the main loop cadence).
const DRIFT_PERIOD: u32 = 45;

/// Events emitted by the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryEvent {
    /// The user moved focus to another frame
    FrameFocused(usize),
}

/// Gallery wall state: manual focus plus the decorative drift counter.
#[derive(Debug, Clone, Default)]
pub struct GalleryView {
    focused: usize,
    drift: u32,
}

impl GalleryView {
    /// Creates a gallery focused on the first frame.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The frame the user currently focuses.
    #[must_use]
    pub const fn focused(&self) -> usize {
        self.focused
    }

    /// Advances the decorative drift counter; called once per main-loop tick.
    pub fn advance(&mut self) {
        self.drift = self.drift.wrapping_add(1);
    }

    /// The frame the glint currently rests on.
    fn glint_frame(&self) -> usize {
        (self.drift / DRIFT_PERIOD) as usize % GALLERY_FRAMES.len()
    }

    fn render_frame(
        f: &mut Frame,
        area: Rect,
        frame: &GalleryFrame,
        focused: bool,
        glinted: bool,
        theme: &Theme,
    ) {
        let border_style = if focused {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.text_muted)
        };
        let fill = if glinted {
            Style::default().fg(theme.text_secondary).bg(theme.surface)
        } else {
            Style::default().fg(theme.text_muted).bg(theme.surface)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", frame.category))
            .title_style(Style::default().fg(theme.text_secondary))
            .style(Style::default().bg(theme.surface));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let texture = if glinted { "▓" } else { "░" };
        let mut lines: Vec<Line> = Vec::new();
        let texture_rows = inner.height.saturating_sub(2);
        for _ in 0..texture_rows {
            lines.push(Line::styled(
                texture.repeat(inner.width as usize),
                fill,
            ));
        }
        lines.push(Line::from(""));
        lines.push(Line::styled(
            frame.caption,
            Style::default()
                .fg(if focused { theme.text } else { theme.text_secondary })
                .add_modifier(if focused {
                    Modifier::BOLD
                } else {
                    Modifier::empty()
                }),
        ));

        f.render_widget(Paragraph::new(lines).style(Style::default().bg(theme.surface)), inner);
    }
}

impl Component for GalleryView {
    type Event = GalleryEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Left => {
                self.focused = self
                    .focused
                    .checked_sub(1)
                    .unwrap_or(GALLERY_FRAMES.len() - 1);
                Some(GalleryEvent::FrameFocused(self.focused))
            }
            KeyCode::Right => {
                self.focused = (self.focused + 1) % GALLERY_FRAMES.len();
                Some(GalleryEvent::FrameFocused(self.focused))
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Gallery ")
            .border_style(Style::default().fg(theme.text_muted))
            .title_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(inner);

        let glint = self.glint_frame();
        for (row_index, row) in rows.iter().enumerate() {
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Percentage(33),
                    Constraint::Percentage(34),
                    Constraint::Percentage(33),
                ])
                .split(*row);

            for (col_index, cell) in cells.iter().enumerate() {
                let index = row_index * 3 + col_index;
                if let Some(frame) = GALLERY_FRAMES.get(index) {
                    Self::render_frame(
                        f,
                        *cell,
                        frame,
                        index == self.focused,
                        index == glint,
                        theme,
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_focus_wraps_both_directions() {
        let mut gallery = GalleryView::new();
        assert_eq!(gallery.focused(), 0);

        gallery.handle_input(key(KeyCode::Left));
        assert_eq!(gallery.focused(), GALLERY_FRAMES.len() - 1);

        gallery.handle_input(key(KeyCode::Right));
        assert_eq!(gallery.focused(), 0);
    }

    #[test]
    fn test_right_emits_focus_event() {
        let mut gallery = GalleryView::new();
        let event = gallery.handle_input(key(KeyCode::Right));
        assert_eq!(event, Some(GalleryEvent::FrameFocused(1)));
    }

    #[test]
    fn test_unrelated_keys_are_ignored() {
        let mut gallery = GalleryView::new();
        assert_eq!(gallery.handle_input(key(KeyCode::Char('q'))), None);
        assert_eq!(gallery.focused(), 0);
    }

    #[test]
    fn test_glint_drifts_over_time() {
        let mut gallery = GalleryView::new();
        let start = gallery.glint_frame();
        for _ in 0..DRIFT_PERIOD {
            gallery.advance();
        }
        assert_ne!(gallery.glint_frame(), start);
    }
}
