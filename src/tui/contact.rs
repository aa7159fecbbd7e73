//! Contact section: a static, non-persisted inquiry form.
//!
//! The form never submits anywhere; a valid submission only produces an
//! acknowledgement event for the status bar.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::content;
use crate::tui::{Component, Theme};

/// Fields of the contact form, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    /// Sender name
    Name,
    /// Reply address
    Email,
    /// Inquiry body
    Message,
}

/// Events emitted by the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactEvent {
    /// A valid inquiry was submitted
    Submitted,
    /// Submission attempted with missing or malformed fields
    Incomplete,
}

/// Contact form state.
#[derive(Debug, Clone)]
pub struct ContactForm {
    active_field: ContactField,
    name: String,
    email: String,
    message: String,
}

impl ContactForm {
    /// Creates an empty form with the name field active.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active_field: ContactField::Name,
            name: String::new(),
            email: String::new(),
            message: String::new(),
        }
    }

    /// Clears all fields after a submission.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// The currently active field.
    #[must_use]
    pub const fn active_field(&self) -> ContactField {
        self.active_field
    }

    /// Moves focus to the next field.
    pub const fn next_field(&mut self) {
        self.active_field = match self.active_field {
            ContactField::Name => ContactField::Email,
            ContactField::Email => ContactField::Message,
            ContactField::Message => ContactField::Name,
        };
    }

    /// Moves focus to the previous field.
    pub const fn previous_field(&mut self) {
        self.active_field = match self.active_field {
            ContactField::Name => ContactField::Message,
            ContactField::Email => ContactField::Name,
            ContactField::Message => ContactField::Email,
        };
    }

    /// A submission needs a name and a plausible reply address.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.email.contains('@')
    }

    fn active_field_mut(&mut self) -> &mut String {
        match self.active_field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    fn render_field(
        f: &mut Frame,
        area: Rect,
        label: &str,
        value: &str,
        active: bool,
        theme: &Theme,
    ) {
        let border_style = if active {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.text_muted)
        };
        let cursor = if active { "▏" } else { "" };

        let field = Paragraph::new(format!("{value}{cursor}"))
            .wrap(Wrap { trim: false })
            .style(Style::default().fg(theme.text).bg(theme.surface))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(format!(" {label} "))
                    .title_style(Style::default().fg(theme.text_secondary))
                    .style(Style::default().bg(theme.surface)),
            );
        f.render_widget(field, area);
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ContactForm {
    type Event = ContactEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return None;
        }

        match key.code {
            KeyCode::Down => {
                self.next_field();
                None
            }
            KeyCode::Up => {
                self.previous_field();
                None
            }
            KeyCode::Enter => {
                if self.is_valid() {
                    self.reset();
                    Some(ContactEvent::Submitted)
                } else {
                    Some(ContactEvent::Incomplete)
                }
            }
            KeyCode::Backspace => {
                self.active_field_mut().pop();
                None
            }
            KeyCode::Char(c) => {
                self.active_field_mut().push(c);
                None
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Contact ")
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

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // lead copy
                Constraint::Length(3), // name
                Constraint::Length(3), // email
                Constraint::Min(4),    // message
            ])
            .split(inner);

        let lead = Paragraph::new(content::CONTACT_LEAD)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(theme.text_secondary).bg(theme.background));
        f.render_widget(lead, chunks[0]);

        Self::render_field(
            f,
            chunks[1],
            "Name",
            &self.name,
            self.active_field == ContactField::Name,
            theme,
        );
        Self::render_field(
            f,
            chunks[2],
            "Email",
            &self.email,
            self.active_field == ContactField::Email,
            theme,
        );
        Self::render_field(
            f,
            chunks[3],
            "Message",
            &self.message,
            self.active_field == ContactField::Message,
            theme,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(form: &mut ContactForm, text: &str) {
        for c in text.chars() {
            form.handle_input(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_field_cycle_order() {
        let mut form = ContactForm::new();
        assert_eq!(form.active_field(), ContactField::Name);

        form.next_field();
        assert_eq!(form.active_field(), ContactField::Email);
        form.next_field();
        assert_eq!(form.active_field(), ContactField::Message);
        form.next_field();
        assert_eq!(form.active_field(), ContactField::Name);

        form.previous_field();
        assert_eq!(form.active_field(), ContactField::Message);
    }

    #[test]
    fn test_typing_edits_the_active_field() {
        let mut form = ContactForm::new();
        type_text(&mut form, "Vic");
        form.handle_input(key(KeyCode::Backspace));
        assert_eq!(form.name, "Vi");

        form.handle_input(key(KeyCode::Down));
        type_text(&mut form, "v@studio.example");
        assert_eq!(form.email, "v@studio.example");
        assert_eq!(form.name, "Vi");
    }

    #[test]
    fn test_submit_requires_name_and_address() {
        let mut form = ContactForm::new();
        assert_eq!(
            form.handle_input(key(KeyCode::Enter)),
            Some(ContactEvent::Incomplete)
        );

        type_text(&mut form, "Victoria");
        form.handle_input(key(KeyCode::Down));
        type_text(&mut form, "not-an-address");
        assert_eq!(
            form.handle_input(key(KeyCode::Enter)),
            Some(ContactEvent::Incomplete)
        );
    }

    #[test]
    fn test_valid_submit_resets_the_form() {
        let mut form = ContactForm::new();
        type_text(&mut form, "Victoria");
        form.handle_input(key(KeyCode::Down));
        type_text(&mut form, "v@studio.example");

        assert_eq!(
            form.handle_input(key(KeyCode::Enter)),
            Some(ContactEvent::Submitted)
        );
        assert!(form.name.is_empty());
        assert!(form.email.is_empty());
        assert_eq!(form.active_field(), ContactField::Name);
    }

    #[test]
    fn test_control_chords_are_not_typed() {
        let mut form = ContactForm::new();
        form.handle_input(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(form.name.is_empty());
    }
}
