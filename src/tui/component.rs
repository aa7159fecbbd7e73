//! Component trait for self-contained, testable TUI sections.

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::tui::Theme;

/// A section widget that manages its own state and keyboard input.
///
/// Components handle their own keys and can emit an event to signal the
/// parent state; `None` means the input was consumed (or ignored) without
/// needing parent action.
pub trait Component {
    /// Event type this component can emit
    type Event;

    /// Handle keyboard input.
    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event>;

    /// Render the component within the provided area.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme);
}
