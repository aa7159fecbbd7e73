//! Terminal user interface: application state, the main loop, and sections.
//!
//! All sections render from `AppState` immutably; only event handlers and
//! the per-frame tick mutate state. The services carousel advances inside
//! the loop, and the router owns every route transition.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]
// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod about;
pub mod component;
pub mod contact;
pub mod gallery;
pub mod hero;
pub mod nav_bar;
pub mod services_view;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Block,
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use crate::config::{Config, ThemeMode};
use crate::constants::TICK_INTERVAL_MS;
use crate::content;
use crate::services::carousel::CarouselEngine;
use crate::services::router::SelectionRouter;

// Re-export TUI components
pub use component::Component;
pub use contact::{ContactEvent, ContactForm};
pub use gallery::{GalleryEvent, GalleryView};
pub use nav_bar::NavBar;
pub use services_view::ViewportStep;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Top-level sections of the single-page showcase, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Hero landing view
    Home,
    /// Studio biography
    About,
    /// Gallery wall
    Gallery,
    /// Services carousel and detail views
    Services,
    /// Inquiry form
    Contact,
}

impl Section {
    /// All sections in display order.
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::About,
        Self::Gallery,
        Self::Services,
        Self::Contact,
    ];

    /// Tab label for the navigation bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Gallery => "Gallery",
            Self::Services => "Services",
            Self::Contact => "Contact",
        }
    }

    /// The section after this one, wrapping at the end.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Home => Self::About,
            Self::About => Self::Gallery,
            Self::Gallery => Self::Services,
            Self::Services => Self::Contact,
            Self::Contact => Self::Home,
        }
    }

    /// The section before this one, wrapping at the start.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Home => Self::Contact,
            Self::About => Self::Home,
            Self::Gallery => Self::About,
            Self::Services => Self::Gallery,
            Self::Contact => Self::Services,
        }
    }

    /// Maps a startup route onto the section that should be active.
    ///
    /// Only the services subtree participates in history; other routes
    /// simply pick the starting section, and unknown routes land on Home.
    #[must_use]
    pub fn from_route(path: &str) -> Self {
        if path.starts_with(crate::services::router::SERVICES_PATH) {
            return Self::Services;
        }
        match path.trim_end_matches('/') {
            "/about" => Self::About,
            "/gallery" => Self::Gallery,
            "/contact" => Self::Contact,
            _ => Self::Home,
        }
    }
}

/// Application state - single source of truth
///
/// All UI components read from this state immutably. Only event handlers
/// and the per-frame tick modify state explicitly.
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// Current UI theme (re-resolved from `theme_mode` every frame)
    pub theme: Theme,
    /// Active theme mode, seeded from config and togglable at runtime
    pub theme_mode: ThemeMode,
    /// Currently displayed section
    pub active_section: Section,
    /// Carousel engine owning the service strip
    pub engine: CarouselEngine,
    /// Deep-link router owning route history and selection
    pub router: SelectionRouter,
    /// Gallery wall state
    pub gallery: GalleryView,
    /// Contact form state
    pub contact: ContactForm,
    /// Status bar message
    pub status_message: String,
    /// Optional color override for the status message
    pub status_color: Option<Color>,
    /// Last observed strip viewport width, republished on resize
    pub strip_viewport: Option<u16>,
    /// Whether application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates the application state from config and the startup route.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid or the static catalog
    /// violates strip invariants.
    pub fn new(config: Config, initial_route: &str) -> Result<Self> {
        config.validate()?;

        let strip = content::studio_services().context("Failed to load the service catalog")?;
        let engine = CarouselEngine::new(strip, config.motion.carousel_speed)
            .context("Failed to build the services carousel")?;
        let router = SelectionRouter::new(initial_route);
        let active_section = Section::from_route(initial_route);
        let theme_mode = config.ui.theme_mode;

        let status_message = if config.ui.show_hints_on_startup {
            "Tab cycles sections · q quits".to_string()
        } else {
            String::new()
        };

        Ok(Self {
            theme: Theme::from_mode(theme_mode),
            theme_mode,
            config,
            active_section,
            engine,
            router,
            gallery: GalleryView::new(),
            contact: ContactForm::new(),
            status_message,
            status_color: None,
            strip_viewport: None,
            should_quit: false,
        })
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_color = None;
    }

    /// Set status message with custom foreground color (used for warnings)
    pub fn set_status_with_style(&mut self, message: impl Into<String>, color: Color) {
        self.status_message = message.into();
        self.status_color = Some(color);
    }

    /// Clear the status message so contextual hints show again
    pub fn clear_status(&mut self) {
        self.status_message.clear();
        self.status_color = None;
    }

    /// Switches the active section.
    pub fn activate_section(&mut self, section: Section) {
        self.active_section = section;
        self.clear_status();
    }

    /// Flips between dark and light, resolving Auto against the current palette.
    pub fn toggle_theme(&mut self) {
        self.theme_mode = match self.theme_mode {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Auto => {
                if self.theme.is_dark() {
                    ThemeMode::Light
                } else {
                    ThemeMode::Dark
                }
            }
        };
    }

    /// Republishes the strip viewport measurement from the terminal width.
    pub fn observe_viewport(&mut self, total_width: u16) {
        self.strip_viewport = Some(services_view::strip_inner_width(total_width));
    }

    /// Step provider reflecting the last observed layout.
    #[must_use]
    pub const fn step_provider(&self) -> ViewportStep {
        ViewportStep {
            inner_width: self.strip_viewport,
        }
    }

    /// Starts or stops the engine to match carousel visibility.
    ///
    /// The carousel is visible only on the services section with no open
    /// selection. Stopping resets the applied offset; restarting begins
    /// from a fresh clock, so time spent hidden never replays.
    pub fn sync_motion(&mut self) {
        let carousel_visible = self.active_section == Section::Services
            && self.router.selection().is_none();

        if carousel_visible && !self.engine.is_running() {
            self.engine.start();
        } else if !carousel_visible && self.engine.is_running() {
            self.engine.stop();
        }
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        // Apply theme based on user preference (Auto detects OS, Dark/Light are explicit)
        state.theme = Theme::from_mode(state.theme_mode);

        // Republish layout measurement, then advance the carousel if visible.
        // Rotation and offset correction land inside the tick, before the
        // draw below ever observes the state.
        let size = terminal.size()?;
        state.observe_viewport(size.width);
        state.sync_motion();
        if state.engine.is_running() {
            let provider = state.step_provider();
            state.engine.tick(Instant::now(), &provider);
        }

        // Decorative counters
        state.gallery.advance();

        // Render current state
        terminal.draw(|f| render(f, state))?;

        // Poll for events at the frame cadence
        if event::poll(Duration::from_millis(TICK_INTERVAL_MS))? {
            match event::read()? {
                Event::Key(key) => {
                    if handle_key_event(state, key)? {
                        break; // User quit
                    }
                }
                Event::Resize(width, _) => state.observe_viewport(width),
                _ => {}
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Navigation bar
            Constraint::Min(10),   // Active section
            Constraint::Length(4), // Status bar (route + message/hints)
        ])
        .split(f.area());

    NavBar::render(f, chunks[0], state, &state.theme);
    render_section(f, chunks[1], state);
    StatusBar::render(f, chunks[2], state, &state.theme);
}

fn render_section(f: &mut Frame, area: Rect, state: &AppState) {
    match state.active_section {
        Section::Home => hero::render(f, area, &state.theme),
        Section::About => about::render(f, area, &state.theme),
        Section::Gallery => state.gallery.render(f, area, &state.theme),
        Section::Services => {
            services_view::render(f, area, &state.engine, &state.router, &state.theme);
        }
        Section::Contact => state.contact.render(f, area, &state.theme),
    }
}

/// A rectangle of the given size centered inside `area`.
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// Dispatches a key event. Returns `Ok(true)` when the user quit.
fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    if key.kind == KeyEventKind::Release {
        return Ok(false);
    }

    // Ctrl+C always quits, even while typing in the contact form
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(true);
    }

    // Section switching works everywhere
    match key.code {
        KeyCode::Tab => {
            state.activate_section(state.active_section.next());
            return Ok(false);
        }
        KeyCode::BackTab => {
            state.activate_section(state.active_section.previous());
            return Ok(false);
        }
        _ => {}
    }

    match state.active_section {
        Section::Contact => {
            match state.contact.handle_input(key) {
                Some(ContactEvent::Submitted) => {
                    let success = state.theme.success;
                    state.set_status_with_style(
                        "Thank you — the studio will reply by email.",
                        success,
                    );
                }
                Some(ContactEvent::Incomplete) => {
                    let error = state.theme.error;
                    state.set_status_with_style(
                        "A name and a valid email address are required.",
                        error,
                    );
                }
                None => {}
            }
            // The form consumes every remaining key while active
            Ok(false)
        }
        Section::Services => handle_services_key(state, key),
        Section::Gallery => {
            if let Some(GalleryEvent::FrameFocused(index)) = state.gallery.handle_input(key) {
                if let Some(frame) = content::GALLERY_FRAMES.get(index) {
                    state.set_status(format!("{} — {}", frame.category, frame.caption));
                }
                return Ok(false);
            }
            handle_global_key(state, key)
        }
        Section::Home | Section::About => handle_global_key(state, key),
    }
}

/// Keys that act the same in every non-capturing section.
fn handle_global_key(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') => return Ok(true),
        KeyCode::Char('t') => state.toggle_theme(),
        KeyCode::Esc => state.clear_status(),
        _ => {}
    }
    Ok(false)
}

/// Keys for the services section: opening cards, closing the detail view,
/// and walking history.
fn handle_services_key(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter if state.router.selection().is_none() => {
            let head = state.engine.strip().head().clone();
            state.router.open(&head);
            state.set_status(format!("Viewing {}", head.title));
            Ok(false)
        }
        KeyCode::Char(c @ '1'..='9') if state.router.selection().is_none() => {
            let index = c as usize - '1' as usize;
            if let Some(service) = state.engine.strip().get(index).cloned() {
                state.router.open(&service);
                state.set_status(format!("Viewing {}", service.title));
            }
            Ok(false)
        }
        KeyCode::Esc if state.router.selection().is_some() => {
            state.router.close();
            state.clear_status();
            Ok(false)
        }
        KeyCode::Char('[') => {
            if state.router.navigate_back() {
                state.clear_status();
            } else {
                state.set_status("Already at the start of history");
            }
            Ok(false)
        }
        KeyCode::Char(']') => {
            if state.router.navigate_forward() {
                state.clear_status();
            } else {
                state.set_status("Already at the end of history");
            }
            Ok(false)
        }
        _ => handle_global_key(state, key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::carousel::StepSizeProvider;
    use crate::tui::services_view::{active_view, ViewKind};

    fn test_state(route: &str) -> AppState {
        let mut config = Config::default();
        config.ui.theme_mode = ThemeMode::Dark;
        AppState::new(config, route).unwrap()
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_section_cycle_covers_all_sections() {
        let mut section = Section::Home;
        for expected in Section::ALL {
            assert_eq!(section, expected);
            section = section.next();
        }
        assert_eq!(section, Section::Home);

        // previous() is the inverse of next()
        for section in Section::ALL {
            assert_eq!(section.next().previous(), section);
        }
    }

    #[test]
    fn test_section_from_route() {
        assert_eq!(Section::from_route("/"), Section::Home);
        assert_eq!(Section::from_route("/about"), Section::About);
        assert_eq!(Section::from_route("/gallery/"), Section::Gallery);
        assert_eq!(Section::from_route("/services"), Section::Services);
        assert_eq!(Section::from_route("/services/portrait"), Section::Services);
        assert_eq!(Section::from_route("/contact"), Section::Contact);
        assert_eq!(Section::from_route("/nonsense"), Section::Home);
    }

    #[test]
    fn test_deep_link_opens_detail_state() {
        let state = test_state("/services/portrait");
        assert_eq!(state.active_section, Section::Services);
        assert_eq!(state.router.selection(), Some("portrait"));
        assert_eq!(active_view(state.router.selection()), ViewKind::Detail);
    }

    #[test]
    fn test_exactly_one_services_view_is_visible() {
        let mut state = test_state("/services");
        assert_eq!(active_view(state.router.selection()), ViewKind::Carousel);

        let head = state.engine.strip().head().clone();
        state.router.open(&head);
        assert_eq!(active_view(state.router.selection()), ViewKind::Detail);

        state.router.close();
        assert_eq!(active_view(state.router.selection()), ViewKind::Carousel);
    }

    #[test]
    fn test_sync_motion_follows_carousel_visibility() {
        let mut state = test_state("/services");
        state.sync_motion();
        assert!(state.engine.is_running());

        // Opening a detail hides the carousel and stops the engine
        let head = state.engine.strip().head().clone();
        state.router.open(&head);
        state.sync_motion();
        assert!(!state.engine.is_running());
        assert_eq!(state.engine.offset(), 0.0);

        // Closing brings it back
        state.router.close();
        state.sync_motion();
        assert!(state.engine.is_running());
    }

    #[test]
    fn test_sync_motion_stops_engine_off_section() {
        let mut state = test_state("/services");
        state.sync_motion();
        assert!(state.engine.is_running());

        state.activate_section(Section::Gallery);
        state.sync_motion();
        assert!(!state.engine.is_running());
    }

    #[test]
    fn test_enter_opens_head_card_and_back_returns() {
        let mut state = test_state("/services");
        let head_title = state.engine.strip().head().title.clone();

        handle_key_event(&mut state, press(KeyCode::Enter)).unwrap();
        assert_eq!(state.router.current_path(), "/services/portrait");
        assert_eq!(state.router.selection(), Some("portrait"));
        assert_eq!(head_title, "Portrait");

        handle_key_event(&mut state, press(KeyCode::Char('['))).unwrap();
        assert_eq!(state.router.current_path(), "/services");
        assert_eq!(state.router.selection(), None);
    }

    #[test]
    fn test_digit_opens_nth_card() {
        let mut state = test_state("/services");
        handle_key_event(&mut state, press(KeyCode::Char('2'))).unwrap();
        assert_eq!(state.router.selection(), Some("wedding-engagement"));
    }

    #[test]
    fn test_esc_closes_detail_via_push() {
        let mut state = test_state("/services/portrait");
        handle_key_event(&mut state, press(KeyCode::Esc)).unwrap();
        assert_eq!(state.router.selection(), None);

        // Closing pushed an entry, so back restores the detail
        handle_key_event(&mut state, press(KeyCode::Char('['))).unwrap();
        assert_eq!(state.router.selection(), Some("portrait"));
    }

    #[test]
    fn test_quit_key_exits_outside_contact() {
        let mut state = test_state("/");
        assert!(handle_key_event(&mut state, press(KeyCode::Char('q'))).unwrap());
    }

    #[test]
    fn test_contact_captures_quit_key() {
        let mut state = test_state("/contact");
        assert!(!handle_key_event(&mut state, press(KeyCode::Char('q'))).unwrap());
    }

    #[test]
    fn test_toggle_theme_flips_palette() {
        let mut state = test_state("/");
        assert_eq!(state.theme_mode, ThemeMode::Dark);
        state.toggle_theme();
        assert_eq!(state.theme_mode, ThemeMode::Light);
        state.toggle_theme();
        assert_eq!(state.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn test_observe_viewport_publishes_measurement() {
        let mut state = test_state("/services");
        assert!(state.strip_viewport.is_none());
        assert_eq!(state.step_provider().step_size(), 0.0);

        state.observe_viewport(100);
        assert!(state.step_provider().step_size() > 0.0);
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 10, 5);
        let rect = centered_rect(area, 100, 100);
        assert_eq!(rect, area);

        let small = centered_rect(area, 4, 3);
        assert_eq!(small, Rect::new(3, 1, 4, 3));
    }
}
