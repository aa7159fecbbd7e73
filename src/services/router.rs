//! Deep-link selection router for the services section.
//!
//! Keeps a single "open service" concept consistent between in-memory state
//! and the navigable route under the `/services/<slug>` scheme. The router
//! is the sole owner and writer of the history; everything else only reads
//! the current selection.

use crate::models::{Service, ServiceStrip};
use crate::services::history::History;

/// Base route for the services section.
pub const SERVICES_PATH: &str = "/services";

/// Parses a route into a selection.
///
/// `/services` maps to no selection (the carousel view), and
/// `/services/<slug>` maps to that slug. Every other route, including
/// deeper paths, yields no selection; a non-matching route is never an
/// error.
#[must_use]
pub fn parse_selection(path: &str) -> Option<String> {
    let trimmed = path.trim_end_matches('/');
    let rest = trimmed.strip_prefix(SERVICES_PATH)?;
    if rest.is_empty() {
        // Base path: carousel view
        return None;
    }
    let slug = rest.strip_prefix('/')?;
    if slug.is_empty() || slug.contains('/') {
        return None;
    }
    Some(slug.to_string())
}

/// Router owning the history stack and the mirrored selection.
///
/// The route is the source of truth: the selection is re-derived from the
/// current route at construction and after every navigation, so a back or
/// forward step lands in exactly the state a fresh load of that route
/// would produce.
#[derive(Debug, Clone)]
pub struct SelectionRouter {
    history: History,
    selection: Option<String>,
}

impl SelectionRouter {
    /// Creates a router from the startup route.
    pub fn new(initial_path: impl Into<String>) -> Self {
        let mut router = Self {
            history: History::new(initial_path),
            selection: None,
        };
        router.sync_from_location();
        router
    }

    /// The currently open service slug, if any.
    #[must_use]
    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    /// The route the history cursor points at.
    #[must_use]
    pub fn current_path(&self) -> &str {
        self.history.current()
    }

    /// Whether back navigation is possible from here.
    #[must_use]
    pub const fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    /// Whether forward navigation is possible from here.
    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }

    /// Opens a service: pushes `/services/<slug>` as a new history entry.
    ///
    /// Always a push, never a replace, so a back navigation returns to the
    /// carousel view.
    pub fn open(&mut self, service: &Service) {
        self.history
            .push(format!("{}/{}", SERVICES_PATH, service.slug()));
        self.sync_from_location();
    }

    /// Closes the open detail view.
    ///
    /// Closing is itself a navigable event: it pushes the base path rather
    /// than popping, so a back navigation after closing returns to the
    /// detail that was open.
    pub fn close(&mut self) {
        self.history.push(SERVICES_PATH);
        self.sync_from_location();
    }

    /// Handles an external back navigation. Returns false at the oldest entry.
    pub fn navigate_back(&mut self) -> bool {
        if self.history.back() {
            self.sync_from_location();
            return true;
        }
        false
    }

    /// Handles an external forward navigation. Returns false at the newest entry.
    pub fn navigate_forward(&mut self) -> bool {
        if self.history.forward() {
            self.sync_from_location();
            return true;
        }
        false
    }

    /// Resolves a slug against the strip's current membership.
    ///
    /// Returns `None` for an unknown slug (stale or hand-edited route); the
    /// caller renders a not-found state rather than failing.
    #[must_use]
    pub fn resolve<'a>(&self, query: &str, strip: &'a ServiceStrip) -> Option<&'a Service> {
        strip.find_by_slug(query)
    }

    /// Re-derives the selection from the current route.
    ///
    /// Shared by construction and every navigation, so all paths into a
    /// selection agree with what a fresh load of the route would produce.
    fn sync_from_location(&mut self) {
        self.selection = parse_selection(self.history.current());
    }
}
