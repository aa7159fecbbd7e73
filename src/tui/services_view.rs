//! Services section: the self-driving card strip and the deep-link detail view.
//!
//! Exactly one of the two views is visible at any instant, switched solely
//! on the router's selection. The strip renderer and the engine's step
//! provider share one measurement path, so the animation always wraps on
//! the width the cards were actually drawn at.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::content;
use crate::models::Service;
use crate::services::carousel::{CarouselEngine, StepSizeProvider};
use crate::services::router::{SelectionRouter, SERVICES_PATH};
use crate::tui::{centered_rect, Theme};

/// Gap between cards in cells.
const CARD_GAP: u16 = 2;
/// Narrowest card worth drawing; below this the strip reports no step.
const MIN_CARD_WIDTH: u16 = 20;
/// Cards stop growing past this width on wide terminals.
const MAX_CARD_WIDTH: u16 = 34;
/// Card height in rows.
const CARD_HEIGHT: u16 = 9;

/// Which of the two mutually exclusive services views is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    /// The rotating card strip
    Carousel,
    /// The deep-linked detail panel
    Detail,
}

/// Maps a selection onto the visible view. This is the single switch both
/// the renderer and the engine-visibility logic consult.
#[must_use]
pub const fn active_view(selection: Option<&str>) -> ViewKind {
    if selection.is_some() {
        ViewKind::Detail
    } else {
        ViewKind::Carousel
    }
}

/// Width available to the strip inside the section chrome (borders plus
/// horizontal margin). Kept in one place so the measurement the engine
/// wraps on matches the layout the cards render into.
#[must_use]
pub const fn strip_inner_width(total_width: u16) -> u16 {
    total_width.saturating_sub(4)
}

/// Card measurements derived from the strip viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardMetrics {
    /// Rendered width of one card
    pub card_width: u16,
    /// Gap following each card
    pub gap: u16,
}

impl CardMetrics {
    /// Computes responsive card measurements, or `None` when the viewport
    /// is too narrow to lay out a card at all.
    #[must_use]
    pub fn for_viewport(inner_width: u16) -> Option<Self> {
        if inner_width < MIN_CARD_WIDTH {
            return None;
        }
        let card_width = (inner_width / 3)
            .clamp(MIN_CARD_WIDTH, MAX_CARD_WIDTH)
            .min(inner_width);
        Some(Self {
            card_width,
            gap: CARD_GAP,
        })
    }

    /// The distance the strip travels before one rotation occurs.
    #[must_use]
    pub fn step(&self) -> f32 {
        f32::from(self.card_width + self.gap)
    }
}

/// Step provider backed by the last observed viewport width.
///
/// The main loop republishes the width every iteration and on resize
/// events, so the engine's wraparound test always reflects current layout
/// rather than a measurement from mount time.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewportStep {
    /// Strip viewport width, or `None` before the first observation
    pub inner_width: Option<u16>,
}

impl StepSizeProvider for ViewportStep {
    fn step_size(&self) -> f32 {
        self.inner_width
            .and_then(CardMetrics::for_viewport)
            .map_or(0.0, |metrics| metrics.step())
    }
}

/// Renders the services section into `area`.
pub fn render(
    f: &mut Frame,
    area: Rect,
    engine: &CarouselEngine,
    router: &SelectionRouter,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Services ")
        .border_style(Style::default().fg(theme.text_muted))
        .title_style(Style::default().fg(theme.primary))
        .style(Style::default().bg(theme.background));
    let inner = block
        .inner(area)
        .inner(Margin {
            horizontal: 1,
            vertical: 0,
        });
    f.render_widget(block, area);

    if let Some(slug) = router.selection() {
        match router.resolve(slug, engine.strip()) {
            Some(service) => render_detail(f, inner, service, theme),
            None => render_not_found(f, inner, slug, theme),
        }
    } else {
        render_carousel(f, inner, engine, theme);
    }
}

fn render_carousel(f: &mut Frame, area: Rect, engine: &CarouselEngine, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(CARD_HEIGHT),
            Constraint::Min(0),
        ])
        .split(area);

    let intro = Paragraph::new(content::SERVICES_INTRO)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(theme.text_secondary).bg(theme.background));
    f.render_widget(intro, chunks[1]);

    render_strip(f, chunks[3], engine, theme);
}

/// Draws the strip shifted left by the engine's current offset.
///
/// Cards are laid out on an infinite track and clipped to the viewport;
/// indices wrap modulo the strip length so the tail is always followed by
/// the head again.
fn render_strip(f: &mut Frame, area: Rect, engine: &CarouselEngine, theme: &Theme) {
    let Some(metrics) = CardMetrics::for_viewport(area.width) else {
        let notice = Paragraph::new("Widen the window to view the service cards.")
            .style(Style::default().fg(theme.text_muted).bg(theme.background));
        f.render_widget(notice, area);
        return;
    };

    let strip = engine.strip();
    let step = i32::from(metrics.card_width + metrics.gap);
    let offset = engine.offset().round() as i32;
    let left_edge = i32::from(area.x);
    let right_edge = i32::from(area.right());
    let height = area.height.min(CARD_HEIGHT);

    let mut x = left_edge - offset;
    let mut index = 0usize;
    while x < right_edge {
        let card_right = x + i32::from(metrics.card_width);
        if card_right > left_edge {
            let clip_left = x.max(left_edge);
            let clip_right = card_right.min(right_edge);
            if clip_right > clip_left {
                let rect = Rect::new(
                    clip_left as u16,
                    area.y,
                    (clip_right - clip_left) as u16,
                    height,
                );
                let position = index % strip.len();
                if let Some(service) = strip.get(position) {
                    render_card(f, rect, service, position, theme);
                }
            }
        }
        x += step;
        index += 1;
    }
}

fn render_card(f: &mut Frame, rect: Rect, service: &Service, position: usize, theme: &Theme) {
    let head = position == 0;
    let border_style = if head {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.text_muted)
    };
    let title_style = if head {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text_secondary)
    };

    let card = Paragraph::new(service.description.clone())
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(theme.text_secondary).bg(theme.surface))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(format!(" {} · {} ", position + 1, service.short_label))
                .title_style(title_style)
                .style(Style::default().bg(theme.surface)),
        );
    f.render_widget(card, rect);
}

fn render_detail(f: &mut Frame, area: Rect, service: &Service, theme: &Theme) {
    let panel = centered_rect(area, area.width.min(64), area.height.min(16));

    let mut lines = vec![
        Line::styled(
            service.title.clone(),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled(service.description.clone(), Style::default().fg(theme.text)),
    ];
    if !service.long_detail.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            service.long_detail.clone(),
            Style::default().fg(theme.text_secondary),
        ));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(
        format!("frame · {}", service.image_label()),
        Style::default().fg(theme.text_muted),
    ));
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "Esc closes · [ back · ] forward",
        Style::default().fg(theme.text_muted),
    ));

    let detail = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .style(Style::default().bg(theme.surface))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent))
                .title(" Detail ")
                .title_style(Style::default().fg(theme.accent))
                .style(Style::default().bg(theme.surface)),
        );
    f.render_widget(detail, panel);
}

fn render_not_found(f: &mut Frame, area: Rect, slug: &str, theme: &Theme) {
    let panel = centered_rect(area, area.width.min(54), area.height.min(9));

    let lines = vec![
        Line::styled(
            "Service not found",
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled(
            format!("Nothing lives at {SERVICES_PATH}/{slug}."),
            Style::default().fg(theme.text_secondary),
        ),
        Line::from(""),
        Line::styled(
            "Esc returns to the services overview.",
            Style::default().fg(theme.text_muted),
        ),
    ];

    let panel_widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().bg(theme.surface))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.error))
                .style(Style::default().bg(theme.surface)),
        );
    f.render_widget(panel_widget, panel);
}
