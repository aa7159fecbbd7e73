//! Static studio content.
//!
//! Everything the showcase displays is fixed at build time: the service
//! catalog, section copy, and gallery frames. There is no backend; this
//! module is the single place content editors touch.

use crate::models::{Service, ServiceStrip};
use anyhow::Result;

/// Tagline shown under the hero wordmark.
pub const STUDIO_TAGLINE: &str = "Stories told through light and shadow.";

/// ASCII wordmark rendered on the hero section.
pub const HERO_WORDMARK: &[&str] = &[
    " ██████  ██████  ███████  ██████ ██    ██ ██████   █████ ",
    "██    ██ ██   ██ ██      ██      ██    ██ ██   ██ ██   ██",
    "██    ██ ██████  ███████ ██      ██    ██ ██████  ███████",
    "██    ██ ██   ██      ██ ██      ██    ██ ██   ██ ██   ██",
    " ██████  ██████  ███████  ██████  ██████  ██   ██ ██   ██",
];

/// Lead paragraph for the hero section.
pub const HERO_LEAD: &str =
    "A photography studio working in black and white. Portraits, campaigns \
     and weddings, finished with cinematic restraint.";

/// Opening paragraph of the about section.
pub const ABOUT_LEAD: &str =
    "My name is Victoria, and I am a photographer fascinated by the magic of \
     the moment. Photography, for me, is more than images: it is emotion held \
     in a frame, and stories told through light and shadow.";

/// Second paragraph of the about section.
pub const ABOUT_BODY: &str =
    "I have been color-blind since childhood, and it shaped how I see. \
     Instead of color I find beauty in contrast, shape and light, which is \
     why the studio works almost entirely in black and white. Every session \
     searches for honest angles and textures that turn ordinary moments into \
     meaningful ones.";

/// Disciplines listed alongside the about copy.
pub const ABOUT_DISCIPLINES: &[&str] = &[
    "Editorial direction",
    "Cinematic lighting",
    "Black & white printing",
    "On-set creative leadership",
];

/// Intro paragraph above the services carousel.
pub const SERVICES_INTRO: &str =
    "A concise suite of services delivered with editorial intent and \
     cinematic craft. Considered processes, premium results.";

/// Lead paragraph for the contact section.
pub const CONTACT_LEAD: &str =
    "Tell the studio about your project. Bookings open for the coming \
     season; replies usually land within two working days.";

/// A captioned frame in the gallery section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryFrame {
    /// Short caption under the frame
    pub caption: &'static str,
    /// Category tag, mirroring the print portfolio
    pub category: &'static str,
}

/// Fixed gallery wall: six frames across the studio's categories.
pub const GALLERY_FRAMES: &[GalleryFrame] = &[
    GalleryFrame {
        caption: "Low-key profile, single source",
        category: "Portrait",
    },
    GalleryFrame {
        caption: "Runway backstage, available light",
        category: "Fashion",
    },
    GalleryFrame {
        caption: "Hands of the luthier",
        category: "Editorial",
    },
    GalleryFrame {
        caption: "Salt flats, long exposure",
        category: "Fine Art",
    },
    GalleryFrame {
        caption: "First dance, grain pushed",
        category: "Portrait",
    },
    GalleryFrame {
        caption: "Paper study no. 12",
        category: "Fine Art",
    },
];

/// Builds the fixed service catalog in display order.
///
/// Created once at startup and owned by the carousel engine afterwards.
///
/// # Errors
///
/// Returns an error if the catalog violates strip invariants (empty list or
/// colliding slugs); with the static content below this cannot happen, but
/// the validation stays in one place.
pub fn studio_services() -> Result<ServiceStrip> {
    ServiceStrip::new(vec![
        Service::new(
            "Portrait",
            "Portrait",
            "Studio and environmental portraits with cinematic lighting and editorial direction.",
        )
        .with_long_detail(
            "Sessions run two to four hours in the studio or on location. \
             Direction is gentle and unhurried; every set is lit for depth \
             rather than flattery, and finished frames arrive as a curated \
             edit of fifteen images.",
        )
        .with_image_ref("frames/portrait-hero.jpg"),
        Service::new(
            "Wedding & Engagement",
            "Weddings",
            "Quiet, observational coverage of weddings and engagements, from preparation to last dance.",
        )
        .with_long_detail(
            "One photographer, no posing lists, no flash during the ceremony. \
             Full days deliver three hundred finished frames; engagement \
             walks are a relaxed hour wherever the two of you met.",
        ),
        Service::new(
            "Commercial",
            "Commercial",
            "Brand campaigns, product shoots and lookbooks with a premium visual language.",
        )
        .with_long_detail(
            "Concept, casting and set design handled in-house with a small \
             trusted crew. Usage licensing is quoted up front.",
        )
        .with_image_ref("frames/commercial-lookbook.jpg"),
        Service::new(
            "Event Coverage",
            "Events",
            "Discrete, atmospheric coverage of launches, openings and private events.",
        ),
        Service::new(
            "Creative Direction",
            "Direction",
            "Concepting, art direction and on-set creative leadership for cohesive storytelling.",
        )
        .with_long_detail(
            "Available as a standalone engagement or folded into a campaign \
             production. Deliverables include moodboards, shot lists and \
             on-set supervision.",
        ),
        Service::new(
            "Editing & Retouching",
            "Retouching",
            "High-end image finishing that keeps texture, tone and cinematic color intact.",
        ),
    ])
}
