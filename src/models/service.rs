//! Service records and the ordered strip the carousel rotates.

use crate::models::slug;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single studio service as shown on the services section.
///
/// Records are immutable once built. Titles are unique within the catalog,
/// which makes the derived slug unique as well; the slug is the stable
/// external identifier used in routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Display title, unique within the catalog (e.g., "Wedding & Engagement")
    pub title: String,
    /// Short label used on carousel cards
    pub short_label: String,
    /// One-sentence description shown on cards and in the detail view
    pub description: String,
    /// Extended copy for the detail view (may be empty)
    #[serde(default)]
    pub long_detail: String,
    /// Reference to a representative image, if the studio supplied one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
}

impl Service {
    /// Creates a new service with the required fields.
    pub fn new(
        title: impl Into<String>,
        short_label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            short_label: short_label.into(),
            description: description.into(),
            long_detail: String::new(),
            image_ref: None,
        }
    }

    /// Sets the extended detail copy.
    #[must_use]
    pub fn with_long_detail(mut self, long_detail: impl Into<String>) -> Self {
        self.long_detail = long_detail.into();
        self
    }

    /// Sets the image reference.
    #[must_use]
    pub fn with_image_ref(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = Some(image_ref.into());
        self
    }

    /// The stable route identifier derived from the title.
    #[must_use]
    pub fn slug(&self) -> String {
        slug(&self.title)
    }

    /// The image reference, or a placeholder path derived from the title
    /// when the studio supplied none.
    #[must_use]
    pub fn image_label(&self) -> String {
        self.image_ref
            .clone()
            .unwrap_or_else(|| format!("frames/{}.jpg", self.slug()))
    }
}

/// An ordered sequence of services with fixed membership.
///
/// The strip is only ever mutated by rotation: the head moves to the tail,
/// preserving cyclic order and never changing membership or count. Rotation
/// returns a new strip rather than shuffling in place, so the rotation
/// invariant can be checked directly against the original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceStrip {
    items: Vec<Service>,
}

impl ServiceStrip {
    /// Builds a strip from an ordered list of services.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty, if any title derives an empty
    /// slug, or if two titles derive the same slug.
    pub fn new(items: Vec<Service>) -> Result<Self> {
        if items.is_empty() {
            anyhow::bail!("service strip requires at least one service");
        }

        let mut seen = HashSet::new();
        for service in &items {
            let slug = service.slug();
            if slug.is_empty() {
                anyhow::bail!("service title '{}' derives an empty slug", service.title);
            }
            if !seen.insert(slug.clone()) {
                anyhow::bail!("duplicate service slug '{slug}'");
            }
        }

        Ok(Self { items })
    }

    /// Number of services in the strip. Fixed for the strip's lifetime.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false: construction rejects empty strips.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The current head service (leftmost card on the strip).
    #[must_use]
    pub fn head(&self) -> &Service {
        &self.items[0]
    }

    /// The service at `index` in current strip order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Service> {
        self.items.get(index)
    }

    /// Iterates services in current strip order.
    pub fn iter(&self) -> std::slice::Iter<'_, Service> {
        self.items.iter()
    }

    /// Returns a new strip rotated left by `k` positions.
    ///
    /// Rotating left by one moves the head to the tail; rotating by `len`
    /// is the identity. Membership and cyclic order are preserved.
    #[must_use]
    pub fn rotated_left(&self, k: usize) -> Self {
        let k = k % self.items.len();
        let mut items = Vec::with_capacity(self.items.len());
        items.extend_from_slice(&self.items[k..]);
        items.extend_from_slice(&self.items[..k]);
        Self { items }
    }

    /// Looks up the service whose slug matches `query`.
    ///
    /// The query is normalized through the same slug derivation used for
    /// construction, so any title produced by this system round-trips and
    /// hand-typed variants differing only in case or separators still match.
    #[must_use]
    pub fn find_by_slug(&self, query: &str) -> Option<&Service> {
        let normalized = slug(query);
        self.items.iter().find(|s| s.slug() == normalized)
    }
}

impl<'a> IntoIterator for &'a ServiceStrip {
    type Item = &'a Service;
    type IntoIter = std::slice::Iter<'a, Service>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
