//! Featured-path catalog - the item provider feeding the carousel.
//!
//! The carousel only ever sees the published, ordered sequence produced by
//! [`published_sequence`]. Drafts and archived paths never reach the stage.

use crate::error::{CatalogError, CatalogResult};
use crate::types::CarouselItem;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use uuid::Uuid;

/// Stable identity of a learning path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathId(pub Uuid);

impl PathId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PathId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PathId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Editorial status of a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublishStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

/// A featured learning path as shown on a carousel card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturedPath {
    pub id: PathId,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub status: PublishStatus,
    /// Explicit editorial position; lower comes first
    #[serde(default)]
    pub order: i32,
}

impl FeaturedPath {
    pub fn new(title: impl Into<String>, order: i32) -> Self {
        Self {
            id: PathId::new(),
            title: title.into(),
            summary: String::new(),
            status: PublishStatus::Draft,
            order,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn with_status(mut self, status: PublishStatus) -> Self {
        self.status = status;
        self
    }

    pub fn published(self) -> Self {
        self.with_status(PublishStatus::Published)
    }

    pub fn is_published(&self) -> bool {
        self.status == PublishStatus::Published
    }
}

impl CarouselItem for FeaturedPath {
    type Key = PathId;

    fn key(&self) -> PathId {
        self.id
    }
}

/// Filter to published paths and sort by `order` ascending.
///
/// The sort is stable: paths sharing an order keep their upstream order.
pub fn published_sequence(paths: impl IntoIterator<Item = FeaturedPath>) -> Vec<FeaturedPath> {
    let mut published: Vec<FeaturedPath> =
        paths.into_iter().filter(FeaturedPath::is_published).collect();
    published.sort_by_key(|p| p.order);
    published
}

/// Read a JSON array of paths from disk (all statuses).
pub fn load_catalog(path: &Path) -> CatalogResult<Vec<FeaturedPath>> {
    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let paths: Vec<FeaturedPath> = serde_json::from_str(&content)?;
    tracing::debug!(count = paths.len(), path = %path.display(), "Loaded catalog");
    Ok(paths)
}
