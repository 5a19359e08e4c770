//! Circular, auto-advancing carousel for featured learning paths.
//!
//! - `navigation` - active index, wraparound stepping and the autoplay timer
//! - `layout` - pure projection from circular position to visual transform
//! - `input` - clicks, dots, arrow keys mapped onto engine commands
//! - `carousel` - item sequence + engine, render state and mount lifecycle
//! - `view` - gpui front end (feature `gui`)

pub mod carousel;
pub mod catalog;
pub mod constants;
pub mod error;
pub mod input;
pub mod layout;
pub mod logging;
pub mod navigation;
pub mod settings;
pub mod settings_watcher;
pub mod transition;
pub mod types;

#[cfg(feature = "gui")]
pub mod view;

pub use carousel::{FeaturedCarousel, MountedCarousel, RenderState};
pub use navigation::CarouselEngine;
pub use settings::CarouselSettings;
pub use types::{CarouselItem, Direction, PlaybackMode};
