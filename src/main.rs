//! Demo window for the featured-path carousel.
//!
//! Usage: `pathway-carousel [catalog.json]`. Without a catalog a built-in
//! sample set is shown.

use anyhow::Context as _;
use gpui::AppContext as _;
use pathway_carousel::catalog::{FeaturedPath, load_catalog, published_sequence};
use pathway_carousel::settings::CarouselSettings;
use pathway_carousel::view::CarouselView;
use std::path::PathBuf;

fn sample_paths() -> Vec<FeaturedPath> {
    [
        ("Rust Foundations", "Ownership, borrowing and the type system"),
        ("Async in Practice", "Futures, executors and cancellation"),
        ("Systems Design", "Queues, caches and back-pressure"),
        ("Data Engineering", "Batch and streaming pipelines"),
        ("Web Backends", "HTTP services from routing to deployment"),
        ("Testing Craft", "Property tests, fixtures and snapshots"),
    ]
    .into_iter()
    .enumerate()
    .map(|(order, (title, summary))| {
        FeaturedPath::new(title, order as i32)
            .with_summary(summary)
            .published()
    })
    .collect()
}

fn main() -> anyhow::Result<()> {
    pathway_carousel::logging::init();

    let settings = CarouselSettings::load_or_default();
    let paths = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => load_catalog(&path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        None => sample_paths(),
    };
    let paths = published_sequence(paths);
    tracing::info!(count = paths.len(), "Starting carousel");

    gpui::Application::new().run(move |cx: &mut gpui::App| {
        gpui_component::init(cx);
        let opened = cx.open_window(gpui::WindowOptions::default(), |_window, cx| {
            cx.new(|cx| CarouselView::new(paths, &settings, cx))
        });
        if let Err(e) = opened {
            tracing::error!("Failed to open window: {:?}", e);
            cx.quit();
            return;
        }
        cx.activate(true);
    });

    Ok(())
}
