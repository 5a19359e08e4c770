//! Settings file watcher for hot reload.
//!
//! Wraps a `notify` watcher on the settings file's parent directory and
//! exposes a non-blocking `poll()` the UI loop can call once per frame.

use crate::error::SettingsResult;
pub use crate::settings::default_settings_path;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, TryRecvError, channel};

/// A change to the watched settings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsEvent {
    Modified,
    Created,
    Deleted,
    Error(String),
}

pub struct SettingsWatcher {
    path: PathBuf,
    rx: Receiver<notify::Result<Event>>,
    // Dropping the watcher stops the OS subscription
    _watcher: RecommendedWatcher,
}

impl SettingsWatcher {
    pub fn new(path: PathBuf) -> SettingsResult<Self> {
        let (tx, rx) = channel();
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            let _ = tx.send(res);
        })?;

        // Editors often replace the file, so watch the directory
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        watcher.watch(dir, RecursiveMode::NonRecursive)?;
        tracing::debug!("Watching settings at {}", path.display());

        Ok(Self {
            path,
            rx,
            _watcher: watcher,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Drain pending events and report the latest one for the settings file.
    pub fn poll(&mut self) -> Option<SettingsEvent> {
        let mut latest = None;
        loop {
            match self.rx.try_recv() {
                Ok(Ok(event)) => {
                    if let Some(mapped) = self.map_event(&event) {
                        latest = Some(mapped);
                    }
                }
                Ok(Err(e)) => latest = Some(SettingsEvent::Error(e.to_string())),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    latest = Some(SettingsEvent::Error("watcher disconnected".into()));
                    break;
                }
            }
        }
        latest
    }

    fn map_event(&self, event: &Event) -> Option<SettingsEvent> {
        if !event.paths.iter().any(|p| p.file_name() == self.path.file_name()) {
            return None;
        }
        match event.kind {
            EventKind::Modify(_) => Some(SettingsEvent::Modified),
            EventKind::Create(_) => Some(SettingsEvent::Created),
            EventKind::Remove(_) => Some(SettingsEvent::Deleted),
            _ => None,
        }
    }
}

impl std::fmt::Debug for SettingsWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsWatcher")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}
