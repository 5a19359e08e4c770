//! Unit tests for the carousel core.

mod keyboard_tests;
mod layout_tests;
mod settings_watcher_tests;
mod snapshot_tests;
mod transition_tests;
