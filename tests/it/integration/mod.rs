//! Integration tests for the carousel.
//!
//! These tests drive the carousel the way a view does: inputs in, render
//! state out, with a manual clock standing in for the autoplay timer.
