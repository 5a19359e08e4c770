//! Single test binary entry point.
//!
//! All tests compile into one binary to keep linking to a single pass.
//!
//! Structure:
//! - integration: Carousel workflows across engine, adapter and projector
//! - unit: Single-component unit tests

mod integration;
mod unit;
