//! Shared helpers for integration tests

#![allow(dead_code)]

pub mod generators;

pub use generators::{FrameGenerator, Corruption};
