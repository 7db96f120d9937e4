//! Library exports for the shape tool.
//!
//! Exposes the geometry builder, render policy, surface snapshot contract and
//! gesture state machine so host applications can drive the tool from their
//! own event loop, plus the configuration types shared with the CLI host.

pub mod config;
pub mod draw;
pub mod input;
pub mod util;

pub use config::Config;
pub use input::ShapeTool;
