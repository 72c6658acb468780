//! Sprite Adjust Core - geometric corrections for sprite frame PNGs
//!
//! This crate holds the adjustment table, the per-frame resolver, the
//! crop/scale/offset transforms and the pass that rewrites frames on disk.
//!
//! # Module Structure
//!
//! - `adjustment` - The complete adjustment record
//! - `table` - Sprite descriptors and the built-in adjustment table
//! - `resolve` - Frame-specific over sprite-wide lookup
//! - `frame` - RGBA frame buffer with PNG load/save
//! - `transform` - Crop, scale and offset steps
//! - `driver` - The in-place adjustment pass

pub mod adjustment;
pub mod driver;
pub mod error;
pub mod frame;
pub mod resolve;
pub mod table;
pub mod transform;

pub use adjustment::Adjustment;
pub use driver::{apply_all, DriverConfig, RunSummary};
pub use error::AdjustError;
pub use frame::SpriteImage;
pub use resolve::resolve;
pub use table::{AdjustmentTable, FrameKey, SpriteDescriptor, ASSETS_DIR};
pub use transform::{transform, Change, Transformed};

/// Get the version of the core crate
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
