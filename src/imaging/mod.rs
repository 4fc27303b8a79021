//! Image measurement and resizing.
//!
//! | Operation | Implementation |
//! |---|---|
//! | **Measure** | `image::image_dimensions` (header read, no decode) |
//! | **Resize** | external `sips` command, in place |
//!
//! Resizing is delegated to the OS tool, which the build hosts guarantee but
//! developer machines may lack. [`ResizeError::Unavailable`] is the signal the
//! pipeline's failure policy keys on.
//!
//! The [`ImageTool`] trait keeps the rest of the crate tool-agnostic; tests use
//! the recording mock in [`tool::tests`].

pub mod sips;
pub mod tool;

pub use sips::SipsTool;
pub use tool::{Dimensions, ImageTool, ResizeError};
