//! Titanium Core Primitives
//!
//! Foundation types shared by the Titanium design system crates:
//!
//! - [`Color`]: RGBA color with hex construction, formatting, and parsing
//! - [`Point`]: 2D point used for shape outlines
//!
//! These types carry no styling opinions of their own; the token values
//! live in `titanium_theme`.

pub mod color;
pub mod geometry;

pub use color::{Color, ParseColorError};
pub use geometry::Point;
