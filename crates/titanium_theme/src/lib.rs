//! Titanium Theme System
//!
//! The token dictionary and chamfer geometry for the Titanium design
//! system: an industrial, machined look for mobile interfaces built
//! around chamfered corners instead of rounded ones.
//!
//! # Overview
//!
//! The theme system provides:
//! - **Design tokens**: Colors, spacing, typography, shapes, shadows,
//!   touch targets, animation timing
//! - **Chamfer geometry**: The polygon outlines behind the system's
//!   signature cut corners
//! - **Serialization**: The whole table round-trips through JSON for
//!   tooling and non-Rust consumers
//!
//! # Quick Start
//!
//! ```
//! use titanium_theme::{tokens, ColorToken};
//!
//! let t = tokens();
//! let accent = t.colors.get(ColorToken::AccentPrimary);
//! let gutter = t.spacing.space_4;
//! assert_eq!(accent.to_string(), "#0055ff");
//! assert_eq!(gutter, 16.0);
//! ```
//!
//! # Tokens
//!
//! Tokens are the atomic values that make up the design system:
//!
//! - [`ColorTokens`]: Raw palette plus semantic aliases
//! - [`SpacingTokens`]: 4px-based spacing scale
//! - [`TypographyTokens`]: Font families, sizes, weights, line heights
//! - [`ShapeTokens`]: Chamfer sizes and border widths
//! - [`ShadowTokens`]: Elevation ramp with per-platform encodings
//! - [`TouchTokens`]: Touch target sizing
//! - [`AnimationTokens`]: Durations and easing

pub mod chamfer;
pub mod state;
pub mod tokens;

// Re-export commonly used items
pub use chamfer::{chamfer_points, chamfer_vertices};
pub use state::tokens;
pub use tokens::*;
