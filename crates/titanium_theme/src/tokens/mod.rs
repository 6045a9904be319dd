//! Design tokens for the Titanium system
//!
//! Tokens are the atomic values that make up the design system:
//! - Colors (raw palette plus semantic aliases)
//! - Spacing (4px grid)
//! - Typography (families, sizes, weights, leading, tracking)
//! - Shapes (chamfers and border widths)
//! - Shadows (elevation ramp)
//! - Touch target sizing
//! - Animation timing

use serde::{Deserialize, Serialize};

mod animation;
mod color;
mod shadow;
mod shape;
mod spacing;
mod touch;
mod typography;

pub use animation::*;
pub use color::*;
pub use shadow::*;
pub use shape::*;
pub use spacing::*;
pub use touch::*;
pub use typography::*;

/// The complete token table
///
/// One value per design decision. Components read from here instead of
/// hard-coding colors, sizes, or timing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tokens {
    pub colors: ColorTokens,
    pub spacing: SpacingTokens,
    pub typography: TypographyTokens,
    pub shapes: ShapeTokens,
    pub shadows: ShadowTokens,
    pub touch: TouchTokens,
    pub animations: AnimationTokens,
}

impl Tokens {
    /// The Titanium token table
    pub fn titanium() -> Self {
        Self {
            colors: ColorTokens::titanium(),
            spacing: SpacingTokens::titanium(),
            typography: TypographyTokens::titanium(),
            shapes: ShapeTokens::titanium(),
            shadows: ShadowTokens::titanium(),
            touch: TouchTokens::titanium(),
            animations: AnimationTokens::titanium(),
        }
    }
}

impl Default for Tokens {
    fn default() -> Self {
        Self::titanium()
    }
}
