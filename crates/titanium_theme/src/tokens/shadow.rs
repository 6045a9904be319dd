//! Shadow tokens
//!
//! Each token carries both encodings a mobile renderer needs: color,
//! offset, opacity, and blur for platforms that composite shadows, and a
//! stepped `elevation` for platforms that only take a depth level.

use serde::{Deserialize, Serialize};
use titanium_core::Color;

/// A drop shadow definition
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    pub color: Color,
    pub offset_x: f32,
    pub offset_y: f32,
    pub opacity: f32,
    pub blur: f32,
    pub elevation: u32,
}

impl Shadow {
    pub const fn new(
        color: Color,
        offset_x: f32,
        offset_y: f32,
        opacity: f32,
        blur: f32,
        elevation: u32,
    ) -> Self {
        Self {
            color,
            offset_x,
            offset_y,
            opacity,
            blur,
            elevation,
        }
    }
}

/// Shadow token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ShadowToken {
    Sm,
    Md,
    Lg,
    Xl,
}

impl ShadowToken {
    /// Full key list, smallest elevation first
    pub fn all() -> &'static [ShadowToken] {
        const TOKENS: [ShadowToken; 4] = [
            ShadowToken::Sm,
            ShadowToken::Md,
            ShadowToken::Lg,
            ShadowToken::Xl,
        ];
        &TOKENS
    }
}

/// Complete set of shadow tokens
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShadowTokens {
    pub sm: Shadow,
    pub md: Shadow,
    pub lg: Shadow,
    pub xl: Shadow,
}

impl ShadowTokens {
    /// Get a shadow by token key
    pub fn get(&self, token: ShadowToken) -> &Shadow {
        match token {
            ShadowToken::Sm => &self.sm,
            ShadowToken::Md => &self.md,
            ShadowToken::Lg => &self.lg,
            ShadowToken::Xl => &self.xl,
        }
    }

    /// The Titanium elevation ramp
    pub fn titanium() -> Self {
        Self {
            sm: Shadow::new(Color::BLACK, 0.0, 1.0, 0.05, 2.0, 1),
            md: Shadow::new(Color::BLACK, 0.0, 4.0, 0.07, 6.0, 3),
            lg: Shadow::new(Color::BLACK, 0.0, 10.0, 0.10, 15.0, 6),
            xl: Shadow::new(Color::BLACK, 0.0, 20.0, 0.15, 25.0, 10),
        }
    }
}

impl Default for ShadowTokens {
    fn default() -> Self {
        Self::titanium()
    }
}
