//! Shape tokens
//!
//! Chamfer sizes feed [`chamfer_points`](crate::chamfer::chamfer_points);
//! corners are cut, not rounded. `radius_none` exists for surfaces that
//! cannot draw polygon outlines and fall back to plain rectangles.

use serde::{Deserialize, Serialize};

/// Shape token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ShapeToken {
    ChamferSm,
    ChamferMd,
    ChamferLg,
    ChamferXl,
    BorderWidthSm,
    BorderWidthMd,
    BorderWidthLg,
    BorderWidthXl,
    RadiusNone,
}

impl ShapeToken {
    /// Full key list, in table order
    pub fn all() -> &'static [ShapeToken] {
        const TOKENS: [ShapeToken; 9] = [
            ShapeToken::ChamferSm,
            ShapeToken::ChamferMd,
            ShapeToken::ChamferLg,
            ShapeToken::ChamferXl,
            ShapeToken::BorderWidthSm,
            ShapeToken::BorderWidthMd,
            ShapeToken::BorderWidthLg,
            ShapeToken::BorderWidthXl,
            ShapeToken::RadiusNone,
        ];
        &TOKENS
    }
}

/// Complete set of shape tokens, in logical pixels
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeTokens {
    pub chamfer_sm: f32,
    pub chamfer_md: f32,
    pub chamfer_lg: f32,
    pub chamfer_xl: f32,
    pub border_width_sm: f32,
    pub border_width_md: f32,
    pub border_width_lg: f32,
    pub border_width_xl: f32,
    pub radius_none: f32,
}

impl ShapeTokens {
    /// Get a shape value by token key
    pub fn get(&self, token: ShapeToken) -> f32 {
        match token {
            ShapeToken::ChamferSm => self.chamfer_sm,
            ShapeToken::ChamferMd => self.chamfer_md,
            ShapeToken::ChamferLg => self.chamfer_lg,
            ShapeToken::ChamferXl => self.chamfer_xl,
            ShapeToken::BorderWidthSm => self.border_width_sm,
            ShapeToken::BorderWidthMd => self.border_width_md,
            ShapeToken::BorderWidthLg => self.border_width_lg,
            ShapeToken::BorderWidthXl => self.border_width_xl,
            ShapeToken::RadiusNone => self.radius_none,
        }
    }

    /// The Titanium shape set
    pub fn titanium() -> Self {
        Self {
            chamfer_sm: 8.0,
            chamfer_md: 12.0,
            chamfer_lg: 20.0,
            chamfer_xl: 30.0,
            border_width_sm: 1.0,
            border_width_md: 2.0,
            border_width_lg: 3.0,
            border_width_xl: 4.0,
            radius_none: 0.0,
        }
    }
}

impl Default for ShapeTokens {
    fn default() -> Self {
        Self::titanium()
    }
}
