//! Touch target tokens
//!
//! `min_target_size` is the 44px floor both major mobile platforms
//! enforce in their interface guidelines. Too small a table for dynamic
//! keys; read the fields directly.

use serde::{Deserialize, Serialize};

/// Touch target sizing, in logical pixels
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TouchTokens {
    pub min_target_size: f32,
    pub recommended_spacing: f32,
}

impl TouchTokens {
    /// The Titanium touch target rules
    pub fn titanium() -> Self {
        Self {
            min_target_size: 44.0,
            recommended_spacing: 8.0,
        }
    }
}

impl Default for TouchTokens {
    fn default() -> Self {
        Self::titanium()
    }
}
