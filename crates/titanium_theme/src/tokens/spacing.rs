//! Spacing tokens
//!
//! A 4px base grid. Keys are scale steps, not pixel values: step `1` is
//! 4px, step `4` is 16px, and so on up the scale.

use serde::{Deserialize, Serialize};

/// Spacing token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum SpacingToken {
    Space0,
    Space1,
    Space2,
    Space3,
    Space4,
    Space5,
    Space6,
    Space8,
    Space10,
    Space12,
    Space16,
    Space20,
    Space24,
    Space32,
}

impl SpacingToken {
    /// Full key list, in scale order
    pub fn all() -> &'static [SpacingToken] {
        const TOKENS: [SpacingToken; 14] = [
            SpacingToken::Space0,
            SpacingToken::Space1,
            SpacingToken::Space2,
            SpacingToken::Space3,
            SpacingToken::Space4,
            SpacingToken::Space5,
            SpacingToken::Space6,
            SpacingToken::Space8,
            SpacingToken::Space10,
            SpacingToken::Space12,
            SpacingToken::Space16,
            SpacingToken::Space20,
            SpacingToken::Space24,
            SpacingToken::Space32,
        ];
        &TOKENS
    }
}

/// Complete set of spacing tokens, in logical pixels
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SpacingTokens {
    #[serde(rename = "0")]
    pub space_0: f32,
    #[serde(rename = "1")]
    pub space_1: f32,
    #[serde(rename = "2")]
    pub space_2: f32,
    #[serde(rename = "3")]
    pub space_3: f32,
    #[serde(rename = "4")]
    pub space_4: f32,
    #[serde(rename = "5")]
    pub space_5: f32,
    #[serde(rename = "6")]
    pub space_6: f32,
    #[serde(rename = "8")]
    pub space_8: f32,
    #[serde(rename = "10")]
    pub space_10: f32,
    #[serde(rename = "12")]
    pub space_12: f32,
    #[serde(rename = "16")]
    pub space_16: f32,
    #[serde(rename = "20")]
    pub space_20: f32,
    #[serde(rename = "24")]
    pub space_24: f32,
    #[serde(rename = "32")]
    pub space_32: f32,
}

impl SpacingTokens {
    /// Get a spacing value by token key
    pub fn get(&self, token: SpacingToken) -> f32 {
        match token {
            SpacingToken::Space0 => self.space_0,
            SpacingToken::Space1 => self.space_1,
            SpacingToken::Space2 => self.space_2,
            SpacingToken::Space3 => self.space_3,
            SpacingToken::Space4 => self.space_4,
            SpacingToken::Space5 => self.space_5,
            SpacingToken::Space6 => self.space_6,
            SpacingToken::Space8 => self.space_8,
            SpacingToken::Space10 => self.space_10,
            SpacingToken::Space12 => self.space_12,
            SpacingToken::Space16 => self.space_16,
            SpacingToken::Space20 => self.space_20,
            SpacingToken::Space24 => self.space_24,
            SpacingToken::Space32 => self.space_32,
        }
    }

    /// The Titanium spacing scale
    pub fn titanium() -> Self {
        Self {
            space_0: 0.0,
            space_1: 4.0,
            space_2: 8.0,
            space_3: 12.0,
            space_4: 16.0,
            space_5: 20.0,
            space_6: 24.0,
            space_8: 32.0,
            space_10: 40.0,
            space_12: 48.0,
            space_16: 64.0,
            space_20: 80.0,
            space_24: 96.0,
            space_32: 128.0,
        }
    }
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self::titanium()
    }
}
