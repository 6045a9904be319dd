//! Animation tokens
//!
//! Durations are in milliseconds. Easing names the curve; evaluating it
//! belongs to whichever animation runtime consumes the table.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Easing curve, identified by its CSS keyword
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// The CSS timing-function keyword for this curve
    pub const fn css_name(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }

    /// Inverse of [`css_name`](Self::css_name)
    pub fn from_css_name(name: &str) -> Option<Self> {
        match name {
            "linear" => Some(Easing::Linear),
            "ease-in" => Some(Easing::EaseIn),
            "ease-out" => Some(Easing::EaseOut),
            "ease-in-out" => Some(Easing::EaseInOut),
            _ => None,
        }
    }
}

impl Serialize for Easing {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.css_name())
    }
}

impl<'de> Deserialize<'de> for Easing {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Easing::from_css_name(&name).ok_or_else(|| D::Error::custom(format!("unknown easing: {name:?}")))
    }
}

/// Animation timing tokens
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationTokens {
    pub duration_fast: u32,
    pub duration_normal: u32,
    pub duration_slow: u32,
    pub easing_standard: Easing,
}

impl AnimationTokens {
    /// The Titanium motion defaults
    pub fn titanium() -> Self {
        Self {
            duration_fast: 150,
            duration_normal: 200,
            duration_slow: 300,
            easing_standard: Easing::EaseInOut,
        }
    }
}

impl Default for AnimationTokens {
    fn default() -> Self {
        Self::titanium()
    }
}
