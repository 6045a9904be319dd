//! Typography tokens
//!
//! Families, the size ramp, weights, line heights, and letter spacing.
//! Line heights are unitless multipliers; letter spacing is in logical
//! pixels. Sizes follow the t-shirt scale from `xs` through `4xl`.

use std::borrow::Cow;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Font weight, constrained to the faces the Titanium families ship
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum FontWeight {
    Regular,
    Medium,
    Semibold,
    Bold,
    Extrabold,
    Black,
}

impl FontWeight {
    /// Numeric CSS-style weight value
    pub const fn value(self) -> u16 {
        match self {
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::Semibold => 600,
            FontWeight::Bold => 700,
            FontWeight::Extrabold => 800,
            FontWeight::Black => 900,
        }
    }

    /// Inverse of [`value`](Self::value); `None` for weights outside the set
    pub const fn from_value(value: u16) -> Option<Self> {
        match value {
            400 => Some(FontWeight::Regular),
            500 => Some(FontWeight::Medium),
            600 => Some(FontWeight::Semibold),
            700 => Some(FontWeight::Bold),
            800 => Some(FontWeight::Extrabold),
            900 => Some(FontWeight::Black),
            _ => None,
        }
    }
}

impl Serialize for FontWeight {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u16(self.value())
    }
}

impl<'de> Deserialize<'de> for FontWeight {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u16::deserialize(deserializer)?;
        FontWeight::from_value(value)
            .ok_or_else(|| D::Error::custom(format!("invalid font weight: {value}")))
    }
}

/// Typography token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum TypographyToken {
    // Families
    FontDisplay,
    FontMono,

    // Sizes
    TextXs,
    TextSm,
    TextBase,
    TextLg,
    TextXl,
    Text2xl,
    Text3xl,
    Text4xl,

    // Weights
    WeightRegular,
    WeightMedium,
    WeightSemibold,
    WeightBold,
    WeightExtrabold,
    WeightBlack,

    // Line heights
    LeadingTight,
    LeadingSnug,
    LeadingNormal,
    LeadingRelaxed,

    // Letter spacing
    TrackingTight,
    TrackingNormal,
    TrackingWide,
    TrackingWidest,
}

impl TypographyToken {
    /// Full key list, in table order
    pub fn all() -> &'static [TypographyToken] {
        const TOKENS: [TypographyToken; 24] = [
            TypographyToken::FontDisplay,
            TypographyToken::FontMono,
            TypographyToken::TextXs,
            TypographyToken::TextSm,
            TypographyToken::TextBase,
            TypographyToken::TextLg,
            TypographyToken::TextXl,
            TypographyToken::Text2xl,
            TypographyToken::Text3xl,
            TypographyToken::Text4xl,
            TypographyToken::WeightRegular,
            TypographyToken::WeightMedium,
            TypographyToken::WeightSemibold,
            TypographyToken::WeightBold,
            TypographyToken::WeightExtrabold,
            TypographyToken::WeightBlack,
            TypographyToken::LeadingTight,
            TypographyToken::LeadingSnug,
            TypographyToken::LeadingNormal,
            TypographyToken::LeadingRelaxed,
            TypographyToken::TrackingTight,
            TypographyToken::TrackingNormal,
            TypographyToken::TrackingWide,
            TypographyToken::TrackingWidest,
        ];
        &TOKENS
    }
}

/// A single typography value, as returned by [`TypographyTokens::get`]
///
/// The table is heterogeneous, so dynamic lookups surface which kind of
/// value the key resolved to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TypographyValue<'a> {
    Family(&'a str),
    Size(f32),
    Weight(FontWeight),
    Leading(f32),
    Tracking(f32),
}

/// Complete set of typography tokens
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyTokens {
    // Families
    pub font_display: Cow<'static, str>,
    pub font_mono: Cow<'static, str>,

    // Sizes, in logical pixels
    pub text_xs: f32,
    pub text_sm: f32,
    pub text_base: f32,
    pub text_lg: f32,
    pub text_xl: f32,
    pub text_2xl: f32,
    pub text_3xl: f32,
    pub text_4xl: f32,

    // Weights
    pub weight_regular: FontWeight,
    pub weight_medium: FontWeight,
    pub weight_semibold: FontWeight,
    pub weight_bold: FontWeight,
    pub weight_extrabold: FontWeight,
    pub weight_black: FontWeight,

    // Line heights, unitless multipliers
    pub leading_tight: f32,
    pub leading_snug: f32,
    pub leading_normal: f32,
    pub leading_relaxed: f32,

    // Letter spacing, in logical pixels
    pub tracking_tight: f32,
    pub tracking_normal: f32,
    pub tracking_wide: f32,
    pub tracking_widest: f32,
}

impl TypographyTokens {
    /// Get a typography value by token key
    pub fn get(&self, token: TypographyToken) -> TypographyValue<'_> {
        match token {
            TypographyToken::FontDisplay => TypographyValue::Family(&self.font_display),
            TypographyToken::FontMono => TypographyValue::Family(&self.font_mono),
            TypographyToken::TextXs => TypographyValue::Size(self.text_xs),
            TypographyToken::TextSm => TypographyValue::Size(self.text_sm),
            TypographyToken::TextBase => TypographyValue::Size(self.text_base),
            TypographyToken::TextLg => TypographyValue::Size(self.text_lg),
            TypographyToken::TextXl => TypographyValue::Size(self.text_xl),
            TypographyToken::Text2xl => TypographyValue::Size(self.text_2xl),
            TypographyToken::Text3xl => TypographyValue::Size(self.text_3xl),
            TypographyToken::Text4xl => TypographyValue::Size(self.text_4xl),
            TypographyToken::WeightRegular => TypographyValue::Weight(self.weight_regular),
            TypographyToken::WeightMedium => TypographyValue::Weight(self.weight_medium),
            TypographyToken::WeightSemibold => TypographyValue::Weight(self.weight_semibold),
            TypographyToken::WeightBold => TypographyValue::Weight(self.weight_bold),
            TypographyToken::WeightExtrabold => TypographyValue::Weight(self.weight_extrabold),
            TypographyToken::WeightBlack => TypographyValue::Weight(self.weight_black),
            TypographyToken::LeadingTight => TypographyValue::Leading(self.leading_tight),
            TypographyToken::LeadingSnug => TypographyValue::Leading(self.leading_snug),
            TypographyToken::LeadingNormal => TypographyValue::Leading(self.leading_normal),
            TypographyToken::LeadingRelaxed => TypographyValue::Leading(self.leading_relaxed),
            TypographyToken::TrackingTight => TypographyValue::Tracking(self.tracking_tight),
            TypographyToken::TrackingNormal => TypographyValue::Tracking(self.tracking_normal),
            TypographyToken::TrackingWide => TypographyValue::Tracking(self.tracking_wide),
            TypographyToken::TrackingWidest => TypographyValue::Tracking(self.tracking_widest),
        }
    }

    /// The Titanium type ramp
    pub fn titanium() -> Self {
        Self {
            font_display: Cow::Borrowed("Inter"),
            font_mono: Cow::Borrowed("JetBrainsMono"),
            text_xs: 12.0,
            text_sm: 14.0,
            text_base: 16.0,
            text_lg: 18.0,
            text_xl: 20.0,
            text_2xl: 24.0,
            text_3xl: 30.0,
            text_4xl: 36.0,
            weight_regular: FontWeight::Regular,
            weight_medium: FontWeight::Medium,
            weight_semibold: FontWeight::Semibold,
            weight_bold: FontWeight::Bold,
            weight_extrabold: FontWeight::Extrabold,
            weight_black: FontWeight::Black,
            leading_tight: 1.1,
            leading_snug: 1.25,
            leading_normal: 1.5,
            leading_relaxed: 1.625,
            tracking_tight: -0.4,
            tracking_normal: 0.0,
            tracking_wide: 0.8,
            tracking_widest: 1.6,
        }
    }
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self::titanium()
    }
}
