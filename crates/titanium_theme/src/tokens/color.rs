//! Color tokens
//!
//! Two layers, mirroring how the palette is authored: raw palette values in
//! the [`palette`] module, and the semantic entries of [`ColorTokens`] that
//! alias them. Both layers are part of the token table and addressable
//! through [`ColorToken`].

use serde::{Deserialize, Serialize};
use titanium_core::Color;

/// Raw Titanium palette
pub mod palette {
    use titanium_core::Color;

    // Neutrals
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const GRAY_50: Color = Color::rgb(248.0 / 255.0, 250.0 / 255.0, 252.0 / 255.0);
    pub const GRAY_100: Color = Color::rgb(240.0 / 255.0, 242.0 / 255.0, 245.0 / 255.0);
    pub const GRAY_200: Color = Color::rgb(226.0 / 255.0, 232.0 / 255.0, 240.0 / 255.0);
    pub const GRAY_300: Color = Color::rgb(203.0 / 255.0, 213.0 / 255.0, 225.0 / 255.0);
    pub const GRAY_400: Color = Color::rgb(148.0 / 255.0, 163.0 / 255.0, 184.0 / 255.0);
    pub const GRAY_500: Color = Color::rgb(100.0 / 255.0, 116.0 / 255.0, 139.0 / 255.0);
    pub const GRAY_900: Color = Color::rgb(15.0 / 255.0, 23.0 / 255.0, 42.0 / 255.0);
    pub const BLACK: Color = Color::rgb(17.0 / 255.0, 17.0 / 255.0, 17.0 / 255.0);

    // Brand
    pub const BLUE_500: Color = Color::rgb(0.0, 85.0 / 255.0, 1.0);
    pub const BLUE_600: Color = Color::rgb(0.0, 68.0 / 255.0, 204.0 / 255.0);
    pub const ORANGE_500: Color = Color::rgb(1.0, 72.0 / 255.0, 0.0);
    pub const ORANGE_600: Color = Color::rgb(224.0 / 255.0, 64.0 / 255.0, 0.0);

    // Status
    pub const GREEN_500: Color = Color::rgb(0.0, 204.0 / 255.0, 102.0 / 255.0);
    pub const RED_500: Color = Color::rgb(1.0, 51.0 / 255.0, 51.0 / 255.0);
    pub const AMBER_500: Color = Color::rgb(1.0, 170.0 / 255.0, 0.0);
}

/// Color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    // Palette - neutrals
    White,
    Gray50,
    Gray100,
    Gray200,
    Gray300,
    Gray400,
    Gray500,
    Gray900,
    Black,

    // Palette - brand
    Blue500,
    Blue600,
    Orange500,
    Orange600,

    // Palette - status
    Green500,
    Red500,
    Amber500,

    // Semantic - background
    BgPrimary,
    BgSecondary,
    BgTertiary,

    // Semantic - text
    TextPrimary,
    TextSecondary,
    TextMuted,
    TextInverse,

    // Semantic - accent
    AccentPrimary,
    AccentPrimaryHover,
    AccentWash,
    AccentDry,

    // Semantic - border
    BorderSubtle,
    BorderDefault,
    BorderStrong,

    // Semantic - status
    StatusSuccess,
    StatusSuccessBg,
    StatusSuccessText,
    StatusError,
    StatusErrorBg,
    StatusErrorText,
    StatusWarning,
    StatusWarningBg,
    StatusWarningText,
}

impl ColorToken {
    /// Full key list, in table order
    pub fn all() -> &'static [ColorToken] {
        const TOKENS: [ColorToken; 39] = [
            ColorToken::White,
            ColorToken::Gray50,
            ColorToken::Gray100,
            ColorToken::Gray200,
            ColorToken::Gray300,
            ColorToken::Gray400,
            ColorToken::Gray500,
            ColorToken::Gray900,
            ColorToken::Black,
            ColorToken::Blue500,
            ColorToken::Blue600,
            ColorToken::Orange500,
            ColorToken::Orange600,
            ColorToken::Green500,
            ColorToken::Red500,
            ColorToken::Amber500,
            ColorToken::BgPrimary,
            ColorToken::BgSecondary,
            ColorToken::BgTertiary,
            ColorToken::TextPrimary,
            ColorToken::TextSecondary,
            ColorToken::TextMuted,
            ColorToken::TextInverse,
            ColorToken::AccentPrimary,
            ColorToken::AccentPrimaryHover,
            ColorToken::AccentWash,
            ColorToken::AccentDry,
            ColorToken::BorderSubtle,
            ColorToken::BorderDefault,
            ColorToken::BorderStrong,
            ColorToken::StatusSuccess,
            ColorToken::StatusSuccessBg,
            ColorToken::StatusSuccessText,
            ColorToken::StatusError,
            ColorToken::StatusErrorBg,
            ColorToken::StatusErrorText,
            ColorToken::StatusWarning,
            ColorToken::StatusWarningBg,
            ColorToken::StatusWarningText,
        ];
        &TOKENS
    }
}

/// Complete set of color tokens
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorTokens {
    // Palette - neutrals
    pub white: Color,
    pub gray_50: Color,
    pub gray_100: Color,
    pub gray_200: Color,
    pub gray_300: Color,
    pub gray_400: Color,
    pub gray_500: Color,
    pub gray_900: Color,
    pub black: Color,

    // Palette - brand
    pub blue_500: Color,
    pub blue_600: Color,
    pub orange_500: Color,
    pub orange_600: Color,

    // Palette - status
    pub green_500: Color,
    pub red_500: Color,
    pub amber_500: Color,

    // Semantic - background
    pub bg_primary: Color,
    pub bg_secondary: Color,
    pub bg_tertiary: Color,

    // Semantic - text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_inverse: Color,

    // Semantic - accent
    pub accent_primary: Color,
    pub accent_primary_hover: Color,
    pub accent_wash: Color,
    pub accent_dry: Color,

    // Semantic - border
    pub border_subtle: Color,
    pub border_default: Color,
    pub border_strong: Color,

    // Semantic - status
    pub status_success: Color,
    pub status_success_bg: Color,
    pub status_success_text: Color,
    pub status_error: Color,
    pub status_error_bg: Color,
    pub status_error_text: Color,
    pub status_warning: Color,
    pub status_warning_bg: Color,
    pub status_warning_text: Color,
}

impl ColorTokens {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::White => self.white,
            ColorToken::Gray50 => self.gray_50,
            ColorToken::Gray100 => self.gray_100,
            ColorToken::Gray200 => self.gray_200,
            ColorToken::Gray300 => self.gray_300,
            ColorToken::Gray400 => self.gray_400,
            ColorToken::Gray500 => self.gray_500,
            ColorToken::Gray900 => self.gray_900,
            ColorToken::Black => self.black,
            ColorToken::Blue500 => self.blue_500,
            ColorToken::Blue600 => self.blue_600,
            ColorToken::Orange500 => self.orange_500,
            ColorToken::Orange600 => self.orange_600,
            ColorToken::Green500 => self.green_500,
            ColorToken::Red500 => self.red_500,
            ColorToken::Amber500 => self.amber_500,
            ColorToken::BgPrimary => self.bg_primary,
            ColorToken::BgSecondary => self.bg_secondary,
            ColorToken::BgTertiary => self.bg_tertiary,
            ColorToken::TextPrimary => self.text_primary,
            ColorToken::TextSecondary => self.text_secondary,
            ColorToken::TextMuted => self.text_muted,
            ColorToken::TextInverse => self.text_inverse,
            ColorToken::AccentPrimary => self.accent_primary,
            ColorToken::AccentPrimaryHover => self.accent_primary_hover,
            ColorToken::AccentWash => self.accent_wash,
            ColorToken::AccentDry => self.accent_dry,
            ColorToken::BorderSubtle => self.border_subtle,
            ColorToken::BorderDefault => self.border_default,
            ColorToken::BorderStrong => self.border_strong,
            ColorToken::StatusSuccess => self.status_success,
            ColorToken::StatusSuccessBg => self.status_success_bg,
            ColorToken::StatusSuccessText => self.status_success_text,
            ColorToken::StatusError => self.status_error,
            ColorToken::StatusErrorBg => self.status_error_bg,
            ColorToken::StatusErrorText => self.status_error_text,
            ColorToken::StatusWarning => self.status_warning,
            ColorToken::StatusWarningBg => self.status_warning_bg,
            ColorToken::StatusWarningText => self.status_warning_text,
        }
    }

    /// The Titanium color set
    pub fn titanium() -> Self {
        Self {
            white: palette::WHITE,
            gray_50: palette::GRAY_50,
            gray_100: palette::GRAY_100,
            gray_200: palette::GRAY_200,
            gray_300: palette::GRAY_300,
            gray_400: palette::GRAY_400,
            gray_500: palette::GRAY_500,
            gray_900: palette::GRAY_900,
            black: palette::BLACK,
            blue_500: palette::BLUE_500,
            blue_600: palette::BLUE_600,
            orange_500: palette::ORANGE_500,
            orange_600: palette::ORANGE_600,
            green_500: palette::GREEN_500,
            red_500: palette::RED_500,
            amber_500: palette::AMBER_500,
            bg_primary: palette::GRAY_100,
            bg_secondary: palette::WHITE,
            bg_tertiary: palette::GRAY_50,
            text_primary: palette::BLACK,
            text_secondary: palette::GRAY_500,
            text_muted: palette::GRAY_400,
            text_inverse: palette::WHITE,
            accent_primary: palette::BLUE_500,
            accent_primary_hover: palette::BLUE_600,
            accent_wash: palette::BLUE_500,
            accent_dry: palette::ORANGE_500,
            border_subtle: palette::GRAY_200,
            border_default: palette::GRAY_300,
            border_strong: palette::GRAY_400,
            status_success: palette::GREEN_500,
            status_success_bg: Color::from_hex(0xE6F9F0),
            status_success_text: Color::from_hex(0x006633),
            status_error: palette::RED_500,
            status_error_bg: Color::from_hex(0xFFEBE6),
            status_error_text: Color::from_hex(0xCC0000),
            status_warning: palette::AMBER_500,
            status_warning_bg: Color::from_hex(0xFFF8E6),
            status_warning_text: Color::from_hex(0xCC8800),
        }
    }
}

impl Default for ColorTokens {
    fn default() -> Self {
        Self::titanium()
    }
}
