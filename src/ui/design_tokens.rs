// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the library's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors, including the semantic kind colors and their surface tints
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Host themes

Components resolve background and text colors from the host's `iced::Theme`
palette at render time; the constants here are the literal fallback accents
used when a token has no theme-provided counterpart.
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.878, 0.878, 0.878);

    // Semantic colors (kind accents)
    pub const SUCCESS_500: Color = Color::from_rgb(0.063, 0.725, 0.506);
    pub const WARNING_500: Color = Color::from_rgb(0.961, 0.620, 0.043);
    pub const ERROR_500: Color = Color::from_rgb(0.937, 0.267, 0.267);
    pub const INFO_500: Color = Color::from_rgb(0.231, 0.510, 0.965);

    // Surface tints behind each kind accent
    pub const SUCCESS_50: Color = Color::from_rgb(0.941, 0.992, 0.957);
    pub const WARNING_50: Color = Color::from_rgb(1.0, 0.984, 0.922);
    pub const ERROR_50: Color = Color::from_rgb(0.996, 0.949, 0.949);
    pub const INFO_50: Color = Color::from_rgb(0.937, 0.965, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Shadow alpha for elevated surfaces.
    pub const SHADOW: f32 = 0.15;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;

    // Component widths
    pub const TOAST_WIDTH: f32 = 300.0;

    /// Horizontal distance a toast travels during slide-in/out.
    pub const TOAST_SLIDE_DISTANCE: f32 = 400.0;

    // Interactive element heights
    pub const NAV_LINK_HEIGHT: f32 = 36.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Section headings.
    pub const TITLE_SM: f32 = 18.0;

    /// Large title - page headings.
    pub const TITLE_MD: f32 = 22.0;

    /// Standard body - most UI text, toast messages.
    pub const BODY: f32 = 14.0;

    /// Small body - hints, secondary labels.
    pub const BODY_SM: f32 = 13.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - card outlines.
    pub const WIDTH_SM: f32 = 1.0;

    /// Emphasis borders - toast kind accents.
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 6.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, Color};
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Elevation for floating cards such as toasts.
    pub const MD: Shadow = Shadow {
        color: Color {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: opacity::SHADOW,
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 12.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SHADOW > 0.0 && opacity::SHADOW < 1.0);

    // Sizing validation
    assert!(sizing::ICON_MD > sizing::ICON_SM);
    assert!(sizing::TOAST_SLIDE_DISTANCE > sizing::TOAST_WIDTH);

    // Typography validation
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // Color validation
    assert!(palette::SUCCESS_500.g >= 0.0 && palette::SUCCESS_500.g <= 1.0);
};
