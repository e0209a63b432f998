// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens following the W3C Design Tokens standard.
//!
//! - **Palette**: Base colors, including the storefront's royal gold accent
//! - **Opacity**: Standardized opacity levels
//! - **Spacing**: Spacing scale (8px grid)
//! - **Sizing**: Component sizes
//! - **Typography**: Font size scale
//! - **Radius**: Border radii
//! - **Shadow**: Shadow definitions (card elevation levels)

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (royal gold scale)
    pub const GOLD_200: Color = Color::from_rgb(0.95, 0.88, 0.65); // Pale gold
    pub const GOLD_400: Color = Color::from_rgb(0.87, 0.72, 0.35); // Light gold
    pub const GOLD_500: Color = Color::from_rgb(0.80, 0.62, 0.22); // Royal gold
    pub const GOLD_600: Color = Color::from_rgb(0.67, 0.50, 0.15); // Deep gold

    // Hero backdrops
    pub const MIDNIGHT: Color = Color::from_rgb(0.09, 0.11, 0.20);
    pub const BURGUNDY: Color = Color::from_rgb(0.30, 0.09, 0.13);
    pub const FOREST: Color = Color::from_rgb(0.08, 0.20, 0.14);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;

    /// Inactive slider dots.
    pub const DOT_MUTED: f32 = 0.5;

    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background - semi-transparent panels and containers.
    pub const SURFACE: f32 = 0.95;
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
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Diameter of a hero slider navigation dot.
    pub const HERO_DOT: f32 = 12.0;

    /// Height of the hero slider panel.
    pub const HERO_HEIGHT: f32 = 320.0;

    /// Vertical lift applied to a hovered product card.
    pub const CARD_LIFT: f32 = 10.0;

    /// Fixed width of a product card.
    pub const CARD_WIDTH: f32 = 220.0;

    /// Fixed width of the search overlay panel.
    pub const SEARCH_PANEL_WIDTH: f32 = 420.0;

    /// Toast card width.
    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Large title - hero slide headlines.
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - brand name, section headings.
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - product names.
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - hero taglines, search input.
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - most UI text.
    pub const BODY: f32 = 14.0;

    /// Caption - prices, hints, footer.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape / circular dots
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    const SOFT_BLACK: Color = Color {
        a: 0.25,
        ..palette::BLACK
    };

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: SOFT_BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    /// Resting elevation for product cards.
    pub const MD: Shadow = Shadow {
        color: SOFT_BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    /// Hover elevation for product cards.
    pub const LG: Shadow = Shadow {
        color: SOFT_BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
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
    assert!(opacity::DOT_MUTED > 0.0 && opacity::DOT_MUTED < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Typography validation
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    // Color validation
    assert!(palette::GOLD_500.r >= 0.0 && palette::GOLD_500.r <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn hover_shadow_is_larger_than_resting() {
        assert!(shadow::LG.blur_radius > shadow::MD.blur_radius);
        assert!(shadow::LG.offset.y > shadow::MD.offset.y);
    }
}
