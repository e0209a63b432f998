// SPDX-License-Identifier: MPL-2.0
//! Built-in showcase content for the homepage.
//!
//! In the full storefront this data comes from the commerce backend; the
//! showcase ships a representative set so the homepage renders standalone.

/// Backdrop treatment for a hero slide. Mapped to concrete colors by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backdrop {
    Midnight,
    Burgundy,
    Forest,
}

/// A single hero slide. Text lives in the i18n catalog so slides localize
/// with the rest of the chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroSlide {
    pub title_key: &'static str,
    pub tagline_key: &'static str,
    pub backdrop: Backdrop,
}

/// A product card entry. Names and taglines are merchandising copy, kept
/// verbatim rather than localized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub name: &'static str,
    pub tagline: &'static str,
    pub price_cents: u32,
}

impl Product {
    /// Formats the price as a dollar string, e.g. 124900 -> `$1249.00`.
    #[must_use]
    pub fn price_text(&self) -> String {
        format!("${}.{:02}", self.price_cents / 100, self.price_cents % 100)
    }
}

/// The hero slides shown on the homepage, in display order.
#[must_use]
pub fn showcase_slides() -> Vec<HeroSlide> {
    vec![
        HeroSlide {
            title_key: "hero-gold-title",
            tagline_key: "hero-gold-tagline",
            backdrop: Backdrop::Midnight,
        },
        HeroSlide {
            title_key: "hero-atelier-title",
            tagline_key: "hero-atelier-tagline",
            backdrop: Backdrop::Burgundy,
        },
        HeroSlide {
            title_key: "hero-season-title",
            tagline_key: "hero-season-tagline",
            backdrop: Backdrop::Forest,
        },
    ]
}

/// The featured products rendered as cards below the hero.
#[must_use]
pub fn featured_products() -> Vec<Product> {
    vec![
        Product {
            name: "Velvet Armchair",
            tagline: "Hand-upholstered in midnight velvet",
            price_cents: 124_900,
        },
        Product {
            name: "Brass Floor Lamp",
            tagline: "Aged brass with a linen shade",
            price_cents: 54_900,
        },
        Product {
            name: "Walnut Side Table",
            tagline: "Solid walnut, oil finished",
            price_cents: 38_500,
        },
        Product {
            name: "Merino Throw",
            tagline: "Woven from extra-fine merino",
            price_cents: 18_900,
        },
        Product {
            name: "Ceramic Vase Duo",
            tagline: "Glazed stoneware, two sizes",
            price_cents: 9_800,
        },
        Product {
            name: "Gilded Wall Mirror",
            tagline: "Hand-leafed royal gold frame",
            price_cents: 76_000,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_text_formats_cents() {
        let product = Product {
            name: "Test",
            tagline: "",
            price_cents: 18_905,
        };
        assert_eq!(product.price_text(), "$189.05");
    }

    #[test]
    fn price_text_pads_low_cents() {
        let product = Product {
            name: "Test",
            tagline: "",
            price_cents: 100,
        };
        assert_eq!(product.price_text(), "$1.00");
    }

    #[test]
    fn showcase_has_matching_dot_count_per_slide() {
        // One dot is rendered per slide; the invariant is simply that the
        // slide list is the single source of truth for both.
        assert_eq!(showcase_slides().len(), 3);
    }

    #[test]
    fn featured_products_are_nonempty() {
        assert!(!featured_products().is_empty());
    }
}
