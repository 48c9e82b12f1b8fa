//! Static site copy. All of it is hard-coded for this deployment; nothing
//! here is fetched or persisted.

#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub title: &'static str,
    pub quote: &'static str,
    /// Star count, 0 to 5.
    pub rating: u8,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        name: "Sophia Laurent",
        title: "Beauty Editor",
        quote: "In twenty years of testing skincare, Lumora stands apart. The Radiance Serum transformed my skin in ways I didn't think possible.",
        rating: 5,
    },
    Testimonial {
        id: 2,
        name: "Elena Chen",
        title: "Wellness Entrepreneur",
        quote: "The ritual aspect of Lumora changed how I approach self-care. Each application feels like a meditation, and my skin has never looked better.",
        rating: 5,
    },
    Testimonial {
        id: 3,
        name: "Victoria Barnes",
        title: "Art Director",
        quote: "Finally, skincare that understands luxury isn't just about price. It's about experience. My morning routine has become sacred.",
        rating: 5,
    },
    Testimonial {
        id: 4,
        name: "Margot DuPont",
        title: "Film Producer",
        quote: "The Midnight Restore cream is nothing short of miraculous. I wake up looking rested even after the longest days on set.",
        rating: 5,
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub ingredients: &'static [&'static str],
    pub price: &'static str,
}

pub const PRODUCTS: &[Product] = &[
    Product {
        id: 1,
        name: "Radiance Serum",
        subtitle: "Illuminating Elixir",
        description: "A potent blend of vitamin C and niacinamide for luminous, even-toned skin.",
        ingredients: &["Vitamin C 15%", "Niacinamide", "Hyaluronic Acid", "Rose Hip Extract"],
        price: "$185",
    },
    Product {
        id: 2,
        name: "Midnight Restore",
        subtitle: "Night Renewal Cream",
        description: "Deep cellular repair while you sleep. Wake to transformed, youthful skin.",
        ingredients: &["Retinol 0.5%", "Peptide Complex", "Squalane", "Bakuchiol"],
        price: "$220",
    },
    Product {
        id: 3,
        name: "Velvet Hydra",
        subtitle: "Moisture Barrier Essence",
        description: "Ultra-light yet deeply hydrating. Seals in moisture for 72 hours.",
        ingredients: &["Ceramides", "Centella Asiatica", "Aloe Vera", "Green Tea"],
        price: "$165",
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub id: u32,
    pub name: &'static str,
    pub scientific: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const INGREDIENTS: &[Ingredient] = &[
    Ingredient {
        id: 1,
        name: "Rose Hip",
        scientific: "Rosa canina",
        description: "Rich in vitamins A & C, deeply nourishes and regenerates skin cells.",
        icon: "🌹",
    },
    Ingredient {
        id: 2,
        name: "Hyaluronic Acid",
        scientific: "Sodium Hyaluronate",
        description: "Holds 1000x its weight in water for intense, lasting hydration.",
        icon: "💧",
    },
    Ingredient {
        id: 3,
        name: "Bakuchiol",
        scientific: "Psoralea corylifolia",
        description: "Nature's retinol alternative. Smooths fine lines without irritation.",
        icon: "🌿",
    },
    Ingredient {
        id: 4,
        name: "Squalane",
        scientific: "Plant-derived",
        description: "Mimics skin's natural oils. Ultra-lightweight moisture lock.",
        icon: "✨",
    },
    Ingredient {
        id: 5,
        name: "Niacinamide",
        scientific: "Vitamin B3",
        description: "Brightens, minimizes pores, and strengthens skin barrier.",
        icon: "🔬",
    },
    Ingredient {
        id: 6,
        name: "Centella",
        scientific: "Centella asiatica",
        description: "Ancient healing herb. Calms inflammation, promotes repair.",
        icon: "🍃",
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct ValueCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const VALUES: &[ValueCard] = &[
    ValueCard {
        icon: "🌱",
        title: "Sustainably Sourced",
        description: "Every botanical ingredient traced to ethical, sustainable farms.",
    },
    ValueCard {
        icon: "♻️",
        title: "Zero Waste Packaging",
        description: "Refillable vessels and fully recyclable materials throughout.",
    },
    ValueCard {
        icon: "🤍",
        title: "Cruelty Free",
        description: "Never tested on animals. Certified by Leaping Bunny.",
    },
    ValueCard {
        icon: "💧",
        title: "Clean Formulas",
        description: "Free from parabens, sulfates, and synthetic fragrances.",
    },
];

/// `(label, fragment href)` pairs for the fixed navigation.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("Story", "#story"),
    ("Collection", "#products"),
    ("Ingredients", "#ingredients"),
    ("Results", "#results"),
];

pub const TRUST_BADGES: &[&str] =
    &["Free Shipping", "30-Day Returns", "Clean Beauty", "Cruelty Free"];

/// `(column heading, links)` for the footer.
pub const FOOTER_COLUMNS: &[(&str, &[&str])] = &[
    ("SHOP", &["All Products", "Serums", "Moisturizers", "Cleansers", "Gift Sets"]),
    ("ABOUT", &["Our Story", "Ingredients", "Sustainability", "Press"]),
    ("SUPPORT", &["Contact Us", "FAQs", "Shipping", "Returns"]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn testimonial_list_is_populated_and_rated() {
        assert_eq!(TESTIMONIALS.len(), 4);
        for t in TESTIMONIALS {
            assert!(t.rating <= 5);
            assert!(!t.quote.is_empty());
        }
    }

    #[test]
    fn go_to_target_matches_display_order() {
        // Dot 3 (0-indexed 2) is Victoria Barnes.
        assert_eq!(TESTIMONIALS[2].id, 3);
        assert_eq!(TESTIMONIALS[2].name, "Victoria Barnes");
    }

    #[test]
    fn ids_are_unique_and_sequential() {
        for (i, p) in PRODUCTS.iter().enumerate() {
            assert_eq!(p.id as usize, i + 1);
        }
        for (i, t) in TESTIMONIALS.iter().enumerate() {
            assert_eq!(t.id as usize, i + 1);
        }
    }
}
