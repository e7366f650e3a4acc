//! Seeded storefront catalog
//!
//! Stands in for the backend catalog. Order matters: the shop treats
//! seed order as newest-first.

use shared::models::{CakeFlavor, Occasion, Product, ProductCategory};

/// Weight options offered on every cake, in pounds
const CAKE_SIZES: [f64; 5] = [0.5, 1.0, 2.0, 3.0, 5.0];

#[allow(clippy::too_many_arguments)]
fn cake(
    id: &str,
    name: &str,
    flavor: CakeFlavor,
    occasion: &[Occasion],
    price: f64,
    image: &str,
    description: &str,
    tags: &[&str],
    popular: bool,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        category: ProductCategory::Cakes,
        subcategory: Some(flavor),
        occasion: occasion.to_vec(),
        price,
        price_per_pound: true,
        image: image.to_string(),
        gallery_images: vec![],
        description: description.to_string(),
        tags: tags.iter().map(ToString::to_string).collect(),
        available: true,
        popular,
        sizes: CAKE_SIZES.to_vec(),
    }
}

#[allow(clippy::too_many_arguments)]
fn decoration(
    id: &str,
    name: &str,
    occasion: &[Occasion],
    price: f64,
    image: &str,
    description: &str,
    tags: &[&str],
    popular: bool,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        category: ProductCategory::Decoration,
        subcategory: None,
        occasion: occasion.to_vec(),
        price,
        price_per_pound: false,
        image: image.to_string(),
        gallery_images: vec![],
        description: description.to_string(),
        tags: tags.iter().map(ToString::to_string).collect(),
        available: true,
        popular,
        sizes: vec![],
    }
}

/// The full storefront catalog
pub fn products() -> Vec<Product> {
    use CakeFlavor::*;
    use Occasion::*;

    vec![
        cake(
            "vanilla-cake",
            "Vanilla Dream Cake",
            Vanilla,
            &[Birthday, Anniversary],
            450.0,
            "/assets/vanilla-cake.jpg",
            "Light and fluffy vanilla sponge layered with fresh cream and vanilla buttercream. A timeless classic for all celebrations.",
            &["fresh cream", "custom message", "bestseller"],
            true,
        ),
        cake(
            "blackforest-cake",
            "Black Forest Delight",
            Blackforest,
            &[Birthday, Anniversary],
            550.0,
            "/assets/blackforest-cake.jpg",
            "Rich chocolate layers with cherry filling, whipped cream, and chocolate shavings. A German classic loved by all.",
            &["chocolate", "cherry", "fresh cream", "custom message"],
            true,
        ),
        cake(
            "chocolate-cake",
            "Belgian Chocolate Cake",
            Chocolate,
            &[Birthday, Anniversary, Wedding],
            600.0,
            "/assets/chocolate-cake.jpg",
            "Decadent Belgian chocolate cake with dark chocolate ganache. For true chocolate lovers.",
            &["dark chocolate", "ganache", "premium", "custom message"],
            true,
        ),
        cake(
            "whiteforest-cake",
            "White Forest Elegance",
            Whiteforest,
            &[Wedding, Anniversary],
            580.0,
            "/assets/whiteforest-cake.jpg",
            "Delicate white chocolate sponge with cream cheese frosting and white chocolate curls. Pure elegance.",
            &["white chocolate", "cream cheese", "elegant", "custom message"],
            false,
        ),
        cake(
            "eggless-vanilla",
            "Eggless Vanilla Cake",
            Vanilla,
            &[Birthday, Anniversary],
            480.0,
            "/assets/vanilla-cake.jpg",
            "Our signature eggless vanilla cake, just as soft and delicious. Perfect for vegetarian celebrations.",
            &["eggless", "vegetarian", "fresh cream", "custom message"],
            true,
        ),
        cake(
            "truffle-chocolate",
            "Chocolate Truffle Cake",
            Chocolate,
            &[Birthday, Anniversary],
            650.0,
            "/assets/chocolate-cake.jpg",
            "Intensely chocolatey truffle cake with a smooth, melt-in-mouth texture. A chocolate lover's dream.",
            &["truffle", "premium", "rich", "custom message"],
            true,
        ),
        // Decoration items
        decoration(
            "birthday-balloon-set",
            "Birthday Balloon Set",
            &[Birthday],
            299.0,
            "/assets/birthday-decor.jpg",
            "Colorful balloon set with 'Happy Birthday' foil balloon, 20 latex balloons, and ribbon.",
            &["balloons", "colorful", "party"],
            true,
        ),
        decoration(
            "birthday-banner-candles",
            "Birthday Banner & Candles Kit",
            &[Birthday],
            199.0,
            "/assets/birthday-decor.jpg",
            "Golden 'Happy Birthday' banner with matching number candles and sparkler candles.",
            &["banner", "candles", "golden"],
            false,
        ),
        decoration(
            "anniversary-banner",
            "Anniversary Banner & Candles",
            &[Anniversary],
            349.0,
            "/assets/anniversary-decor.jpg",
            "Elegant rose gold 'Happy Anniversary' banner with heart-shaped balloons and romantic candles.",
            &["rose gold", "romantic", "hearts"],
            true,
        ),
        decoration(
            "anniversary-table-decor",
            "Anniversary Table Decoration",
            &[Anniversary],
            499.0,
            "/assets/anniversary-decor.jpg",
            "Complete table decoration set with rose petals, tea lights, and photo frame centerpiece.",
            &["romantic", "roses", "premium"],
            false,
        ),
        decoration(
            "wedding-table-decor",
            "Wedding Table Decor Pack",
            &[Wedding],
            899.0,
            "/assets/wedding-decor.jpg",
            "Elegant wedding table decoration with white flowers, crystal votive holders, and satin runners.",
            &["elegant", "white", "premium", "crystals"],
            true,
        ),
        decoration(
            "wedding-backdrop",
            "Wedding Photo Backdrop",
            &[Wedding],
            1299.0,
            "/assets/wedding-decor.jpg",
            "Stunning floral backdrop for wedding photos with fairy lights and draped fabric.",
            &["backdrop", "flowers", "fairy lights", "premium"],
            false,
        ),
    ]
}
