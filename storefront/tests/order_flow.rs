//! End-to-end storefront flow: browse, cart, checkout, compose, clear.

use std::sync::Once;
use std::time::Duration;

use shared::models::DeliveryType;
use storefront::cart::{CartStorage, CartStore};
use storefront::catalog::{MockCatalog, ProductFilters};
use storefront::checkout::CheckoutForm;
use storefront::upsell::{UpsellKind, UpsellPrompt};
use wa_composer::{order_message, whatsapp_link};

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

#[tokio::test]
async fn pickup_order_from_browse_to_cleared_cart() {
    init_tracing();
    let catalog = MockCatalog::seeded(Duration::ZERO);

    // Browse and pick a sized cake plus a decoration
    let cake = catalog.get("vanilla-cake").await.expect("seeded cake");
    let decor = catalog
        .get("birthday-balloon-set")
        .await
        .expect("seeded decoration");

    let mut cart = CartStore::new();
    cart.add(cake, 1, Some(2.0), false); // 450/lb x 2lb = 900
    cart.add(decor, 2, None, false); // 299 x 2 = 598
    assert_eq!(cart.total(), 1498.0);
    assert_eq!(cart.count(), 3);

    // Cart holds both categories, so no upsell on the way to checkout
    assert_eq!(UpsellPrompt::for_cart(&cart), None);

    // Fill in the checkout form for pickup
    let mut form = CheckoutForm::new();
    form.set_full_name("Ram Sharma");
    form.set_phone("+977 9841234567");
    form.set_delivery_option(DeliveryType::Pickup);
    form.set_delivery_date("2024-01-25");
    form.set_delivery_time("2:00 PM");
    let details = form.validate().expect("valid pickup form");

    // Compose the outbound message
    let total = cart.total();
    let message = order_message(cart.lines(), &details, total);
    assert!(message.contains("Delivery: No (Store Pickup)"));
    assert!(message.contains("1. *Vanilla Dream Cake*"));
    assert!(message.contains("   Size: 2 Pound"));
    assert!(message.contains("2. *Birthday Balloon Set*"));
    assert!(message.contains("*Total: Rs 1498*"));

    let link = whatsapp_link("9779851234567", &message);
    assert!(link.starts_with("https://wa.me/9779851234567?text="));

    // Submission done: cart and form reset
    cart.clear();
    form.reset();
    assert_eq!(cart.count(), 0);
    assert_eq!(cart.total(), 0.0);
}

#[tokio::test]
async fn delivery_order_requires_address_before_composing() {
    init_tracing();
    let catalog = MockCatalog::seeded(Duration::ZERO);
    let cake = catalog.get("chocolate-cake").await.expect("seeded cake");

    let mut cart = CartStore::new();
    cart.add(cake, 1, Some(1.0), true);

    let mut form = CheckoutForm::new();
    form.set_full_name("Sita Devi");
    form.set_phone("+977 9851234567");
    form.set_delivery_option(DeliveryType::Delivery);
    form.set_delivery_date("2024-01-26");
    form.set_delivery_time("10:00 AM");
    form.set_address("short");

    let errors = form.validate().expect_err("address too short");
    assert!(errors.contains_key("address"));

    form.set_address("House 12, Baluwatar Road, Kathmandu");
    form.set_landmark("Opposite the bank");
    let details = form.validate().expect("valid delivery form");

    let message = order_message(cart.lines(), &details, cart.total());
    assert!(message.contains("Delivery: Yes"));
    assert!(message.contains("Delivery Address: House 12, Baluwatar Road, Kathmandu"));
    assert!(message.contains("Landmark: Opposite the bank"));
    assert!(message.contains("   Eggless: Yes"));
    assert!(message.contains("*Total: Rs 600*"));
}

#[tokio::test]
async fn single_category_cart_prompts_the_missing_one() {
    init_tracing();
    let catalog = MockCatalog::seeded(Duration::ZERO);
    let cakes = catalog
        .list(&ProductFilters {
            category: Some(shared::models::ProductCategory::Cakes),
            ..Default::default()
        })
        .await;

    let mut cart = CartStore::new();
    cart.add(cakes[0].clone(), 1, Some(1.0), false);

    let mut prompt = UpsellPrompt::new();
    let kind = UpsellPrompt::for_cart(&cart).expect("cakes-only cart");
    assert_eq!(kind, UpsellKind::Decorations);
    prompt.open(kind);
    assert!(prompt.is_open());
    prompt.close();
    assert!(!prompt.is_open());
}

#[tokio::test]
async fn cart_survives_restart_through_storage() -> anyhow::Result<()> {
    init_tracing();
    let catalog = MockCatalog::seeded(Duration::ZERO);
    let cake = catalog.get("eggless-vanilla").await.expect("seeded cake");

    let dir = tempfile::tempdir()?;
    let storage = CartStorage::open(dir.path().join("cart.redb"))?;

    // First session: fill the cart, persisting after each mutation
    let mut cart = CartStore::new();
    cart.add(cake.clone(), 1, Some(1.0), true);
    storage.save(cart.lines())?;
    cart.add(cake, 1, Some(1.0), true);
    storage.save(cart.lines())?;

    // Second session: reload and verify the same identity and quantity
    let restored = CartStore::from_lines(storage.load()?);
    assert_eq!(restored.lines().len(), 1);
    assert!(restored.lines()[0].same_line("eggless-vanilla", Some(1.0), true));
    assert_eq!(restored.lines()[0].quantity, 2);
    assert_eq!(restored.total(), cart.total());
    Ok(())
}
