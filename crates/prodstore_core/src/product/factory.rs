//! Record codec: mints new products with demo content.

use crate::product::Product;
use rand::Rng;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

const FRUITS: &[&str] = &[
    "Apple",
    "Apricot",
    "Banana",
    "Blackberry",
    "Blueberry",
    "Cherry",
    "Coconut",
    "Fig",
    "Grape",
    "Grapefruit",
    "Kiwi",
    "Lemon",
    "Lime",
    "Lychee",
    "Mango",
    "Melon",
    "Nectarine",
    "Orange",
    "Papaya",
    "Peach",
    "Pear",
    "Pineapple",
    "Plum",
    "Pomegranate",
    "Raspberry",
    "Strawberry",
    "Watermelon",
];

/// Produces the record inserted by `add`.
///
/// The store never accepts caller-supplied fields on creation; everything
/// about a new product comes from its factory.
pub trait ProductFactory: Send + Sync {
    /// Returns a new product with a fresh id and `created_at` set.
    fn create(&self) -> Product;
}

/// Default factory.
///
/// - `id`: random UUIDv4 in hyphenated form
/// - `name`: a fruit name
/// - `price`: uniform in `[1.00, 99.99]`, two decimals
/// - `created_at`: current UNIX seconds
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoFactory;

impl DemoFactory {
    /// Creates the default factory.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ProductFactory for DemoFactory {
    fn create(&self) -> Product {
        let mut rng = rand::thread_rng();
        let name = FRUITS[rng.gen_range(0..FRUITS.len())];
        let cents: u32 = rng.gen_range(100..10_000);
        Product::new(
            Uuid::new_v4().to_string(),
            name,
            f64::from(cents) / 100.0,
            unix_now(),
        )
    }
}

/// Current time in UNIX seconds, saturating at `u32::MAX`.
#[must_use]
pub fn unix_now() -> u32 {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    u32::try_from(secs).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn demo_products_are_populated() {
        let product = DemoFactory.create();
        assert!(Uuid::parse_str(&product.id).is_ok());
        assert!(FRUITS.contains(&product.name.as_str()));
        assert!((1.0..100.0).contains(&product.price));
        assert!(product.created_at > 0);
    }

    #[test]
    fn demo_price_has_two_decimals() {
        for _ in 0..200 {
            let price = DemoFactory.create().price;
            let cents = price * 100.0;
            assert!((cents - cents.round()).abs() < 1e-6, "price {price}");
        }
    }

    #[test]
    fn demo_ids_are_unique() {
        let ids: HashSet<String> = (0..1_000).map(|_| DemoFactory.create().id).collect();
        assert_eq!(ids.len(), 1_000);
    }
}
