//! Sample data generation for integration and unit tests.

use shelfview_types::ItemDraft;

/// Minimal draft with just a name.
pub fn draft(name: &str) -> ItemDraft {
    ItemDraft::new(name)
}

/// Fully populated product draft.
pub fn product(name: &str, category: &str, price: f64, rating: f64) -> ItemDraft {
    ItemDraft {
        name: name.to_string(),
        category: Some(category.to_string()),
        price: Some(price),
        rating: Some(rating),
        ..Default::default()
    }
}

/// A small catalog spanning every category, several price brackets, and
/// one out-of-stock item. Storage order is the vec order.
pub fn sample_catalog() -> Vec<ItemDraft> {
    let mut watch = product("Smart Fitness Watch", "electronics", 299.99, 4.7);
    watch.in_stock = false;

    vec![
        product("Wireless Bluetooth Headphones", "electronics", 199.99, 4.5),
        product("Premium Cotton T-Shirt", "clothing", 29.99, 4.2),
        watch,
        product("Ergonomic Office Chair", "home", 449.99, 4.3),
        product("Yoga Mat Pro", "sports", 59.99, 4.6),
        product("JavaScript: The Complete Guide", "books", 39.99, 4.8),
        product("Wireless Gaming Mouse", "electronics", 89.99, 4.4),
        product("Designer Sunglasses", "clothing", 149.99, 4.1),
        product("Plant-Based Cookbook", "books", 24.99, 4.5),
        product("Smart LED Desk Lamp", "home", 79.99, 4.2),
    ]
}
