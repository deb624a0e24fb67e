//! Fixture constructors shared by unit tests.

use crate::models::{timestamp, Price, Product, Region};

pub fn product(id: i64, name: &str, category: &str) -> Product {
    Product {
        id,
        name: name.to_string(),
        category: category.to_string(),
        description: String::new(),
        unit: "kg".to_string(),
    }
}

pub fn price(id: i64, product_id: i64, value: f64, at: &str) -> Price {
    price_in_region(id, product_id, value, at, 1)
}

pub fn price_in_region(id: i64, product_id: i64, value: f64, at: &str, region_id: i64) -> Price {
    Price {
        id,
        product: product(product_id, &format!("Produit {product_id}"), "Divers"),
        region: Region {
            id: region_id,
            name: format!("Région {region_id}"),
        },
        value,
        updated_at: timestamp::parse(at).unwrap(),
        source: "marché".to_string(),
        is_official: false,
    }
}
