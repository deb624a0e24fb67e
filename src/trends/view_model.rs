//! Product view-model assembly.

use crate::models::{Price, PriceVariation, Product, ProductViewModel};

use super::aggregate::history_for_product;
use super::icons::{fold_accent, icon_for_category};
use super::variation::variation;

/// Join a product with its prices into a render-ready view model.
///
/// `current_price` is the head of the bounded history and the previous price
/// is always `history[1]` of that same sequence. With fewer than two history
/// entries both change figures are zero. Never fails: a product without prices
/// yields an empty history and no current price.
pub fn build_view_model(
    product: &Product,
    all_prices: &[Price],
    history_limit: usize,
) -> ProductViewModel {
    let history: Vec<Price> = history_for_product(all_prices, product.id, history_limit)
        .into_iter()
        .cloned()
        .collect();

    let change = match history.as_slice() {
        [latest, previous, ..] => variation(latest.value, previous.value),
        _ => PriceVariation::ZERO,
    };

    ProductViewModel {
        product: product.clone(),
        current_price: history.first().cloned(),
        price_history: history,
        price_change: change.absolute_change,
        price_change_percent: change.percent_change,
        direction: change.direction,
        icon: icon_for_category(&product.category),
    }
}

/// Build view models for every product, sorted by product name.
///
/// Names compare without case or accents (`Échalote` sorts between `Ail` and
/// `Riz`); the raw name breaks ties.
pub fn build_view_models(
    products: &[Product],
    all_prices: &[Price],
    history_limit: usize,
) -> Vec<ProductViewModel> {
    let mut models: Vec<ProductViewModel> = products
        .iter()
        .map(|p| build_view_model(p, all_prices, history_limit))
        .collect();
    models.sort_by_cached_key(|vm| (name_sort_key(&vm.product.name), vm.product.name.clone()));
    models
}

fn name_sort_key(name: &str) -> String {
    name.trim().to_lowercase().chars().map(fold_accent).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Direction;
    use crate::test_support::{price, product};
    use crate::trends::FALLBACK_ICON;

    #[test]
    fn no_prices_yields_empty_defaults() {
        let rice = product(1, "Riz", "Céréales");
        let prices = vec![price(1, 2, 500.0, "2024-01-01T00:00:00Z")];
        let vm = build_view_model(&rice, &prices, 30);
        assert!(vm.current_price.is_none());
        assert!(vm.price_history.is_empty());
        assert_eq!(vm.price_change, 0.0);
        assert_eq!(vm.price_change_percent, 0.0);
        assert_eq!(vm.icon, "🌾");
        assert_eq!(vm.direction, Direction::Stable);
    }

    #[test]
    fn single_price_gives_zero_variation() {
        let onion = product(3, "Oignon", "Légumes");
        let prices = vec![price(7, 3, 400.0, "2024-01-01T00:00:00Z")];
        let vm = build_view_model(&onion, &prices, 30);
        assert_eq!(vm.price_history.len(), 1);
        assert_eq!(vm.current_price.as_ref(), vm.price_history.first());
        assert_eq!(vm.price_change, 0.0);
        assert_eq!(vm.price_change_percent, 0.0);
    }

    #[test]
    fn change_is_computed_from_first_two_history_entries() {
        let oil = product(4, "Huile", "Huiles");
        let prices = vec![
            price(1, 4, 1000.0, "2024-01-01T00:00:00Z"),
            price(2, 4, 1200.0, "2024-01-03T00:00:00Z"),
            price(3, 4, 1500.0, "2024-01-02T00:00:00Z"),
        ];
        let vm = build_view_model(&oil, &prices, 30);
        assert_eq!(vm.current_value(), Some(1200.0));
        assert_eq!(vm.price_change, -300.0);
        assert_eq!(vm.price_change_percent, -20.0);
        assert_eq!(vm.direction, Direction::Down);
    }

    #[test]
    fn history_limit_bounds_history_but_keeps_latest() {
        let fish = product(5, "Thiof", "Poissons");
        let prices: Vec<Price> = (1..=10)
            .map(|d| price(d, 5, 100.0 * d as f64, &format!("2024-01-{d:02}T00:00:00Z")))
            .collect();
        let vm = build_view_model(&fish, &prices, 7);
        assert_eq!(vm.price_history.len(), 7);
        assert_eq!(vm.current_price.as_ref().map(|p| p.id), Some(10));
        assert_eq!(vm.price_change, 100.0);
    }

    #[test]
    fn unknown_category_uses_fallback_icon() {
        let soap = product(6, "Savon", "Hygiène");
        assert_eq!(build_view_model(&soap, &[], 7).icon, FALLBACK_ICON);
    }

    #[test]
    fn view_models_are_sorted_by_name() {
        let products = vec![
            product(1, "riz", "Céréales"),
            product(2, "Ail", "Épices"),
            product(3, "Mil", "Céréales"),
        ];
        let names: Vec<String> = build_view_models(&products, &[], 7)
            .into_iter()
            .map(|vm| vm.product.name)
            .collect();
        assert_eq!(names, vec!["Ail", "Mil", "riz"]);
    }

    #[test]
    fn accented_names_sort_with_their_base_letter() {
        let products = vec![
            product(1, "Riz", "Céréales"),
            product(2, "Échalote", "Légumes"),
            product(3, "Ail", "Épices"),
            product(4, "echalote", "Légumes"),
        ];
        let names: Vec<String> = build_view_models(&products, &[], 7)
            .into_iter()
            .map(|vm| vm.product.name)
            .collect();
        assert_eq!(names, vec!["Ail", "echalote", "Échalote", "Riz"]);
    }

    #[test]
    fn direction_comes_from_the_computed_variation() {
        let fish = product(5, "Thiof", "Poissons");
        let prices = vec![
            price(1, 5, 2000.0, "2024-01-01T00:00:00Z"),
            price(2, 5, 2500.0, "2024-01-02T00:00:00Z"),
        ];
        let vm = build_view_model(&fish, &prices, 7);
        assert_eq!(vm.direction, variation(2500.0, 2000.0).direction);
        assert_eq!(vm.direction, Direction::Up);
    }
}
