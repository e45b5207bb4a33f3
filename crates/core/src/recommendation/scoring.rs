//! Match-count scoring

use std::collections::HashSet;

use crate::domain::product::{Product, ScoredProduct};

/// Deduplicated union of the selected preferences and features.
///
/// Built once per request so each membership test is O(1). Empty strings are
/// ordinary members.
#[derive(Clone, Debug, Default)]
pub struct SelectedItems<'a> {
    items: HashSet<&'a str>,
}

impl<'a> SelectedItems<'a> {
    pub fn new(preferences: &'a [String], features: &'a [String]) -> Self {
        let items = preferences.iter().chain(features.iter()).map(String::as_str).collect();
        Self { items }
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.contains(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Counts product attributes present in the selection. The product side is
/// not deduplicated: an attribute listed twice counts twice.
pub fn score_product(product: &Product, selected: &SelectedItems<'_>) -> u32 {
    let matches = product.attributes().filter(|item| selected.contains(item)).count();
    u32::try_from(matches).unwrap_or(u32::MAX)
}

/// Scores every product, keeping catalog length and order.
pub fn score_all(
    products: &[Product],
    selected_preferences: &[String],
    selected_features: &[String],
) -> Vec<ScoredProduct> {
    let selected = SelectedItems::new(selected_preferences, selected_features);

    products
        .iter()
        .map(|product| ScoredProduct::new(product.clone(), score_product(product, &selected)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{score_all, score_product, SelectedItems};
    use crate::domain::product::Product;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| (*item).to_string()).collect()
    }

    #[test]
    fn selected_items_deduplicate_across_lists() {
        let preferences = strings(&["a", "a", "b"]);
        let features = strings(&["b", "c"]);
        let selected = SelectedItems::new(&preferences, &features);

        assert_eq!(selected.len(), 3);
        assert!(selected.contains("c"));
        assert!(!selected.contains("d"));
    }

    #[test]
    fn preferences_and_features_carry_equal_weight() {
        let product = Product::new(1, "CRM", "Vendas")
            .with_preferences(["p1", "p2", "p3"])
            .with_features(["f1", "f2"]);
        let preferences = strings(&["p1", "p2"]);
        let features = strings(&["f1"]);

        assert_eq!(score_product(&product, &SelectedItems::new(&preferences, &features)), 3);
    }

    #[test]
    fn selection_duplicates_do_not_inflate_score() {
        let product = Product::new(1, "Marketing", "Marketing").with_preferences(["m"]);
        let once = strings(&["m"]);
        let twice = strings(&["m", "m"]);

        let single = score_product(&product, &SelectedItems::new(&once, &[]));
        let doubled = score_product(&product, &SelectedItems::new(&twice, &twice));
        assert_eq!(single, 1);
        assert_eq!(doubled, single);
    }

    #[test]
    fn product_side_duplicates_are_counted() {
        let product = Product::new(1, "Dup", "Test").with_preferences(["x"]).with_features(["x"]);
        let selected = strings(&["x"]);

        assert_eq!(score_product(&product, &SelectedItems::new(&selected, &[])), 2);
    }

    #[test]
    fn empty_string_selection_never_matches_real_attributes() {
        let product = Product::new(1, "Marketing", "Marketing").with_preferences(["m"]);
        let preferences = strings(&["", "m"]);
        let features = strings(&[""]);

        assert_eq!(score_product(&product, &SelectedItems::new(&preferences, &features)), 1);
    }

    #[test]
    fn score_all_keeps_length_order_and_zero_scores() {
        let products = vec![
            Product::new(1, "A", "T").with_preferences(["x"]),
            Product::new(2, "B", "T").with_preferences(["y"]),
            Product::new(3, "C", "T").with_features(["x", "y"]),
        ];
        let preferences = strings(&["x"]);
        let features = strings(&["y"]);

        let scored = score_all(&products, &preferences, &features);
        let summary: Vec<(u64, u32)> =
            scored.iter().map(|entry| (entry.product.id.0, entry.score)).collect();
        assert_eq!(summary, vec![(1, 1), (2, 1), (3, 2)]);

        let none = score_all(&products, &strings(&["z"]), &[]);
        assert!(none.iter().all(|entry| entry.score == 0));
        assert_eq!(none.len(), products.len());
    }
}
