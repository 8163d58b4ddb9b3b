use crate::domain::product::model::Product;

/// Maps model-returned names back onto candidates, in the model's order.
///
/// Names are trimmed and lowercased. Unknown names contribute nothing, so the
/// result only ever holds members of `candidates`.
pub fn map_names_to_candidates(names: &[String], candidates: &[Product]) -> Vec<Product> {
    names
        .iter()
        .map(|name| name.trim().to_lowercase())
        .flat_map(|name| {
            candidates
                .iter()
                .filter(move |p| p.has_name(&name))
                .cloned()
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Cheapest first; equal prices keep catalog order.
pub fn fallback_rank(candidates: &[Product]) -> Vec<Product> {
    let mut ranked = candidates.to_vec();
    ranked.sort_by_key(|p| p.price);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn mobiles() -> Vec<Product> {
        vec![
            Product::new(1, "iPhone 13", 799, "mobile"),
            Product::new(2, "Samsung Galaxy S22", 699, "mobile"),
            Product::new(3, "Google Pixel 6a", 449, "mobile"),
            Product::new(4, "OnePlus 9", 599, "mobile"),
        ]
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn should_follow_model_order() {
        let returned = vec!["OnePlus 9".to_string(), "iPhone 13".to_string()];

        let ranked = map_names_to_candidates(&returned, &mobiles());

        assert_eq!(names(&ranked), vec!["OnePlus 9", "iPhone 13"]);
    }

    #[test]
    fn should_match_names_ignoring_case_and_whitespace() {
        let returned = vec!["  GOOGLE pixel 6A ".to_string()];

        let ranked = map_names_to_candidates(&returned, &mobiles());

        assert_eq!(names(&ranked), vec!["Google Pixel 6a"]);
    }

    #[test]
    fn should_drop_unknown_names() {
        let returned = vec![
            "Nokia 3310".to_string(),
            "Samsung Galaxy S22".to_string(),
            "MacBook Air M1".to_string(),
        ];

        let ranked = map_names_to_candidates(&returned, &mobiles());

        assert_eq!(names(&ranked), vec!["Samsung Galaxy S22"]);
    }

    #[test]
    fn should_sort_fallback_by_ascending_price() {
        let candidates = vec![
            Product::new(1, "iPhone 13", 799, "mobile"),
            Product::new(2, "Samsung Galaxy S22", 699, "mobile"),
            Product::new(3, "Pixel 6a", 449, "mobile"),
        ];

        let ranked = fallback_rank(&candidates);

        assert_eq!(names(&ranked), vec!["Pixel 6a", "Samsung Galaxy S22", "iPhone 13"]);
    }

    #[test]
    fn should_keep_catalog_order_for_equal_prices() {
        let candidates = vec![
            Product::new(5, "Motorola G Power", 299, "mobile"),
            Product::new(6, "Sony WH-1000XM4 Headphones", 349, "electronics"),
            Product::new(7, "Bose QuietComfort 35 II", 299, "electronics"),
        ];

        let ranked = fallback_rank(&candidates);

        assert_eq!(
            names(&ranked),
            vec!["Motorola G Power", "Bose QuietComfort 35 II", "Sony WH-1000XM4 Headphones"]
        );
    }

    proptest! {
        #[test]
        fn mapped_products_are_always_candidates(
            returned in proptest::collection::vec(
                prop::sample::select(vec![
                    "iPhone 13", "iphone 13", "OnePlus 9", "Nokia 3310",
                    "MacBook Air M1", "", "Google Pixel 6a ",
                ]),
                0..8,
            ),
        ) {
            let returned: Vec<String> = returned.into_iter().map(String::from).collect();
            let candidates = mobiles();

            let ranked = map_names_to_candidates(&returned, &candidates);

            prop_assert!(ranked.iter().all(|p| candidates.contains(p)));
            prop_assert!(ranked.len() <= returned.len());
        }

        #[test]
        fn fallback_keeps_every_candidate(prices in proptest::collection::vec(0u64..2000, 0..20)) {
            let candidates: Vec<Product> = prices
                .iter()
                .enumerate()
                .map(|(i, price)| Product::new(i as u32, format!("item {}", i), *price, "mobile"))
                .collect();

            let ranked = fallback_rank(&candidates);

            prop_assert_eq!(ranked.len(), candidates.len());
            prop_assert!(ranked.windows(2).all(|w| w[0].price <= w[1].price));
            prop_assert!(candidates.iter().all(|c| ranked.contains(c)));
        }
    }
}
