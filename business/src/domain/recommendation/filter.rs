use std::sync::LazyLock;

use regex::Regex;

use crate::domain::product::model::Product;

use super::model::{CandidateFilter, CategoryRule, Preference};

const MOBILE_KEYWORDS: &[&str] = &["mobile", "phone"];
const LAPTOP_KEYWORDS: &[&str] = &["laptop"];
const WEARABLE_KEYWORDS: &[&str] = &["wearable", "watch"];

static PRICE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$([0-9]+)").expect("price token regex"));

/// Reads the first `$<digits>` token as a price ceiling.
///
/// Only ASCII digits form a token. Digits that do not fit in a `u64` are
/// treated as no ceiling.
pub fn extract_max_price(preference: &Preference) -> Option<u64> {
    let captures = PRICE_TOKEN.captures(preference.as_str())?;

    captures.get(1).and_then(|m| m.as_str().parse::<u64>().ok())
}

/// First matching keyword rule wins; later rules are never consulted.
pub fn match_category(preference: &Preference) -> CategoryRule {
    if preference.contains_any(MOBILE_KEYWORDS) {
        CategoryRule::Mobile
    } else if preference.contains_any(LAPTOP_KEYWORDS) {
        CategoryRule::Laptop
    } else if preference.contains_any(WEARABLE_KEYWORDS) {
        CategoryRule::Wearable
    } else {
        CategoryRule::Any
    }
}

impl CandidateFilter {
    pub fn from_preference(preference: &Preference) -> Self {
        Self {
            rule: match_category(preference),
            max_price: extract_max_price(preference),
        }
    }
}

/// Stable filter over the catalog; catalog order is preserved.
pub fn filter_candidates(catalog: &[Product], filter: &CandidateFilter) -> Vec<Product> {
    catalog
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new(1, "iPhone 13", 799, "mobile"),
            Product::new(2, "Samsung Galaxy S22", 699, "mobile"),
            Product::new(3, "Google Pixel 6a", 449, "mobile"),
            Product::new(4, "OnePlus 9", 599, "mobile"),
            Product::new(5, "Motorola G Power", 299, "mobile"),
            Product::new(6, "Sony WH-1000XM4 Headphones", 349, "electronics"),
            Product::new(8, "Dell XPS 13 Laptop", 999, "laptop"),
            Product::new(9, "MacBook Air M1", 1099, "laptop"),
            Product::new(10, "Apple Watch Series 7", 399, "wearable"),
            Product::new(11, "Fitbit Charge 5", 149, "wearable"),
            Product::new(15, "Instant Pot Duo", 99, "appliance"),
        ]
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn should_extract_price_after_dollar_sign() {
        let preference = Preference::new("phones under $500");
        assert_eq!(extract_max_price(&preference), Some(500));
    }

    #[test]
    fn should_ignore_non_numeric_price_token() {
        let preference = Preference::new("phones under $abc");
        assert_eq!(extract_max_price(&preference), None);
    }

    #[test]
    fn should_return_no_price_without_dollar_token() {
        let preference = Preference::new("a phone for my mother");
        assert_eq!(extract_max_price(&preference), None);
    }

    #[test]
    fn should_ignore_price_that_overflows() {
        let preference = Preference::new("laptop under $99999999999999999999999");
        assert_eq!(extract_max_price(&preference), None);
    }

    #[test]
    fn should_only_read_ascii_digits_as_price() {
        assert_eq!(extract_max_price(&Preference::new("phone under $٥٠٠")), None);
        assert_eq!(
            extract_max_price(&Preference::new("phone under $٥٠٠ or $300")),
            Some(300)
        );
    }

    #[test]
    fn should_use_first_price_token() {
        let preference = Preference::new("between $300 and $700");
        assert_eq!(extract_max_price(&preference), Some(300));
    }

    #[test]
    fn should_prefer_mobile_over_watch() {
        let preference = Preference::new("I want a mobile phone and a watch");

        assert_eq!(match_category(&preference), CategoryRule::Mobile);

        let filter = CandidateFilter::from_preference(&preference);
        let candidates = filter_candidates(&catalog(), &filter);
        assert!(candidates.iter().all(|p| p.category == "mobile"));
    }

    #[test]
    fn should_match_each_rule_in_order() {
        assert_eq!(match_category(&"smartphone".into()), CategoryRule::Mobile);
        assert_eq!(match_category(&"gaming LAPTOP".into()), CategoryRule::Laptop);
        assert_eq!(match_category(&"laptop and watch".into()), CategoryRule::Laptop);
        assert_eq!(match_category(&"fitness watch".into()), CategoryRule::Wearable);
        assert_eq!(match_category(&"any wearable".into()), CategoryRule::Wearable);
        assert_eq!(match_category(&"a gift".into()), CategoryRule::Any);
    }

    #[test]
    fn should_filter_mobiles_under_price_in_catalog_order() {
        let preference = Preference::new("mobile under $500");
        let filter = CandidateFilter::from_preference(&preference);

        let candidates = filter_candidates(&catalog(), &filter);

        assert_eq!(names(&candidates), vec!["Google Pixel 6a", "Motorola G Power"]);
    }

    #[test]
    fn should_return_nothing_when_price_too_low() {
        let preference = Preference::new("mobile under $1");
        let filter = CandidateFilter::from_preference(&preference);

        assert!(filter_candidates(&catalog(), &filter).is_empty());
    }

    #[test]
    fn should_return_whole_catalog_without_keywords_or_price() {
        let filter = CandidateFilter::from_preference(&Preference::default());

        assert_eq!(filter_candidates(&catalog(), &filter), catalog());
    }

    #[test]
    fn should_apply_price_across_categories_without_keyword() {
        let preference = Preference::new("something under $150");
        let filter = CandidateFilter::from_preference(&preference);

        let candidates = filter_candidates(&catalog(), &filter);

        assert_eq!(names(&candidates), vec!["Fitbit Charge 5", "Instant Pot Duo"]);
    }

    proptest! {
        #[test]
        fn filtered_candidates_are_an_ordered_subset_of_the_catalog(
            max_price in proptest::option::of(0u64..1500),
            keyword in prop::sample::select(vec!["", "phone", "laptop", "watch", "camera"]),
        ) {
            let raw = match max_price {
                Some(price) => format!("{} under ${}", keyword, price),
                None => keyword.to_string(),
            };
            let filter = CandidateFilter::from_preference(&Preference::new(raw));
            let catalog = catalog();

            let candidates = filter_candidates(&catalog, &filter);

            let positions = candidates
                .iter()
                .map(|c| catalog.iter().position(|p| p == c));
            let mut last = None;
            for position in positions {
                prop_assert!(position.is_some());
                prop_assert!(position > last);
                last = position;
            }
            if let Some(max) = max_price {
                prop_assert!(candidates.iter().all(|p| p.price <= max));
            }
        }
    }
}
