use crate::domain::product::model::Product;

use super::model::Preference;

/// Builds the ranking instruction sent to the text generator.
pub fn build_instruction(preference: &Preference, candidates: &[Product]) -> String {
    let products = serde_json::to_string(candidates).unwrap_or_else(|_| "[]".to_string());

    format!(
        r#"A user says: "{}".
From the following product list, rank the most relevant products.
Respond ONLY with a JSON array of product NAMES in order of relevance.

Products:
{}
"#,
        preference, products
    )
}
