use crate::domain::product::model::Product;

/// Free-text request from the caller, trimmed and lowercased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preference(String);

impl Preference {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn contains_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.0.contains(k))
    }
}

impl std::fmt::Display for Preference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Preference {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Preference {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Branch of the keyword priority chain that matched a preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryRule {
    Mobile,
    Laptop,
    Wearable,
    /// No category keyword: every product is eligible.
    Any,
}

impl CategoryRule {
    /// Catalog category selected by this rule, `None` for [`CategoryRule::Any`].
    pub fn category(&self) -> Option<&'static str> {
        match self {
            CategoryRule::Mobile => Some("mobile"),
            CategoryRule::Laptop => Some("laptop"),
            CategoryRule::Wearable => Some("wearable"),
            CategoryRule::Any => None,
        }
    }
}

impl std::fmt::Display for CategoryRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryRule::Mobile => write!(f, "mobile"),
            CategoryRule::Laptop => write!(f, "laptop"),
            CategoryRule::Wearable => write!(f, "wearable"),
            CategoryRule::Any => write!(f, "any"),
        }
    }
}

/// Category and price constraints derived from a single preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateFilter {
    pub rule: CategoryRule,
    pub max_price: Option<u64>,
}

impl CandidateFilter {
    pub fn matches(&self, product: &Product) -> bool {
        let category_ok = self
            .rule
            .category()
            .is_none_or(|category| product.category == category);
        let price_ok = self.max_price.is_none_or(|max| product.price <= max);
        category_ok && price_ok
    }
}

/// Which path produced the final ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingSource {
    Model,
    Fallback,
}

impl std::fmt::Display for RankingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RankingSource::Model => write!(f, "model"),
            RankingSource::Fallback => write!(f, "fallback"),
        }
    }
}

/// Final ordered products together with the path that ordered them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking {
    pub products: Vec<Product>,
    pub source: RankingSource,
}
