use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::category::Category;
use crate::core::config::PhayaoConfig;
use super::destination::Destination;
use super::keywords::CATEGORY_KEYWORDS;


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedQuery {

    pub original_query: String,

    pub category: Category,

    pub matched_keyword: Option<String>,

    /// True when no keyword matched and the default section was used.
    pub fallback: bool,

    pub path: String,
}


/// Routes a submitted query to a portal section by first-match keyword
/// containment over [`CATEGORY_KEYWORDS`].
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    default_category: Category,
}

impl KeywordClassifier {
    pub fn new(default_category: Category) -> Self {
        Self { default_category }
    }

    pub fn from_config(config: &PhayaoConfig) -> Self {
        Self::new(config.default_category)
    }


    pub fn default_category(&self) -> Category {
        self.default_category
    }

    /// `None` for empty or whitespace-only input.
    pub fn classify(&self, query: &str) -> Option<Category> {
        self.classify_detailed(query).map(|c| c.category)
    }


    pub fn classify_detailed(&self, query: &str) -> Option<ClassifiedQuery> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return None;
        }

        let lowered = trimmed.to_lowercase();
        let hit = CATEGORY_KEYWORDS
            .iter()
            .find_map(|set| set.first_match(&lowered).map(|kw| (set.category, kw)));

        let (category, matched_keyword) = match hit {
            Some((category, kw)) => {
                debug!("Query '{}' matched '{}' -> {}", trimmed, kw, category);
                (category, Some(kw.to_string()))
            }
            None => {
                debug!(
                    "Query '{}' matched no keyword set, using {}",
                    trimmed, self.default_category
                );
                (self.default_category, None)
            }
        };

        Some(ClassifiedQuery {
            original_query: trimmed.to_string(),
            category,
            fallback: matched_keyword.is_none(),
            matched_keyword,
            path: Destination::new(category, trimmed).path(),
        })
    }

    /// Where a submitted query navigates to.
    pub fn resolve(&self, query: &str) -> Option<Destination> {
        let classified = self.classify_detailed(query)?;
        info!("Search submitted -> {}", classified.path);
        Some(Destination::new(classified.category, classified.original_query))
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new(Category::Market)
    }
}
