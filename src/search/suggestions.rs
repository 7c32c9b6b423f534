use lazy_static::lazy_static;
use tracing::debug;

use crate::core::category::Category;
use crate::core::config::PhayaoConfig;
use super::keywords::SUGGESTION_GROUPS;
use super::models::{Suggestion, SuggestionKind};


/// Sections offered when typed text hits no intent group.
pub const FALLBACK_CATEGORIES: [Category; 3] = [Category::Market, Category::Jobs, Category::Guides];

lazy_static! {
    pub static ref POPULAR_SEARCHES: Vec<(Category, &'static str)> = vec![
        (Category::Jobs, "งานพาร์ทไทม์"),
        (Category::Market, "ของฝากพะเยา"),
        (Category::Guides, "คาเฟ่ริมกว๊าน"),
        (Category::Guides, "ที่พักใกล้กว๊านพะเยา"),
    ];
}


#[derive(Debug, Clone)]
pub struct SuggestionGenerator {
    show_suggestions: bool,
    popular_enabled: bool,
    max_suggestions: usize,
}

impl SuggestionGenerator {
    pub fn new(show_suggestions: bool, max_suggestions: usize) -> Self {
        Self {
            show_suggestions,
            popular_enabled: true,
            max_suggestions,
        }
    }

    pub fn from_config(config: &PhayaoConfig) -> Self {
        Self {
            show_suggestions: config.show_suggestions,
            popular_enabled: config.popular_searches_enabled,
            max_suggestions: config.max_suggestions,
        }
    }


    pub fn enabled(&self) -> bool {
        self.show_suggestions
    }

    /// Suggestions for text being typed. One entry per matching intent
    /// group in group order, or the fixed fallback set when none match.
    pub fn suggest(&self, input: &str) -> Vec<Suggestion> {
        if !self.show_suggestions {
            return Vec::new();
        }
        let query = input.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let lowered = query.to_lowercase();
        let mut suggestions: Vec<Suggestion> = SUGGESTION_GROUPS
            .iter()
            .filter(|group| group.matches(&lowered))
            .map(|group| Suggestion::for_query(SuggestionKind::Intent, group.category, query))
            .collect();

        if suggestions.is_empty() {
            suggestions = FALLBACK_CATEGORIES
                .iter()
                .map(|&category| Suggestion::for_query(SuggestionKind::Fallback, category, query))
                .collect();
        }

        suggestions.truncate(self.max_suggestions);
        debug!("{} suggestions for '{}'", suggestions.len(), query);
        suggestions
    }

    /// Static list shown while the input is still empty.
    pub fn popular(&self) -> Vec<Suggestion> {
        if !self.popular_enabled {
            return Vec::new();
        }
        POPULAR_SEARCHES
            .iter()
            .enumerate()
            .map(|(i, (category, text))| Suggestion::popular(i, *category, text))
            .collect()
    }
}

impl Default for SuggestionGenerator {
    fn default() -> Self {
        Self::from_config(&PhayaoConfig::default())
    }
}
