pub mod classifier;
pub mod debounce;
pub mod destination;
pub mod keywords;
pub mod models;
pub mod search_bar;
pub mod selection;
pub mod suggestions;

pub use classifier::{ClassifiedQuery, KeywordClassifier};
pub use debounce::Debouncer;
pub use destination::{Destination, encode_component, matches_search};
pub use keywords::{CATEGORY_KEYWORDS, KeywordSet, SUGGESTION_GROUPS};
pub use models::{Suggestion, SuggestionKind};
pub use search_bar::{Navigator, SearchBar, SearchKey};
pub use selection::SelectionState;
pub use suggestions::{FALLBACK_CATEGORIES, POPULAR_SEARCHES, SuggestionGenerator};
