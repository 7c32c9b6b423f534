pub mod core;
pub mod mcp;
pub mod search;


pub use crate::core::config::PhayaoConfig;
pub use crate::core::error::{PhayaoError, Result};
pub use crate::core::category::Category;
pub use search::{Destination, KeywordClassifier, SearchBar, Suggestion, SuggestionGenerator};


pub const DEFAULT_DEBOUNCE_MS: u64 = 300;


pub const DEFAULT_MAX_SUGGESTIONS: usize = 4;


pub const SERVER_NAME: &str = "phayao-hub";
