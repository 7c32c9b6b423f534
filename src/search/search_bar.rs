use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info};

use crate::core::config::PhayaoConfig;
use super::classifier::KeywordClassifier;
use super::debounce::Debouncer;
use super::destination::Destination;
use super::models::Suggestion;
use super::selection::SelectionState;
use super::suggestions::SuggestionGenerator;


/// Receives committed searches. The web shell routes the browser; tests
/// record.
pub trait Navigator: Send + Sync {
    fn navigate(&self, destination: &Destination);
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKey {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
}


#[derive(Debug, Default)]
struct SuggestionSlot {
    // input generation the slot is waiting for
    requested: u64,
    // input generation `items` were computed for
    shown: u64,
    items: Vec<Suggestion>,
    computations: u64,
}


/// Search box controller: owns the query text, the debounced suggestion
/// list and the dropdown selection, and hands committed searches to a
/// [`Navigator`].
pub struct SearchBar {
    query: String,
    focused: bool,
    selection: SelectionState,
    classifier: KeywordClassifier,
    generator: Arc<SuggestionGenerator>,
    debouncer: Debouncer,
    slot: Arc<RwLock<SuggestionSlot>>,
    generation: u64,
    navigator: Arc<dyn Navigator>,
}

impl SearchBar {
    pub fn new(config: &PhayaoConfig, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            query: String::new(),
            focused: false,
            selection: SelectionState::Closed,
            classifier: KeywordClassifier::from_config(config),
            generator: Arc::new(SuggestionGenerator::from_config(config)),
            debouncer: Debouncer::new(config.debounce()),
            slot: Arc::new(RwLock::new(SuggestionSlot::default())),
            generation: 0,
            navigator,
        }
    }


    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    pub fn is_open(&self) -> bool {
        self.selection.is_open()
    }

    /// Computed suggestions for the current input (not the popular list).
    pub fn suggestions(&self) -> Vec<Suggestion> {
        self.slot.read().items.clone()
    }

    /// How many times the generator actually ran.
    pub fn suggestion_computations(&self) -> u64 {
        self.slot.read().computations
    }

    pub fn is_computing(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// What the dropdown shows: popular searches for an empty query,
    /// computed suggestions otherwise, nothing when closed.
    pub fn displayed(&self) -> Vec<Suggestion> {
        if !self.selection.is_open() || !self.generator.enabled() {
            return Vec::new();
        }
        if self.query.trim().is_empty() {
            self.generator.popular()
        } else {
            self.suggestions()
        }
    }


    pub fn focus(&mut self) {
        self.focused = true;
        self.selection.focus();
    }

    /// Input change. Empty input clears the list at once; anything else
    /// replaces the pending computation.
    pub fn input(&mut self, text: &str) {
        self.query = text.to_string();
        self.generation += 1;
        self.selection.reset();

        let generation = self.generation;
        {
            let mut slot = self.slot.write();
            slot.requested = generation;
            if text.trim().is_empty() || !self.generator.enabled() {
                slot.items.clear();
                slot.shown = generation;
            }
        }

        if text.trim().is_empty() || !self.generator.enabled() {
            self.debouncer.cancel();
            return;
        }

        let generator = Arc::clone(&self.generator);
        let slot = Arc::clone(&self.slot);
        let text = text.to_string();
        self.debouncer.schedule(move || {
            let items = generator.suggest(&text);
            let mut slot = slot.write();
            slot.computations += 1;
            if slot.requested == generation {
                slot.items = items;
                slot.shown = generation;
            } else {
                debug!("Dropping suggestions for superseded input '{}'", text);
            }
        });
    }


    pub fn key(&mut self, key: SearchKey) -> Option<Destination> {
        match key {
            SearchKey::ArrowDown => {
                let len = self.displayed().len();
                self.selection.move_down(len);
                None
            }
            SearchKey::ArrowUp => {
                self.selection.move_up();
                None
            }
            SearchKey::Enter => {
                if self.is_stale() {
                    debug!("Suggestion list predates '{}', submitting query", self.query);
                    return self.submit();
                }
                let displayed = self.displayed();
                match self.selection.selected().and_then(|i| displayed.get(i)) {
                    Some(suggestion) => {
                        let suggestion = suggestion.clone();
                        self.commit(&suggestion)
                    }
                    None => self.submit(),
                }
            }
            SearchKey::Escape => {
                self.selection.close();
                self.focused = false;
                None
            }
        }
    }

    /// Pointer pick of a displayed entry.
    pub fn pick(&mut self, index: usize) -> Option<Destination> {
        let suggestion = self.displayed().get(index)?.clone();
        self.commit(&suggestion)
    }

    /// Closes the dropdown; the query text stays.
    pub fn click_outside(&mut self) {
        self.selection.close();
        self.focused = false;
    }

    /// True while the listed suggestions belong to earlier input.
    fn is_stale(&self) -> bool {
        if self.query.trim().is_empty() {
            return false;
        }
        let slot = self.slot.read();
        slot.shown != slot.requested
    }

    /// Form submit: route the raw query through the classifier.
    pub fn submit(&mut self) -> Option<Destination> {
        let destination = self.classifier.resolve(&self.query)?;
        self.navigator.navigate(&destination);
        self.clear();
        Some(destination)
    }

    fn commit(&mut self, suggestion: &Suggestion) -> Option<Destination> {
        let destination = suggestion.destination();
        info!("Suggestion '{}' chosen -> {}", suggestion.id, destination);
        self.navigator.navigate(&destination);
        self.clear();
        Some(destination)
    }

    fn clear(&mut self) {
        self.query.clear();
        self.generation += 1;
        self.debouncer.cancel();
        {
            let mut slot = self.slot.write();
            slot.requested = self.generation;
            slot.shown = self.generation;
            slot.items.clear();
        }
        self.selection.close();
    }
}
