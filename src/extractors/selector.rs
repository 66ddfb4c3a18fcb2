use crate::error::{RecipeError, Result};
use log::{debug, info, warn};
use scraper::{ElementRef, Html, Selector};

/// Ordered list of CSS selectors for one field. The first selector with a
/// match wins; later entries are fallbacks.
pub struct SelectorChain {
    field: &'static str,
    selectors: Vec<(&'static str, Selector)>,
}

impl SelectorChain {
    pub fn new(field: &'static str, selectors: &[&'static str]) -> Self {
        let selectors = selectors
            .iter()
            .filter_map(|s| match Selector::parse(s) {
                Ok(selector) => Some((*s, selector)),
                Err(e) => {
                    warn!("Skipping invalid selector '{}' for {}: {:?}", s, field, e);
                    None
                }
            })
            .collect();

        Self { field, selectors }
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    /// First element matched by the first selector that matches anything.
    pub fn find<'a>(&self, document: &'a Html) -> Option<ElementRef<'a>> {
        for (position, (source, selector)) in self.selectors.iter().enumerate() {
            if let Some(element) = document.select(selector).next() {
                if position == 0 {
                    debug!("Found {} using selector: {}", self.field, source);
                } else {
                    info!("Found {} using fallback selector: {}", self.field, source);
                }
                return Some(element);
            }
        }

        None
    }

    /// Like [`find`](Self::find), but a miss is a [`RecipeError::MissingField`].
    pub fn require<'a>(&self, document: &'a Html) -> Result<ElementRef<'a>> {
        self.find(document).ok_or_else(|| RecipeError::MissingField {
            field: self.field,
            selectors: self.selectors.iter().map(|(s, _)| s.to_string()).collect(),
        })
    }
}
