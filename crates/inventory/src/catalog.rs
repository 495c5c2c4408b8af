//! Category dispatch table.
//!
//! The category set is closed: [`RuleCatalog::default`] binds the four named
//! categories and everything else falls through to the normal rule. New
//! categories are added deliberately through [`RuleCatalog::register`], never
//! at runtime by unrecognized input.

use std::collections::HashMap;

use gildhall_core::{DomainError, DomainResult};

use crate::item::Item;
use crate::rules;

/// A per-item aging rule. Pure: mutates only the item it is handed.
pub type RuleHandler = fn(&mut Item);

/// Maps a category string to its aging rule, with the normal rule as the
/// fallback for anything unbound. Lookup is exact match; there is no
/// category-not-found error path.
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    handlers: HashMap<String, RuleHandler>,
    fallback: RuleHandler,
}

impl Default for RuleCatalog {
    fn default() -> Self {
        let handlers = HashMap::from([
            (
                "Aged Brie".to_string(),
                rules::update_appreciating as RuleHandler,
            ),
            (
                "Sulfuras, Hand of Ragnaros".to_string(),
                rules::update_legendary as RuleHandler,
            ),
            (
                "Backstage passes to a TAFKAL80ETC concert".to_string(),
                rules::update_event_driven as RuleHandler,
            ),
            (
                "Conjured".to_string(),
                rules::update_fast_decaying as RuleHandler,
            ),
        ]);
        Self {
            handlers,
            fallback: rules::update_normal,
        }
    }
}

impl RuleCatalog {
    /// Catalog with no named categories; every item ages by the normal rule.
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
            fallback: rules::update_normal,
        }
    }

    /// Bind `category` to `handler`. A category can only be bound once.
    pub fn register(
        &mut self,
        category: impl Into<String>,
        handler: RuleHandler,
    ) -> DomainResult<()> {
        let category = category.into();
        if category.trim().is_empty() {
            return Err(DomainError::validation("category cannot be empty"));
        }
        if self.handlers.contains_key(&category) {
            return Err(DomainError::conflict(format!(
                "category already registered: {category}"
            )));
        }
        self.handlers.insert(category, handler);
        Ok(())
    }

    /// Resolve the rule for a category, falling back to the normal rule.
    pub fn handler_for(&self, category: &str) -> RuleHandler {
        self.handlers.get(category).copied().unwrap_or(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_binds_the_named_categories() {
        let catalog = RuleCatalog::default();

        let mut brie = Item::new("Aged Brie", 5, 10);
        let handler = catalog.handler_for(&brie.category);
        handler(&mut brie);
        assert_eq!((brie.sell_in, brie.quality), (4, 11));

        let mut sulfuras = Item::new("Sulfuras, Hand of Ragnaros", 5, 80);
        let handler = catalog.handler_for(&sulfuras.category);
        handler(&mut sulfuras);
        assert_eq!((sulfuras.sell_in, sulfuras.quality), (5, 80));
    }

    #[test]
    fn unknown_category_falls_back_to_normal() {
        let catalog = RuleCatalog::default();
        let mut item = Item::new("+5 Dexterity Vest", 10, 20);
        let handler = catalog.handler_for(&item.category);
        handler(&mut item);
        assert_eq!((item.sell_in, item.quality), (9, 19));
    }

    #[test]
    fn lookup_is_exact_match() {
        let catalog = RuleCatalog::default();
        // Case or substring variants do not match the appreciating rule.
        let mut item = Item::new("aged brie", 5, 10);
        let handler = catalog.handler_for(&item.category);
        handler(&mut item);
        assert_eq!((item.sell_in, item.quality), (4, 9));
    }

    #[test]
    fn register_rejects_duplicate_category() {
        let mut catalog = RuleCatalog::default();
        let err = catalog
            .register("Aged Brie", rules::update_normal)
            .unwrap_err();
        match err {
            DomainError::Conflict(_) => {}
            other => panic!("expected Conflict, got {other:?}"),
        }
    }

    #[test]
    fn register_rejects_empty_category() {
        let mut catalog = RuleCatalog::empty();
        let err = catalog.register("   ", rules::update_normal).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn registered_extension_category_dispatches_to_its_handler() {
        fn freeze(item: &mut Item) {
            item.sell_in -= 1;
        }

        let mut catalog = RuleCatalog::default();
        catalog.register("Frozen", freeze).unwrap();

        let mut item = Item::new("Frozen", 3, 12);
        let handler = catalog.handler_for(&item.category);
        handler(&mut item);
        assert_eq!((item.sell_in, item.quality), (2, 12));
    }
}
