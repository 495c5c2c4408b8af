//! The day advancer: one simulated day per call, over the whole collection.

use crate::catalog::RuleCatalog;
use crate::item::Item;

/// Applies one day-tick to every item in a collection, in order, mutating
/// `sell_in`/`quality` in place. Holds no state between calls; the caller
/// owns the collection and its membership.
#[derive(Debug, Clone, Default)]
pub struct DayAdvancer {
    catalog: RuleCatalog,
}

impl DayAdvancer {
    pub fn new(catalog: RuleCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// Advance every item by exactly one day.
    ///
    /// Total over its inputs: out-of-invariant values pass through the rule
    /// arithmetic unchanged and unrecognized categories age by the normal
    /// rule. No partial application; every item is processed before return.
    pub fn advance(&self, items: &mut [Item]) {
        tracing::debug!(items = items.len(), "advancing one day");
        for item in items.iter_mut() {
            let handler = self.catalog.handler_for(&item.category);
            handler(item);
            tracing::trace!(%item, "item aged");
        }
    }
}
