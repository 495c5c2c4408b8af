//! Stock file loading.

use std::path::Path;

use serde::Deserialize;

use gildhall_core::{DomainError, DomainResult};
use gildhall_inventory::Item;

/// One record in a stock file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StockRecord {
    pub category: String,
    pub sell_in: i32,
    pub quality: i32,
}

/// A stock file: the opening inventory for a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StockFile {
    pub items: Vec<StockRecord>,
}

impl StockFile {
    /// Parse a stock file from JSON text.
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        let file: StockFile = serde_json::from_str(text)?;
        Ok(file)
    }

    /// Read and parse a stock file from disk.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        use anyhow::Context;

        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading stock file {}", path.display()))?;
        Self::from_json(&text)
            .with_context(|| format!("parsing stock file {}", path.display()))
    }

    /// Validate the records and convert them into items.
    ///
    /// Out-of-invariant numbers are accepted (the engine is total over them);
    /// only a blank category is rejected, since the dispatch key is the one
    /// field the engine cannot interpret when empty.
    pub fn into_items(self) -> DomainResult<Vec<Item>> {
        self.items
            .into_iter()
            .map(|record| {
                if record.category.trim().is_empty() {
                    return Err(DomainError::validation("category cannot be empty"));
                }
                Ok(Item::new(record.category, record.sell_in, record.quality))
            })
            .collect()
    }
}
