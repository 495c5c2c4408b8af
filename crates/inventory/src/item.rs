use serde::{Deserialize, Serialize};

/// A stocked item.
///
/// `category` selects which aging rule applies (exact string match) and is
/// never altered by the engine. `sell_in` is the number of days remaining to
/// sell the item and may go negative once the sell date has passed. `quality`
/// is the item's value; the nominal domain is `[0, 50]` for everything except
/// legendary items, which are pinned at 80.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub category: String,
    pub sell_in: i32,
    pub quality: i32,
}

impl Item {
    pub fn new(category: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            category: category.into(),
            sell_in,
            quality,
        }
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.category, self.sell_in, self.quality)
    }
}
