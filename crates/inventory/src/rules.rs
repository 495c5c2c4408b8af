//! Per-category aging rules.
//!
//! Each handler applies exactly one day-tick to one item, mutating it in
//! place. Handlers are total: any combination of `sell_in`/`quality` is
//! accepted and carried through the arithmetic as-is, with no error path.
//!
//! The unguarded second steps in [`update_normal`], [`update_fast_decaying`]
//! and the unclamped increments in [`update_event_driven`] can push `quality`
//! outside `[0, 50]` in edge combinations. Callers depend on those exact
//! results; adding clamps here would be an observable behavior change, not a
//! fix.

use crate::item::Item;

/// Nominal upper bound on quality for appreciating/event-driven items.
pub const QUALITY_CAP: i32 = 50;

/// Default rule: quality decays 1/day, 2/day on or after the sell date.
///
/// The lower bound is only checked against the pre-tick quality: an item at
/// quality 1 crossing its sell date lands at -1.
pub fn update_normal(item: &mut Item) {
    item.sell_in -= 1;

    if item.quality <= 0 {
        return;
    }

    item.quality -= 1;
    if item.sell_in <= 0 {
        item.quality -= 1;
    }
}

/// "Aged Brie": quality rises 1/day, 2/day on or after the sell date,
/// clamped at [`QUALITY_CAP`] before each increment.
pub fn update_appreciating(item: &mut Item) {
    item.sell_in -= 1;

    if item.quality < QUALITY_CAP {
        item.quality += 1;
    }
    if item.sell_in <= 0 && item.quality < QUALITY_CAP {
        item.quality += 1;
    }
}

/// "Sulfuras": legendary items never age and never change value.
pub fn update_legendary(_item: &mut Item) {}

/// "Backstage passes": quality rises as the event approaches (+1, +2 inside
/// 10 days, +3 inside 5), then collapses to 0 once the event has passed.
///
/// Only the pre-tick `>= 50` guard bounds the increments; an item close
/// enough to the cap (e.g. 49 with few days left) can exceed 50 in one tick.
pub fn update_event_driven(item: &mut Item) {
    item.sell_in -= 1;

    if item.quality >= QUALITY_CAP {
        return;
    }
    if item.sell_in < 0 {
        item.quality = 0;
        return;
    }

    item.quality += 1;
    if item.sell_in < 10 {
        item.quality += 1;
    }
    if item.sell_in < 5 {
        item.quality += 1;
    }
}

/// "Conjured": decays twice as fast as normal (2/day, 4/day on or after the
/// sell date), with the same pre-tick-only lower-bound check as
/// [`update_normal`].
pub fn update_fast_decaying(item: &mut Item) {
    item.sell_in -= 1;

    if item.quality <= 0 {
        return;
    }

    item.quality -= 2;
    if item.sell_in <= 0 {
        item.quality -= 2;
    }
}
