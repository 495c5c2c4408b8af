//! Inventory aging domain module.
//!
//! This crate contains the business rules for daily item aging, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage). One day
//! passes per call to [`DayAdvancer::advance`]; each item's `sell_in` and
//! `quality` move according to its category's rule.

pub mod advancer;
pub mod catalog;
pub mod item;
pub mod rules;

pub use advancer::DayAdvancer;
pub use catalog::{RuleCatalog, RuleHandler};
pub use item::Item;
