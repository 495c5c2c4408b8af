//! Simulation harness around the aging engine: load a stock file, advance a
//! number of days, render the day-by-day report. The engine itself lives in
//! `gildhall-inventory`; everything here is thin IO.

pub mod report;
pub mod stock;
