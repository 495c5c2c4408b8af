//! Day-by-day textual report.

use std::io::Write;

use gildhall_inventory::{DayAdvancer, Item};

/// Render the report for `days` simulated days to `out`.
///
/// Day 0 shows the opening stock; each following day advances the whole
/// collection once before printing. Items are printed in caller order as
/// `category, sell_in, quality`.
pub fn render(
    out: &mut impl Write,
    advancer: &DayAdvancer,
    items: &mut [Item],
    days: u32,
) -> std::io::Result<()> {
    for day in 0..=days {
        if day > 0 {
            advancer.advance(items);
        }
        writeln!(out, "-------- day {day} --------")?;
        writeln!(out, "category, sell_in, quality")?;
        for item in items.iter() {
            writeln!(out, "{item}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}
