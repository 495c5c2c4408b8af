use anyhow::{bail, Context};

use gildhall_inventory::DayAdvancer;
use gildhall_sim::{report, stock::StockFile};

fn main() -> anyhow::Result<()> {
    gildhall_observability::init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        bail!("usage: gildhall-sim <stock.json> [days]");
    };
    let days: u32 = match args.next() {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("invalid day count: {raw}"))?,
        None => 2,
    };

    let mut items = StockFile::load(&path)?.into_items()?;
    tracing::info!(items = items.len(), days, stock = %path, "starting run");

    let advancer = DayAdvancer::default();
    let mut stdout = std::io::stdout().lock();
    report::render(&mut stdout, &advancer, &mut items, days)?;

    Ok(())
}
