use std::time::Duration;

use anyhow::{Context, Result};
use edumap::{load_chart, source_for, ChartConfig};

use crate::cli::SourceArgs;

pub fn run(args: &SourceArgs) -> Result<()> {
    let timeout = args.timeout.map(Duration::from_secs);
    let topology = source_for(&args.topology, timeout)?;
    let education = source_for(&args.education, timeout)?;

    let config = ChartConfig { object: args.object.clone(), ..ChartConfig::default() };
    let chart = load_chart(topology.as_ref(), education.as_ref(), config)
        .context("failed to load and join the documents")?;

    let marks = chart.marks();
    let matched = marks.iter().filter(|mark| mark.matched).count();
    let (lo, hi) = chart.scale().domain();

    println!("Number of regions: {}", marks.len());
    println!("  - matched: {matched}");
    println!("  - without record: {}", marks.len() - matched);
    println!("Color domain: [{lo}, {hi}]");
    println!("Buckets:");
    for (i, color) in chart.scale().range().iter().enumerate() {
        if let Some((from, to)) = chart.scale().invert_extent(i) {
            let count = marks.iter().filter(|mark| mark.matched && chart.scale().bucket(mark.education) == Some(i)).count();
            println!("  - {color} [{from:.2}, {to:.2}): {count}");
        }
    }

    Ok(())
}
