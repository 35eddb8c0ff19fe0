use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use edumap::{load_chart, source_for, write_chart, ChartConfig, OutputFormat, Projection, Rgb, Variant};

use crate::cli::{FormatArg, ProjectionArg, RenderArgs, VariantArg};

pub fn run(args: &RenderArgs) -> Result<()> {
    let missing_color: Rgb = args.missing_color.parse()
        .map_err(|e: String| anyhow!(e))
        .context("invalid --missing-color")?;

    let config = ChartConfig {
        variant: match args.variant {
            VariantArg::Fixed => Variant::Fixed,
            VariantArg::Responsive => Variant::Responsive,
        },
        projection: match args.projection {
            ProjectionArg::Identity => Projection::Identity,
            ProjectionArg::Fit => Projection::Fit { margin: 10.0 },
        },
        object: args.source.object.clone(),
        missing_color,
        mesh: args.mesh,
        ..ChartConfig::default()
    };

    let format = match args.format {
        Some(FormatArg::Svg) => OutputFormat::Svg,
        Some(FormatArg::Html) => OutputFormat::Html,
        None => match args.output.extension().and_then(|ext| ext.to_str()) {
            Some("html") | Some("htm") => OutputFormat::Html,
            _ => OutputFormat::Svg,
        },
    };

    let timeout = args.source.timeout.map(Duration::from_secs);
    let topology = source_for(&args.source.topology, timeout)?;
    let education = source_for(&args.source.education, timeout)?;

    let chart = load_chart(topology.as_ref(), education.as_ref(), config)
        .context("failed to build the map; nothing was rendered")?;

    write_chart(&args.output, &chart, format, args.force)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    println!("Rendered {} counties into {}", chart.marks().len(), args.output.display());

    Ok(())
}
