//! Output formats for a built chart.
//!
//! - `svg` - standalone SVG document (or element for inlining)
//! - `html` - page with title, description, inline SVG, and tooltip element
//! - `fs` - atomic file output

mod fs;
mod html;
mod svg;

use std::path::Path;

use crate::{chart::Chart, error::Result};

pub use fs::PendingWrite;
pub use html::{to_html_string, write_html};
pub use svg::{to_svg_string, write_svg};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Svg,
    Html,
}

/// Render the chart to `path` in the given format, replacing an existing
/// file only when `force` is set.
pub fn write_chart(path: &Path, chart: &Chart, format: OutputFormat, force: bool) -> Result<()> {
    let mut sink = PendingWrite::open(path, force)?;
    match format {
        OutputFormat::Svg => write_svg(&mut sink, chart)?,
        OutputFormat::Html => write_html(&mut sink, chart)?,
    }
    sink.finalize()?;
    tracing::info!(path = %path.display(), ?format, marks = chart.marks().len(), "[io] chart written");
    Ok(())
}
