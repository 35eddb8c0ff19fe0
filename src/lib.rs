#![doc = "edumap public API: county educational attainment choropleths from TopoJSON"]
mod chart;
mod config;
mod data;
mod error;
mod geom;
mod io;
mod scale;
mod source;
mod topo;

#[doc(inline)]
pub use chart::{Chart, ChartContext, ChartEvent, CountyMark, EventKind, Fade, Handler, Legend, Surface, Swatch, Tick, TooltipState};

#[doc(inline)]
pub use config::{ChartConfig, LegendConfig, TooltipConfig, Variant};

#[doc(inline)]
pub use data::{parse_records, AttainmentIndex, AttainmentRecord};

#[doc(inline)]
pub use error::{EdumapError, Result};

#[doc(inline)]
pub use geom::Projection;

#[doc(inline)]
pub use io::{to_html_string, to_svg_string, write_chart, write_html, write_svg, OutputFormat, PendingWrite};

#[doc(inline)]
pub use scale::{percent_label, ticks, QuantizeScale, Rgb, BLUES_9, MISSING_COLOR};

#[doc(inline)]
pub use source::{acquire, source_for, Dataset, DocumentSource, FileSource, MemSource, DEFAULT_EDUCATION_URL, DEFAULT_TOPOLOGY_URL};

#[cfg(feature = "download")]
#[doc(inline)]
pub use source::HttpSource;

#[doc(inline)]
pub use topo::{feature, mesh_interior, Region, TopoGeometry, Topology, Transform};

/// Fetch both documents and build the chart; nothing is produced unless
/// every step succeeds.
pub fn load_chart(topology: &dyn DocumentSource, education: &dyn DocumentSource, config: ChartConfig) -> Result<Chart> {
    let dataset = acquire(topology, education)?;
    Chart::build(dataset, config)
}
