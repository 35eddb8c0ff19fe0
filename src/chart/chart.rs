use geo::MultiLineString;

use crate::{
    config::ChartConfig,
    data::{AttainmentIndex, AttainmentRecord},
    error::Result,
    geom::{union_bounds, Geometries, Projector},
    scale::QuantizeScale,
    source::Dataset,
    topo::{feature, mesh_interior, Region},
};

use super::{legend::Legend, marks::{emit_marks, CountyMark}};

/// A fully joined choropleth, ready to serialize or interact with.
#[derive(Debug, Clone)]
pub struct Chart {
    config: ChartConfig,
    index: AttainmentIndex,
    scale: QuantizeScale,
    marks: Vec<CountyMark>,
    legend: Legend,
    mesh: Option<MultiLineString<f64>>,
    geoms: Geometries,
}

impl Chart {
    /// Run the join-and-render pipeline over a loaded dataset:
    /// regions from the topology, the color scale from the records, one mark
    /// per region, and the legend.
    pub fn build(dataset: Dataset, config: ChartConfig) -> Result<Self> {
        let regions = feature(&dataset.topology, &config.object)?;
        let mesh = if config.mesh { Some(mesh_interior(&dataset.topology, &config.object)?) } else { None };
        Self::from_regions(regions, mesh, dataset.records, config)
    }

    /// Same as [`Chart::build`] for regions that were already extracted.
    /// `mesh` is in topology coordinates.
    pub fn from_regions(
        regions: Vec<Region>,
        mesh: Option<MultiLineString<f64>>,
        records: Vec<AttainmentRecord>,
        config: ChartConfig,
    ) -> Result<Self> {
        let scale = QuantizeScale::from_records(&records, &config.palette)?;
        let index = AttainmentIndex::new(records);

        let bounds = union_bounds(regions.iter().map(|region| &region.shape));
        let projector = Projector::new(config.projection, bounds, config.width, config.height);

        let marks = emit_marks(&regions, &index, &scale, config.missing_color, &projector);
        let legend = Legend::new(&scale, &config.legend, config.width);
        let mesh = mesh.map(|lines| projector.lines(&lines));
        let geoms = Geometries::new(marks.iter().map(|mark| mark.shape.clone()).collect());
        tracing::debug!(marks = geoms.len(), records = index.len(), "[chart] built");

        Ok(Self { config, index, scale, marks, legend, mesh, geoms })
    }

    #[inline] pub fn config(&self) -> &ChartConfig { &self.config }

    #[inline] pub fn marks(&self) -> &[CountyMark] { &self.marks }

    #[inline] pub fn legend(&self) -> &Legend { &self.legend }

    #[inline] pub fn scale(&self) -> &QuantizeScale { &self.scale }

    #[inline] pub fn mesh(&self) -> Option<&MultiLineString<f64>> { self.mesh.as_ref() }

    /// Education record behind a mark, if the mark's region matched one.
    pub fn record_for(&self, mark: usize) -> Option<&AttainmentRecord> {
        self.marks.get(mark).and_then(|mark| self.index.get(mark.fips))
    }

    /// Index of the mark under a point in surface coordinates.
    #[inline]
    pub fn mark_at(&self, x: f64, y: f64) -> Option<usize> { self.geoms.locate(x, y) }
}
