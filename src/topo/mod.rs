//! TopoJSON decoding: arcs, region extraction, and interior border mesh.

mod feature;
mod mesh;
mod topology;

pub use feature::{feature, Region};
pub use mesh::mesh_interior;
pub use topology::{TopoGeometry, Topology, Transform};
