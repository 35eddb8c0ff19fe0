mod bbox;
mod geom;
mod proj;

pub(crate) use geom::{union_bounds, Geometries};
pub(crate) use proj::Projector;
pub use proj::Projection;
