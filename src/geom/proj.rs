use geo::{Coord, MapCoords, MultiLineString, MultiPolygon, Rect};

/// How topology coordinates map onto the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Projection {
    /// Coordinates are already in surface pixels (pre-projected topology).
    #[default]
    Identity,
    /// Lon/lat input: fit the data bounds into the surface, preserving aspect, Y down.
    Fit { margin: f64 },
}

/// A concrete lon/lat (or pixel) -> surface transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Projector {
    scale: f64,
    flip_y: bool,
    offset: (f64, f64),
    origin: (f64, f64),
}

impl Projector {
    pub(crate) const IDENTITY: Projector = Projector { scale: 1.0, flip_y: false, offset: (0.0, 0.0), origin: (0.0, 0.0) };

    /// Build the transform for a projection, given data bounds and surface size.
    /// `Fit` without bounds (nothing to draw) degrades to identity.
    pub(crate) fn new(projection: Projection, bounds: Option<Rect<f64>>, width: f64, height: f64) -> Self {
        let (Projection::Fit { margin }, Some(bounds)) = (projection, bounds) else { return Self::IDENTITY };

        let sx = (width - 2.0 * margin) / bounds.width();
        let sy = (height - 2.0 * margin) / bounds.height();
        let scale = match (sx.is_finite(), sy.is_finite()) {
            (true, true) => sx.min(sy),
            (true, false) => sx,
            (false, true) => sy,
            (false, false) => 1.0,
        };

        // Center the scaled bounds within the surface.
        let offset = (
            (width - bounds.width() * scale) / 2.0,
            (height - bounds.height() * scale) / 2.0,
        );
        Self { scale, flip_y: true, offset, origin: (bounds.min().x, bounds.max().y) }
    }

    #[inline]
    pub(crate) fn apply(&self, coord: Coord<f64>) -> Coord<f64> {
        let dy = if self.flip_y { self.origin.1 - coord.y } else { coord.y - self.origin.1 };
        Coord {
            x: self.offset.0 + (coord.x - self.origin.0) * self.scale,
            y: self.offset.1 + dy * self.scale,
        }
    }

    pub(crate) fn polygons(&self, shape: &MultiPolygon<f64>) -> MultiPolygon<f64> {
        shape.map_coords(|c| self.apply(c))
    }

    pub(crate) fn lines(&self, lines: &MultiLineString<f64>) -> MultiLineString<f64> {
        lines.map_coords(|c| self.apply(c))
    }
}
