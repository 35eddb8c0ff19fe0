use geo::{CoordsIter, LineString, MultiLineString, MultiPolygon};

/// Build a compact SVG path string for a MultiPolygon (exteriors + holes).
pub(crate) fn multipolygon_to_path(shape: &MultiPolygon<f64>) -> String {
    let mut out = String::new();

    for polygon in &shape.0 {
        ring_to_path(polygon.exterior(), &mut out);
        for interior in polygon.interiors() {
            ring_to_path(interior, &mut out);
        }
    }

    out
}

/// Build an open SVG path string for a set of lines (no closing `Z`).
pub(crate) fn lines_to_path(lines: &MultiLineString<f64>) -> String {
    let mut out = String::new();
    for line in &lines.0 {
        subpath(line, &mut out);
    }
    out
}

/// Append a ring as an SVG subpath: "M x,y L x,y ... Z"
fn ring_to_path(ring: &LineString<f64>, out: &mut String) {
    if subpath(ring, out) { out.push('Z') }
}

/// Append "M x,y L x,y ..."; returns false for an empty line.
fn subpath(line: &LineString<f64>, out: &mut String) -> bool {
    let mut coords = line.coords_iter();
    let Some(first) = coords.next() else { return false };
    out.push_str(&format!("M{:.3},{:.3}", first.x, first.y));
    for coord in coords {
        out.push_str(&format!("L{:.3},{:.3}", coord.x, coord.y));
    }
    true
}
