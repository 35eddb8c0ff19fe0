use geo::{Coord, LineString, MultiPolygon, Polygon};
use serde_json::Value;

use crate::error::{EdumapError, Result};

use super::topology::{TopoGeometry, Topology};

/// A map region: a county identifier and its boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub id: u32,
    pub shape: MultiPolygon<f64>,
}

/// Convert the named object of a topology into regions, in document order.
///
/// A `GeometryCollection` yields one region per member, with nested
/// collections flattened in place; any other object yields a single region.
/// Null geometries produce an empty boundary.
pub fn feature(topology: &Topology, object: &str) -> Result<Vec<Region>> {
    let root = topology.object(object)?;
    let arcs = topology.decode_arcs()?;

    let mut members = Vec::new();
    flatten(root, &mut members)?;

    let regions = members.into_iter()
        .map(|geometry| Ok(Region { id: geometry.numeric_id()?, shape: shape(geometry, &arcs)? }))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(object, regions = regions.len(), "[topo] extracted regions");
    Ok(regions)
}

/// Leaf geometries of `geometry`, descending through nested collections.
pub(crate) fn flatten<'a>(geometry: &'a TopoGeometry, out: &mut Vec<&'a TopoGeometry>) -> Result<()> {
    if geometry.kind.as_deref() != Some("GeometryCollection") {
        out.push(geometry);
        return Ok(())
    }
    let geometries = geometry.geometries.as_ref()
        .ok_or_else(|| EdumapError::topology(format!("collection {:?} has no geometries", geometry.id)))?;
    for member in geometries { flatten(member, out)? }
    Ok(())
}

/// Absolute arc index and direction from a TopoJSON arc reference.
#[inline]
pub(crate) fn arc_index(reference: i64) -> (usize, bool) {
    if reference < 0 { ((!reference) as usize, true) } else { (reference as usize, false) }
}

fn shape(geometry: &TopoGeometry, arcs: &[Vec<Coord<f64>>]) -> Result<MultiPolygon<f64>> {
    match geometry.kind.as_deref() {
        None => Ok(MultiPolygon::new(Vec::new())),
        Some("Polygon") => {
            let rings: Vec<Vec<i64>> = arc_refs(geometry)?;
            Ok(MultiPolygon::new(polygon(&rings, arcs)?.into_iter().collect()))
        }
        Some("MultiPolygon") => {
            let polygons: Vec<Vec<Vec<i64>>> = arc_refs(geometry)?;
            let polygons = polygons.iter()
                .map(|rings| polygon(rings, arcs))
                .collect::<Result<Vec<_>>>()?;
            Ok(MultiPolygon::new(polygons.into_iter().flatten().collect()))
        }
        Some(other) => Err(EdumapError::topology(format!("unsupported geometry type \"{other}\""))),
    }
}

fn arc_refs<T: serde::de::DeserializeOwned>(geometry: &TopoGeometry) -> Result<T> {
    let raw = geometry.arcs.clone().unwrap_or(Value::Array(Vec::new()));
    serde_json::from_value(raw)
        .map_err(|e| EdumapError::topology(format!("bad arc references for geometry {:?}: {e}", geometry.id)))
}

/// First ring is the exterior, the rest are holes. An empty ring list is no polygon.
fn polygon(rings: &[Vec<i64>], arcs: &[Vec<Coord<f64>>]) -> Result<Option<Polygon<f64>>> {
    let mut rings = rings.iter()
        .map(|refs| ring(refs, arcs))
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .filter(|ring| !ring.0.is_empty());

    let Some(exterior) = rings.next() else { return Ok(None) };
    Ok(Some(Polygon::new(exterior, rings.collect())))
}

/// Stitch arcs into one ring. Consecutive arcs share an endpoint, so the
/// last point accumulated so far is dropped before each arc is appended.
fn ring(refs: &[i64], arcs: &[Vec<Coord<f64>>]) -> Result<LineString<f64>> {
    let mut points: Vec<Coord<f64>> = Vec::new();
    for &reference in refs {
        let (index, reversed) = arc_index(reference);
        let arc = arcs.get(index)
            .ok_or_else(|| EdumapError::topology(format!("arc index {index} out of range ({} arcs)", arcs.len())))?;
        points.pop();
        let start = points.len();
        points.extend_from_slice(arc);
        if reversed { points[start..].reverse() }
    }
    Ok(LineString::new(points))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two unit squares side by side sharing the edge x = 1.
    ///   arc 0: shared edge (1,0) -> (1,1)
    ///   arc 1: left square remainder (1,1) -> (0,1) -> (0,0) -> (1,0)
    ///   arc 2: right square remainder (1,0) -> (2,0) -> (2,1) -> (1,1)
    const TWO_SQUARES: &str = r#"{
        "type": "Topology",
        "arcs": [
            [[1, 0], [1, 1]],
            [[1, 1], [0, 1], [0, 0], [1, 0]],
            [[1, 0], [2, 0], [2, 1], [1, 1]]
        ],
        "objects": {
            "counties": {
                "type": "GeometryCollection",
                "geometries": [
                    {"type": "Polygon", "id": 1, "arcs": [[0, 1]]},
                    {"type": "Polygon", "id": "2", "arcs": [[2, -1]]},
                    {"type": null, "id": 3}
                ]
            }
        }
    }"#;

    #[test]
    fn regions_preserve_document_order() {
        let topology = Topology::from_slice(TWO_SQUARES.as_bytes()).unwrap();
        let regions = feature(&topology, "counties").unwrap();
        assert_eq!(regions.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn rings_are_stitched_without_duplicate_joints() {
        let topology = Topology::from_slice(TWO_SQUARES.as_bytes()).unwrap();
        let regions = feature(&topology, "counties").unwrap();

        let left = &regions[0].shape.0[0];
        let coords: Vec<(f64, f64)> = left.exterior().coords().map(|c| (c.x, c.y)).collect();
        assert_eq!(coords, vec![(1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0), (1.0, 0.0)]);
    }

    #[test]
    fn reversed_arc_references_walk_backwards() {
        let topology = Topology::from_slice(TWO_SQUARES.as_bytes()).unwrap();
        let regions = feature(&topology, "counties").unwrap();

        let right = &regions[1].shape.0[0];
        let coords: Vec<(f64, f64)> = right.exterior().coords().map(|c| (c.x, c.y)).collect();
        assert_eq!(coords, vec![(1.0, 0.0), (2.0, 0.0), (2.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
    }

    #[test]
    fn null_geometry_has_empty_shape() {
        let topology = Topology::from_slice(TWO_SQUARES.as_bytes()).unwrap();
        let regions = feature(&topology, "counties").unwrap();
        assert!(regions[2].shape.0.is_empty());
    }

    #[test]
    fn multipolygon_keeps_every_part() {
        let json = r#"{
            "type": "Topology",
            "arcs": [[[0, 0], [1, 0], [1, 1], [0, 0]], [[5, 5], [6, 5], [6, 6], [5, 5]]],
            "objects": {"islands": {"type": "MultiPolygon", "id": 42, "arcs": [[[0]], [[1]]]}}
        }"#;
        let topology = Topology::from_slice(json.as_bytes()).unwrap();
        let regions = feature(&topology, "islands").unwrap();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].id, 42);
        assert_eq!(regions[0].shape.0.len(), 2);
    }

    #[test]
    fn nested_collections_are_flattened() {
        let json = r#"{
            "type": "Topology",
            "arcs": [[[0, 0], [1, 0], [1, 1], [0, 0]], [[5, 5], [6, 5], [6, 6], [5, 5]]],
            "objects": {
                "counties": {
                    "type": "GeometryCollection",
                    "geometries": [
                        {"type": "Polygon", "id": 1, "arcs": [[0]]},
                        {"type": "GeometryCollection", "geometries": [
                            {"type": "Polygon", "id": 2, "arcs": [[1]]},
                            {"type": null, "id": 3}
                        ]}
                    ]
                }
            }
        }"#;
        let topology = Topology::from_slice(json.as_bytes()).unwrap();
        let regions = feature(&topology, "counties").unwrap();
        assert_eq!(regions.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(regions[1].shape.0.len(), 1);
    }

    #[test]
    fn missing_object_is_fatal() {
        let topology = Topology::from_slice(TWO_SQUARES.as_bytes()).unwrap();
        assert!(matches!(feature(&topology, "states"), Err(EdumapError::MalformedTopology(_))));
    }

    #[test]
    fn out_of_range_arc_is_fatal() {
        let json = r#"{
            "type": "Topology",
            "arcs": [[[0, 0], [1, 0], [1, 1], [0, 0]]],
            "objects": {"counties": {"type": "Polygon", "id": 1, "arcs": [[3]]}}
        }"#;
        let topology = Topology::from_slice(json.as_bytes()).unwrap();
        assert!(matches!(feature(&topology, "counties"), Err(EdumapError::MalformedTopology(_))));
    }

    #[test]
    fn unsupported_geometry_type_is_fatal() {
        let json = r#"{
            "type": "Topology",
            "arcs": [[[0, 0], [1, 0]]],
            "objects": {"roads": {"type": "LineString", "id": 1, "arcs": [0]}}
        }"#;
        let topology = Topology::from_slice(json.as_bytes()).unwrap();
        assert!(matches!(feature(&topology, "roads"), Err(EdumapError::MalformedTopology(_))));
    }

    #[test]
    fn arc_index_decodes_ones_complement() {
        assert_eq!(arc_index(0), (0, false));
        assert_eq!(arc_index(4), (4, false));
        assert_eq!(arc_index(-1), (0, true));
        assert_eq!(arc_index(-5), (4, true));
    }
}
