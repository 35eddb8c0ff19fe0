use geo::{LineString, MultiLineString};
use serde_json::Value;

use crate::error::{EdumapError, Result};

use super::{feature::{arc_index, flatten}, topology::{TopoGeometry, Topology}};

/// Arcs shared by two distinct geometries of the named object.
///
/// These are the interior borders between neighboring regions; drawing them
/// once as a single stroke avoids doubled outlines.
pub fn mesh_interior(topology: &Topology, object: &str) -> Result<MultiLineString<f64>> {
    let root = topology.object(object)?;
    let arcs = topology.decode_arcs()?;

    // For every arc, the geometries that reference it, in document order.
    let mut owners: Vec<Vec<usize>> = vec![Vec::new(); arcs.len()];
    let mut members: Vec<&TopoGeometry> = Vec::new();
    flatten(root, &mut members)?;
    for (owner, geometry) in members.iter().enumerate() {
        let mut refs = Vec::new();
        if let Some(raw) = &geometry.arcs { flatten_refs(raw, &mut refs)? }
        for reference in refs {
            let (index, _) = arc_index(reference);
            let slot = owners.get_mut(index)
                .ok_or_else(|| EdumapError::topology(format!("arc index {index} out of range ({} arcs)", arcs.len())))?;
            if slot.last() != Some(&owner) { slot.push(owner) }
        }
    }

    let lines = owners.iter().zip(arcs)
        .filter(|(owners, _)| matches!((owners.first(), owners.last()), (Some(a), Some(b)) if a != b))
        .map(|(_, arc)| LineString::new(arc))
        .collect::<Vec<_>>();

    tracing::debug!(object, arcs = lines.len(), "[topo] interior mesh");
    Ok(MultiLineString::new(lines))
}

/// Collect every integer arc reference from an arbitrarily nested array.
fn flatten_refs(raw: &Value, out: &mut Vec<i64>) -> Result<()> {
    match raw {
        Value::Array(items) => items.iter().try_for_each(|item| flatten_refs(item, out)),
        Value::Number(n) => {
            let reference = n.as_i64()
                .ok_or_else(|| EdumapError::topology(format!("arc reference {n} is not an integer")))?;
            out.push(reference);
            Ok(())
        }
        other => Err(EdumapError::topology(format!("unexpected arc reference {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_shared_arcs_are_in_the_mesh() {
        let json = r#"{
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
                        {"type": "Polygon", "id": 2, "arcs": [[2, -1]]}
                    ]
                }
            }
        }"#;
        let topology = Topology::from_slice(json.as_bytes()).unwrap();
        let mesh = mesh_interior(&topology, "counties").unwrap();
        assert_eq!(mesh.0.len(), 1);
        let coords: Vec<(f64, f64)> = mesh.0[0].coords().map(|c| (c.x, c.y)).collect();
        assert_eq!(coords, vec![(1.0, 0.0), (1.0, 1.0)]);
    }

    #[test]
    fn nested_members_share_borders_too() {
        let json = r#"{
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
                        {"type": "GeometryCollection", "geometries": [
                            {"type": "Polygon", "id": 2, "arcs": [[2, -1]]}
                        ]}
                    ]
                }
            }
        }"#;
        let topology = Topology::from_slice(json.as_bytes()).unwrap();
        assert_eq!(mesh_interior(&topology, "counties").unwrap().0.len(), 1);
    }

    #[test]
    fn single_geometry_has_no_interior_mesh() {
        let json = r#"{
            "type": "Topology",
            "arcs": [[[0, 0], [1, 0], [1, 1], [0, 0]]],
            "objects": {"county": {"type": "Polygon", "id": 1, "arcs": [[0]]}}
        }"#;
        let topology = Topology::from_slice(json.as_bytes()).unwrap();
        assert!(mesh_interior(&topology, "county").unwrap().0.is_empty());
    }
}
