use std::collections::HashMap;

use geo::Coord;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{EdumapError, Result};

/// A TopoJSON document: shared arcs plus named geometry objects.
#[derive(Debug, Clone, Deserialize)]
pub struct Topology {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub transform: Option<Transform>,
    pub arcs: Vec<Vec<Vec<f64>>>,
    pub objects: HashMap<String, TopoGeometry>,
}

/// Quantization transform; arc positions are delta-encoded when present.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Transform {
    pub scale: [f64; 2],
    pub translate: [f64; 2],
}

/// A geometry object as it appears in the document.
///
/// `kind` is `None` for null geometries. `arcs` is kept as raw JSON because
/// its nesting depth depends on `kind`.
#[derive(Debug, Clone, Deserialize)]
pub struct TopoGeometry {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub arcs: Option<Value>,
    #[serde(default)]
    pub geometries: Option<Vec<TopoGeometry>>,
}

impl Topology {
    /// Parse a topology document from JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let topology: Topology = serde_json::from_slice(bytes)
            .map_err(|source| EdumapError::Parse { document: "topology", source })?;
        if topology.kind != "Topology" {
            return Err(EdumapError::topology(format!("expected type \"Topology\", found \"{}\"", topology.kind)))
        }
        Ok(topology)
    }

    /// Look up a named object, e.g. "counties".
    pub fn object(&self, name: &str) -> Result<&TopoGeometry> {
        self.objects.get(name)
            .ok_or_else(|| EdumapError::topology(format!("no object named \"{name}\"")))
    }

    /// Decode every arc into absolute coordinates, undoing delta encoding
    /// and the quantization transform.
    pub fn decode_arcs(&self) -> Result<Vec<Vec<Coord<f64>>>> {
        self.arcs.iter().enumerate()
            .map(|(i, arc)| {
                let (mut x, mut y) = (0.0, 0.0);
                arc.iter()
                    .map(|position| {
                        let &[px, py, ..] = position.as_slice() else {
                            return Err(EdumapError::topology(format!("arc {i} has a position with fewer than 2 values")))
                        };
                        Ok(match self.transform {
                            Some(Transform { scale, translate }) => {
                                x += px;
                                y += py;
                                Coord { x: x * scale[0] + translate[0], y: y * scale[1] + translate[1] }
                            }
                            None => Coord { x: px, y: py },
                        })
                    })
                    .collect()
            })
            .collect()
    }
}

impl TopoGeometry {
    /// Numeric identifier; accepts JSON numbers and numeric strings.
    pub fn numeric_id(&self) -> Result<u32> {
        let id = self.id.as_ref()
            .ok_or_else(|| EdumapError::topology("geometry has no id"))?;
        let parsed = match id {
            Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
            Value::String(s) => s.trim().parse::<u32>().ok(),
            _ => None,
        };
        parsed.ok_or_else(|| EdumapError::topology(format!("geometry id {id} is not a numeric code")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_encoded_arcs_are_transformed() {
        let json = br#"{
            "type": "Topology",
            "transform": {"scale": [2.0, 0.5], "translate": [10.0, 20.0]},
            "arcs": [[[0, 0], [3, 4], [-1, 2]]],
            "objects": {}
        }"#;
        let arcs = Topology::from_slice(json).unwrap().decode_arcs().unwrap();
        assert_eq!(arcs[0], vec![
            Coord { x: 10.0, y: 20.0 },
            Coord { x: 16.0, y: 22.0 },
            Coord { x: 14.0, y: 23.0 },
        ]);
    }

    #[test]
    fn untransformed_arcs_are_absolute() {
        let json = br#"{"type": "Topology", "arcs": [[[1.5, 2.5, 99], [3, 4]]], "objects": {}}"#;
        let arcs = Topology::from_slice(json).unwrap().decode_arcs().unwrap();
        assert_eq!(arcs[0], vec![Coord { x: 1.5, y: 2.5 }, Coord { x: 3.0, y: 4.0 }]);
    }

    #[test]
    fn wrong_document_type_is_rejected() {
        let json = br#"{"type": "FeatureCollection", "arcs": [], "objects": {}}"#;
        assert!(matches!(Topology::from_slice(json), Err(EdumapError::MalformedTopology(_))));
    }

    #[test]
    fn ids_may_be_numbers_or_strings() {
        let geometry = |id: Value| TopoGeometry { kind: None, id: Some(id), arcs: None, geometries: None };
        assert_eq!(geometry(Value::from(1001)).numeric_id().unwrap(), 1001);
        assert_eq!(geometry(Value::from("01001")).numeric_id().unwrap(), 1001);
        assert!(geometry(Value::from("Autauga")).numeric_id().is_err());
        assert!(geometry(Value::from(-4)).numeric_id().is_err());
    }
}
