use std::{thread, time::Duration};

use crate::{
    data::{parse_records, AttainmentRecord},
    error::{EdumapError, Result},
    topo::Topology,
};

use super::source::{is_remote, DocumentSource, FileSource};

pub const DEFAULT_TOPOLOGY_URL: &str =
    "https://cdn.freecodecamp.org/testable-projects-fcc/data/choropleth_map/counties.json";
pub const DEFAULT_EDUCATION_URL: &str =
    "https://cdn.freecodecamp.org/testable-projects-fcc/data/choropleth_map/for_user_education.json";

/// Both input documents, parsed and validated.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub topology: Topology,
    pub records: Vec<AttainmentRecord>,
}

/// Pick a source for a location: HTTP(S) URLs go over the network, anything
/// else is read from disk.
pub fn source_for(location: &str, timeout: Option<Duration>) -> Result<Box<dyn DocumentSource>> {
    if is_remote(location) { remote_source(location, timeout) } else { Ok(Box::new(FileSource::new(location))) }
}

#[cfg(feature = "download")]
fn remote_source(location: &str, timeout: Option<Duration>) -> Result<Box<dyn DocumentSource>> {
    Ok(Box::new(super::http::HttpSource::new(location, timeout)?))
}

#[cfg(not(feature = "download"))]
fn remote_source(location: &str, _timeout: Option<Duration>) -> Result<Box<dyn DocumentSource>> {
    Err(EdumapError::fetch(location, "built without the `download` feature"))
}

/// Fetch and parse both documents concurrently.
///
/// Succeeds only when both succeed; if either fails nothing is returned.
/// Both fetches always run to completion before an error is reported.
pub fn acquire(topology: &dyn DocumentSource, education: &dyn DocumentSource) -> Result<Dataset> {
    tracing::debug!(topology = %topology.describe(), education = %education.describe(), "[acquire] fetching");

    let (topology_result, records_result) = thread::scope(|scope| {
        let topo = scope.spawn(|| topology.fetch().and_then(|bytes| Topology::from_slice(&bytes)));
        let edu = scope.spawn(|| education.fetch().and_then(|bytes| parse_records(&bytes)));
        (
            topo.join().unwrap_or_else(|_| Err(EdumapError::fetch(topology.describe(), "fetch worker panicked"))),
            edu.join().unwrap_or_else(|_| Err(EdumapError::fetch(education.describe(), "fetch worker panicked"))),
        )
    });

    let topology = topology_result?;
    let records = records_result?;
    tracing::info!(arcs = topology.arcs.len(), records = records.len(), "[acquire] documents loaded");
    Ok(Dataset { topology, records })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemSource;

    const TOPOLOGY: &[u8] = br#"{"type": "Topology", "arcs": [], "objects": {}}"#;
    const RECORDS: &[u8] = br#"[{"fips": 1, "state": "ST", "area_name": "A County", "bachelorsOrHigher": 42.0}]"#;

    #[test]
    fn both_documents_are_returned() {
        let dataset = acquire(&MemSource::new("topo", TOPOLOGY), &MemSource::new("edu", RECORDS)).unwrap();
        assert_eq!(dataset.topology.kind, "Topology");
        assert_eq!(dataset.records.len(), 1);
    }

    #[test]
    fn failing_topology_aborts_everything() {
        let result = acquire(&MemSource::new("topo", &b"not json"[..]), &MemSource::new("edu", RECORDS));
        assert!(matches!(result, Err(EdumapError::Parse { document: "topology", .. })));
    }

    #[test]
    fn failing_education_aborts_everything() {
        let dir = tempfile::tempdir().unwrap();
        let missing = FileSource::new(dir.path().join("missing.json"));
        let result = acquire(&MemSource::new("topo", TOPOLOGY), &missing);
        assert!(matches!(result, Err(EdumapError::Fetch { .. })));
    }

    #[test]
    fn local_paths_use_file_sources() {
        let source = source_for("data/counties.json", None).unwrap();
        assert_eq!(source.describe(), "data/counties.json");
    }
}
