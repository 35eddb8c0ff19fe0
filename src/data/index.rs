use ahash::AHashMap;

use super::record::AttainmentRecord;

/// Constant-time lookup of attainment records by FIPS code.
///
/// Built once after acquisition. When the same FIPS code appears more than
/// once, the first record in input order wins.
#[derive(Debug, Clone)]
pub struct AttainmentIndex {
    records: Vec<AttainmentRecord>,
    by_fips: AHashMap<u32, usize>,
}

impl AttainmentIndex {
    pub fn new(records: Vec<AttainmentRecord>) -> Self {
        let mut by_fips = AHashMap::with_capacity(records.len());
        let mut duplicates = 0usize;
        for (i, record) in records.iter().enumerate() {
            if by_fips.contains_key(&record.fips) { duplicates += 1; continue }
            by_fips.insert(record.fips, i);
        }
        if duplicates > 0 {
            tracing::warn!(duplicates, "[index] duplicate fips codes ignored; first record wins");
        }
        Self { records, by_fips }
    }

    /// Get the record for a FIPS code, if any.
    #[inline]
    pub fn get(&self, fips: u32) -> Option<&AttainmentRecord> {
        self.by_fips.get(&fips).map(|&i| &self.records[i])
    }

    /// All records in input order, duplicates included.
    #[inline] pub fn records(&self) -> &[AttainmentRecord] { &self.records }

    #[inline] pub fn len(&self) -> usize { self.records.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.records.is_empty() }
}
