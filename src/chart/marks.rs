use geo::MultiPolygon;

use crate::{
    data::AttainmentIndex,
    geom::Projector,
    scale::{QuantizeScale, Rgb},
    topo::Region,
};

/// One drawn county: projected outline, fill, and the attainment annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct CountyMark {
    pub fips: u32,
    /// Outline in surface coordinates.
    pub shape: MultiPolygon<f64>,
    pub fill: Rgb,
    /// Attainment percentage, or 0 when no record matched.
    pub education: f64,
    /// Whether a record matched. Not emitted: a missing record and a genuine
    /// 0% share the same annotation.
    pub matched: bool,
}

/// Join every region to its record and derive the mark encodings.
///
/// Matched regions are filled by the scale and annotated with the raw
/// percentage; unmatched regions get `missing` and an annotation of 0.
pub(crate) fn emit_marks(
    regions: &[Region],
    index: &AttainmentIndex,
    scale: &QuantizeScale,
    missing: Rgb,
    projector: &Projector,
) -> Vec<CountyMark> {
    let marks: Vec<CountyMark> = regions.iter()
        .map(|region| {
            let record = index.get(region.id);
            let (fill, education) = match record {
                Some(record) => {
                    let value = record.bachelors_or_higher;
                    (scale.color(value).unwrap_or(missing), value)
                }
                None => (missing, 0.0),
            };
            CountyMark {
                fips: region.id,
                shape: projector.polygons(&region.shape),
                fill,
                education,
                matched: record.is_some(),
            }
        })
        .collect();

    let unmatched = marks.iter().filter(|mark| !mark.matched).count();
    if unmatched > 0 {
        tracing::warn!(unmatched, total = marks.len(), "[marks] regions without an education record use the missing fill");
    }
    marks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{data::AttainmentRecord, scale::{BLUES_9, MISSING_COLOR}};
    use geo::polygon;

    fn region(id: u32) -> Region {
        let x = id as f64;
        Region {
            id,
            shape: MultiPolygon::new(vec![polygon![(x: x, y: 0.0), (x: x + 1.0, y: 0.0), (x: x + 1.0, y: 1.0), (x: x, y: 0.0)]]),
        }
    }

    fn marks_for(regions: &[Region], records: Vec<AttainmentRecord>) -> Vec<CountyMark> {
        let scale = QuantizeScale::from_records(&records, &BLUES_9).unwrap();
        let index = AttainmentIndex::new(records);
        emit_marks(regions, &index, &scale, MISSING_COLOR, &Projector::IDENTITY)
    }

    #[test]
    fn matched_regions_use_scale_color_and_raw_value() {
        let records = vec![
            AttainmentRecord::new(1, "A County", "ST", 42.0),
            AttainmentRecord::new(2, "B County", "ST", 21.0),
            AttainmentRecord::new(3, "C County", "ST", 0.0),
        ];
        let scale = QuantizeScale::from_records(&records, &BLUES_9).unwrap();
        let marks = marks_for(&[region(1), region(2), region(3)], records.clone());

        for (mark, record) in marks.iter().zip(&records) {
            assert!(mark.matched);
            assert_eq!(mark.education, record.bachelors_or_higher);
            assert_eq!(Some(mark.fill), scale.color(record.bachelors_or_higher));
        }
    }

    #[test]
    fn unmatched_region_gets_default_fill_and_zero() {
        let marks = marks_for(
            &[region(1), region(2)],
            vec![AttainmentRecord::new(1, "A County", "ST", 42.0), AttainmentRecord::new(3, "B County", "ST", 10.0)],
        );
        assert_eq!(marks[0].education, 42.0);
        assert_ne!(marks[0].fill, MISSING_COLOR);
        assert_eq!(marks[1].education, 0.0);
        assert_eq!(marks[1].fill, MISSING_COLOR);
        assert!(!marks[1].matched);
    }

    #[test]
    fn missing_record_annotation_matches_genuine_zero() {
        // Known imprecision: both annotate 0, only the fill tells them apart.
        let marks = marks_for(
            &[region(1), region(2)],
            vec![AttainmentRecord::new(1, "Zero County", "ST", 0.0), AttainmentRecord::new(5, "Other", "ST", 50.0)],
        );
        assert_eq!(marks[0].education, marks[1].education);
        assert_eq!(marks[0].fill, BLUES_9[0]);
        assert_eq!(marks[1].fill, MISSING_COLOR);
    }

    #[test]
    fn marks_follow_region_order() {
        let marks = marks_for(&[region(3), region(1)], vec![AttainmentRecord::new(1, "A", "ST", 5.0)]);
        assert_eq!(marks.iter().map(|m| m.fips).collect::<Vec<_>>(), vec![3, 1]);
    }
}
