use crate::{
    data::AttainmentRecord,
    error::{EdumapError, Result},
};

use super::color::Rgb;

/// Quantized color scale: splits a continuous domain into equal-width
/// buckets, one per palette color.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantizeScale {
    domain: (f64, f64),
    range: Vec<Rgb>,
    thresholds: Vec<f64>,
}

impl QuantizeScale {
    /// Build a scale over `[lo, hi]`. An empty palette is an error.
    pub fn new(lo: f64, hi: f64, range: &[Rgb]) -> Result<Self> {
        if !lo.is_finite() { return Err(EdumapError::NonFiniteValue(lo)) }
        if !hi.is_finite() { return Err(EdumapError::NonFiniteValue(hi)) }
        if range.is_empty() { return Err(EdumapError::EmptyPalette) }

        let n = (range.len() - 1) as f64;
        let thresholds = (0..range.len() - 1)
            .map(|i| {
                let i = i as f64;
                ((i + 1.0) * hi - (i - n) * lo) / (n + 1.0)
            })
            .collect();

        Ok(Self { domain: (lo, hi), range: range.to_vec(), thresholds })
    }

    /// Scale over `[0, max(bachelors_or_higher)]` for the given records.
    pub fn from_records(records: &[AttainmentRecord], range: &[Rgb]) -> Result<Self> {
        let max = records.iter()
            .map(|record| record.bachelors_or_higher)
            .reduce(f64::max)
            .ok_or(EdumapError::EmptyDataset)?;
        tracing::debug!(max, buckets = range.len(), "[scale] quantize domain");
        Self::new(0.0, max, range)
    }

    #[inline] pub fn domain(&self) -> (f64, f64) { self.domain }

    #[inline] pub fn range(&self) -> &[Rgb] { &self.range }

    #[inline] pub fn thresholds(&self) -> &[f64] { &self.thresholds }

    /// Bucket index for a value. A value equal to a threshold belongs to the
    /// upper bucket; values outside the domain clamp to the end buckets.
    #[inline]
    pub fn bucket(&self, value: f64) -> Option<usize> {
        if value.is_nan() { return None }
        Some(self.thresholds.partition_point(|&t| t <= value))
    }

    /// Palette color for a value, or `None` for NaN.
    #[inline]
    pub fn color(&self, value: f64) -> Option<Rgb> {
        self.bucket(value).map(|i| self.range[i])
    }

    /// Input interval `[lo, hi)` covered by bucket `i`.
    pub fn invert_extent(&self, i: usize) -> Option<(f64, f64)> {
        if i >= self.range.len() { return None }
        let lo = if i == 0 { self.domain.0 } else { self.thresholds[i - 1] };
        let hi = if i == self.thresholds.len() { self.domain.1 } else { self.thresholds[i] };
        Some((lo, hi))
    }
}
