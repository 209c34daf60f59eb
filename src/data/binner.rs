use thiserror::Error;

// ---------------------------------------------------------------------------
// Sturges' rule bucket sizing for the year axis
// ---------------------------------------------------------------------------

/// Errors from bucket computation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BinError {
    /// The bucket count is undefined for zero observations (log10 of 0).
    #[error("invalid input: cannot derive buckets from an empty series")]
    EmptyInput,
}

/// Number of equal-width buckets suggested by Sturges' rule:
/// `ceil(1 + 3.322 * log10(n))` for `n` observed values.
///
/// Pure; `n = 1` yields 1 bucket. Callers must hand in a non-empty slice.
pub fn bucket_count(values: &[i32]) -> Result<usize, BinError> {
    if values.is_empty() {
        return Err(BinError::EmptyInput);
    }
    let n = values.len() as f64;
    Ok((1.0 + 3.322 * n.log10()).ceil() as usize)
}

// ---------------------------------------------------------------------------
// BucketConfig – fixed histogram geometry for the year axis
// ---------------------------------------------------------------------------

/// Equal-width partition of the observed year span, computed once at load
/// and immutable afterwards. The UI consumes it for range-slider tick labels
/// and for the initially displayed year window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BucketConfig {
    /// Sturges bucket count (≥ 1).
    pub bucket_count: usize,
    /// Width of one bucket in years: `(year_max - year_min) / bucket_count`.
    pub interval_width: f64,
    /// Smallest year observed.
    pub year_min: i32,
    /// Largest year observed.
    pub year_max: i32,
}

impl BucketConfig {
    /// Derive the geometry from the distinct year values of a dataset.
    pub fn from_years(years: &[i32]) -> Result<Self, BinError> {
        let bucket_count = bucket_count(years)?;
        let year_min = years.iter().copied().min().ok_or(BinError::EmptyInput)?;
        let year_max = years.iter().copied().max().ok_or(BinError::EmptyInput)?;
        let span = f64::from(year_max - year_min);

        Ok(BucketConfig {
            bucket_count,
            interval_width: span / bucket_count as f64,
            year_min,
            year_max,
        })
    }

    /// Tick positions at `year_min, year_min + w, …, year_max` inclusive.
    ///
    /// A single-year span collapses to the one tick at `year_min`.
    pub fn tick_marks(&self) -> Vec<f64> {
        if self.year_max == self.year_min {
            return vec![f64::from(self.year_min)];
        }
        (0..=self.bucket_count)
            .map(|k| f64::from(self.year_min) + k as f64 * self.interval_width)
            .collect()
    }

    /// The initially displayed year window: `[year_max - bucket_count, year_max]`.
    ///
    /// Note: the offset is the bucket *count* itself, not `interval_width`.
    pub fn default_window(&self) -> (i32, i32) {
        (self.year_max - self.bucket_count as i32, self.year_max)
    }
}

// ---------------------------------------------------------------------------
