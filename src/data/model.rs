use thiserror::Error;

use super::binner::BucketConfig;

// ---------------------------------------------------------------------------
// Observation – one row of the publications table
// ---------------------------------------------------------------------------

/// A single row of the source table: a year and its publication count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observation {
    pub year: i32,
    /// Articles published in `year`.
    pub count: u64,
    /// Running total of `count` over all rows up to and including this one,
    /// in year order.
    pub cumulative: u64,
}

// ---------------------------------------------------------------------------
// PublicationDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// Errors from dataset construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataError {
    #[error("dataset contains no rows")]
    Empty,
}

/// The full parsed table, sorted ascending by year, with the cumulative
/// column and bucket geometry derived up front. Immutable after load.
#[derive(Debug, Clone)]
pub struct PublicationDataset {
    /// All rows, ascending by year. Duplicate years are kept as-is.
    pub observations: Vec<Observation>,
    /// Grand total of all counts; equals the last cumulative value.
    pub total: u64,
    /// Histogram geometry for the year axis, fixed at load time.
    pub buckets: BucketConfig,
}

impl PublicationDataset {
    /// Build the dataset from raw `(year, count)` rows: sort by year, derive
    /// the running totals and the bucket geometry.
    pub fn from_rows(mut rows: Vec<(i32, u64)>) -> Result<Self, DataError> {
        if rows.is_empty() {
            return Err(DataError::Empty);
        }
        // Stable, so duplicate years keep their file order.
        rows.sort_by_key(|&(year, _)| year);

        let mut running = 0u64;
        let observations: Vec<Observation> = rows
            .iter()
            .map(|&(year, count)| {
                running += count;
                Observation {
                    year,
                    count,
                    cumulative: running,
                }
            })
            .collect();

        let mut distinct_years: Vec<i32> = observations.iter().map(|o| o.year).collect();
        distinct_years.dedup();
        let buckets = BucketConfig::from_years(&distinct_years).map_err(|_| DataError::Empty)?;

        Ok(PublicationDataset {
            observations,
            total: running,
            buckets,
        })
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether the dataset is empty (never true for a constructed dataset).
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cumulative_follows_the_recurrence() {
        let ds =
            PublicationDataset::from_rows(vec![(2019, 5), (2020, 3), (2021, 7), (2022, 2)]).unwrap();

        assert_eq!(ds.observations[0].cumulative, ds.observations[0].count);
        for pair in ds.observations.windows(2) {
            assert_eq!(pair[1].cumulative, pair[0].cumulative + pair[1].count);
            assert!(pair[1].cumulative >= pair[0].cumulative);
        }
        assert_eq!(ds.total, 17);
        assert_eq!(ds.observations.last().unwrap().cumulative, ds.total);
    }

    #[test]
    fn rows_are_sorted_by_year() {
        let ds = PublicationDataset::from_rows(vec![(2021, 7), (2019, 5), (2020, 3)]).unwrap();
        let years: Vec<i32> = ds.observations.iter().map(|o| o.year).collect();
        assert_eq!(years, vec![2019, 2020, 2021]);
        // Cumulative sums follow the sorted order, not the input order.
        let cums: Vec<u64> = ds.observations.iter().map(|o| o.cumulative).collect();
        assert_eq!(cums, vec![5, 8, 15]);
    }

    #[test]
    fn duplicate_years_each_stand_alone() {
        let ds = PublicationDataset::from_rows(vec![(2020, 3), (2020, 4), (2021, 1)]).unwrap();
        assert_eq!(ds.len(), 3);
        let cums: Vec<u64> = ds.observations.iter().map(|o| o.cumulative).collect();
        assert_eq!(cums, vec![3, 7, 8]);
        // Duplicates collapse for bucket sizing: two distinct years here.
        assert_eq!(ds.buckets.year_min, 2020);
        assert_eq!(ds.buckets.year_max, 2021);
    }

    #[test]
    fn empty_rows_are_rejected() {
        assert!(matches!(
            PublicationDataset::from_rows(Vec::new()),
            Err(DataError::Empty)
        ));
    }

    #[test]
    fn bucket_geometry_matches_twenty_one_year_series() {
        let rows: Vec<(i32, u64)> = (2000..=2020).map(|year| (year, 10)).collect();
        let ds = PublicationDataset::from_rows(rows).unwrap();
        assert_eq!(ds.buckets.bucket_count, 6);
        assert_eq!(ds.buckets.default_window(), (2014, 2020));
        assert_eq!(ds.total, 210);
    }
}
