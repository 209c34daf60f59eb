use super::model::PublicationDataset;

// ---------------------------------------------------------------------------
// Metric – which series the chart displays
// ---------------------------------------------------------------------------

/// The displayed series: raw yearly counts or running totals.
///
/// A closed enum so an invalid metric can never reach the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    ByYear,
    Cumulative,
}

impl Metric {
    /// All metrics, in display order.
    pub const ALL: [Metric; 2] = [Metric::ByYear, Metric::Cumulative];

    /// Radio-button label.
    pub fn label(self) -> &'static str {
        match self {
            Metric::ByYear => "By year",
            Metric::Cumulative => "Total",
        }
    }
}

// ---------------------------------------------------------------------------
// Range-filtered projection
// ---------------------------------------------------------------------------

/// Rows with `lower ≤ year ≤ upper` (inclusive both ends), in ascending year
/// order, projected to `(year, value)` for the chosen metric.
///
/// Pure and deterministic. An inverted range (`lower > upper`) or one outside
/// the dataset simply yields an empty view; the chart stays renderable.
pub fn select_view(
    dataset: &PublicationDataset,
    metric: Metric,
    lower: i32,
    upper: i32,
) -> Vec<(i32, u64)> {
    dataset
        .observations
        .iter()
        .filter(|obs| obs.year >= lower && obs.year <= upper)
        .map(|obs| {
            let value = match metric {
                Metric::ByYear => obs.count,
                Metric::Cumulative => obs.cumulative,
            };
            (obs.year, value)
        })
        .collect()
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> PublicationDataset {
        PublicationDataset::from_rows(vec![(2019, 5), (2020, 3), (2021, 7)]).unwrap()
    }

    #[test]
    fn filters_by_year_inclusive_on_both_ends() {
        let ds = dataset();
        assert_eq!(
            select_view(&ds, Metric::ByYear, 2020, 2021),
            vec![(2020, 3), (2021, 7)]
        );
        assert_eq!(
            select_view(&ds, Metric::Cumulative, 2020, 2021),
            vec![(2020, 8), (2021, 15)]
        );
    }

    #[test]
    fn out_of_range_bounds_yield_an_empty_view() {
        let ds = dataset();
        assert!(select_view(&ds, Metric::ByYear, 2022, 2023).is_empty());
        assert!(select_view(&ds, Metric::Cumulative, 1990, 1995).is_empty());
    }

    #[test]
    fn inverted_range_yields_an_empty_view() {
        let ds = dataset();
        assert!(select_view(&ds, Metric::ByYear, 2021, 2019).is_empty());
    }

    #[test]
    fn bounds_wider_than_the_data_are_tolerated() {
        let ds = dataset();
        assert_eq!(
            select_view(&ds, Metric::ByYear, 1900, 2100),
            vec![(2019, 5), (2020, 3), (2021, 7)]
        );
    }

    #[test]
    fn single_year_window_returns_exactly_the_matching_row() {
        let ds = dataset();
        assert_eq!(select_view(&ds, Metric::ByYear, 2020, 2020), vec![(2020, 3)]);
        assert!(select_view(&ds, Metric::ByYear, 2018, 2018).is_empty());
    }

    #[test]
    fn repeated_calls_are_identical() {
        let ds = dataset();
        let first = select_view(&ds, Metric::Cumulative, 2019, 2021);
        let second = select_view(&ds, Metric::Cumulative, 2019, 2021);
        assert_eq!(first, second);
    }
}
