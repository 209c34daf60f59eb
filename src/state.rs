use crate::color::MetricColors;
use crate::data::filter::{Metric, select_view};
use crate::data::model::PublicationDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The chart selection owned by the UI: which metric and which year window.
/// Mutated only by user interaction (radio toggle, slider drag).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub metric: Metric,
    /// Lower year bound, inclusive.
    pub lower: i32,
    /// Upper year bound, inclusive. May end up below `lower` while the user
    /// drags; the view is then simply empty.
    pub upper: i32,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            metric: Metric::Cumulative,
            lower: 0,
            upper: 0,
        }
    }
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until user loads a file).
    pub dataset: Option<PublicationDataset>,

    /// Current metric and year window.
    pub selection: Selection,

    /// Per-metric bar colours.
    pub colors: MetricColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            selection: Selection::default(),
            colors: MetricColors::default(),
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset and seed the selection defaults:
    /// running totals over the latest year window.
    pub fn set_dataset(&mut self, dataset: PublicationDataset) {
        let (lower, upper) = dataset.buckets.default_window();
        self.selection = Selection {
            metric: Metric::Cumulative,
            lower,
            upper,
        };
        self.dataset = Some(dataset);
        self.status_message = None;
        self.loading = false;
    }

    /// The `(year, value)` pairs currently selected for display.
    pub fn current_view(&self) -> Vec<(i32, u64)> {
        self.dataset
            .as_ref()
            .map(|ds| {
                select_view(
                    ds,
                    self.selection.metric,
                    self.selection.lower,
                    self.selection.upper,
                )
            })
            .unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> PublicationDataset {
        let rows: Vec<(i32, u64)> = (2000..=2020).map(|year| (year, 2)).collect();
        PublicationDataset::from_rows(rows).unwrap()
    }

    #[test]
    fn set_dataset_seeds_the_default_selection() {
        let mut state = AppState::default();
        state.set_dataset(dataset());

        assert_eq!(state.selection.metric, Metric::Cumulative);
        assert_eq!((state.selection.lower, state.selection.upper), (2014, 2020));
        assert!(state.status_message.is_none());
        assert!(!state.loading);
    }

    #[test]
    fn current_view_is_empty_without_a_dataset() {
        let state = AppState::default();
        assert!(state.current_view().is_empty());
    }

    #[test]
    fn current_view_tracks_the_selection() {
        let mut state = AppState::default();
        state.set_dataset(dataset());

        state.selection.metric = Metric::ByYear;
        state.selection.lower = 2018;
        state.selection.upper = 2019;
        assert_eq!(state.current_view(), vec![(2018, 2), (2019, 2)]);

        // Inverted range while dragging: empty but renderable.
        state.selection.upper = 2015;
        assert!(state.current_view().is_empty());
    }
}
