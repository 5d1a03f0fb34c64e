// src/state.rs

use crate::chart::BarChart;
use crate::error::{ReshapeError, Result};
use crate::process::{compute_window, ReshapedDataset, YearWindow};
use crate::schema::{City, LocalMetric};
use chrono::Datelike;
use once_cell::sync::{Lazy, OnceCell};
use std::sync::{PoisonError, RwLock};
use tracing::{debug, info};

/// Process-wide state shared with the UI layer.
///
/// The window and the dataset are written once and then only read. The chart
/// slot doubles as the "a chart exists" flag: showing a new chart replaces
/// (destroys) the previous one.
#[derive(Debug, Default)]
pub struct Session {
    window: OnceCell<YearWindow>,
    dataset: OnceCell<ReshapedDataset>,
    chart: RwLock<Option<BarChart>>,
}

static SESSION: Lazy<Session> = Lazy::new(Session::new);

/// The global session.
pub fn session() -> &'static Session {
    &SESSION
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the year window on first call; later calls return the stored one.
    pub fn init_window(&self, today: impl Datelike) -> YearWindow {
        *self.window.get_or_init(|| {
            let w = compute_window(today);
            info!(y1 = w.start(), y2 = w.end(), "year window");
            w
        })
    }

    pub fn window(&self) -> Option<YearWindow> {
        self.window.get().copied()
    }

    /// Store the dataset. The first install wins; later ones are discarded and
    /// the dataset already held is returned untouched.
    pub fn install_dataset(&self, dataset: ReshapedDataset) -> &ReshapedDataset {
        match self.dataset.try_insert(dataset) {
            Ok(ds) => ds,
            Err((existing, _discarded)) => {
                debug!("dataset already installed; keeping the first one");
                existing
            }
        }
    }

    pub fn dataset(&self) -> Option<&ReshapedDataset> {
        self.dataset.get()
    }

    /// Build the chart for `city`/`metric`, replacing any chart shown before.
    pub fn show_chart(&self, city: City, metric: LocalMetric) -> Result<BarChart> {
        let window = self.window().ok_or(ReshapeError::NotReady("year window"))?;
        let dataset = self.dataset().ok_or(ReshapeError::NotReady("dataset"))?;

        let chart = BarChart::build(dataset, &window, city, metric);
        let mut slot = self.chart.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(old) = slot.replace(chart.clone()) {
            debug!(city = %old.city, "replaced chart");
        }
        Ok(chart)
    }

    /// Remove the current chart, if any.
    pub fn clear_chart(&self) -> Option<BarChart> {
        self.chart
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    pub fn chart(&self) -> Option<BarChart> {
        self.chart
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::reshape;
    use chrono::NaiveDate;
    use serde_json::json;

    fn dataset(window: &YearWindow) -> ReshapedDataset {
        let payload = json!([
            {"Periods": "2019JJ00", "Airports": "A043590", "CrossCountryFlights_1": 7}
        ]);
        reshape(&payload, window).unwrap()
    }

    #[test]
    fn test_window_initialised_once() {
        let s = Session::new();
        assert_eq!(s.window(), None);
        let first = s.init_window(NaiveDate::from_ymd_opt(2020, 6, 1).unwrap());
        let again = s.init_window(NaiveDate::from_ymd_opt(2030, 6, 1).unwrap());
        assert_eq!(first, again);
        assert_eq!(s.window(), Some(YearWindow::new(2010, 2019).unwrap()));
    }

    #[test]
    fn test_dataset_first_install_wins() {
        let s = Session::new();
        let w = s.init_window(NaiveDate::from_ymd_opt(2020, 6, 1).unwrap());
        let ds = dataset(&w);
        let installed = s.install_dataset(ds.clone()).clone();
        assert_eq!(installed, ds);

        let other = reshape(&json!([]), &w).unwrap();
        let kept = s.install_dataset(other);
        assert_eq!(kept, &ds);
        assert_eq!(s.dataset(), Some(&ds));
    }

    #[test]
    fn test_chart_lifecycle() {
        let s = Session::new();
        assert_eq!(
            s.show_chart(City::Amsterdam, LocalMetric::LocalFlights),
            Err(ReshapeError::NotReady("year window"))
        );

        let w = s.init_window(NaiveDate::from_ymd_opt(2020, 6, 1).unwrap());
        assert_eq!(
            s.show_chart(City::Amsterdam, LocalMetric::LocalFlights),
            Err(ReshapeError::NotReady("dataset"))
        );
        let ds = s.install_dataset(dataset(&w)).clone();

        let chart = s
            .show_chart(City::Amsterdam, LocalMetric::CrossCountryFlights)
            .unwrap();
        assert_eq!(chart.values, vec![Some(7.0)]);
        assert_eq!(chart.labels.len(), 10);
        assert_eq!(s.chart(), Some(chart));

        // recreating replaces the chart and leaves the dataset alone
        let second = s.show_chart(City::Rotterdam, LocalMetric::LocalFlights).unwrap();
        assert_eq!(s.chart().map(|c| c.city), Some(City::Rotterdam));
        assert_eq!(s.dataset(), Some(&ds));

        assert_eq!(s.clear_chart(), Some(second));
        assert_eq!(s.chart(), None);
        assert_eq!(s.clear_chart(), None);
    }

    #[test]
    fn test_global_session_is_shared() {
        assert!(std::ptr::eq(session(), session()));
    }
}
