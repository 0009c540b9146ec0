//! Synthetic trip data shared by the use-case tests.

use std::{fs, path::Path};

use crate::data::encoder::WEEKDAY_DOMAIN;
use crate::data::loader::DATA_FILE_NAME;
use crate::domain::traits::{RunTracker, RunValue};

/// ln(trip_duration) for row `i`: linear in distance and passengers.
pub fn log_duration(i: usize) -> f64 {
    5.0 + 0.3 * distance(i) - 0.05 * passengers(i) as f64
}

fn distance(i: usize) -> f64 {
    0.5 + ((i * 37) % 100) as f64 / 10.0
}

fn passengers(i: usize) -> usize {
    i % 4 + 1
}

/// CSV text with `n` rows in the layout of data_after_prep.
pub fn trip_csv(n: usize) -> String {
    let mut csv = String::from(
        "store_and_fwd_flag,pickup_weekday,dropoff_weekday,passenger_count,distance,trip_duration\n",
    );
    for i in 0..n {
        csv.push_str(&format!(
            "{},{},{},{},{},{}\n",
            if i % 5 == 0 { "Y" } else { "N" },
            WEEKDAY_DOMAIN[i % 7],
            WEEKDAY_DOMAIN[(i * 3 + 1) % 7],
            passengers(i),
            distance(i),
            log_duration(i).exp(),
        ));
    }
    csv
}

/// Write `<dir>/data_after_prep.csv` with `n` synthetic rows.
pub fn write_trip_csv(dir: &Path, n: usize) {
    fs::write(dir.join(DATA_FILE_NAME), trip_csv(n)).unwrap();
}

/// Keeps every run entry in memory, in order.
#[derive(Default)]
pub struct RecordingTracker {
    pub entries: Vec<(String, RunValue)>,
}

impl RecordingTracker {
    pub fn keys(&self) -> Vec<&str> {
        self.entries.iter().map(|(k, _)| k.as_str()).collect()
    }
}

impl RunTracker for RecordingTracker {
    fn log(&mut self, key: &str, value: RunValue) {
        self.entries.push((key.to_string(), value));
    }
}
