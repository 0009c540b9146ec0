// ============================================================
// Layer 4 — Label Encoder
// ============================================================
// Maps a fixed set of string labels to integer codes.
//
// Classes are sorted and de-duplicated at fit time; a label's
// code is its position in that sorted list. Fitting twice on
// the same domain therefore always yields the same mapping:
//
//   ["N", "Y"]                        → N=0, Y=1
//   ["Monday", ..., "Sunday"]         → Friday=0, Monday=1,
//                                       Saturday=2, Sunday=3,
//                                       Thursday=4, Tuesday=5,
//                                       Wednesday=6
//
// Labels outside the fitted domain are an error, never a
// silent fallback code.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const FLAG_DOMAIN: [&str; 2] = ["N", "Y"];

pub const WEEKDAY_DOMAIN: [&str; 7] = [
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    /// Fit an encoder over the given labels.
    pub fn fit<S: AsRef<str>>(labels: &[S]) -> Self {
        let mut classes: Vec<String> = labels.iter().map(|l| l.as_ref().to_string()).collect();
        classes.sort();
        classes.dedup();
        Self { classes }
    }

    /// Code for a single label.
    pub fn encode(&self, label: &str) -> Result<usize> {
        self.classes
            .binary_search_by(|c| c.as_str().cmp(label))
            .ok()
            .with_context(|| {
                format!("Unseen label '{}' (known: {:?})", label, self.classes)
            })
    }

    /// Encode a whole column into float codes ready for the feature matrix.
    pub fn transform(&self, labels: &[String]) -> Result<Vec<f64>> {
        labels
            .iter()
            .map(|l| self.encode(l).map(|code| code as f64))
            .collect()
    }
}
