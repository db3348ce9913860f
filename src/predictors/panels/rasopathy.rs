//! Predictor for the RASopathy panel.
//!
//! The panel reuses all default rules with tightened population
//! frequency cutoffs.

use crate::defs::facts::Thresholds;
use crate::predictors::{Panel, Predictor};

/// Genes curated by the panel.
pub const GENES: &[&str] = &[
    "SHOC2", "NRAS", "RAF1", "SOS1", "SOS2", "PTPN11", "KRAS", "MAP2K1", "HRAS", "RIT1", "MAP2K2",
    "BRAF", "MRAS", "LZTR1", "RRAS2", "PPP1CB",
];

/// Build the panel predictor.
pub fn predictor() -> Predictor {
    let thresholds = Thresholds {
        ba1_benign: 0.0005,
        bs1_benign: 0.00025,
        ..Default::default()
    };
    Predictor::with_overrides(Panel::Rasopathy, thresholds, vec![])
}
