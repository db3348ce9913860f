//! Predictor for the phenylketonuria panel.
//!
//! Curated gene: PAH.

use crate::defs::criteria::{Criterion, CriterionResult};
use crate::defs::facts::Thresholds;
use crate::predictors::{EvalInput, Panel, Predictor};

/// Genes curated by the panel.
pub const GENES: &[&str] = &["PAH"];

/// Active site residues of PAH.
const ACTIVE_SITE: &[i32] = &[
    138, 158, 245, 268, 278, 279, 289, 300, 315, 331, 345, 346, 349, 377,
];

/// Cofactor binding residues of PAH.
const COFACTOR_BINDING: &[i32] = &[285, 290, 330];

/// Residue ranges for substrate and cofactor binding.
const BINDING_RANGES: &[(i32, i32)] = &[
    (46, 48),
    (63, 69),
    (246, 266),
    (280, 283),
    (322, 326),
    (377, 379),
];

fn critical_residue(prot_pos: i32) -> bool {
    ACTIVE_SITE.contains(&prot_pos)
        || COFACTOR_BINDING.contains(&prot_pos)
        || BINDING_RANGES
            .iter()
            .any(|(start, end)| *start <= prot_pos && prot_pos <= *end)
}

/// PM1 from the curated PAH residue clusters instead of ClinVar density.
fn predict_pm1(input: &EvalInput<'_>, _thresholds: &Thresholds) -> CriterionResult {
    let Some(prot_pos) = input.facts.prot_pos else {
        return CriterionResult::not_automated(Criterion::Pm1, "protein position is not available");
    };
    if critical_residue(prot_pos) {
        CriterionResult::positive(
            Criterion::Pm1,
            &format!("residue {} is critical for PAH enzyme function", prot_pos),
        )
    } else {
        CriterionResult::negative(
            Criterion::Pm1,
            &format!("residue {} is not in a curated PAH cluster", prot_pos),
        )
    }
}

/// Build the panel predictor.
pub fn predictor() -> Predictor {
    Predictor::with_overrides(
        Panel::Pku,
        Thresholds::default(),
        vec![(Criterion::Pm1, predict_pm1)],
    )
}
