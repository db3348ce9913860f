//! Gene panel (VCEP) specific predictors.
//!
//! Each panel module exposes its predictor and the list of genes it
//! curates; the registry wires them together at startup.

pub mod cardiomyopathy;
pub mod hearing_loss;
pub mod myopathies;
pub mod pku;
pub mod pten;
pub mod rasopathy;

use crate::predictors::Predictor;

/// All registered panel predictors with their gene claims.
pub fn all() -> Vec<(Predictor, &'static [&'static str])> {
    vec![
        (pku::predictor(), pku::GENES),
        (pten::predictor(), pten::GENES),
        (hearing_loss::predictor(), hearing_loss::GENES),
        (cardiomyopathy::predictor(), cardiomyopathy::GENES),
        (rasopathy::predictor(), rasopathy::GENES),
        (
            myopathies::congenital_myopathies(),
            myopathies::CONGENITAL_MYOPATHIES_GENES,
        ),
        (
            myopathies::malignant_hyperthermia(),
            myopathies::MALIGNANT_HYPERTHERMIA_GENES,
        ),
    ]
}

#[cfg(test)]
mod test {
    #[test]
    fn every_panel_claims_at_least_one_gene() {
        for (predictor, genes) in super::all() {
            assert!(!genes.is_empty(), "panel = {}", predictor.panel);
        }
    }
}
