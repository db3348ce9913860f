//! Predictor for the PTEN panel.
//!
//! Curated gene: PTEN.  The panel also carries the PVS1 special path for
//! start-proximal premature stops, which is modeled as a data-driven NMD
//! exception and consulted directly by the sequence variant tree.

use crate::defs::criteria::{Criterion, CriterionResult};
use crate::defs::facts::Thresholds;
use crate::predictors::{EvalInput, Panel, Predictor};

/// Genes curated by the panel.
pub const GENES: &[&str] = &["PTEN"];

/// Catalytic motif residue ranges of PTEN.
const CATALYTIC_MOTIFS: &[(i32, i32)] = &[(90, 94), (123, 130), (166, 168)];

/// PM1 from the curated catalytic motifs.
fn predict_pm1(input: &EvalInput<'_>, _thresholds: &Thresholds) -> CriterionResult {
    let Some(prot_pos) = input.facts.prot_pos else {
        return CriterionResult::not_automated(Criterion::Pm1, "protein position is not available");
    };
    if CATALYTIC_MOTIFS
        .iter()
        .any(|(start, end)| *start <= prot_pos && prot_pos <= *end)
    {
        CriterionResult::positive(
            Criterion::Pm1,
            &format!(
                "residue {} is within a catalytic motif of PTEN",
                prot_pos
            ),
        )
    } else {
        CriterionResult::negative(
            Criterion::Pm1,
            &format!("residue {} is outside the catalytic motifs of PTEN", prot_pos),
        )
    }
}

/// Build the panel predictor.
pub fn predictor() -> Predictor {
    Predictor::with_overrides(
        Panel::Pten,
        Thresholds::default(),
        vec![(Criterion::Pm1, predict_pm1)],
    )
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use crate::defs::criteria::Prediction;
    use crate::defs::facts::{Thresholds, VariantFacts};
    use crate::defs::gene::GeneContext;
    use crate::defs::variant::{SequenceVariant, Variant};
    use crate::predictors::EvalInput;

    #[rstest::rstest]
    #[case(90, Prediction::Positive)]
    #[case(130, Prediction::Positive)]
    #[case(131, Prediction::Negative)]
    #[case(166, Prediction::Positive)]
    #[case(200, Prediction::Negative)]
    fn pm1_catalytic_motifs(#[case] prot_pos: i32, #[case] expected: Prediction) {
        let variant = Variant::Seqvar(SequenceVariant::default());
        let ctx = GeneContext {
            gene_symbol: "PTEN".into(),
            ..Default::default()
        };
        let facts = VariantFacts {
            prot_pos: Some(prot_pos),
            ..Default::default()
        };
        let input = EvalInput {
            variant: &variant,
            ctx: &ctx,
            facts: &facts,
        };
        let result = super::predict_pm1(&input, &Thresholds::default());
        assert_eq!(expected, result.prediction);
    }
}
