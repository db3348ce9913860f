//! Predictor for the hearing loss panel.
//!
//! The GJB2 NMD exception of the panel guidelines is modeled as data in
//! the NMD predictor; here only PM1 is replaced.

use crate::defs::criteria::{Criterion, CriterionResult};
use crate::defs::facts::Thresholds;
use crate::predictors::{EvalInput, Panel, Predictor};

/// Genes curated by the panel.
pub const GENES: &[&str] = &[
    "CDH23", "COCH", "GJB2", "KCNQ4", "MYO6", "MYO7A", "SLC26A4", "TECTA", "USH2A", "MYO15A",
    "OTOF",
];

/// Pore-forming intramembrane region of KCNQ4.
const KCNQ4_PORE_REGION: (i32, i32) = (271, 292);

/// PM1 per panel guidance: only the KCNQ4 pore region counts as a hot
/// spot; for the other curated genes the criterion is not applicable.
fn predict_pm1(input: &EvalInput<'_>, _thresholds: &Thresholds) -> CriterionResult {
    if input.ctx.gene_symbol != "KCNQ4" {
        return CriterionResult::not_applicable(
            Criterion::Pm1,
            &format!("PM1 is not applicable for {}", input.ctx.gene_symbol),
        );
    }
    let Some(prot_pos) = input.facts.prot_pos else {
        return CriterionResult::not_automated(Criterion::Pm1, "protein position is not available");
    };
    let (start, end) = KCNQ4_PORE_REGION;
    if start <= prot_pos && prot_pos <= end {
        CriterionResult::positive(
            Criterion::Pm1,
            &format!(
                "residue {} is within the pore-forming intramembrane region of KCNQ4",
                prot_pos
            ),
        )
    } else {
        CriterionResult::negative(
            Criterion::Pm1,
            &format!(
                "residue {} is outside the pore-forming intramembrane region of KCNQ4",
                prot_pos
            ),
        )
    }
}

/// Build the panel predictor.
pub fn predictor() -> Predictor {
    Predictor::with_overrides(
        Panel::HearingLoss,
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

    fn predict(gene_symbol: &str, prot_pos: Option<i32>) -> Prediction {
        let variant = Variant::Seqvar(SequenceVariant::default());
        let ctx = GeneContext {
            gene_symbol: gene_symbol.into(),
            ..Default::default()
        };
        let facts = VariantFacts {
            prot_pos,
            ..Default::default()
        };
        let input = EvalInput {
            variant: &variant,
            ctx: &ctx,
            facts: &facts,
        };
        super::predict_pm1(&input, &Thresholds::default()).prediction
    }

    #[test]
    fn pm1_not_applicable_outside_kcnq4() {
        assert_eq!(Prediction::NotApplicable, predict("GJB2", Some(100)));
        assert_eq!(Prediction::NotApplicable, predict("OTOF", Some(280)));
    }

    #[rstest::rstest]
    #[case(271, Prediction::Positive)]
    #[case(292, Prediction::Positive)]
    #[case(293, Prediction::Negative)]
    #[case(100, Prediction::Negative)]
    fn pm1_kcnq4_pore_region(#[case] prot_pos: i32, #[case] expected: Prediction) {
        assert_eq!(expected, predict("KCNQ4", Some(prot_pos)));
    }
}
