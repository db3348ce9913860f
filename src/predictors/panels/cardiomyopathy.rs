//! Predictor for the cardiomyopathy panel.

use crate::defs::criteria::{Criterion, CriterionResult};
use crate::defs::facts::Thresholds;
use crate::defs::variant::Variant;
use crate::predictors::{EvalInput, Panel, Predictor};

/// Genes curated by the panel.
pub const GENES: &[&str] = &[
    "MYH7", "MYBPC3", "TNNI3", "TNNT2", "TPM1", "ACTC1", "MYL2", "MYL3",
];

/// Curated functional domains, by gene.
fn domains_for(gene_symbol: &str) -> Option<&'static [(i32, i32)]> {
    match gene_symbol {
        "MYH7" => Some(&[(167, 931)]),
        "MYBPC3" => Some(&[(485, 502), (1248, 1266)]),
        "TNNI3" => Some(&[(141, 209)]),
        "TNNT2" => Some(&[(79, 179)]),
        _ => None,
    }
}

/// PM1 from the curated sarcomere domains; genes without curation fall
/// back to the default ClinVar density rule.
fn predict_pm1(input: &EvalInput<'_>, thresholds: &Thresholds) -> CriterionResult {
    let Some(domains) = domains_for(&input.ctx.gene_symbol) else {
        return match input.variant {
            Variant::Seqvar(seqvar) => {
                crate::seqvars::criteria::predict_pm1(seqvar, input.facts, thresholds)
            }
            Variant::Strucvar(_) => CriterionResult::not_applicable(
                Criterion::Pm1,
                "only PVS1 is automated for structural variants",
            ),
        };
    };
    let Some(prot_pos) = input.facts.prot_pos else {
        return CriterionResult::not_automated(Criterion::Pm1, "protein position is not available");
    };
    if domains
        .iter()
        .any(|(start, end)| *start <= prot_pos && prot_pos <= *end)
    {
        CriterionResult::positive(
            Criterion::Pm1,
            &format!(
                "residue {} is within a curated functional domain of {}",
                prot_pos, input.ctx.gene_symbol
            ),
        )
    } else {
        CriterionResult::negative(
            Criterion::Pm1,
            &format!(
                "residue {} is outside the curated domains of {}",
                prot_pos, input.ctx.gene_symbol
            ),
        )
    }
}

/// Build the panel predictor.
pub fn predictor() -> Predictor {
    Predictor::with_overrides(
        Panel::Cardiomyopathy,
        Thresholds::default(),
        vec![(Criterion::Pm1, predict_pm1)],
    )
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use crate::defs::criteria::Prediction;
    use crate::defs::facts::{ClinvarCounts, Thresholds, VariantFacts};
    use crate::defs::gene::GeneContext;
    use crate::defs::variant::{SequenceVariant, Variant};
    use crate::predictors::EvalInput;

    fn predict(gene_symbol: &str, facts: &VariantFacts) -> Prediction {
        let variant = Variant::Seqvar(SequenceVariant::default());
        let ctx = GeneContext {
            gene_symbol: gene_symbol.into(),
            ..Default::default()
        };
        let input = EvalInput {
            variant: &variant,
            ctx: &ctx,
            facts,
        };
        super::predict_pm1(&input, &Thresholds::default()).prediction
    }

    #[rstest::rstest]
    #[case("MYH7", 500, Prediction::Positive)]
    #[case("MYH7", 1000, Prediction::Negative)]
    #[case("MYBPC3", 490, Prediction::Positive)]
    #[case("TNNT2", 100, Prediction::Positive)]
    fn pm1_curated_domains(
        #[case] gene: &str,
        #[case] prot_pos: i32,
        #[case] expected: Prediction,
    ) {
        let facts = VariantFacts {
            prot_pos: Some(prot_pos),
            ..Default::default()
        };
        assert_eq!(expected, predict(gene, &facts));
    }

    #[test]
    fn uncurated_gene_falls_back_to_default_rule() {
        let facts = VariantFacts {
            prot_pos: Some(100),
            clinvar_window: Some(ClinvarCounts {
                pathogenic: 6,
                total: 10,
            }),
            ..Default::default()
        };
        assert_eq!(Prediction::Positive, predict("ACTC1", &facts));
    }
}
