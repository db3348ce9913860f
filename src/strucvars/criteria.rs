//! Criterion list assembly for structural variants.
//!
//! Only PVS1 has an automated rule set for structural variants; the
//! remaining criteria are reported as not applicable so the result list
//! always has the same shape as for sequence variants.

use strum::IntoEnumIterator;

use crate::defs::criteria::{Criterion, CriterionResult};
use crate::defs::facts::{Thresholds, VariantFacts};
use crate::defs::gene::GeneContext;
use crate::defs::variant::StructuralVariant;
use crate::err::Error;

/// Evaluate PVS1 via the structural variant decision tree.
pub fn predict_pvs1(
    strucvar: &StructuralVariant,
    ctx: &GeneContext,
    facts: &VariantFacts,
    thresholds: &Thresholds,
) -> CriterionResult {
    match crate::strucvars::pvs1::evaluate(strucvar, ctx, facts, thresholds) {
        Ok((path, strength)) => crate::seqvars::criteria::pvs1_result(path, strength),
        Err(Error::UnsupportedConsequence(message)) => {
            CriterionResult::not_applicable(Criterion::Pvs1, &message)
        }
        Err(error) => CriterionResult::not_automated(Criterion::Pvs1, &error.to_string()),
    }
}

/// Evaluate all criteria for a structural variant, in report order.
pub fn predict_all(
    strucvar: &StructuralVariant,
    ctx: &GeneContext,
    facts: &VariantFacts,
    thresholds: &Thresholds,
) -> Vec<CriterionResult> {
    let pvs1 = predict_pvs1(strucvar, ctx, facts, thresholds);
    Criterion::iter()
        .map(|criterion| match criterion {
            Criterion::Pvs1 => pvs1.clone(),
            Criterion::Pp5 | Criterion::Bp6 => CriterionResult::deprecated(criterion),
            other => CriterionResult::not_applicable(
                other,
                "only PVS1 is automated for structural variants",
            ),
        })
        .collect()
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use crate::defs::criteria::{Criterion, Prediction};
    use crate::defs::facts::{Thresholds, VariantFacts};
    use crate::defs::gene::{Exon, GeneContext};
    use crate::defs::variant::{StructuralVariant, SvType};

    fn context() -> GeneContext {
        GeneContext {
            gene_symbol: "PAH".into(),
            exons: vec![Exon {
                alt_start_i: 100,
                alt_end_i: 400,
                alt_cds_start_i: 100,
                alt_cds_end_i: 400,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn full_gene_deletion_yields_positive_pvs1() {
        let strucvar = StructuralVariant {
            sv_type: SvType::Del,
            chrom: "12".into(),
            start: 1,
            stop: 1000,
            ..Default::default()
        };
        let results = super::predict_all(
            &strucvar,
            &context(),
            &VariantFacts::default(),
            &Thresholds::default(),
        );
        assert_eq!(Criterion::iter().count(), results.len());
        assert_eq!(Criterion::Pvs1, results[0].name);
        assert_eq!(Prediction::Positive, results[0].prediction);
        assert_eq!("PVS1 (DEL1)", results[0].summary);
    }

    #[test]
    fn intra_exonic_deletion_is_not_applicable() {
        let strucvar = StructuralVariant {
            sv_type: SvType::Del,
            chrom: "12".into(),
            start: 150,
            stop: 180,
            ..Default::default()
        };
        let results = super::predict_all(
            &strucvar,
            &context(),
            &VariantFacts::default(),
            &Thresholds::default(),
        );
        assert_eq!(Prediction::NotApplicable, results[0].prediction);
    }
}
