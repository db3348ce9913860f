//! Default rule set for all automated criteria of sequence variants.
//!
//! Each function evaluates one criterion (or one group of closely related
//! criteria, matching the grouping of the published guidelines) from the
//! supplied facts alone.  Missing facts downgrade the affected criterion
//! to `NotAutomated`; they never abort the evaluation.

use strum::IntoEnumIterator;

use crate::defs::criteria::{Criterion, CriterionResult};
use crate::defs::facts::{Thresholds, VariantFacts};
use crate::defs::gene::GeneContext;
use crate::defs::pvs1::{PathCode, Pvs1Strength};
use crate::defs::variant::SequenceVariant;
use crate::err::Error;

/// Maximal distance to an exon boundary at which BP7 is ruled out.
const BP7_SPLICE_DISTANCE: i32 = 2;

/// Criteria that need segregation, functional, or phenotype data the
/// worker does not have.
const NOT_AUTOMATED: &[Criterion] = &[
    Criterion::Ps2,
    Criterion::Ps3,
    Criterion::Ps4,
    Criterion::Pm3,
    Criterion::Pm6,
    Criterion::Pp1,
    Criterion::Pp4,
    Criterion::Bs3,
    Criterion::Bs4,
    Criterion::Bp2,
    Criterion::Bp5,
];

fn is_missense(facts: &VariantFacts) -> bool {
    facts
        .consequences
        .iter()
        .any(|term| term.contains("missense"))
}

fn is_synonymous(facts: &VariantFacts) -> bool {
    facts
        .consequences
        .iter()
        .any(|term| term.contains("synonymous"))
}

fn is_inframe_change(facts: &VariantFacts) -> bool {
    facts.consequences.iter().any(|term| {
        term.contains("inframe_deletion")
            || term.contains("inframe_insertion")
            || term.contains("stop_lost")
    })
}

/// Evaluate PVS1 via the decision tree and wrap the outcome.
pub fn predict_pvs1(
    seqvar: &SequenceVariant,
    ctx: &GeneContext,
    facts: &VariantFacts,
    thresholds: &Thresholds,
) -> CriterionResult {
    match crate::seqvars::pvs1::evaluate(seqvar, ctx, facts, thresholds) {
        Ok((path, strength)) => pvs1_result(path, strength),
        Err(Error::UnsupportedConsequence(terms)) => CriterionResult {
            name: Criterion::Pvs1,
            prediction: crate::defs::criteria::Prediction::NotApplicable,
            summary: format!(
                "{} ({})",
                Pvs1Strength::UnsupportedConsequence,
                PathCode::NotSet
            ),
            description: format!("consequence terms not covered by the tree: {}", terms),
        },
        Err(error) => CriterionResult::not_automated(Criterion::Pvs1, &error.to_string()),
    }
}

/// Build the PVS1 result from a terminal path; the summary carries both
/// the path code and the graded strength for auditability.
pub fn pvs1_result(path: PathCode, strength: Pvs1Strength) -> CriterionResult {
    let prediction = if strength.is_positive() {
        crate::defs::criteria::Prediction::Positive
    } else if strength == Pvs1Strength::UnsupportedConsequence {
        crate::defs::criteria::Prediction::NotApplicable
    } else {
        crate::defs::criteria::Prediction::Negative
    };
    CriterionResult {
        name: Criterion::Pvs1,
        prediction,
        summary: format!("{} ({})", strength, path),
        description: path.description().to_string(),
    }
}

/// PS1 and PM5: established pathogenic changes at the same protein
/// position.
pub fn predict_ps1_pm5(facts: &VariantFacts) -> [CriterionResult; 2] {
    if !is_missense(facts) {
        return [
            CriterionResult::not_applicable(Criterion::Ps1, "not a missense variant"),
            CriterionResult::not_applicable(Criterion::Pm5, "not a missense variant"),
        ];
    }
    let ps1 = match facts.same_aa_change_pathogenic {
        Some(true) => CriterionResult::positive(
            Criterion::Ps1,
            "same amino acid change as an established pathogenic variant",
        ),
        Some(false) => CriterionResult::negative(
            Criterion::Ps1,
            "no established pathogenic variant with the same amino acid change",
        ),
        None => CriterionResult::not_automated(
            Criterion::Ps1,
            "ClinVar evidence for the protein position is not available",
        ),
    };
    let pm5 = match facts.other_aa_change_pathogenic {
        Some(true) => CriterionResult::positive(
            Criterion::Pm5,
            "different pathogenic missense change at the same residue",
        ),
        Some(false) => CriterionResult::negative(
            Criterion::Pm5,
            "no pathogenic missense change at the same residue",
        ),
        None => CriterionResult::not_automated(
            Criterion::Pm5,
            "ClinVar evidence for the protein position is not available",
        ),
    };
    [ps1, pm5]
}

/// PM1: mutational hot spot from local ClinVar density.
pub fn predict_pm1(
    seqvar: &SequenceVariant,
    facts: &VariantFacts,
    thresholds: &Thresholds,
) -> CriterionResult {
    // Skipped on chrMT according to McCormick et al. (2020).
    if seqvar.chrom == "MT" {
        return CriterionResult::negative(Criterion::Pm1, "PM1 is skipped on chrMT");
    }
    let Some(window) = &facts.clinvar_window else {
        return CriterionResult::not_automated(
            Criterion::Pm1,
            "ClinVar counts around the variant are not available",
        );
    };
    if window.pathogenic >= thresholds.pm1_window_count {
        return CriterionResult::positive(
            Criterion::Pm1,
            &format!(
                "{} pathogenic variants within +/-25 bp of the variant",
                window.pathogenic
            ),
        );
    }
    match &facts.clinvar_domain {
        Some(domain) if domain.pathogenic >= thresholds.pm1_domain_count => {
            CriterionResult::positive(
                Criterion::Pm1,
                &format!(
                    "{} pathogenic variants within the UniProt domain",
                    domain.pathogenic
                ),
            )
        }
        _ => CriterionResult::negative(
            Criterion::Pm1,
            "no pathogenic variant cluster around the variant",
        ),
    }
}

/// PM2, BA1, BS1, BS2: population frequency thresholds.
pub fn predict_pm2_ba1_bs1_bs2(
    facts: &VariantFacts,
    thresholds: &Thresholds,
) -> [CriterionResult; 4] {
    let (pm2, ba1, bs1) = match facts.gnomad_af {
        None => (
            CriterionResult::positive(Criterion::Pm2, "variant absent from gnomAD"),
            CriterionResult::negative(Criterion::Ba1, "variant absent from gnomAD"),
            CriterionResult::negative(Criterion::Bs1, "variant absent from gnomAD"),
        ),
        Some(af) if af >= thresholds.ba1_benign => (
            CriterionResult::negative(Criterion::Pm2, &format!("allele frequency {}", af)),
            CriterionResult::positive(
                Criterion::Ba1,
                &format!(
                    "allele frequency {} >= {} stand-alone cutoff",
                    af, thresholds.ba1_benign
                ),
            ),
            CriterionResult::negative(Criterion::Bs1, "BA1 already applies"),
        ),
        Some(af) if af >= thresholds.bs1_benign => (
            CriterionResult::negative(Criterion::Pm2, &format!("allele frequency {}", af)),
            CriterionResult::negative(
                Criterion::Ba1,
                &format!("allele frequency {} below stand-alone cutoff", af),
            ),
            CriterionResult::positive(
                Criterion::Bs1,
                &format!(
                    "allele frequency {} >= {} benign cutoff",
                    af, thresholds.bs1_benign
                ),
            ),
        ),
        Some(af) if af <= thresholds.pm2_pathogenic => (
            CriterionResult::positive(
                Criterion::Pm2,
                &format!(
                    "allele frequency {} <= {} rarity cutoff",
                    af, thresholds.pm2_pathogenic
                ),
            ),
            CriterionResult::negative(Criterion::Ba1, "allele frequency below benign cutoffs"),
            CriterionResult::negative(Criterion::Bs1, "allele frequency below benign cutoffs"),
        ),
        Some(af) => (
            CriterionResult::negative(
                Criterion::Pm2,
                &format!("allele frequency {} above rarity cutoff", af),
            ),
            CriterionResult::negative(Criterion::Ba1, "allele frequency below benign cutoffs"),
            CriterionResult::negative(Criterion::Bs1, "allele frequency below benign cutoffs"),
        ),
    };
    let bs2 = match facts.gnomad_nhomalt {
        Some(nhomalt) if nhomalt > 0 => CriterionResult::positive(
            Criterion::Bs2,
            &format!("{} homozygous carriers in gnomAD", nhomalt),
        ),
        Some(_) => CriterionResult::negative(Criterion::Bs2, "no homozygous carriers in gnomAD"),
        None => CriterionResult::not_automated(
            Criterion::Bs2,
            "homozygous carrier counts are not available",
        ),
    };
    [pm2, ba1, bs1, bs2]
}

/// PM4 and BP3: in-frame length changes.
pub fn predict_pm4_bp3(facts: &VariantFacts) -> [CriterionResult; 2] {
    if !is_inframe_change(facts) {
        return [
            CriterionResult::not_applicable(
                Criterion::Pm4,
                "not an in-frame length change or stop-loss",
            ),
            CriterionResult::not_applicable(
                Criterion::Bp3,
                "not an in-frame length change or stop-loss",
            ),
        ];
    }
    match (facts.in_repeat_region, facts.in_conserved_domain) {
        (Some(in_repeat), Some(in_domain)) => {
            let pm4 = if !in_repeat && in_domain {
                CriterionResult::positive(
                    Criterion::Pm4,
                    "in-frame change in a conserved domain outside repeat regions",
                )
            } else {
                CriterionResult::negative(
                    Criterion::Pm4,
                    "in-frame change in a repeat region or outside conserved domains",
                )
            };
            let bp3 = if in_repeat && !in_domain {
                CriterionResult::positive(
                    Criterion::Bp3,
                    "in-frame change in a repeat region without known function",
                )
            } else {
                CriterionResult::negative(
                    Criterion::Bp3,
                    "in-frame change outside repeat regions or in a conserved domain",
                )
            };
            [pm4, bp3]
        }
        _ => [
            CriterionResult::not_automated(
                Criterion::Pm4,
                "repeat region or domain annotation is not available",
            ),
            CriterionResult::not_automated(
                Criterion::Bp3,
                "repeat region or domain annotation is not available",
            ),
        ],
    }
}

/// PP2 and BP1: gene-level missense constraint.
pub fn predict_pp2_bp1(facts: &VariantFacts, thresholds: &Thresholds) -> [CriterionResult; 2] {
    if !is_missense(facts) {
        return [
            CriterionResult::not_applicable(Criterion::Pp2, "not a missense variant"),
            CriterionResult::not_applicable(Criterion::Bp1, "not a missense variant"),
        ];
    }
    let Some(counts) = &facts.missense_counts else {
        return [
            CriterionResult::not_automated(
                Criterion::Pp2,
                "missense assertion counts are not available",
            ),
            CriterionResult::not_automated(
                Criterion::Bp1,
                "missense assertion counts are not available",
            ),
        ];
    };
    if counts.total == 0 {
        return [
            CriterionResult::negative(Criterion::Pp2, "no asserted missense variants in the gene"),
            CriterionResult::negative(Criterion::Bp1, "no asserted missense variants in the gene"),
        ];
    }
    let pathogenic_ratio = f64::from(counts.pathogenic) / f64::from(counts.total);
    let benign_ratio = f64::from(counts.benign) / f64::from(counts.total);
    let pp2 = if pathogenic_ratio > thresholds.pp2_pathogenic_ratio {
        CriterionResult::positive(
            Criterion::Pp2,
            &format!("pathogenic missense ratio {:.3}", pathogenic_ratio),
        )
    } else {
        CriterionResult::negative(
            Criterion::Pp2,
            &format!("pathogenic missense ratio {:.3}", pathogenic_ratio),
        )
    };
    let bp1 = if benign_ratio > thresholds.bp1_benign_ratio {
        CriterionResult::positive(
            Criterion::Bp1,
            &format!("benign missense ratio {:.3}", benign_ratio),
        )
    } else {
        CriterionResult::negative(
            Criterion::Bp1,
            &format!("benign missense ratio {:.3}", benign_ratio),
        )
    };
    [pp2, bp1]
}

/// PP3 and BP4: in-silico evidence.
pub fn predict_pp3_bp4(facts: &VariantFacts, thresholds: &Thresholds) -> [CriterionResult; 2] {
    let revel = facts.scores.revel;
    let spliceai = facts.scores.spliceai_max();
    if revel.is_none() && spliceai.is_none() {
        return [
            CriterionResult::not_automated(Criterion::Pp3, "no in-silico scores available"),
            CriterionResult::not_automated(Criterion::Bp4, "no in-silico scores available"),
        ];
    }
    let pathogenic = revel.map_or(false, |score| score > thresholds.score_pathogenic)
        || spliceai.map_or(false, |score| score > thresholds.score_pathogenic);
    let benign = revel.map_or(false, |score| score < thresholds.score_benign)
        || spliceai.map_or(false, |score| score < thresholds.score_benign);
    let pp3 = if pathogenic {
        CriterionResult::positive(Criterion::Pp3, "in-silico scores support a deleterious effect")
    } else {
        CriterionResult::negative(
            Criterion::Pp3,
            "in-silico scores do not support a deleterious effect",
        )
    };
    let bp4 = if benign && !pathogenic {
        CriterionResult::positive(Criterion::Bp4, "in-silico scores suggest no impact")
    } else {
        CriterionResult::negative(Criterion::Bp4, "in-silico scores do not suggest benignity")
    };
    [pp3, bp4]
}

/// BP7: synonymous variants away from splice sites.
pub fn predict_bp7(
    seqvar: &SequenceVariant,
    ctx: &GeneContext,
    facts: &VariantFacts,
    thresholds: &Thresholds,
) -> CriterionResult {
    if !is_synonymous(facts) {
        return CriterionResult::not_applicable(Criterion::Bp7, "not a synonymous variant");
    }
    let near_splice_site = ctx.exons.iter().any(|exon| {
        (seqvar.pos - exon.alt_start_i).abs() <= BP7_SPLICE_DISTANCE
            || (exon.alt_end_i - seqvar.pos).abs() <= BP7_SPLICE_DISTANCE
    });
    if near_splice_site {
        return CriterionResult::negative(
            Criterion::Bp7,
            "variant is within 2 bp of an exon boundary",
        );
    }
    match facts.scores.spliceai_max() {
        None => {
            CriterionResult::not_automated(Criterion::Bp7, "SpliceAI scores are not available")
        }
        Some(score) if score <= thresholds.bp7_spliceai => CriterionResult::positive(
            Criterion::Bp7,
            &format!("maximal SpliceAI delta score {}", score),
        ),
        Some(score) => CriterionResult::negative(
            Criterion::Bp7,
            &format!("maximal SpliceAI delta score {}", score),
        ),
    }
}

/// Placeholder result for criteria without automation.
pub fn placeholder(criterion: Criterion) -> CriterionResult {
    if NOT_AUTOMATED.contains(&criterion) {
        CriterionResult::not_automated(
            criterion,
            "requires segregation, functional, or phenotype data not available to the worker",
        )
    } else {
        CriterionResult::deprecated(criterion)
    }
}

/// Evaluate all criteria for a sequence variant, in report order.
pub fn predict_all(
    seqvar: &SequenceVariant,
    ctx: &GeneContext,
    facts: &VariantFacts,
    thresholds: &Thresholds,
) -> Vec<CriterionResult> {
    let pvs1 = predict_pvs1(seqvar, ctx, facts, thresholds);
    let [ps1, pm5] = predict_ps1_pm5(facts);
    let pm1 = predict_pm1(seqvar, facts, thresholds);
    let [pm2, ba1, bs1, bs2] = predict_pm2_ba1_bs1_bs2(facts, thresholds);
    let [pm4, bp3] = predict_pm4_bp3(facts);
    let [pp2, bp1] = predict_pp2_bp1(facts, thresholds);
    let [pp3, bp4] = predict_pp3_bp4(facts, thresholds);
    let bp7 = predict_bp7(seqvar, ctx, facts, thresholds);

    Criterion::iter()
        .map(|criterion| match criterion {
            Criterion::Pvs1 => pvs1.clone(),
            Criterion::Ps1 => ps1.clone(),
            Criterion::Pm1 => pm1.clone(),
            Criterion::Pm2 => pm2.clone(),
            Criterion::Pm4 => pm4.clone(),
            Criterion::Pm5 => pm5.clone(),
            Criterion::Pp2 => pp2.clone(),
            Criterion::Pp3 => pp3.clone(),
            Criterion::Ba1 => ba1.clone(),
            Criterion::Bs1 => bs1.clone(),
            Criterion::Bs2 => bs2.clone(),
            Criterion::Bp1 => bp1.clone(),
            Criterion::Bp3 => bp3.clone(),
            Criterion::Bp4 => bp4.clone(),
            Criterion::Bp7 => bp7.clone(),
            other => placeholder(other),
        })
        .collect()
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use crate::defs::criteria::{Criterion, Prediction};
    use crate::defs::facts::{ClinvarCounts, MissenseCounts, Scores, Thresholds, VariantFacts};
    use crate::defs::gene::{Exon, GeneContext};
    use crate::defs::variant::SequenceVariant;

    use super::NOT_AUTOMATED;

    fn seqvar() -> SequenceVariant {
        SequenceVariant {
            chrom: "12".into(),
            pos: 350,
            reference: "C".into(),
            alternative: "T".into(),
            transcript_id: "NM_000277.3".into(),
        }
    }

    fn context() -> GeneContext {
        GeneContext {
            gene_symbol: "PAH".into(),
            exons: vec![
                Exon {
                    alt_start_i: 300,
                    alt_end_i: 400,
                    alt_cds_start_i: 300,
                    alt_cds_end_i: 400,
                },
            ],
            relevant_transcripts: vec!["NM_000277.3".into()],
            ..Default::default()
        }
    }

    #[test]
    fn ps1_pm5_for_missense() {
        let facts = VariantFacts {
            consequences: vec!["missense_variant".into()],
            same_aa_change_pathogenic: Some(true),
            other_aa_change_pathogenic: Some(false),
            ..Default::default()
        };
        let [ps1, pm5] = super::predict_ps1_pm5(&facts);
        assert_eq!(Prediction::Positive, ps1.prediction);
        assert_eq!(Prediction::Negative, pm5.prediction);
    }

    #[test]
    fn ps1_pm5_not_applicable_for_nonsense() {
        let facts = VariantFacts {
            consequences: vec!["stop_gained".into()],
            ..Default::default()
        };
        let [ps1, pm5] = super::predict_ps1_pm5(&facts);
        assert_eq!(Prediction::NotApplicable, ps1.prediction);
        assert_eq!(Prediction::NotApplicable, pm5.prediction);
    }

    #[rstest::rstest]
    #[case(5, 0, Prediction::Positive)]
    #[case(3, 2, Prediction::Positive)]
    #[case(3, 1, Prediction::Negative)]
    fn pm1_cluster_counts(
        #[case] window_pathogenic: u32,
        #[case] domain_pathogenic: u32,
        #[case] expected: Prediction,
    ) {
        let facts = VariantFacts {
            clinvar_window: Some(ClinvarCounts {
                pathogenic: window_pathogenic,
                total: 20,
            }),
            clinvar_domain: Some(ClinvarCounts {
                pathogenic: domain_pathogenic,
                total: 20,
            }),
            ..Default::default()
        };
        let result = super::predict_pm1(&seqvar(), &facts, &Thresholds::default());
        assert_eq!(expected, result.prediction);
    }

    #[test]
    fn pm1_skipped_on_chr_mt() {
        let seqvar = SequenceVariant {
            chrom: "MT".into(),
            ..seqvar()
        };
        let result = super::predict_pm1(&seqvar, &VariantFacts::default(), &Thresholds::default());
        assert_eq!(Prediction::Negative, result.prediction);
    }

    #[rstest::rstest]
    #[case(None, Prediction::Positive, Prediction::Negative, Prediction::Negative)]
    #[case(Some(0.06), Prediction::Negative, Prediction::Positive, Prediction::Negative)]
    #[case(Some(0.02), Prediction::Negative, Prediction::Negative, Prediction::Positive)]
    #[case(Some(0.00005), Prediction::Positive, Prediction::Negative, Prediction::Negative)]
    #[case(Some(0.001), Prediction::Negative, Prediction::Negative, Prediction::Negative)]
    fn pm2_ba1_bs1_thresholds(
        #[case] af: Option<f64>,
        #[case] pm2_expected: Prediction,
        #[case] ba1_expected: Prediction,
        #[case] bs1_expected: Prediction,
    ) {
        let facts = VariantFacts {
            gnomad_af: af,
            gnomad_nhomalt: Some(0),
            ..Default::default()
        };
        let [pm2, ba1, bs1, bs2] = super::predict_pm2_ba1_bs1_bs2(&facts, &Thresholds::default());
        assert_eq!(pm2_expected, pm2.prediction);
        assert_eq!(ba1_expected, ba1.prediction);
        assert_eq!(bs1_expected, bs1.prediction);
        assert_eq!(Prediction::Negative, bs2.prediction);
    }

    #[test]
    fn bs2_counts_homozygous_carriers() {
        let facts = VariantFacts {
            gnomad_af: Some(0.001),
            gnomad_nhomalt: Some(3),
            ..Default::default()
        };
        let [_, _, _, bs2] = super::predict_pm2_ba1_bs1_bs2(&facts, &Thresholds::default());
        assert_eq!(Prediction::Positive, bs2.prediction);
    }

    #[rstest::rstest]
    #[case(Some(false), Some(true), Prediction::Positive, Prediction::Negative)]
    #[case(Some(true), Some(false), Prediction::Negative, Prediction::Positive)]
    #[case(Some(true), Some(true), Prediction::Negative, Prediction::Negative)]
    fn pm4_bp3_flags(
        #[case] in_repeat: Option<bool>,
        #[case] in_domain: Option<bool>,
        #[case] pm4_expected: Prediction,
        #[case] bp3_expected: Prediction,
    ) {
        let facts = VariantFacts {
            consequences: vec!["inframe_deletion".into()],
            in_repeat_region: in_repeat,
            in_conserved_domain: in_domain,
            ..Default::default()
        };
        let [pm4, bp3] = super::predict_pm4_bp3(&facts);
        assert_eq!(pm4_expected, pm4.prediction);
        assert_eq!(bp3_expected, bp3.prediction);
    }

    #[test]
    fn pp2_bp1_ratios() {
        let facts = VariantFacts {
            consequences: vec!["missense_variant".into()],
            missense_counts: Some(MissenseCounts {
                pathogenic: 90,
                benign: 2,
                total: 100,
            }),
            ..Default::default()
        };
        let [pp2, bp1] = super::predict_pp2_bp1(&facts, &Thresholds::default());
        assert_eq!(Prediction::Positive, pp2.prediction);
        assert_eq!(Prediction::Negative, bp1.prediction);
    }

    #[rstest::rstest]
    #[case(Some(0.9), None, Prediction::Positive, Prediction::Negative)]
    #[case(Some(0.1), Some(0.05), Prediction::Negative, Prediction::Positive)]
    #[case(None, None, Prediction::NotAutomated, Prediction::NotAutomated)]
    fn pp3_bp4_scores(
        #[case] revel: Option<f64>,
        #[case] spliceai: Option<f64>,
        #[case] pp3_expected: Prediction,
        #[case] bp4_expected: Prediction,
    ) {
        let facts = VariantFacts {
            scores: Scores {
                revel,
                spliceai_donor_loss: spliceai,
                ..Default::default()
            },
            ..Default::default()
        };
        let [pp3, bp4] = super::predict_pp3_bp4(&facts, &Thresholds::default());
        assert_eq!(pp3_expected, pp3.prediction);
        assert_eq!(bp4_expected, bp4.prediction);
    }

    #[test]
    fn bp7_synonymous_away_from_splice_sites() {
        let facts = VariantFacts {
            consequences: vec!["synonymous_variant".into()],
            scores: Scores {
                spliceai_donor_gain: Some(0.01),
                ..Default::default()
            },
            ..Default::default()
        };
        let result = super::predict_bp7(&seqvar(), &context(), &facts, &Thresholds::default());
        assert_eq!(Prediction::Positive, result.prediction);
    }

    #[test]
    fn bp7_negative_near_exon_boundary() {
        let seqvar = SequenceVariant {
            pos: 399,
            ..seqvar()
        };
        let facts = VariantFacts {
            consequences: vec!["synonymous_variant".into()],
            scores: Scores {
                spliceai_donor_gain: Some(0.01),
                ..Default::default()
            },
            ..Default::default()
        };
        let result = super::predict_bp7(&seqvar, &context(), &facts, &Thresholds::default());
        assert_eq!(Prediction::Negative, result.prediction);
    }

    #[test]
    fn predict_all_covers_every_criterion_in_order() {
        use strum::IntoEnumIterator;

        let facts = VariantFacts {
            consequences: vec!["missense_variant".into()],
            ..Default::default()
        };
        let results = super::predict_all(&seqvar(), &context(), &facts, &Thresholds::default());
        let expected: Vec<_> = Criterion::iter().collect();
        let actual: Vec<_> = results.iter().map(|result| result.name).collect();
        assert_eq!(expected, actual);

        for result in &results {
            if matches!(result.name, Criterion::Pp5 | Criterion::Bp6) {
                assert_eq!(Prediction::Deprecated, result.prediction);
            }
            if NOT_AUTOMATED.contains(&result.name) {
                assert_eq!(
                    Prediction::NotAutomated,
                    result.prediction,
                    "criterion = {:?}",
                    result.name
                );
            }
            assert_ne!(Prediction::NotSet, result.prediction);
        }
    }

    #[test]
    fn predict_all_is_idempotent() {
        let facts = VariantFacts {
            consequences: vec!["stop_gained".into()],
            tx_pos: Some(10),
            prot_pos: Some(383),
            prot_length: Some(452),
            ..Default::default()
        };
        let first = super::predict_all(&seqvar(), &context(), &facts, &Thresholds::default());
        let second = super::predict_all(&seqvar(), &context(), &facts, &Thresholds::default());
        assert_eq!(first, second);
    }
}
