//! Predictors for the congenital myopathies and malignant hyperthermia
//! panels.
//!
//! Both panels claim RYR1; the registry resolves the conflict in favor
//! of the malignant hyperthermia panel.

use crate::defs::criteria::{Criterion, CriterionResult};
use crate::defs::facts::Thresholds;
use crate::defs::variant::Variant;
use crate::predictors::{EvalInput, Panel, Predictor};

/// Genes curated by the congenital myopathies panel.
pub const CONGENITAL_MYOPATHIES_GENES: &[&str] = &["NEB", "ACTA1", "DNM2", "MTM1", "RYR1"];

/// Genes curated by the malignant hyperthermia panel.
pub const MALIGNANT_HYPERTHERMIA_GENES: &[&str] = &["RYR1"];

/// RYR1 C-terminal region curated by the congenital myopathies panel.
const CM_RYR1_REGION: (i32, i32) = (4800, 4950);

/// RYR1 regions curated by the malignant hyperthermia panel, moderate
/// level first: N-terminal and central region, then the C-terminal
/// supporting region.
const MH_RYR1_MODERATE: &[(i32, i32)] = &[(1, 552), (2101, 2458)];
const MH_RYR1_SUPPORTING: &[(i32, i32)] = &[(4631, 4991)];

fn default_pm1(input: &EvalInput<'_>, thresholds: &Thresholds) -> CriterionResult {
    match input.variant {
        Variant::Seqvar(seqvar) => {
            crate::seqvars::criteria::predict_pm1(seqvar, input.facts, thresholds)
        }
        Variant::Strucvar(_) => CriterionResult::not_applicable(
            Criterion::Pm1,
            "only PVS1 is automated for structural variants",
        ),
    }
}

/// PM1 for congenital myopathies: the RYR1 C-terminal region.
fn predict_pm1_congenital(input: &EvalInput<'_>, thresholds: &Thresholds) -> CriterionResult {
    if input.ctx.gene_symbol != "RYR1" {
        return default_pm1(input, thresholds);
    }
    let Some(prot_pos) = input.facts.prot_pos else {
        return CriterionResult::not_automated(Criterion::Pm1, "protein position is not available");
    };
    let (start, end) = CM_RYR1_REGION;
    if start <= prot_pos && prot_pos <= end {
        CriterionResult::positive(
            Criterion::Pm1,
            &format!(
                "residue {} is within the curated RYR1 region {}-{}",
                prot_pos, start, end
            ),
        )
    } else {
        CriterionResult::negative(
            Criterion::Pm1,
            &format!("residue {} is outside the curated RYR1 regions", prot_pos),
        )
    }
}

/// PM1 for malignant hyperthermia: moderate and supporting RYR1 regions.
fn predict_pm1_hyperthermia(input: &EvalInput<'_>, thresholds: &Thresholds) -> CriterionResult {
    if input.ctx.gene_symbol != "RYR1" {
        return default_pm1(input, thresholds);
    }
    let Some(prot_pos) = input.facts.prot_pos else {
        return CriterionResult::not_automated(Criterion::Pm1, "protein position is not available");
    };
    if MH_RYR1_MODERATE
        .iter()
        .any(|(start, end)| *start <= prot_pos && prot_pos <= *end)
    {
        return CriterionResult::positive(
            Criterion::Pm1,
            &format!(
                "residue {} is within a critical RYR1 region, met at the moderate level",
                prot_pos
            ),
        );
    }
    if MH_RYR1_SUPPORTING
        .iter()
        .any(|(start, end)| *start <= prot_pos && prot_pos <= *end)
    {
        return CriterionResult::positive(
            Criterion::Pm1,
            &format!(
                "residue {} is within a critical RYR1 region, met at the supporting level",
                prot_pos
            ),
        );
    }
    CriterionResult::negative(
        Criterion::Pm1,
        &format!("residue {} is outside the curated RYR1 regions", prot_pos),
    )
}

/// Build the congenital myopathies predictor.
pub fn congenital_myopathies() -> Predictor {
    Predictor::with_overrides(
        Panel::CongenitalMyopathies,
        Thresholds::default(),
        vec![(Criterion::Pm1, predict_pm1_congenital)],
    )
}

/// Build the malignant hyperthermia predictor.
pub fn malignant_hyperthermia() -> Predictor {
    Predictor::with_overrides(
        Panel::MalignantHyperthermia,
        Thresholds::default(),
        vec![(Criterion::Pm1, predict_pm1_hyperthermia)],
    )
}
