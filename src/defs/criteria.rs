//! Per-criterion result model.

use serde::{Deserialize, Serialize};

/// ACMG criteria known to the worker, in report order.
#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Debug,
    Clone,
    Copy,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Criterion {
    Pvs1,
    Ps1,
    Ps2,
    Ps3,
    Ps4,
    Pm1,
    Pm2,
    Pm3,
    Pm4,
    Pm5,
    Pm6,
    Pp1,
    Pp2,
    Pp3,
    Pp4,
    Pp5,
    Ba1,
    Bs1,
    Bs2,
    Bs3,
    Bs4,
    Bp1,
    Bp2,
    Bp3,
    Bp4,
    Bp5,
    Bp6,
    Bp7,
}

impl Criterion {
    /// One-line definition of the criterion, used as result description.
    pub fn definition(&self) -> &'static str {
        match self {
            Criterion::Pvs1 => "Null variant in a gene where loss of function is a known mechanism",
            Criterion::Ps1 => {
                "Same amino acid change as a previously established pathogenic variant"
            }
            Criterion::Ps2 => "De novo variant with confirmed parentage",
            Criterion::Ps3 => "Well-established functional studies show a deleterious effect",
            Criterion::Ps4 => "Prevalence in affected individuals increased over controls",
            Criterion::Pm1 => "Located in a mutational hot spot or well-established domain",
            Criterion::Pm2 => "Absent from controls or at extremely low frequency",
            Criterion::Pm3 => "Detected in trans with a pathogenic variant (recessive disorder)",
            Criterion::Pm4 => "Protein length change due to in-frame indel or stop-loss",
            Criterion::Pm5 => {
                "Novel missense change at a residue where a different pathogenic missense \
                 change has been seen"
            }
            Criterion::Pm6 => "Assumed de novo without confirmed parentage",
            Criterion::Pp1 => "Cosegregation with disease in multiple affected family members",
            Criterion::Pp2 => {
                "Missense variant in a gene with low benign missense rate where missense is \
                 a common mechanism"
            }
            Criterion::Pp3 => "Multiple computational lines of evidence support deleterious effect",
            Criterion::Pp4 => "Phenotype or family history highly specific for the gene",
            Criterion::Pp5 => "Reputable source reports variant as pathogenic (deprecated)",
            Criterion::Ba1 => "Allele frequency above the stand-alone benign cutoff",
            Criterion::Bs1 => "Allele frequency greater than expected for the disorder",
            Criterion::Bs2 => "Observed in healthy adults with full penetrance expected",
            Criterion::Bs3 => "Well-established functional studies show no deleterious effect",
            Criterion::Bs4 => "Lack of segregation in affected family members",
            Criterion::Bp1 => "Missense variant in a gene where truncating variants cause disease",
            Criterion::Bp2 => "Observed in trans with a dominant pathogenic variant",
            Criterion::Bp3 => "In-frame indel in a repetitive region without known function",
            Criterion::Bp4 => {
                "Multiple computational lines of evidence suggest no impact"
            }
            Criterion::Bp5 => "Found in a case with an alternate molecular basis for disease",
            Criterion::Bp6 => "Reputable source reports variant as benign (deprecated)",
            Criterion::Bp7 => "Synonymous variant with no predicted splice impact",
        }
    }
}

/// Outcome of evaluating one criterion.
#[derive(
    Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy, Default, strum::Display,
)]
pub enum Prediction {
    /// Pre-evaluation sentinel; never part of a final result.
    #[default]
    NotSet,
    /// The criterion is met.
    Positive,
    /// The criterion is not met.
    Negative,
    /// The criterion cannot be evaluated automatically.
    NotAutomated,
    /// The criterion does not apply to this variant.
    NotApplicable,
    /// The criterion is deprecated and no longer evaluated.
    Deprecated,
}

/// Result for one criterion of one evaluation.  Never mutated after
/// creation.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct CriterionResult {
    /// The evaluated criterion.
    pub name: Criterion,
    /// Outcome of the evaluation.
    pub prediction: Prediction,
    /// Human-readable explanation of the decision taken.
    pub summary: String,
    /// Definition of the criterion or, for PVS1, the decision path.
    pub description: String,
}

impl CriterionResult {
    /// Construct a met result.
    pub fn positive(name: Criterion, summary: &str) -> Self {
        Self {
            name,
            prediction: Prediction::Positive,
            summary: summary.to_string(),
            description: name.definition().to_string(),
        }
    }

    /// Construct a not-met result.
    pub fn negative(name: Criterion, summary: &str) -> Self {
        Self {
            name,
            prediction: Prediction::Negative,
            summary: summary.to_string(),
            description: name.definition().to_string(),
        }
    }

    /// Construct a result for a criterion that cannot be evaluated from
    /// the available facts.
    pub fn not_automated(name: Criterion, summary: &str) -> Self {
        Self {
            name,
            prediction: Prediction::NotAutomated,
            summary: summary.to_string(),
            description: name.definition().to_string(),
        }
    }

    /// Construct a result for a criterion that does not apply.
    pub fn not_applicable(name: Criterion, summary: &str) -> Self {
        Self {
            name,
            prediction: Prediction::NotApplicable,
            summary: summary.to_string(),
            description: name.definition().to_string(),
        }
    }

    /// Construct a result for a deprecated criterion.
    pub fn deprecated(name: Criterion) -> Self {
        Self {
            name,
            prediction: Prediction::Deprecated,
            summary: "criterion is deprecated and not predicted".to_string(),
            description: name.definition().to_string(),
        }
    }
}
