//! Criterion predictor registry and gene panel dispatch.
//!
//! A `Predictor` is composition, not inheritance: the default rule set
//! plus a sparse map of per-criterion override functions.  Dispatch falls
//! through to the default rules whenever no override is registered for a
//! criterion, so panels only carry what they actually change.

pub mod panels;

use indexmap::IndexMap;

use crate::defs::criteria::{Criterion, CriterionResult};
use crate::defs::facts::{Thresholds, VariantFacts};
use crate::defs::gene::GeneContext;
use crate::defs::pvs1::{PathCode, Pvs1Strength};
use crate::defs::variant::Variant;
use crate::err::Error;

/// Immutable bundle of everything one evaluation needs.
#[derive(Debug, Clone, Copy)]
pub struct EvalInput<'a> {
    /// The resolved variant.
    pub variant: &'a Variant,
    /// Gene and transcript context.
    pub ctx: &'a GeneContext,
    /// External facts about the variant.
    pub facts: &'a VariantFacts,
}

/// Gene curation panels with registered predictors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Panel {
    #[strum(serialize = "default")]
    Default,
    #[strum(serialize = "pku")]
    Pku,
    #[strum(serialize = "pten")]
    Pten,
    #[strum(serialize = "hearing-loss")]
    HearingLoss,
    #[strum(serialize = "cardiomyopathy")]
    Cardiomyopathy,
    #[strum(serialize = "rasopathy")]
    Rasopathy,
    #[strum(serialize = "congenital-myopathies")]
    CongenitalMyopathies,
    #[strum(serialize = "malignant-hyperthermia")]
    MalignantHyperthermia,
}

/// Replacement rule for one criterion of one panel.
pub type CriterionOverride = fn(&EvalInput<'_>, &Thresholds) -> CriterionResult;

/// A criterion predictor.
#[derive(Debug, Clone)]
pub struct Predictor {
    /// The panel this predictor belongs to.
    pub panel: Panel,
    /// Numeric cutoffs used by the rules; panels may adjust them.
    pub thresholds: Thresholds,
    /// Per-criterion replacement rules.
    overrides: IndexMap<Criterion, CriterionOverride>,
}

impl Predictor {
    /// The default predictor: published thresholds, no overrides.
    pub fn default_rules() -> Self {
        Self {
            panel: Panel::Default,
            thresholds: Thresholds::default(),
            overrides: IndexMap::new(),
        }
    }

    /// A panel predictor with adjusted thresholds and override rules.
    pub fn with_overrides(
        panel: Panel,
        thresholds: Thresholds,
        overrides: Vec<(Criterion, CriterionOverride)>,
    ) -> Self {
        Self {
            panel,
            thresholds,
            overrides: overrides.into_iter().collect(),
        }
    }

    /// Evaluate all criteria for the input, in stable report order.
    ///
    /// Overrides replace the default result of their criterion; every
    /// other criterion falls through to the default rules.
    pub fn evaluate_all(&self, input: &EvalInput<'_>) -> Vec<CriterionResult> {
        let mut results = match input.variant {
            Variant::Seqvar(seqvar) => crate::seqvars::criteria::predict_all(
                seqvar,
                input.ctx,
                input.facts,
                &self.thresholds,
            ),
            Variant::Strucvar(strucvar) => crate::strucvars::criteria::predict_all(
                strucvar,
                input.ctx,
                input.facts,
                &self.thresholds,
            ),
        };
        for (criterion, rule) in &self.overrides {
            let replacement = rule(input, &self.thresholds);
            if let Some(slot) = results.iter_mut().find(|result| result.name == *criterion) {
                *slot = replacement;
            }
        }
        results
    }
}

/// Evaluate the PVS1 decision tree for a variant with default thresholds.
pub fn evaluate_pvs1(
    variant: &Variant,
    ctx: &GeneContext,
    facts: &VariantFacts,
) -> Result<(PathCode, Pvs1Strength), Error> {
    let thresholds = Thresholds::default();
    match variant {
        Variant::Seqvar(seqvar) => crate::seqvars::pvs1::evaluate(seqvar, ctx, facts, &thresholds),
        Variant::Strucvar(strucvar) => {
            crate::strucvars::pvs1::evaluate(strucvar, ctx, facts, &thresholds)
        }
    }
}

/// Registry of gene symbol to predictor bindings.
///
/// Built once at startup and read-only afterwards; unregistered genes
/// resolve to the default predictor.
#[derive(Debug, Clone)]
pub struct Registry {
    default: Predictor,
    bindings: IndexMap<String, Predictor>,
}

impl Registry {
    /// Build the registry from the static panel gene lists.
    ///
    /// Duplicate gene claims are a configuration error, with one
    /// documented exception: RYR1 is claimed by both the
    /// congenital-myopathies and the malignant-hyperthermia panel, and
    /// the malignant-hyperthermia panel wins.
    pub fn new() -> Result<Self, Error> {
        let mut bindings: IndexMap<String, Predictor> = IndexMap::new();
        for (predictor, genes) in panels::all() {
            for gene in genes {
                match bindings.get(*gene).map(|existing| existing.panel) {
                    None => {
                        bindings.insert((*gene).to_string(), predictor.clone());
                    }
                    Some(Panel::CongenitalMyopathies)
                        if predictor.panel == Panel::MalignantHyperthermia =>
                    {
                        tracing::debug!(
                            "gene {} claimed by two panels, preferring {}",
                            gene,
                            predictor.panel
                        );
                        bindings.insert((*gene).to_string(), predictor.clone());
                    }
                    Some(Panel::MalignantHyperthermia)
                        if predictor.panel == Panel::CongenitalMyopathies =>
                    {
                        tracing::debug!(
                            "gene {} claimed by two panels, keeping {}",
                            gene,
                            Panel::MalignantHyperthermia
                        );
                    }
                    Some(existing_panel) => {
                        return Err(Error::Configuration(format!(
                            "gene {} is claimed by panels {} and {}",
                            gene, existing_panel, predictor.panel
                        )));
                    }
                }
            }
        }
        Ok(Self {
            default: Predictor::default_rules(),
            bindings,
        })
    }

    /// Resolve the predictor for a gene symbol.
    pub fn resolve(&self, gene_symbol: &str) -> &Predictor {
        self.bindings.get(gene_symbol).unwrap_or(&self.default)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use crate::defs::criteria::{Criterion, Prediction};
    use crate::defs::facts::VariantFacts;
    use crate::defs::gene::{Exon, GeneContext};
    use crate::defs::pvs1::{PathCode, Pvs1Strength};
    use crate::defs::variant::{SequenceVariant, StructuralVariant, SvType, Variant};

    use super::{EvalInput, Panel, Registry};

    fn pah_context() -> GeneContext {
        GeneContext {
            gene_symbol: "PAH".into(),
            hgnc_id: "HGNC:8582".into(),
            exons: vec![
                Exon {
                    alt_start_i: 100,
                    alt_end_i: 200,
                    alt_cds_start_i: 150,
                    alt_cds_end_i: 200,
                },
                Exon {
                    alt_start_i: 300,
                    alt_end_i: 400,
                    alt_cds_start_i: 300,
                    alt_cds_end_i: 400,
                },
                Exon {
                    alt_start_i: 500,
                    alt_end_i: 700,
                    alt_cds_start_i: 500,
                    alt_cds_end_i: 650,
                },
            ],
            relevant_transcripts: vec!["NM_000277.3".into()],
            ..Default::default()
        }
    }

    fn pah_variant() -> Variant {
        Variant::Seqvar(SequenceVariant {
            chrom: "12".into(),
            pos: 350,
            reference: "C".into(),
            alternative: "T".into(),
            transcript_id: "NM_000277.3".into(),
        })
    }

    #[test]
    fn registry_builds_without_conflicts() -> Result<(), anyhow::Error> {
        let _ = Registry::new()?;

        Ok(())
    }

    #[rstest::rstest]
    #[case("TTN", Panel::Default)]
    #[case("PAH", Panel::Pku)]
    #[case("PTEN", Panel::Pten)]
    #[case("GJB2", Panel::HearingLoss)]
    #[case("MYH7", Panel::Cardiomyopathy)]
    #[case("PTPN11", Panel::Rasopathy)]
    #[case("NEB", Panel::CongenitalMyopathies)]
    fn registry_resolution(
        #[case] gene: &str,
        #[case] expected: Panel,
    ) -> Result<(), anyhow::Error> {
        let registry = Registry::new()?;
        assert_eq!(expected, registry.resolve(gene).panel);

        Ok(())
    }

    #[test]
    fn ryr1_conflict_prefers_malignant_hyperthermia() -> Result<(), anyhow::Error> {
        let registry = Registry::new()?;
        assert_eq!(
            Panel::MalignantHyperthermia,
            registry.resolve("RYR1").panel
        );

        Ok(())
    }

    #[test]
    fn resolution_is_stable_across_calls() -> Result<(), anyhow::Error> {
        let registry = Registry::new()?;
        assert_eq!(
            registry.resolve("PAH").panel,
            registry.resolve("PAH").panel
        );
        assert_eq!(Panel::Default, registry.resolve("UNKNOWN").panel);

        Ok(())
    }

    #[test]
    fn evaluate_pvs1_dispatches_by_variant_kind() -> Result<(), anyhow::Error> {
        let facts = VariantFacts {
            consequences: vec!["stop_gained".into()],
            tx_pos: Some(80),
            prot_pos: Some(383),
            prot_length: Some(452),
            ..Default::default()
        };
        let (path, strength) = super::evaluate_pvs1(&pah_variant(), &pah_context(), &facts)?;
        assert_eq!((PathCode::Nf1, Pvs1Strength::Pvs1), (path, strength));

        let strucvar = Variant::Strucvar(StructuralVariant {
            sv_type: SvType::Del,
            chrom: "12".into(),
            start: 1,
            stop: 10_000,
            ..Default::default()
        });
        let (path, strength) =
            super::evaluate_pvs1(&strucvar, &pah_context(), &VariantFacts::default())?;
        assert_eq!((PathCode::Del1, Pvs1Strength::Pvs1), (path, strength));

        Ok(())
    }

    #[test]
    fn evaluate_all_returns_stable_order_for_every_panel() -> Result<(), anyhow::Error> {
        let registry = Registry::new()?;
        let variant = pah_variant();
        let ctx = pah_context();
        let facts = VariantFacts {
            consequences: vec!["missense_variant".into()],
            prot_pos: Some(138),
            ..Default::default()
        };
        let input = EvalInput {
            variant: &variant,
            ctx: &ctx,
            facts: &facts,
        };
        for predictor in [registry.resolve("PAH"), registry.resolve("TTN")] {
            let results = predictor.evaluate_all(&input);
            let expected: Vec<_> = Criterion::iter().collect();
            let actual: Vec<_> = results.iter().map(|result| result.name).collect();
            assert_eq!(expected, actual, "panel = {}", predictor.panel);
        }

        Ok(())
    }

    #[test]
    fn pku_panel_overrides_pm1() -> Result<(), anyhow::Error> {
        let registry = Registry::new()?;
        let variant = pah_variant();
        let ctx = pah_context();
        let facts = VariantFacts {
            consequences: vec!["missense_variant".into()],
            prot_pos: Some(138),
            ..Default::default()
        };
        let input = EvalInput {
            variant: &variant,
            ctx: &ctx,
            facts: &facts,
        };

        let results = registry.resolve("PAH").evaluate_all(&input);
        let pm1 = results
            .iter()
            .find(|result| result.name == Criterion::Pm1)
            .expect("PM1 must be in the result list");
        assert_eq!(Prediction::Positive, pm1.prediction);

        // The default predictor has no ClinVar window counts and cannot
        // automate PM1 here.
        let results = registry.resolve("TTN").evaluate_all(&input);
        let pm1 = results
            .iter()
            .find(|result| result.name == Criterion::Pm1)
            .expect("PM1 must be in the result list");
        assert_eq!(Prediction::NotAutomated, pm1.prediction);

        Ok(())
    }

    #[test]
    fn evaluation_is_idempotent_across_predictor_calls() -> Result<(), anyhow::Error> {
        let registry = Registry::new()?;
        let variant = pah_variant();
        let ctx = pah_context();
        let facts = VariantFacts {
            consequences: vec!["stop_gained".into()],
            tx_pos: Some(80),
            prot_pos: Some(383),
            prot_length: Some(452),
            ..Default::default()
        };
        let input = EvalInput {
            variant: &variant,
            ctx: &ctx,
            facts: &facts,
        };
        let predictor = registry.resolve("PAH");
        assert_eq!(predictor.evaluate_all(&input), predictor.evaluate_all(&input));

        Ok(())
    }

    #[test]
    fn rasopathy_thresholds_are_tightened() -> Result<(), anyhow::Error> {
        let registry = Registry::new()?;
        let predictor = registry.resolve("PTPN11");
        assert!(predictor.thresholds.ba1_benign < 0.05);
        assert!(predictor.thresholds.bs1_benign < 0.01);

        Ok(())
    }
}
