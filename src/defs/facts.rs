//! Per-variant fact bundle from the external annotation services.
//!
//! Everything in here is plain data handed to the core by the caller; the
//! core itself never talks to annonars, mehari, or any other service.
//! Each fact is optional so a gap in one data source only downgrades the
//! criteria that actually need it.

use serde::{Deserialize, Serialize};

/// ClinVar assertion counts over a genomic range.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy, Default)]
pub struct ClinvarCounts {
    /// Variants asserted pathogenic or likely pathogenic.
    pub pathogenic: u32,
    /// All variants with ClinVar records in the range.
    pub total: u32,
}

impl ClinvarCounts {
    /// Fraction of range variants asserted (likely) pathogenic.
    pub fn pathogenic_fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            f64::from(self.pathogenic) / f64::from(self.total)
        }
    }
}

/// Missense variant counts over the gene's coding region.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy, Default)]
pub struct MissenseCounts {
    /// Missense variants asserted (likely) pathogenic.
    pub pathogenic: u32,
    /// Missense variants asserted (likely) benign.
    pub benign: u32,
    /// All missense variants with assertions.
    pub total: u32,
}

/// In-silico scores of the variant.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Copy, Default)]
#[serde(default)]
pub struct Scores {
    /// REVEL missense pathogenicity score.
    pub revel: Option<f64>,
    /// phyloP 100-way vertebrate conservation.
    pub phylop100: Option<f64>,
    /// SpliceAI acceptor gain delta score.
    pub spliceai_acceptor_gain: Option<f64>,
    /// SpliceAI acceptor loss delta score.
    pub spliceai_acceptor_loss: Option<f64>,
    /// SpliceAI donor gain delta score.
    pub spliceai_donor_gain: Option<f64>,
    /// SpliceAI donor loss delta score.
    pub spliceai_donor_loss: Option<f64>,
}

impl Scores {
    /// The maximal SpliceAI delta score, if any is available.
    pub fn spliceai_max(&self) -> Option<f64> {
        [
            self.spliceai_acceptor_gain,
            self.spliceai_acceptor_loss,
            self.spliceai_donor_gain,
            self.spliceai_donor_loss,
        ]
        .iter()
        .flatten()
        .copied()
        .fold(None, |acc, score| {
            Some(acc.map_or(score, |max: f64| max.max(score)))
        })
    }
}

/// All external facts about one variant.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Default)]
#[serde(default)]
pub struct VariantFacts {
    /// Molecular consequence terms from the transcript annotation.
    pub consequences: Vec<String>,
    /// Position of the new stop codon in the transcript, including the
    /// 5' UTR length.
    pub tx_pos: Option<i32>,
    /// Position of the variant in the protein.
    pub prot_pos: Option<i32>,
    /// Length of the protein.
    pub prot_length: Option<i32>,
    /// Whether an external splicing prediction found a frame-shifting
    /// cryptic splice site for this variant.
    pub cryptic_splice_frameshift: Option<bool>,
    /// ClinVar counts over the altered/downstream region.
    pub clinvar_range: Option<ClinvarCounts>,
    /// ClinVar counts within +/-25 bp of the variant.
    pub clinvar_window: Option<ClinvarCounts>,
    /// ClinVar counts within the UniProt domain containing the variant.
    pub clinvar_domain: Option<ClinvarCounts>,
    /// ClinVar counts upstream of the closest in-frame start codon.
    pub clinvar_upstream: Option<ClinvarCounts>,
    /// gnomAD popmax allele frequency.
    pub gnomad_af: Option<f64>,
    /// Number of homozygous alternative carriers in gnomAD.
    pub gnomad_nhomalt: Option<u32>,
    /// Whether the variant lies in a repeat region.
    pub in_repeat_region: Option<bool>,
    /// Whether the variant lies in a well-established conserved domain.
    pub in_conserved_domain: Option<bool>,
    /// Missense assertion counts for the gene.
    pub missense_counts: Option<MissenseCounts>,
    /// A variant causing the same amino acid change is asserted
    /// pathogenic.
    pub same_aa_change_pathogenic: Option<bool>,
    /// A different missense change at the same residue is asserted
    /// pathogenic.
    pub other_aa_change_pathogenic: Option<bool>,
    /// In-silico scores.
    pub scores: Scores,
}

/// Numeric cutoffs of the default rule set.
///
/// Panels evaluate with adjusted copies; the values here are the published
/// general-population defaults.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Copy)]
#[serde(default)]
pub struct Thresholds {
    /// Allele frequency above which BA1 applies.
    pub ba1_benign: f64,
    /// Allele frequency above which BS1 applies.
    pub bs1_benign: f64,
    /// Allele frequency below which PM2 applies.
    pub pm2_pathogenic: f64,
    /// Fraction of frequent LoF variants above which LoF counts as
    /// frequent in the general population.
    pub lof_frequent_ratio: f64,
    /// Pathogenic fraction of range variants above which a region counts
    /// as critical for protein function.
    pub pathogenic_density: f64,
    /// Fraction of the protein above which a truncation is graded
    /// stronger.
    pub protein_fraction: f64,
    /// Pathogenic missense ratio above which PP2 applies.
    pub pp2_pathogenic_ratio: f64,
    /// Benign missense ratio above which BP1 applies.
    pub bp1_benign_ratio: f64,
    /// In-silico score above which PP3 applies.
    pub score_pathogenic: f64,
    /// In-silico score below which BP4 applies.
    pub score_benign: f64,
    /// Maximal SpliceAI delta score still compatible with BP7.
    pub bp7_spliceai: f64,
    /// Pathogenic variants within +/-25 bp required for PM1.
    pub pm1_window_count: u32,
    /// Pathogenic variants within the UniProt domain required for PM1.
    pub pm1_domain_count: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            ba1_benign: 0.05,
            bs1_benign: 0.01,
            pm2_pathogenic: 0.0001,
            lof_frequent_ratio: 0.1,
            pathogenic_density: 0.05,
            protein_fraction: 0.1,
            pp2_pathogenic_ratio: 0.808,
            bp1_benign_ratio: 0.569,
            score_pathogenic: 0.8,
            score_benign: 0.2,
            bp7_spliceai: 0.1,
            pm1_window_count: 4,
            pm1_domain_count: 2,
        }
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[rstest::rstest]
    #[case(0, 0, 0.0)]
    #[case(1, 20, 0.05)]
    #[case(3, 4, 0.75)]
    fn clinvar_pathogenic_fraction(
        #[case] pathogenic: u32,
        #[case] total: u32,
        #[case] expected: f64,
    ) {
        let counts = ClinvarCounts { pathogenic, total };
        assert!((counts.pathogenic_fraction() - expected).abs() < 1e-9);
    }

    #[test]
    fn spliceai_max() {
        assert_eq!(None, Scores::default().spliceai_max());

        let scores = Scores {
            spliceai_acceptor_gain: Some(0.1),
            spliceai_donor_loss: Some(0.7),
            ..Default::default()
        };
        assert_eq!(Some(0.7), scores.spliceai_max());
    }

    #[test]
    fn facts_deserialize_with_defaults() -> Result<(), anyhow::Error> {
        let facts: VariantFacts = serde_json::from_str("{}")?;
        assert_eq!(VariantFacts::default(), facts);

        let facts: VariantFacts =
            serde_json::from_str(r#"{"consequences": ["stop_gained"], "prot_pos": 383}"#)?;
        assert_eq!(vec!["stop_gained".to_string()], facts.consequences);
        assert_eq!(Some(383), facts.prot_pos);

        Ok(())
    }

    #[test]
    fn default_thresholds() {
        let thresholds = Thresholds::default();
        assert!((thresholds.ba1_benign - 0.05).abs() < 1e-9);
        assert!((thresholds.pm2_pathogenic - 0.0001).abs() < 1e-9);
        assert_eq!(4, thresholds.pm1_window_count);
    }
}
