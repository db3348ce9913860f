//! Gene and transcript context as supplied by the annotation layer.
//!
//! The context is read-only for the core; everything in here comes out of
//! the transcript database (exon tables, CDS boundaries) or precomputed
//! population summaries (per-exon LoF counts, curated critical regions).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Genomic strand of a transcript alignment.
#[derive(
    Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy, Default, strum::Display,
)]
pub enum GenomicStrand {
    /// Forward strand.
    #[default]
    Plus,
    /// Reverse strand.
    Minus,
}

/// One exon of a transcript alignment.
///
/// All coordinates are 1-based inclusive genomic positions.  The
/// `alt_cds_*` pair is the exon interval clipped to the coding sequence;
/// for a fully non-coding exon the clipped interval is empty
/// (`alt_cds_end_i < alt_cds_start_i`).
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
pub struct Exon {
    /// Genomic start of the exon.
    pub alt_start_i: i32,
    /// Genomic end of the exon.
    pub alt_end_i: i32,
    /// Genomic start of the coding part of the exon.
    pub alt_cds_start_i: i32,
    /// Genomic end of the coding part of the exon.
    pub alt_cds_end_i: i32,
}

impl Exon {
    /// Length of the coding part of the exon in bases.
    pub fn coding_len(&self) -> i32 {
        (self.alt_cds_end_i - self.alt_cds_start_i + 1).max(0)
    }

    /// Whether `pos` falls into the exon.
    pub fn contains(&self, pos: i32) -> bool {
        self.alt_start_i <= pos && pos <= self.alt_end_i
    }
}

/// Coding sequence information of one transcript.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
pub struct CdsInfo {
    /// Position of the start codon in the transcript.
    pub start_codon: i32,
    /// Position of the stop codon in the transcript.
    pub stop_codon: i32,
    /// Genomic start of the coding sequence.
    pub cds_start: i32,
    /// Genomic end of the coding sequence.
    pub cds_end: i32,
    /// Strand of the transcript alignment.
    pub strand: GenomicStrand,
}

/// Observed loss-of-function variant counts for one exon, from population
/// sequencing data.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy, Default)]
pub struct LofFrequency {
    /// LoF variants whose population frequency exceeds the "frequent"
    /// cutoff (0.1% allele frequency).
    pub frequent: u32,
    /// All LoF variants observed in the exon.
    pub total: u32,
}

impl LofFrequency {
    /// Fraction of observed LoF variants that are frequent.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            f64::from(self.frequent) / f64::from(self.total)
        }
    }
}

/// Gene and transcript context for one evaluation.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Default)]
#[serde(default)]
pub struct GeneContext {
    /// HGNC gene symbol, e.g., `PAH`.
    pub gene_symbol: String,
    /// HGNC identifier, e.g., `HGNC:8582`.
    pub hgnc_id: String,
    /// Strand of the main transcript alignment.
    pub strand: GenomicStrand,
    /// Ordered exon table of the main transcript.
    pub exons: Vec<Exon>,
    /// Transcripts considered biologically relevant (MANE Select etc.).
    pub relevant_transcripts: Vec<String>,
    /// Per-exon LoF frequency table, parallel to `exons`.  `None` when the
    /// population summary is not available.
    pub exon_lof_frequencies: Option<Vec<LofFrequency>>,
    /// Curated intervals critical for protein function, 1-based inclusive.
    pub critical_regions: Vec<(i32, i32)>,
    /// Known alternative start codon positions in other transcripts.
    pub alt_start_codons: Vec<i32>,
    /// Coding sequence information of all transcripts of the gene.
    pub cds_info: IndexMap<String, CdsInfo>,
}

impl GeneContext {
    /// Whether the given transcript is biologically relevant.
    pub fn is_relevant_transcript(&self, transcript_id: &str) -> bool {
        self.relevant_transcripts
            .iter()
            .any(|tx| tx == transcript_id)
    }

    /// Index of the exon containing `pos`, if any.
    pub fn find_exon(&self, pos: i32) -> Option<usize> {
        self.exons.iter().position(|exon| exon.contains(pos))
    }

    /// Index of the exon whose padded interval contains `pos`.
    ///
    /// Used for splice variants that sit in the intron next to the exon
    /// they affect.
    pub fn find_exon_with_slack(&self, pos: i32, upstream: i32, downstream: i32) -> Option<usize> {
        self.exons.iter().position(|exon| {
            exon.alt_start_i - upstream <= pos && pos <= exon.alt_end_i + downstream
        })
    }

    /// Genomic span from the first to the last exon.
    pub fn exon_span(&self) -> Option<(i32, i32)> {
        match (self.exons.first(), self.exons.last()) {
            (Some(first), Some(last)) => Some((first.alt_start_i, last.alt_end_i)),
            _ => None,
        }
    }

    /// Whether `[start, stop]` overlaps any curated critical region.
    pub fn overlaps_critical_region(&self, start: i32, stop: i32) -> bool {
        self.critical_regions
            .iter()
            .any(|(region_start, region_stop)| start <= *region_stop && stop >= *region_start)
    }

    /// Closest alternative start codon used by another transcript on the
    /// same strand, derived from the per-transcript CDS table.
    pub fn closest_alt_start_codon(&self, transcript_id: &str) -> Option<i32> {
        let main = self.cds_info.get(transcript_id)?;
        let main_start = match main.strand {
            GenomicStrand::Plus => main.cds_start,
            GenomicStrand::Minus => main.cds_end,
        };
        let mut closest: Option<i32> = None;
        for (tx_id, info) in &self.cds_info {
            if tx_id == transcript_id || info.strand != main.strand {
                continue;
            }
            let alt_start = match info.strand {
                GenomicStrand::Plus => info.cds_start,
                GenomicStrand::Minus => info.cds_end,
            };
            if alt_start != main_start
                && closest.map_or(true, |current| (alt_start - main_start) < (current - main_start))
            {
                closest = Some(alt_start);
            }
        }
        closest
    }
}
