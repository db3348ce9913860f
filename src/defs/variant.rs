//! Representation of resolved variants.
//!
//! Variants arrive here fully resolved by the upstream annotation layer
//! (HGVS parsing, liftover etc. happen there).  They are immutable for the
//! whole evaluation.

use serde::{Deserialize, Serialize};

/// A resolved sequence variant (SNV or small indel) on one transcript.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
pub struct SequenceVariant {
    /// Chromosome name without `chr` prefix.
    pub chrom: String,
    /// 1-based genomic position.
    pub pos: i32,
    /// Reference bases.
    pub reference: String,
    /// Alternative bases.
    pub alternative: String,
    /// Transcript the annotation facts refer to.
    pub transcript_id: String,
}

impl std::fmt::Display for SequenceVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}>{}",
            self.chrom, self.pos, self.reference, self.alternative
        )
    }
}

/// Type of a structural variant.
#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Debug,
    Clone,
    Copy,
    Default,
    strum::Display,
    strum::EnumString,
)]
pub enum SvType {
    /// Deletion
    #[default]
    Del,
    /// Duplication
    Dup,
}

/// Curation state of the "inserted in tandem" question for duplications.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy, Default, strum::Display)]
pub enum TandemStatus {
    /// Breakpoint analysis proved the copy sits next to the original.
    Proven,
    /// In-tandem insertion is presumed but not proven.
    Presumed,
    /// The duplication is proven not in tandem, or nothing is known.
    #[default]
    DisprovenOrUnknown,
}

/// A resolved structural variant affecting one or more transcripts.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
pub struct StructuralVariant {
    /// The type of the structural variant.
    pub sv_type: SvType,
    /// Chromosome name without `chr` prefix.
    pub chrom: String,
    /// 1-based start position.
    pub start: i32,
    /// 1-based inclusive stop position.
    pub stop: i32,
    /// Transcripts overlapping the variant.
    pub transcript_ids: Vec<String>,
    /// Tandem curation state, only meaningful for duplications.
    pub tandem_status: TandemStatus,
}

impl std::fmt::Display for StructuralVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}-{}",
            self.sv_type, self.chrom, self.start, self.stop
        )
    }
}

/// Either kind of resolved variant.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub enum Variant {
    /// A sequence variant.
    Seqvar(SequenceVariant),
    /// A structural variant.
    Strucvar(StructuralVariant),
}
