//! PVS1 path codes and evidence strength grading.

/// Molecular consequence category that selects the decision tree entry
/// point.  Derived from the annotation, never stored.
#[derive(PartialEq, Eq, Debug, Clone, Copy, strum::Display)]
pub enum ConsequenceCategory {
    /// Nonsense or frameshift variant.
    NonsenseOrFrameshift,
    /// Variant at a canonical splice donor/acceptor site or with a
    /// documented cryptic splice prediction.
    SpliceDonorAcceptor,
    /// Variant disrupting the annotated initiation codon.
    InitiationCodonLoss,
    /// Deletion covering the whole transcript span.
    FullGeneDeletion,
    /// Deletion covering one or more complete exons.
    PartialExonDeletion,
    /// Duplication event.
    TandemDuplication,
    /// Recognized consequence outside the scope of the tree (missense
    /// etc.).
    Unsupported,
}

/// Evidence strength grade produced by the PVS1 evaluation.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default, strum::Display)]
pub enum Pvs1Strength {
    /// Pre-evaluation sentinel; never part of a final result.
    #[default]
    #[strum(serialize = "NotSet")]
    NotSet,
    /// Very strong evidence of pathogenicity.
    #[strum(serialize = "PVS1")]
    Pvs1,
    /// Strong evidence of pathogenicity.
    #[strum(serialize = "PVS1_Strong")]
    Pvs1Strong,
    /// Moderate evidence of pathogenicity.
    #[strum(serialize = "PVS1_Moderate")]
    Pvs1Moderate,
    /// Supporting evidence of pathogenicity.
    #[strum(serialize = "PVS1_Supporting")]
    Pvs1Supporting,
    /// The criterion is not met.
    #[strum(serialize = "NotPVS1")]
    NotPvs1,
    /// The consequence is outside the scope of the criterion.
    #[strum(serialize = "UnsupportedConsequence")]
    UnsupportedConsequence,
}

impl Pvs1Strength {
    /// Whether the grade counts as evidence in favor of pathogenicity.
    pub fn is_positive(&self) -> bool {
        matches!(
            self,
            Pvs1Strength::Pvs1
                | Pvs1Strength::Pvs1Strong
                | Pvs1Strength::Pvs1Moderate
                | Pvs1Strength::Pvs1Supporting
        )
    }
}

/// Terminal branch of the published PVS1 decision trees.
///
/// `NF*`/`SS*`/`IC*` are the sequence variant paths, `DEL*`/`DUP*` the
/// structural variant paths, `PTEN` the gene-specific special path.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default, strum::Display, strum::EnumIter)]
pub enum PathCode {
    /// Pre-evaluation sentinel.
    #[default]
    #[strum(serialize = "NotSet")]
    NotSet,
    #[strum(serialize = "PTEN")]
    Pten,
    #[strum(serialize = "NF1")]
    Nf1,
    #[strum(serialize = "NF2")]
    Nf2,
    #[strum(serialize = "NF3")]
    Nf3,
    #[strum(serialize = "NF4")]
    Nf4,
    #[strum(serialize = "NF5")]
    Nf5,
    #[strum(serialize = "NF6")]
    Nf6,
    #[strum(serialize = "SS1")]
    Ss1,
    #[strum(serialize = "SS2")]
    Ss2,
    #[strum(serialize = "SS3")]
    Ss3,
    #[strum(serialize = "SS4")]
    Ss4,
    #[strum(serialize = "SS5")]
    Ss5,
    #[strum(serialize = "SS6")]
    Ss6,
    #[strum(serialize = "SS7")]
    Ss7,
    #[strum(serialize = "SS8")]
    Ss8,
    #[strum(serialize = "SS9")]
    Ss9,
    #[strum(serialize = "SS10")]
    Ss10,
    #[strum(serialize = "IC1")]
    Ic1,
    #[strum(serialize = "IC2")]
    Ic2,
    #[strum(serialize = "IC3")]
    Ic3,
    #[strum(serialize = "DEL1")]
    Del1,
    #[strum(serialize = "DEL2")]
    Del2,
    #[strum(serialize = "DEL3")]
    Del3,
    #[strum(serialize = "DEL4")]
    Del4,
    #[strum(serialize = "DEL5_1")]
    Del5_1,
    #[strum(serialize = "DEL6_1")]
    Del6_1,
    #[strum(serialize = "DEL7_1")]
    Del7_1,
    #[strum(serialize = "DEL5_2")]
    Del5_2,
    #[strum(serialize = "DEL6_2")]
    Del6_2,
    #[strum(serialize = "DEL7_2")]
    Del7_2,
    #[strum(serialize = "DEL8")]
    Del8,
    #[strum(serialize = "DUP1")]
    Dup1,
    #[strum(serialize = "DUP2_1")]
    Dup2_1,
    #[strum(serialize = "DUP2_2")]
    Dup2_2,
    #[strum(serialize = "DUP3")]
    Dup3,
    #[strum(serialize = "DUP4")]
    Dup4,
}

impl PathCode {
    /// Evidence strength of each terminal path.
    ///
    /// This table is the single source of truth for grading; the trees
    /// only pick paths.  The match is exhaustive so a new path code
    /// without a grade fails to compile.
    pub fn strength(&self) -> Pvs1Strength {
        match self {
            PathCode::NotSet => Pvs1Strength::NotSet,
            PathCode::Pten => Pvs1Strength::Pvs1,
            PathCode::Nf1 => Pvs1Strength::Pvs1,
            PathCode::Nf2 => Pvs1Strength::NotPvs1,
            PathCode::Nf3 => Pvs1Strength::Pvs1Strong,
            PathCode::Nf4 => Pvs1Strength::NotPvs1,
            PathCode::Nf5 => Pvs1Strength::Pvs1Strong,
            PathCode::Nf6 => Pvs1Strength::Pvs1Moderate,
            PathCode::Ss1 => Pvs1Strength::Pvs1,
            PathCode::Ss2 => Pvs1Strength::NotPvs1,
            PathCode::Ss3 => Pvs1Strength::Pvs1Strong,
            PathCode::Ss4 => Pvs1Strength::NotPvs1,
            PathCode::Ss5 => Pvs1Strength::Pvs1Strong,
            PathCode::Ss6 => Pvs1Strength::Pvs1Moderate,
            PathCode::Ss7 => Pvs1Strength::NotPvs1,
            PathCode::Ss8 => Pvs1Strength::Pvs1Strong,
            PathCode::Ss9 => Pvs1Strength::Pvs1Moderate,
            PathCode::Ss10 => Pvs1Strength::Pvs1Strong,
            PathCode::Ic1 => Pvs1Strength::Pvs1Moderate,
            PathCode::Ic2 => Pvs1Strength::Pvs1Supporting,
            PathCode::Ic3 => Pvs1Strength::NotPvs1,
            PathCode::Del1 => Pvs1Strength::Pvs1,
            PathCode::Del2 => Pvs1Strength::Pvs1,
            PathCode::Del3 => Pvs1Strength::NotPvs1,
            PathCode::Del4 => Pvs1Strength::Pvs1Strong,
            PathCode::Del5_1 => Pvs1Strength::NotPvs1,
            PathCode::Del6_1 => Pvs1Strength::Pvs1Strong,
            PathCode::Del7_1 => Pvs1Strength::Pvs1Moderate,
            PathCode::Del5_2 => Pvs1Strength::NotPvs1,
            PathCode::Del6_2 => Pvs1Strength::Pvs1Strong,
            PathCode::Del7_2 => Pvs1Strength::Pvs1Moderate,
            PathCode::Del8 => Pvs1Strength::Pvs1Strong,
            PathCode::Dup1 => Pvs1Strength::Pvs1,
            PathCode::Dup2_1 => Pvs1Strength::NotPvs1,
            PathCode::Dup2_2 => Pvs1Strength::NotPvs1,
            PathCode::Dup3 => Pvs1Strength::Pvs1Strong,
            PathCode::Dup4 => Pvs1Strength::NotPvs1,
        }
    }

    /// Published wording of the decision path, for audit trails.
    pub fn description(&self) -> &'static str {
        match self {
            PathCode::NotSet => "Not Set",
            PathCode::Pten => "Special guideline for PTEN -> Predicted to undergo NMD",
            PathCode::Nf1 => {
                "Predicted to undergo NMD -> Exon is present in biologically-relevant transcript(s)"
            }
            PathCode::Nf2 => {
                "Predicted to undergo NMD -> Exon is absent from biologically-relevant transcript(s)"
            }
            PathCode::Nf3 => {
                "Not predicted to undergo NMD -> \
                 Truncated/altered region is critical to protein function"
            }
            PathCode::Nf4 => {
                "Not predicted to undergo NMD -> \
                 Role of region in protein function is unknown -> \
                 LoF variants in this exon are frequent in the general population and/or \
                 exon is absent from biologically-relevant transcript(s)"
            }
            PathCode::Nf5 => {
                "Not predicted to undergo NMD -> \
                 Role of region in protein function is unknown -> \
                 LoF variants in this exon are not frequent in the general population and \
                 exon is present in biologically-relevant transcript(s) -> \
                 Variant removes >10% of protein"
            }
            PathCode::Nf6 => {
                "Not predicted to undergo NMD -> \
                 Role of region in protein function is unknown -> \
                 LoF variants in this exon are not frequent in the general population and \
                 exon is present in biologically-relevant transcript(s) -> \
                 Variant removes <10% of protein"
            }
            PathCode::Ss1 => {
                "Exon skipping or use of a cryptic splice site disrupts reading frame and \
                 is predicted to undergo NMD -> \
                 Exon is present in biologically-relevant transcript(s)"
            }
            PathCode::Ss2 => {
                "Exon skipping or use of a cryptic splice site disrupts reading frame and \
                 is predicted to undergo NMD -> \
                 Exon is absent from biologically-relevant transcript(s)"
            }
            PathCode::Ss3 => {
                "Exon skipping or use of a cryptic splice site disrupts reading frame and \
                 is not predicted to undergo NMD -> \
                 Truncated/altered region is critical to protein function"
            }
            PathCode::Ss4 => {
                "Exon skipping or use of a cryptic splice site disrupts reading frame and \
                 is not predicted to undergo NMD -> \
                 Role of region in protein function is unknown -> \
                 LoF variants in this exon are frequent in the general population and/or \
                 exon is absent from biologically-relevant transcript(s)"
            }
            PathCode::Ss5 => {
                "Exon skipping or use of a cryptic splice site disrupts reading frame and \
                 is not predicted to undergo NMD -> \
                 Role of region in protein function is unknown -> \
                 LoF variants in this exon are not frequent in the general population and \
                 exon is present in biologically-relevant transcript(s) -> \
                 Variant removes >10% of protein"
            }
            PathCode::Ss6 => {
                "Exon skipping or use of a cryptic splice site disrupts reading frame and \
                 is not predicted to undergo NMD -> \
                 Role of region in protein function is unknown -> \
                 LoF variants in this exon are not frequent in the general population and \
                 exon is present in biologically-relevant transcript(s) -> \
                 Variant removes <10% of protein"
            }
            PathCode::Ss7 => {
                "Exon skipping or use of a cryptic splice site preserves reading frame -> \
                 Role of region in protein function is unknown -> \
                 LoF variants in this exon are frequent in the general population and/or \
                 exon is absent from biologically-relevant transcript(s)"
            }
            PathCode::Ss8 => {
                "Exon skipping or use of a cryptic splice site preserves reading frame -> \
                 Role of region in protein function is unknown -> \
                 LoF variants in this exon are not frequent in the general population and \
                 exon is present in biologically-relevant transcript(s) -> \
                 Variant removes >10% of protein"
            }
            PathCode::Ss9 => {
                "Exon skipping or use of a cryptic splice site preserves reading frame -> \
                 Role of region in protein function is unknown -> \
                 LoF variants in this exon are not frequent in the general population and \
                 exon is present in biologically-relevant transcript(s) -> \
                 Variant removes <10% of protein"
            }
            PathCode::Ss10 => {
                "Exon skipping or use of a cryptic splice site preserves reading frame -> \
                 Truncated/altered region is critical to protein function"
            }
            PathCode::Ic1 => {
                "No known alternative start codon in other transcripts -> \
                 >=1 pathogenic variant(s) upstream of closest potential in-frame start codon"
            }
            PathCode::Ic2 => {
                "No known alternative start codon in other transcripts -> \
                 No pathogenic variant(s) upstream of closest potential in-frame start codon"
            }
            PathCode::Ic3 => "Different functional transcript uses alternative start codon",
            PathCode::Del1 => "Full gene deletion",
            PathCode::Del2 => {
                "Single to multi exon deletion disrupts reading frame and \
                 is predicted to undergo NMD -> \
                 Exon is present in biologically-relevant transcript(s)"
            }
            PathCode::Del3 => {
                "Single to multi exon deletion disrupts reading frame and \
                 is predicted to undergo NMD -> \
                 Exon is absent from biologically-relevant transcript(s)"
            }
            PathCode::Del4 => {
                "Single to multi exon deletion disrupts reading frame and \
                 is not predicted to undergo NMD -> \
                 Truncated/altered region is critical to protein function"
            }
            PathCode::Del5_1 => {
                "Single to multi exon deletion disrupts reading frame and \
                 is not predicted to undergo NMD -> \
                 Role of region in protein function is unknown -> \
                 LoF variants in this exon are frequent in the general population and/or \
                 exon is absent from biologically-relevant transcript(s)"
            }
            PathCode::Del6_1 => {
                "Single to multi exon deletion disrupts reading frame and \
                 is not predicted to undergo NMD -> \
                 Role of region in protein function is unknown -> \
                 LoF variants in this exon are not frequent in the general population and \
                 exon is present in biologically-relevant transcript(s) -> \
                 Variant removes >10% of protein"
            }
            PathCode::Del7_1 => {
                "Single to multi exon deletion disrupts reading frame and \
                 is not predicted to undergo NMD -> \
                 Role of region in protein function is unknown -> \
                 LoF variants in this exon are not frequent in the general population and \
                 exon is present in biologically-relevant transcript(s) -> \
                 Variant removes <10% of protein"
            }
            PathCode::Del5_2 => {
                "Single to multi exon deletion preserves reading frame -> \
                 Role of region in protein function is unknown -> \
                 LoF variants in this exon are frequent in the general population and/or \
                 exon is absent from biologically-relevant transcript(s)"
            }
            PathCode::Del6_2 => {
                "Single to multi exon deletion preserves reading frame -> \
                 Role of region in protein function is unknown -> \
                 LoF variants in this exon are not frequent in the general population and \
                 exon is present in biologically-relevant transcript(s) -> \
                 Variant removes >10% of protein"
            }
            PathCode::Del7_2 => {
                "Single to multi exon deletion preserves reading frame -> \
                 Role of region in protein function is unknown -> \
                 LoF variants in this exon are not frequent in the general population and \
                 exon is present in biologically-relevant transcript(s) -> \
                 Variant removes <10% of protein"
            }
            PathCode::Del8 => {
                "Single to multi exon deletion preserves reading frame -> \
                 Truncated/altered region is critical to protein function"
            }
            PathCode::Dup1 => {
                "Proven in tandem -> Reading frame disrupted and NMD predicted to occur"
            }
            PathCode::Dup2_1 => "Proven in tandem -> No or unknown impact on reading frame and NMD",
            PathCode::Dup2_2 => {
                "Presumed in tandem -> No or unknown impact on reading frame and NMD"
            }
            PathCode::Dup3 => {
                "Presumed in tandem -> Reading frame presumed disrupted and NMD predicted to occur"
            }
            PathCode::Dup4 => "Proven not in tandem",
        }
    }
}
