//! PVS1 decision tree for sequence variants.
//!
//! The tree only walks branches; all strength grading lives in
//! `PathCode::strength()`.

use crate::defs::facts::{Thresholds, VariantFacts};
use crate::defs::gene::{GeneContext, GenomicStrand};
use crate::defs::pvs1::{ConsequenceCategory, PathCode, Pvs1Strength};
use crate::defs::variant::SequenceVariant;
use crate::err::Error;
use crate::seqvars::{consequence, nmd};

/// Intronic slack around an exon still attributed to it for splice
/// variants: 9 bases upstream and 23 bases downstream of the exon.
const SPLICE_SLACK_UPSTREAM: i32 = 9;
const SPLICE_SLACK_DOWNSTREAM: i32 = 23;

fn terminal(code: PathCode) -> Result<(PathCode, Pvs1Strength), Error> {
    Ok((code, code.strength()))
}

/// Walk the PVS1 decision tree for a sequence variant.
pub fn evaluate(
    seqvar: &SequenceVariant,
    ctx: &GeneContext,
    facts: &VariantFacts,
    thresholds: &Thresholds,
) -> Result<(PathCode, Pvs1Strength), Error> {
    let category = consequence::classify(facts)?;
    tracing::debug!("evaluating PVS1 for {} as {}", seqvar, category);
    match category {
        ConsequenceCategory::NonsenseOrFrameshift => {
            nonsense_frameshift(seqvar, ctx, facts, thresholds)
        }
        ConsequenceCategory::SpliceDonorAcceptor => splice(seqvar, ctx, facts, thresholds),
        ConsequenceCategory::InitiationCodonLoss => initiation_codon(seqvar, ctx, facts),
        ConsequenceCategory::Unsupported => {
            Ok((PathCode::NotSet, Pvs1Strength::UnsupportedConsequence))
        }
        other => Err(Error::Algorithm(format!(
            "category {} cannot arise for a sequence variant",
            other
        ))),
    }
}

fn nonsense_frameshift(
    seqvar: &SequenceVariant,
    ctx: &GeneContext,
    facts: &VariantFacts,
    thresholds: &Thresholds,
) -> Result<(PathCode, Pvs1Strength), Error> {
    if let Some(nmd::NmdException::StartProximalStop { max_prot_pos }) =
        nmd::exception_for(&ctx.gene_symbol)
    {
        if facts.prot_pos.map_or(false, |prot_pos| prot_pos < max_prot_pos) {
            return terminal(PathCode::Pten);
        }
    }

    let tx_pos = facts.tx_pos.ok_or_else(|| {
        Error::MissingFact("transcript position of the premature stop codon".into())
    })?;
    if nmd::nmd_predicted(tx_pos, &ctx.gene_symbol, ctx.strand, &ctx.exons)? {
        if ctx.is_relevant_transcript(&seqvar.transcript_id) {
            terminal(PathCode::Nf1)
        } else {
            terminal(PathCode::Nf2)
        }
    } else if region_critical(seqvar.pos, ctx, facts, thresholds)? {
        terminal(PathCode::Nf3)
    } else {
        let exon_no = ctx.find_exon(seqvar.pos).ok_or_else(|| {
            Error::Algorithm(format!("no exon contains position {}", seqvar.pos))
        })?;
        if lof_frequent_in_exon(exon_no, ctx, thresholds)?
            || !ctx.is_relevant_transcript(&seqvar.transcript_id)
        {
            terminal(PathCode::Nf4)
        } else if removes_protein_fraction(facts, thresholds)? {
            terminal(PathCode::Nf5)
        } else {
            terminal(PathCode::Nf6)
        }
    }
}

fn splice(
    seqvar: &SequenceVariant,
    ctx: &GeneContext,
    facts: &VariantFacts,
    thresholds: &Thresholds,
) -> Result<(PathCode, Pvs1Strength), Error> {
    let exon_no = ctx
        .find_exon_with_slack(seqvar.pos, SPLICE_SLACK_UPSTREAM, SPLICE_SLACK_DOWNSTREAM)
        .ok_or_else(|| {
            Error::Algorithm(format!(
                "no exon near splice variant position {}",
                seqvar.pos
            ))
        })?;
    let relevant = ctx.is_relevant_transcript(&seqvar.transcript_id);
    let disrupts_frame = {
        let exon = &ctx.exons[exon_no];
        (exon.alt_end_i - exon.alt_start_i) % 3 != 0
            || facts.cryptic_splice_frameshift.unwrap_or(false)
    };

    if disrupts_frame {
        let tx_pos = facts.tx_pos.ok_or_else(|| {
            Error::MissingFact("transcript position of the splice-altered exon".into())
        })?;
        if nmd::nmd_predicted(tx_pos, &ctx.gene_symbol, ctx.strand, &ctx.exons)? {
            if relevant {
                terminal(PathCode::Ss1)
            } else {
                terminal(PathCode::Ss2)
            }
        } else if region_critical(seqvar.pos, ctx, facts, thresholds)? {
            terminal(PathCode::Ss3)
        } else if lof_frequent_in_exon(exon_no, ctx, thresholds)? || !relevant {
            terminal(PathCode::Ss4)
        } else if removes_protein_fraction(facts, thresholds)? {
            terminal(PathCode::Ss5)
        } else {
            terminal(PathCode::Ss6)
        }
    } else if region_critical(seqvar.pos, ctx, facts, thresholds)? {
        terminal(PathCode::Ss10)
    } else if lof_frequent_in_exon(exon_no, ctx, thresholds)? || !relevant {
        terminal(PathCode::Ss7)
    } else if removes_protein_fraction(facts, thresholds)? {
        terminal(PathCode::Ss8)
    } else {
        terminal(PathCode::Ss9)
    }
}

fn initiation_codon(
    seqvar: &SequenceVariant,
    ctx: &GeneContext,
    facts: &VariantFacts,
) -> Result<(PathCode, Pvs1Strength), Error> {
    let has_alt_start = !ctx.alt_start_codons.is_empty()
        || ctx.closest_alt_start_codon(&seqvar.transcript_id).is_some();
    if has_alt_start {
        return terminal(PathCode::Ic3);
    }
    let counts = facts.clinvar_upstream.as_ref().ok_or_else(|| {
        Error::MissingFact("ClinVar counts upstream of the closest in-frame start codon".into())
    })?;
    if counts.pathogenic > 0 {
        terminal(PathCode::Ic1)
    } else {
        terminal(PathCode::Ic2)
    }
}

/// Genomic interval truncated or altered by the variant.
fn altered_region(pos: i32, ctx: &GeneContext) -> Result<(i32, i32), Error> {
    let (first, last) = ctx
        .exon_span()
        .ok_or_else(|| Error::MissingFact("exon table".into()))?;
    Ok(match ctx.strand {
        GenomicStrand::Plus => (pos, last),
        GenomicStrand::Minus => (first, pos),
    })
}

/// Whether the truncated/altered region is critical for protein function.
///
/// Curated critical-region intervals win; without curation the density of
/// pathogenic ClinVar assertions downstream of the variant decides.
fn region_critical(
    pos: i32,
    ctx: &GeneContext,
    facts: &VariantFacts,
    thresholds: &Thresholds,
) -> Result<bool, Error> {
    let (start, stop) = altered_region(pos, ctx)?;
    if !ctx.critical_regions.is_empty() {
        return Ok(ctx.overlaps_critical_region(start, stop));
    }
    match &facts.clinvar_range {
        Some(counts) => Ok(counts.pathogenic_fraction() > thresholds.pathogenic_density),
        None => Err(Error::MissingFact(
            "critical region annotation or downstream ClinVar counts".into(),
        )),
    }
}

/// Whether LoF variants in the affected exon are frequent in the general
/// population.
fn lof_frequent_in_exon(
    exon_no: usize,
    ctx: &GeneContext,
    thresholds: &Thresholds,
) -> Result<bool, Error> {
    let table = ctx
        .exon_lof_frequencies
        .as_ref()
        .ok_or_else(|| Error::MissingFact("per-exon LoF frequency table".into()))?;
    let freq = table
        .get(exon_no)
        .ok_or_else(|| Error::MissingFact("LoF frequency entry for the affected exon".into()))?;
    Ok(freq.ratio() > thresholds.lof_frequent_ratio)
}

/// Whether the truncation removes more than the threshold fraction of the
/// protein.
fn removes_protein_fraction(facts: &VariantFacts, thresholds: &Thresholds) -> Result<bool, Error> {
    let prot_pos = facts
        .prot_pos
        .ok_or_else(|| Error::MissingFact("protein position of the variant".into()))?;
    let prot_length = facts
        .prot_length
        .filter(|length| *length > 0)
        .ok_or_else(|| Error::MissingFact("protein length".into()))?;
    Ok(f64::from(prot_pos) / f64::from(prot_length) > thresholds.protein_fraction)
}
