//! PVS1 decision tree for structural variants.

use crate::defs::facts::{Thresholds, VariantFacts};
use crate::defs::gene::{GeneContext, GenomicStrand};
use crate::defs::pvs1::{ConsequenceCategory, PathCode, Pvs1Strength};
use crate::defs::variant::{StructuralVariant, TandemStatus};
use crate::err::Error;
use crate::strucvars::consequence;

fn terminal(code: PathCode) -> Result<(PathCode, Pvs1Strength), Error> {
    Ok((code, code.strength()))
}

/// Walk the PVS1 decision tree for a structural variant.
pub fn evaluate(
    strucvar: &StructuralVariant,
    ctx: &GeneContext,
    facts: &VariantFacts,
    thresholds: &Thresholds,
) -> Result<(PathCode, Pvs1Strength), Error> {
    let category = consequence::classify(strucvar, ctx)?;
    tracing::debug!("evaluating PVS1 for {} as {}", strucvar, category);
    match category {
        ConsequenceCategory::FullGeneDeletion => terminal(PathCode::Del1),
        ConsequenceCategory::PartialExonDeletion => deletion(strucvar, ctx, facts, thresholds),
        ConsequenceCategory::TandemDuplication => duplication(strucvar, ctx),
        other => Err(Error::Algorithm(format!(
            "category {} cannot arise for a structural variant",
            other
        ))),
    }
}

fn deletion(
    strucvar: &StructuralVariant,
    ctx: &GeneContext,
    facts: &VariantFacts,
    thresholds: &Thresholds,
) -> Result<(PathCode, Pvs1Strength), Error> {
    let relevant = in_relevant_transcript(strucvar, ctx);
    let disrupts_frame = deletion_disrupts_rf(strucvar, ctx)?;
    if disrupts_frame && deletion_undergoes_nmd(strucvar, ctx)? {
        if relevant {
            terminal(PathCode::Del2)
        } else {
            terminal(PathCode::Del3)
        }
    } else if disrupts_frame {
        if region_critical(strucvar, ctx, facts, thresholds)? {
            terminal(PathCode::Del4)
        } else if lof_frequent_in_region(strucvar, ctx, thresholds)? || !relevant {
            terminal(PathCode::Del5_1)
        } else if removes_cds_fraction(strucvar, ctx, thresholds)? {
            terminal(PathCode::Del6_1)
        } else {
            terminal(PathCode::Del7_1)
        }
    } else if region_critical(strucvar, ctx, facts, thresholds)? {
        terminal(PathCode::Del8)
    } else if lof_frequent_in_region(strucvar, ctx, thresholds)? || !relevant {
        terminal(PathCode::Del5_2)
    } else if removes_cds_fraction(strucvar, ctx, thresholds)? {
        terminal(PathCode::Del6_2)
    } else {
        terminal(PathCode::Del7_2)
    }
}

fn duplication(
    strucvar: &StructuralVariant,
    ctx: &GeneContext,
) -> Result<(PathCode, Pvs1Strength), Error> {
    match strucvar.tandem_status {
        TandemStatus::Proven => {
            if duplication_disrupts_rf(strucvar, ctx)? && duplication_undergoes_nmd(strucvar, ctx)?
            {
                terminal(PathCode::Dup1)
            } else {
                terminal(PathCode::Dup2_1)
            }
        }
        TandemStatus::Presumed => {
            if duplication_disrupts_rf(strucvar, ctx)? && duplication_undergoes_nmd(strucvar, ctx)?
            {
                terminal(PathCode::Dup3)
            } else {
                terminal(PathCode::Dup2_2)
            }
        }
        TandemStatus::DisprovenOrUnknown => terminal(PathCode::Dup4),
    }
}

/// Whether any affected transcript is biologically relevant.
fn in_relevant_transcript(strucvar: &StructuralVariant, ctx: &GeneContext) -> bool {
    strucvar
        .transcript_ids
        .iter()
        .any(|tx| ctx.is_relevant_transcript(tx))
}

/// Whether the deletion shifts the reading frame.
///
/// Breakpoints entirely within introns leave the frame intact; a
/// breakpoint inside an exon disrupts it when the removed exonic prefix
/// or suffix is not a multiple of three.
fn deletion_disrupts_rf(strucvar: &StructuralVariant, ctx: &GeneContext) -> Result<bool, Error> {
    if ctx.exons.is_empty() {
        return Err(Error::MissingFact("exon table of the gene".into()));
    }
    let affected: Vec<_> = ctx
        .exons
        .iter()
        .filter(|exon| {
            (strucvar.start <= exon.alt_start_i && strucvar.stop >= exon.alt_end_i)
                || (strucvar.start > exon.alt_start_i && strucvar.start < exon.alt_end_i)
                || (strucvar.stop > exon.alt_start_i && strucvar.stop < exon.alt_end_i)
        })
        .collect();
    let (Some(first), Some(last)) = (affected.first(), affected.last()) else {
        return Err(Error::Algorithm(
            "deletion affects no exon after classification".into(),
        ));
    };

    if strucvar.start <= first.alt_start_i && strucvar.stop >= last.alt_end_i {
        // Both breakpoints are intronic.
        return Ok(false);
    }

    match ctx.strand {
        GenomicStrand::Plus => {
            if strucvar.start > first.alt_start_i && strucvar.start <= first.alt_end_i {
                return Ok((strucvar.start - first.alt_start_i + 1) % 3 != 0);
            }
            if strucvar.stop >= last.alt_start_i && strucvar.stop < last.alt_end_i {
                return Ok((strucvar.stop - last.alt_start_i + 1) % 3 != 0);
            }
        }
        GenomicStrand::Minus => {
            if strucvar.stop < last.alt_end_i && strucvar.stop >= last.alt_start_i {
                return Ok((last.alt_end_i - strucvar.stop + 1) % 3 != 0);
            }
            if strucvar.start <= first.alt_end_i && strucvar.start > first.alt_start_i {
                return Ok((first.alt_end_i - strucvar.start + 1) % 3 != 0);
            }
        }
    }

    Ok(false)
}

/// NMD cutoff position in the penultimate exon, strand aware.
fn nmd_cutoff(ctx: &GeneContext) -> Option<(GenomicStrand, i32)> {
    if ctx.exons.len() < 2 {
        return None;
    }
    match ctx.strand {
        GenomicStrand::Plus => {
            let penultimate = &ctx.exons[ctx.exons.len() - 2];
            Some((
                GenomicStrand::Plus,
                (penultimate.alt_end_i - crate::seqvars::nmd::PENULTIMATE_EXON_SLACK)
                    .max(penultimate.alt_start_i),
            ))
        }
        GenomicStrand::Minus => {
            let penultimate = &ctx.exons[1];
            Some((
                GenomicStrand::Minus,
                (penultimate.alt_start_i + crate::seqvars::nmd::PENULTIMATE_EXON_SLACK)
                    .min(penultimate.alt_end_i),
            ))
        }
    }
}

/// Whether a frame-disrupting deletion is predicted to undergo NMD.
///
/// A deletion confined to the last exon plus the distal 50 bases of the
/// penultimate exon escapes; single-exon transcripts always escape.
fn deletion_undergoes_nmd(strucvar: &StructuralVariant, ctx: &GeneContext) -> Result<bool, Error> {
    if ctx.exons.is_empty() {
        return Err(Error::MissingFact("exon table of the gene".into()));
    }
    let Some((strand, cutoff)) = nmd_cutoff(ctx) else {
        return Ok(false);
    };
    Ok(match strand {
        GenomicStrand::Plus => strucvar.start < cutoff,
        GenomicStrand::Minus => strucvar.stop > cutoff,
    })
}

/// Whether the frameshift introduced at the distal junction of an
/// in-tandem duplication is predicted to trigger NMD.
fn duplication_undergoes_nmd(
    strucvar: &StructuralVariant,
    ctx: &GeneContext,
) -> Result<bool, Error> {
    if ctx.exons.is_empty() {
        return Err(Error::MissingFact("exon table of the gene".into()));
    }
    let Some((strand, cutoff)) = nmd_cutoff(ctx) else {
        return Ok(false);
    };
    Ok(match strand {
        GenomicStrand::Plus => strucvar.stop < cutoff,
        GenomicStrand::Minus => strucvar.start > cutoff,
    })
}

/// Whether an in-tandem duplication shifts the reading frame: the
/// duplicated coding length is not a multiple of three.
fn duplication_disrupts_rf(strucvar: &StructuralVariant, ctx: &GeneContext) -> Result<bool, Error> {
    if ctx.exons.is_empty() {
        return Err(Error::MissingFact("exon table of the gene".into()));
    }
    let duplicated_coding: i32 = ctx
        .exons
        .iter()
        .map(|exon| {
            let overlap_start = strucvar.start.max(exon.alt_cds_start_i);
            let overlap_end = strucvar.stop.min(exon.alt_cds_end_i);
            (overlap_end - overlap_start + 1).max(0)
        })
        .sum();
    Ok(duplicated_coding % 3 != 0)
}

/// Whether the deleted region is critical for protein function.
fn region_critical(
    strucvar: &StructuralVariant,
    ctx: &GeneContext,
    facts: &VariantFacts,
    thresholds: &Thresholds,
) -> Result<bool, Error> {
    if !ctx.critical_regions.is_empty() {
        return Ok(ctx.overlaps_critical_region(strucvar.start, strucvar.stop));
    }
    match &facts.clinvar_range {
        Some(counts) => Ok(counts.pathogenic_fraction() > thresholds.pathogenic_density),
        None => Err(Error::MissingFact(
            "critical region annotation or range ClinVar counts".into(),
        )),
    }
}

/// Whether LoF variants are frequent across the deleted exons.
fn lof_frequent_in_region(
    strucvar: &StructuralVariant,
    ctx: &GeneContext,
    thresholds: &Thresholds,
) -> Result<bool, Error> {
    let table = ctx
        .exon_lof_frequencies
        .as_ref()
        .ok_or_else(|| Error::MissingFact("per-exon LoF frequency table".into()))?;
    let mut frequent = 0u32;
    let mut total = 0u32;
    for (exon, freq) in ctx.exons.iter().zip(table.iter()) {
        if strucvar.start <= exon.alt_end_i && strucvar.stop >= exon.alt_start_i {
            frequent += freq.frequent;
            total += freq.total;
        }
    }
    if total == 0 {
        return Ok(false);
    }
    Ok(f64::from(frequent) / f64::from(total) > thresholds.lof_frequent_ratio)
}

/// Whether the deletion removes more than the threshold fraction of the
/// coding sequence.
fn removes_cds_fraction(
    strucvar: &StructuralVariant,
    ctx: &GeneContext,
    thresholds: &Thresholds,
) -> Result<bool, Error> {
    let mut total: i64 = 0;
    let mut deleted: i64 = 0;
    for exon in &ctx.exons {
        let coding_len = i64::from(exon.coding_len());
        if coding_len == 0 {
            continue;
        }
        total += coding_len;
        let overlap_start = strucvar.start.max(exon.alt_cds_start_i);
        let overlap_end = strucvar.stop.min(exon.alt_cds_end_i);
        if overlap_start <= overlap_end {
            deleted += i64::from(overlap_end - overlap_start + 1);
        }
    }
    if total == 0 {
        return Err(Error::Algorithm("total CDS length is zero".into()));
    }
    Ok(deleted as f64 / total as f64 > thresholds.protein_fraction)
}
