//! Classification of structural variants for the decision tree.

use crate::defs::gene::GeneContext;
use crate::defs::pvs1::ConsequenceCategory;
use crate::defs::variant::{StructuralVariant, SvType};
use crate::err::Error;

/// Classify a structural variant against the gene context.
///
/// Deletions must cover at least one complete exon to be interpretable
/// ("minimal deletion"); anything smaller belongs into the sequence
/// variant path and is rejected here.
pub fn classify(
    strucvar: &StructuralVariant,
    ctx: &GeneContext,
) -> Result<ConsequenceCategory, Error> {
    match strucvar.sv_type {
        SvType::Dup => Ok(ConsequenceCategory::TandemDuplication),
        SvType::Del => {
            let (gene_start, gene_end) = ctx
                .exon_span()
                .ok_or_else(|| Error::MissingFact("exon table of the gene".into()))?;
            if strucvar.start <= gene_start && strucvar.stop >= gene_end {
                return Ok(ConsequenceCategory::FullGeneDeletion);
            }
            let covers_full_exon = ctx
                .exons
                .iter()
                .any(|exon| strucvar.start <= exon.alt_start_i && strucvar.stop >= exon.alt_end_i);
            if covers_full_exon {
                Ok(ConsequenceCategory::PartialExonDeletion)
            } else {
                Err(Error::UnsupportedConsequence(format!(
                    "deletion {} does not cover a complete exon",
                    strucvar
                )))
            }
        }
    }
}
