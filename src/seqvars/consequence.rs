//! Mapping of transcript consequence terms to decision tree categories.

use crate::defs::facts::VariantFacts;
use crate::defs::pvs1::ConsequenceCategory;
use crate::err::Error;

/// Map one annotation consequence term to a tree category.
///
/// The vocabulary is the mehari/VEP term set; terms that are recognized
/// but outside the scope of the tree (missense) map to `Unsupported`,
/// terms with no LoF interpretation map to `None`.
fn category_for_term(term: &str) -> Option<ConsequenceCategory> {
    match term {
        "frameshift_variant" | "stop_gained" | "3_prime_UTR_variant" | "3_prime_utr_variant" => {
            Some(ConsequenceCategory::NonsenseOrFrameshift)
        }
        "splice_acceptor_variant"
        | "splice_donor_variant"
        | "splice_donor_5th_base_variant"
        | "splice_donor_region_variant"
        | "splice_polypyrimidine_tract_variant"
        | "splice_region_variant" => Some(ConsequenceCategory::SpliceDonorAcceptor),
        "start_lost"
        | "initiator_codon_variant"
        | "start_retained_variant"
        | "upstream_gene_variant"
        | "downstream_gene_variant" => Some(ConsequenceCategory::InitiationCodonLoss),
        "missense_variant" => Some(ConsequenceCategory::Unsupported),
        _ => None,
    }
}

/// Classify a sequence variant by its annotated consequence terms.
///
/// The first term with a mapping wins.  Unknown or empty term lists are
/// an `UnsupportedConsequence`/`MissingFact` error; callers translate
/// both into the terminal `UnsupportedConsequence` grade rather than
/// aborting the evaluation.
pub fn classify(facts: &VariantFacts) -> Result<ConsequenceCategory, Error> {
    if facts.consequences.is_empty() {
        return Err(Error::MissingFact(
            "consequence terms of the transcript annotation".into(),
        ));
    }
    for term in &facts.consequences {
        if let Some(category) = category_for_term(term) {
            return Ok(category);
        }
    }
    Err(Error::UnsupportedConsequence(
        facts.consequences.join(", "),
    ))
}
