//! Prediction of nonsense-mediated decay for premature termination
//! events.

use crate::defs::gene::{Exon, GenomicStrand};
use crate::err::Error;

/// Number of coding bases at the 3' end of the penultimate exon that
/// escape NMD.
pub const PENULTIMATE_EXON_SLACK: i32 = 50;

/// Gene-specific exceptions to the general NMD rule.
///
/// The exceptions are data, not branches in the traversal, so new expert
/// panel guidelines can be added here without touching the trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NmdException {
    /// Transcripts of the gene are always predicted to undergo NMD
    /// (hearing loss guidelines for GJB2).
    AlwaysNmd,
    /// Premature stops before the given protein position take a dedicated
    /// decision path (PTEN guidelines).
    StartProximalStop {
        /// Exclusive upper bound on the protein position.
        max_prot_pos: i32,
    },
}

/// NMD exception rules keyed by gene symbol.
const NMD_EXCEPTIONS: &[(&str, NmdException)] = &[
    ("GJB2", NmdException::AlwaysNmd),
    ("PTEN", NmdException::StartProximalStop { max_prot_pos: 374 }),
];

/// Look up the NMD exception for a gene, if any.
pub fn exception_for(gene_symbol: &str) -> Option<NmdException> {
    NMD_EXCEPTIONS
        .iter()
        .find(|(symbol, _)| *symbol == gene_symbol)
        .map(|(_, exception)| *exception)
}

/// Decide whether a premature termination codon triggers NMD.
///
/// `tx_pos` is the position of the new stop codon in the transcript
/// including the 5' UTR.  NMD is predicted unless the stop falls into the
/// last exon or the distal 50 coding bases of the penultimate exon; a
/// single-exon transcript always escapes.  Gene-specific exceptions take
/// precedence.
pub fn nmd_predicted(
    tx_pos: i32,
    gene_symbol: &str,
    strand: GenomicStrand,
    exons: &[Exon],
) -> Result<bool, Error> {
    if let Some(NmdException::AlwaysNmd) = exception_for(gene_symbol) {
        tracing::debug!("gene {} always predicted to undergo NMD", gene_symbol);
        return Ok(true);
    }
    if exons.is_empty() {
        return Err(Error::MissingFact("exon table for NMD prediction".into()));
    }

    let mut sizes: Vec<i32> = exons.iter().map(Exon::coding_len).collect();
    if strand == GenomicStrand::Minus {
        sizes.reverse();
    }
    if sizes.len() == 1 {
        return Ok(false);
    }

    let n = sizes.len();
    let cutoff = sizes[..n - 1].iter().sum::<i32>() - PENULTIMATE_EXON_SLACK.min(sizes[n - 2]);
    tracing::debug!("new stop codon at {}, NMD cutoff {}", tx_pos, cutoff);
    Ok(tx_pos <= cutoff)
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use crate::defs::gene::{Exon, GenomicStrand};

    fn coding_exon(start: i32, end: i32) -> Exon {
        Exon {
            alt_start_i: start,
            alt_end_i: end,
            alt_cds_start_i: start,
            alt_cds_end_i: end,
        }
    }

    /// Coding sizes 51, 101, 151; NMD cutoff 51 + 101 - 50 = 102.
    fn three_exons() -> Vec<Exon> {
        vec![
            coding_exon(100, 150),
            coding_exon(300, 400),
            coding_exon(500, 650),
        ]
    }

    #[test]
    fn gjb2_always_predicted() -> Result<(), anyhow::Error> {
        assert!(super::nmd_predicted(
            10_000,
            "GJB2",
            GenomicStrand::Plus,
            &[]
        )?);

        Ok(())
    }

    #[test]
    fn single_exon_escapes() -> Result<(), anyhow::Error> {
        let exons = vec![coding_exon(100, 400)];
        assert!(!super::nmd_predicted(
            10,
            "PAH",
            GenomicStrand::Plus,
            &exons
        )?);

        Ok(())
    }

    #[rstest::rstest]
    #[case(102, true)]
    #[case(103, false)]
    #[case(1, true)]
    fn cutoff_boundary(#[case] tx_pos: i32, #[case] expected: bool) -> Result<(), anyhow::Error> {
        assert_eq!(
            expected,
            super::nmd_predicted(tx_pos, "PAH", GenomicStrand::Plus, &three_exons())?
        );

        Ok(())
    }

    #[test]
    fn minus_strand_reverses_exons() -> Result<(), anyhow::Error> {
        // Reversed sizes 151, 101, 51; cutoff 151 + 101 - 50 = 202.
        assert!(super::nmd_predicted(
            202,
            "PAH",
            GenomicStrand::Minus,
            &three_exons()
        )?);
        assert!(!super::nmd_predicted(
            203,
            "PAH",
            GenomicStrand::Minus,
            &three_exons()
        )?);

        Ok(())
    }

    #[test]
    fn missing_exons_is_an_error() {
        let err = super::nmd_predicted(10, "PAH", GenomicStrand::Plus, &[])
            .expect_err("no exons, no prediction");
        assert!(matches!(err, crate::err::Error::MissingFact(_)));
    }

    #[test]
    fn exception_lookup() {
        assert_eq!(
            Some(super::NmdException::AlwaysNmd),
            super::exception_for("GJB2")
        );
        assert_eq!(
            Some(super::NmdException::StartProximalStop { max_prot_pos: 374 }),
            super::exception_for("PTEN")
        );
        assert_eq!(None, super::exception_for("PAH"));
    }
}
