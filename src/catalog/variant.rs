use super::position::NormalizedRecord;
use std::ops::Range;

/// Shape of a catalogued change, judged from allele lengths alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantKind {
    /// Both alleles are one base.
    Snp,
    /// Equal-length alleles longer than one base.
    Mnp,
    /// Allele lengths differ, or both alleles are blank. Either way only
    /// the anchor is occupied.
    Indel,
}

impl VariantKind {
    pub fn classify(reference: &str, alternative: &str) -> Self {
        let ref_len = reference.chars().count();
        let alt_len = alternative.chars().count();

        match (ref_len, alt_len) {
            (1, 1) => VariantKind::Snp,
            (r, a) if r == a && r > 1 => VariantKind::Mnp,
            _ => VariantKind::Indel,
        }
    }

    /// Positions occupied by a change of this kind anchored at `anchor`.
    ///
    /// An MNP covers one position per reference base; SNPs and indels are
    /// represented by the anchor alone. Returns `None` when the exclusive
    /// end of the run does not fit in an `i64`.
    pub fn positions(self, anchor: i64, reference_len: usize) -> Option<Range<i64>> {
        let width = match self {
            VariantKind::Mnp => i64::try_from(reference_len).ok()?,
            VariantKind::Snp | VariantKind::Indel => 1,
        };
        Some(anchor..anchor.checked_add(width)?)
    }
}

/// Every position touched by `records`, duplicates included.
pub fn occupied_positions(records: &[NormalizedRecord<'_>]) -> Vec<i64> {
    let mut positions = Vec::with_capacity(records.len());

    for normalized in records {
        let reference = &normalized.record.reference_allele;
        let kind = VariantKind::classify(reference, &normalized.record.alternative_allele);
        let Some(run) = kind.positions(normalized.position, reference.chars().count()) else {
            tracing::warn!(
                "{} at {} runs past the largest representable position, skipping",
                normalized.record.variant_key(),
                normalized.position
            );
            continue;
        };
        positions.extend(run);
    }

    positions
}
