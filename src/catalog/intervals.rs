use crate::types::Interval;

/// Collapse positions into the minimal sorted list of half-open intervals
/// on `chrom`.
///
/// Positions are deduplicated and sorted, then consecutive runs are merged.
/// A run `p..=q` becomes `[p, q + 1)`; `p` is written as given, with no
/// coordinate shift. Empty input yields no intervals. `i64::MAX` has no
/// representable exclusive end and is dropped with a warning.
pub fn compress_positions<I>(positions: I, chrom: &str) -> Vec<Interval>
where
    I: IntoIterator<Item = i64>,
{
    let mut positions: Vec<i64> = positions.into_iter().collect();
    positions.sort_unstable();
    positions.dedup();
    if positions.last() == Some(&i64::MAX) {
        tracing::warn!("position {} has no representable interval end, skipping", i64::MAX);
        positions.pop();
    }

    let Some((&first, rest)) = positions.split_first() else {
        return Vec::new();
    };

    let mut intervals = Vec::new();
    let mut start = first;
    let mut end = first;

    for &pos in rest {
        if pos == end + 1 {
            end = pos;
        } else {
            intervals.push(Interval {
                chrom: chrom.to_string(),
                start,
                end: end + 1,
            });
            start = pos;
            end = pos;
        }
    }
    intervals.push(Interval {
        chrom: chrom.to_string(),
        start,
        end: end + 1,
    });

    intervals
}
