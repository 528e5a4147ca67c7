//! The accumulate/merge contract shared by every estimator.

/// An accumulator that consumes whole substitution profiles and supports
/// associative, commutative merging of partial results.
///
/// The pair loop over an ensemble is embarrassingly parallel: build one
/// accumulator per shard, feed each a disjoint subset of pairs, then reduce
/// with [`merge`](Self::merge) or [`merge_all`]. The final state is
/// independent of partitioning and merge order, up to floating-point
/// rounding. An instance is exclusively owned by whoever mutates it until it
/// is handed off for merging.
pub trait ProfileAccumulator {
    /// Feed one substitution profile.
    fn record(&mut self, profile: &[f64]);

    /// Fold another accumulator of compatible shape into this one.
    fn merge(&mut self, other: &Self);
}

/// Reduce any number of shard accumulators into one, in iteration order.
///
/// Returns `None` for an empty iterator.
pub fn merge_all<A: ProfileAccumulator>(parts: impl IntoIterator<Item = A>) -> Option<A> {
    let mut iter = parts.into_iter();
    let mut merged = iter.next()?;
    for part in iter {
        merged.merge(&part);
    }
    Some(merged)
}
