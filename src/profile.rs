//! Substitution profile generation.

/// Build the substitution profile of two equal-length sequences.
///
/// Element `i` is 1.0 where the sequences differ at position `i`, 0.0 where
/// they match. Pure and deterministic; equal lengths are a caller guarantee.
pub fn substitution_profile(a: &[u8], b: &[u8]) -> Vec<f64> {
    debug_assert_eq!(a.len(), b.len(), "compared sequences must share one length");
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| if x == y { 0.0 } else { 1.0 })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_mismatched_positions() {
        let profile = substitution_profile(b"AAAA", b"AABA");
        assert_eq!(profile, vec![0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn identical_sequences_are_all_zero() {
        let profile = substitution_profile(b"ACGTACGT", b"ACGTACGT");
        assert!(profile.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn fully_diverged_sequences_are_all_one() {
        let profile = substitution_profile(b"AAAA", b"TTTT");
        assert!(profile.iter().all(|&v| v == 1.0));
    }
}
