//! Sample data shared by tests and benchmarks.

/// The 40-value sample used throughout the course exercises.
pub const SAMPLE_40: [u8; 40] = [
    34, 201, 190, 154, 8, 194, 2, 6, 114, 88, 45, 76, 123, 87, 25, 23, 200, 122, 150, 90, 92, 87,
    177, 244, 201, 6, 12, 60, 8, 2, 5, 67, 7, 87, 250, 230, 99, 3, 100, 90,
];

/// Deterministic, non-monotonic bytes for benchmarks.
///
/// A linear congruential sequence truncated to the high byte; the same
/// `seed` always yields the same buffer.
pub fn patterned_bytes(len: usize, seed: u32) -> Vec<u8> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            (state >> 24) as u8
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterned_bytes_is_deterministic() {
        assert_eq!(patterned_bytes(16, 7), patterned_bytes(16, 7));
        assert_ne!(patterned_bytes(16, 7), patterned_bytes(16, 8));
    }
}
