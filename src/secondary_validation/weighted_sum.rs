/// A positional checksum scheme: each digit is multiplied by the weight at its
/// position and the total is reduced modulo `modulus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedSum {
    pub weights: &'static [u32],
    pub modulus: u32,
}

impl WeightedSum {
    pub const fn new(weights: &'static [u32], modulus: u32) -> Self {
        Self { weights, modulus }
    }

    #[inline]
    pub fn checksum(&self, digits: &str) -> u32 {
        weighted_sum(digits, self.weights, self.modulus)
    }
}

/// Computes `sum(digit[i] * weights[i]) mod modulus`.
///
/// Weights are applied from the first digit onwards. Weights past the last digit
/// are unused, and a payload longer than the weight list reuses the weights
/// cyclically.
///
/// The caller is expected to have checked that `digits` only contains decimal
/// digits and that `weights` is not empty.
///
/// # Panics
///
/// Panics if `modulus` is zero.
pub fn weighted_sum(digits: &str, weights: &[u32], modulus: u32) -> u32 {
    debug_assert!(!weights.is_empty(), "weighted sum needs at least one weight");
    if weights.is_empty() {
        return 0;
    }

    let mut sum: u64 = 0;
    for (i, char) in digits.chars().enumerate() {
        debug_assert!(char.is_ascii_digit(), "non-digit {char:?} in checksum payload");
        let digit = char.to_digit(10).unwrap_or(0);
        sum += u64::from(digit) * u64::from(weights[i % weights.len()]);
    }
    // result is in [0, modulus), callers subtract it from the modulus
    sum.rem_euclid(u64::from(modulus)) as u32
}
