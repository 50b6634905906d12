use crate::GoodSizeError;

/// The whitelist of prime factors a smooth dimension may contain.
///
/// The set is stored sorted and deduplicated. Values only need to be >= 2;
/// primality is not checked, but composite entries make the smoothness
/// semantics meaningless, so pass actual primes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactorSet {
    factors: Vec<u64>,
}

impl FactorSet {
    pub fn new(factors: impl IntoIterator<Item = u64>) -> Result<Self, GoodSizeError> {
        let mut factors: Vec<u64> = factors.into_iter().collect();
        factors.sort_unstable();
        factors.dedup();

        if factors.is_empty() {
            return Err(GoodSizeError::EmptyFactorSet);
        }
        if let Some(&f) = factors.iter().find(|&&f| f < 2) {
            return Err(GoodSizeError::FactorTooSmall(f));
        }

        Ok(Self { factors })
    }

    pub fn factors(&self) -> &[u64] {
        &self.factors
    }

    pub fn smallest(&self) -> u64 {
        self.factors[0]
    }

    // divide out every allowed factor; 1 remains iff n was smooth
    pub(crate) fn reduce(&self, mut n: u64) -> u64 {
        for &f in &self.factors {
            while n % f == 0 {
                n /= f;
            }
        }
        n
    }
}

impl Default for FactorSet {
    // the radices the cuFFT docs list as natively supported
    fn default() -> Self {
        Self {
            factors: vec![2, 3, 5, 7],
        }
    }
}

/// Whether `n`'s prime factorization uses only factors from the set.
///
/// `1` has an empty factorization and is deliberately not smooth; padding a
/// transform to length 1 is never what a caller wants. `0` is rejected since
/// factorization is defined for positive integers only.
pub fn is_smooth(n: u64, factors: &FactorSet) -> Result<bool, GoodSizeError> {
    match n {
        0 => Err(GoodSizeError::ZeroDimension),
        1 => Ok(false),
        _ => Ok(factors.reduce(n) == 1),
    }
}
