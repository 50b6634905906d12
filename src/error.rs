use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GoodSizeError {
    #[error("allowed factor set is empty")]
    EmptyFactorSet,
    #[error("allowed factor must be at least 2, got {0}")]
    FactorTooSmall(u64),
    #[error("dimension must be a positive integer")]
    ZeroDimension,
    #[error("dimension {0} does not fit the target shape type")]
    DimensionOverflow(u64),
    #[error("max exponent list is empty")]
    EmptyExponents,
    #[error("prime {0} listed more than once in max exponent list")]
    DuplicatePrime(u64),
    #[error("{prime}^{exponent} overflows u64")]
    ExponentOverflow { prime: u64, exponent: u32 },
    #[error("no table entry at or above {0}")]
    NoLargerEntry(u64),
    #[error("no table entry at or below {0}")]
    NoSmallerEntry(u64),
    #[error("table prefix of {requested} entries requested, only {available} built")]
    PrefixTooLong { requested: usize, available: usize },
}
