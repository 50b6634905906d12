//! Precomputed smooth-number table with binary-search lookup.
//!
//! The per-query factorization walk in [`crate::nearest_smooth`] pays a trial
//! division per step. For hot paths the same answers come from a table of
//! every smooth number below a ceiling, built once and queried in
//! O(log n) with `slice::partition_point`. Inside its covered range the
//! table agrees exactly with the factorization search.

use crate::GoodSizeError;

/// Max exponent per prime for the default {2,3,5,7} table. The ceiling is
/// 3^25, the smallest of the four bounds, so coverage is complete below it.
pub const DEFAULT_MAX_EXPONENTS: [(u64, u32); 4] = [(2, 40), (3, 25), (5, 18), (7, 15)];

/// Prefix length of the emitted table artifact.
pub const DEFAULT_TABLE_LEN: usize = 8000;

/// An ascending, duplicate-free sequence of smooth numbers below a ceiling.
///
/// Built once, never mutated afterwards; shared concurrent reads need no
/// synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmoothTable {
    entries: Vec<u64>,
    ceiling: u64,
}

impl SmoothTable {
    /// The largest bound below which every product of the configured prime
    /// powers is enumerated: `min(p^e)` over the pairs.
    pub fn ceiling_for(max_exponents: &[(u64, u32)]) -> Result<u64, GoodSizeError> {
        validate_exponents(max_exponents)?;

        let mut ceiling = u64::MAX;
        for &(p, e) in max_exponents {
            let bound = p
                .checked_pow(e)
                .ok_or(GoodSizeError::ExponentOverflow { prime: p, exponent: e })?;
            ceiling = ceiling.min(bound);
        }
        Ok(ceiling)
    }

    /// Enumerates every product `∏ p_i^e_i` with `e_i` in `[0, max_i]` that
    /// is strictly below `ceiling`, drops 1, and sorts ascending.
    ///
    /// Exhaustive in the exponent ranges, so with `ceiling <=
    /// ceiling_for(max_exponents)` the table holds *every* smooth number
    /// below `ceiling`. One-shot batch work; expected to be run rarely and
    /// the result kept around.
    pub fn build(max_exponents: &[(u64, u32)], ceiling: u64) -> Result<Self, GoodSizeError> {
        validate_exponents(max_exponents)?;

        let mut products = vec![1u64];
        for &(p, e_max) in max_exponents {
            let mut next = Vec::with_capacity(products.len() * (e_max as usize + 1));
            for &base in &products {
                let mut v = base;
                for e in 0..=e_max {
                    next.push(v);
                    if e == e_max {
                        break;
                    }
                    v = match v.checked_mul(p) {
                        Some(w) if w < ceiling => w,
                        _ => break,
                    };
                }
            }
            products = next;
        }

        products.retain(|&v| v != 1 && v < ceiling);
        products.sort_unstable();
        products.dedup();

        Ok(Self {
            entries: products,
            ceiling,
        })
    }

    /// `build` at the complete-coverage ceiling.
    pub fn build_complete(max_exponents: &[(u64, u32)]) -> Result<Self, GoodSizeError> {
        Self::build(max_exponents, Self::ceiling_for(max_exponents)?)
    }

    pub fn entries(&self) -> &[u64] {
        &self.entries
    }

    pub fn ceiling(&self) -> u64 {
        self.ceiling
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First `n` entries, for emission as a source artifact.
    pub fn prefix(&self, n: usize) -> Result<&[u64], GoodSizeError> {
        self.entries.get(..n).ok_or(GoodSizeError::PrefixTooLong {
            requested: n,
            available: self.entries.len(),
        })
    }

    pub fn lookup_larger(&self, x: u64) -> Result<u64, GoodSizeError> {
        lookup_larger(&self.entries, x)
    }

    pub fn lookup_smaller(&self, x: u64) -> Result<u64, GoodSizeError> {
        lookup_smaller(&self.entries, x)
    }
}

/// Smallest table entry `>= x`.
///
/// Free function over a plain sorted slice so an emitted literal table can be
/// queried without rebuilding a [`SmoothTable`].
pub fn lookup_larger(table: &[u64], x: u64) -> Result<u64, GoodSizeError> {
    let ip = table.partition_point(|&v| v < x);
    table.get(ip).copied().ok_or(GoodSizeError::NoLargerEntry(x))
}

/// Largest table entry `<= x` (the entry just before the right insertion
/// point).
pub fn lookup_smaller(table: &[u64], x: u64) -> Result<u64, GoodSizeError> {
    let ip = table.partition_point(|&v| v <= x);
    if ip == 0 {
        return Err(GoodSizeError::NoSmallerEntry(x));
    }
    Ok(table[ip - 1])
}

fn validate_exponents(max_exponents: &[(u64, u32)]) -> Result<(), GoodSizeError> {
    if max_exponents.is_empty() {
        return Err(GoodSizeError::EmptyExponents);
    }
    for (i, &(p, _)) in max_exponents.iter().enumerate() {
        if p < 2 {
            return Err(GoodSizeError::FactorTooSmall(p));
        }
        if max_exponents[..i].iter().any(|&(q, _)| q == p) {
            return Err(GoodSizeError::DuplicatePrime(p));
        }
    }
    Ok(())
}
