use crate::factors::is_smooth;
use crate::{FactorSet, GoodSizeError, Nearest, SearchDirection};

/// Walks from `n` one step at a time until a smooth value is hit.
///
/// Ascending always terminates: powers of the smallest allowed factor are
/// unbounded above. Descending is bounded below by the smallest allowed
/// factor; a walk that exhausts every value down to 1 without a hit returns
/// `Nearest::Clamped(factors.smallest())`, which happens exactly when the
/// input is already below that factor. The asymmetry is intentional and must
/// stay: smooth numbers are unbounded above but bounded below.
pub fn nearest_smooth(
    n: u64,
    direction: SearchDirection,
    factors: &FactorSet,
) -> Result<Nearest, GoodSizeError> {
    if n == 0 {
        return Err(GoodSizeError::ZeroDimension);
    }

    match direction {
        SearchDirection::Ascending => {
            let mut cur = n;
            loop {
                if is_smooth(cur, factors)? {
                    return Ok(Nearest::Found(cur));
                }
                cur += 1;
            }
        }
        SearchDirection::Descending => {
            let mut cur = n;
            while cur >= 1 {
                if is_smooth(cur, factors)? {
                    return Ok(Nearest::Found(cur));
                }
                cur -= 1;
            }
            Ok(Nearest::Clamped(factors.smallest()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SearchDirection::{Ascending, Descending};

    fn default_up(n: u64) -> Nearest {
        nearest_smooth(n, Ascending, &FactorSet::default()).unwrap()
    }

    fn default_down(n: u64) -> Nearest {
        nearest_smooth(n, Descending, &FactorSet::default()).unwrap()
    }

    // ----- Concrete Values -----

    #[test]
    fn ascending_123_gives_125() {
        assert_eq!(default_up(123), Nearest::Found(125));
    }

    #[test]
    fn descending_123_gives_120() {
        assert_eq!(default_down(123), Nearest::Found(120));
    }

    #[test]
    fn descending_123_with_2_3_gives_108() {
        let f = FactorSet::new([2, 3]).unwrap();
        assert_eq!(
            nearest_smooth(123, Descending, &f).unwrap(),
            Nearest::Found(108)
        );
    }

    #[test]
    fn descending_123_with_2_gives_64() {
        let f = FactorSet::new([2]).unwrap();
        assert_eq!(
            nearest_smooth(123, Descending, &f).unwrap(),
            Nearest::Found(64)
        );
    }

    #[test]
    fn smooth_input_is_returned_unchanged() {
        assert_eq!(default_up(120), Nearest::Found(120));
        assert_eq!(default_down(120), Nearest::Found(120));
    }

    // ----- Boundary Behavior -----

    #[test]
    fn descending_from_one_clamps() {
        assert_eq!(default_down(1), Nearest::Clamped(2));
    }

    #[test]
    fn ascending_from_one_does_not_clamp() {
        assert_eq!(default_up(1), Nearest::Found(2));
    }

    #[test]
    fn descending_below_large_smallest_factor_clamps() {
        let f = FactorSet::new([5, 7]).unwrap();
        assert_eq!(
            nearest_smooth(4, Descending, &f).unwrap(),
            Nearest::Clamped(5)
        );
    }

    #[test]
    fn zero_is_rejected_in_both_directions() {
        let f = FactorSet::default();
        assert_eq!(
            nearest_smooth(0, Ascending, &f),
            Err(GoodSizeError::ZeroDimension)
        );
        assert_eq!(
            nearest_smooth(0, Descending, &f),
            Err(GoodSizeError::ZeroDimension)
        );
    }

    // ----- Order Properties -----

    #[test]
    fn ascending_result_is_nearest_from_above() {
        let f = FactorSet::default();
        for n in 1..2000u64 {
            let res = nearest_smooth(n, Ascending, &f).unwrap();
            let v = res.get();
            assert!(v >= n);
            assert!(is_smooth(v, &f).unwrap());
            for between in n..v {
                assert!(between == 1 || !is_smooth(between, &f).unwrap());
            }
        }
    }

    #[test]
    fn descending_result_is_nearest_from_below() {
        let f = FactorSet::default();
        for n in 2..2000u64 {
            let res = nearest_smooth(n, Descending, &f).unwrap();
            assert!(!res.is_clamped());
            let v = res.get();
            assert!(v <= n);
            assert!(is_smooth(v, &f).unwrap());
            for between in (v + 1)..=n {
                assert!(!is_smooth(between, &f).unwrap());
            }
        }
    }

    #[test]
    fn search_is_idempotent() {
        let f = FactorSet::default();
        for n in [1, 13, 123, 997, 5000] {
            for dir in [Ascending, Descending] {
                let once = nearest_smooth(n, dir, &f).unwrap().get();
                let twice = nearest_smooth(once, dir, &f).unwrap().get();
                assert_eq!(once, twice);
            }
        }
    }
}
