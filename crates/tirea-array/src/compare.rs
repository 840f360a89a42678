//! Comparators and shallow equality checks for slices.
//!
//! The comparators return [`Ordering`] so they can be handed straight to
//! [`slice::sort_by`]. Values that cannot be ordered against each other
//! (such as `f64::NAN`) compare as [`Ordering::Equal`] rather than failing.

use std::cmp::Ordering;

/// Comparator to sort in ascending order.
///
/// ```
/// use tirea_array::compare_asc;
///
/// let mut v = [4, 2, 5];
/// v.sort_by(compare_asc);
/// assert_eq!(v, [2, 4, 5]);
/// ```
#[inline]
pub fn compare_asc<T: PartialOrd + ?Sized>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// Comparator to sort in descending order.
///
/// ```
/// use tirea_array::compare_desc;
///
/// let mut v = [4, 2, 5];
/// v.sort_by(compare_desc);
/// assert_eq!(v, [5, 4, 2]);
/// ```
#[inline]
pub fn compare_desc<T: PartialOrd + ?Sized>(a: &T, b: &T) -> Ordering {
    compare_asc(b, a)
}

/// Test whether two slices have the same length and equal items at every
/// position.
///
/// Items are compared with `==` only; no recursion into nested structure is
/// implied beyond what the element type's `PartialEq` does.
pub fn strict_shallow_equal<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter().zip(b).all(|(x, y)| x == y)
}

/// Test whether two slices of references point at the very same items.
///
/// Two structurally equal but distinct values are *not* considered equal.
pub fn ref_shallow_equal<T: ?Sized>(a: &[&T], b: &[&T]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter().zip(b).all(|(x, y)| std::ptr::eq(*x, *y))
}

/// Compare two slices lexicographically.
///
/// Items are compared up to the shorter length; if they are all equal the
/// shorter slice sorts first.
///
/// ```
/// use std::cmp::Ordering;
/// use tirea_array::compare_arrays;
///
/// assert_eq!(compare_arrays(&[1, 2], &[1, 2, 3]), Ordering::Less);
/// assert_eq!(compare_arrays(&[1, 3], &[1, 2]), Ordering::Greater);
/// assert_eq!(compare_arrays(&[1, 2], &[1, 2]), Ordering::Equal);
/// ```
pub fn compare_arrays<T: PartialOrd>(a: &[T], b: &[T]) -> Ordering {
    for (x, y) in a.iter().zip(b) {
        if x < y {
            return Ordering::Less;
        }
        if x > y {
            return Ordering::Greater;
        }
    }

    a.len().cmp(&b.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_compare_asc_desc() {
        assert_eq!(compare_asc(&1, &2), Ordering::Less);
        assert_eq!(compare_asc(&2, &1), Ordering::Greater);
        assert_eq!(compare_asc(&2, &2), Ordering::Equal);
        assert_eq!(compare_desc(&1, &2), Ordering::Greater);
        assert_eq!(compare_desc(&2, &1), Ordering::Less);
        assert_eq!(compare_asc("a", "b"), Ordering::Less);
    }

    #[test]
    fn test_compare_nan_is_equal() {
        assert_eq!(compare_asc(&f64::NAN, &1.0), Ordering::Equal);
        assert_eq!(compare_desc(&1.0, &f64::NAN), Ordering::Equal);
    }

    #[test]
    fn test_strict_shallow_equal() {
        assert!(strict_shallow_equal(&[1, 2, 3], &[1, 2, 3]));
        assert!(!strict_shallow_equal(&[1, 2, 3], &[1, 2, 4]));
        assert!(!strict_shallow_equal(&[1, 2], &[1, 2, 3]));
        assert!(strict_shallow_equal::<i32>(&[], &[]));
    }

    #[test]
    fn test_ref_shallow_equal() {
        let a = json!({"x": 1});
        let b = json!({"x": 1});
        assert!(ref_shallow_equal(&[&a, &b], &[&a, &b]));
        // structurally equal, different allocation
        assert!(!ref_shallow_equal(&[&a], &[&b]));
        assert!(!ref_shallow_equal(&[&a], &[&a, &b]));
    }

    #[test]
    fn test_compare_arrays() {
        assert_eq!(compare_arrays(&[1, 2], &[1, 2, 3]), Ordering::Less);
        assert_eq!(compare_arrays(&[1, 3], &[1, 2]), Ordering::Greater);
        assert_eq!(compare_arrays(&[1, 2], &[1, 2]), Ordering::Equal);
        assert_eq!(compare_arrays::<i32>(&[], &[]), Ordering::Equal);
        assert_eq!(compare_arrays(&["b"], &["a", "z"]), Ordering::Greater);
    }

    proptest! {
        #[test]
        fn test_sort_asc_is_non_decreasing(mut v in prop::collection::vec(any::<i64>(), 0..64)) {
            let mut expected = v.clone();
            expected.sort();
            v.sort_by(compare_asc);
            prop_assert!(v.windows(2).all(|w| w[0] <= w[1]));
            prop_assert_eq!(v, expected);
        }

        #[test]
        fn test_sort_desc_is_non_increasing(mut v in prop::collection::vec(any::<i64>(), 0..64)) {
            v.sort_by(compare_desc);
            prop_assert!(v.windows(2).all(|w| w[0] >= w[1]));
        }

        #[test]
        fn test_sort_is_stable(mut v in prop::collection::vec((0u8..4, any::<u16>()), 0..64)) {
            let original = v.clone();
            v.sort_by(|a, b| compare_asc(&a.0, &b.0));
            for key in 0u8..4 {
                let before: Vec<_> = original.iter().filter(|p| p.0 == key).collect();
                let after: Vec<_> = v.iter().filter(|p| p.0 == key).collect();
                prop_assert_eq!(before, after);
            }
        }

        #[test]
        fn test_shallow_equal_flips_on_single_change(
            v in prop::collection::vec(any::<i32>(), 1..32),
            idx in any::<prop::sample::Index>(),
        ) {
            let mut changed = v.clone();
            let i = idx.index(v.len());
            changed[i] = changed[i].wrapping_add(1);
            prop_assert!(strict_shallow_equal(&v, &v.clone()));
            prop_assert!(!strict_shallow_equal(&v, &changed));
        }

        #[test]
        fn test_compare_arrays_matches_slice_ord(
            a in prop::collection::vec(0u8..4, 0..8),
            b in prop::collection::vec(0u8..4, 0..8),
        ) {
            prop_assert_eq!(compare_arrays(&a, &b), a.as_slice().cmp(b.as_slice()));
        }
    }
}
