//! Combination and subset enumeration.
//!
//! Output sizes grow exponentially with `items.len()` — callers are
//! responsible for keeping inputs small enough to enumerate.

use std::ops::Bound;
use std::ops::RangeBounds;

/// Enumerate every subsequence of `items` with exactly `len` elements.
///
/// Each combination preserves the relative order of `items`, and the
/// combinations themselves come out in lexicographic order of the chosen
/// index positions: for `[1, 2, 3]` choose 2, `[1,2], [1,3], [2,3]`.
///
/// `len == 0` yields a single empty combination; `len > items.len()` yields
/// nothing.
pub fn combinations<T: Clone>(items: &[T], len: usize) -> Vec<Vec<T>> {
    let n = items.len();
    if len > n {
        return Vec::new();
    }
    if len == 0 {
        return vec![Vec::new()];
    }

    // Explicit index vector rather than recursion, so deep selections on
    // long inputs cannot exhaust the call stack.
    let mut idx: Vec<usize> = (0..len).collect();
    let mut out = Vec::new();
    loop {
        out.push(idx.iter().map(|&i| items[i].clone()).collect());

        // Rightmost index that has room to advance.
        let mut i = len;
        while i > 0 && idx[i - 1] == i - 1 + n - len {
            i -= 1;
        }
        if i == 0 {
            break;
        }
        idx[i - 1] += 1;
        for j in i..len {
            idx[j] = idx[j - 1] + 1;
        }
    }
    out
}

/// Enumerate subsets of `items` whose sizes fall in `lens`, ascending by
/// size, with per-size ordering as in [`combinations`].
///
/// An unbounded start means size 1 (the empty subset is excluded by
/// default); an unbounded end means `items.len()`. Inverted or empty size
/// ranges yield an empty result rather than panicking.
pub fn subsets<T: Clone>(items: &[T], lens: impl RangeBounds<usize>) -> Vec<Vec<T>> {
    let lo = match lens.start_bound() {
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s + 1,
        Bound::Unbounded => 1,
    };
    let hi = match lens.end_bound() {
        Bound::Included(&e) => e.min(items.len()),
        Bound::Excluded(&0) => return Vec::new(),
        Bound::Excluded(&e) => (e - 1).min(items.len()),
        Bound::Unbounded => items.len(),
    };

    let mut out = Vec::new();
    let mut len = lo;
    while len <= hi {
        out.extend(combinations(items, len));
        len += 1;
    }
    out
}
