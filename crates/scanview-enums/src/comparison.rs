//! Ordering helpers for enum members.

use std::cmp::Ordering;

/// Compare two optional values. `None` orders before any value; present
/// values use their natural order.
///
/// Works for anything with a partial order (numbers, strings). Values that
/// are unordered relative to each other (NaN) compare as `Greater`.
pub fn compare_values<T: PartialOrd>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => {
            if a == b {
                Ordering::Equal
            } else if a < b {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        }
    }
}

/// Sort `items` by `comparer`, keeping the original relative order of
/// items that compare equal.
///
/// Sorts indices rather than the items so the input is left untouched and
/// ties are broken explicitly by position.
pub fn stable_sort<'a, T, F>(items: &'a [T], mut comparer: F) -> Vec<&'a T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut indices: Vec<usize> = (0..items.len()).collect();
    indices.sort_unstable_by(|&x, &y| comparer(&items[x], &items[y]).then_with(|| x.cmp(&y)));
    indices.into_iter().map(|i| &items[i]).collect()
}

#[cfg(test)]
#[path = "tests/comparison_tests.rs"]
mod tests;
