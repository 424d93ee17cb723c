use std::collections::BTreeSet;
use std::ops::Bound;

/// Rearranges `values` into the next lexicographically greater permutation.
///
/// Returns false, leaving `values` sorted ascending, when they were already the greatest
/// permutation.
pub fn next_permutation<T: Ord>(values: &mut [T]) -> bool {
    if values.len() < 2 {
        return false;
    }

    // The longest non-increasing suffix can't be made any greater on its own.
    let mut pivot = values.len() - 1;
    while pivot > 0 && values[pivot - 1] >= values[pivot] {
        pivot -= 1;
    }
    if pivot == 0 {
        values.reverse();
        return false;
    }

    let mut successor = values.len() - 1;
    while values[successor] <= values[pivot - 1] {
        successor -= 1;
    }
    values.swap(pivot - 1, successor);
    values[pivot..].reverse();
    true
}

/// Copies `values`, skipping any element equal to the one before it.
pub fn unique_copy<T: PartialEq + Clone>(values: &[T]) -> Vec<T> {
    let mut unique: Vec<T> = Vec::with_capacity(values.len());
    for value in values {
        if unique.last() != Some(value) {
            unique.push(value.clone());
        }
    }
    unique
}

/// Folds `values` into `seed` with `reduce`, from the first element to the last.
pub fn accumulate<T, A, F>(values: &[T], seed: A, reduce: F) -> A
where
    F: FnMut(A, &T) -> A,
{
    values.iter().fold(seed, reduce)
}

/// Every element matching `predicate`, found by restarting the search after each hit.
pub fn find_all<T, P>(values: &[T], mut predicate: P) -> Vec<&T>
where
    P: FnMut(&T) -> bool,
{
    let mut found = Vec::new();
    let mut rest = values;
    while let Some(pos) = rest.iter().position(&mut predicate) {
        found.push(&rest[pos]);
        rest = &rest[pos + 1..];
    }
    found
}

/// Overwrites every slot of `values` with successive results of `generator`.
pub fn generate<T, G: FnMut() -> T>(values: &mut [T], mut generator: G) {
    for slot in values {
        *slot = generator();
    }
}

/// Appends `count` successive results of `generator` to `values`.
pub fn generate_n<T, G: FnMut() -> T>(values: &mut Vec<T>, count: usize, generator: G) {
    values.extend(std::iter::repeat_with(generator).take(count));
}

/// Replaces every element matching `predicate` with a copy of `replacement`.
pub fn replace_if<T: Clone, P: FnMut(&T) -> bool>(values: &mut [T], mut predicate: P, replacement: &T) {
    for value in values.iter_mut().filter(|value| predicate(value)) {
        *value = replacement.clone();
    }
}

/// Removes every element matching `predicate` and returns how many were removed.
pub fn remove_if<T, P: FnMut(&T) -> bool>(values: &mut Vec<T>, mut predicate: P) -> usize {
    let before = values.len();
    values.retain(|value| !predicate(value));
    before - values.len()
}

/// The first element not less than `key`.
pub fn lower_bound<'a, T: Ord>(set: &'a BTreeSet<T>, key: &T) -> Option<&'a T> {
    set.range(key..).next()
}

/// The first element greater than `key`.
pub fn upper_bound<'a, T: Ord>(set: &'a BTreeSet<T>, key: &T) -> Option<&'a T> {
    set.range((Bound::Excluded(key), Bound::Unbounded)).next()
}

/// Splits `set` into the elements below `key`, equal to it, and above it.
pub fn partition_around<'a, T: Ord>(
    set: &'a BTreeSet<T>,
    key: &T,
) -> (Vec<&'a T>, Vec<&'a T>, Vec<&'a T>) {
    let below = set.range(..key).collect();
    let equal = set.range(key..=key).collect();
    let above = set.range((Bound::Excluded(key), Bound::Unbounded)).collect();
    (below, equal, above)
}
