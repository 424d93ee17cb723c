//! Fixed-size arrays: initialization, length queries, const-generic parameters, counting over a
//! sub-slice and multi-dimensional layouts.

use std::mem;

use tracing::trace;

use crate::tour::{TourError, Transcript};

/// Sums an array of any length. The length is part of the type, so callers never pass it
/// separately.
pub fn sum<const N: usize>(values: [i32; N]) -> i32 {
    values.iter().sum()
}

/// Counts how many elements of `values[start..end]` equal `needle`.
pub fn count_in(values: &[i32], start: usize, end: usize, needle: i32) -> usize {
    values[start..end].iter().filter(|&&value| value == needle).count()
}

/// Fills `grid` row by row, visiting adjacent memory in order.
pub fn fill_row_major<const R: usize, const C: usize>(grid: &mut [[i32; C]; R], value: i32) {
    for row in grid.iter_mut() {
        for cell in row.iter_mut() {
            *cell = value;
        }
    }
}

/// Fills `grid` column by column. Same result as [`fill_row_major`], but each step jumps a full
/// row ahead in memory.
pub fn fill_column_major<const R: usize, const C: usize>(grid: &mut [[i32; C]; R], value: i32) {
    for column in 0..C {
        for row in grid.iter_mut() {
            row[column] = value;
        }
    }
}

pub fn run(out: &mut Transcript) -> Result<(), TourError> {
    // Unlisted trailing elements have to be spelled out; there is no implicit zero fill.
    let _explicit = [1, 2, 3];
    let _padded = [4, 5, 6, 0, 0, 0];
    let _zeroed = [0; 10];

    let a = [1, 2, 3, 4, 5];
    out.token(mem::size_of_val(&a) / mem::size_of::<i32>())?;
    out.token(a.len())?;

    let three: [i32; 3] = [1, 2, 3];
    out.token(three.len())?;

    out.token(sum([1, 2, 3, 4, 5]))?;
    out.token(sum([1, 3, 5]))?;

    let values = [1, 3, 3, 4, 3, 3, 7, 3, 3, 3, 2, 3, 5, 4, 2, 3, 4, 2];
    out.token(count_in(&values, 0, 9, 3))?;

    let mut identity = [[1, 0], [0, 1]];
    identity[0][1] = 8;
    trace!(?identity, "modified one cell of a nested array");

    let mut grid = [[0; 6]; 3];
    fill_row_major(&mut grid, 1);
    fill_column_major(&mut grid, 1);

    let mut local = [0; 3];
    local[1] = 1;
    local[2] = 2;
    out.token(local.len())?;

    // A boxed slice still knows its length, unlike a bare pointer to heap memory.
    let mut heap = vec![0; 4].into_boxed_slice();
    for (index, slot) in heap.iter_mut().enumerate() {
        *slot = index as i32;
    }
    out.token(heap.len())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_over_any_length() {
        assert_eq!(sum([1, 2, 3, 4, 5]), 15);
        assert_eq!(sum([1, 3, 5]), 9);
        assert_eq!(sum([]), 0, "An empty array sums to zero.");
    }

    #[test]
    fn test_count_in_sub_slice() {
        let values = [1, 3, 3, 4, 3, 3, 7, 3, 3, 3, 2, 3];
        assert_eq!(count_in(&values, 0, 9, 3), 6, "Only the first nine elements are counted.");
        assert_eq!(count_in(&values, 0, values.len(), 3), 8);
    }

    #[test]
    fn test_fill_orders_agree() {
        let mut rows = [[0; 4]; 2];
        let mut columns = [[0; 4]; 2];
        fill_row_major(&mut rows, 7);
        fill_column_major(&mut columns, 7);
        assert_eq!(rows, columns);
        assert_eq!(rows, [[7; 4]; 2]);
    }

    #[test]
    fn test_arrays_topic() {
        let mut out = Transcript::new();
        run(&mut out).unwrap();
        assert_eq!(out.as_str(), "5 5 3 15 9 6 3 4 ");
    }
}
