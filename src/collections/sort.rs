use std::cmp::Ordering;

use crate::collections::Sequence;
use crate::error::Result;

/// Which sorter a report should use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Algorithm {
    /// Stable, O(n log n), one scratch buffer of n slots.
    #[default]
    Merge,
    /// In place, not stable, O(n²) on already-sorted input.
    Quick,
}

impl Algorithm {
    pub fn sort<T, S, F>(self, list: &mut S, compare: F) -> Result<()>
    where
        T: Clone,
        S: Sequence<T> + ?Sized,
        F: FnMut(&T, &T) -> Ordering,
    {
        match self {
            Algorithm::Merge => merge_sort(list, compare),
            Algorithm::Quick => quick_sort(list, compare),
        }
    }
}

/// Stable top-down merge sort.
///
/// Splits at `low + (high - low) / 2`. Each merge copies its range into a
/// scratch buffer sized to the whole list, then writes back, taking from the
/// left run whenever the two heads compare equal. That tie rule is what
/// makes the sort stable.
pub fn merge_sort<T, S, F>(list: &mut S, mut compare: F) -> Result<()>
where
    T: Clone,
    S: Sequence<T> + ?Sized,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = list.len();
    if len <= 1 {
        return Ok(());
    }
    let mut scratch: Vec<Option<T>> = vec![None; len];
    merge_sort_range(list, 0, len - 1, &mut scratch, &mut compare)
}

fn merge_sort_range<T, S, F>(
    list: &mut S,
    low: usize,
    high: usize,
    scratch: &mut [Option<T>],
    compare: &mut F,
) -> Result<()>
where
    T: Clone,
    S: Sequence<T> + ?Sized,
    F: FnMut(&T, &T) -> Ordering,
{
    if low >= high {
        return Ok(());
    }
    let mid = low + (high - low) / 2;
    merge_sort_range(list, low, mid, scratch, compare)?;
    merge_sort_range(list, mid + 1, high, scratch, compare)?;
    merge(list, low, mid, high, scratch, compare)
}

fn merge<T, S, F>(
    list: &mut S,
    low: usize,
    mid: usize,
    high: usize,
    scratch: &mut [Option<T>],
    compare: &mut F,
) -> Result<()>
where
    T: Clone,
    S: Sequence<T> + ?Sized,
    F: FnMut(&T, &T) -> Ordering,
{
    for index in low..=high {
        scratch[index] = Some(list.get(index)?.clone());
    }

    let (mut left, mut right) = (low, mid + 1);
    for out in low..=high {
        let from_left = if left > mid {
            false
        } else if right > high {
            true
        } else {
            match (&scratch[left], &scratch[right]) {
                // equal heads: left run first
                (Some(l), Some(r)) => compare(l, r) != Ordering::Greater,
                _ => true,
            }
        };
        let source = if from_left {
            left += 1;
            left - 1
        } else {
            right += 1;
            right - 1
        };
        if let Some(item) = scratch[source].take() {
            list.set(out, item)?;
        }
    }
    Ok(())
}

/// In-place quick sort with Lomuto partitioning.
///
/// The pivot is always the last element of the current range. Input that is
/// already sorted (or reverse sorted) therefore degrades to O(n²)
/// comparisons; the pivot is not randomized. To keep the call stack at
/// O(log n) on that input, only the smaller side of each partition is
/// recursed into and the larger side is handled by the loop. The sequence of
/// partitions, and so the final order of equal elements, is the same as the
/// plain recursive form.
pub fn quick_sort<T, S, F>(list: &mut S, mut compare: F) -> Result<()>
where
    S: Sequence<T> + ?Sized,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = list.len();
    if len <= 1 {
        return Ok(());
    }
    quick_sort_range(list, 0, len - 1, &mut compare)
}

fn quick_sort_range<T, S, F>(list: &mut S, mut low: usize, mut high: usize, compare: &mut F) -> Result<()>
where
    S: Sequence<T> + ?Sized,
    F: FnMut(&T, &T) -> Ordering,
{
    while low < high {
        let pivot = partition(list, low, high, compare)?;
        if pivot - low < high - pivot {
            if pivot > low {
                quick_sort_range(list, low, pivot - 1, compare)?;
            }
            low = pivot + 1;
        } else {
            if pivot < high {
                quick_sort_range(list, pivot + 1, high, compare)?;
            }
            if pivot == low {
                break;
            }
            high = pivot - 1;
        }
    }
    Ok(())
}

/// Lomuto partition of `[low, high]` around `list[high]`. Returns the
/// pivot's final index; everything before it is `<=` the pivot.
fn partition<T, S, F>(list: &mut S, low: usize, high: usize, compare: &mut F) -> Result<usize>
where
    S: Sequence<T> + ?Sized,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut store = low;
    for index in low..high {
        if compare(list.get(index)?, list.get(high)?) != Ordering::Greater {
            list.swap(store, index)?;
            store += 1;
        }
    }
    list.swap(store, high)?;
    Ok(store)
}
