//! Small slice helpers: index iteration, truncation, prefix matching and
//! moving a block of items.

use crate::{ArrayError, ArrayResult};

/// Invoke `iteratee` with every index in `start..end`, in ascending order.
///
/// Nothing happens when `end <= start`.
pub fn for_each_index<F>(start: usize, end: usize, mut iteratee: F)
where
    F: FnMut(usize),
{
    for index in start..end {
        iteratee(index);
    }
}

/// Limit the number of items in a slice.
///
/// Returns the first `max` items when the slice is longer, otherwise the
/// slice itself.
///
/// ```
/// use tirea_array::limit;
///
/// assert_eq!(limit(&[1, 2, 3, 4], 2), &[1, 2]);
/// let short = [1, 2];
/// assert!(std::ptr::eq(limit(&short, 5), &short[..]));
/// ```
#[inline]
pub fn limit<T>(array: &[T], max: usize) -> &[T] {
    if array.len() > max {
        &array[..max]
    } else {
        array
    }
}

/// Test whether `array` starts with the items of `search_array`.
///
/// Items are compared structurally. An `array` shorter than `search_array`
/// never matches.
pub fn array_starts_with<T: PartialEq>(array: &[T], search_array: &[T]) -> bool {
    array_starts_with_by(array, search_array, |a, b| a == Some(b))
}

/// Test whether `array` starts with the items of `search_array`, using a
/// custom equality.
///
/// `equal` receives `None` for positions past the end of `array`; lengths
/// are not checked up front, so it decides how a missing item compares.
pub fn array_starts_with_by<T, F>(array: &[T], search_array: &[T], mut equal: F) -> bool
where
    F: FnMut(Option<&T>, &T) -> bool,
{
    search_array
        .iter()
        .enumerate()
        .all(|(i, search)| equal(array.get(i), search))
}

/// Move `count` items starting at `index` by `offset` positions.
///
/// Returns a new vector; the input is left untouched. Out of range
/// arguments are clamped the way a splice would clamp them: the removed
/// block is cut at the end of the array, and a negative destination counts
/// back from the end. Use [`try_move_items`] to reject them instead.
///
/// ```
/// use tirea_array::move_items;
///
/// assert_eq!(move_items(&[1, 2, 3, 4, 5], 1, 2, 1), vec![1, 4, 2, 3, 5]);
/// ```
pub fn move_items<T: Clone>(array: &[T], index: usize, count: usize, offset: isize) -> Vec<T> {
    let mut copy = array.to_vec();

    let start = index.min(copy.len());
    let end = start + count.min(copy.len() - start);
    let moving: Vec<T> = copy.drain(start..end).collect();

    let origin = isize::try_from(index).unwrap_or(isize::MAX);
    let target = splice_position(origin.saturating_add(offset), copy.len());
    let tail = copy.split_off(target);
    copy.extend(moving);
    copy.extend(tail);
    copy
}

/// Like [`move_items`], but fails instead of clamping.
///
/// The block `index..index + count` must lie within the array, and so must
/// its destination `index + offset..index + offset + count`.
pub fn try_move_items<T: Clone>(
    array: &[T],
    index: usize,
    count: usize,
    offset: isize,
) -> ArrayResult<Vec<T>> {
    let len = array.len();

    if index.checked_add(count).map_or(true, |end| end > len) {
        tracing::debug!(index, count, len, "move source out of range");
        return Err(ArrayError::index_out_of_bounds(
            index.saturating_add(count),
            len,
        ));
    }

    let target = (index as isize).checked_add(offset).ok_or_else(|| {
        ArrayError::invalid_argument(format!("offset {offset} overflows index {index}"))
    })?;
    if target < 0 {
        tracing::debug!(index, offset, "move target before start of array");
        return Err(ArrayError::invalid_argument(format!(
            "move target {target} is before the start of the array"
        )));
    }
    let target = target as usize;
    if target + count > len {
        tracing::debug!(index, count, offset, len, "move target out of range");
        return Err(ArrayError::index_out_of_bounds(target + count, len));
    }

    Ok(move_items(array, index, count, offset))
}

/// Resolve a possibly negative splice position against `len`.
fn splice_position(pos: isize, len: usize) -> usize {
    if pos < 0 {
        len.saturating_sub(pos.unsigned_abs())
    } else {
        (pos as usize).min(len)
    }
}
