use std::cmp::Ordering;

/// Sorts `items` ascending into a new vector. Equal elements keep their input order.
pub fn merge_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    merge_sort_by(items, &mut T::cmp)
}

/// Top-down merge sort with a caller-supplied comparator.
///
/// Splits at `len / 2`, sorts both halves recursively and merges them. On ties
/// the left half wins, which keeps the sort stable.
pub fn merge_sort_by<T, F>(items: &[T], compare: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items.to_vec();
    }

    let mid = items.len() / 2;
    let left = merge_sort_by(&items[..mid], compare);
    let right = merge_sort_by(&items[mid..], compare);
    merge(left, right, compare)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, compare: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut out = Vec::with_capacity(left.len() + right.len());
    let (mut lp, mut rp) = (0, 0);

    while lp < left.len() && rp < right.len() {
        if compare(&left[lp], &right[rp]) != Ordering::Greater {
            out.push(left[lp].clone());
            lp += 1;
        } else {
            out.push(right[rp].clone());
            rp += 1;
        }
    }

    out.extend_from_slice(&left[lp..]);
    out.extend_from_slice(&right[rp..]);
    out
}
