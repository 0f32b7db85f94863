//! Ordered sequence helpers

/// Remove the element at `index`, shifting later elements down.
///
/// Out-of-range indices leave the sequence untouched, so a stale index from an earlier view of
/// the list never removes an unintended element or panics.
pub fn remove_at<T>(sequence: &mut Vec<T>, index: usize) -> Option<T> {
    (index < sequence.len()).then(|| sequence.remove(index))
}
