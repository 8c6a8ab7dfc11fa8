use rdf_mapping_model::Value;
use rustc_hash::FxHashMap;

/// The join key values of a tuple, in the order of the join conditions.
pub(super) type JoinKey<'tuple> = Vec<&'tuple Value>;

/// Returns the indices of all matching `(left, right)` pairs by comparing every pair.
///
/// Pairs are ordered by the left index first and the right index second.
pub(super) fn nested_loop_join<'tuple>(
    left: &[JoinKey<'tuple>],
    right: &[JoinKey<'tuple>],
) -> Vec<(usize, usize)> {
    let mut result = Vec::new();
    for (left_idx, left_key) in left.iter().enumerate() {
        for (right_idx, right_key) in right.iter().enumerate() {
            if left_key == right_key {
                result.push((left_idx, right_idx));
            }
        }
    }
    result
}

/// Returns the indices of all matching `(left, right)` pairs using a hash index over the right
/// keys.
///
/// The index keeps the right indices of each bucket in ascending order, which yields the same
/// output order as [nested_loop_join].
pub(super) fn hash_join<'tuple>(
    left: &[JoinKey<'tuple>],
    right: &[JoinKey<'tuple>],
) -> Vec<(usize, usize)> {
    let mut index: FxHashMap<&[&'tuple Value], Vec<usize>> = FxHashMap::default();
    for (right_idx, right_key) in right.iter().enumerate() {
        index.entry(right_key.as_slice()).or_default().push(right_idx);
    }

    let mut result = Vec::new();
    for (left_idx, left_key) in left.iter().enumerate() {
        if let Some(matches) = index.get(left_key.as_slice()) {
            result.extend(matches.iter().map(|right_idx| (left_idx, *right_idx)));
        }
    }
    result
}
