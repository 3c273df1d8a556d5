/// Maps `key` to a bucket in `0..capacity` by summing the code points of its
/// characters. Anagrams land in the same bucket.
pub fn sum_hash(key: &str, capacity: usize) -> usize {
    debug_assert!(capacity > 0);
    let total = key.chars().fold(0u64, |acc, c| acc.wrapping_add(c as u64));
    (total % capacity as u64) as usize
}
