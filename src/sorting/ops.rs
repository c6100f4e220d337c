// Helpers shared by several drivers

use rand::Rng;

/// Whether `values` is in non-descending order
pub fn is_sorted(values: &[u8]) -> bool {
    values.windows(2).all(|pair| pair[0] <= pair[1])
}

/// Every position of an array of length `len`
pub fn all_indices(len: usize) -> Vec<usize> {
    (0..len).collect()
}

/// Fisher–Yates shuffle, walking from the last position down to 1
pub fn shuffle<R: Rng + ?Sized>(values: &mut [u8], rng: &mut R) {
    for i in (1..values.len()).rev() {
        let j = rng.gen_range(0..=i);
        values.swap(i, j);
    }
}
