use rand::Rng;

/// Uniform integer in `lo..hi` (exclusive upper bound).
pub fn rand_range<R: Rng + ?Sized>(rng: &mut R, lo: usize, hi: usize) -> usize {
    rng.gen_range(lo..hi)
}

/// In-place Fisher-Yates shuffle, uniform over all permutations.
pub fn shuffle<T, R: Rng + ?Sized>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rand_range(rng, 0, i + 1);
        items.swap(i, j);
    }
}

/// Copy of `items` in shuffled order.
pub fn shuffled<T: Copy, R: Rng + ?Sized>(rng: &mut R, items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    shuffle(rng, &mut out);
    out
}
