use rand::Rng;


/// Returns a uniformly random permutation of `items` as a new vector.
///
/// Fisher-Yates over a private copy: for every index `i` from the back down
/// to 1, swaps `items[i]` with a uniformly chosen `items[j]`, `j ≤ i`. Each
/// of the n! orderings is equally likely given a uniform `rng`. Inputs of
/// length 0 and 1 come back unchanged.
pub fn permute<T: Clone>(items: &[T], rng: &mut impl Rng) -> Vec<T> {
    let mut items = items.to_vec();
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
    items
}
