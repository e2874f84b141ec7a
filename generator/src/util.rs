use rand::seq::IndexedRandom;
use rand::Rng;

use crate::scanner::Charset;

pub fn coin_toss<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.random_bool(0.5)
}

/// A string of `length` characters drawn uniformly and independently
/// from the alphabet. The alphabet must be non-empty.
pub fn random_string<R: Rng + ?Sized>(rng: &mut R, charset: &Charset, length: usize) -> String {
    (0..length)
        .map(|_| *charset.alphabet().choose(rng).expect("empty alphabet"))
        .collect()
}

/// Fold a non-empty sequence of terms into one from the right: the last
/// two terms combine first, then the result combines with the term
/// before them, and so on.
pub fn join_terms_with<T, F>(terms: Vec<T>, mut join: F) -> T
where
    F: FnMut(T, T) -> T,
{
    assert!(!terms.is_empty(), "no terms to join");

    let mut rest = terms.into_iter().rev();
    let mut result = rest.next().unwrap();
    for term in rest {
        result = join(term, result);
    }
    result
}

pub fn all_same<T: PartialEq>(items: &[T]) -> bool {
    match items.first() {
        None => true,
        Some(first) => items.iter().all(|item| item == first),
    }
}
