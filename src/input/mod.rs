//! Input normalisation
//!
//! Sort runs operate on single digits only. [`normalize`] keeps every ASCII
//! decimal digit of the raw text, in order, and drops everything else:
//!
//! ```text
//! "3a1 2"  →  [3, 1, 2]
//! "-4.5"   →  [4, 5]
//! "abc"    →  []
//! ```
//!
//! There is no support for signs or multi-digit numbers.

use crate::engine::constants::RANDOM_DIGIT_POOL;
use crate::sorting::errors::SortError;
use rand::Rng;

/// Convert raw text into the digit array the drivers operate on
pub fn normalize(text: &str) -> Vec<u8> {
    text.bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect()
}

/// Like [`normalize`], but an empty result is an input error
pub fn normalize_checked(text: &str) -> Result<Vec<u8>, SortError> {
    let values = normalize(text);
    if values.is_empty() {
        return Err(SortError::NoValidNumbers);
    }
    Ok(values)
}

/// Produce a random permutation of the digit pool as input text
pub fn random_digits<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut pool: Vec<u8> = RANDOM_DIGIT_POOL.to_vec();
    let mut text = String::with_capacity(pool.len());

    while !pool.is_empty() {
        let digit = pool.swap_remove(rng.gen_range(0..pool.len()));
        text.push(char::from(b'0' + digit));
    }

    text
}

/// Join final values back into a digit string
pub fn flatten(values: &[u8]) -> String {
    values.iter().map(|&v| char::from(b'0' + v)).collect()
}
