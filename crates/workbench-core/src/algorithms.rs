//! Pure workload primitives: recursive Fibonacci, trial-division primes and
//! byte-oriented text transforms.
//!
//! Text functions deliberately work on raw UTF-8 bytes and the C-locale
//! character classes so that lengths, samples and counts match the other
//! implementations of the benchmark byte for byte. None of them are
//! Unicode-aware.

use std::collections::BTreeMap;

use serde::Serialize;

/// Returns the `n`th Fibonacci number by naive double recursion.
///
/// Exponential on purpose: this is the CPU load generator. Callers are
/// responsible for keeping `n` within the range whose result fits an `i64`
/// (see [`crate::workload::cpu::MAX_FIBONACCI_N`]).
pub fn fibonacci(n: u32) -> i64 {
    if n <= 1 {
        return i64::from(n);
    }
    fibonacci(n - 1) + fibonacci(n - 2)
}

/// Trial division by odd divisors up to `floor(sqrt(n))`.
pub fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let limit = f64::from(n).sqrt() as u32;
    let mut divisor = 3;
    while divisor <= limit {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Every prime in `[2, limit]`, ascending.
pub fn find_primes(limit: u32) -> Vec<u32> {
    (2..=limit).filter(|&i| is_prime(i)).collect()
}

/// Reverses the raw bytes of `text`.
///
/// Multi-byte UTF-8 sequences come out reversed too, so the result is not
/// generally valid UTF-8.
pub fn reverse_bytes(text: &str) -> Vec<u8> {
    text.bytes().rev().collect()
}

/// ASCII uppercasing; non-ASCII bytes pass through untouched.
pub fn to_upper_ascii(text: &str) -> String {
    text.to_ascii_uppercase()
}

/// Number of distinct byte values in `text`.
pub fn count_unique_bytes(text: &str) -> usize {
    let mut seen = [false; 256];
    let mut unique = 0;
    for b in text.bytes() {
        let slot = &mut seen[usize::from(b)];
        if !*slot {
            *slot = true;
            unique += 1;
        }
    }
    unique
}

/// `1 + number of '\n' bytes`. An empty text still has one line.
pub fn line_count(text: &str) -> usize {
    1 + text.bytes().filter(|&b| b == b'\n').count()
}

/// The C `isspace` set in the "C" locale.
pub fn is_c_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\u{0b}' | '\u{0c}' | '\r')
}

/// Splits on runs of whitespace, dropping empty tokens.
pub fn tokenize_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_c_space).filter(|token| !token.is_empty())
}

/// Lowercased, punctuation-stripped token counts.
///
/// A `BTreeMap` keeps iteration sorted by word so the top-N selection in
/// [`top_words`] is reproducible.
pub fn word_frequency(text: &str) -> BTreeMap<String, usize> {
    let mut freq = BTreeMap::new();
    for token in tokenize_words(text) {
        let word: String = token
            .chars()
            .filter(|c| !c.is_ascii_punctuation())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        if !word.is_empty() {
            *freq.entry(word).or_insert(0) += 1;
        }
    }
    freq
}

/// One row of the `top_words` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// The `limit` most frequent words, highest count first.
///
/// Ties keep the map's ascending word order (the sort is stable).
pub fn top_words(freq: &BTreeMap<String, usize>, limit: usize) -> Vec<WordCount> {
    let mut ranked: Vec<(&String, &usize)> = freq.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(a.1));
    ranked
        .into_iter()
        .take(limit)
        .map(|(word, &count)| WordCount {
            word: word.clone(),
            count,
        })
        .collect()
}
