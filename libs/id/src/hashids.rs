//! Salted, reversible integer-to-string encoding.
//!
//! This is the Hashids scheme: a salt-driven shuffle of a custom alphabet,
//! positional encoding of each number in a freshly re-shuffled alphabet, and
//! guard/alphabet padding up to a minimum length. Tokens produced here are
//! byte-for-byte compatible with other Hashids implementations given the same
//! salt, minimum length, and alphabet.
//!
//! It is obfuscation, not encryption. Anyone holding the salt can reverse a
//! token, and a token is not bound to any particular salt namespace.

use std::fmt;

use crate::error::IdError;

/// Characters preferred as separators between encoded numbers.
const SEPARATORS: &str = "cfhistuCFHISTU";

/// Target ratio of alphabet characters to separator characters.
const SEPARATOR_DIV: f64 = 3.5;

/// One guard character is reserved per this many alphabet characters.
const GUARD_DIV: usize = 12;

/// Smallest alphabet the scheme can work with.
pub const MIN_ALPHABET_LENGTH: usize = 16;

/// Largest accepted minimum token length.
pub const MAX_MIN_LENGTH: usize = 64;

/// A configured encoder/decoder.
///
/// Construction does all the alphabet preparation; `encode` and `decode`
/// only read from `self`, so a `Hashids` can be shared freely across threads.
#[derive(Clone, PartialEq, Eq)]
pub struct Hashids {
    salt: Vec<char>,
    min_length: usize,
    alphabet: Vec<char>,
    separators: Vec<char>,
    guards: Vec<char>,
}

impl Hashids {
    /// Builds an encoder from a salt, minimum token length, and alphabet.
    ///
    /// Duplicate alphabet characters are dropped (first occurrence wins).
    /// `min_length` may not exceed [`MAX_MIN_LENGTH`].
    pub fn new(salt: &str, min_length: usize, alphabet: &str) -> Result<Self, IdError> {
        if min_length > MAX_MIN_LENGTH {
            return Err(IdError::config(format!(
                "min_length must be at most {MAX_MIN_LENGTH}, got {min_length}"
            )));
        }

        let mut unique: Vec<char> = Vec::with_capacity(alphabet.len());
        for c in alphabet.chars() {
            if !unique.contains(&c) {
                unique.push(c);
            }
        }

        if unique.len() < MIN_ALPHABET_LENGTH {
            return Err(IdError::config(format!(
                "alphabet must contain at least {MIN_ALPHABET_LENGTH} unique characters, got {}",
                unique.len()
            )));
        }
        if unique.iter().any(|c| c.is_whitespace()) {
            return Err(IdError::config("alphabet cannot contain whitespace"));
        }

        let salt: Vec<char> = salt.chars().collect();

        let mut separators: Vec<char> = SEPARATORS.chars().filter(|c| unique.contains(c)).collect();
        let mut alphabet: Vec<char> = unique
            .into_iter()
            .filter(|c| !SEPARATORS.contains(*c))
            .collect();

        shuffle(&mut separators, &salt);

        if separators.is_empty() || alphabet.len() as f64 / separators.len() as f64 > SEPARATOR_DIV
        {
            let wanted = (alphabet.len() as f64 / SEPARATOR_DIV).ceil() as usize;
            if wanted > separators.len() {
                let diff = wanted - separators.len();
                separators.extend(alphabet.drain(..diff));
            }
        }

        shuffle(&mut alphabet, &salt);

        let guard_count = alphabet.len().div_ceil(GUARD_DIV);
        let guards = if alphabet.len() < 3 {
            separators.drain(..guard_count).collect()
        } else {
            alphabet.drain(..guard_count).collect()
        };

        Ok(Self {
            salt,
            min_length,
            alphabet,
            separators,
            guards,
        })
    }

    /// Minimum length of every encoded token.
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Encodes a list of numbers into a single token.
    ///
    /// An empty list encodes to an empty string.
    pub fn encode(&self, numbers: &[u64]) -> String {
        if numbers.is_empty() {
            return String::new();
        }

        let mut alphabet = self.alphabet.clone();
        let numbers_hash: u64 = numbers
            .iter()
            .enumerate()
            .map(|(i, n)| n % (i as u64 + 100))
            .sum();

        let lottery = alphabet[(numbers_hash % alphabet.len() as u64) as usize];
        let mut out = vec![lottery];

        for (i, &number) in numbers.iter().enumerate() {
            self.reshuffle(&mut alphabet, lottery);

            let start = out.len();
            push_digits(number, &alphabet, &mut out);

            if i + 1 < numbers.len() {
                let modulus = out[start] as u64 + i as u64;
                let index = (number % modulus) % self.separators.len() as u64;
                out.push(self.separators[index as usize]);
            }
        }

        if out.len() < self.min_length {
            let index = (numbers_hash + out[0] as u64) % self.guards.len() as u64;
            out.insert(0, self.guards[index as usize]);

            if out.len() < self.min_length {
                let index = (numbers_hash + out[2] as u64) % self.guards.len() as u64;
                out.push(self.guards[index as usize]);
            }
        }

        let half = alphabet.len() / 2;
        while out.len() < self.min_length {
            let key = alphabet.clone();
            shuffle(&mut alphabet, &key);

            let mut padded = Vec::with_capacity(out.len() + alphabet.len());
            padded.extend_from_slice(&alphabet[half..]);
            padded.extend_from_slice(&out);
            padded.extend_from_slice(&alphabet[..half]);
            out = padded;

            let excess = out.len().saturating_sub(self.min_length);
            if excess > 0 {
                let start = excess / 2;
                out = out[start..start + self.min_length].to_vec();
            }
        }

        out.into_iter().collect()
    }

    /// Decodes a token back into its numbers.
    ///
    /// Returns `None` for anything that is not exactly what `encode` would
    /// have produced: unknown characters, overflow, or a non-canonical token.
    pub fn decode(&self, token: &str) -> Option<Vec<u64>> {
        if token.is_empty() {
            return None;
        }

        let parts: Vec<&str> = token.split(|c: char| self.guards.contains(&c)).collect();
        let breakdown = match parts.len() {
            2 | 3 => parts[1],
            _ => parts[0],
        };

        let mut chars = breakdown.chars();
        let lottery = chars.next()?;

        let mut alphabet = self.alphabet.clone();
        let mut numbers = Vec::new();
        for chunk in chars.as_str().split(|c: char| self.separators.contains(&c)) {
            self.reshuffle(&mut alphabet, lottery);
            numbers.push(read_digits(chunk, &alphabet)?);
        }

        if self.encode(&numbers) != token {
            return None;
        }

        Some(numbers)
    }

    /// Decodes a token that must carry exactly one number.
    pub fn decode_one(&self, token: &str) -> Option<u64> {
        match self.decode(token)?.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    /// Re-shuffles the working alphabet keyed by `lottery + salt + alphabet`.
    fn reshuffle(&self, alphabet: &mut [char], lottery: char) {
        let key: Vec<char> = std::iter::once(lottery)
            .chain(self.salt.iter().copied())
            .chain(alphabet.iter().copied())
            .take(alphabet.len())
            .collect();
        shuffle(alphabet, &key);
    }
}

// Salt is secret; keep it out of logs.
impl fmt::Debug for Hashids {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hashids")
            .field("salt", &"<redacted>")
            .field("min_length", &self.min_length)
            .field("alphabet_len", &self.alphabet.len())
            .finish()
    }
}

/// Deterministic salt-keyed Fisher-Yates shuffle.
fn shuffle(chars: &mut [char], salt: &[char]) {
    if salt.is_empty() {
        return;
    }

    let mut v = 0usize;
    let mut p = 0usize;
    for i in (1..chars.len()).rev() {
        v %= salt.len();
        let code = salt[v] as usize;
        p += code;
        let j = (code + v + p) % i;
        chars.swap(i, j);
        v += 1;
    }
}

fn push_digits(mut value: u64, alphabet: &[char], out: &mut Vec<char>) {
    let base = alphabet.len() as u64;
    let start = out.len();
    loop {
        out.push(alphabet[(value % base) as usize]);
        value /= base;
        if value == 0 {
            break;
        }
    }
    out[start..].reverse();
}

fn read_digits(chunk: &str, alphabet: &[char]) -> Option<u64> {
    let base = alphabet.len() as u64;
    chunk.chars().try_fold(0u64, |acc, c| {
        let index = alphabet.iter().position(|&a| a == c)? as u64;
        acc.checked_mul(base)?.checked_add(index)
    })
}
