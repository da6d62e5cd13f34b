//! Salted, alphabet-permuted positional encoding of unsigned-integer
//! sequences (the hashids scheme).
//!
//! The engine is a bijection between integer sequences and strings over the
//! 62-character alphabet: setup partitions the alphabet into working digits,
//! separators, and guards, each permuted by a salt-driven consistent shuffle;
//! encoding re-shuffles the working alphabet per number and pads short output
//! up to the minimum length; decoding mirrors the process and verifies by
//! re-encoding. Obfuscation, not cryptography: anyone holding the salt can
//! invert it.

use core::fmt;

/// The full output alphabet: `a`–`z`, `A`–`Z`, `0`–`9`.
const ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Characters reserved as number separators before salting.
const SEPARATORS: &[u8] = b"cfhistuCFHISTU";

/// One guard character per this many working-alphabet characters.
const GUARD_DIV: usize = 12;

/// A configured encoder/decoder: immutable after construction, shareable
/// across threads.
#[derive(Clone)]
pub(crate) struct HashidEngine {
    salt: Vec<u8>,
    /// Working digit alphabet after separator and guard extraction.
    alphabet: Vec<u8>,
    seps: Vec<u8>,
    guards: Vec<u8>,
    min_length: usize,
}

impl HashidEngine {
    pub(crate) fn new(salt: &str, min_length: usize) -> Self {
        let salt = salt.as_bytes().to_vec();

        let mut seps = SEPARATORS.to_vec();
        let mut alphabet: Vec<u8> = ALPHABET
            .iter()
            .copied()
            .filter(|c| !seps.contains(c))
            .collect();
        consistent_shuffle(&mut seps, &salt);

        // 48 working characters over 14 separators stays under the 3.5
        // separator ratio ceiling, so no working characters are ever moved
        // into the separator set for this alphabet.
        consistent_shuffle(&mut alphabet, &salt);

        let guard_count = alphabet.len().div_ceil(GUARD_DIV);
        let guards = alphabet[..guard_count].to_vec();
        let alphabet = alphabet[guard_count..].to_vec();

        Self {
            salt,
            alphabet,
            seps,
            guards,
            min_length,
        }
    }

    /// Encode a non-empty number sequence. Deterministic; the result is at
    /// least `min_length` characters. An empty input yields an empty string.
    pub(crate) fn encode(&self, numbers: &[u64]) -> String {
        if numbers.is_empty() {
            return String::new();
        }

        let mut alphabet = self.alphabet.clone();

        // Value-derived seed selecting the lottery character.
        let mut seed = 0usize;
        for (i, &n) in numbers.iter().enumerate() {
            seed += (n % (i as u64 + 100)) as usize;
        }
        let lottery = alphabet[seed % alphabet.len()];

        let mut out = vec![lottery];
        for (i, &n) in numbers.iter().enumerate() {
            // Re-permute the working alphabet per number, keyed by
            // lottery + salt + current alphabet.
            let mut buffer = Vec::with_capacity(1 + self.salt.len() + alphabet.len());
            buffer.push(lottery);
            buffer.extend_from_slice(&self.salt);
            buffer.extend_from_slice(&alphabet);
            buffer.truncate(alphabet.len());
            consistent_shuffle(&mut alphabet, &buffer);

            let digits = to_alphabet(n, &alphabet);
            let first_digit = digits[0];
            out.extend_from_slice(&digits);

            if i + 1 < numbers.len() {
                let sep_seed = (n % (first_digit as u64 + i as u64)) as usize;
                out.push(self.seps[sep_seed % self.seps.len()]);
            }
        }

        if out.len() < self.min_length {
            let guard_index = (seed + out[0] as usize) % self.guards.len();
            out.insert(0, self.guards[guard_index]);

            if out.len() < self.min_length {
                let guard_index = (seed + out[2] as usize) % self.guards.len();
                out.push(self.guards[guard_index]);
            }
        }

        // Wrap with alphabet halves until long enough, trimming the excess
        // symmetrically.
        let half = alphabet.len() / 2;
        while out.len() < self.min_length {
            let key = alphabet.clone();
            consistent_shuffle(&mut alphabet, &key);

            let mut widened = Vec::with_capacity(out.len() + alphabet.len());
            widened.extend_from_slice(&alphabet[half..]);
            widened.extend_from_slice(&out);
            widened.extend_from_slice(&alphabet[..half]);
            out = widened;

            let excess = out.len() - self.min_length;
            if excess > 0 {
                let start = excess / 2;
                out.truncate(start + self.min_length);
                out.drain(..start);
            }
        }

        out.into_iter().map(char::from).collect()
    }

    /// Decode a token back to its number sequence.
    ///
    /// Returns `None` for anything this engine did not mint: foreign
    /// characters, a failed re-encode verification, or an empty core. The
    /// re-encode check is what makes decoding under the wrong salt fail
    /// rather than return a plausible-looking sequence.
    pub(crate) fn decode(&self, token: &str) -> Option<Vec<u64>> {
        if token.is_empty() || !token.is_ascii() {
            return None;
        }

        // Strip min-length padding: guards bracket the payload.
        let parts: Vec<&[u8]> = token
            .as_bytes()
            .split(|b| self.guards.contains(b))
            .collect();
        let core = match parts.len() {
            2 | 3 => parts[1],
            _ => parts[0],
        };
        let (&lottery, rest) = core.split_first()?;

        let mut alphabet = self.alphabet.clone();
        let mut numbers = Vec::new();
        for sub in rest.split(|b| self.seps.contains(b)) {
            let mut buffer = Vec::with_capacity(1 + self.salt.len() + alphabet.len());
            buffer.push(lottery);
            buffer.extend_from_slice(&self.salt);
            buffer.extend_from_slice(&alphabet);
            buffer.truncate(alphabet.len());
            consistent_shuffle(&mut alphabet, &buffer);

            numbers.push(from_alphabet(sub, &alphabet)?);
        }

        if self.encode(&numbers) != token {
            return None;
        }
        Some(numbers)
    }

    #[cfg(test)]
    fn partition(&self) -> (&[u8], &[u8], &[u8]) {
        (&self.alphabet, &self.seps, &self.guards)
    }
}

// The salt carries the base secret, so it stays out of Debug output.
impl fmt::Debug for HashidEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashidEngine")
            .field("min_length", &self.min_length)
            .finish_non_exhaustive()
    }
}

/// Salt-driven Fisher-Yates variant: the swap index at each position is a
/// running function of the salt bytes, so equal salts always produce equal
/// permutations.
fn consistent_shuffle(chars: &mut [u8], salt: &[u8]) {
    if salt.is_empty() {
        return;
    }
    let mut v = 0usize;
    let mut p = 0usize;
    for i in (1..chars.len()).rev() {
        v %= salt.len();
        let n = salt[v] as usize;
        p += n;
        let j = (n + v + p) % i;
        chars.swap(i, j);
        v += 1;
    }
}

/// Positional digits of `n` in the given alphabet, most significant first.
/// Always at least one digit.
fn to_alphabet(mut n: u64, alphabet: &[u8]) -> Vec<u8> {
    let base = alphabet.len() as u64;
    let mut digits = Vec::new();
    loop {
        digits.push(alphabet[(n % base) as usize]);
        n /= base;
        if n == 0 {
            break;
        }
    }
    digits.reverse();
    digits
}

/// Inverse of [`to_alphabet`]. `None` for empty input, characters outside the
/// alphabet, or values that overflow 64 bits.
fn from_alphabet(chars: &[u8], alphabet: &[u8]) -> Option<u64> {
    if chars.is_empty() {
        return None;
    }
    let base = alphabet.len() as u64;
    let mut n: u64 = 0;
    for &c in chars {
        let idx = alphabet.iter().position(|&a| a == c)? as u64;
        n = n.checked_mul(base)?.checked_add(idx)?;
    }
    Some(n)
}
