//! Fixed-length hexadecimal fingerprint consumed nibble by nibble
//!
//! Every pseudo-random decision of the synthesizer reads from one of these
//! forty digits, so the type guarantees the length up front and generators
//! can index any position below [`Fingerprint::LEN`] without checks.

use crate::io::error::{Result, invalid_hash};
use std::fmt;
use std::str::FromStr;

/// Forty lowercase hexadecimal digits derived from (or standing in for) an input
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    hex: String,
    nibbles: [u8; Self::LEN],
}

impl Fingerprint {
    /// Number of hexadecimal digits in a fingerprint
    pub const LEN: usize = 40;

    /// Parse a caller-supplied fingerprint
    ///
    /// Accepts exactly forty hexadecimal digits in either case; the stored
    /// form is lowercase.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHash` if the length is wrong or a character is not a
    /// hexadecimal digit
    pub fn parse(hash: &str) -> Result<Self> {
        let length = hash.chars().count();
        if length != Self::LEN {
            return Err(invalid_hash(
                &hash,
                &format!("expected {} hex digits, found {length}", Self::LEN),
            ));
        }

        let mut nibbles = [0u8; Self::LEN];
        for (slot, (position, ch)) in nibbles.iter_mut().zip(hash.chars().enumerate()) {
            let digit = ch.to_digit(16).ok_or_else(|| {
                invalid_hash(&hash, &format!("'{ch}' at position {position} is not hex"))
            })?;
            *slot = digit as u8;
        }

        tracing::debug!(fingerprint = hash, "parsed supplied fingerprint");

        Ok(Self {
            hex: hash.to_ascii_lowercase(),
            nibbles,
        })
    }

    /// Build a fingerprint from five digest words
    pub(crate) fn from_words(words: [u32; 5]) -> Self {
        let digits = words
            .iter()
            .flat_map(|word| (0..8_u32).rev().map(move |shift| (word >> (shift * 4)) & 0xF));
        let mut nibbles = [0u8; Self::LEN];
        for (slot, digit) in nibbles.iter_mut().zip(digits) {
            *slot = digit as u8;
        }
        let hex = nibbles
            .iter()
            .filter_map(|&digit| char::from_digit(u32::from(digit), 16))
            .collect();
        Self { hex, nibbles }
    }

    /// The fingerprint as a forty character lowercase string
    pub fn as_str(&self) -> &str {
        &self.hex
    }

    /// Digit at `index` as a value in 0..=15
    ///
    /// Positions past the end read as zero.
    pub fn nibble(&self, index: usize) -> u8 {
        self.nibbles.get(index).copied().unwrap_or(0)
    }

    /// `len` consecutive digits starting at `index` read as one hexadecimal number
    pub fn value(&self, index: usize, len: usize) -> u32 {
        (index..index + len).fold(0, |acc, position| {
            (acc << 4) | u32::from(self.nibble(position))
        })
    }

    /// All forty digits in order
    pub const fn nibbles(&self) -> &[u8; Self::LEN] {
        &self.nibbles
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

impl FromStr for Fingerprint {
    type Err = crate::io::error::PatternError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.hex
    }
}
