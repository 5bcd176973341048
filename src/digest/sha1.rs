//! Incremental SHA-1 digest producing pattern fingerprints
//!
//! Bytes are packed big-endian into a sixteen word block as they arrive; each
//! full block is expanded to eighty words and folded into five accumulators.
//! Text input contributes the low byte of every UTF-16 code unit so existing
//! fingerprints of non-ASCII strings stay stable.

use crate::digest::fingerprint::Fingerprint;

const INITIAL_STATE: [u32; 5] = [0x6745_2301, 0xEFCD_AB89, 0x98BA_DCFE, 0x1032_5476, 0xC3D2_E1F0];

/// Round constants for the four twenty-round phases
const ROUND_CONSTANTS: [u32; 4] = [0x5A82_7999, 0x6ED9_EBA1, 0x8F1B_BCDC, 0xCA62_C1D6];

/// Words in one input block
const BLOCK_WORDS: usize = 16;
/// Words after message schedule expansion
const SCHEDULE_WORDS: usize = 80;
/// Word holding the first byte of the length suffix
const LENGTH_WORD: usize = 14;

/// Streaming digest state
///
/// Finalizing consumes the engine, so nothing can be appended afterwards.
#[derive(Clone, Debug)]
pub struct Sha1 {
    state: [u32; 5],
    block: [u32; BLOCK_WORDS],
    offset: usize,
    shift: u32,
    bit_length: u64,
}

impl Default for Sha1 {
    fn default() -> Self {
        Self::new()
    }
}

impl Sha1 {
    /// Create an engine with the published initial accumulators
    pub const fn new() -> Self {
        Self {
            state: INITIAL_STATE,
            block: [0; BLOCK_WORDS],
            offset: 0,
            shift: 24,
            bit_length: 0,
        }
    }

    /// Append raw bytes
    pub fn update(&mut self, bytes: impl AsRef<[u8]>) -> &mut Self {
        let bytes = bytes.as_ref();
        self.bit_length = self
            .bit_length
            .wrapping_add((bytes.len() as u64).wrapping_mul(8));
        for &byte in bytes {
            self.write(byte);
        }
        self
    }

    /// Append text, one byte per UTF-16 code unit
    pub fn update_text(&mut self, text: &str) -> &mut Self {
        for unit in text.encode_utf16() {
            self.bit_length = self.bit_length.wrapping_add(8);
            self.write((unit & 0xFF) as u8);
        }
        self
    }

    /// Pad the message, process the final block and return the fingerprint
    pub fn finalize(mut self) -> Fingerprint {
        let bit_length = self.bit_length;

        self.write(0x80);
        if self.offset > LENGTH_WORD || (self.offset == LENGTH_WORD && self.shift < 24) {
            self.compress();
        }

        self.offset = LENGTH_WORD;
        self.shift = 24;
        for byte in bit_length.to_be_bytes() {
            self.write(byte);
        }

        Fingerprint::from_words(self.state)
    }

    fn write(&mut self, byte: u8) {
        if let Some(word) = self.block.get_mut(self.offset) {
            *word |= u32::from(byte) << self.shift;
        }
        if self.shift == 0 {
            self.offset += 1;
            self.shift = 24;
        } else {
            self.shift -= 8;
        }

        if self.offset == BLOCK_WORDS {
            self.compress();
        }
    }

    // Schedule indices are bounded by the fixed eighty word layout
    #[allow(clippy::indexing_slicing)]
    fn compress(&mut self) {
        let mut schedule = [0u32; SCHEDULE_WORDS];
        schedule[..BLOCK_WORDS].copy_from_slice(&self.block);
        for i in BLOCK_WORDS..SCHEDULE_WORDS {
            schedule[i] =
                (schedule[i - 3] ^ schedule[i - 8] ^ schedule[i - 14] ^ schedule[i - 16])
                    .rotate_left(1);
        }

        let [mut a, mut b, mut c, mut d, mut e] = self.state;

        for (i, word) in schedule.iter().enumerate() {
            let (f, k) = match i / 20 {
                0 => (d ^ (b & (c ^ d)), ROUND_CONSTANTS[0]),
                1 => (b ^ c ^ d, ROUND_CONSTANTS[1]),
                2 => ((b & c) | (d & (b | c)), ROUND_CONSTANTS[2]),
                _ => (b ^ c ^ d, ROUND_CONSTANTS[3]),
            };
            let temp = a
                .rotate_left(5)
                .wrapping_add(f)
                .wrapping_add(e)
                .wrapping_add(k)
                .wrapping_add(*word);
            e = d;
            d = c;
            c = b.rotate_left(30);
            b = a;
            a = temp;
        }

        for (accumulator, working) in self.state.iter_mut().zip([a, b, c, d, e]) {
            *accumulator = accumulator.wrapping_add(working);
        }

        self.offset = 0;
        self.block = [0; BLOCK_WORDS];
    }
}

/// Digest a complete byte buffer
pub fn digest(bytes: impl AsRef<[u8]>) -> Fingerprint {
    let mut engine = Sha1::new();
    engine.update(bytes);
    engine.finalize()
}

/// Digest a complete string, one byte per UTF-16 code unit
pub fn digest_text(text: &str) -> Fingerprint {
    let mut engine = Sha1::new();
    engine.update_text(text);
    engine.finalize()
}
