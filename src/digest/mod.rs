//! Digest engine turning inputs into fingerprints

/// Fixed-length hexadecimal fingerprint with nibble accessors
pub mod fingerprint;
/// Incremental SHA-1 implementation
pub mod sha1;

pub use fingerprint::Fingerprint;
pub use sha1::{Sha1, digest, digest_text};
