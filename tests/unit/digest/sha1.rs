//! Tests for the incremental SHA-1 engine

#[cfg(test)]
mod tests {
    use geopattern::digest::{Sha1, digest, digest_text};

    // Tests published single-block vectors
    // Verified by using the wrong third round constant
    #[test]
    fn test_known_vectors() {
        assert_eq!(
            digest_text("").as_str(),
            "da39a3ee5e6b4b0d3255bfef95601890afd80709"
        );
        assert_eq!(
            digest_text("abc").as_str(),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
        assert_eq!(
            digest_text("The quick brown fox jumps over the lazy dog").as_str(),
            "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12"
        );
    }

    // Tests messages spanning several blocks
    // Verified by not clearing the block after compression
    #[test]
    fn test_multi_block_vectors() {
        assert_eq!(
            digest_text("abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq").as_str(),
            "84983e441c3bd26ebaae4aa1f95129e5e54670f1"
        );
        assert_eq!(
            digest_text(&"a".repeat(1000)).as_str(),
            "291e9a6c66994949b57ba5e650361e98fc36b1ba"
        );
    }

    // Tests lengths around the padding boundary
    // Verified by only forcing an extra block past word 14
    #[test]
    fn test_padding_boundaries() {
        assert_eq!(
            digest_text(&"a".repeat(55)).as_str(),
            "c1c8bbdc22796e28c0e15163d20899b65621d65a"
        );
        assert_eq!(
            digest_text(&"a".repeat(56)).as_str(),
            "c2db330f6083854c99d4b5bfb6e8f29f201be699"
        );
        assert_eq!(
            digest_text(&"a".repeat(64)).as_str(),
            "0098ba824b5c16427bd7a1122a5a442a25ec644d"
        );
    }

    // Tests text keeps only the low byte of each UTF-16 unit
    // Verified by digesting the UTF-8 encoding instead
    #[test]
    fn test_text_uses_low_bytes() {
        assert_eq!(
            digest_text("héllo").as_str(),
            "028db752c14604d624e8b1c121d600c427b8a3ba"
        );
        assert_eq!(
            digest_text("€").as_str(),
            "39527c59247a39d18ad48b9947ea738396a3bc47"
        );
        assert_eq!(digest_text("€"), digest([0xAC_u8]));
    }

    // Tests raw bytes are digested verbatim
    // Verified by masking bytes above 0x7f
    #[test]
    fn test_raw_bytes() {
        assert_eq!(
            digest([0_u8, 1, 2, 255]).as_str(),
            "c62c27924f4c967f5eddb1850c091d54c7a2ab58"
        );
        assert_eq!(digest(b"abc"), digest_text("abc"));
    }

    // Tests chunked appends match a single append
    // Verified by resetting the bit length on every update
    #[test]
    fn test_incremental_updates() {
        let mut engine = Sha1::new();
        engine.update("The quick ").update_text("brown fox ");
        engine.update(b"jumps over the lazy dog".as_slice());

        assert_eq!(
            engine.finalize(),
            digest_text("The quick brown fox jumps over the lazy dog")
        );
    }

    // Tests a default engine matches a fresh one
    // Verified by seeding default with zeroed accumulators
    #[test]
    fn test_default_engine() {
        assert_eq!(Sha1::default().finalize(), Sha1::new().finalize());
    }
}
