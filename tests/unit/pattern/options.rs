//! Tests for generation options

#[cfg(test)]
mod tests {
    use geopattern::io::configuration::DEFAULT_BASE_COLOR;
    use geopattern::{GenerateOptions, Generator};

    // Tests defaults leave every choice to the fingerprint
    // Verified by defaulting the generator to squares
    #[test]
    fn test_defaults() {
        let options = GenerateOptions::default();
        assert_eq!(options.color, None);
        assert_eq!(options.base_color, DEFAULT_BASE_COLOR);
        assert_eq!(options.generator, None);
        assert_eq!(options.hash, None);
        assert_eq!(GenerateOptions::new(), options);
    }

    // Tests the builder stores values unvalidated
    // Verified by dropping unknown generator names in the builder
    #[test]
    fn test_builder() {
        let options = GenerateOptions::new()
            .color("#abc")
            .base_color("#123456")
            .generator(Generator::Xes)
            .hash("not a hash");

        assert_eq!(options.color.as_deref(), Some("#abc"));
        assert_eq!(options.base_color, "#123456");
        assert_eq!(options.generator.as_deref(), Some("xes"));
        assert_eq!(options.hash.as_deref(), Some("not a hash"));

        let unknown = GenerateOptions::new().generator("spirals");
        assert_eq!(unknown.generator.as_deref(), Some("spirals"));
    }
}
