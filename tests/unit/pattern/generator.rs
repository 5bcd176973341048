//! Tests for the generator registry

#[cfg(test)]
mod tests {
    use geopattern::{Generator, PatternError};

    // Tests registry order and names
    // Verified by correcting the spelling of octogons
    #[test]
    fn test_registry_order() {
        let names: Vec<&str> = Generator::names().collect();
        assert_eq!(
            names,
            [
                "octogons",
                "overlappingCircles",
                "plusSigns",
                "xes",
                "sineWaves",
                "hexagons",
                "overlappingRings",
                "plaid",
                "triangles",
                "squares",
                "concentricCircles",
                "diamonds",
                "tessellation",
                "nestedSquares",
                "mosaicSquares",
                "chevrons",
            ]
        );
    }

    // Tests indexing by nibble value and wrapping
    // Verified by clamping instead of wrapping
    #[test]
    fn test_from_index() {
        assert_eq!(Generator::from_index(0), Generator::Octagons);
        assert_eq!(Generator::from_index(9), Generator::Squares);
        assert_eq!(Generator::from_index(15), Generator::Chevrons);
        assert_eq!(Generator::from_index(16), Generator::Octagons);
    }

    // Tests every name parses back to its generator
    // Verified by matching names case-insensitively
    #[test]
    fn test_parse() {
        for generator in Generator::ALL {
            assert_eq!(generator.as_str().parse::<Generator>().ok(), Some(generator));
            assert_eq!(generator.to_string(), generator.as_str());
            assert_eq!(String::from(generator), generator.as_str());
        }

        let rejected = "Squares".parse::<Generator>();
        assert!(matches!(
            rejected,
            Err(PatternError::InvalidGenerator { ref name }) if name == "Squares"
        ));
        assert!("octagons".parse::<Generator>().is_err());
    }
}
