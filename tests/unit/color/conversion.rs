//! Tests for hex parsing and RGB/HSL conversion

#[cfg(test)]
mod tests {
    use geopattern::color::{Hsl, Rgb};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    // Tests long and short hex forms with and without the hash
    // Verified by skipping the short-form digit doubling
    #[test]
    fn test_from_hex_forms() {
        assert_eq!(Rgb::from_hex("#933c3c"), Some(Rgb::new(147, 60, 60)));
        assert_eq!(Rgb::from_hex("933C3C"), Some(Rgb::new(147, 60, 60)));
        assert_eq!(Rgb::from_hex("#f80"), Some(Rgb::new(255, 136, 0)));
        assert_eq!(Rgb::from_hex("abc"), Some(Rgb::new(170, 187, 204)));
    }

    // Tests malformed colors are rejected
    // Verified by accepting any length
    #[test]
    fn test_from_hex_rejects_malformed() {
        assert_eq!(Rgb::from_hex(""), None);
        assert_eq!(Rgb::from_hex("#12345"), None);
        assert_eq!(Rgb::from_hex("#1234567"), None);
        assert_eq!(Rgb::from_hex("#gg0000"), None);
        assert_eq!(Rgb::from_hex("red"), None);
    }

    // Tests hex and CSS rendering
    // Verified by dropping zero padding from the hex form
    #[test]
    fn test_rendering() {
        let color = Rgb::new(1, 94, 255);
        assert_eq!(color.to_hex(), "#015eff");
        assert_eq!(color.to_css(), "rgb(1,94,255)");
        assert_eq!(color.to_string(), "#015eff");
    }

    // Tests the default base color converts to the expected HSL triple
    // Verified by computing lightness as max alone
    #[test]
    fn test_to_hsl_base_color() {
        let hsl = Rgb::new(147, 60, 60).to_hsl();
        assert!(close(hsl.h, 0.0));
        assert!(close(hsl.s, 0.420_289_855_072_463_7));
        assert!(close(hsl.l, 0.405_882_352_941_176_47));
    }

    // Tests hue sectors and the achromatic case
    // Verified by swapping the green and blue sector offsets
    #[test]
    fn test_to_hsl_sectors() {
        let green = Rgb::new(0, 255, 0).to_hsl();
        assert!(close(green.h, 1.0 / 3.0));
        assert!(close(green.s, 1.0));

        let blue = Rgb::new(0, 0, 255).to_hsl();
        assert!(close(blue.h, 2.0 / 3.0));

        let grey = Rgb::new(128, 128, 128).to_hsl();
        assert!(close(grey.h, 0.0));
        assert!(close(grey.s, 0.0));
        assert!(close(grey.l, 128.0 / 255.0));
    }

    // Tests RGB survives a round trip through HSL
    // Verified by truncating instead of rounding channels
    #[test]
    fn test_round_trip() {
        for color in [
            Rgb::new(147, 60, 60),
            Rgb::new(69, 94, 138),
            Rgb::new(0, 0, 0),
            Rgb::new(255, 255, 255),
            Rgb::new(12, 200, 99),
        ] {
            assert_eq!(color.to_hsl().to_rgb(), color);
        }
    }

    // Tests zero saturation yields a grey
    // Verified by always running the hue branch
    #[test]
    fn test_to_rgb_achromatic() {
        let hsl = Hsl {
            h: 0.7,
            s: 0.0,
            l: 0.5,
        };
        assert_eq!(hsl.to_rgb(), Rgb::new(128, 128, 128));
    }
}
