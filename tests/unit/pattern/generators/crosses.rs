//! Tests for the plus sign and cross generators

#[cfg(test)]
mod tests {
    use geopattern::document::Svg;
    use geopattern::pattern::generators::crosses::{plus_signs, xes};
    use geopattern::Fingerprint;

    const GITHUB: &str = "5442e2b64fa09764b9f593867e59a97292c84059";

    fn render(draw: fn(&Fingerprint, &mut Svg)) -> Svg {
        let fingerprint = Fingerprint::parse(GITHUB).expect("valid fingerprint");
        let mut svg = Svg::new();
        draw(&fingerprint, &mut svg);
        svg
    }

    fn count(svg: &Svg, name: &str) -> usize {
        svg.elements()
            .iter()
            .filter(|element| element.name == name)
            .count()
    }

    // Tests each plus is a transformed group holding two bars
    // Verified by moving the transform onto the second bar
    #[test]
    fn test_plus_signs() {
        let svg = render(plus_signs);
        let elements = svg.elements();

        assert_eq!(
            svg.root_attributes().and_then(|root| root.get("width")),
            Some("180")
        );
        assert_eq!(count(&svg, "g"), 49);
        assert_eq!(count(&svg, "rect"), 98);

        let group = elements.first().expect("first group");
        let names: Vec<&str> = group.attributes.iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            ["fill", "stroke", "stroke-opacity", "fill-opacity", "transform"]
        );
        assert_eq!(group.attribute("transform"), Some("translate(-15,-22.5)"));

        let bar = elements.get(1).expect("first bar");
        assert_eq!(bar.depth, 2);
        assert_eq!(bar.attribute("x"), Some("15"));
        assert_eq!(bar.attribute("height"), Some("45"));
        assert_eq!(bar.attributes.len(), 4);
    }

    // Tests crosses are rotated about their centre and copied on every edge
    // Verified by rotating about the origin
    #[test]
    fn test_xes() {
        let svg = render(xes);
        let elements = svg.elements();

        assert_eq!(
            svg.root_attributes().and_then(|root| root.get("height")),
            Some("127")
        );
        assert_eq!(count(&svg, "g"), 55);
        assert_eq!(count(&svg, "rect"), 110);

        let group = elements.first().expect("first group");
        assert_eq!(
            group.attribute("transform"),
            Some(
                "translate(-21.217499999999998,-21.217499999999998) \
                 rotate(45,21.217499999999998,21.217499999999998)"
            )
        );
        assert_eq!(group.attribute("opacity"), Some("0.06333333333333334"));
    }
}
