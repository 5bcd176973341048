//! Tests for shape vertex builders

#[cfg(test)]
mod tests {
    use geopattern::geometry::Points;
    use geopattern::geometry::shapes::{
        build_chevron_shape, build_diamond_shape, build_hexagon_shape, build_octagon_shape,
        build_plus_shape, build_right_triangle_shape, build_rotated_triangle_shape,
        build_triangle_shape,
    };

    const TRIANGLE_HEIGHT: f64 = 8.660_254_037_844_386;

    // Tests the hexagon closes on its first vertex
    // Verified by computing the half height with cosine
    #[test]
    fn test_hexagon() {
        let hexagon = build_hexagon_shape(10.0);
        assert_eq!(
            hexagon.to_string(),
            "0,8.660254037844386,5,0,15,0,20,8.660254037844386,15,17.32050807568877,5,17.32050807568877,0,8.660254037844386"
        );
        let vertices: Vec<(f64, f64)> = hexagon.vertices().collect();
        assert_eq!(vertices.len(), 7);
        assert_eq!(vertices.first(), vertices.last());
    }

    // Tests both chevron halves
    // Verified by using 0.33 for the arm depth
    #[test]
    fn test_chevron() {
        let [left, right] = build_chevron_shape(30.0, 30.0);
        assert_eq!(left.to_string(), "0,0,15,10.2,15,30,0,19.8,0,0");
        assert_eq!(right.to_string(), "15,10.2,30,0,30,19.8,15,30,15,10.2");
    }

    // Tests the plus is a vertical and a horizontal bar
    // Verified by swapping bar widths
    #[test]
    fn test_plus() {
        assert_eq!(
            build_plus_shape(10.0),
            [[10.0, 0.0, 10.0, 30.0], [0.0, 10.0, 30.0, 10.0]]
        );
    }

    // Tests the octagon's cut corners
    // Verified by cutting a quarter instead of a third
    #[test]
    fn test_octagon() {
        assert_eq!(
            build_octagon_shape(10.0).to_string(),
            "3.3000000000000003,0,6.699999999999999,0,10,3.3000000000000003,10,6.699999999999999,6.699999999999999,10,3.3000000000000003,10,0,6.699999999999999,0,3.3000000000000003,3.3000000000000003,0"
        );
    }

    // Tests the remaining polygon builders
    // Verified by reordering triangle vertices
    #[test]
    fn test_triangles_and_diamond() {
        assert_eq!(
            build_triangle_shape(10.0, TRIANGLE_HEIGHT).to_string(),
            "5,0,10,8.660254037844386,0,8.660254037844386,5,0"
        );
        assert_eq!(
            build_diamond_shape(10.0, 20.0).to_string(),
            "5,0,10,10,5,20,0,10"
        );
        assert_eq!(
            build_right_triangle_shape(15.0).to_string(),
            "0,0,15,15,0,15,0,0"
        );
        assert_eq!(
            build_rotated_triangle_shape(10.0, TRIANGLE_HEIGHT).to_string(),
            "0,0,8.660254037844386,5,0,10,0,0"
        );
    }

    // Tests odd coordinate lists drop the unpaired value from vertices
    // Verified by padding the last vertex with zero
    #[test]
    fn test_points_vertices() {
        let points = Points::new(vec![1.0, 2.0, 3.0]);
        assert_eq!(points.coordinates(), [1.0, 2.0, 3.0]);
        assert_eq!(points.vertices().collect::<Vec<_>>(), [(1.0, 2.0)]);

        let paired = Points::new(vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(
            paired.vertices().collect::<Vec<_>>(),
            [(1.0, 2.0), (3.0, 4.0)]
        );
    }
}
