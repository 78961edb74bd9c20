/// Triangle-against-plane clipping (Sutherland-Hodgman, one plane at a time)
use crate::geometry::Triangle;
use crate::vector::Vec4;

/// Result of clipping one triangle against one plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClipResult {
    /// All three vertices were behind the plane.
    Discarded,
    /// The triangle survived whole, or was cut down to a single triangle.
    One(Triangle),
    /// The clipped quad, split along the diagonal into two triangles.
    Two(Triangle, Triangle),
}

impl ClipResult {
    /// Append the surviving triangles to a worklist.
    pub fn push_onto(self, out: &mut Vec<Triangle>) {
        match self {
            ClipResult::Discarded => {}
            ClipResult::One(a) => out.push(a),
            ClipResult::Two(a, b) => {
                out.push(a);
                out.push(b);
            }
        }
    }
}

/// Clip `triangle` against the plane through `plane_point` with normal
/// `plane_normal` (normalized internally). Vertices at signed distance
/// >= 0 count as inside; an exactly on-plane vertex survives.
///
/// The output triangles carry the input's shade level unchanged.
pub fn clip_against_plane(plane_point: Vec4, plane_normal: Vec4, triangle: &Triangle) -> ClipResult {
    let normal = plane_normal.normalize();
    let plane_d = normal.dot(plane_point);

    let distance = |v: &Vec4| normal.dot(*v) - plane_d;

    // Classify into fresh value lists, preserving vertex order within each.
    let mut inside: Vec<Vec4> = Vec::with_capacity(3);
    let mut outside: Vec<Vec4> = Vec::with_capacity(3);
    for v in &triangle.vertices {
        if distance(v) >= 0.0 {
            inside.push(*v);
        } else {
            outside.push(*v);
        }
    }

    match inside.len() {
        0 => ClipResult::Discarded,
        3 => ClipResult::One(*triangle),
        1 => {
            let mut out = *triangle;
            out.vertices = [
                inside[0],
                intersect_plane(plane_d, normal, inside[0], outside[0]),
                intersect_plane(plane_d, normal, inside[0], outside[1]),
            ];
            ClipResult::One(out)
        }
        2 => {
            let cut0 = intersect_plane(plane_d, normal, inside[0], outside[0]);
            let cut1 = intersect_plane(plane_d, normal, inside[1], outside[0]);

            let mut tri_a = *triangle;
            tri_a.vertices = [inside[0], inside[1], cut0];
            let mut tri_b = *triangle;
            tri_b.vertices = [inside[1], cut0, cut1];
            ClipResult::Two(tri_a, tri_b)
        }
        _ => unreachable!("a triangle has exactly three vertices"),
    }
}

/// Point where the segment a -> b crosses the plane.
fn intersect_plane(plane_d: f32, normal: Vec4, a: Vec4, b: Vec4) -> Vec4 {
    let ad = normal.dot(a);
    let bd = normal.dot(b);
    let t = (plane_d - ad) / (bd - ad);
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn shaded(v0: Vec4, v1: Vec4, v2: Vec4, shade: u8) -> Triangle {
        let mut tri = Triangle::new(v0, v1, v2);
        tri.shade = shade;
        tri
    }

    fn z_plane() -> (Vec4, Vec4) {
        (Vec4::point(0.0, 0.0, 0.0), Vec4::direction(0.0, 0.0, 1.0))
    }

    fn area(tri: &Triangle) -> f32 {
        let e1 = tri.vertices[1] - tri.vertices[0];
        let e2 = tri.vertices[2] - tri.vertices[0];
        e1.cross(e2).length() * 0.5
    }

    #[test]
    fn test_all_inside_passes_through_unchanged() {
        let (point, normal) = z_plane();
        let tri = shaded(
            Vec4::point(0.0, 0.0, 1.0),
            Vec4::point(1.0, 0.0, 2.0),
            Vec4::point(0.0, 1.0, 3.0),
            7,
        );
        match clip_against_plane(point, normal, &tri) {
            ClipResult::One(out) => assert_eq!(out, tri),
            other => panic!("expected pass-through, got {:?}", other),
        }
    }

    #[test]
    fn test_on_plane_vertex_counts_inside() {
        let (point, normal) = z_plane();
        let tri = shaded(
            Vec4::point(0.0, 0.0, 0.0),
            Vec4::point(1.0, 0.0, 0.0),
            Vec4::point(0.0, 1.0, 0.0),
            3,
        );
        assert_eq!(clip_against_plane(point, normal, &tri), ClipResult::One(tri));
    }

    #[test]
    fn test_all_outside_discarded() {
        let (point, normal) = z_plane();
        let tri = shaded(
            Vec4::point(0.0, 0.0, -1.0),
            Vec4::point(1.0, 0.0, -2.0),
            Vec4::point(0.0, 1.0, -3.0),
            5,
        );
        assert_eq!(clip_against_plane(point, normal, &tri), ClipResult::Discarded);
    }

    #[test]
    fn test_one_inside_yields_one_triangle_on_plane() {
        let (point, normal) = z_plane();
        let inside = Vec4::point(0.0, 0.0, 1.0);
        let tri = shaded(
            inside,
            Vec4::point(1.0, 0.0, -1.0),
            Vec4::point(0.0, 1.0, -1.0),
            9,
        );
        match clip_against_plane(point, normal, &tri) {
            ClipResult::One(out) => {
                assert_eq!(out.shade, 9);
                assert_eq!(out.vertices[0], inside);
                assert!(out.vertices[1].z.abs() < EPSILON);
                assert!(out.vertices[2].z.abs() < EPSILON);
            }
            other => panic!("expected one triangle, got {:?}", other),
        }
    }

    #[test]
    fn test_two_inside_yields_quad_split() {
        let (point, normal) = z_plane();
        let in0 = Vec4::point(0.0, 0.0, 1.0);
        let in1 = Vec4::point(1.0, 0.0, 1.0);
        let out0 = Vec4::point(0.0, 0.0, -1.0);
        let tri = shaded(in0, in1, out0, 4);

        match clip_against_plane(point, normal, &tri) {
            ClipResult::Two(a, b) => {
                assert_eq!(a.shade, 4);
                assert_eq!(b.shade, 4);
                // A keeps both inside vertices; B shares A's new vertex.
                assert_eq!(a.vertices[0], in0);
                assert_eq!(a.vertices[1], in1);
                assert!(a.vertices[2].z.abs() < EPSILON);
                assert_eq!(b.vertices[0], in1);
                assert_eq!(b.vertices[1], a.vertices[2]);
                assert!(b.vertices[2].z.abs() < EPSILON);

                // The two pieces together cover the clipped quad.
                let original = area(&tri);
                let clipped_off = 0.25; // triangle cut off behind the plane
                assert!((area(&a) + area(&b) - (original - clipped_off)).abs() < 1e-4);
            }
            other => panic!("expected two triangles, got {:?}", other),
        }
    }

    #[test]
    fn test_unnormalized_plane_normal_is_accepted() {
        let point = Vec4::point(0.0, 0.0, 0.0);
        let normal = Vec4::direction(0.0, 0.0, 10.0);
        let tri = shaded(
            Vec4::point(0.0, 0.0, 1.0),
            Vec4::point(1.0, 0.0, 1.0),
            Vec4::point(0.0, 1.0, 1.0),
            2,
        );
        assert_eq!(clip_against_plane(point, normal, &tri), ClipResult::One(tri));
    }
}
