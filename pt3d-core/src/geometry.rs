/// Triangle and mesh containers
use crate::vector::Vec4;

/// A triangle with homogeneous vertices and the shade level assigned during
/// the lighting stage. The shade level is copied unchanged through every
/// later clip and transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Vec4; 3],
    pub shade: u8,
}

impl Triangle {
    pub fn new(v0: Vec4, v1: Vec4, v2: Vec4) -> Self {
        Self {
            vertices: [v0, v1, v2],
            shade: 0,
        }
    }

    /// Unit face normal from the winding order. Degenerate triangles yield
    /// the zero vector.
    pub fn normal(&self) -> Vec4 {
        let edge1 = self.vertices[1] - self.vertices[0];
        let edge2 = self.vertices[2] - self.vertices[0];
        edge1.cross(edge2).normalize()
    }

    /// Average depth of the three vertices, used by the painter's sort.
    pub fn average_depth(&self) -> f32 {
        (self.vertices[0].z + self.vertices[1].z + self.vertices[2].z) / 3.0
    }
}

/// An ordered collection of triangles. Immutable once the loader has
/// populated it.
#[derive(Debug, Clone)]
pub struct Mesh {
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(capacity),
        }
    }

    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// The built-in unit cube: 12 triangles, two per face, wound so that
    /// face normals point outward.
    pub fn unit_cube() -> Self {
        let p = |x: f32, y: f32, z: f32| Vec4::point(x, y, z);
        let mut mesh = Self::with_capacity(12);

        // South
        mesh.add_triangle(Triangle::new(p(0.0, 0.0, 0.0), p(0.0, 1.0, 0.0), p(1.0, 1.0, 0.0)));
        mesh.add_triangle(Triangle::new(p(0.0, 0.0, 0.0), p(1.0, 1.0, 0.0), p(1.0, 0.0, 0.0)));

        // East
        mesh.add_triangle(Triangle::new(p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0), p(1.0, 1.0, 1.0)));
        mesh.add_triangle(Triangle::new(p(1.0, 0.0, 0.0), p(1.0, 1.0, 1.0), p(1.0, 0.0, 1.0)));

        // North
        mesh.add_triangle(Triangle::new(p(1.0, 0.0, 1.0), p(1.0, 1.0, 1.0), p(0.0, 1.0, 1.0)));
        mesh.add_triangle(Triangle::new(p(1.0, 0.0, 1.0), p(0.0, 1.0, 1.0), p(0.0, 0.0, 1.0)));

        // West
        mesh.add_triangle(Triangle::new(p(0.0, 0.0, 1.0), p(0.0, 1.0, 1.0), p(0.0, 1.0, 0.0)));
        mesh.add_triangle(Triangle::new(p(0.0, 0.0, 1.0), p(0.0, 1.0, 0.0), p(0.0, 0.0, 0.0)));

        // Top
        mesh.add_triangle(Triangle::new(p(0.0, 1.0, 0.0), p(0.0, 1.0, 1.0), p(1.0, 1.0, 1.0)));
        mesh.add_triangle(Triangle::new(p(0.0, 1.0, 0.0), p(1.0, 1.0, 1.0), p(1.0, 1.0, 0.0)));

        // Bottom
        mesh.add_triangle(Triangle::new(p(1.0, 0.0, 1.0), p(0.0, 0.0, 1.0), p(0.0, 0.0, 0.0)));
        mesh.add_triangle(Triangle::new(p(1.0, 0.0, 1.0), p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)));

        mesh
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}
