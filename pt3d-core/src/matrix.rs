/// Row-major 4x4 homogeneous transforms
use crate::vector::Vec4;

/// A 4x4 homogeneous transform acting on row vectors: `v' = v * M`.
///
/// The fourth row carries translation, so `v.w` contributes `m[3][*]` and
/// translation and perspective share the same formalism.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    pub m: [[f32; 4]; 4],
}

impl Mat4 {
    pub const ZERO: Mat4 = Mat4 { m: [[0.0; 4]; 4] };

    pub fn identity() -> Self {
        let mut out = Self::ZERO;
        out.m[0][0] = 1.0;
        out.m[1][1] = 1.0;
        out.m[2][2] = 1.0;
        out.m[3][3] = 1.0;
        out
    }

    /// Rotation about the x axis by `theta` radians.
    pub fn rotation_x(theta: f32) -> Self {
        let (sin, cos) = theta.sin_cos();
        let mut out = Self::ZERO;
        out.m[0][0] = 1.0;
        out.m[1][1] = cos;
        out.m[1][2] = sin;
        out.m[2][1] = -sin;
        out.m[2][2] = cos;
        out.m[3][3] = 1.0;
        out
    }

    /// Rotation about the y axis by `theta` radians.
    pub fn rotation_y(theta: f32) -> Self {
        let (sin, cos) = theta.sin_cos();
        let mut out = Self::ZERO;
        out.m[0][0] = cos;
        out.m[0][2] = sin;
        out.m[1][1] = 1.0;
        out.m[2][0] = -sin;
        out.m[2][2] = cos;
        out.m[3][3] = 1.0;
        out
    }

    /// Rotation about the z axis by `theta` radians.
    pub fn rotation_z(theta: f32) -> Self {
        let (sin, cos) = theta.sin_cos();
        let mut out = Self::ZERO;
        out.m[0][0] = cos;
        out.m[0][1] = sin;
        out.m[1][0] = -sin;
        out.m[1][1] = cos;
        out.m[2][2] = 1.0;
        out.m[3][3] = 1.0;
        out
    }

    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        let mut out = Self::identity();
        out.m[3][0] = x;
        out.m[3][1] = y;
        out.m[3][2] = z;
        out
    }

    /// Perspective projection. `fov` is the vertical field of view in
    /// radians; `aspect` is height / width.
    pub fn projection(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        let fov_scale = 1.0 / (fov * 0.5).tan();
        let mut out = Self::ZERO;
        out.m[0][0] = aspect * fov_scale;
        out.m[1][1] = fov_scale;
        out.m[2][2] = far / (far - near);
        out.m[3][2] = (-far * near) / (far - near);
        out.m[2][3] = 1.0;
        out.m[3][3] = 0.0;
        out
    }

    /// Camera-to-world transform from an orthonormal basis: rows are
    /// right / up / forward / position.
    pub fn look_at(position: Vec4, target: Vec4, up: Vec4) -> Self {
        let forward = (target - position).normalize();
        let up = (up - forward * up.dot(forward)).normalize();
        let right = up.cross(forward);

        let mut out = Self::ZERO;
        out.m[0] = [right.x, right.y, right.z, 0.0];
        out.m[1] = [up.x, up.y, up.z, 0.0];
        out.m[2] = [forward.x, forward.y, forward.z, 0.0];
        out.m[3] = [position.x, position.y, position.z, 1.0];
        out
    }

    /// Inverse of a rotation + translation matrix.
    ///
    /// Transposes the 3x3 rotation block and recomputes the translation row
    /// against it. Only valid for rigid transforms; a matrix with scale or
    /// shear silently produces a wrong result.
    pub fn quick_inverse(&self) -> Self {
        let mut out = Self::ZERO;
        for row in 0..3 {
            for col in 0..3 {
                out.m[row][col] = self.m[col][row];
            }
        }
        for col in 0..3 {
            out.m[3][col] = -(self.m[3][0] * out.m[0][col]
                + self.m[3][1] * out.m[1][col]
                + self.m[3][2] * out.m[2][col]);
        }
        out.m[3][3] = 1.0;
        out
    }

    /// Matrix product. Under the row-vector convention `v * (A * B)`
    /// applies A first, then B.
    pub fn multiply(&self, other: &Mat4) -> Mat4 {
        let mut out = Self::ZERO;
        for row in 0..4 {
            for col in 0..4 {
                out.m[row][col] = self.m[row][0] * other.m[0][col]
                    + self.m[row][1] * other.m[1][col]
                    + self.m[row][2] * other.m[2][col]
                    + self.m[row][3] * other.m[3][col];
            }
        }
        out
    }

    /// Apply the transform to a row vector: `v' = v * M`.
    pub fn transform(&self, v: Vec4) -> Vec4 {
        Vec4 {
            x: v.x * self.m[0][0] + v.y * self.m[1][0] + v.z * self.m[2][0] + v.w * self.m[3][0],
            y: v.x * self.m[0][1] + v.y * self.m[1][1] + v.z * self.m[2][1] + v.w * self.m[3][1],
            z: v.x * self.m[0][2] + v.y * self.m[1][2] + v.z * self.m[2][2] + v.w * self.m[3][2],
            w: v.x * self.m[0][3] + v.y * self.m[1][3] + v.z * self.m[2][3] + v.w * self.m[3][3],
        }
    }
}

impl std::ops::Mul for Mat4 {
    type Output = Mat4;
    fn mul(self, other: Mat4) -> Mat4 {
        self.multiply(&other)
    }
}
