use std::marker::PhantomData;

use crate::alg::{DefaultLayout, Layout, Vec3, Vec4};
use crate::error::MathError;
use crate::scalar;

/// 4x4 matrix acting on column vectors (`m * v`), translation in the last
/// column. Storage order is chosen by `L`; every accessor takes
/// `(row, col)` regardless of layout.
#[derive(Clone, Copy, PartialEq, Debug)]
#[repr(C)]
pub struct Matrix<L: Layout> {
    data: [f32; 16],
    layout: PhantomData<L>,
}

/// Matrix in the build's default layout
pub type Mat = Matrix<DefaultLayout>;

impl<L: Layout> Matrix<L> {
    pub fn from_rows(rows: [[f32; 4]; 4]) -> Matrix<L> {
        let mut result = Matrix::zero();

        for (row, values) in rows.iter().enumerate() {
            for (col, value) in values.iter().enumerate() {
                result.set(row, col, *value);
            }
        }

        result
    }

    #[inline]
    pub fn zero() -> Matrix<L> {
        Matrix {
            data: [0.; 16],
            layout: PhantomData,
        }
    }

    #[inline]
    pub fn identity() -> Matrix<L> {
        Matrix::from_rows([
            [1., 0., 0., 0.],
            [0., 1., 0., 0.],
            [0., 0., 1., 0.],
            [0., 0., 0., 1.],
        ])
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        debug_assert!(row < 4 && col < 4);
        self.data[L::index(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        debug_assert!(row < 4 && col < 4);
        self.data[L::index(row, col)] = value;
    }

    /// Raw storage, in layout order
    pub fn as_slice(&self) -> &[f32; 16] {
        &self.data
    }

    pub fn row(&self, row: usize) -> Vec4 {
        Vec4::new(
            self.get(row, 0),
            self.get(row, 1),
            self.get(row, 2),
            self.get(row, 3),
        )
    }

    pub fn col(&self, col: usize) -> Vec4 {
        Vec4::new(
            self.get(0, col),
            self.get(1, col),
            self.get(2, col),
            self.get(3, col),
        )
    }

    /// Same matrix, stored in another layout
    pub fn relayout<M: Layout>(&self) -> Matrix<M> {
        let mut result = Matrix::zero();

        for row in 0..4 {
            for col in 0..4 {
                result.set(row, col, self.get(row, col));
            }
        }

        result
    }

    pub fn translation(translation: Vec3) -> Matrix<L> {
        Matrix::from_rows([
            [1., 0., 0., translation.x],
            [0., 1., 0., translation.y],
            [0., 0., 1., translation.z],
            [0., 0., 0., 1.],
        ])
    }

    pub fn scale(scale: Vec3) -> Matrix<L> {
        Matrix::from_rows([
            [scale.x,      0.,      0., 0.],
            [     0., scale.y,      0., 0.],
            [     0.,      0., scale.z, 0.],
            [     0.,      0.,      0., 1.],
        ])
    }

    /// `self * translation`
    pub fn translate(self, translation: Vec3) -> Matrix<L> {
        self * Matrix::translation(translation)
    }

    /// `self * scale`
    pub fn scale_by(self, scale: Vec3) -> Matrix<L> {
        self * Matrix::scale(scale)
    }

    // Input: vertical field of view (radians), aspect ratio, near and far
    pub fn perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Matrix<L> {
        let f = 1. / scalar::tan(fov * 0.5);
        let inverse_depth = 1. / (near - far);

        let mut result = Matrix::zero();
        result.set(0, 0, f / aspect);
        result.set(1, 1, f);
        result.set(2, 2, (near + far) * inverse_depth);
        result.set(2, 3, 2. * near * far * inverse_depth);
        result.set(3, 2, -1.); // Right-handed, -Z forward

        result
    }

    pub fn orthographic(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> Matrix<L> {
        let width = 1. / (right - left);
        let height = 1. / (top - bottom);
        let depth = 1. / (far - near);

        Matrix::from_rows([
            [2. * width,           0.,          0., -(right + left) * width],
            [         0., 2. * height,          0., -(top + bottom) * height],
            [         0.,          0., -2. * depth, -(far + near) * depth],
            [         0.,          0.,          0., 1.],
        ])
    }

    /// Basis change from three orthonormal vectors (not re-orthonormalized)
    pub fn rotation(forward: Vec3, up: Vec3, right: Vec3) -> Matrix<L> {
        Matrix::from_rows([
            [  right.x,   right.y,   right.z, 0.],
            [     up.x,      up.y,      up.z, 0.],
            [forward.x, forward.y, forward.z, 0.],
            [       0.,        0.,        0., 1.],
        ])
    }

    /// `self * R`, where `R` rotates `angle` radians about `axis`
    /// (Rodrigues). The axis is normalized here.
    pub fn rotate(self, angle: f32, axis: Vec3) -> Matrix<L> {
        let c = scalar::cos(angle);
        let s = scalar::sin(angle);

        let axis = axis.norm();
        let v = axis * (1. - c);
        let vs = axis * s;

        let a = axis * v.x;
        let b = axis * v.y;
        let f = axis * v.z;

        let rotation = Matrix::from_rows([
            [a.x + c,    b.x - vs.z, f.x + vs.y, 0.],
            [a.y + vs.z, b.y + c,    f.y - vs.x, 0.],
            [a.z - vs.y, b.z + vs.x, f.z + c,    0.],
            [0.,         0.,         0.,         1.],
        ]);

        self * rotation
    }

    /// View matrix: world to camera space, camera looking down -Z
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Matrix<L> {
        let forward = (target - eye).norm();
        let side = forward.cross(up).norm();
        let up = side.cross(forward);

        Matrix::from_rows([
            [    side.x,     side.y,     side.z, -side.dot(eye)],
            [      up.x,       up.y,       up.z, -up.dot(eye)],
            [-forward.x, -forward.y, -forward.z, forward.dot(eye)],
            [        0.,         0.,         0., 1.],
        ])
    }

    /// Model matrix: places an object at `eye` with its local +Z facing
    /// `target`
    pub fn look_at_model(eye: Vec3, target: Vec3, up: Vec3) -> Matrix<L> {
        let forward = (target - eye).norm();
        let side = up.cross(forward).norm();
        let up = forward.cross(side);

        Matrix::from_rows([
            [side.x, up.x, forward.x, eye.x],
            [side.y, up.y, forward.y, eye.y],
            [side.z, up.z, forward.z, eye.z],
            [    0.,   0.,        0., 1.],
        ])
    }

    pub fn transpose(self) -> Matrix<L> {
        let mut result = Matrix::zero();

        for row in 0..4 {
            for col in 0..4 {
                result.set(col, row, self.get(row, col));
            }
        }

        result
    }

    pub fn determinant(&self) -> f32 {
        Minors::new(self).determinant()
    }

    /// General inverse. A singular matrix yields the zero matrix.
    pub fn inverse(self) -> Matrix<L> {
        self.try_inverse().unwrap_or_else(|_| Matrix::zero())
    }

    pub fn try_inverse(self) -> Result<Matrix<L>, MathError> {
        let minors = Minors::new(&self);
        let det = minors.determinant();

        if det == 0. {
            debug!("inverting singular matrix");
            return Err(MathError::Singular);
        }

        let m = |row, col| self.get(row, col);
        let (s, c) = (minors.s, minors.c);
        let inv = 1. / det;

        Ok(Matrix::from_rows([
            [
                ( m(1, 1) * c[5] - m(1, 2) * c[4] + m(1, 3) * c[3]) * inv,
                (-m(0, 1) * c[5] + m(0, 2) * c[4] - m(0, 3) * c[3]) * inv,
                ( m(3, 1) * s[5] - m(3, 2) * s[4] + m(3, 3) * s[3]) * inv,
                (-m(2, 1) * s[5] + m(2, 2) * s[4] - m(2, 3) * s[3]) * inv,
            ],
            [
                (-m(1, 0) * c[5] + m(1, 2) * c[2] - m(1, 3) * c[1]) * inv,
                ( m(0, 0) * c[5] - m(0, 2) * c[2] + m(0, 3) * c[1]) * inv,
                (-m(3, 0) * s[5] + m(3, 2) * s[2] - m(3, 3) * s[1]) * inv,
                ( m(2, 0) * s[5] - m(2, 2) * s[2] + m(2, 3) * s[1]) * inv,
            ],
            [
                ( m(1, 0) * c[4] - m(1, 1) * c[2] + m(1, 3) * c[0]) * inv,
                (-m(0, 0) * c[4] + m(0, 1) * c[2] - m(0, 3) * c[0]) * inv,
                ( m(3, 0) * s[4] - m(3, 1) * s[2] + m(3, 3) * s[0]) * inv,
                (-m(2, 0) * s[4] + m(2, 1) * s[2] - m(2, 3) * s[0]) * inv,
            ],
            [
                (-m(1, 0) * c[3] + m(1, 1) * c[1] - m(1, 2) * c[0]) * inv,
                ( m(0, 0) * c[3] - m(0, 1) * c[1] + m(0, 2) * c[0]) * inv,
                (-m(3, 0) * s[3] + m(3, 1) * s[1] - m(3, 2) * s[0]) * inv,
                ( m(2, 0) * s[3] - m(2, 1) * s[1] + m(2, 2) * s[0]) * inv,
            ],
        ]))
    }

    /// Transforms a point (w = 1), without the perspective divide
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        (*self * Vec4::from_vec3(point, 1.)).xyz()
    }

    /// Transforms a direction (w = 0)
    pub fn transform_vector(&self, vector: Vec3) -> Vec3 {
        (*self * Vec4::from_vec3(vector, 0.)).xyz()
    }
}

// 2x2 sub-determinants of the top (s) and bottom (c) row pairs
struct Minors {
    s: [f32; 6],
    c: [f32; 6],
}

impl Minors {
    fn new<L: Layout>(matrix: &Matrix<L>) -> Minors {
        let m = |row, col| matrix.get(row, col);

        Minors {
            s: [
                m(0, 0) * m(1, 1) - m(1, 0) * m(0, 1),
                m(0, 0) * m(1, 2) - m(1, 0) * m(0, 2),
                m(0, 0) * m(1, 3) - m(1, 0) * m(0, 3),
                m(0, 1) * m(1, 2) - m(1, 1) * m(0, 2),
                m(0, 1) * m(1, 3) - m(1, 1) * m(0, 3),
                m(0, 2) * m(1, 3) - m(1, 2) * m(0, 3),
            ],
            c: [
                m(2, 0) * m(3, 1) - m(3, 0) * m(2, 1),
                m(2, 0) * m(3, 2) - m(3, 0) * m(2, 2),
                m(2, 0) * m(3, 3) - m(3, 0) * m(2, 3),
                m(2, 1) * m(3, 2) - m(3, 1) * m(2, 2),
                m(2, 1) * m(3, 3) - m(3, 1) * m(2, 3),
                m(2, 2) * m(3, 3) - m(3, 2) * m(2, 3),
            ],
        }
    }

    fn determinant(&self) -> f32 {
        let (s, c) = (&self.s, &self.c);

        s[0] * c[5] - s[1] * c[4] + s[2] * c[3]
            + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }
}

impl<L: Layout> Default for Matrix<L> {
    fn default() -> Matrix<L> {
        Matrix::identity()
    }
}

impl<L: Layout> std::ops::Mul for Matrix<L> {
    type Output = Matrix<L>;

    // Naive matrix multiply
    fn mul(self, other: Matrix<L>) -> Matrix<L> {
        let mut result = Matrix::zero();

        for row in 0..4 {
            for col in 0..4 {
                let value = self.get(row, 0) * other.get(0, col)
                    + self.get(row, 1) * other.get(1, col)
                    + self.get(row, 2) * other.get(2, col)
                    + self.get(row, 3) * other.get(3, col);

                result.set(row, col, value);
            }
        }

        result
    }
}

impl<L: Layout> std::ops::Mul<Vec4> for Matrix<L> {
    type Output = Vec4;

    fn mul(self, vec: Vec4) -> Vec4 {
        Vec4::new(
            self.row(0).dot(vec),
            self.row(1).dot(vec),
            self.row(2).dot(vec),
            self.row(3).dot(vec),
        )
    }
}

// Linear part only; translation is ignored
impl<L: Layout> std::ops::Mul<Vec3> for Matrix<L> {
    type Output = Vec3;

    fn mul(self, vec: Vec3) -> Vec3 {
        self.transform_vector(vec)
    }
}

impl<L: Layout> std::fmt::Display for Matrix<L> {
    fn fmt(&self, out: &mut std::fmt::Formatter) -> std::fmt::Result {
        for row in 0..4 {
            if row > 0 {
                writeln!(out)?;
            }

            write!(
                out,
                "[ {}, {}, {}, {} ]",
                self.get(row, 0), self.get(row, 1),
                self.get(row, 2), self.get(row, 3),
            )?;
        }

        Ok(())
    }
}
