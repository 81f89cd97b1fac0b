//! Vectors, matrices and quaternions.
//!
//! Matrix storage order and coordinate handedness are type parameters so that
//! both conventions can be instantiated side by side; the crate features
//! `column-major` and `left-handed` only pick the defaults behind [`Mat`] and
//! [`DefaultHandedness`].

mod vec;
mod mat;
mod quat;

pub use self::vec::{Vec2, Vec3, Vec4};
pub use self::mat::{Mat, Matrix};
pub use self::quat::Quat;

/// Linearization of a 4x4 matrix into 16 floats
pub trait Layout: Copy + Clone + PartialEq + std::fmt::Debug {
    fn index(row: usize, col: usize) -> usize;
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RowMajor;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ColumnMajor;

impl Layout for RowMajor {
    #[inline]
    fn index(row: usize, col: usize) -> usize {
        row * 4 + col
    }
}

impl Layout for ColumnMajor {
    #[inline]
    fn index(row: usize, col: usize) -> usize {
        col * 4 + row
    }
}

#[cfg(not(feature = "column-major"))]
pub type DefaultLayout = RowMajor;

#[cfg(feature = "column-major")]
pub type DefaultLayout = ColumnMajor;

/// Coordinate system convention
pub trait Handedness {
    /// Sign applied to the `w` cross terms of a quaternion rotation matrix
    const SIGN: f32;

    fn forward() -> Vec3;
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RightHanded;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct LeftHanded;

impl Handedness for RightHanded {
    const SIGN: f32 = 1.;

    #[inline]
    fn forward() -> Vec3 {
        Vec3::new(0., 0., -1.)
    }
}

impl Handedness for LeftHanded {
    const SIGN: f32 = -1.;

    #[inline]
    fn forward() -> Vec3 {
        Vec3::new(0., 0., 1.)
    }
}

#[cfg(not(feature = "left-handed"))]
pub type DefaultHandedness = RightHanded;

#[cfg(feature = "left-handed")]
pub type DefaultHandedness = LeftHanded;
