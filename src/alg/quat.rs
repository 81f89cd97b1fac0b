use crate::alg::{DefaultHandedness, Handedness, Layout, Mat, Matrix, Vec3, Vec4};
use crate::scalar;

// sin^2 of 0.01 degrees: below this two directions count as (anti)parallel
const PARALLEL_SINE_SQUARED: f32 = 3.0462e-8;

// Past this cosine slerp falls back to normalized lerp
const SLERP_LINEAR_COSINE: f32 = 0.9995;

/// Rotation quaternion, `w` scalar part. Not normalized on construction.
#[derive(Clone, Copy, PartialEq, Debug)]
#[repr(C)]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quat {
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Quat {
        Quat { x, y, z, w }
    }

    /// Pure quaternion (w = 0)
    pub fn from_vec3(vec: Vec3) -> Quat {
        Quat::new(vec.x, vec.y, vec.z, 0.)
    }

    #[inline]
    pub fn identity() -> Quat {
        Quat::new(0., 0., 0., 1.)
    }

    /// Rotation of `angle` radians about `axis`. Expects a unit axis.
    pub fn axis_angle(axis: Vec3, angle: f32) -> Quat {
        let half = angle * 0.5;
        let sine = scalar::sin(half);

        Quat::new(
            axis.x * sine,
            axis.y * sine,
            axis.z * sine,
            scalar::cos(half),
        )
    }

    pub fn vec(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    pub fn dot(self, other: Quat) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    pub fn mag_squared(self) -> f32 {
        self.dot(self)
    }

    pub fn mag(self) -> f32 {
        scalar::sqrt(self.mag_squared())
    }

    /// The zero quaternion maps to itself
    pub fn norm(self) -> Quat {
        let squared = self.mag_squared();

        if squared == 0. {
            return self;
        }

        self * scalar::inverse_sqrt(squared)
    }

    pub fn conjugate(self) -> Quat {
        Quat::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Sandwich product `q * (v, 0) * q'`. Only a pure rotation for
    /// unit quaternions.
    pub fn rotate_vector(self, vec: Vec3) -> Vec3 {
        (self * Quat::from_vec3(vec) * self.conjugate()).vec()
    }

    pub fn to_mat(self) -> Mat {
        self.to_mat_in::<DefaultHandedness, _>()
    }

    pub fn to_mat_in<H: Handedness, L: Layout>(self) -> Matrix<L> {
        let (x, y, z, w) = (self.x, self.y, self.z, self.w);
        let sign = H::SIGN;

        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;

        let xw = sign * x * w;
        let yw = sign * y * w;
        let zw = sign * z * w;

        Matrix::from_rows([
            [1. - 2. * (yy + zz),       2. * (xy - zw),       2. * (xz + yw), 0.],
            [     2. * (xy + zw), 1. - 2. * (xx + zz),       2. * (yz - xw), 0.],
            [     2. * (xz - yw),       2. * (yz + xw), 1. - 2. * (xx + yy), 0.],
            [                 0.,                   0.,                   0., 1.],
        ])
    }

    /// Shortest-arc rotation taking direction `from` onto `to`.
    ///
    /// Parallel inputs give the identity. Antiparallel inputs give a half
    /// turn about some axis orthogonal to `from`; which one is unspecified.
    pub fn look_rotation(from: Vec3, to: Vec3) -> Quat {
        let axis = from.cross(to);
        let dot = from.dot(to);
        let lengths = from.mag_squared() * to.mag_squared();

        // Compare sin^2 of the angle without taking roots
        if axis.mag_squared() <= PARALLEL_SINE_SQUARED * lengths {
            if dot >= 0. {
                return Quat::identity();
            }

            let mut orthogonal = from.cross(Vec3::up());

            // Seed was colinear too
            if orthogonal.mag_squared()
                <= PARALLEL_SINE_SQUARED * from.mag_squared()
            {
                orthogonal = from.cross(Vec3::right());
            }

            return Quat::from_vec3(orthogonal.norm());
        }

        Quat::new(
            axis.x,
            axis.y,
            axis.z,
            scalar::sqrt(lengths) + dot,
        ).norm()
    }

    /// Normalized linear interpolation along the shorter path
    pub fn nlerp(a: Quat, b: Quat, t: f32) -> Quat {
        let b = if a.dot(b) < 0. { -b } else { b };
        (a + (b - a) * t).norm()
    }

    /// Spherical interpolation along the shorter path
    pub fn slerp(a: Quat, b: Quat, t: f32) -> Quat {
        let mut cosine = a.dot(b);
        let mut b = b;

        // Opposite hemispheres: flip to take the short way round
        if cosine < 0. {
            cosine = -cosine;
            b = -b;
        }

        if cosine > SLERP_LINEAR_COSINE {
            return Quat::nlerp(a, b, t);
        }

        let angle = scalar::acos(cosine);
        let inverse_sine = 1. / scalar::sin(angle);

        let left = scalar::sin((1. - t) * angle) * inverse_sine;
        let right = scalar::sin(t * angle) * inverse_sine;

        a * left + b * right
    }
}

impl Default for Quat {
    fn default() -> Quat {
        Quat::identity()
    }
}

impl From<Vec4> for Quat {
    fn from(vec: Vec4) -> Quat {
        Quat::new(vec.x, vec.y, vec.z, vec.w)
    }
}

impl From<Quat> for Vec4 {
    fn from(quat: Quat) -> Vec4 {
        Vec4::new(quat.x, quat.y, quat.z, quat.w)
    }
}

// Hamilton product: `a * b` applies `b` first, then `a`
impl std::ops::Mul for Quat {
    type Output = Quat;

    fn mul(self, other: Quat) -> Quat {
        Quat::new(
            self.w * other.x + self.x * other.w + self.y * other.z - self.z * other.y,
            self.w * other.y - self.x * other.z + self.y * other.w + self.z * other.x,
            self.w * other.z + self.x * other.y - self.y * other.x + self.z * other.w,
            self.w * other.w - self.x * other.x - self.y * other.y - self.z * other.z,
        )
    }
}

impl std::ops::Mul<Vec3> for Quat {
    type Output = Vec3;

    fn mul(self, vec: Vec3) -> Vec3 {
        self.rotate_vector(vec)
    }
}

impl std::ops::Mul<f32> for Quat {
    type Output = Quat;

    fn mul(self, scalar: f32) -> Quat {
        Quat::new(
            self.x * scalar,
            self.y * scalar,
            self.z * scalar,
            self.w * scalar,
        )
    }
}

impl std::ops::Add for Quat {
    type Output = Quat;

    fn add(self, other: Quat) -> Quat {
        Quat::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }
}

impl std::ops::Sub for Quat {
    type Output = Quat;

    fn sub(self, other: Quat) -> Quat {
        Quat::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.w - other.w,
        )
    }
}

impl std::ops::Neg for Quat {
    type Output = Quat;

    fn neg(self) -> Quat {
        Quat::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl std::fmt::Display for Quat {
    fn fmt(&self, out: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            out,
            "( {}, {}, {}; {} )",
            self.x, self.y, self.z, self.w,
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::alg::*;
    use crate::scalar;

    fn close(a: Vec3, b: Vec3, tolerance: f32) -> bool {
        let error = (a - b).mag();
        eprintln!("{} vs {}: error {}", a, b, error);
        error < tolerance
    }

    #[test]
    fn construct() {
        let quat = Quat::new(1., 1., 1., 1.);

        assert!(quat.x == 1. && quat.y == 1. && quat.z == 1. && quat.w == 1.);
        assert!(Vec4::from(quat) == Vec4::one());
        assert!(Quat::from(Vec4::one()) == quat);
        assert!(Quat::default() == Quat::identity());
    }

    #[test]
    fn norm_quat() {
        // Baseline
        let error = (Quat::identity().norm().mag() - 1.).abs();

        eprintln!("Error: {}", error);
        assert!(error < 0.005);

        let quat = Quat::from_vec3(Vec3::new(-1., 3., 5.));
        let error = (quat.norm().mag() - 1.).abs();

        eprintln!("Error: {}", error);
        assert!(error < 0.005);

        let zero = Quat::new(0., 0., 0., 0.);
        assert!(zero.norm() == zero);
    }

    #[test]
    fn conjugate() {
        let quat = Quat::new(1., 2., 3., 4.);
        assert!(quat.conjugate() == Quat::new(-1., -2., -3., 4.));
        assert!(quat.conjugate().conjugate() == quat);
    }

    #[test]
    fn mul_quat() {
        let i = Quat::new(1., 0., 0., 0.);
        let j = Quat::new(0., 1., 0., 0.);
        let k = Quat::new(0., 0., 1., 0.);

        assert!(i * j == k);
        assert!(j * i == -k);
        assert!(i * i == Quat::new(0., 0., 0., -1.));
        assert!(Quat::identity() * k == k);
    }

    #[test]
    fn composition_order() {
        let about_z = Quat::axis_angle(Vec3::new(0., 0., 1.), scalar::PI_2);
        let about_x = Quat::axis_angle(Vec3::right(), scalar::PI_2);

        // Right operand first: x -> y about z, then y -> z about x
        let rotated = (about_x * about_z) * Vec3::right();
        assert!(close(rotated, Vec3::new(0., 0., 1.), 0.001));

        let rotated = (about_z * about_x) * Vec3::right();
        assert!(close(rotated, Vec3::up(), 0.001));
    }

    #[test]
    fn rotate_vector() {
        let quat = Quat::axis_angle(Vec3::new(0., 0., 1.), scalar::PI_2);
        assert!(close(quat.rotate_vector(Vec3::right()), Vec3::up(), 0.001));

        // Non-unit quaternions scale as well
        let doubled = quat * 2.;
        let scaled = doubled.rotate_vector(Vec3::right());
        assert!(close(scaled, Vec3::up() * 4., 0.01));
    }

    #[test]
    fn convert_quat() {
        let quat = Quat::axis_angle(Vec3::new(0., 0.6, 0.8), 1.1);
        let vec = Vec3::new(-4., 0.5, 2.);

        let right = quat.to_mat_in::<RightHanded, RowMajor>();
        assert!(close(right * vec, quat * vec, 0.01));

        // Handedness flips the cross terms only
        let left = quat.to_mat_in::<LeftHanded, RowMajor>();
        assert!(left == right.transpose());

        for i in 0..3 {
            assert!(left.get(i, i) == right.get(i, i));
        }

        assert!(Quat::identity().to_mat() == Mat::identity());
    }

    #[test]
    fn look_rotation_general() {
        let from = Vec3::right();
        let to = Vec3::new(0., 3., 4.);
        let rotation = Quat::look_rotation(from, to);

        assert!(close(rotation * from, to.norm(), 0.01));
    }

    #[test]
    fn look_rotation_parallel() {
        let rotation = Quat::look_rotation(Vec3::up(), Vec3::up() * 5.);
        assert!(rotation == Quat::identity());

        let rotation = Quat::look_rotation(Vec3::zero(), Vec3::up());
        assert!(rotation == Quat::identity());
    }

    #[test]
    fn look_rotation_antiparallel() {
        for &from in &[Vec3::right(), Vec3::up(), Vec3::new(1., 2., 3.)] {
            let rotation = Quat::look_rotation(from, -from);

            assert!(rotation.w == 0.);
            assert!(!rotation.x.is_nan());
            assert!(rotation.vec().dot(from).abs() < 0.0001);
            assert!(close(rotation * from, -from, 0.05));
        }
    }

    #[test]
    fn slerp_endpoints() {
        let a = Quat::identity();
        let b = Quat::axis_angle(Vec3::up(), scalar::PI_2);

        let start = Quat::slerp(a, b, 0.);
        let end = Quat::slerp(a, b, 1.);

        assert!((start - a).mag() < 0.001);
        assert!((end - b).mag() < 0.001);

        let middle = Quat::slerp(a, b, 0.5);
        let expected = Quat::axis_angle(Vec3::up(), scalar::PI_4);
        assert!((middle - expected).mag() < 0.01);
    }

    #[test]
    fn slerp_shortest_path() {
        let a = Quat::identity();
        let b = Quat::axis_angle(Vec3::up(), scalar::PI_2);

        // Same rotation, opposite hemisphere
        let middle = Quat::slerp(a, -b, 0.5);
        let expected = Quat::axis_angle(Vec3::up(), scalar::PI_4);
        assert!((middle - expected).mag() < 0.01);

        let close_by = Quat::nlerp(a, -a, 0.5);
        assert!(!close_by.w.is_nan());
        assert!((close_by - a).mag() < 0.01);
    }
}
