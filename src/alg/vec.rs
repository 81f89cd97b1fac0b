use crate::alg::{DefaultHandedness, Handedness};
use crate::error::MathError;
use crate::scalar;

// Component-wise arithmetic shared by every vector width
macro_rules! componentwise {
    ($t:ident { $($c:ident),+ }) => {
        impl std::ops::Add for $t {
            type Output = $t;

            fn add(self, other: $t) -> $t {
                $t { $($c: self.$c + other.$c),+ }
            }
        }

        impl std::ops::Add<f32> for $t {
            type Output = $t;

            fn add(self, scalar: f32) -> $t {
                $t { $($c: self.$c + scalar),+ }
            }
        }

        impl std::ops::Sub for $t {
            type Output = $t;

            fn sub(self, other: $t) -> $t {
                $t { $($c: self.$c - other.$c),+ }
            }
        }

        impl std::ops::Sub<f32> for $t {
            type Output = $t;

            fn sub(self, scalar: f32) -> $t {
                $t { $($c: self.$c - scalar),+ }
            }
        }

        impl std::ops::Mul for $t {
            type Output = $t;

            fn mul(self, other: $t) -> $t {
                $t { $($c: self.$c * other.$c),+ }
            }
        }

        impl std::ops::Mul<f32> for $t {
            type Output = $t;

            fn mul(self, scalar: f32) -> $t {
                $t { $($c: self.$c * scalar),+ }
            }
        }

        impl std::ops::Div for $t {
            type Output = $t;

            fn div(self, other: $t) -> $t {
                $t { $($c: self.$c / other.$c),+ }
            }
        }

        impl std::ops::Div<f32> for $t {
            type Output = $t;

            // One division, then multiply through
            fn div(self, scalar: f32) -> $t {
                let inverse = 1. / scalar;
                $t { $($c: self.$c * inverse),+ }
            }
        }

        impl std::ops::Neg for $t {
            type Output = $t;

            fn neg(self) -> $t {
                $t { $($c: -self.$c),+ }
            }
        }

        impl $t {
            /// Unclamped; extrapolates for `t` outside `[0, 1]`
            pub fn lerp(a: $t, b: $t, t: f32) -> $t {
                $t { $($c: a.$c + (b.$c - a.$c) * t),+ }
            }

            /// Sum of absolute component differences in multiples of `unit`.
            /// A zero unit counts as one.
            pub fn length_manhatten(a: $t, b: $t, unit: f32) -> f32 {
                let unit = if unit == 0. { 1. } else { unit };
                (0. $(+ scalar::abs(a.$c - b.$c))+) / unit
            }

            pub fn dot(self, other: $t) -> f32 {
                0. $(+ self.$c * other.$c)+
            }

            pub fn mag_squared(self) -> f32 {
                self.dot(self)
            }

            pub fn mag(self) -> f32 {
                scalar::sqrt(self.mag_squared())
            }

            pub fn dist(a: $t, b: $t) -> f32 {
                (a - b).mag()
            }
        }
    };
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[repr(C)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

componentwise!(Vec2 { x, y });

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Vec2 {
        Vec2 { x, y }
    }

    #[inline]
    pub fn zero() -> Vec2 {
        Vec2::new(0., 0.)
    }

    #[inline]
    pub fn one() -> Vec2 {
        Vec2::new(1., 1.)
    }

    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, out: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(out, "( {}, {} )", self.x, self.y)
    }
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[repr(C)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

componentwise!(Vec3 { x, y, z });

impl Vec3 {
    pub fn new(x: f32, y: f32, z: f32) -> Vec3 {
        Vec3 { x, y, z }
    }

    #[inline]
    pub fn right() -> Vec3 {
        Vec3::new(1., 0., 0.)
    }

    #[inline]
    pub fn up() -> Vec3 {
        Vec3::new(0., 1., 0.)
    }

    /// Camera-space forward for the default handedness
    #[inline]
    pub fn fwd() -> Vec3 {
        DefaultHandedness::forward()
    }

    #[inline]
    pub fn zero() -> Vec3 {
        Vec3::new(0., 0., 0.)
    }

    #[inline]
    pub fn one() -> Vec3 {
        Vec3::new(1., 1., 1.)
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Unit vector in the same direction. The zero vector maps to itself.
    pub fn norm(self) -> Vec3 {
        let squared = self.mag_squared();

        if squared == 0. {
            return Vec3::zero();
        }

        self * scalar::inverse_sqrt(squared)
    }

    pub fn try_norm(self) -> Result<Vec3, MathError> {
        if self.mag_squared() == 0. {
            debug!("normalizing zero-length vector");
            return Err(MathError::ZeroLength);
        }

        Ok(self.norm())
    }

    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
        incident - normal * (2. * incident.dot(normal))
    }

    /// Projection of `self` onto `onto`; undefined for a zero `onto`
    pub fn project(self, onto: Vec3) -> Vec3 {
        onto * (self.dot(onto) / onto.mag_squared())
    }

    /// Angle between two directions, in radians
    pub fn angle(a: Vec3, b: Vec3) -> f32 {
        let cosine = a.norm().dot(b.norm());
        scalar::acos(scalar::clamp(cosine, -1., 1.))
    }
}

impl std::fmt::Display for Vec3 {
    fn fmt(&self, out: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            out,
            "( {}, {}, {} )",
            self.x, self.y, self.z,
        )
    }
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[repr(C)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

componentwise!(Vec4 { x, y, z, w });

impl Vec4 {
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Vec4 {
        Vec4 { x, y, z, w }
    }

    pub fn from_vec3(vec: Vec3, w: f32) -> Vec4 {
        Vec4::new(vec.x, vec.y, vec.z, w)
    }

    #[inline]
    pub fn zero() -> Vec4 {
        Vec4::new(0., 0., 0., 0.)
    }

    #[inline]
    pub fn one() -> Vec4 {
        Vec4::new(1., 1., 1., 1.)
    }

    pub fn xyz(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

impl std::fmt::Display for Vec4 {
    fn fmt(&self, out: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            out,
            "( {}, {}, {}, {} )",
            self.x, self.y, self.z, self.w,
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::alg::*;
    use crate::scalar;

    use rand::{Rng, SeedableRng};
    use rand::rngs::StdRng;

    #[test]
    fn vec2_arithmetic() {
        let a = Vec2::new(1., 1.);
        let b = Vec2::one();

        assert!(a == b);
        assert!(a.to_array() == [1., 1.]);
        assert!((a + b) == Vec2::new(2., 2.));
        assert!(Vec2::length_manhatten(a, b, 1.) == 0.);
        assert!(Vec2::new(3., 4.).dot(Vec2::new(1., 2.)) == 11.);
    }

    #[test]
    fn vec3_arithmetic() {
        let a = Vec3::new(1., 1., 1.);
        let b = Vec3::one();
        let c = Vec3::new(2., 2., 2.);

        assert!(a == b);
        assert!(a.to_array() == [1., 1., 1.]);
        assert!(a + b == c);
        assert!(a - c == Vec3::new(-1., -1., -1.));
        assert!(a * c == c);
        assert!(c / c == a);
        assert!(c / 2. == a);
        assert!(a + 1. == c);
        assert!(c - 1. == a);
        assert!(-a == Vec3::new(-1., -1., -1.));
        assert!(a.cross(b) == Vec3::zero());
        assert!(a.dot(c) == 6.);
        assert!(Vec3::length_manhatten(a, c, 1.) == 3.);
        assert!(Vec3::length_manhatten(a, c, 0.5) == 6.);
        assert!(Vec3::length_manhatten(a, c, 0.) == 3.);
    }

    #[test]
    fn vec4_arithmetic() {
        let a = Vec4::new(1., 1., 1., 1.);
        let b = Vec4::one();

        assert!(a == b);
        assert!(a + b == Vec4::new(2., 2., 2., 2.));
        assert!(a - b == Vec4::zero());
        assert!(a * b == a);
        assert!(a / 0.5 == Vec4::new(2., 2., 2., 2.));
        assert!(Vec4::from_vec3(Vec3::up(), 1.).xyz() == Vec3::up());
        assert!(a.dot(b) == 4.);
    }

    #[test]
    fn cross_dot_reference() {
        let cross = Vec3::new(2., 3., 4.).cross(Vec3::new(5., 6., 7.));
        assert!(cross == Vec3::new(-3., 6., -3.));

        let dot = Vec3::new(1., 2., 3.).dot(Vec3::new(4., -5., 6.));
        assert!(dot == 12.);

        assert!(Vec3::right().cross(Vec3::up()) == Vec3::new(0., 0., 1.));
    }

    #[test]
    fn norm_vec() {
        // Baseline
        let error = (Vec3::up().norm().mag() - Vec3::up().mag()).abs();

        eprintln!("Error: {}", error);
        assert!(error < 0.005);

        let vec = Vec3::new(-1., 3., 5.);
        let error = (vec.norm().mag() - 1.).abs();

        eprintln!("Error: {}", error);
        assert!(error < 0.005);
    }

    #[test]
    fn norm_zero() {
        let zero = Vec3::zero().norm();

        assert!(zero == Vec3::zero());
        assert!(!zero.x.is_nan());
        assert!(Vec3::zero().try_norm().is_err());
        assert!(Vec3::up().try_norm().is_ok());
    }

    #[test]
    fn norm_idempotent() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..256 {
            let vec = Vec3::new(
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
            );

            if vec.mag_squared() < 1e-6 {
                continue;
            }

            let once = vec.norm();
            let twice = once.norm();
            let error = (twice - once).mag();

            assert!(error < 0.002, "{} vs {}", once, twice);
        }
    }

    #[test]
    fn lerp_extrapolates() {
        let a = Vec3::zero();
        let b = Vec3::new(2., 4., 6.);

        assert!(Vec3::lerp(a, b, 0.5) == Vec3::new(1., 2., 3.));
        assert!(Vec3::lerp(a, b, 2.) == Vec3::new(4., 8., 12.));
        assert!(Vec2::lerp(Vec2::zero(), Vec2::one(), -1.) == Vec2::new(-1., -1.));
    }

    #[test]
    fn reflect_project_angle() {
        let reflected = Vec3::reflect(Vec3::new(1., -1., 0.), Vec3::up());
        assert!(reflected == Vec3::new(1., 1., 0.));

        let projected = Vec3::new(3., 4., 5.).project(Vec3::new(2., 0., 0.));
        assert!(projected == Vec3::new(3., 0., 0.));

        let angle = Vec3::angle(Vec3::right(), Vec3::up());
        let error = scalar::abs(angle - scalar::PI_2);

        eprintln!("Error: {}", error);
        assert!(error < 0.005);

        // Advisory: normalization error dominates near-parallel inputs
        let parallel = Vec3::angle(Vec3::up(), Vec3::up() * 3.);
        eprintln!("Parallel angle: {}", parallel);
        assert!(parallel < 0.1);

        assert!(Vec3::angle(Vec3::up(), -Vec3::up()) > 3.);
    }

    #[test]
    fn distances() {
        let error = scalar::abs(
            Vec3::dist(Vec3::new(1., 2., 3.), Vec3::new(4., 6., 3.)) - 5.
        );

        eprintln!("Error: {}", error);
        assert!(error < 0.01);

        assert!(Vec3::dist(Vec3::one(), Vec3::one()) == 0.);
    }
}
