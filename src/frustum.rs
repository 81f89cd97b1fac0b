//! View frustum culling.
//!
//! Planes are stored as `Vec4 { normal.xyz, distance }` with normals facing
//! into the visible volume, so a point is inside a plane's half-space when
//! `dot(normal, point) + distance >= 0`. The box and sphere tests are
//! conservative: they can accept volumes that miss the frustum near its
//! edges and corners, never reject ones that touch it.

use crate::alg::{Layout, Matrix, Vec3, Vec4};
use crate::scalar;

// Half-extent padding for the box test
const CUBE_PADDING: f32 = 0.001;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Frustum {
    pub planes: [Vec4; 6],
}

impl Frustum {
    pub const LEFT: usize = 0;
    pub const RIGHT: usize = 1;
    pub const BOTTOM: usize = 2;
    pub const TOP: usize = 3;
    pub const NEAR: usize = 4;
    pub const FAR: usize = 5;

    /// Gribb-Hartmann extraction from a combined `projection * view`
    pub fn new<L: Layout>(projection_view: &Matrix<L>) -> Frustum {
        let x = projection_view.row(0);
        let y = projection_view.row(1);
        let z = projection_view.row(2);
        let w = projection_view.row(3);

        Frustum {
            planes: [
                normalize_plane(w + x),
                normalize_plane(w - x),
                normalize_plane(w + y),
                normalize_plane(w - y),
                normalize_plane(w + z),
                normalize_plane(w - z),
            ],
        }
    }

    /// Signed distance of `point` from plane `index`
    #[inline]
    pub fn distance(&self, index: usize, point: Vec3) -> f32 {
        let plane = self.planes[index];
        plane.xyz().dot(point) + plane.w
    }

    pub fn point_in(&self, point: Vec3) -> bool {
        (0..6).all(|i| self.distance(i, point) >= 0.)
    }

    pub fn sphere_in(&self, center: Vec3, radius: f32) -> bool {
        (0..6).all(|i| self.distance(i, center) >= -radius)
    }

    /// Axis-aligned cube with edge length `size`
    pub fn cube_in(&self, center: Vec3, size: f32) -> bool {
        self.box_in(center, Vec3::one() * (size * 0.5))
    }

    /// Axis-aligned box. Rejected only when all eight corners are outside
    /// the same plane.
    pub fn box_in(&self, center: Vec3, half_extents: Vec3) -> bool {
        let half = half_extents + CUBE_PADDING;

        (0..6).all(|i| {
            corners(center, half).iter().any(|&corner| {
                self.distance(i, corner) >= 0.
            })
        })
    }
}

fn normalize_plane(plane: Vec4) -> Vec4 {
    let squared = plane.xyz().mag_squared();

    // Degenerate row combination; leave it alone
    if squared == 0. {
        return plane;
    }

    plane * scalar::inverse_sqrt(squared)
}

fn corners(center: Vec3, half: Vec3) -> [Vec3; 8] {
    let min = center - half;
    let max = center + half;

    [
        Vec3::new(min.x, min.y, min.z),
        Vec3::new(max.x, min.y, min.z),
        Vec3::new(min.x, max.y, min.z),
        Vec3::new(max.x, max.y, min.z),
        Vec3::new(min.x, min.y, max.z),
        Vec3::new(max.x, min.y, max.z),
        Vec3::new(min.x, max.y, max.z),
        Vec3::new(max.x, max.y, max.z),
    ]
}

#[cfg(test)]
mod tests {
    use crate::alg::*;
    use crate::frustum::*;
    use crate::scalar;

    fn camera() -> Frustum {
        let projection = Mat::perspective(scalar::PI_2, 800. / 600., 0.1, 1000.);
        let view = Mat::look_at(Vec3::new(0., 0., 13.), Vec3::zero(), Vec3::up());

        Frustum::new(&(projection * view))
    }

    #[test]
    fn planes_normalized() {
        let frustum = camera();

        for plane in frustum.planes.iter() {
            let error = (plane.xyz().mag() - 1.).abs();
            eprintln!("{}: error {}", plane, error);
            assert!(error < 0.01);
        }

        // Near plane faces away from the camera, down -Z
        assert!(frustum.planes[Frustum::NEAR].z < 0.);
        assert!(frustum.planes[Frustum::FAR].z > 0.);
    }

    #[test]
    fn points() {
        let frustum = camera();

        assert!(frustum.point_in(Vec3::zero()));
        assert!(frustum.point_in(Vec3::new(0., 0., -500.)));

        // Behind the camera, beyond far, off to the side
        assert!(!frustum.point_in(Vec3::new(0., 0., 20.)));
        assert!(!frustum.point_in(Vec3::new(0., 0., -2000.)));
        assert!(!frustum.point_in(Vec3::new(100., 0., 0.)));
    }

    #[test]
    fn cubes() {
        let frustum = camera();

        assert!(frustum.cube_in(Vec3::zero(), 1.));
        assert!(!frustum.cube_in(Vec3::new(100., 0., 0.), 1.));

        // Straddling the left plane
        let edge = -frustum.planes[Frustum::LEFT].w
            / frustum.planes[Frustum::LEFT].x;
        assert!(frustum.cube_in(Vec3::new(edge, 0., 0.), 1.));
    }

    #[test]
    fn spheres() {
        let frustum = camera();

        assert!(frustum.sphere_in(Vec3::zero(), 10.));
        assert!(!frustum.sphere_in(Vec3::new(100., 0., 0.), 10.));
        assert!(frustum.sphere_in(Vec3::new(100., 0., 0.), 100.));
    }

    #[test]
    fn layouts_agree() {
        let projection = Matrix::<ColumnMajor>::perspective(1.2, 1.5, 0.5, 50.);
        let frustum = Frustum::new(&projection);
        let row_frustum = Frustum::new(&projection.relayout::<RowMajor>());

        assert!(frustum == row_frustum);
    }
}
