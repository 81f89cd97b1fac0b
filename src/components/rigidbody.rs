use crate::alg::{Quat, Vec3};
use crate::components;
use crate::config::{self, Settings};
use crate::entity;

/// Point mass with isotropic inertia. Mass or inertia of zero (or below)
/// means infinite: forces and torques then have no effect.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RigidBody {
    pub position:         Vec3,
    pub velocity:         Vec3,
    pub force:            Vec3,
    pub torque:           Vec3,
    pub angular_velocity: Vec3,
    pub mass:             f32,
    pub inertia:          f32,
    pub orientation:      Quat,
}

impl Default for RigidBody {
    fn default() -> RigidBody {
        RigidBody::new(Vec3::zero(), 0., 0.)
    }
}

impl RigidBody {
    pub fn new(position: Vec3, mass: f32, inertia: f32) -> RigidBody {
        RigidBody {
            position,
            velocity:         Vec3::zero(),
            force:            Vec3::zero(),
            torque:           Vec3::zero(),
            angular_velocity: Vec3::zero(),
            mass,
            inertia,
            orientation:      Quat::identity(),
        }
    }

    pub fn apply_force(&mut self, force: Vec3) {
        self.force = self.force + force;
    }

    pub fn apply_torque(&mut self, torque: Vec3) {
        self.torque = self.torque + torque;
    }

    /// Force at a world-space point; off-center forces also add torque
    pub fn apply_force_at_position(&mut self, force: Vec3, point: Vec3) {
        self.force = self.force + force;
        self.torque = self.torque + (point - self.position).cross(force);
    }

    pub fn integrate(&mut self, delta: f32) {
        self.integrate_with(delta, config::DEFAULT_ROTATION_THRESHOLD);
    }

    /// Semi-implicit Euler step. Rotations smaller than `threshold` radians
    /// are dropped for this step. Clears the force and torque accumulators.
    pub fn integrate_with(&mut self, delta: f32, threshold: f32) {
        /* Linear motion */

        let acceleration = self.force * inverse(self.mass);
        self.velocity = self.velocity + acceleration * delta;
        self.position = self.position + self.velocity * delta;

        /* Angular motion */

        let angular_acceleration = self.torque * inverse(self.inertia);
        self.angular_velocity = self.angular_velocity
            + angular_acceleration * delta;

        let angle = self.angular_velocity.mag() * delta;

        if angle > threshold {
            let spin = Quat::axis_angle(self.angular_velocity.norm(), angle);
            self.orientation = (spin * self.orientation).norm();
        }

        self.force = Vec3::zero();
        self.torque = Vec3::zero();
    }
}

#[inline]
fn inverse(value: f32) -> f32 {
    if value > 0. { 1. / value } else { 0. }
}

// Data layout assumes many physics objects (but may still be sparse)
pub struct Manager {
    bodies:    Vec<RigidBody>,
    active:    Vec<bool>,
    threshold: f32,
}

impl components::Component for Manager {
    fn register(&mut self, entity: entity::Handle) {
        debug_assert!(self.bodies.len() == self.active.len());

        let i = entity.get_index() as usize;

        // Resize array to fit new entity
        while i >= self.bodies.len() {
            self.bodies.push(RigidBody::default());
            self.active.push(false);
        }

        self.bodies[i] = RigidBody::default();
        self.active[i] = true;
    }

    fn count(&self) -> usize {
        self.active.iter().filter(|&&active| active).count()
    }
}

impl Manager {
    pub fn new(hint: usize) -> Manager {
        Manager::with_settings(hint, &config::SETTINGS)
    }

    pub fn with_settings(hint: usize, settings: &Settings) -> Manager {
        Manager {
            bodies:    Vec::with_capacity(hint),
            active:    Vec::with_capacity(hint),
            threshold: settings.rotation_threshold,
        }
    }

    pub fn set(&mut self, entity: entity::Handle, body: RigidBody) {
        let i = entity.get_index() as usize;
        debug_assert!(i < self.bodies.len());

        self.bodies[i] = body;
    }

    pub fn get(&self, entity: entity::Handle) -> &RigidBody {
        let i = entity.get_index() as usize;
        debug_assert!(i < self.bodies.len());

        &self.bodies[i]
    }

    pub fn get_mut(&mut self, entity: entity::Handle) -> &mut RigidBody {
        let i = entity.get_index() as usize;
        debug_assert!(i < self.bodies.len());

        &mut self.bodies[i]
    }

    /// Steps every registered body. Bodies whose entity also has a
    /// transform read their pose from it and write the result back.
    pub fn simulate(
        &mut self,
        delta: f32,
        transforms: &mut components::transform::Manager,
    ) {
        debug_assert!(self.bodies.len() == self.active.len());

        for i in 0..self.bodies.len() {
            if !self.active[i] {
                continue;
            }

            let linked = transforms.active_i(i);
            let body = &mut self.bodies[i];

            if linked {
                body.position = transforms.get_position_i(i);
                body.orientation = transforms.get_rotation_i(i);
            }

            body.integrate_with(delta, self.threshold);

            trace!(
                "body {}: position {} velocity {} orientation {}",
                i,
                body.position,
                body.velocity,
                body.orientation,
            );

            if linked {
                transforms.set_position_i(i, body.position);
                transforms.set_rotation_i(i, body.orientation);
            }
        }
    }
}
