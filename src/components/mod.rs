pub mod transform;
pub mod rigidbody;

use crate::entity;

pub trait Component {
    fn register(&mut self, entity: entity::Handle);
    fn count(&self) -> usize;
}

pub struct Container {
    pub transforms:  transform::Manager,
    pub rigidbodies: rigidbody::Manager,
}

impl Container {
    pub fn new(hint: usize) -> Container {
        Container {
            transforms:  transform::Manager::new(hint),
            rigidbodies: rigidbody::Manager::new(hint),
        }
    }

    /// Integrates every rigid body and syncs the results into its transform
    pub fn simulate(&mut self, delta: f32) {
        self.rigidbodies.simulate(delta, &mut self.transforms);
    }
}
