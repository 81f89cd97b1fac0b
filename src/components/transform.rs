use crate::alg::{Mat, Quat, Vec3};
use crate::components;
use crate::config::{self, Settings};
use crate::entity;
use crate::error::MathError;

/// Position, rotation and scale, optionally relative to a parent entity.
/// The parent link is a handle into a `Manager`, never an owning pointer.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale:    Vec3,
    pub parent:   Option<entity::Handle>,
}

impl Default for Transform {
    fn default() -> Transform {
        Transform {
            position: Vec3::zero(),
            rotation: Quat::identity(),
            scale:    Vec3::one(),
            parent:   None,
        }
    }
}

impl Transform {
    pub fn new(position: Vec3, rotation: Quat, scale: Vec3) -> Transform {
        Transform {
            position,
            rotation,
            scale,
            parent: None,
        }
    }

    /// `translation * rotation * scale`
    pub fn local_matrix(&self) -> Mat {
        Mat::translation(self.position)
            * self.rotation.to_mat()
            * Mat::scale(self.scale)
    }

    /// Local matrix composed under an already resolved parent matrix
    pub fn matrix(&self, parent: Option<Mat>) -> Mat {
        match parent {
            Some(parent) => parent * self.local_matrix(),
            None => self.local_matrix(),
        }
    }
}

// Data layout assumes that almost all entities will have this component
pub struct Manager {
    positions: Vec<Vec3>,
    rotations: Vec<Quat>,
    scales:    Vec<Vec3>,
    parents:   Vec<Option<entity::Handle>>,
    active:    Vec<bool>,
    max_depth: usize,
}

impl components::Component for Manager {
    fn register(&mut self, entity: entity::Handle) {
        debug_assert!(self.positions.len() == self.rotations.len());
        debug_assert!(self.rotations.len() == self.scales.len());
        debug_assert!(self.scales.len() == self.parents.len());
        debug_assert!(self.parents.len() == self.active.len());

        let i = entity.get_index() as usize;

        // Resize array to fit new entity
        while i >= self.positions.len() {
            self.positions.push(Vec3::zero());
            self.rotations.push(Quat::identity());
            self.scales.push(Vec3::one());
            self.parents.push(None);
            self.active.push(false);
        }

        self.positions[i] = Vec3::zero();
        self.rotations[i] = Quat::identity();
        self.scales[i] = Vec3::one();
        self.parents[i] = None;
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
            positions: Vec::with_capacity(hint),
            rotations: Vec::with_capacity(hint),
            scales:    Vec::with_capacity(hint),
            parents:   Vec::with_capacity(hint),
            active:    Vec::with_capacity(hint),
            max_depth: settings.hierarchy_depth,
        }
    }

    pub fn contains(&self, entity: entity::Handle) -> bool {
        let i = entity.get_index() as usize;
        i < self.active.len() && self.active[i]
    }

    pub fn set(
        &mut self,
        entity:   entity::Handle,
        position: Vec3,
        rotation: Quat,
        scale:    Vec3,
    ) {
        let i = entity.get_index() as usize;
        debug_assert!(i < self.positions.len());

        self.positions[i] = position;
        self.rotations[i] = rotation;
        self.scales[i] = scale;
    }

    pub fn set_position(&mut self, entity: entity::Handle, position: Vec3) {
        self.set_position_i(entity.get_index() as usize, position);
    }

    pub fn set_rotation(&mut self, entity: entity::Handle, rotation: Quat) {
        self.set_rotation_i(entity.get_index() as usize, rotation);
    }

    pub fn set_scale(&mut self, entity: entity::Handle, scale: Vec3) {
        let i = entity.get_index() as usize;
        debug_assert!(i < self.scales.len());

        self.scales[i] = scale;
    }

    /// Cycles are not rejected here; `matrix` reports them
    pub fn set_parent(
        &mut self,
        entity: entity::Handle,
        parent: Option<entity::Handle>,
    ) {
        let i = entity.get_index() as usize;
        debug_assert!(i < self.parents.len());

        self.parents[i] = parent;
    }

    pub fn get(&self, entity: entity::Handle) -> Transform {
        let i = entity.get_index() as usize;
        debug_assert!(i < self.positions.len());

        Transform {
            position: self.positions[i],
            rotation: self.rotations[i],
            scale:    self.scales[i],
            parent:   self.parents[i],
        }
    }

    pub fn get_position(&self, entity: entity::Handle) -> Vec3 {
        self.get_position_i(entity.get_index() as usize)
    }

    pub fn get_rotation(&self, entity: entity::Handle) -> Quat {
        self.get_rotation_i(entity.get_index() as usize)
    }

    /// World matrix: the parent chain composed down to `entity`
    pub fn matrix(&self, entity: entity::Handle) -> Result<Mat, MathError> {
        let i = self.index(entity)?;

        let mut result = self.local_matrix_i(i);
        let mut next = self.parents[i];
        let mut depth = 0;

        while let Some(parent) = next {
            depth += 1;

            if depth > self.max_depth {
                warn!(
                    "transform {} exceeds hierarchy depth {} (cycle?)",
                    entity,
                    self.max_depth,
                );

                return Err(MathError::HierarchyTooDeep {
                    entity,
                    limit: self.max_depth,
                });
            }

            let j = self.index(parent)?;
            result = self.local_matrix_i(j) * result;
            next = self.parents[j];
        }

        Ok(result)
    }

    fn index(&self, entity: entity::Handle) -> Result<usize, MathError> {
        if !self.contains(entity) {
            return Err(MathError::MissingEntity(entity));
        }

        Ok(entity.get_index() as usize)
    }

    fn local_matrix_i(&self, i: usize) -> Mat {
        Mat::translation(self.positions[i])
            * self.rotations[i].to_mat()
            * Mat::scale(self.scales[i])
    }

    pub(crate) fn active_i(&self, i: usize) -> bool {
        i < self.active.len() && self.active[i]
    }

    pub(crate) fn get_position_i(&self, i: usize) -> Vec3 {
        debug_assert!(i < self.positions.len());
        self.positions[i]
    }

    pub(crate) fn set_position_i(&mut self, i: usize, position: Vec3) {
        debug_assert!(i < self.positions.len());
        self.positions[i] = position;
    }

    pub(crate) fn get_rotation_i(&self, i: usize) -> Quat {
        debug_assert!(i < self.rotations.len());
        self.rotations[i]
    }

    pub(crate) fn set_rotation_i(&mut self, i: usize, rotation: Quat) {
        debug_assert!(i < self.rotations.len());
        self.rotations[i] = rotation;
    }
}

#[cfg(test)]
mod tests {
    use crate::alg::*;
    use crate::components::transform::*;
    use crate::components::Component;
    use crate::config::Settings;
    use crate::entity;
    use crate::error::MathError;
    use crate::scalar;

    fn setup(count: usize) -> (Manager, Vec<entity::Handle>) {
        let mut entities = entity::Manager::new(count);
        let mut transforms = Manager::with_settings(count, &Settings::default());

        let handles = (0..count).map(|_| {
            let handle = entities.add();
            transforms.register(handle);
            handle
        }).collect();

        (transforms, handles)
    }

    #[test]
    fn local_composition() {
        let transform = Transform::new(
            Vec3::new(1., 2., 3.),
            Quat::identity(),
            Vec3::new(2., 2., 2.),
        );

        let point = transform.local_matrix().transform_point(Vec3::one());
        assert!(point == Vec3::new(3., 4., 5.));

        assert!(Transform::default().local_matrix() == Mat::identity());
        assert!(transform.matrix(None) == transform.local_matrix());
    }

    #[test]
    fn scale_before_rotation() {
        let transform = Transform::new(
            Vec3::zero(),
            Quat::axis_angle(Vec3::new(0., 0., 1.), scalar::PI_2),
            Vec3::new(2., 1., 1.),
        );

        // Scaled along local x first, then turned onto y
        let point = transform.local_matrix().transform_point(Vec3::right());
        eprintln!("Point: {}", point);
        assert!((point - Vec3::new(0., 2., 0.)).mag() < 0.01);
    }

    #[test]
    fn hierarchy() {
        let (mut transforms, handles) = setup(3);
        let (root, middle, leaf) = (handles[0], handles[1], handles[2]);

        transforms.set_position(root, Vec3::new(10., 0., 0.));
        transforms.set_position(middle, Vec3::new(0., 5., 0.));
        transforms.set_scale(middle, Vec3::new(2., 2., 2.));
        transforms.set_position(leaf, Vec3::new(0., 0., 1.));

        transforms.set_parent(middle, Some(root));
        transforms.set_parent(leaf, Some(middle));

        let world = transforms.matrix(leaf).unwrap();
        let origin = world.transform_point(Vec3::zero());

        assert!(origin == Vec3::new(10., 5., 2.));
        assert!(transforms.get(leaf).parent == Some(middle));
        assert!(transforms.count() == 3);

        let parent = transforms.matrix(middle).unwrap();
        assert!(transforms.get(leaf).matrix(Some(parent)) == world);
    }

    #[test]
    fn cycle_reported() {
        let (mut transforms, handles) = setup(2);

        transforms.set_parent(handles[0], Some(handles[1]));
        transforms.set_parent(handles[1], Some(handles[0]));

        match transforms.matrix(handles[0]) {
            Err(MathError::HierarchyTooDeep { entity, limit }) => {
                assert!(entity == handles[0]);
                assert!(limit == 64);
            }

            _ => panic!("expected depth failure"),
        }
    }

    #[test]
    fn depth_limit_from_settings() {
        let mut entities = entity::Manager::new(4);
        let settings = Settings {
            hierarchy_depth: 1,
            ..Settings::default()
        };

        let mut transforms = Manager::with_settings(4, &settings);
        let handles: Vec<_> = (0..3).map(|_| {
            let handle = entities.add();
            transforms.register(handle);
            handle
        }).collect();

        transforms.set_parent(handles[1], Some(handles[0]));
        transforms.set_parent(handles[2], Some(handles[1]));

        assert!(transforms.matrix(handles[1]).is_ok());
        assert!(transforms.matrix(handles[2]).is_err());
    }

    #[test]
    fn missing_parent() {
        let mut entities = entity::Manager::new(4);
        let mut transforms = Manager::with_settings(4, &Settings::default());

        let child = entities.add();
        let orphan = entities.add();
        transforms.register(child);

        transforms.set_parent(child, Some(orphan));

        assert!(transforms.matrix(child) == Err(MathError::MissingEntity(orphan)));
        assert!(!transforms.contains(orphan));
    }
}
