use fnv::FnvHashSet;

/// Non-owning reference to a slot in the component managers
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct Handle {
    value: u32,
}

impl Handle {
    fn new(index: u32) -> Handle {
        Handle {
            value: index,
        }
    }

    pub fn get_index(self) -> u32 {
        self.value
    }
}

impl std::fmt::Display for Handle {
    fn fmt(&self, out: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(out, "{}", self.value)
    }
}

pub struct Manager {
    data:  FnvHashSet<Handle>,
    index: u32,
}

impl Manager {
    pub fn new(hint: usize) -> Manager {
        Manager {
            data:  FnvHashSet::with_capacity_and_hasher(
                hint,
                Default::default(),
            ),
            index: 0,
        }
    }

    pub fn add(&mut self) -> Handle {
        if self.data.len() == u32::max_value() as usize {
            panic!("Out of space for new entities!");
        }

        // Skip over live handles after wrapping around
        while self.check(Handle::new(self.index)) {
            self.index = self.index.wrapping_add(1);
        }

        let handle = Handle::new(self.index);
        self.data.insert(handle);

        // Offset for next time
        self.index = self.index.wrapping_add(1);

        handle
    }

    pub fn check(&self, handle: Handle) -> bool {
        self.data.contains(&handle)
    }

    // Idempotent--but access a handle after remove() at your own risk!
    pub fn remove(&mut self, handle: Handle) {
        self.data.remove(&handle);
    }

    pub fn count(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use crate::entity::*;

    #[test]
    fn add_remove() {
        let mut entities = Manager::new(4);

        let first = entities.add();
        let second = entities.add();

        assert!(first != second);
        assert!(entities.check(first));
        assert!(entities.count() == 2);

        entities.remove(first);
        entities.remove(first);

        assert!(!entities.check(first));
        assert!(entities.count() == 1);

        // Indices are not reused until wraparound
        let third = entities.add();
        assert!(third.get_index() == 2);
    }
}
