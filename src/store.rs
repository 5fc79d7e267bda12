//! Where a picker keeps its current [`ColorState`].

use std::rc::Rc;

use crate::ColorState;

/// Storage for the current color state.
///
/// A picker reads the state through [`current`](Store::current) and replaces
/// it as a whole after every accepted update, so an implementation can keep
/// it in place or hand out immutable snapshots.
pub trait Store {
    /// The current state.
    fn current(&self) -> &ColorState;

    /// Replace the current state.
    fn replace(&mut self, state: ColorState);
}

impl Store for ColorState {
    fn current(&self) -> &ColorState {
        self
    }

    fn replace(&mut self, state: ColorState) {
        *self = state;
    }
}

/// A store of shared, immutable snapshots.
///
/// Every replacement creates a new snapshot and bumps the revision, so a host
/// can hold on to an older snapshot and compare revisions cheaply.
#[derive(Clone, Debug, Default)]
pub struct Snapshots {
    current: Rc<ColorState>,
    revision: u64,
}

impl Snapshots {
    /// The current snapshot.
    pub fn snapshot(&self) -> Rc<ColorState> {
        Rc::clone(&self.current)
    }

    /// How many times the state was replaced.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl From<ColorState> for Snapshots {
    fn from(state: ColorState) -> Self {
        Self {
            current: Rc::new(state),
            revision: 0,
        }
    }
}

impl Store for Snapshots {
    fn current(&self) -> &ColorState {
        &self.current
    }

    fn replace(&mut self, state: ColorState) {
        self.current = Rc::new(state);
        self.revision += 1;
    }
}
