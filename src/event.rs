//! Listener registries with scoped subscriptions, and the pointer events a
//! host forwards from the document while the palette marker is dragged.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Instant;

use crate::Point;

type Listener<E> = Box<dyn FnMut(&E)>;

struct Registry<E> {
    next_id: u64,
    listeners: Vec<(u64, Listener<E>)>,
    /// Listeners unsubscribed while an emit holds them.
    removed: Vec<u64>,
}

/// A single-threaded set of listeners for events of type `E`.
///
/// Cloning a hub gives another handle to the same listeners.
pub struct Hub<E> {
    registry: Rc<RefCell<Registry<E>>>,
    emitting: Rc<Cell<usize>>,
}

impl<E> Clone for Hub<E> {
    fn clone(&self) -> Self {
        Self {
            registry: Rc::clone(&self.registry),
            emitting: Rc::clone(&self.emitting),
        }
    }
}

impl<E> Default for Hub<E> {
    fn default() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                listeners: Vec::new(),
                removed: Vec::new(),
            })),
            emitting: Rc::new(Cell::new(0)),
        }
    }
}

impl<E: 'static> std::fmt::Debug for Hub<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hub").field("listeners", &self.len()).finish()
    }
}

impl<E: 'static> Hub<E> {
    /// Create a hub without listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. It is called for every emitted event until the
    /// returned [`Subscription`] is dropped.
    #[must_use = "dropping the subscription unregisters the listener"]
    pub fn subscribe(&self, listener: impl FnMut(&E) + 'static) -> Subscription {
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.listeners.push((id, Box::new(listener)));
            id
        };

        let registry: Weak<RefCell<Registry<E>>> = Rc::downgrade(&self.registry);
        let emitting = Rc::downgrade(&self.emitting);

        Subscription {
            release: Some(Box::new(move || {
                let Some(registry) = registry.upgrade() else {
                    return;
                };
                let mut registry = registry.borrow_mut();
                let before = registry.listeners.len();
                registry.listeners.retain(|(i, _)| *i != id);
                let busy = emitting.upgrade().map_or(false, |e| e.get() > 0);
                if registry.listeners.len() == before && busy {
                    registry.removed.push(id);
                }
            })),
        }
    }

    /// Call every listener with the event.
    ///
    /// Listeners may subscribe or unsubscribe while being called. New
    /// listeners are first called for the next event. An emit from inside a
    /// listener only reaches listeners added since the outer emit started.
    pub fn emit(&self, event: &E) {
        let mut listeners = std::mem::take(&mut self.registry.borrow_mut().listeners);
        self.emitting.set(self.emitting.get() + 1);

        for (_, listener) in listeners.iter_mut() {
            listener(event);
        }

        let depth = self.emitting.get() - 1;
        self.emitting.set(depth);

        let mut registry = self.registry.borrow_mut();
        listeners.retain(|(id, _)| !registry.removed.contains(id));
        if depth == 0 {
            registry.removed.clear();
        }
        // Listeners added during the emit go after the existing ones.
        listeners.append(&mut registry.listeners);
        registry.listeners = listeners;
    }

    /// The number of registered listeners.
    pub fn len(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    /// Whether no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Keeps a listener registered. Dropping it unregisters the listener.
#[must_use = "dropping the subscription unregisters the listener"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Keep the listener registered for as long as the hub lives.
    pub fn detach(mut self) {
        self.release = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("attached", &self.release.is_some())
            .finish()
    }
}

/// What happened to the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    /// The pointer moved.
    Move,
    /// The pointer button was released.
    Up,
}

/// A pointer event anywhere in the document, in palette coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerEvent {
    /// What happened.
    pub kind: PointerKind,
    /// Where it happened, relative to the palette's top-left corner.
    pub position: Point,
    /// When it happened.
    pub at: Instant,
}

impl PointerEvent {
    /// A pointer move.
    pub fn moved(position: Point, at: Instant) -> Self {
        Self {
            kind: PointerKind::Move,
            position,
            at,
        }
    }

    /// A pointer release.
    pub fn up(position: Point, at: Instant) -> Self {
        Self {
            kind: PointerKind::Up,
            position,
            at,
        }
    }
}
